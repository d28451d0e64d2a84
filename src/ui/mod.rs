//! ui
//!
//! User-facing output utilities.
//!
//! # Responsibilities
//!
//! - Define the five-level [`Verbosity`] ambient setting and its translation
//!   to grate's own log-level values
//! - Provide verbosity-gated print helpers for the CLI layer

pub mod output;

pub use output::Verbosity;
