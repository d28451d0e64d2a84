//! grate-runner - a Rust wrapper around the grate database migration tool
//!
//! grate-runner translates a structured settings model into the ordered
//! command-line argument list that the external `grate` executable expects,
//! then spawns it and reports the outcome.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to the runner)
//! - [`settings`] - The settings model: plain data, no behavior beyond token merging
//! - [`invocation`] - Pure settings-to-arguments translation
//! - [`runner`] - Execution boundary: tool spawning behind a mockable trait
//! - [`platform`] - Platform-family classification for executable naming
//! - [`config`] - Optional TOML settings file loading
//! - [`ui`] - Verbosity levels and output utilities
//!
//! # Correctness Invariants
//!
//! grate-runner maintains the following invariants:
//!
//! 1. Argument order is a frozen contract: boolean flags in a fixed ranking,
//!    then key-value flags in a fixed ranking, then user tokens in insertion
//!    order, then the verbosity flag as the final token
//! 2. Translation is pure and idempotent: the same settings always produce
//!    byte-identical argument lists
//! 3. The connection-string precondition is checked before any argument is
//!    built and before any process is spawned

pub mod cli;
pub mod config;
pub mod invocation;
pub mod platform;
pub mod runner;
pub mod settings;
pub mod ui;
