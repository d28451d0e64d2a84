//! ui::output
//!
//! Output verbosity and display helpers.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag. The same
//! [`Verbosity`] value that gates this crate's own output is the ambient input
//! to the argument builder, which forwards it to grate as a `--verbosity` flag.

use std::fmt::Display;
use std::str::FromStr;

/// Output verbosity level.
///
/// Five levels, matching the granularity the wrapped tool distinguishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Quiet mode - errors only
    Quiet,
    /// Minimal mode - warnings and errors
    Minimal,
    /// Normal mode - standard output
    #[default]
    Normal,
    /// Verbose mode - extra detail
    Verbose,
    /// Diagnostic mode - full trace output
    Diagnostic,
}

impl Verbosity {
    /// Create verbosity from the shorthand CLI flags.
    ///
    /// An explicit `--verbosity` level always takes precedence over these;
    /// `quiet` wins over `debug` when both are set.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Diagnostic
        } else {
            Verbosity::Normal
        }
    }

    /// The grate log-level value this verbosity translates to.
    ///
    /// The table is exhaustive and frozen:
    ///
    /// | Verbosity  | grate value |
    /// |------------|-------------|
    /// | Quiet      | None        |
    /// | Minimal    | Warning     |
    /// | Normal     | Information |
    /// | Verbose    | Debug       |
    /// | Diagnostic | Trace       |
    pub fn grate_level(self) -> &'static str {
        match self {
            Verbosity::Quiet => "None",
            Verbosity::Minimal => "Warning",
            Verbosity::Normal => "Information",
            Verbosity::Verbose => "Debug",
            Verbosity::Diagnostic => "Trace",
        }
    }
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" => Ok(Verbosity::Quiet),
            "minimal" => Ok(Verbosity::Minimal),
            "normal" => Ok(Verbosity::Normal),
            "verbose" => Ok(Verbosity::Verbose),
            "diagnostic" => Ok(Verbosity::Diagnostic),
            other => Err(format!(
                "invalid verbosity '{}', expected one of: quiet, minimal, normal, verbose, diagnostic",
                other
            )),
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity > Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print a debug message (only at verbose levels and above).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity >= Verbosity::Verbose {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity > Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_table_is_exact() {
        assert_eq!(Verbosity::Quiet.grate_level(), "None");
        assert_eq!(Verbosity::Minimal.grate_level(), "Warning");
        assert_eq!(Verbosity::Normal.grate_level(), "Information");
        assert_eq!(Verbosity::Verbose.grate_level(), "Debug");
        assert_eq!(Verbosity::Diagnostic.grate_level(), "Trace");
    }

    #[test]
    fn from_flags_resolves_shorthands() {
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(true, false), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Diagnostic);
        // quiet wins over debug
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
    }

    #[test]
    fn parses_level_names_case_insensitively() {
        assert_eq!("quiet".parse::<Verbosity>().unwrap(), Verbosity::Quiet);
        assert_eq!("Minimal".parse::<Verbosity>().unwrap(), Verbosity::Minimal);
        assert_eq!("NORMAL".parse::<Verbosity>().unwrap(), Verbosity::Normal);
        assert_eq!("verbose".parse::<Verbosity>().unwrap(), Verbosity::Verbose);
        assert_eq!(
            "diagnostic".parse::<Verbosity>().unwrap(),
            Verbosity::Diagnostic
        );
        assert!("chatty".parse::<Verbosity>().is_err());
    }

    #[test]
    fn levels_are_ordered() {
        assert!(Verbosity::Quiet < Verbosity::Minimal);
        assert!(Verbosity::Normal < Verbosity::Verbose);
        assert!(Verbosity::Verbose < Verbosity::Diagnostic);
    }
}
