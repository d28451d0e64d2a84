//! config
//!
//! Settings file loading.
//!
//! # Overview
//!
//! Settings may be pre-populated from a TOML file before CLI flags are
//! overlaid. Precedence, later overrides earlier:
//!
//! 1. Default values (everything unset)
//! 2. `grate.toml` in the working directory, or the file named by `--config`
//! 3. CLI flags (overlaid by the cli layer, not here)
//!
//! A missing `grate.toml` in the working directory is not an error; a missing
//! file explicitly named by `--config` is.
//!
//! # Example
//!
//! ```toml
//! connection_string = "server=localhost;db=app"
//! sql_files_directory = "db/migrations"
//! with_transaction = true
//!
//! [user_tokens]
//! environment = "staging"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::settings::GrateSettings;

/// Default settings file name, searched in the working directory.
pub const CONFIG_FILE_NAME: &str = "grate.toml";

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly named settings file does not exist.
    #[error("settings file not found: {path}")]
    NotFound {
        /// The path that was requested
        path: PathBuf,
    },

    /// The settings file could not be read.
    #[error("failed to read {path}: {message}")]
    Io {
        /// The file being read
        path: PathBuf,
        /// The underlying OS error
        message: String,
    },

    /// The settings file is not valid TOML for the settings schema.
    #[error("failed to parse {path}: {message}")]
    Parse {
        /// The file being parsed
        path: PathBuf,
        /// The parser's diagnostic
        message: String,
    },
}

/// Load settings from a file.
///
/// With `explicit` set, that file must exist and parse. Otherwise
/// `grate.toml` in `cwd` is used when present, and defaults are returned when
/// it is not.
pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<GrateSettings, ConfigError> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            read_file(path)
        }
        None => {
            let path = cwd.join(CONFIG_FILE_NAME);
            if path.exists() {
                read_file(&path)
            } else {
                Ok(GrateSettings::default())
            }
        }
    }
}

fn read_file(path: &Path) -> Result<GrateSettings, ConfigError> {
    let text = fs::read_to_string(path).map_err(|err| ConfigError::Io {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    toml::from_str(&text).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn missing_default_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = load(None, dir.path()).unwrap();
        assert_eq!(settings, GrateSettings::default());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.toml");
        let result = load(Some(&path), dir.path());
        assert!(matches!(result, Err(ConfigError::NotFound { .. })));
    }

    #[test]
    fn loads_default_file_from_cwd() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "connection_string = \"server=foo;db=bar\"\ndrop = true\n",
        )
        .unwrap();

        let settings = load(None, dir.path()).unwrap();
        assert_eq!(
            settings.connection_string.as_deref(),
            Some("server=foo;db=bar")
        );
        assert!(settings.drop);
    }

    #[test]
    fn parse_failure_reports_the_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "drop = \"not a bool\"\n").unwrap();

        match load(Some(&path), dir.path()) {
            Err(ConfigError::Parse { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
