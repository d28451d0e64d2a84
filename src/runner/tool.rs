//! runner::tool
//!
//! The tool-execution boundary.
//!
//! # Design
//!
//! [`ToolRunner`] is the single doorway to process execution. The runner in
//! [`crate::runner`] hands it a finished argument list and an executable name;
//! everything above this trait stays a pure function and can be tested without
//! spawning anything (see [`crate::runner::mock`]).
//!
//! Quoting lives here, not in the argument builder: the builder emits raw
//! tokens, and [`join_args`] quotes tokens containing spaces or quotes when
//! rendering the diagnostic argument line. The actual spawn passes the token
//! vector straight to [`std::process::Command::args`], which needs no shell
//! quoting.

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

/// Errors from tool invocation.
#[derive(Debug, Clone, Error)]
pub enum ToolError {
    /// The process could not be started.
    #[error("failed to start {executable}: {message}")]
    Spawn {
        /// The executable that failed to start
        executable: String,
        /// The underlying OS error
        message: String,
    },

    /// The process exited with a non-zero status.
    ///
    /// The code is passed through as-is; this crate does not interpret
    /// grate's own exit codes.
    #[error("{executable} exited with status {code}")]
    ExitStatus {
        /// The executable that was run
        executable: String,
        /// The raw exit code
        code: i32,
    },

    /// The process was terminated by a signal before exiting.
    #[error("{executable} was terminated by a signal")]
    Terminated {
        /// The executable that was run
        executable: String,
    },
}

/// A completed tool invocation.
#[derive(Debug, Clone)]
pub struct ToolOutcome {
    /// The executable path as invoked.
    pub path: PathBuf,
    /// The argument tokens the tool was invoked with.
    pub args: Vec<String>,
    /// The exit code reported by the process.
    pub exit_code: i32,
}

impl ToolOutcome {
    /// The space-joined argument line, with tokens containing spaces or quotes
    /// double-quoted. For diagnostics and display only.
    pub fn args_line(&self) -> String {
        join_args(&self.args)
    }
}

/// Join argument tokens into a single display line.
///
/// Tokens containing spaces, tabs, or double quotes are wrapped in double
/// quotes with embedded quotes backslash-escaped. Other tokens pass through
/// verbatim, embedded `=` and `;` included.
pub fn join_args(args: &[String]) -> String {
    args.iter()
        .map(|token| quote_token(token))
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote_token(token: &str) -> String {
    if token.contains(' ') || token.contains('\t') || token.contains('"') {
        format!("\"{}\"", token.replace('"', "\\\""))
    } else {
        token.to_string()
    }
}

/// Trait for running an external tool with a prepared argument list.
///
/// The argument list is handed through unmodified. Implementations resolve the
/// executable, spawn it, and translate the outcome into a [`ToolOutcome`] or a
/// [`ToolError`].
pub trait ToolRunner {
    /// Run `executable` with `args`, waiting for it to finish.
    fn run(&self, executable: &str, args: &[String]) -> Result<ToolOutcome, ToolError>;
}

/// Tool runner backed by [`std::process::Command`].
///
/// By default the executable is resolved through `PATH`. An explicit tool path
/// overrides resolution entirely, and a working directory can be set for the
/// spawned process.
#[derive(Debug, Clone, Default)]
pub struct ProcessToolRunner {
    tool_path: Option<PathBuf>,
    working_dir: Option<PathBuf>,
}

impl ProcessToolRunner {
    /// Create a runner that resolves the tool through `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit tool path instead of `PATH` resolution.
    pub fn with_tool_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.tool_path = Some(path.into());
        self
    }

    /// Run the tool from the given working directory.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    fn resolve(&self, executable: &str) -> PathBuf {
        match &self.tool_path {
            Some(path) => path.clone(),
            None => PathBuf::from(executable),
        }
    }
}

impl ToolRunner for ProcessToolRunner {
    fn run(&self, executable: &str, args: &[String]) -> Result<ToolOutcome, ToolError> {
        let path = self.resolve(executable);
        let mut command = Command::new(&path);
        command.args(args);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        let status = command.status().map_err(|err| ToolError::Spawn {
            executable: display_path(&path),
            message: err.to_string(),
        })?;

        match status.code() {
            Some(0) => Ok(ToolOutcome {
                path,
                args: args.to_vec(),
                exit_code: 0,
            }),
            Some(code) => Err(ToolError::ExitStatus {
                executable: display_path(&path),
                code,
            }),
            None => Err(ToolError::Terminated {
                executable: display_path(&path),
            }),
        }
    }
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_tokens_join_unquoted() {
        let args = vec![
            "--drop".to_string(),
            "--connectionstring=server=foo;db=bar".to_string(),
        ];
        assert_eq!(join_args(&args), "--drop --connectionstring=server=foo;db=bar");
    }

    #[test]
    fn tokens_with_spaces_are_quoted() {
        let args = vec!["--restore=/backs/my restore.bak".to_string()];
        assert_eq!(join_args(&args), "\"--restore=/backs/my restore.bak\"");
    }

    #[test]
    fn embedded_quotes_are_escaped() {
        let args = vec!["--schemaname=a\"b".to_string()];
        assert_eq!(join_args(&args), "\"--schemaname=a\\\"b\"");
    }

    #[test]
    fn spawn_failure_for_missing_executable() {
        let runner = ProcessToolRunner::new().with_tool_path("/nonexistent/grate-test-binary");
        let result = runner.run("grate", &["--verbosity=None".to_string()]);
        assert!(matches!(result, Err(ToolError::Spawn { .. })));
    }
}
