//! runner::mock
//!
//! Mock tool runner for deterministic testing.
//!
//! # Design
//!
//! The mock records every invocation (executable name plus argument tokens)
//! and returns a configurable outcome, so tests can assert both what would
//! have been spawned and that nothing was spawned at all on precondition
//! failures.
//!
//! # Example
//!
//! ```
//! use grate_runner::runner::{MockToolRunner, ToolRunner};
//!
//! let mock = MockToolRunner::new();
//! mock.run("grate", &["--verbosity=None".to_string()]).unwrap();
//!
//! let invocation = mock.last_invocation().unwrap();
//! assert_eq!(invocation.executable, "grate");
//! assert_eq!(invocation.args, vec!["--verbosity=None".to_string()]);
//! ```

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use super::tool::{ToolError, ToolOutcome, ToolRunner};

/// A recorded tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The executable name the runner asked for.
    pub executable: String,
    /// The argument tokens, verbatim.
    pub args: Vec<String>,
}

/// Mock tool runner for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state, so
/// a test can hold one clone and hand another to the runner under test.
#[derive(Debug, Clone, Default)]
pub struct MockToolRunner {
    inner: Arc<Mutex<MockInner>>,
}

#[derive(Debug, Default)]
struct MockInner {
    invocations: Vec<Invocation>,
    failure: Option<ToolError>,
}

impl MockToolRunner {
    /// Create a mock that succeeds with exit code 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent invocations fail with the given error.
    ///
    /// The invocation is still recorded before the failure is returned.
    pub fn set_failure(&self, error: ToolError) {
        self.inner.lock().unwrap().failure = Some(error);
    }

    /// All recorded invocations, oldest first.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.inner.lock().unwrap().invocations.clone()
    }

    /// The most recent invocation, if any.
    pub fn last_invocation(&self) -> Option<Invocation> {
        self.inner.lock().unwrap().invocations.last().cloned()
    }

    /// Number of recorded invocations.
    pub fn invocation_count(&self) -> usize {
        self.inner.lock().unwrap().invocations.len()
    }
}

impl ToolRunner for MockToolRunner {
    fn run(&self, executable: &str, args: &[String]) -> Result<ToolOutcome, ToolError> {
        let mut inner = self.inner.lock().unwrap();
        inner.invocations.push(Invocation {
            executable: executable.to_string(),
            args: args.to_vec(),
        });

        if let Some(error) = inner.failure.clone() {
            return Err(error);
        }

        Ok(ToolOutcome {
            path: PathBuf::from(executable),
            args: args.to_vec(),
            exit_code: 0,
        })
    }
}
