//! runner
//!
//! The grate execution boundary.
//!
//! # Runner Contract
//!
//! [`GrateRunner::run`] MUST, in order:
//!
//! 1. Fail with [`RunError::MissingSettings`] when no settings model was
//!    supplied - before any argument construction or spawn attempt
//! 2. Fail with [`RunError::MissingConnectionString`] when the connection
//!    string is absent or empty - before building arguments, before spawning
//! 3. Build the argument list via [`crate::invocation::build_arguments`]
//! 4. Delegate to the [`ToolRunner`] with the platform-appropriate executable
//!    name, passing the argument list through unmodified
//! 5. Surface the tool outcome or error as-is; grate's exit codes are never
//!    interpreted here
//!
//! # Example
//!
//! ```
//! use grate_runner::platform::PlatformFamily;
//! use grate_runner::runner::{GrateRunner, MockToolRunner};
//! use grate_runner::settings::GrateSettings;
//!
//! let mut settings = GrateSettings::new();
//! settings.connection_string = Some("server=localhost;db=app".to_string());
//!
//! let runner = GrateRunner::new(MockToolRunner::new())
//!     .with_platform(PlatformFamily::Unix)
//!     .with_settings(settings);
//! let outcome = runner.run().unwrap();
//! assert_eq!(outcome.path.as_os_str(), "grate");
//! ```

pub mod mock;
pub mod tool;

pub use mock::{Invocation, MockToolRunner};
pub use tool::{join_args, ProcessToolRunner, ToolError, ToolOutcome, ToolRunner};

use thiserror::Error;

use crate::invocation::build_arguments;
use crate::platform::PlatformFamily;
use crate::settings::GrateSettings;
use crate::ui::Verbosity;

/// Errors from running grate.
#[derive(Debug, Error)]
pub enum RunError {
    /// No settings model was supplied before `run` (invalid usage).
    #[error("no grate settings were supplied")]
    MissingSettings,

    /// The one required field is absent.
    #[error("connection string is required but was not set")]
    MissingConnectionString,

    /// The tool could not be started or reported failure.
    #[error(transparent)]
    Tool(#[from] ToolError),
}

/// The runner, to run the tool.
///
/// Holds the execution collaborators (tool runner, platform family, ambient
/// verbosity) and an optional settings model. Construct once per invocation,
/// supply settings, then call [`GrateRunner::run`].
pub struct GrateRunner<T: ToolRunner> {
    tool: T,
    platform: PlatformFamily,
    verbosity: Verbosity,
    settings: Option<GrateSettings>,
}

impl<T: ToolRunner> GrateRunner<T> {
    /// Create a runner for the current platform with normal verbosity and no
    /// settings.
    pub fn new(tool: T) -> Self {
        Self {
            tool,
            platform: PlatformFamily::current(),
            verbosity: Verbosity::default(),
            settings: None,
        }
    }

    /// Override the platform family (selects `grate` vs `grate.exe`).
    pub fn with_platform(mut self, platform: PlatformFamily) -> Self {
        self.platform = platform;
        self
    }

    /// Set the ambient verbosity forwarded to grate.
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Supply the settings model.
    pub fn with_settings(mut self, settings: GrateSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Build the argument list this runner would spawn with, without spawning.
    ///
    /// Enforces the same preconditions as [`GrateRunner::run`].
    pub fn arguments(&self) -> Result<Vec<String>, RunError> {
        let settings = self.checked_settings()?;
        Ok(build_arguments(settings, self.verbosity))
    }

    /// The executable name for this runner's platform family.
    pub fn executable_name(&self) -> &'static str {
        self.platform.executable_name()
    }

    /// Run grate with the supplied settings.
    pub fn run(&self) -> Result<ToolOutcome, RunError> {
        let settings = self.checked_settings()?;
        let args = build_arguments(settings, self.verbosity);
        let outcome = self.tool.run(self.platform.executable_name(), &args)?;
        Ok(outcome)
    }

    /// Resolve the settings model, enforcing both preconditions.
    fn checked_settings(&self) -> Result<&GrateSettings, RunError> {
        let settings = self.settings.as_ref().ok_or(RunError::MissingSettings)?;
        if !settings.has_connection_string() {
            return Err(RunError::MissingConnectionString);
        }
        Ok(settings)
    }
}
