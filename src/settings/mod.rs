//! settings
//!
//! The grate settings model.
//!
//! # Design
//!
//! [`GrateSettings`] is a plain data holder: every field maps to exactly one
//! grate command-line flag, and every field except the connection string is
//! optional. No validation happens here - the execution boundary in
//! [`crate::runner`] checks the connection-string precondition, and the
//! builder in [`crate::invocation`] silently omits flags for unset fields.
//!
//! The model derives serde so the [`crate::config`] layer can populate it from
//! a TOML file before CLI flags are overlaid.

pub mod tokens;

pub use tokens::UserTokens;

use serde::{Deserialize, Serialize};

/// All user-configurable grate options.
///
/// Boolean fields emit a bare presence flag when true and nothing when false.
/// Optional fields emit a `--name=value` flag when set and non-empty.
///
/// # Example
///
/// ```
/// use grate_runner::settings::GrateSettings;
///
/// let mut settings = GrateSettings::new();
/// settings.connection_string = Some("server=localhost;db=app".to_string());
/// settings.sql_files_directory = Some("db/migrations".to_string());
/// settings.with_transaction = true;
/// settings.set_user_token("environment", "staging");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GrateSettings {
    // Execution flags. Emitted as bare flags, in the frozen order defined by
    // the argument builder, not in field order.
    /// Drop the database before running migrations (`--drop`)
    pub drop: bool,

    /// Report what would run without changing the database (`--dryrun`)
    pub dry_run: bool,

    /// Silent mode - no prompts (`--silent`)
    pub silent: bool,

    /// Baseline: record scripts as run without executing them (`--baseline`)
    pub baseline: bool,

    /// Re-run all any-time scripts even if unchanged (`--runallanytimescripts`)
    pub run_all_any_time_scripts: bool,

    /// Disable token replacement in scripts (`--disabletokens`)
    pub disable_token_replacement: bool,

    /// Warn instead of failing when a one-time script changes
    /// (`--warnononetimescriptchanges`)
    pub warn_on_one_time_script_changes: bool,

    /// Warn and ignore when a one-time script changes
    /// (`--warnandignoreononetimescriptchanges`)
    pub warn_and_ignore_on_one_time_script_changes: bool,

    /// Wrap the whole migration in a transaction (`--transaction`)
    pub with_transaction: bool,

    /// Skip storing script text in the run history (`--donotstorescriptsruntext`)
    pub do_not_store_scripts_run_text: bool,

    /// Only check whether the database is up to date (`--isuptodate`)
    pub is_up_to_date: bool,

    // Database connection group.
    /// Connection string for the target database (`--connectionstring`).
    ///
    /// The one required field: the runner refuses to spawn without it.
    pub connection_string: Option<String>,

    /// Admin connection string, used to create the database
    /// (`--adminconnectionstring`)
    pub connection_string_admin: Option<String>,

    /// Command timeout in seconds (`--commandtimeout`)
    pub command_timeout: Option<i32>,

    /// Admin command timeout in seconds (`--admincommandtimeout`)
    pub command_timeout_admin: Option<i32>,

    /// Schema for grate's run-tracking tables (`--schemaname`)
    pub schema_name: Option<String>,

    /// Access token for token-based authentication (`--accesstoken`)
    pub access_token: Option<String>,

    /// Backup file to restore before migrating (`--restore`)
    pub restore: Option<String>,

    // Grate/migration group.
    /// Database type identifier (`--databasetype`)
    pub database_type: Option<String>,

    /// Target environment name (`--environment`)
    pub environment: Option<String>,

    /// Output path for logs and change artifacts (`--outputPath`)
    pub output_path: Option<String>,

    /// Directory holding the SQL scripts (`--sqlfilesdirectory`)
    pub sql_files_directory: Option<String>,

    /// Version stamp for this migration run (`--version`)
    pub version: Option<String>,

    /// Folder configuration as semicolon-separated key=value pairs
    /// (`--folders`)
    pub folders: Option<String>,

    /// Source-control repository path recorded in the run history
    /// (`--repositorypath`)
    pub repository_path: Option<String>,

    /// User tokens substituted into scripts, one `--usertokens` flag each
    pub user_tokens: UserTokens,
}

impl GrateSettings {
    /// Create an empty settings model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or overwrite a user token by name.
    ///
    /// Behaves identically to writing into [`GrateSettings::user_tokens`]
    /// directly: last write wins for a given key.
    pub fn set_user_token(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.user_tokens.set(key, value);
    }

    /// Whether a non-empty connection string is set.
    pub fn has_connection_string(&self) -> bool {
        self.connection_string
            .as_deref()
            .is_some_and(|cs| !cs.is_empty())
    }
}
