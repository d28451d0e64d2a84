//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--config <path>`: Settings file to load
//! - `--quiet` / `-q`: Minimal output (grate verbosity None)
//! - `--debug`: Trace output (grate verbosity Trace)
//! - `--verbosity <level>`: Explicit verbosity, wins over the shorthands
//! - `--tool-path <path>`: Explicit path to the grate executable

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};

use crate::settings::GrateSettings;
use crate::ui::Verbosity;

/// grate-runner - run grate database migrations from a settings model
#[derive(Parser, Debug)]
#[command(name = "grate-runner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if grate-runner was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Settings file to load (defaults to ./grate.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Minimal output; grate verbosity None
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Trace output; grate verbosity Trace
    #[arg(long, global = true)]
    pub debug: bool,

    /// Explicit verbosity level: quiet, minimal, normal, verbose, diagnostic
    #[arg(long, global = true, value_name = "LEVEL")]
    pub verbosity: Option<Verbosity>,

    /// Explicit path to the grate executable (skips PATH resolution)
    #[arg(long, global = true, value_name = "PATH")]
    pub tool_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Resolve the ambient verbosity from the flags.
    ///
    /// An explicit `--verbosity` wins; otherwise `--quiet` / `--debug`
    /// shorthands apply, defaulting to normal.
    pub fn effective_verbosity(&self) -> Verbosity {
        self.verbosity
            .unwrap_or_else(|| Verbosity::from_flags(self.quiet, self.debug))
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run grate with the configured settings
    Run(SettingsFlags),

    /// Print the argument list that `run` would use, without running grate
    Args {
        #[command(flatten)]
        settings: SettingsFlags,

        /// Emit the argument list as a JSON array
        #[arg(long)]
        json: bool,
    },
}

/// Settings flags, mirroring the settings model 1:1.
///
/// Flags overlay values loaded from the settings file: a flag that was given
/// wins, a flag that was not leaves the file's value in place.
#[derive(Args, Debug, Default)]
pub struct SettingsFlags {
    /// Drop the database before running migrations
    #[arg(long)]
    pub drop: bool,

    /// Report what would run without changing the database
    #[arg(long)]
    pub dry_run: bool,

    /// Silent mode - no prompts
    #[arg(long)]
    pub silent: bool,

    /// Record scripts as run without executing them
    #[arg(long)]
    pub baseline: bool,

    /// Re-run all any-time scripts even if unchanged
    #[arg(long)]
    pub run_all_any_time_scripts: bool,

    /// Disable token replacement in scripts
    #[arg(long)]
    pub disable_token_replacement: bool,

    /// Warn instead of failing when a one-time script changes
    #[arg(long)]
    pub warn_on_one_time_script_changes: bool,

    /// Warn and ignore when a one-time script changes
    #[arg(long)]
    pub warn_and_ignore_on_one_time_script_changes: bool,

    /// Wrap the whole migration in a transaction
    #[arg(long)]
    pub transaction: bool,

    /// Skip storing script text in the run history
    #[arg(long)]
    pub do_not_store_scripts_run_text: bool,

    /// Only check whether the database is up to date
    #[arg(long)]
    pub is_up_to_date: bool,

    /// Connection string for the target database
    #[arg(long, value_name = "CONNECTION")]
    pub connection_string: Option<String>,

    /// Admin connection string, used to create the database
    #[arg(long, value_name = "CONNECTION")]
    pub admin_connection_string: Option<String>,

    /// Command timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub command_timeout: Option<i32>,

    /// Admin command timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub admin_command_timeout: Option<i32>,

    /// Schema for grate's run-tracking tables
    #[arg(long, value_name = "SCHEMA")]
    pub schema_name: Option<String>,

    /// Access token for token-based authentication
    #[arg(long, value_name = "TOKEN")]
    pub access_token: Option<String>,

    /// Backup file to restore before migrating
    #[arg(long, value_name = "PATH")]
    pub restore: Option<String>,

    /// Database type identifier
    #[arg(long, value_name = "TYPE")]
    pub database_type: Option<String>,

    /// Target environment name
    #[arg(long, value_name = "NAME")]
    pub environment: Option<String>,

    /// Output path for logs and change artifacts
    #[arg(long, value_name = "PATH")]
    pub output_path: Option<String>,

    /// Directory holding the SQL scripts
    #[arg(long, value_name = "DIR")]
    pub sql_files_directory: Option<String>,

    /// Version stamp for this migration run
    #[arg(long, value_name = "VERSION")]
    pub version: Option<String>,

    /// Folder configuration as semicolon-separated key=value pairs
    #[arg(long, value_name = "FOLDERS")]
    pub folders: Option<String>,

    /// Source-control repository path recorded in the run history
    #[arg(long, value_name = "PATH")]
    pub repository_path: Option<String>,

    /// User token as KEY=VALUE (repeatable; later keys overwrite earlier ones)
    #[arg(long = "user-token", value_name = "KEY=VALUE")]
    pub user_tokens: Vec<String>,
}

impl SettingsFlags {
    /// Overlay these flags onto `settings` (flags win over the file).
    pub fn apply(&self, settings: &mut GrateSettings) -> Result<()> {
        apply_flag(&mut settings.drop, self.drop);
        apply_flag(&mut settings.dry_run, self.dry_run);
        apply_flag(&mut settings.silent, self.silent);
        apply_flag(&mut settings.baseline, self.baseline);
        apply_flag(
            &mut settings.run_all_any_time_scripts,
            self.run_all_any_time_scripts,
        );
        apply_flag(
            &mut settings.disable_token_replacement,
            self.disable_token_replacement,
        );
        apply_flag(
            &mut settings.warn_on_one_time_script_changes,
            self.warn_on_one_time_script_changes,
        );
        apply_flag(
            &mut settings.warn_and_ignore_on_one_time_script_changes,
            self.warn_and_ignore_on_one_time_script_changes,
        );
        apply_flag(&mut settings.with_transaction, self.transaction);
        apply_flag(
            &mut settings.do_not_store_scripts_run_text,
            self.do_not_store_scripts_run_text,
        );
        apply_flag(&mut settings.is_up_to_date, self.is_up_to_date);

        apply_value(&mut settings.connection_string, &self.connection_string);
        apply_value(
            &mut settings.connection_string_admin,
            &self.admin_connection_string,
        );
        apply_value(&mut settings.command_timeout, &self.command_timeout);
        apply_value(
            &mut settings.command_timeout_admin,
            &self.admin_command_timeout,
        );
        apply_value(&mut settings.schema_name, &self.schema_name);
        apply_value(&mut settings.access_token, &self.access_token);
        apply_value(&mut settings.restore, &self.restore);
        apply_value(&mut settings.database_type, &self.database_type);
        apply_value(&mut settings.environment, &self.environment);
        apply_value(&mut settings.output_path, &self.output_path);
        apply_value(&mut settings.sql_files_directory, &self.sql_files_directory);
        apply_value(&mut settings.version, &self.version);
        apply_value(&mut settings.folders, &self.folders);
        apply_value(&mut settings.repository_path, &self.repository_path);

        for raw in &self.user_tokens {
            let (key, value) = parse_key_value(raw)?;
            settings.set_user_token(key, value);
        }

        Ok(())
    }
}

/// A set boolean flag turns the setting on; an unset one leaves it alone.
fn apply_flag(target: &mut bool, flag: bool) {
    if flag {
        *target = true;
    }
}

/// A given value flag overrides the setting; an absent one leaves it alone.
fn apply_value<T: Clone>(target: &mut Option<T>, flag: &Option<T>) {
    if let Some(value) = flag {
        *target = Some(value.clone());
    }
}

/// Split a `KEY=VALUE` token at the first `=`.
///
/// The value may itself contain `=` characters; only the first one separates.
fn parse_key_value(raw: &str) -> Result<(&str, &str)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => bail!("invalid user token '{}': expected KEY=VALUE", raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn explicit_verbosity_wins_over_shorthands() {
        let cli = Cli::parse_from(["grate-runner", "--quiet", "--verbosity", "verbose", "run"]);
        assert_eq!(cli.effective_verbosity(), Verbosity::Verbose);
    }

    #[test]
    fn quiet_shorthand_resolves_when_no_explicit_level() {
        let cli = Cli::parse_from(["grate-runner", "--quiet", "run"]);
        assert_eq!(cli.effective_verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn flags_override_file_values() {
        let mut settings = GrateSettings::new();
        settings.environment = Some("DEV".to_string());
        settings.silent = true;

        let flags = SettingsFlags {
            environment: Some("STAGING".to_string()),
            drop: true,
            ..Default::default()
        };
        flags.apply(&mut settings).unwrap();

        assert_eq!(settings.environment.as_deref(), Some("STAGING"));
        assert!(settings.drop);
        // unset flags leave file values alone
        assert!(settings.silent);
    }

    #[test]
    fn user_token_flags_merge_into_settings() {
        let mut settings = GrateSettings::new();
        settings.set_user_token("a", "apple");

        let flags = SettingsFlags {
            user_tokens: vec!["b=banana".to_string(), "a=apricot".to_string()],
            ..Default::default()
        };
        flags.apply(&mut settings).unwrap();

        assert_eq!(settings.user_tokens.get("a"), Some("apricot"));
        assert_eq!(settings.user_tokens.get("b"), Some("banana"));
    }

    #[test]
    fn user_token_value_may_contain_equals() {
        let (key, value) = parse_key_value("conn=server=foo;db=bar").unwrap();
        assert_eq!(key, "conn");
        assert_eq!(value, "server=foo;db=bar");
    }

    #[test]
    fn malformed_user_token_is_rejected() {
        assert!(parse_key_value("no-separator").is_err());
        assert!(parse_key_value("=value-only").is_err());
    }
}
