//! cli
//!
//! Command-line interface layer for grate-runner.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Resolve settings (file, then flag overlay) and the ambient verbosity
//! - Delegate to the [`crate::runner`] execution boundary
//!
//! The CLI layer is thin. It never builds argument tokens itself; that is the
//! runner's job, so `run` and `args` can never disagree about what would be
//! spawned.

pub mod args;

pub use args::{Cli, Command, SettingsFlags};

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config;
use crate::runner::{GrateRunner, ProcessToolRunner};
use crate::settings::GrateSettings;
use crate::ui::{self, Verbosity};

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    dispatch(&cli)
}

/// Dispatch a parsed command line.
pub fn dispatch(cli: &Cli) -> Result<()> {
    let verbosity = cli.effective_verbosity();
    let cwd = match &cli.cwd {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };

    match &cli.command {
        Command::Run(flags) => run_grate(cli, flags, verbosity, &cwd),
        Command::Args { settings, json } => print_arguments(cli, settings, *json, verbosity, &cwd),
    }
}

/// Load the settings file and overlay CLI flags.
fn resolve_settings(cli: &Cli, flags: &SettingsFlags, cwd: &Path) -> Result<GrateSettings> {
    let mut settings = config::load(cli.config.as_deref(), cwd)?;
    flags.apply(&mut settings)?;
    Ok(settings)
}

/// Build the runner for this invocation.
fn build_runner(
    cli: &Cli,
    settings: GrateSettings,
    verbosity: Verbosity,
    cwd: &Path,
) -> GrateRunner<ProcessToolRunner> {
    let mut tool = ProcessToolRunner::new();
    if let Some(path) = &cli.tool_path {
        tool = tool.with_tool_path(path);
    }
    if cli.cwd.is_some() {
        tool = tool.with_working_dir(cwd);
    }

    GrateRunner::new(tool)
        .with_verbosity(verbosity)
        .with_settings(settings)
}

fn run_grate(cli: &Cli, flags: &SettingsFlags, verbosity: Verbosity, cwd: &Path) -> Result<()> {
    let settings = resolve_settings(cli, flags, cwd)?;
    let runner = build_runner(cli, settings, verbosity, cwd);

    ui::output::debug(
        format!(
            "running {} {}",
            runner.executable_name(),
            crate::runner::join_args(&runner.arguments()?)
        ),
        verbosity,
    );

    let outcome = runner.run()?;
    ui::output::print(
        format!("{} completed successfully", outcome.path.display()),
        verbosity,
    );
    Ok(())
}

fn print_arguments(
    cli: &Cli,
    flags: &SettingsFlags,
    json: bool,
    verbosity: Verbosity,
    cwd: &Path,
) -> Result<()> {
    let settings = resolve_settings(cli, flags, cwd)?;
    let runner = build_runner(cli, settings, verbosity, cwd);
    let arguments = runner.arguments()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&arguments)?);
    } else {
        for token in &arguments {
            println!("{}", token);
        }
    }
    Ok(())
}
