//! grate-runner binary entry point.
//!
//! All logic lives in the library; this just maps the CLI result onto an exit
//! code.

use std::process::ExitCode;

fn main() -> ExitCode {
    match grate_runner::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            grate_runner::ui::output::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
