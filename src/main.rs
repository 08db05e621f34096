// Savescript - save the last shell command as a reusable script
// Main entry point

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use savescript::cli::{self, Cli};
use savescript::config::{Paths, Shell};
use savescript::errors::SetupError;
use savescript::history;
use savescript::installer;
use savescript::script::{self, TtyAnswerSource};

fn main() -> ExitCode {
    // Initialize tracing (diagnostics go to stderr, user output to stdout)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == clap::error::ErrorKind::MissingRequiredArgument => {
            cli::print_error(&SetupError::Usage.to_string());
            return ExitCode::FAILURE;
        }
        // --help and --version exit cleanly here; other parse errors keep
        // clap's own rendering.
        Err(e) => e.exit(),
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            cli::print_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

/// The whole workflow: ensure the environment, capture the command, save
/// the script, then show any queued notice last.
fn run(cli: &Cli) -> Result<()> {
    let shell = Shell::detect()?;
    let paths = Paths::resolve(shell)?;

    let path_value = std::env::var("PATH").ok();
    let notice = installer::ensure_environment(&paths, path_value.as_deref())?;

    let captured = history::capture_last_command(&paths.history_file)?;

    let mut answers = TtyAnswerSource;
    script::save_script(&paths.script_dir, &cli.name, &captured, &mut answers)?;

    if let Some(notice) = notice {
        cli::print_notice(&notice.render(&paths.profile_file));
    }

    Ok(())
}
