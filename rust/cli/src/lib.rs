//! # Railbuild CLI Library
//!
//! Command-line front end for the `railbuild_engine` track-building engine.
//! It loads a board file, a game snapshot and a build action from disk, runs
//! the engine in-process and prints the results as JSON.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ```no_run
//! use std::io;
//! let args = vec![
//!     "railbuild", "apply",
//!     "--map", "boards/ferry.toml",
//!     "--snapshot", "games/g-1.json",
//!     "--action", "turns/g-1-3.json",
//! ];
//! let code = railbuild_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `apply`: Apply a build action and print the report and new snapshot
//! - `check`: Re-run the component-limit and connectivity checks on a snapshot
//! - `deliveries`: Print the delivery graph of a snapshot
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod io_utils;
pub mod logging;
pub mod ui;

use cli::{Commands, RailbuildCli};
use commands::{
    handle_apply_command, handle_cfg_command, handle_check_command, handle_deliveries_command,
};

pub use error::{BatchValidationError, CliError};

/// Main entry point for the CLI application.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["railbuild", "--help"];
/// let code = railbuild_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
    let cli = match RailbuildCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(e, out, err),
    };

    match dispatch(cli.cmd, out, err) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn dispatch(cmd: Commands, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    match cmd {
        Commands::Apply {
            map,
            snapshot,
            action,
            output,
        } => {
            let cfg = load_config()?;
            handle_apply_command(&map, &snapshot, &action, output.as_deref(), &cfg, out, err)
        }
        Commands::Check { map, snapshot } => {
            load_config()?;
            handle_check_command(&map, &snapshot, out, err)
        }
        Commands::Deliveries { map, snapshot } => {
            load_config()?;
            handle_deliveries_command(&map, &snapshot, out)
        }
        Commands::Cfg => handle_cfg_command(out),
    }
}

/// Loads the layered configuration and installs the stderr log it names.
fn load_config() -> Result<config::Config, CliError> {
    let cfg = config::load()
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;
    logging::init_logging(&cfg.log_filter);
    Ok(cfg)
}

fn report_parse_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;
    // Help and version should print to stdout and exit 0
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(out, "{}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::SUCCESS
        }
        _ => {
            if writeln!(err, "{}", e).is_err()
                || writeln!(err).is_err()
                || writeln!(err, "Railbuild CLI").is_err()
                || writeln!(err, "Usage: railbuild <command> [options]\n").is_err()
                || writeln!(err, "Commands:").is_err()
            {
                return exit_code::ERROR;
            }
            for c in Commands::NAMES {
                if writeln!(err, "  {}", c).is_err() {
                    return exit_code::ERROR;
                }
            }
            let _ = writeln!(err, "\nFor full help, run: railbuild --help");
            exit_code::ERROR
        }
    }
}
