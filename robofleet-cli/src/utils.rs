//! Utility functions for CLI operations.
//!
//! Shared plumbing for all commands: global options, storage file
//! resolution, fleet loading, and reservation outcome reporting.

use crate::error::CliError;
use robofleet::config::{default_data_dir, DATA_FILE_NAME};
use robofleet::output::status_line;
use robofleet::{init_logger, Config, FleetManager, Logger, ReserveOutcome};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the storage file location.
    pub file: Option<PathBuf>,
}

impl GlobalOptions {
    /// A logger honoring the global verbosity flags.
    pub fn logger(&self) -> Logger {
        init_logger(self.verbose, self.quiet)
    }
}

/// Load the user configuration from the default data directory.
pub fn load_configuration() -> Result<Config, CliError> {
    Config::load(None).map_err(CliError::from)
}

/// Resolve the storage file path.
///
/// Precedence: `--file` flag / `ROBOFLEET_FILE` env (already merged by
/// clap), then the config `data_file`, then `~/.robofleet/robots.csv`.
pub fn resolve_data_file(global: &GlobalOptions, config: &Config) -> Result<PathBuf, CliError> {
    if let Some(ref file) = global.file {
        return Ok(file.clone());
    }
    if let Some(ref file) = config.data_file {
        return Ok(file.clone());
    }
    default_data_dir()
        .map(|dir| dir.join(DATA_FILE_NAME))
        .ok_or(CliError::NoHomeDirectory)
}

/// Load the fleet from the resolved storage file.
///
/// Expired reservations are cleared (and persisted) as part of the load.
pub fn load_fleet(global: &GlobalOptions) -> Result<(FleetManager, Config), CliError> {
    let logger = global.logger();
    let config = load_configuration()?;
    let path = resolve_data_file(global, &config)?;
    let fleet = FleetManager::load(path)?;
    logger.debug(&format!("storage file {}", fleet.path().display()));
    logger.info(&format!("loaded {} robots", fleet.robots().len()));
    Ok((fleet, config))
}

/// Merge the CLI duration with the configured default.
///
/// Non-positive values are accepted as given; the reservation just
/// expires at the next load, so a warning is the only feedback.
pub fn resolve_duration(
    global: &GlobalOptions,
    duration: Option<i64>,
    config: &Config,
) -> Option<i64> {
    let minutes = duration.or(config.default_duration_minutes);
    if let Some(m) = minutes {
        if m <= 0 {
            global
                .logger()
                .warn(&format!("non-positive duration {m} min; reservation expires immediately"));
        }
    }
    minutes
}

/// Print the result of a reservation request.
///
/// Every outcome is a normal exit: a fresh reservation or an occupied
/// robot prints its status line, the rest print a not-found message.
pub fn report_outcome(outcome: &ReserveOutcome) {
    match outcome {
        ReserveOutcome::Reserved(robot) | ReserveOutcome::AlreadyReserved(robot) => {
            println!("{}", status_line(robot));
        }
        ReserveOutcome::NotFound { key } => println!("robot {key} is not found"),
        ReserveOutcome::NoneFree { .. } => println!("availableRobot is not found"),
    }
}
