//! Main entry point for the robofleet CLI.
//!
//! This is the command-line interface for the robofleet reservation
//! system. It provides commands for checking and reserving robots:
//! - `check_all`: print every robot grouped by type
//! - `check_type`: print robots of one type
//! - `use_robot_by_type`: reserve the first free robot of a type
//! - `use_robot_by_id`: reserve a robot by exact id
//! - `use_robot_by_alias`: reserve a robot by exact alias

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = robofleet::init_logger(cli.verbose, cli.quiet);
    logger.debug(&format!("logging at {} level", logger.level()));

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        file: cli.file,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::CheckAll(cmd) => cmd.execute(&global),
        cli::Command::CheckType(cmd) => cmd.execute(&global),
        cli::Command::UseRobotByType(cmd) => cmd.execute(&global),
        cli::Command::UseRobotById(cmd) => cmd.execute(&global),
        cli::Command::UseRobotByAlias(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            logger.error(&format!("{e}"));
            std::process::exit(e.exit_code());
        }
    }
}
