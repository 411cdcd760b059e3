//! CLI structure and command definitions.
//!
//! Commands keep the historical snake_case names (`check_all`,
//! `use_robot_by_id`, ...) via `rename_all`.

use crate::commands::{
    CheckAllCommand, CheckTypeCommand, UseByAliasCommand, UseByIdCommand, UseByTypeCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing timed robot fleet reservations.
#[derive(Parser)]
#[command(name = "robofleet")]
#[command(version, about = "Manage timed robot fleet reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the storage file location
    #[arg(long, value_name = "PATH", global = true, env = "ROBOFLEET_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
#[command(rename_all = "snake_case")]
pub enum Command {
    /// Print every robot grouped by type with usage status
    CheckAll(CheckAllCommand),

    /// Print robots of one type
    CheckType(CheckTypeCommand),

    /// Reserve the first free robot of a type
    UseRobotByType(UseByTypeCommand),

    /// Reserve a robot by exact id
    UseRobotById(UseByIdCommand),

    /// Reserve a robot by exact alias
    UseRobotByAlias(UseByAliasCommand),
}
