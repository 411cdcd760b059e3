//! Check-all command implementation.

use crate::error::CliError;
use crate::utils::{load_fleet, GlobalOptions};
use clap::{Args, ValueEnum};
use robofleet::output;

/// Print every robot grouped by type with usage status.
#[derive(Args)]
pub struct CheckAllCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

/// Output format for the check-all command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One status line per robot (human-readable)
    Text,
    /// The robot list as JSON
    Json,
}

impl CheckAllCommand {
    /// Execute the check-all command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (fleet, _config) = load_fleet(global)?;

        match self.format {
            OutputFormat::Text => {
                for line in output::grouped_status(fleet.robots()) {
                    println!("{line}");
                }
            }
            OutputFormat::Json => {
                println!("{}", output::to_json(fleet.robots())?);
            }
        }

        Ok(())
    }
}
