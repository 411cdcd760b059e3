//! Check-type command implementation.

use crate::error::CliError;
use crate::utils::{load_fleet, GlobalOptions};
use clap::Args;
use robofleet::output::status_line;

/// Print robots of one type, or the list of types that exist.
#[derive(Args)]
pub struct CheckTypeCommand {
    /// Robot type to list
    #[arg(value_name = "TYPE")]
    pub kind: String,
}

impl CheckTypeCommand {
    /// Execute the check-type command.
    ///
    /// An unknown type is not an error: it prints an "unavailable type"
    /// message naming the types that do exist and exits zero.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (fleet, _config) = load_fleet(global)?;

        let robots = fleet.list_by_kind(&self.kind);
        if robots.is_empty() {
            println!(
                "unavailable type: {} (available: {})",
                self.kind,
                fleet.kinds().join(", ")
            );
            return Ok(());
        }

        for robot in robots {
            println!("{}", status_line(robot));
        }
        Ok(())
    }
}
