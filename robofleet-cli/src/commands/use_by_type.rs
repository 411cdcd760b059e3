//! Use-robot-by-type command implementation.

use crate::error::CliError;
use crate::utils::{load_fleet, report_outcome, resolve_duration, GlobalOptions};
use clap::Args;

/// Reserve the first free robot of a type.
#[derive(Args)]
pub struct UseByTypeCommand {
    /// Robot type to reserve from
    #[arg(value_name = "TYPE")]
    pub kind: String,

    /// Who is reserving the robot
    #[arg(value_name = "USER")]
    pub user: String,

    /// Reservation length in minutes (default 60; deliberately unvalidated)
    #[arg(value_name = "DURATION_MIN", allow_negative_numbers = true)]
    pub duration: Option<i64>,
}

impl UseByTypeCommand {
    /// Execute the use-robot-by-type command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (mut fleet, config) = load_fleet(global)?;
        let minutes = resolve_duration(global, self.duration, &config);

        let outcome = fleet.reserve_by_kind(&self.kind, &self.user, minutes)?;
        report_outcome(&outcome);
        Ok(())
    }
}
