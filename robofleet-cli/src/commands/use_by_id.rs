//! Use-robot-by-id command implementation.

use crate::error::CliError;
use crate::utils::{load_fleet, report_outcome, resolve_duration, GlobalOptions};
use clap::Args;

/// Reserve a robot by exact id.
#[derive(Args)]
pub struct UseByIdCommand {
    /// Robot id to reserve
    #[arg(value_name = "ID")]
    pub id: String,

    /// Who is reserving the robot
    #[arg(value_name = "USER")]
    pub user: String,

    /// Reservation length in minutes (default 60; deliberately unvalidated)
    #[arg(value_name = "DURATION_MIN", allow_negative_numbers = true)]
    pub duration: Option<i64>,
}

impl UseByIdCommand {
    /// Execute the use-robot-by-id command.
    ///
    /// An occupied robot is reported with its current usage; the request
    /// is rejected, not queued.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (mut fleet, config) = load_fleet(global)?;
        let minutes = resolve_duration(global, self.duration, &config);

        let outcome = fleet.reserve_by_id(&self.id, &self.user, minutes)?;
        report_outcome(&outcome);
        Ok(())
    }
}
