//! Use-robot-by-alias command implementation.

use crate::error::CliError;
use crate::utils::{load_fleet, report_outcome, resolve_duration, GlobalOptions};
use clap::Args;

/// Reserve a robot by exact alias.
#[derive(Args)]
pub struct UseByAliasCommand {
    /// Robot alias to reserve
    #[arg(value_name = "ALIAS")]
    pub alias: String,

    /// Who is reserving the robot
    #[arg(value_name = "USER")]
    pub user: String,

    /// Reservation length in minutes (default 60; deliberately unvalidated)
    #[arg(value_name = "DURATION_MIN", allow_negative_numbers = true)]
    pub duration: Option<i64>,
}

impl UseByAliasCommand {
    /// Execute the use-robot-by-alias command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (mut fleet, config) = load_fleet(global)?;
        let minutes = resolve_duration(global, self.duration, &config);

        let outcome = fleet.reserve_by_alias(&self.alias, &self.user, minutes)?;
        report_outcome(&outcome);
        Ok(())
    }
}
