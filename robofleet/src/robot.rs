//! The robot record type and its reservation lifecycle.
//!
//! A robot is one row of fleet state: identity (`id`, `alias`), a category
//! (`kind`, stored under the `type` column), and the current reservation.
//! The three reservation fields travel together: a robot is either fully
//! free (all three absent) or fully reserved (all three present), never
//! partially. [`Robot::assign`] and [`Robot::release`] are the only
//! mutators, which is what keeps the invariant.

use serde::{Deserialize, Serialize};

/// One robot in the fleet.
///
/// The field order matches the storage column order
/// (`id,alias,type,used_by,start_time,end_time`); the CSV codec relies on
/// it. Timestamps are epoch milliseconds.
///
/// # Examples
///
/// ```
/// use robofleet::Robot;
///
/// let mut robot = Robot::new("R1", "lefty", "arm");
/// assert!(robot.is_free());
///
/// robot.assign("alice", 1_000, 61_000);
/// let usage = robot.usage().unwrap();
/// assert_eq!(usage.user, "alice");
/// assert_eq!(usage.end_ms - usage.start_ms, 60_000);
///
/// robot.release();
/// assert!(robot.is_free());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robot {
    /// Unique identifier.
    pub id: String,
    /// Human-friendly name.
    pub alias: String,
    /// Category used for grouping and availability checks.
    #[serde(rename = "type")]
    pub kind: String,
    /// Current reserver, if any.
    pub used_by: Option<String>,
    /// Reservation start, epoch milliseconds.
    pub start_time: Option<i64>,
    /// Reservation end, epoch milliseconds.
    pub end_time: Option<i64>,
}

/// A view of a robot's current reservation.
///
/// Returned by [`Robot::usage`] only when all three reservation fields are
/// present, so callers never see a half-reserved robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Usage<'a> {
    /// Who holds the reservation.
    pub user: &'a str,
    /// Reservation start, epoch milliseconds.
    pub start_ms: i64,
    /// Reservation end, epoch milliseconds.
    pub end_ms: i64,
}

impl Robot {
    /// Creates a free robot with the given identity.
    #[must_use]
    pub fn new(id: impl Into<String>, alias: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            alias: alias.into(),
            kind: kind.into(),
            used_by: None,
            start_time: None,
            end_time: None,
        }
    }

    /// Returns true when the robot carries no reservation.
    #[must_use]
    pub const fn is_free(&self) -> bool {
        self.used_by.is_none()
    }

    /// Returns the current reservation, or `None` for a free robot.
    #[must_use]
    pub fn usage(&self) -> Option<Usage<'_>> {
        match (&self.used_by, self.start_time, self.end_time) {
            (Some(user), Some(start_ms), Some(end_ms)) => Some(Usage {
                user,
                start_ms,
                end_ms,
            }),
            _ => None,
        }
    }

    /// Sets all three reservation fields at once.
    pub fn assign(&mut self, user: impl Into<String>, start_ms: i64, end_ms: i64) {
        self.used_by = Some(user.into());
        self.start_time = Some(start_ms);
        self.end_time = Some(end_ms);
    }

    /// Clears all three reservation fields at once.
    pub fn release(&mut self) {
        self.used_by = None;
        self.start_time = None;
        self.end_time = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_robot_is_free() {
        let robot = Robot::new("R1", "lefty", "arm");
        assert!(robot.is_free());
        assert_eq!(robot.usage(), None);
        assert_eq!(robot.used_by, None);
        assert_eq!(robot.start_time, None);
        assert_eq!(robot.end_time, None);
    }

    #[test]
    fn test_assign_sets_all_fields() {
        let mut robot = Robot::new("R1", "lefty", "arm");
        robot.assign("alice", 100, 200);

        assert!(!robot.is_free());
        assert_eq!(robot.used_by.as_deref(), Some("alice"));
        assert_eq!(robot.start_time, Some(100));
        assert_eq!(robot.end_time, Some(200));
    }

    #[test]
    fn test_release_clears_all_fields() {
        let mut robot = Robot::new("R1", "lefty", "arm");
        robot.assign("alice", 100, 200);
        robot.release();

        assert!(robot.is_free());
        assert_eq!(robot.used_by, None);
        assert_eq!(robot.start_time, None);
        assert_eq!(robot.end_time, None);
    }

    #[test]
    fn test_usage_view() {
        let mut robot = Robot::new("R1", "lefty", "arm");
        robot.assign("alice", 100, 200);

        let usage = robot.usage().unwrap();
        assert_eq!(usage.user, "alice");
        assert_eq!(usage.start_ms, 100);
        assert_eq!(usage.end_ms, 200);
    }

    #[test]
    fn test_usage_absent_for_partial_record() {
        // A hand-built partial record (possible via the public fields) must
        // still read as free through the usage accessor.
        let robot = Robot {
            used_by: Some("alice".to_string()),
            ..Robot::new("R1", "lefty", "arm")
        };
        assert_eq!(robot.usage(), None);
    }
}
