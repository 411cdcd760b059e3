//! Human-readable and JSON rendering of fleet state.
//!
//! The one-line status format is the tool's whole user interface:
//!
//! ```text
//! [arm] R2(righty) is used by 💎alice💎 09:30:00 - 10:00:00
//! [arm] R1(lefty) is not used
//! ```
//!
//! Times render as local wall-clock `HH:MM:SS`.

use chrono::{Local, TimeZone};

use crate::error::Result;
use crate::robot::Robot;

/// Renders an epoch-millisecond timestamp as local `HH:MM:SS`.
fn format_clock(ms: i64) -> String {
    Local
        .timestamp_millis_opt(ms)
        .single()
        .map_or_else(|| "??:??:??".to_string(), |dt| dt.format("%H:%M:%S").to_string())
}

/// One status line for a robot.
#[must_use]
pub fn status_line(robot: &Robot) -> String {
    let head = format!("[{}] {}({})", robot.kind, robot.id, robot.alias);
    match robot.usage() {
        Some(usage) => format!(
            "{head} is used by \u{1f48e}{}\u{1f48e} {} - {}",
            usage.user,
            format_clock(usage.start_ms),
            format_clock(usage.end_ms)
        ),
        None => format!("{head} is not used"),
    }
}

/// Status lines for the whole fleet, grouped by kind.
///
/// Kinds appear in first-occurrence order; robots keep load order within
/// their kind.
#[must_use]
pub fn grouped_status(robots: &[Robot]) -> Vec<String> {
    let mut kinds: Vec<&str> = Vec::new();
    for robot in robots {
        if !kinds.contains(&robot.kind.as_str()) {
            kinds.push(&robot.kind);
        }
    }

    let mut lines = Vec::with_capacity(robots.len());
    for kind in kinds {
        for robot in robots.iter().filter(|r| r.kind == kind) {
            lines.push(status_line(robot));
        }
    }
    lines
}

/// The fleet as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`Error::Json`](crate::Error) if serialization fails.
pub fn to_json(robots: &[Robot]) -> Result<String> {
    Ok(serde_json::to_string_pretty(robots)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_free() {
        let robot = Robot::new("R1", "lefty", "arm");
        assert_eq!(status_line(&robot), "[arm] R1(lefty) is not used");
    }

    #[test]
    fn test_status_line_reserved_shape() {
        let mut robot = Robot::new("R2", "righty", "arm");
        robot.assign("alice", 1_000, 1_801_000);

        let line = status_line(&robot);
        assert!(line.starts_with("[arm] R2(righty) is used by \u{1f48e}alice\u{1f48e} "));
        // Two HH:MM:SS clocks separated by " - "; exact values depend on
        // the local timezone.
        let clocks: Vec<&str> = line.rsplit(' ').take(3).collect();
        assert_eq!(clocks[1], "-");
        assert_eq!(clocks[0].len(), 8);
        assert_eq!(clocks[2].len(), 8);
    }

    #[test]
    fn test_grouped_status_keeps_kind_blocks_together() {
        let robots = vec![
            Robot::new("R1", "a", "arm"),
            Robot::new("L1", "b", "leg"),
            Robot::new("R2", "c", "arm"),
        ];

        let lines = grouped_status(&robots);
        assert_eq!(
            lines,
            [
                "[arm] R1(a) is not used",
                "[arm] R2(c) is not used",
                "[leg] L1(b) is not used",
            ]
        );
    }

    #[test]
    fn test_to_json_round_trips() {
        let robots = vec![Robot::new("R1", "a", "arm")];
        let json = to_json(&robots).unwrap();
        let back: Vec<Robot> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, robots);
    }
}
