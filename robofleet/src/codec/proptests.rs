//! Property-based tests for the CSV codec round-trip contract.

use super::{parse, stringify};
use crate::robot::Robot;
use proptest::prelude::*;

// Strategy for identity fields. Plain alphanumerics: the storage format
// never quotes, so generated cells stay quote-free the way real fleet
// files are.
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,12}".prop_map(String::from)
}

// Strategy for a robot that is either fully free or fully reserved.
fn robot_strategy() -> impl Strategy<Value = Robot> {
    (
        name_strategy(),
        name_strategy(),
        name_strategy(),
        prop::option::of(("[a-z]{1,10}", 0i64..1_000_000_000_000, 1i64..1_000_000_000)),
    )
        .prop_map(|(id, alias, kind, usage)| {
            let mut robot = Robot::new(id, alias, kind);
            if let Some((user, start_ms, duration_ms)) = usage {
                robot.assign(user, start_ms, start_ms + duration_ms);
            }
            robot
        })
}

proptest! {
    // Round-trip: parse(stringify(robots)) reproduces the records exactly,
    // including absent optional fields.
    #[test]
    fn round_trip_reproduces_records(robots in prop::collection::vec(robot_strategy(), 0..20)) {
        let text = stringify(&robots).unwrap();
        let round_tripped = parse(&text).unwrap();
        prop_assert_eq!(round_tripped, robots);
    }

    // Stringify always emits uniform rows: same column count on every line.
    #[test]
    fn stringify_emits_uniform_columns(robots in prop::collection::vec(robot_strategy(), 0..20)) {
        let text = stringify(&robots).unwrap();
        for line in text.lines() {
            prop_assert_eq!(line.matches(',').count(), 5);
        }
    }
}
