#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # robofleet
//!
//! A library for managing timed reservations over a small robot fleet,
//! persisted as rows in one flat CSV file.
//!
//! ## Core Types
//!
//! - [`Robot`] and [`Usage`]: one row of fleet state and its reservation
//! - [`FleetManager`] and [`ReserveOutcome`]: load, query, reserve, expire
//! - [`codec`]: the CSV parse/stringify pair with a round-trip contract
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use robofleet::Robot;
//!
//! let mut robot = Robot::new("R1", "lefty", "arm");
//! assert!(robot.is_free());
//!
//! robot.assign("alice", 0, 1_800_000);
//! assert_eq!(robot.usage().unwrap().user, "alice");
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod fleet;
pub mod logging;
pub mod output;
pub mod robot;

// Re-export key types at crate root for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use fleet::{FleetManager, ReserveOutcome, DEFAULT_DURATION_MINUTES};
pub use logging::{init_logger, LogLevel, Logger};
pub use robot::{Robot, Usage};
