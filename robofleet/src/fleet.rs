//! The fleet manager: in-memory fleet state backed by one CSV file.
//!
//! The manager loads every robot into an ordered list once per process,
//! answers read queries with linear scans over that list, and rewrites the
//! whole file after any mutation. File order is load-bearing: every lookup
//! is first-match-wins, so the storage file dictates the tie-break when
//! ids, aliases, or kinds repeat.
//!
//! Expired reservations are cleared exactly once, at load time. There is
//! no background timer, and no cross-process locking: the storage file is
//! assumed to be touched by at most one invocation at a time, so
//! concurrent invocations would race on the read-modify-write cycle.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::codec;
use crate::error::Result;
use crate::robot::Robot;

/// Reservation length applied when the caller gives no duration.
pub const DEFAULT_DURATION_MINUTES: i64 = 60;

/// Milliseconds per minute, for converting durations to epoch offsets.
const MS_PER_MINUTE: i64 = 60_000;

/// What happened when a reservation was requested.
///
/// Only [`ReserveOutcome::Reserved`] touches storage; the other variants
/// report why nothing changed so the caller can print a message and
/// return normally. They are deliberately not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReserveOutcome {
    /// The robot was reserved; carries the updated record.
    Reserved(Robot),
    /// The robot exists but is already reserved; carries the current
    /// record so the caller can report who holds it. Storage untouched.
    AlreadyReserved(Robot),
    /// No robot matched the requested id or alias.
    NotFound {
        /// The id or alias that matched nothing.
        key: String,
    },
    /// Every robot of the requested kind is occupied (or the kind does
    /// not exist).
    NoneFree {
        /// The requested kind.
        kind: String,
    },
}

/// In-memory fleet state, loaded once per process from one CSV file.
///
/// # Examples
///
/// ```no_run
/// use robofleet::FleetManager;
///
/// let mut fleet = FleetManager::load("/var/lib/robofleet/robots.csv").unwrap();
/// let outcome = fleet.reserve_by_kind("arm", "alice", Some(30)).unwrap();
/// println!("{outcome:?}");
/// ```
#[derive(Debug)]
pub struct FleetManager {
    path: PathBuf,
    robots: Vec<Robot>,
}

impl FleetManager {
    /// Reads storage, parses it, and clears reservations whose end time
    /// has passed. If anything was cleared, the file is rewritten before
    /// this returns; load time is the only moment expiry runs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error) if the file cannot be read (or
    /// rewritten after expiry) and [`Error::Format`](crate::Error) if the
    /// CSV is malformed or not valid UTF-8.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        // Raw bytes: decoding is the codec's job, so undecodable storage
        // surfaces as a format error rather than an I/O error.
        let bytes = fs::read(&path)?;
        let robots = codec::parse(&bytes)?;
        log::debug!("loaded {} robots from {}", robots.len(), path.display());

        let mut fleet = Self { path, robots };
        if fleet.clear_expired(Utc::now().timestamp_millis()) {
            fleet.save()?;
        }
        Ok(fleet)
    }

    /// The storage file backing this fleet.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every robot, in load order.
    #[must_use]
    pub fn robots(&self) -> &[Robot] {
        &self.robots
    }

    /// Distinct kinds in first-occurrence order, no duplicates.
    #[must_use]
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = Vec::new();
        for robot in &self.robots {
            if !kinds.contains(&robot.kind.as_str()) {
                kinds.push(&robot.kind);
            }
        }
        kinds
    }

    /// Robots of the given kind, load order preserved.
    #[must_use]
    pub fn list_by_kind(&self, kind: &str) -> Vec<&Robot> {
        self.robots.iter().filter(|r| r.kind == kind).collect()
    }

    /// First free robot of the given kind, in load order.
    #[must_use]
    pub fn find_free_by_kind(&self, kind: &str) -> Option<&Robot> {
        self.robots.iter().find(|r| r.kind == kind && r.is_free())
    }

    /// First robot with exactly this id.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Robot> {
        self.robots.iter().find(|r| r.id == id)
    }

    /// First robot with exactly this alias.
    #[must_use]
    pub fn find_by_alias(&self, alias: &str) -> Option<&Robot> {
        self.robots.iter().find(|r| r.alias == alias)
    }

    /// Reserves the first free robot of a kind for `user`.
    ///
    /// `minutes` falls back to [`DEFAULT_DURATION_MINUTES`] when `None`.
    /// Non-positive durations are accepted as given; the resulting
    /// reservation simply expires at the next load.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the updated fleet fails.
    pub fn reserve_by_kind(
        &mut self,
        kind: &str,
        user: &str,
        minutes: Option<i64>,
    ) -> Result<ReserveOutcome> {
        let Some(index) = self
            .robots
            .iter()
            .position(|r| r.kind == kind && r.is_free())
        else {
            return Ok(ReserveOutcome::NoneFree {
                kind: kind.to_string(),
            });
        };
        self.reserve_index(index, user, minutes)
            .map(ReserveOutcome::Reserved)
    }

    /// Reserves the robot with exactly this id.
    ///
    /// An occupied robot is reported, not re-reserved and not queued.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the updated fleet fails.
    pub fn reserve_by_id(
        &mut self,
        id: &str,
        user: &str,
        minutes: Option<i64>,
    ) -> Result<ReserveOutcome> {
        let index = self.robots.iter().position(|r| r.id == id);
        self.reserve_found(index, id, user, minutes)
    }

    /// Reserves the robot with exactly this alias.
    ///
    /// An occupied robot is reported, not re-reserved and not queued.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the updated fleet fails.
    pub fn reserve_by_alias(
        &mut self,
        alias: &str,
        user: &str,
        minutes: Option<i64>,
    ) -> Result<ReserveOutcome> {
        let index = self.robots.iter().position(|r| r.alias == alias);
        self.reserve_found(index, alias, user, minutes)
    }

    /// Shared tail of the id/alias paths: refuse missing or occupied
    /// robots, reserve otherwise.
    fn reserve_found(
        &mut self,
        index: Option<usize>,
        key: &str,
        user: &str,
        minutes: Option<i64>,
    ) -> Result<ReserveOutcome> {
        let Some(index) = index else {
            return Ok(ReserveOutcome::NotFound {
                key: key.to_string(),
            });
        };
        if !self.robots[index].is_free() {
            return Ok(ReserveOutcome::AlreadyReserved(self.robots[index].clone()));
        }
        self.reserve_index(index, user, minutes)
            .map(ReserveOutcome::Reserved)
    }

    /// Assigns the reservation window and persists the whole fleet.
    ///
    /// No occupancy guard here; callers check `is_free` first.
    fn reserve_index(&mut self, index: usize, user: &str, minutes: Option<i64>) -> Result<Robot> {
        let minutes = minutes.unwrap_or(DEFAULT_DURATION_MINUTES);
        let now_ms = Utc::now().timestamp_millis();
        // Durations are accepted unvalidated; saturate so an absurd value
        // pins the window to the i64 range instead of overflowing.
        let end_ms = now_ms.saturating_add(minutes.saturating_mul(MS_PER_MINUTE));
        self.robots[index].assign(user, now_ms, end_ms);
        log::debug!(
            "reserved {} for {user} ({minutes} min)",
            self.robots[index].id
        );
        self.save()?;
        Ok(self.robots[index].clone())
    }

    /// Clears every reservation whose end time is strictly before
    /// `now_ms`. In-memory only; returns whether anything was cleared so
    /// the caller can decide to persist.
    pub fn clear_expired(&mut self, now_ms: i64) -> bool {
        let mut cleared = false;
        for robot in &mut self.robots {
            let expired = robot.usage().is_some_and(|u| now_ms > u.end_ms);
            if expired {
                log::debug!("reservation on {} expired", robot.id);
                robot.release();
                cleared = true;
            }
        }
        cleared
    }

    /// Rewrites the whole storage file from the in-memory list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error) if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let text = codec::stringify(&self.robots)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}
