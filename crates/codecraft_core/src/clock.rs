//! Time source seam and time-derived identifier generation.
//!
//! # Responsibility
//! - Abstract "now" so stores stay deterministic under test.
//! - Mint session-unique string ids in the `<prefix>-<epoch_ms>` storage
//!   format.
//!
//! # Invariants
//! - `IdWell` never issues the same millisecond value twice within one
//!   process, even when the clock stands still or goes backwards.

use chrono::{DateTime, NaiveDate, Utc};

/// Source of current date/time injected into the stores.
pub trait Clock {
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fixed clock for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Builds a fixed clock at midnight UTC of the given calendar date.
    pub fn at_date(date: NaiveDate) -> Self {
        Self(DateTime::from_naive_utc_and_offset(
            date.and_hms_opt(0, 0, 0).unwrap_or_default(),
            Utc,
        ))
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Monotonic well of millisecond values for id minting.
///
/// Stored ids are time-derived strings (`post-<ms>`, `comment-<ms>`); two
/// mutations inside the same millisecond must still get distinct ids, so
/// the well bumps past the last issued value when the clock has not moved.
#[derive(Debug, Default)]
pub struct IdWell {
    last_ms: i64,
}

impl IdWell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a millisecond value strictly greater than any issued before.
    pub fn next_ms(&mut self, now_ms: i64) -> i64 {
        let issued = now_ms.max(self.last_ms + 1);
        self.last_ms = issued;
        issued
    }

    /// Mints a `<prefix>-<ms>` identifier.
    pub fn next_id(&mut self, prefix: &str, now_ms: i64) -> String {
        format!("{prefix}-{}", self.next_ms(now_ms))
    }
}
