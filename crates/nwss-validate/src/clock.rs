//! Validation time.
//!
//! Future-date checks and the chronological rule compare against "now". The
//! time is read from a [`Clock`] once per batch and carried in a
//! [`ValidationContext`], so every record in a batch sees the same instant.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Source of the current local date and time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the host's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Midnight at the start of `date`.
    pub fn on(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Per-call inputs shared by every record of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    now: NaiveDateTime,
}

impl ValidationContext {
    pub fn at(now: NaiveDateTime) -> Self {
        Self { now }
    }

    pub fn on(date: NaiveDate) -> Self {
        Self::at(date.and_time(NaiveTime::MIN))
    }

    pub fn from_clock(clock: &dyn Clock) -> Self {
        Self::at(clock.now())
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date()
    }
}
