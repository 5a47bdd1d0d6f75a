//! Deterministic clocks shared by the task unit tests.

use chrono::{DateTime, Local, TimeDelta, Utc};
use mockable::Clock;
use std::sync::Mutex;

/// Parses an RFC 3339 timestamp for use in clocks.
pub(super) fn instant(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("test timestamp should parse")
        .with_timezone(&Utc)
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub(super) struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub(super) fn at(rfc3339: &str) -> Self {
        Self(instant(rfc3339))
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Clock that advances by one minute every time it is read.
#[derive(Debug)]
pub(super) struct SteppingClock(Mutex<DateTime<Utc>>);

impl SteppingClock {
    pub(super) fn starting_at(rfc3339: &str) -> Self {
        Self(Mutex::new(instant(rfc3339)))
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut current = self.0.lock().expect("clock mutex should not be poisoned");
        let now = *current;
        *current = now + TimeDelta::minutes(1);
        now
    }
}
