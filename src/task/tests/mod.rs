//! Unit tests for the task module.

mod adapter_tests;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

/// Clock pinned to a fixed instant for deterministic timestamps.
pub(crate) struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub(crate) fn default_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 4, 12, 30, 0)
            .single()
            .expect("valid fixed instant")
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self(Self::default_instant())
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
