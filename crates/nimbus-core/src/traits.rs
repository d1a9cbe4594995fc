//! Core traits for Nimbus
//!
//! The Clock trait is the only source of wall-clock time the simulator sees.
//! Sessions and log synthesis work through this interface so that timestamps
//! can be pinned in tests.

use chrono::{DateTime, Utc};

/// Timestamp format for feedback entries
pub const FEEDBACK_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Time-of-day format for invocation log entries
pub const LOG_TIME_FORMAT: &str = "%H:%M:%S";

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
