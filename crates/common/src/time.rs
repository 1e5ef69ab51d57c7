//! Unit conversion between declared seconds and the platform's milliseconds,
//! plus the wall clock used when deciding which start time to resend.

use std::time::{SystemTime, UNIX_EPOCH};

pub const MILLIS_PER_SECOND: i64 = 1000;

/// Exact conversion; `None` when the result does not fit in an `i64`.
pub fn secs_to_millis(secs: i64) -> Option<i64> {
    secs.checked_mul(MILLIS_PER_SECOND)
}

pub fn millis_to_secs(millis: i64) -> i64 {
    millis / MILLIS_PER_SECOND
}

pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

pub fn now_secs() -> i64 {
    millis_to_secs(now_millis())
}

pub trait Clock: Send + Sync {
    fn now_secs(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_secs(&self) -> i64 {
        now_secs()
    }
}

/// Clock pinned to a single Unix second.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_secs(&self) -> i64 {
        self.0
    }
}
