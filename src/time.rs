//! Wall-clock sources for ID generation
//!
//! Workers read the clock through [`TimeSource`] so tests can drive it by hand

use chrono::Utc;

/// A source of wall-clock time in milliseconds since the Unix epoch.
///
/// Implementations may move backwards; workers handle regression themselves.
pub trait TimeSource: Send + Sync + 'static {
    /// Returns the current time in milliseconds since the Unix epoch
    fn current_millis(&self) -> i64;
}

/// The system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    #[inline(always)]
    fn current_millis(&self) -> i64 {
        unix_time_ms()
    }
}

/// Get current wall-clock time in milliseconds since Unix epoch
#[inline(always)]
pub fn unix_time_ms() -> i64 {
    Utc::now().timestamp_millis()
}
