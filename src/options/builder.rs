//! OptionsBuilder for constructing generator options

use chrono::{DateTime, Utc};

use super::{Method, Options};
use crate::error::ConfigError;

/// Default configuration values
pub(super) const DEFAULT_BASE_TIME: i64 = 1582136402000; // February 19, 2020 18:20:02 UTC
pub(super) const DEFAULT_WORKER_ID_BITS: u8 = 6;
pub(super) const DEFAULT_SEQ_BITS: u8 = 6;
pub(super) const DEFAULT_TOP_OVERCOST_COUNT: u32 = 2000;
pub(super) const DEFAULT_SPIN_ENABLED: bool = true;
pub(super) const DEFAULT_SPIN_LOOPS: u32 = 64;
pub(super) const DEFAULT_SPIN_YIELD_EVERY: u32 = 16;

/// Builder for Options
///
/// Numeric fields left at zero fall back to their defaults when the options
/// are built: `base_time`, `worker_id_bits`, `seq_bits` and `max_seq`.
/// An unset `min_seq` is derived from the resolved `max_seq`.
#[derive(Debug, Clone)]
pub struct OptionsBuilder {
    pub(super) worker_id: u16,
    pub(super) base_time: i64,
    pub(super) worker_id_bits: u8,
    pub(super) seq_bits: u8,
    pub(super) max_seq: u32,
    pub(super) min_seq: Option<u32>,
    pub(super) top_overcost_count: u32,
    pub(super) method: Method,
    pub(super) spin_enabled: bool,
    pub(super) spin_loops: u32,
    pub(super) spin_yield_every: u32,
}

impl OptionsBuilder {
    /// Create a new OptionsBuilder for the given worker ID
    pub const fn new(worker_id: u16) -> Self {
        Self {
            worker_id,
            base_time: 0,
            worker_id_bits: 0,
            seq_bits: 0,
            max_seq: 0,
            min_seq: None,
            top_overcost_count: DEFAULT_TOP_OVERCOST_COUNT,
            method: Method::Drift,
            spin_enabled: DEFAULT_SPIN_ENABLED,
            spin_loops: DEFAULT_SPIN_LOOPS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }

    /// Set the epoch in milliseconds since the Unix epoch
    pub const fn base_time(mut self, millis: i64) -> Self {
        self.base_time = millis;
        self
    }

    /// Set the epoch from a UTC date-time
    pub fn base_time_at(mut self, at: DateTime<Utc>) -> Self {
        self.base_time = at.timestamp_millis();
        self
    }

    /// Set the number of bits reserved for the worker ID (1-15)
    pub const fn worker_id_bits(mut self, bits: u8) -> Self {
        self.worker_id_bits = bits;
        self
    }

    /// Set the number of bits reserved for the per-tick sequence (1-21)
    pub const fn seq_bits(mut self, bits: u8) -> Self {
        self.seq_bits = bits;
        self
    }

    /// Set the largest sequence value issued within one tick
    pub const fn max_seq(mut self, max: u32) -> Self {
        self.max_seq = max;
        self
    }

    /// Set the first sequence value issued within one tick.
    ///
    /// Left unset it skips the turn-back band (`Options::RESERVED_SEQUENCES`)
    /// when `max_seq` leaves room for it, and is 0 otherwise.
    pub const fn min_seq(mut self, min: u32) -> Self {
        self.min_seq = Some(min);
        self
    }

    /// Set how many virtual ticks one drift term may use before waiting on the real clock
    pub const fn top_overcost_count(mut self, count: u32) -> Self {
        self.top_overcost_count = count;
        self
    }

    /// Select the generation algorithm
    pub const fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Enable or disable micro spin before sleeping while waiting for the next tick
    pub const fn enable_spin(mut self, enable: bool) -> Self {
        self.spin_enabled = enable;
        self
    }

    /// Set number of spin loops attempted before falling back to sleep
    pub const fn spin_loops(mut self, loops: u32) -> Self {
        self.spin_loops = loops;
        self
    }

    /// Set spin yield cadence. Yield every N spin iterations; 0 disables yielding
    pub const fn spin_yield_every(mut self, n: u32) -> Self {
        self.spin_yield_every = n;
        self
    }

    /// Resolve defaults, validate and build the final Options
    pub fn build(self) -> Result<Options, ConfigError> {
        Options::from_builder(self)
    }
}
