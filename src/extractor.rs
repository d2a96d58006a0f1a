use chrono::{DateTime, Utc};

use crate::options::Options;

/// ID component extractor
#[derive(Debug, Copy, Clone)]
pub struct Extractor {
    options: Options,
}

impl Extractor {
    /// Create a new extractor for IDs laid out by `options`
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Extract the time field (ticks since base time) from an ID
    #[inline(always)]
    pub fn timestamp(&self, id: u64) -> i64 {
        (id >> self.options.timestamp_shift()) as i64
    }

    /// Extract the worker field from an ID
    #[inline(always)]
    pub fn worker(&self, id: u64) -> u16 {
        ((id >> self.options.seq_bits()) & self.options.worker_mask() as u64) as u16
    }

    /// Extract the sequence field from an ID
    #[inline(always)]
    pub fn sequence(&self, id: u64) -> u32 {
        (id & self.options.sequence_mask() as u64) as u32
    }

    /// Decompose an ID into its components: time tick, worker ID, and sequence
    #[inline]
    pub fn decompose(&self, id: u64) -> (i64, u16, u32) {
        (self.timestamp(id), self.worker(id), self.sequence(id))
    }

    /// Wall-clock instant encoded in an ID's time field, `None` when it is
    /// not representable
    pub fn datetime(&self, id: u64) -> Option<DateTime<Utc>> {
        self.options
            .base_time()
            .checked_add(self.timestamp(id))
            .and_then(DateTime::<Utc>::from_timestamp_millis)
    }
}
