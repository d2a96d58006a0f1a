//! Options for the ID generator

mod builder;

pub use builder::OptionsBuilder;
use builder::{DEFAULT_BASE_TIME, DEFAULT_SEQ_BITS, DEFAULT_WORKER_ID_BITS};

use crate::error::ConfigError;

/// Generation algorithm used by a generator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Method {
    /// Issue IDs on virtual future ticks when a tick's sequence space runs out,
    /// and on a reserved sequence band while the clock is behind
    #[default]
    Drift,
    /// Wait for the next real tick when the sequence space runs out.
    /// IDs issued during a clock regression may repeat earlier ones.
    Simple,
}

/// Immutable generator options, resolved and validated once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    worker_id: u16,
    base_time: i64,
    worker_id_bits: u8,
    seq_bits: u8,
    max_seq: u32,
    min_seq: u32,
    top_overcost_count: u32,
    method: Method,
    spin_enabled: bool,
    spin_loops: u32,
    spin_yield_every: u32,
}

impl Options {
    /// Upper bound on `worker_id_bits + seq_bits`, leaving at least 42 bits for time
    pub const MAX_WORKER_AND_SEQ_BITS: u8 = 22;

    /// Sequence values below this are shared with turn-back IDs.
    /// `min_seq` defaults to this value so IDs issued during a clock
    /// regression stay apart from regular ones.
    pub const RESERVED_SEQUENCES: u32 = 5;

    /// Options for `worker_id` with every default applied
    pub fn new(worker_id: u16) -> Result<Self, ConfigError> {
        Self::builder(worker_id).build()
    }

    /// Create a new options builder
    pub const fn builder(worker_id: u16) -> OptionsBuilder {
        OptionsBuilder::new(worker_id)
    }

    #[inline]
    pub(crate) const fn calculate_mask(bits: u8) -> u32 {
        ((1u64 << bits) - 1) as u32
    }

    /// Apply zero-value defaults without validating
    fn resolve(b: OptionsBuilder) -> Self {
        let seq_bits = if b.seq_bits == 0 {
            DEFAULT_SEQ_BITS
        } else {
            b.seq_bits
        };
        let max_seq = if b.max_seq == 0 {
            Self::calculate_mask(seq_bits.min(32))
        } else {
            b.max_seq
        };
        let min_seq = match b.min_seq {
            Some(min) => min,
            None if max_seq >= Self::RESERVED_SEQUENCES => Self::RESERVED_SEQUENCES,
            None => 0,
        };
        Self {
            worker_id: b.worker_id,
            base_time: if b.base_time == 0 {
                DEFAULT_BASE_TIME
            } else {
                b.base_time
            },
            worker_id_bits: if b.worker_id_bits == 0 {
                DEFAULT_WORKER_ID_BITS
            } else {
                b.worker_id_bits
            },
            seq_bits,
            max_seq,
            min_seq,
            top_overcost_count: b.top_overcost_count,
            method: b.method,
            spin_enabled: b.spin_enabled,
            spin_loops: b.spin_loops,
            spin_yield_every: b.spin_yield_every,
        }
    }

    /// Create options from builder
    pub(crate) fn from_builder(b: OptionsBuilder) -> Result<Self, ConfigError> {
        let options = Self::resolve(b);
        options.validate()?;
        Ok(options)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let (worker_id_bits, seq_bits) = (self.worker_id_bits, self.seq_bits);
        if !(1..=15).contains(&worker_id_bits)
            || !(1..=21).contains(&seq_bits)
            || worker_id_bits + seq_bits > Self::MAX_WORKER_AND_SEQ_BITS
        {
            return Err(ConfigError::InvalidBitWidths {
                worker_id_bits,
                seq_bits,
            });
        }

        let max_worker_id = self.max_worker_id();
        if self.worker_id > max_worker_id {
            return Err(ConfigError::InvalidWorkerId {
                worker_id: self.worker_id,
                max: max_worker_id,
            });
        }

        let limit = self.sequence_mask();
        if self.max_seq > limit {
            return Err(ConfigError::SequenceOutOfRange {
                max_seq: self.max_seq,
                limit,
            });
        }
        if self.min_seq > self.max_seq {
            return Err(ConfigError::InvertedSequenceBounds {
                min_seq: self.min_seq,
                max_seq: self.max_seq,
            });
        }

        if self.base_time <= 0 {
            return Err(ConfigError::InvalidBaseTime {
                base_time: self.base_time,
            });
        }
        Ok(())
    }

    #[inline(always)]
    pub const fn worker_id(&self) -> u16 {
        self.worker_id
    }

    #[inline(always)]
    pub const fn base_time(&self) -> i64 {
        self.base_time
    }

    #[inline(always)]
    pub const fn worker_id_bits(&self) -> u8 {
        self.worker_id_bits
    }

    #[inline(always)]
    pub const fn seq_bits(&self) -> u8 {
        self.seq_bits
    }

    #[inline(always)]
    pub const fn max_seq(&self) -> u32 {
        self.max_seq
    }

    #[inline(always)]
    pub const fn min_seq(&self) -> u32 {
        self.min_seq
    }

    #[inline(always)]
    pub const fn top_overcost_count(&self) -> u32 {
        self.top_overcost_count
    }

    #[inline(always)]
    pub const fn method(&self) -> Method {
        self.method
    }

    #[inline(always)]
    pub const fn max_worker_id(&self) -> u16 {
        Self::calculate_mask(self.worker_id_bits) as u16
    }

    #[inline(always)]
    pub const fn spin_enabled(&self) -> bool {
        self.spin_enabled
    }

    #[inline(always)]
    pub const fn spin_loops(&self) -> u32 {
        self.spin_loops
    }

    #[inline(always)]
    pub const fn spin_yield_every(&self) -> u32 {
        self.spin_yield_every
    }

    /// Number of bits left for the time field
    #[inline(always)]
    pub const fn timestamp_bits(&self) -> u8 {
        64 - self.timestamp_shift()
    }

    #[inline(always)]
    pub(crate) const fn timestamp_shift(&self) -> u8 {
        self.worker_id_bits + self.seq_bits
    }

    #[inline(always)]
    pub(crate) const fn timestamp_mask(&self) -> u64 {
        (1u64 << self.timestamp_bits()) - 1
    }

    #[inline(always)]
    pub(crate) const fn worker_mask(&self) -> u32 {
        Self::calculate_mask(self.worker_id_bits)
    }

    #[inline(always)]
    pub(crate) const fn sequence_mask(&self) -> u32 {
        Self::calculate_mask(self.seq_bits)
    }
}

impl Default for Options {
    /// Options for worker 1 with every default applied
    fn default() -> Self {
        Self::resolve(OptionsBuilder::new(1))
    }
}
