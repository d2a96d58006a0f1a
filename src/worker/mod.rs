//! ID generation algorithms
//!
//! - `drift` - Drifts onto virtual ticks on sequence exhaustion, reserves a
//!   sequence band for clock regression
//! - `simple` - Waits for the next tick on sequence exhaustion
//! - `wait` - Spin and backoff strategies

mod drift;
mod simple;
pub(crate) mod wait;

use std::sync::Arc;

use crate::observer::WorkerObserver;
use crate::options::{Method, Options};
use crate::time::TimeSource;

pub(crate) use drift::DriftWorker;
pub(crate) use simple::SimpleWorker;

/// One ID generation strategy with exclusively owned state.
///
/// Callers serialise access; the generator holds a lock around every call.
pub(crate) trait Worker: Send {
    fn next_id(&mut self) -> u64;
}

/// Bit layout shared by every worker
#[derive(Debug, Clone, Copy)]
pub(crate) struct IdLayout {
    ts_shift: u8,
    ts_mask: u64,
    worker_prefix: u64,
}

impl IdLayout {
    pub(crate) fn new(options: &Options) -> Self {
        Self {
            ts_shift: options.timestamp_shift(),
            ts_mask: options.timestamp_mask(),
            worker_prefix: (options.worker_id() as u64) << options.seq_bits(),
        }
    }

    /// Workers never pass a tick below 0
    #[inline(always)]
    pub(crate) fn assemble_id(&self, tick: i64, sequence: u32) -> u64 {
        debug_assert!(tick >= 0, "tick {tick} before the epoch");
        (((tick as u64) & self.ts_mask) << self.ts_shift) | self.worker_prefix | (sequence as u64)
    }
}

/// Build the worker selected by `options.method()`
pub(crate) fn build_worker<C>(
    options: Options,
    clock: C,
    observer: Arc<dyn WorkerObserver>,
) -> Box<dyn Worker>
where
    C: TimeSource,
{
    match options.method() {
        Method::Drift => Box::new(DriftWorker::new(options, clock, observer)),
        Method::Simple => Box::new(SimpleWorker::new(options, clock)),
    }
}
