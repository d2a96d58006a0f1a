//! Simple worker
//!
//! Waits for the next real tick when the sequence space runs out. On clock
//! regression it only logs and keeps packing the regressed tick, so an ID may
//! repeat or sort before one issued earlier. A clock reading before the epoch
//! counts as tick 0.

use tracing::warn;

use super::wait::wait_next_tick;
use super::{IdLayout, Worker};
use crate::options::Options;
use crate::time::TimeSource;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SimpleState {
    pub(crate) last_time_tick: i64,
    pub(crate) current_seq: u32,
}

pub(crate) struct SimpleWorker<C> {
    options: Options,
    layout: IdLayout,
    clock: C,
    pub(crate) state: SimpleState,
}

impl<C> SimpleWorker<C>
where
    C: TimeSource,
{
    pub(crate) fn new(options: Options, clock: C) -> Self {
        Self {
            layout: IdLayout::new(&options),
            clock,
            state: SimpleState {
                last_time_tick: 0,
                current_seq: options.min_seq(),
            },
            options,
        }
    }

    #[inline(always)]
    fn now_tick(&self) -> i64 {
        self.clock.current_millis() - self.options.base_time()
    }
}

impl<C> Worker for SimpleWorker<C>
where
    C: TimeSource,
{
    fn next_id(&mut self) -> u64 {
        // Ticks before the epoch cannot be packed
        let mut now = self.now_tick().max(0);
        let last = self.state.last_time_tick;

        if now == last {
            self.state.current_seq += 1;
            if self.state.current_seq > self.options.max_seq() {
                self.state.current_seq = self.options.min_seq();
                now = wait_next_tick(last, &self.options, || self.now_tick());
            }
        } else {
            self.state.current_seq = self.options.min_seq();
        }

        if now < last {
            warn!(
                worker_id = self.options.worker_id(),
                behind_ms = last - now,
                "clock moved backwards, issuing IDs on the regressed tick"
            );
        }

        self.state.last_time_tick = now;
        self.layout.assemble_id(now, self.state.current_seq)
    }
}
