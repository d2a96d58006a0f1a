//! Drift worker
//!
//! When a tick's sequence space runs out the worker keeps issuing IDs on
//! virtual ticks ahead of the real clock, for at most `top_overcost_count`
//! ticks per term. While the real clock is behind the last used tick it issues
//! IDs on earlier ticks, using sequence values 1-4 as a turn-back band. The
//! walk stops at tick 0; below it the worker waits for the clock instead.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use super::wait::wait_next_tick;
use super::{IdLayout, Worker};
use crate::observer::{ActionEvent, ActionKind, WorkerObserver};
use crate::options::Options;
use crate::time::TimeSource;

/// Number of distinct turn-back indexes before wrapping
const TURN_BACK_SLOTS: u32 = 4;

/// Term index wraps to zero once it passes this value
const MAX_TERM_INDEX: u32 = 10_000;

/// Pause on every ID issued while the clock is behind
const TURN_BACK_PAUSE: Duration = Duration::from_millis(1);

/// Mutable state of a drift worker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct DriftState {
    pub(crate) last_time_tick: i64,
    pub(crate) current_seq: u32,
    pub(crate) is_over_cost: bool,
    pub(crate) over_cost_count_in_term: u32,
    pub(crate) gen_count_in_term: u32,
    pub(crate) term_index: u32,
    /// Next tick handed out while the clock is behind, `None` when caught up
    pub(crate) turn_back_time_tick: Option<i64>,
    pub(crate) turn_back_index: u32,
}

pub(crate) struct DriftWorker<C> {
    options: Options,
    layout: IdLayout,
    turn_back_slots: u32,
    clock: C,
    observer: Arc<dyn WorkerObserver>,
    pub(crate) state: DriftState,
}

impl<C> DriftWorker<C>
where
    C: TimeSource,
{
    pub(crate) fn new(options: Options, clock: C, observer: Arc<dyn WorkerObserver>) -> Self {
        Self {
            layout: IdLayout::new(&options),
            // Narrow sequence fields cannot hold all four indexes
            turn_back_slots: TURN_BACK_SLOTS.min(options.sequence_mask()).max(1),
            clock,
            observer,
            state: DriftState {
                current_seq: options.min_seq(),
                ..DriftState::default()
            },
            options,
        }
    }

    #[inline(always)]
    fn now_tick(&self) -> i64 {
        self.clock.current_millis() - self.options.base_time()
    }

    fn next_normal_id(&mut self) -> u64 {
        let mut now = self.now_tick();
        if now < self.state.last_time_tick {
            match self.next_turn_back_id(now) {
                Some(id) => return id,
                // Every tick below the last one is used up
                None => {
                    let floor = self.state.last_time_tick - 1;
                    now = wait_next_tick(floor, &self.options, || self.now_tick());
                }
            }
        }

        if let Some(tick) = self.state.turn_back_time_tick.take() {
            debug!(
                worker_id = self.options.worker_id(),
                tick = now,
                "clock caught up, leaving turn-back"
            );
            self.notify(ActionKind::EndTurnBack, tick.max(0));
        }

        if now > self.state.last_time_tick {
            self.state.last_time_tick = now;
            self.state.current_seq = self.options.min_seq();
            return self.issue(now);
        }

        if self.state.current_seq > self.options.max_seq() {
            return self.begin_over_cost();
        }

        self.issue(self.state.last_time_tick)
    }

    fn next_over_cost_id(&mut self) -> u64 {
        let now = self.now_tick();
        if now > self.state.last_time_tick {
            self.end_over_cost(now);
            self.state.last_time_tick = now;
            self.state.current_seq = self.options.min_seq();
            return self.issue(now);
        }

        if self.state.over_cost_count_in_term >= self.options.top_overcost_count() {
            self.end_over_cost(now);
            let last = self.state.last_time_tick;
            let next = wait_next_tick(last, &self.options, || self.now_tick());
            self.state.last_time_tick = next;
            self.state.current_seq = self.options.min_seq();
            return self.issue(next);
        }

        if self.state.current_seq > self.options.max_seq() {
            self.state.last_time_tick += 1;
            self.state.current_seq = self.options.min_seq();
            self.state.over_cost_count_in_term += 1;
            self.state.gen_count_in_term += 1;
            return self.issue(self.state.last_time_tick);
        }

        self.state.gen_count_in_term += 1;
        self.issue(self.state.last_time_tick)
    }

    /// `None` once the walk would go below tick 0
    fn next_turn_back_id(&mut self, now: i64) -> Option<u64> {
        let tick = match self.state.turn_back_time_tick {
            Some(tick) => tick,
            None => {
                let tick = self.state.last_time_tick - 1;
                if tick < 0 {
                    return None;
                }
                self.state.turn_back_index = if self.state.turn_back_index >= self.turn_back_slots {
                    1
                } else {
                    self.state.turn_back_index + 1
                };
                warn!(
                    worker_id = self.options.worker_id(),
                    behind_ms = self.state.last_time_tick - now,
                    turn_back_index = self.state.turn_back_index,
                    "clock moved backwards, issuing turn-back IDs"
                );
                self.notify(ActionKind::BeginTurnBack, tick);
                tick
            }
        };
        if tick < 0 {
            return None;
        }

        thread::sleep(TURN_BACK_PAUSE);
        self.state.turn_back_time_tick = Some(tick - 1);
        Some(self.layout.assemble_id(tick, self.state.turn_back_index))
    }

    fn begin_over_cost(&mut self) -> u64 {
        let tick = self.state.last_time_tick + 1;
        self.state.term_index += 1;
        self.state.last_time_tick = tick;
        self.state.current_seq = self.options.min_seq();
        self.state.is_over_cost = true;
        self.state.over_cost_count_in_term = 1;
        self.state.gen_count_in_term = 1;
        debug!(
            worker_id = self.options.worker_id(),
            tick,
            term_index = self.state.term_index,
            "sequence exhausted, drifting ahead of the clock"
        );
        self.notify(ActionKind::BeginOverCost, tick);
        self.issue(tick)
    }

    fn end_over_cost(&mut self, tick: i64) {
        debug!(
            worker_id = self.options.worker_id(),
            tick,
            over_cost_count = self.state.over_cost_count_in_term,
            gen_count = self.state.gen_count_in_term,
            "drift term ended"
        );
        self.notify(ActionKind::EndOverCost, tick);
        if self.state.term_index > MAX_TERM_INDEX {
            self.state.term_index = 0;
        }
        self.state.is_over_cost = false;
        self.state.over_cost_count_in_term = 0;
        self.state.gen_count_in_term = 0;
    }

    #[inline(always)]
    fn issue(&mut self, tick: i64) -> u64 {
        let id = self.layout.assemble_id(tick, self.state.current_seq);
        self.state.current_seq += 1;
        id
    }

    fn notify(&self, kind: ActionKind, tick: i64) {
        match kind {
            ActionKind::BeginOverCost => self.observer.begin_over_cost(tick),
            ActionKind::EndOverCost => self.observer.end_over_cost(tick),
            ActionKind::BeginTurnBack => self.observer.begin_turn_back(tick),
            ActionKind::EndTurnBack => self.observer.end_turn_back(tick),
        }
        self.observer.action(&ActionEvent {
            kind,
            time_tick: tick,
            worker_id: self.options.worker_id(),
            over_cost_count_in_term: self.state.over_cost_count_in_term,
            gen_count_in_term: self.state.gen_count_in_term,
            term_index: self.state.term_index,
        });
    }
}

impl<C> Worker for DriftWorker<C>
where
    C: TimeSource,
{
    fn next_id(&mut self) -> u64 {
        if self.state.is_over_cost {
            self.next_over_cost_id()
        } else {
            self.next_normal_id()
        }
    }
}
