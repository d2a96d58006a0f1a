//! Observer hooks fired by workers on drift and turn-back transitions

/// Kind of transition reported to [`WorkerObserver::action`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    BeginOverCost,
    EndOverCost,
    BeginTurnBack,
    EndTurnBack,
}

/// Snapshot of worker counters at a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionEvent {
    pub kind: ActionKind,
    /// Tick the transition refers to
    pub time_tick: i64,
    pub worker_id: u16,
    /// Virtual ticks used so far in the current drift term
    pub over_cost_count_in_term: u32,
    /// IDs issued so far in the current drift term
    pub gen_count_in_term: u32,
    pub term_index: u32,
}

/// Receives worker transitions.
///
/// Every method defaults to a no-op. Hooks run synchronously while the
/// generator's lock is held: they must return quickly and must never call
/// `next_id` on the generator that invoked them, which would deadlock.
pub trait WorkerObserver: Send + Sync {
    /// Sequence space of the current tick ran out; `tick` is the first virtual tick
    fn begin_over_cost(&self, _tick: i64) {}

    /// Drift term ended
    fn end_over_cost(&self, _tick: i64) {}

    /// Clock moved behind the last used tick; `tick` is the first turn-back tick
    fn begin_turn_back(&self, _tick: i64) {}

    /// Clock caught up with the last used tick again
    fn end_turn_back(&self, _tick: i64) {}

    /// Called after each of the hooks above with the worker counters
    fn action(&self, _event: &ActionEvent) {}
}

/// Observer that ignores every transition
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl WorkerObserver for NoopObserver {}
