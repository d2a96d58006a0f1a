//! Thread-safe ID generator facade

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::error::ConfigError;
use crate::extractor::Extractor;
use crate::observer::{NoopObserver, WorkerObserver};
use crate::options::Options;
use crate::time::{SystemClock, TimeSource};
use crate::worker::{build_worker, Worker};

/// ID generator owning one worker behind a mutex
///
/// Any number of threads may call [`IdGenerator::next_id`]; calls are
/// serialised and each one runs the worker's algorithm to completion.
pub struct IdGenerator {
    worker: Mutex<Box<dyn Worker>>,
    options: Options,

    /// Extractor for decomposing IDs issued by this generator
    pub extract: Extractor,
}

impl IdGenerator {
    /// Create a generator reading the system clock
    ///
    /// # Returns
    /// * `Result<IdGenerator, ConfigError>` - New generator or error if the base time lies in the future
    pub fn new(options: Options) -> Result<Self, ConfigError> {
        Self::from_parts(options, SystemClock, Arc::new(NoopObserver))
    }

    /// Create a generator reading `clock`
    pub fn with_clock<C>(options: Options, clock: C) -> Result<Self, ConfigError>
    where
        C: TimeSource,
    {
        Self::from_parts(options, clock, Arc::new(NoopObserver))
    }

    /// Create a generator reporting drift and turn-back transitions to `observer`
    pub fn with_observer<O>(options: Options, observer: Arc<O>) -> Result<Self, ConfigError>
    where
        O: WorkerObserver + 'static,
    {
        Self::from_parts(options, SystemClock, observer)
    }

    /// Create a generator from a clock and an observer
    pub fn from_parts<C, O>(options: Options, clock: C, observer: Arc<O>) -> Result<Self, ConfigError>
    where
        C: TimeSource,
        O: WorkerObserver + 'static,
    {
        let now = clock.current_millis();
        if options.base_time() > now {
            return Err(ConfigError::BaseTimeInFuture {
                base_time: options.base_time(),
                now,
            });
        }
        Ok(Self::build(options, clock, observer))
    }

    pub(crate) fn build<C>(options: Options, clock: C, observer: Arc<dyn WorkerObserver>) -> Self
    where
        C: TimeSource,
    {
        debug!(
            worker_id = options.worker_id(),
            method = ?options.method(),
            "creating ID generator"
        );
        Self {
            worker: Mutex::new(build_worker(options, clock, observer)),
            options,
            extract: Extractor::new(options),
        }
    }

    /// Generate a new ID
    ///
    /// Never fails. May block while the sequence space of the current tick is
    /// exhausted or while the clock is behind the last issued tick.
    #[inline]
    pub fn next_id(&self) -> u64 {
        self.worker.lock().next_id()
    }

    /// Options this generator was built with
    #[inline(always)]
    pub const fn options(&self) -> &Options {
        &self.options
    }
}

impl fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdGenerator")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
