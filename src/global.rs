//! Process-wide default generator
//!
//! The generator is created on the first call to [`next_id`] or
//! [`default_generator`] (worker 1, default options) or by
//! [`configure_default`], and lives until the process exits. Its lock is
//! separate from the lock inside the generator.

use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::info;

use crate::error::ConfigError;
use crate::generator::IdGenerator;
use crate::observer::NoopObserver;
use crate::options::Options;
use crate::time::SystemClock;

static DEFAULT_GENERATOR: Lazy<RwLock<Option<Arc<IdGenerator>>>> = Lazy::new(|| RwLock::new(None));

/// Replace the process-wide generator with one built from `options`
///
/// Handles obtained earlier from [`default_generator`] keep their old instance.
pub fn configure_default(options: Options) -> Result<(), ConfigError> {
    let generator = Arc::new(IdGenerator::new(options)?);
    *DEFAULT_GENERATOR.write() = Some(generator);
    info!(
        worker_id = options.worker_id(),
        method = ?options.method(),
        "default ID generator configured"
    );
    Ok(())
}

/// The process-wide generator, created with default options on first use
pub fn default_generator() -> Arc<IdGenerator> {
    let existing = DEFAULT_GENERATOR.read().clone();
    if let Some(generator) = existing {
        return generator;
    }

    let mut slot = DEFAULT_GENERATOR.write();
    let generator = slot.get_or_insert_with(|| {
        info!("default ID generator created with worker 1");
        Arc::new(IdGenerator::build(
            Options::default(),
            SystemClock,
            Arc::new(NoopObserver),
        ))
    });
    Arc::clone(generator)
}

/// Generate a new ID from the process-wide generator
#[inline]
pub fn next_id() -> u64 {
    default_generator().next_id()
}
