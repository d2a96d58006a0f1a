//! # snowdrift
//!
//! A Snowflake-style generator of 64-bit unique identifiers.
//!
//! IDs are laid out as `time tick | worker ID | sequence` and are:
//! - 📈 Time-sorted
//! - 🔒 Thread-safe
//! - 🌊 Drift-tolerant: a burst that exhausts a tick's sequence space borrows
//!   virtual future ticks instead of blocking
//! - ⏪ Clock-regression aware: IDs issued while the clock is behind use a
//!   reserved sequence band
//!
//! ```
//! use snowdrift::{IdGenerator, Options};
//!
//! let generator = IdGenerator::new(Options::new(1).unwrap()).unwrap();
//! let id = generator.next_id();
//! assert_eq!(generator.extract.worker(id), 1);
//! ```

#![forbid(unsafe_code)]

mod error;
mod extractor;
mod generator;
pub mod global;
mod observer;
mod options;
mod time;
mod worker;

#[cfg(test)]
mod tests;

// Re-export main types
pub use error::ConfigError;
pub use extractor::Extractor;
pub use generator::IdGenerator;
pub use global::{configure_default, default_generator, next_id};
pub use observer::{ActionEvent, ActionKind, NoopObserver, WorkerObserver};
pub use options::{Method, Options, OptionsBuilder};
pub use time::{unix_time_ms, SystemClock, TimeSource};
