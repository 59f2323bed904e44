#![allow(clippy::module_inception)]

pub mod engine;
pub mod shared;
pub mod tools;

#[cfg(feature = "cli")]
pub mod platform;

pub use engine::units::{DisplayMetrics, MetricsProvider, Unit, UnitError};
pub use shared::{Clock, ManualClock, MonotonicClock, SplitTimer, TimingReport};
pub use tools::logger::{LogLevel, LogSink, Logger, MemorySink};
