/// Shared utilities and common modules
pub mod clock;
pub mod debugger;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use debugger::{ReportEntry, Split, SplitTimer, TimingReport};
