//! Configuration module for the odds engine.

// Can all be private now because we have a public re-export.
mod debug;
mod odds;
mod types;

// Re-export commonly used items
pub use debug::DF;
pub use odds::{ODDS, OddsSettings};
pub use types::{OddsKind, Probability, SplitTime, TimingMethod};

/// Read by the trace_time macro
pub const LOG_PERFORMANCE: bool = DF.log_performance;
