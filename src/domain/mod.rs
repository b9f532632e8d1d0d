// Domain types and value objects
mod run;
mod segment;
mod time;

// Re-export commonly used types to the world
pub use run::Run;
pub use segment::{AttemptId, Segment, SegmentHistory};
pub use time::Time;
