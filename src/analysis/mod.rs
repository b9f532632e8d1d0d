// Odds estimators. Reach and pace share one forward pass in the engine;
// completion is a backward pass over reach.
pub mod completion;
pub mod pace;
pub mod reachability;

pub(crate) use {pace::PaceEstimator, reachability::ReachEstimator};

pub use {completion::finish_odds, pace::pace_odds, reachability::reach_odds};
