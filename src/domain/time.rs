use serde::{Deserialize, Serialize};

use crate::config::{SplitTime, TimingMethod};

/// A recorded time, with each timing method stored separately.
/// Either component may be missing (e.g. game time was never hooked).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Time {
    #[serde(default)]
    pub real_time: Option<SplitTime>,
    #[serde(default)]
    pub game_time: Option<SplitTime>,
}

impl Time {
    pub const fn new(real_time: Option<SplitTime>, game_time: Option<SplitTime>) -> Self {
        Self {
            real_time,
            game_time,
        }
    }

    /// Real time only, in seconds.
    pub const fn real(secs: f64) -> Self {
        Self::new(Some(SplitTime::from_secs(secs)), None)
    }

    pub fn get(&self, method: TimingMethod) -> Option<SplitTime> {
        match method {
            TimingMethod::RealTime => self.real_time,
            TimingMethod::GameTime => self.game_time,
        }
    }
}
