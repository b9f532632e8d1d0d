//! Readout text and runtime settings

use serde::{Deserialize, Serialize};

use crate::config::{OddsKind, TimingMethod};

/// Fixed text used when rendering odds.
pub struct OddsTextConfig {
    /// Header prefix, e.g. "Odds (FS / STS)"
    pub title: &'static str,
    /// Shown when there is no active segment or it has no data
    pub no_data: &'static str,
    /// Between the first and second value
    pub separator: &'static str,
    pub percent_decimals: usize,
}

/// Timing thresholds for the engine.
pub struct EngineConfig {
    /// trace_time threshold for a full recomputation
    pub slow_recompute_micros: u128,
}

pub struct OddsConfig {
    pub text: OddsTextConfig,
    pub engine: EngineConfig,
}

pub const ODDS: OddsConfig = OddsConfig {
    text: OddsTextConfig {
        title: "Odds",
        no_data: "-- / --",
        separator: " / ",
        percent_decimals: 2,
    },
    engine: EngineConfig {
        slow_recompute_micros: 1000,
    },
};

/// What the readout shows, and which time component the engine compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OddsSettings {
    #[serde(default)]
    pub timing_method: TimingMethod,
    #[serde(default)]
    pub value_one: OddsKind,
    #[serde(default)]
    pub value_two: OddsKind,
    #[serde(default)]
    pub display_two_values: bool,
}

impl OddsSettings {
    /// The kinds the readout shows, in order.
    pub fn shown_kinds(&self) -> Vec<OddsKind> {
        if self.display_two_values {
            vec![self.value_one, self.value_two]
        } else {
            vec![self.value_one]
        }
    }
}
