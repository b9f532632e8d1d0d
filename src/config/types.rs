//! Value types shared by the engine and its readers

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Sub};
use strum_macros::{Display, EnumIter};

use crate::config::ODDS;

/// Which component of a recorded `Time` the engine compares.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, Display, Default,
    clap::ValueEnum,
)]
pub enum TimingMethod {
    #[default]
    #[strum(to_string = "Real Time")]
    RealTime,
    #[strum(to_string = "Game Time")]
    GameTime,
}

/// The three sequences an `OddsSnapshot` carries.
/// Display gives the short label used in the readout header.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display, Default,
    clap::ValueEnum,
)]
pub enum OddsKind {
    /// Chance of completing the current segment.
    #[default]
    #[strum(to_string = "FS")]
    #[value(name = "fs")]
    FinishSegment,
    /// Chance of being at or ahead of personal-best pace on the current segment.
    #[strum(to_string = "STS")]
    #[value(name = "sts")]
    SaveTime,
    /// Chance of completing every remaining segment.
    #[strum(to_string = "FR")]
    #[value(name = "fr")]
    FinishRun,
}

/// A signed span of time in seconds.
/// Signed because the pace reference (`pb - offset`) routinely goes negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct SplitTime(f64);

impl SplitTime {
    pub const ZERO: Self = Self(0.0);

    pub const fn from_secs(secs: f64) -> Self {
        Self(secs)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0.0
    }
}

impl Add for SplitTime {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for SplitTime {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for SplitTime {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl std::fmt::Display for SplitTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::utils::format_split_time(*self))
    }
}

/// A probability in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Probability(f64);

impl Probability {
    /// Also the fallback emitted when a ratio can't be trusted.
    pub const CERTAIN: Self = Self(1.0);
    pub const IMPOSSIBLE: Self = Self(0.0);

    pub const fn new(val: f64) -> Self {
        let v = if val < 0.0 {
            0.0
        } else if val > 1.0 {
            1.0
        } else {
            val
        };
        Self(v)
    }

    /// `part / whole`, or None when `whole` is zero.
    pub fn ratio(part: usize, whole: usize) -> Option<Self> {
        if whole == 0 {
            return None;
        }
        Some(Self::new(part as f64 / whole as f64))
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Probability {
    fn default() -> Self {
        Self::CERTAIN
    }
}

impl Mul for Probability {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl std::fmt::Display for Probability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.*}%", ODDS.text.percent_decimals, self.0 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_guards_zero_denominator() {
        assert_eq!(Probability::ratio(3, 0), None);
        assert_eq!(Probability::ratio(0, 0), None);
        assert_eq!(Probability::ratio(4, 5), Some(Probability::new(0.8)));
    }

    #[test]
    fn probability_is_clamped() {
        assert_eq!(Probability::new(1.5).value(), 1.0);
        assert_eq!(Probability::new(-0.2).value(), 0.0);
    }

    #[test]
    fn probability_displays_as_percent() {
        assert_eq!(Probability::new(0.8).to_string(), "80.00%");
        assert_eq!(Probability::CERTAIN.to_string(), "100.00%");
        assert_eq!(Probability::ratio(1, 3).unwrap().to_string(), "33.33%");
    }

    #[test]
    fn odds_kind_labels() {
        assert_eq!(OddsKind::FinishSegment.to_string(), "FS");
        assert_eq!(OddsKind::SaveTime.to_string(), "STS");
        assert_eq!(OddsKind::FinishRun.to_string(), "FR");
    }

    #[test]
    fn split_time_arithmetic_is_signed() {
        let pb = SplitTime::from_secs(25.0);
        let offset = SplitTime::from_secs(40.0);
        assert!((pb - offset).is_negative());
        let mut acc = SplitTime::ZERO;
        acc += pb;
        acc += SplitTime::from_secs(0.5);
        assert_eq!(acc, SplitTime::from_secs(25.5));
    }
}
