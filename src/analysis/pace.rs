use crate::config::{DF, Probability, SplitTime};
use crate::models::{RunView, SegmentView};

/// Share of a segment's history entries whose time is at or under the pace reference.
///
/// The reference for segment i is `pb[i] - offset`, where `offset` is the sum of
/// every earlier segment's cumulative PB time. PB times are already cumulative, so
/// the offset compounds; this matches the numbers the timer component has always shown.
pub(crate) struct PaceEstimator {
    offset: SplitTime,
}

impl PaceEstimator {
    pub(crate) fn new() -> Self {
        Self {
            offset: SplitTime::ZERO,
        }
    }

    pub(crate) fn step(&mut self, segment: &SegmentView) -> Probability {
        let on_pace = match segment.personal_best {
            Some(pb) => {
                let target = pb - self.offset;
                segment
                    .times
                    .iter()
                    .flatten()
                    .filter(|&&time| time <= target)
                    .count()
            }
            // No reference, nothing can be on pace.
            None => 0,
        };

        if let Some(pb) = segment.personal_best {
            self.offset += pb;
        }

        match Probability::ratio(on_pace, segment.attempts) {
            Some(odds) => odds,
            None => {
                if DF.log_sentinels {
                    log::debug!("Segment has no history. Pace odds assumed certain.");
                }
                Probability::CERTAIN
            }
        }
    }
}

/// Pace odds for every segment of `view`, on its own.
pub fn pace_odds(view: &RunView) -> Vec<Probability> {
    let mut estimator = PaceEstimator::new();
    view.segments.iter().map(|s| estimator.step(s)).collect()
}
