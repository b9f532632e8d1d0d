use crate::config::{DF, Probability};
use crate::models::RunView;

/// Frequency estimate of "of the attempts that got this far, how many got through this segment".
///
/// Segment 0 is measured against the run's attempt count, every later segment
/// against the previous segment's history size. A history bigger than either
/// reference can only come from structural edits (splits inserted or removed
/// after history existed), so those segments get `Probability::CERTAIN`
/// instead of a ratio above one. A zero reference does the same.
pub(crate) struct ReachEstimator {
    attempt_count: usize,
    /// None until the first segment has been seen.
    prev_attempts: Option<usize>,
}

impl ReachEstimator {
    pub(crate) fn new(attempt_count: usize) -> Self {
        Self {
            attempt_count,
            prev_attempts: None,
        }
    }

    /// Consume the next segment's history size, in race order.
    pub(crate) fn step(&mut self, attempts: usize) -> Probability {
        let reference = self.prev_attempts.unwrap_or(self.attempt_count);

        let odds = if attempts > self.attempt_count || attempts > reference {
            if DF.log_sentinels {
                log::debug!(
                    "Inconsistent history: {} entries vs {} attempts (reference {}). Assuming certain.",
                    attempts,
                    self.attempt_count,
                    reference
                );
            }
            Probability::CERTAIN
        } else {
            Probability::ratio(attempts, reference).unwrap_or(Probability::CERTAIN)
        };

        // Always the raw history size, whichever branch ran.
        self.prev_attempts = Some(attempts);
        odds
    }
}

/// Reachability for every segment of `view`, on its own.
pub fn reach_odds(view: &RunView) -> Vec<Probability> {
    let mut estimator = ReachEstimator::new(view.attempt_count);
    view.segments
        .iter()
        .map(|segment| estimator.step(segment.attempts))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(counts: &[usize], attempt_count: usize) -> Vec<f64> {
        let mut estimator = ReachEstimator::new(attempt_count);
        counts
            .iter()
            .map(|&c| estimator.step(c).value())
            .collect()
    }

    #[test]
    fn three_segments_with_drop_off() {
        assert_eq!(run(&[10, 8, 8], 10), vec![1.0, 0.8, 1.0]);
    }

    #[test]
    fn first_segment_uses_attempt_count() {
        assert_eq!(run(&[5], 20), vec![0.25]);
    }

    #[test]
    fn oversize_first_segment_is_sentinel() {
        assert_eq!(run(&[6, 3], 5), vec![1.0, 0.5]);
    }

    #[test]
    fn growth_over_previous_segment_is_sentinel() {
        // Segment 1 was inserted later and has more entries than segment 0.
        // The raw size still becomes the next reference.
        assert_eq!(run(&[4, 7, 7], 10), vec![0.4, 1.0, 1.0]);
    }

    #[test]
    fn zero_attempts_anywhere_never_divides_by_zero() {
        assert_eq!(run(&[0, 0], 0), vec![1.0, 1.0]);
        assert_eq!(run(&[3, 0, 0], 3), vec![1.0, 0.0, 1.0]);
    }

    #[test]
    fn empty_run_is_empty() {
        assert!(reach_odds(&RunView::default()).is_empty());
    }
}
