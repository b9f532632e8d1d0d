use std::sync::{Arc, PoisonError, RwLock};

use crate::config::{SplitTime, TimingMethod};
use crate::domain::Run;

/// One segment as the engine sees it: timing method already applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentView {
    /// History size, counting entries without a time.
    pub attempts: usize,
    /// One slot per history entry; None where the entry has no time for the chosen method.
    pub times: Vec<Option<SplitTime>>,
    /// Cumulative PB time at the end of this segment.
    pub personal_best: Option<SplitTime>,
}

/// Immutable copy of everything one recomputation reads.
/// Taken once at the start of a pass so the live `Run` can keep changing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunView {
    pub attempt_count: usize,
    pub segments: Vec<SegmentView>,
}

impl RunView {
    pub fn capture(run: &Run, method: TimingMethod) -> Self {
        let segments = run
            .segments
            .iter()
            .map(|segment| SegmentView {
                attempts: segment.attempts(),
                times: segment
                    .history
                    .values()
                    .map(|entry| entry.and_then(|time| time.get(method)))
                    .collect(),
                personal_best: segment.personal_best.and_then(|pb| pb.get(method)),
            })
            .collect();

        Self {
            attempt_count: run.attempt_count as usize,
            segments,
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Anything the engine can take a `RunView` from.
pub trait RunProvider {
    fn run_view(&self, method: TimingMethod) -> RunView;
}

impl RunProvider for Run {
    fn run_view(&self, method: TimingMethod) -> RunView {
        RunView::capture(self, method)
    }
}

/// Holds the read lock only for the copy.
impl RunProvider for RwLock<Run> {
    fn run_view(&self, method: TimingMethod) -> RunView {
        // Poisoning only means a writer panicked; the engine reads, so take what's there.
        let guard = self.read().unwrap_or_else(PoisonError::into_inner);
        RunView::capture(&guard, method)
    }
}

impl<T: RunProvider + ?Sized> RunProvider for Arc<T> {
    fn run_view(&self, method: TimingMethod) -> RunView {
        (**self).run_view(method)
    }
}
