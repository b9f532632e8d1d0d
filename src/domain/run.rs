use {
    super::{AttemptId, Segment, Time},
    serde::{Deserialize, Serialize},
};

/// An ordered list of segments plus the total number of attempts ever started.
/// Owned and mutated by the timer; the engine only ever reads a copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Run {
    #[serde(default)]
    pub attempt_count: u32,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

impl Run {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_segments<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            attempt_count: 0,
            segments: names.into_iter().map(Segment::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn push_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Structural edit. Existing history is kept as-is, which is exactly how
    /// history ends up inconsistent with `attempt_count`.
    pub fn insert_segment(&mut self, index: usize, segment: Segment) {
        let index = index.min(self.segments.len());
        self.segments.insert(index, segment);
    }

    pub fn remove_segment(&mut self, index: usize) -> Option<Segment> {
        (index < self.segments.len()).then(|| self.segments.remove(index))
    }

    /// Highest attempt id recorded in any segment's history.
    pub fn last_attempt_id(&self) -> Option<AttemptId> {
        self.segments
            .iter()
            .filter_map(|segment| segment.history.keys().next_back().copied())
            .max()
    }

    /// Records a finished or reset attempt.
    /// `reached` holds one entry per segment the attempt got through, in order:
    /// `Some(segment_time)` or `None` for a skipped split. Later segments get no entry.
    /// The new id is past every id already in history, so an imported run with
    /// gaps or ids above `attempt_count` never has an entry overwritten.
    pub fn record_attempt(&mut self, reached: &[Option<Time>]) -> AttemptId {
        let id = self.attempt_count.max(self.last_attempt_id().unwrap_or(0)) + 1;
        self.attempt_count += 1;
        for (segment, time) in self.segments.iter_mut().zip(reached) {
            segment.record(id, *time);
        }
        id
    }
}
