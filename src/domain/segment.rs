use {
    super::Time,
    serde::{Deserialize, Serialize},
    std::collections::BTreeMap,
};

/// Attempt ids are positive but not necessarily contiguous.
pub type AttemptId = u32;

/// Per-attempt time for one segment alone.
/// `None` means the attempt left no usable time here (skipped, or reset before it).
pub type SegmentHistory = BTreeMap<AttemptId, Option<Time>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub name: String,

    /// Cumulative time from run start to the end of this segment in the PB run.
    #[serde(default)]
    pub personal_best: Option<Time>,

    #[serde(default)]
    pub history: SegmentHistory,
}

impl Segment {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            personal_best: None,
            history: SegmentHistory::new(),
        }
    }

    pub fn with_personal_best(mut self, pb: Time) -> Self {
        self.personal_best = Some(pb);
        self
    }

    /// Insert or replace the entry for `attempt`.
    pub fn record(&mut self, attempt: AttemptId, time: Option<Time>) {
        self.history.insert(attempt, time);
    }

    /// Number of history entries, timed or not.
    pub fn attempts(&self) -> usize {
        self.history.len()
    }
}
