use itertools::izip;

use crate::config::{OddsKind, Probability};

/// The engine's output. Three sequences, one slot per segment, always the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OddsSnapshot {
    reach: Vec<Probability>,
    pace: Vec<Probability>,
    finish: Vec<Probability>,
}

/// One segment's worth of odds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OddsRow {
    pub index: usize,
    pub reach: Probability,
    pub pace: Probability,
    pub finish: Probability,
}

impl OddsSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn new(
        reach: Vec<Probability>,
        pace: Vec<Probability>,
        finish: Vec<Probability>,
    ) -> Self {
        debug_assert_eq!(reach.len(), pace.len());
        debug_assert_eq!(reach.len(), finish.len());
        Self {
            reach,
            pace,
            finish,
        }
    }

    pub fn len(&self) -> usize {
        self.reach.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reach.is_empty()
    }

    /// Chance of completing each segment, given the previous one was completed.
    pub fn reach(&self) -> &[Probability] {
        &self.reach
    }

    /// Chance of being at or ahead of reference pace on each segment.
    pub fn pace(&self) -> &[Probability] {
        &self.pace
    }

    /// Chance of completing everything from each segment to the end.
    pub fn finish(&self) -> &[Probability] {
        &self.finish
    }

    pub fn series(&self, kind: OddsKind) -> &[Probability] {
        match kind {
            OddsKind::FinishSegment => &self.reach,
            OddsKind::SaveTime => &self.pace,
            OddsKind::FinishRun => &self.finish,
        }
    }

    /// None for indices past the end; callers treat that as "no data".
    pub fn get(&self, kind: OddsKind, index: usize) -> Option<Probability> {
        self.series(kind).get(index).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = OddsRow> + '_ {
        izip!(&self.reach, &self.pace, &self.finish)
            .enumerate()
            .map(|(index, (&reach, &pace, &finish))| OddsRow {
                index,
                reach,
                pace,
                finish,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn get_out_of_range_is_none() {
        let snapshot = OddsSnapshot::new(
            vec![Probability::new(0.5)],
            vec![Probability::new(0.25)],
            vec![Probability::new(0.5)],
        );
        assert_eq!(snapshot.get(OddsKind::SaveTime, 0), Some(Probability::new(0.25)));
        assert_eq!(snapshot.get(OddsKind::FinishRun, 1), None);
        assert_eq!(OddsSnapshot::empty().get(OddsKind::FinishSegment, 0), None);
    }

    #[test]
    fn rows_line_up_by_index() {
        let snapshot = OddsSnapshot::new(
            vec![Probability::new(1.0), Probability::new(0.5)],
            vec![Probability::new(0.1), Probability::new(0.2)],
            vec![Probability::new(0.5), Probability::new(0.5)],
        );
        let rows: Vec<OddsRow> = snapshot.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].index, 1);
        assert_eq!(rows[1].pace, Probability::new(0.2));
    }

    #[test]
    fn every_series_has_segment_count() {
        let snapshot = OddsSnapshot::new(
            vec![Probability::CERTAIN; 3],
            vec![Probability::IMPOSSIBLE; 3],
            vec![Probability::CERTAIN; 3],
        );
        for kind in OddsKind::iter() {
            assert_eq!(snapshot.series(kind).len(), 3);
        }
    }
}
