use tabled::{Table, Tabled, settings::Style};

use crate::config::TimingMethod;
use crate::domain::Run;
use crate::models::OddsSnapshot;

#[derive(Tabled)]
struct SegmentOddsRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Segment")]
    name: String,
    #[tabled(rename = "Attempts")]
    attempts: usize,
    #[tabled(rename = "PB")]
    personal_best: String,
    #[tabled(rename = "FS")]
    reach: String,
    #[tabled(rename = "STS")]
    pace: String,
    #[tabled(rename = "FR")]
    finish: String,
}

/// One row per segment, odds next to the data they came from.
/// `snapshot` must have been computed from `run` with the same timing method.
pub fn odds_table(run: &Run, snapshot: &OddsSnapshot, timing_method: TimingMethod) -> String {
    let rows: Vec<SegmentOddsRow> = run
        .segments
        .iter()
        .zip(snapshot.rows())
        .map(|(segment, row)| SegmentOddsRow {
            index: row.index,
            name: segment.name.clone(),
            attempts: segment.attempts(),
            personal_best: segment
                .personal_best
                .and_then(|pb| pb.get(timing_method))
                .map(|pb| pb.to_string())
                .unwrap_or_else(|| "-".to_string()),
            reach: row.reach.to_string(),
            pace: row.pace.to_string(),
            finish: row.finish.to_string(),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Time;
    use crate::engine::OddsEngine;

    #[test]
    fn table_has_a_row_per_segment() {
        let mut run = Run::with_segments(["Forest", "Castle"]);
        run.segments[0].personal_best = Some(Time::real(83.5));
        run.record_attempt(&[Some(Time::real(80.0)), Some(Time::real(60.0))]);

        let engine = OddsEngine::with_run(&run, TimingMethod::RealTime);
        let table = odds_table(&run, &engine.snapshot(), TimingMethod::RealTime);

        assert!(table.contains("Forest"));
        assert!(table.contains("Castle"));
        assert!(table.contains("1:23.50"));
        assert!(table.contains("STS"));
        assert!(table.contains("100.00%"));
    }
}
