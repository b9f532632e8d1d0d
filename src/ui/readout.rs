use crate::config::{DF, ODDS, OddsSettings};
use crate::models::OddsSnapshot;

/// The two lines of text an odds display shows: a header naming the values,
/// and the values themselves for the current segment.
///
/// Keeps the last text so the caller only redraws when something changed.
#[derive(Debug, Clone)]
pub struct Readout {
    settings: OddsSettings,
    header: String,
    values: String,
}

impl Readout {
    pub fn new(settings: OddsSettings) -> Self {
        Self {
            settings,
            header: Self::header_text(&settings),
            values: ODDS.text.no_data.to_string(),
        }
    }

    /// e.g. "Odds (FS)" or "Odds (FS / FR)"
    pub fn header_text(settings: &OddsSettings) -> String {
        let labels: Vec<String> = settings
            .shown_kinds()
            .iter()
            .map(|kind| kind.to_string())
            .collect();
        format!("{} ({})", ODDS.text.title, labels.join(ODDS.text.separator))
    }

    /// `current` is the active segment index, None when no attempt is running.
    /// Anything the snapshot has no slot for reads as "no data".
    pub fn value_text(
        settings: &OddsSettings,
        snapshot: &OddsSnapshot,
        current: Option<usize>,
    ) -> String {
        let Some(index) = current.filter(|&i| i < snapshot.len()) else {
            return ODDS.text.no_data.to_string();
        };

        let values: Vec<String> = settings
            .shown_kinds()
            .iter()
            .filter_map(|&kind| snapshot.get(kind, index))
            .map(|odds| odds.to_string())
            .collect();
        values.join(ODDS.text.separator)
    }

    /// Rebuilds both lines. Returns true if either changed.
    pub fn update(&mut self, snapshot: &OddsSnapshot, current: Option<usize>) -> bool {
        let header = Self::header_text(&self.settings);
        let values = Self::value_text(&self.settings, snapshot, current);

        let changed = header != self.header || values != self.values;
        if changed {
            if DF.log_readout {
                log::debug!("Readout changed: '{}' '{}'", header, values);
            }
            self.header = header;
            self.values = values;
        }
        changed
    }

    pub fn set_settings(&mut self, settings: OddsSettings) {
        self.settings = settings;
    }

    pub fn settings(&self) -> &OddsSettings {
        &self.settings
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn values(&self) -> &str {
        &self.values
    }
}

impl Default for Readout {
    fn default() -> Self {
        Self::new(OddsSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OddsKind;
    use crate::domain::{Run, Time};
    use crate::engine::OddsEngine;
    use crate::models::RunProvider;

    fn snapshot() -> OddsSnapshot {
        let mut run = Run::with_segments(["A", "B"]);
        run.segments[0].personal_best = Some(Time::real(25.0));
        for secs in [10.0, 20.0, 30.0, 40.0] {
            run.record_attempt(&[Some(Time::real(secs))]);
        }
        // 4 attempts reach A; none reach B.
        OddsEngine::calculate(&run.run_view(Default::default()))
    }

    #[test]
    fn header_lists_shown_values() {
        let one = OddsSettings::default();
        assert_eq!(Readout::header_text(&one), "Odds (FS)");

        let two = OddsSettings {
            value_one: OddsKind::SaveTime,
            value_two: OddsKind::FinishRun,
            display_two_values: true,
            ..Default::default()
        };
        assert_eq!(Readout::header_text(&two), "Odds (STS / FR)");
    }

    #[test]
    fn values_for_active_segment() {
        let settings = OddsSettings {
            value_one: OddsKind::FinishSegment,
            value_two: OddsKind::SaveTime,
            display_two_values: true,
            ..Default::default()
        };
        assert_eq!(
            Readout::value_text(&settings, &snapshot(), Some(0)),
            "100.00% / 50.00%"
        );
    }

    #[test]
    fn no_active_segment_is_placeholder() {
        let settings = OddsSettings::default();
        let snapshot = snapshot();
        assert_eq!(Readout::value_text(&settings, &snapshot, None), "-- / --");
        assert_eq!(Readout::value_text(&settings, &snapshot, Some(2)), "-- / --");
    }

    #[test]
    fn update_reports_changes_only() {
        let snapshot = snapshot();
        let mut readout = Readout::default();

        assert!(!readout.update(&snapshot, None));
        assert!(readout.update(&snapshot, Some(1)));
        // Segment B: 0 of 4 reached it
        assert_eq!(readout.values(), "0.00%");
        assert!(!readout.update(&snapshot, Some(1)));

        readout.set_settings(OddsSettings {
            value_one: OddsKind::FinishRun,
            ..Default::default()
        });
        assert!(readout.update(&snapshot, Some(1)));
        assert_eq!(readout.header(), "Odds (FR)");
    }
}
