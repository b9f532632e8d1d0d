use {
    crate::{config::DF, domain::Run},
    anyhow::{Context, Result, bail},
    std::{fs::File, io::BufReader, path::Path},
};

/// Loads a JSON run export.
pub fn load_run(path: &Path) -> Result<Run> {
    let file =
        File::open(path).with_context(|| format!("Failed to open run file {}", path.display()))?;
    let reader = BufReader::new(file);
    let run: Run = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse run file {}", path.display()))?;

    validate_run(&run)?;

    if DF.log_run_file {
        log::info!(
            "Loaded run from {}: {} segments, {} attempts",
            path.display(),
            run.len(),
            run.attempt_count
        );
    }
    Ok(run)
}

/// Same as `load_run`, from a string.
pub fn parse_run(json: &str) -> Result<Run> {
    let run: Run = serde_json::from_str(json).context("Failed to parse run JSON")?;
    validate_run(&run)?;
    Ok(run)
}

/// Attempt ids must be positive. Everything else (oversized histories,
/// missing PBs) is data the engine copes with, so it's let through.
fn validate_run(run: &Run) -> Result<()> {
    for (index, segment) in run.segments.iter().enumerate() {
        if segment.history.contains_key(&0) {
            bail!(
                "Segment {} ('{}') has a history entry for attempt 0; attempt ids start at 1",
                index,
                segment.name
            );
        }
        if segment.history.len() > run.attempt_count as usize {
            log::warn!(
                "Segment {} ('{}') has {} history entries but the run has {} attempts",
                index,
                segment.name,
                segment.history.len(),
                run.attempt_count
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SplitTime;

    const SAMPLE: &str = r#"{
        "attempt_count": 3,
        "segments": [
            {
                "name": "Forest",
                "personal_best": { "real_time": 83.5, "game_time": 80.0 },
                "history": {
                    "1": { "real_time": 90.0 },
                    "2": null,
                    "3": { "real_time": 82.0, "game_time": 79.5 }
                }
            },
            { "name": "Castle" }
        ]
    }"#;

    #[test]
    fn parses_sample_export() {
        let run = parse_run(SAMPLE).unwrap();
        assert_eq!(run.attempt_count, 3);
        assert_eq!(run.len(), 2);

        let forest = &run.segments[0];
        assert_eq!(forest.attempts(), 3);
        assert_eq!(forest.history[&2], None);
        assert_eq!(
            forest.history[&3].and_then(|t| t.game_time),
            Some(SplitTime::from_secs(79.5))
        );
        assert!(run.segments[1].history.is_empty());
        assert!(run.segments[1].personal_best.is_none());
    }

    #[test]
    fn rejects_attempt_zero() {
        let json = r#"{ "attempt_count": 1, "segments": [ { "name": "A", "history": { "0": null } } ] }"#;
        let err = parse_run(json).unwrap_err();
        assert!(err.to_string().contains("attempt 0"));
    }

    #[test]
    fn rejects_negative_ids() {
        let json = r#"{ "attempt_count": 1, "segments": [ { "name": "A", "history": { "-4": null } } ] }"#;
        assert!(parse_run(json).is_err());
    }

    #[test]
    fn missing_file_has_context() {
        let err = load_run(Path::new("definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to open run file"));
    }
}
