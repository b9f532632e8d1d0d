// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use config::{OddsKind, OddsSettings, Probability, SplitTime, TimingMethod};
pub use domain::{AttemptId, Run, Segment, Time};
pub use engine::{OddsEngine, RecomputeTrigger};
pub use models::{OddsSnapshot, RunProvider, RunView};
pub use ui::Readout;

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON run export to analyse
    pub run_file: PathBuf,

    /// Which recorded time to compare against the PB
    #[arg(long, value_enum, default_value_t = TimingMethod::RealTime)]
    pub timing: TimingMethod,

    /// Segment index to print the readout line for
    #[arg(long)]
    pub current: Option<usize>,

    /// First value shown in the readout
    #[arg(long, value_enum, default_value_t = OddsKind::FinishSegment)]
    pub value_one: OddsKind,

    /// Second value shown in the readout (with --two-values)
    #[arg(long, value_enum, default_value_t = OddsKind::FinishSegment)]
    pub value_two: OddsKind,

    /// Show two values in the readout instead of one
    #[arg(long, default_value_t = false)]
    pub two_values: bool,
}

impl Cli {
    pub fn settings(&self) -> OddsSettings {
        OddsSettings {
            timing_method: self.timing,
            value_one: self.value_one,
            value_two: self.value_two,
            display_two_values: self.two_values,
        }
    }
}

/// Loads the run, computes the odds and prints them.
/// This is the public API for the binary to call
pub fn run_cli(args: Cli) -> anyhow::Result<()> {
    let settings = args.settings();
    let run = data::load_run(&args.run_file)?;

    let engine = OddsEngine::with_run(&run, settings.timing_method);
    let snapshot = engine.snapshot();

    println!("{}", ui::odds_table(&run, &snapshot, settings.timing_method));

    if args.current.is_some() {
        let mut readout = Readout::new(settings);
        readout.update(&snapshot, args.current);
        println!("{}: {}", readout.header(), readout.values());
    }

    Ok(())
}
