use std::sync::Arc;

use crate::analysis::{PaceEstimator, ReachEstimator, finish_odds};
use crate::config::{DF, ODDS, TimingMethod};
use crate::models::{OddsSnapshot, RunProvider, RunView};

use super::messages::RecomputeTrigger;

/// Owns the latest `OddsSnapshot` and rebuilds it on request.
///
/// There is no event subscription: whoever owns the run calls `on_reset`,
/// `on_run_modified` or `recompute` after changing it.
#[derive(Debug, Clone)]
pub struct OddsEngine {
    /// THE FRONT BUFFER.
    /// Readers clone this pointer. A recomputation builds a fresh snapshot and swaps it in.
    snapshot: Arc<OddsSnapshot>,

    timing_method: TimingMethod,

    /// How many passes have run. Handy for readers polling for changes.
    generation: u64,
}

impl Default for OddsEngine {
    fn default() -> Self {
        Self::new(TimingMethod::default())
    }
}

impl OddsEngine {
    /// An engine with an empty snapshot. Call `recompute` before reading.
    pub fn new(timing_method: TimingMethod) -> Self {
        Self {
            snapshot: Arc::new(OddsSnapshot::empty()),
            timing_method,
            generation: 0,
        }
    }

    /// Creates the engine and runs the first pass straight away.
    pub fn with_run<P: RunProvider + ?Sized>(provider: &P, timing_method: TimingMethod) -> Self {
        let mut engine = Self::new(timing_method);
        engine.recompute(provider, RecomputeTrigger::Startup);
        engine
    }

    /// The pure computation: one forward pass for reach and pace, one backward pass for finish.
    pub fn calculate(view: &RunView) -> OddsSnapshot {
        let mut reach_estimator = ReachEstimator::new(view.attempt_count);
        let mut pace_estimator = PaceEstimator::new();

        let mut reach = Vec::with_capacity(view.len());
        let mut pace = Vec::with_capacity(view.len());

        for segment in &view.segments {
            reach.push(reach_estimator.step(segment.attempts));
            pace.push(pace_estimator.step(segment));
        }

        let finish = finish_odds(&reach);
        OddsSnapshot::new(reach, pace, finish)
    }

    /// Discards the current snapshot and builds a new one from the provider's current state.
    pub fn recompute<P: RunProvider + ?Sized>(
        &mut self,
        provider: &P,
        trigger: RecomputeTrigger,
    ) -> Arc<OddsSnapshot> {
        let view = provider.run_view(self.timing_method);

        let snapshot = crate::trace_time!("OddsEngine::recompute", ODDS.engine.slow_recompute_micros, {
            Self::calculate(&view)
        });

        if DF.log_engine_core {
            log::info!(
                "Odds recomputed ({}): {} segments, {} attempts, {}",
                trigger,
                view.len(),
                view.attempt_count,
                self.timing_method
            );
        }

        // THIS IS THE SWAP.
        self.snapshot = Arc::new(snapshot);
        self.generation += 1;
        Arc::clone(&self.snapshot)
    }

    pub fn on_reset<P: RunProvider + ?Sized>(&mut self, provider: &P) -> Arc<OddsSnapshot> {
        self.recompute(provider, RecomputeTrigger::Reset)
    }

    pub fn on_run_modified<P: RunProvider + ?Sized>(&mut self, provider: &P) -> Arc<OddsSnapshot> {
        self.recompute(provider, RecomputeTrigger::RunModified)
    }

    /// Switches timing method and recomputes if it actually changed.
    pub fn set_timing_method<P: RunProvider + ?Sized>(
        &mut self,
        provider: &P,
        timing_method: TimingMethod,
    ) -> Arc<OddsSnapshot> {
        if self.timing_method != timing_method {
            self.timing_method = timing_method;
            return self.recompute(provider, RecomputeTrigger::SettingsChanged);
        }
        self.snapshot()
    }

    pub fn snapshot(&self) -> Arc<OddsSnapshot> {
        Arc::clone(&self.snapshot)
    }

    pub fn timing_method(&self) -> TimingMethod {
        self.timing_method
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
