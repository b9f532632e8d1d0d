mod run_view;
mod snapshot;

pub use {
    run_view::{RunProvider, RunView, SegmentView},
    snapshot::{OddsRow, OddsSnapshot},
};
