// Run export loading, used by the CLI
mod run_file;

pub use run_file::{load_run, parse_run};
