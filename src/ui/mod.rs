mod readout;
mod table;

pub use readout::Readout;
pub use table::odds_table;
