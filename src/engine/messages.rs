use strum_macros::Display;

/// Why a recomputation was requested. Only used for logging; every trigger
/// rebuilds the whole snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RecomputeTrigger {
    /// Engine was just created
    Startup,
    /// The timer was reset (a new attempt may have been written to history)
    Reset,
    /// Segments or history were edited by hand
    RunModified,
    /// Timing method changed
    SettingsChanged,
    /// Caller asked explicitly
    Manual,
}
