//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every recomputation (trigger, segment count, attempt count).
    pub log_engine_core: bool,

    /// Log each segment that fell back to the 1.0 sentinel, and why.
    pub log_sentinels: bool,

    /// Activate trace_time macro (for cool scope-level timing)
    pub log_performance: bool,

    /// Log run-file loading
    pub log_run_file: bool,

    /// Log readout text changes
    pub log_readout: bool,
}

pub const DF: LogFlags = LogFlags {
    log_engine_core: true,
    log_run_file: true,

    log_sentinels: false,
    log_performance: false,
    log_readout: false,
};
