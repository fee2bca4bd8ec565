//! # Config Module
//!
//! Output settings shared by every command, and the log filter resolution
//! used by `main`.

/// Environment variable that overrides the log filter.
pub const LOG_ENV: &str = "LEGEND_LOG";

/// How command output is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Emit JSON instead of aligned text.
    pub json: bool,
    /// Decimals used when echoing percentages.
    pub decimals: usize,
}

impl OutputConfig {
    #[must_use]
    pub fn new(json: bool, decimals: usize) -> Self {
        Self { json, decimals }
    }

    /// Text output with whole percentages.
    #[must_use]
    pub fn text() -> Self {
        Self::default()
    }

    /// JSON output with whole percentages.
    #[must_use]
    pub fn json() -> Self {
        Self::new(true, 0)
    }
}

/// Default filter directive for a `-v` count.
#[must_use]
pub fn default_log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info,legend=debug",
        2 => "debug,legend=trace",
        _ => "trace",
    }
}

/// Pick the log filter: `LEGEND_LOG`, then `RUST_LOG`, then the `-v` default.
#[must_use]
pub fn resolve_log_filter(
    legend_log: Option<String>,
    rust_log: Option<String>,
    verbose: u8,
) -> String {
    legend_log
        .filter(|s| !s.trim().is_empty())
        .or_else(|| rust_log.filter(|s| !s.trim().is_empty()))
        .unwrap_or_else(|| default_log_filter(verbose).to_string())
}

// =============================================================================
// TESTS
// =============================================================================
