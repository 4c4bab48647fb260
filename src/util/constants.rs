// StudyLens - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "StudyLens";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "StudyLens";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Analysis
// =============================================================================

/// Fixed latency of the placeholder analyzer, in milliseconds.
pub const DEFAULT_ANALYSIS_DELAY_MS: u64 = 2_000;

/// Upper bound on a configured analysis delay (prevents a stuck-looking UI
/// from a typo such as `delay_ms = 2000000`).
pub const MAX_ANALYSIS_DELAY_MS: u64 = 60_000;

/// File extensions offered first by the file dialog. Advisory only: any file
/// may still be selected.
pub const SUGGESTED_EXTENSIONS: &[&str] = &["pdf", "txt", "docx"];

/// Maximum number of analysis messages processed by the UI per frame.
pub const MAX_ANALYSIS_MESSAGES_PER_FRAME: usize = 16;

/// Repaint interval while an analysis is running, so the spinner animates and
/// the completion message is picked up promptly.
pub const ANALYZING_REPAINT_INTERVAL_MS: u64 = 100;

// =============================================================================
// Configuration
// =============================================================================

/// Name of the optional configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Log level used when neither RUST_LOG, --debug nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Accepted values for `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
