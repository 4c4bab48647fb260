// StudyLens - platform/config.rs
//
// Platform-specific directory resolution and config.toml loading with
// startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::{self, ConfigError};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resolved platform paths for StudyLens configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/studylens/ or %APPDATA%\StudyLens\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    pub analysis: AnalysisSection,
    pub ui: UiSection,
    pub logging: LoggingSection,
}

/// `[analysis]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct AnalysisSection {
    /// Placeholder analyzer latency in milliseconds.
    pub delay_ms: Option<u64>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Placeholder analyzer latency.
    pub analysis_delay: Duration,
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            analysis_delay: Duration::from_millis(constants::DEFAULT_ANALYSIS_DELAY_MS),
            dark_mode: true,
            log_level: None,
        }
    }
}

/// Validate a delay in milliseconds against the allowed range.
pub fn validate_delay_ms(field: &str, delay_ms: u64) -> Result<Duration, ConfigError> {
    if delay_ms <= constants::MAX_ANALYSIS_DELAY_MS {
        Ok(Duration::from_millis(delay_ms))
    } else {
        Err(ConfigError::ValueOutOfRange {
            field: field.to_string(),
            value: delay_ms.to_string(),
            expected: format!("0-{}", constants::MAX_ANALYSIS_DELAY_MS),
        })
    }
}

/// Read and parse `config.toml` from `config_dir`.
///
/// Returns `Ok(None)` when the file does not exist (first run).
pub fn read_raw_config(config_dir: &Path) -> error::Result<Option<RawConfig>> {
    let path = config_dir.join(constants::CONFIG_FILE_NAME);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config.toml found; using defaults");
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    let raw = toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: path.clone(),
        source,
    })?;

    tracing::info!(path = %path.display(), "Loaded config.toml");
    Ok(Some(raw))
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns the validated config and a list of non-fatal warnings. Unreadable
/// or unparseable files and out-of-range values fall back to defaults; the
/// application always starts.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    let raw = match read_raw_config(config_dir) {
        Ok(Some(raw)) => raw,
        Ok(None) => return (AppConfig::default(), warnings),
        Err(e) => {
            warnings.push(format!("{e}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    let mut config = AppConfig::default();

    // -- Analysis: delay_ms --
    if let Some(delay_ms) = raw.analysis.delay_ms {
        match validate_delay_ms("[analysis] delay_ms", delay_ms) {
            Ok(delay) => config.analysis_delay = delay,
            Err(e) => warnings.push(format!(
                "{e}. Using default ({}).",
                constants::DEFAULT_ANALYSIS_DELAY_MS
            )),
        }
    }

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => warnings.push(format!(
                "[ui] theme = \"{other}\" is not recognised. Expected \"dark\" or \"light\". \
                 Using default (dark)."
            )),
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: {}. Using default ({}).",
                constants::VALID_LOG_LEVELS.join(", "),
                constants::DEFAULT_LOG_LEVEL,
            ));
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    (config, warnings)
}
