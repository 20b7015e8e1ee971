//! Application configuration loaded from `config.toml`.
//!
//! # Sections
//!
//! - `[session]` - Tally mode, restart target and deferred reset delay
//! - `[thresholds]` - Drag feedback/commit thresholds and exit distance
//! - `[input]` - Terminal cell width and keyboard nudge step, in offset units
//! - `[copy]` - Title, welcome and results text
//! - `[share]` - Page URL attached to shared results
//!
//! Every field has a default, so a partial file is fine.
//!
//! # Path Resolution
//!
//! 1. An explicit `--config <path>` (must exist)
//! 2. `$SWIPEDECK_CONFIG_DIR/config.toml`
//! 3. `<platform config dir>/swipedeck/config.toml`
//!
//! A missing default file yields the defaults. An unreadable or invalid default file is
//! logged and ignored; an invalid explicit file is an error.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::session::{RestartTarget, SessionOptions, TallyMode, Thresholds};
use crate::utils::{get_config_dir, validate_file_size};

pub const CONFIG_FILE: &str = "config.toml";

/// Upper bound for `session.reset_delay_ms`
pub const MAX_RESET_DELAY_MS: u64 = 10_000;

const DEFAULT_WELCOME_TEXT: &str = "Swipe right for \"yes\" and left for \"no\" as you go through the \
affirmations. At the end, we'll reveal your mood of the day, from ✨ Cosmic Chill to 🌪 Chaotic Good. \
There are no wrong answers, just vibes.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSection {
    pub tally_mode: TallyMode,
    pub restart_to: RestartTarget,
    pub reset_delay_ms: u64,
}

impl Default for SessionSection {
    fn default() -> Self {
        Self {
            tally_mode: TallyMode::default(),
            restart_to: RestartTarget::default(),
            reset_delay_ms: crate::session::controller::DEFAULT_RESET_DELAY_MS,
        }
    }
}

/// Maps terminal input onto drag offsets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Offset units per terminal column during a mouse drag
    pub cell_width: f32,
    /// Offset added per arrow-key nudge
    pub key_step: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { cell_width: 8.0, key_step: 50.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyConfig {
    pub title: String,
    pub welcome_text: String,
    pub results_text: String,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            title: "Moood".to_string(),
            welcome_text: DEFAULT_WELCOME_TEXT.to_string(),
            results_text: "I have checked my mood today".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    pub page_url: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self { page_url: "http://localhost:3000".to_string() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub session: SessionSection,
    pub thresholds: Thresholds,
    pub input: InputConfig,
    pub copy: CopyConfig,
    pub share: ShareConfig,
}

impl Config {
    /// Load from `path`, failing if it is missing or invalid
    pub fn load_from_path(path: &Path) -> Result<Self> {
        // Open file and validate size on the same handle to avoid TOCTOU race
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        validate_file_size(&file, path)?;

        let mut raw = String::new();
        (&file)
            .read_to_string(&mut raw)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate().with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Resolve and load the configuration. Returns the config and the path it came from.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, PathBuf)> {
        if let Some(path) = explicit {
            return Ok((Self::load_from_path(path)?, path.to_path_buf()));
        }

        let path = default_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok((Self::default(), path));
        }

        match Self::load_from_path(&path) {
            Ok(config) => Ok((config, path)),
            Err(err) => {
                tracing::warn!("Ignoring config at {}: {:#}", path.display(), err);
                Ok((Self::default(), path))
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.thresholds.validate()?;
        if self.session.reset_delay_ms > MAX_RESET_DELAY_MS {
            bail!(
                "session.reset_delay_ms must be at most {} (got {})",
                MAX_RESET_DELAY_MS,
                self.session.reset_delay_ms
            );
        }
        if !(self.input.cell_width.is_finite() && self.input.cell_width > 0.0) {
            bail!("input.cell_width must be positive (got {})", self.input.cell_width);
        }
        if !(self.input.key_step.is_finite() && self.input.key_step > 0.0) {
            bail!("input.key_step must be positive (got {})", self.input.key_step);
        }
        Ok(())
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            tally_mode: self.session.tally_mode,
            thresholds: self.thresholds,
            restart_to: self.session.restart_to,
            reset_delay: Duration::from_millis(self.session.reset_delay_ms),
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

/// `config.toml` inside the resolved config directory
pub fn default_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.session.tally_mode, TallyMode::Categorical);
        assert_eq!(config.session.reset_delay_ms, 300);
        assert_eq!(config.thresholds.commit, 200.0);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file =
            write_config("[session]\ntally_mode = \"binary\"\n\n[thresholds]\ncommit = 120.0\n");
        let config = Config::load_from_path(file.path()).unwrap();

        assert_eq!(config.session.tally_mode, TallyMode::Binary);
        assert_eq!(config.session.restart_to, RestartTarget::Welcome);
        assert_eq!(config.thresholds.commit, 120.0);
        assert_eq!(config.thresholds.feedback, 10.0);
        assert_eq!(config.copy, CopyConfig::default());
    }

    #[test]
    fn test_invalid_thresholds_rejected() {
        let file = write_config("[thresholds]\nfeedback = 50.0\ncommit = 40.0\n");
        let err = Config::load_from_path(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("must be smaller"));
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let file = write_config("[session\n");
        let err = Config::load_from_path(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_unknown_restart_target_rejected() {
        let file = write_config("[session]\nrestart_to = \"sideways\"\n");
        assert!(Config::load_from_path(file.path()).is_err());
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let result = Config::load(Some(Path::new("/nonexistent/swipedeck.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_reset_delay_is_bounded() {
        let file = write_config("[session]\nreset_delay_ms = 9223372036854775807\n");
        let err = Config::load_from_path(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("reset_delay_ms must be at most 10000"));

        let mut config = Config::default();
        config.session.reset_delay_ms = MAX_RESET_DELAY_MS;
        assert!(config.validate().is_ok());
        config.session.reset_delay_ms = MAX_RESET_DELAY_MS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_read_through_size_checked_handle() {
        let file = write_config(&format!("[copy]\ntitle = \"{}\"\n", "Deck ".repeat(20)));
        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.copy.title.len(), 100);
    }

    #[test]
    fn test_non_positive_key_step_rejected() {
        let mut config = Config::default();
        config.input.key_step = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_session_options() {
        let mut config = Config::default();
        config.session.reset_delay_ms = 50;
        config.session.restart_to = RestartTarget::Deck;
        let options = config.session_options();
        assert_eq!(options.reset_delay, Duration::from_millis(50));
        assert_eq!(options.restart_to, RestartTarget::Deck);
    }

    #[test]
    fn test_toml_output_parses_back() {
        let config = Config::default();
        let raw = config.to_toml().unwrap();
        assert!(raw.contains("[thresholds]"));
        let parsed: Config = toml::from_str(&raw).unwrap();
        assert_eq!(parsed, config);
    }
}
