use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::display::DEFAULT_PLACEHOLDER;
use crate::session::SessionConfig;
use crate::synthesis::{OutputDevice, SynthesisSettings};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub synthesis: SynthesisConfig,
    pub display: DisplayConfig,
    pub recognizer: RecognizerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisConfig {
    pub enabled: bool,
    pub rate: i8,
    pub volume: u8,
    pub started_phrase: String,
    pub stopped_phrase: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    pub placeholder: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecognizerConfig {
    /// JSON recognition script; the built-in demo is used when unset
    pub script_path: Option<String>,
    pub event_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Config {
    /// Load configuration from `path` (any extension the `config` crate
    /// understands, or none), layered over defaults and `VOXDESK_*` variables.
    ///
    /// A missing file is not an error.
    pub fn load(path: &str) -> Result<Self> {
        let defaults = SessionConfig::default();

        let settings = config::Config::builder()
            .set_default("synthesis.enabled", true)?
            .set_default("synthesis.rate", 0)?
            .set_default("synthesis.volume", 100)?
            .set_default("synthesis.started_phrase", defaults.started_phrase)?
            .set_default("synthesis.stopped_phrase", defaults.stopped_phrase)?
            .set_default("display.placeholder", DEFAULT_PLACEHOLDER)?
            .set_default("recognizer.event_delay_ms", 400)?
            .set_default("logging.level", "info")?
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("VOXDESK")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path))?;

        let cfg: Config = settings
            .try_deserialize()
            .context("Invalid configuration")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if !(-10..=10).contains(&self.synthesis.rate) {
            bail!("synthesis.rate must be between -10 and 10, got {}", self.synthesis.rate);
        }
        if self.synthesis.volume > 100 {
            bail!("synthesis.volume must be at most 100, got {}", self.synthesis.volume);
        }
        Ok(())
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            started_phrase: self.synthesis.started_phrase.clone(),
            stopped_phrase: self.synthesis.stopped_phrase.clone(),
        }
    }

    pub fn synthesis_settings(&self) -> SynthesisSettings {
        SynthesisSettings {
            output_device: OutputDevice::Default,
            rate: self.synthesis.rate,
            volume: self.synthesis.volume,
        }
    }
}
