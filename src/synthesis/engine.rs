use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Audio output the synthesizer speaks through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputDevice {
    /// System default speakers
    #[default]
    Default,
}

/// Voice output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisSettings {
    pub output_device: OutputDevice,

    /// Speaking rate, -10 (slowest) to 10 (fastest)
    pub rate: i8,

    /// Volume, 0 to 100
    pub volume: u8,
}

impl Default for SynthesisSettings {
    fn default() -> Self {
        Self {
            output_device: OutputDevice::Default,
            rate: 0,
            volume: 100,
        }
    }
}

/// Text-to-speech engine trait
///
/// `speak` resolves once the utterance has been played (or has failed).
/// Callers that must not wait go through `Acknowledger`.
#[async_trait::async_trait]
pub trait SynthesisEngine: Send + Sync {
    /// Select the output device and voice parameters
    fn configure(&self, settings: &SynthesisSettings) -> Result<()>;

    /// Speak a short phrase
    async fn speak(&self, text: &str) -> Result<()>;

    /// Engine name for logging
    fn name(&self) -> &str;
}
