use std::time::Duration;

use tracing::info;

use super::engine::{SynthesisEngine, SynthesisSettings};
use crate::error::{Result, SpeechError};

/// Synthesizer that logs the phrase instead of playing audio.
///
/// Simulates speaking time from the word count and rate so that
/// acknowledgements overlap with the session as real speech would.
pub struct ConsoleSynthesizer {
    settings: std::sync::Mutex<SynthesisSettings>,
    word_duration: Duration,
}

impl ConsoleSynthesizer {
    pub fn new() -> Self {
        Self {
            settings: std::sync::Mutex::new(SynthesisSettings::default()),
            word_duration: Duration::from_millis(250),
        }
    }

    pub fn with_word_duration(mut self, duration: Duration) -> Self {
        self.word_duration = duration;
        self
    }

    fn speaking_time(&self, text: &str, rate: i8) -> Duration {
        let words = text.split_whitespace().count() as u32;
        // Rate 10 speaks roughly three times faster than rate -10
        let factor = (1.0 - f64::from(rate) / 15.0).max(0.0);
        self.word_duration.mul_f64(factor) * words
    }
}

impl Default for ConsoleSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SynthesisEngine for ConsoleSynthesizer {
    fn configure(&self, settings: &SynthesisSettings) -> Result<()> {
        if !(-10..=10).contains(&settings.rate) {
            return Err(SpeechError::SynthesisError(format!(
                "rate {} out of range",
                settings.rate
            )));
        }

        if settings.volume > 100 {
            return Err(SpeechError::SynthesisError(format!(
                "volume {} out of range",
                settings.volume
            )));
        }

        let mut current = self
            .settings
            .lock()
            .map_err(|_| SpeechError::SynthesisError("settings lock poisoned".to_string()))?;
        *current = settings.clone();
        Ok(())
    }

    async fn speak(&self, text: &str) -> Result<()> {
        let settings = self
            .settings
            .lock()
            .map_err(|_| SpeechError::SynthesisError("settings lock poisoned".to_string()))?
            .clone();

        if settings.volume == 0 {
            return Ok(());
        }

        info!(volume = settings.volume, rate = settings.rate, "🔊 {}", text);
        tokio::time::sleep(self.speaking_time(text, settings.rate)).await;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speaking_time_scales_with_words() {
        let synth = ConsoleSynthesizer::new().with_word_duration(Duration::from_millis(100));
        assert_eq!(synth.speaking_time("listening started", 0), Duration::from_millis(200));
        assert!(synth.speaking_time("listening started", 10) < Duration::from_millis(200));
        assert!(synth.speaking_time("listening started", -10) > Duration::from_millis(200));
    }

    #[test]
    fn test_configure_rejects_loud_volume() {
        let synth = ConsoleSynthesizer::new();
        let settings = SynthesisSettings {
            volume: 150,
            ..Default::default()
        };
        assert!(synth.configure(&settings).is_err());
    }

    #[test]
    fn test_configure_rejects_rate_out_of_range() {
        let synth = ConsoleSynthesizer::new();
        for rate in [11, 20, i8::MAX, -11, i8::MIN] {
            let settings = SynthesisSettings {
                rate,
                ..Default::default()
            };
            assert!(
                matches!(synth.configure(&settings), Err(SpeechError::SynthesisError(_))),
                "rate {} accepted",
                rate
            );
        }

        let edge = SynthesisSettings {
            rate: 10,
            ..Default::default()
        };
        assert!(synth.configure(&edge).is_ok());
    }

    #[test]
    fn test_speaking_time_never_negative() {
        let synth = ConsoleSynthesizer::new().with_word_duration(Duration::from_millis(100));
        assert_eq!(synth.speaking_time("listening started", i8::MAX), Duration::ZERO);
    }

    #[tokio::test]
    async fn test_rejected_rate_keeps_previous_settings() {
        let synth = ConsoleSynthesizer::new().with_word_duration(Duration::from_millis(1));
        let fast = SynthesisSettings {
            rate: 20,
            ..Default::default()
        };
        assert!(synth.configure(&fast).is_err());
        synth.speak("listening started").await.unwrap();
    }
}
