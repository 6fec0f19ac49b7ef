use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Metadata identifying one installed recognizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognizerDescriptor {
    /// Culture identifier (e.g., "en-US", "tr-TR")
    pub culture_id: String,

    /// Human-readable language name (e.g., "English (United States)")
    pub display_name: String,
}

impl RecognizerDescriptor {
    pub fn new(culture_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            culture_id: culture_id.into(),
            display_name: display_name.into(),
        }
    }
}

/// Grammar loaded into the recognizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrammarMode {
    /// Unconstrained dictation of arbitrary phrases
    #[default]
    FreeDictation,
}

/// Audio input the recognizer captures from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioInput {
    /// System default microphone
    #[default]
    Default,
}

/// One event from the recognizer's asynchronous result stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum RecognitionEvent {
    /// Speech started in the audio input
    Detected,
    /// Interim guess for the utterance in progress
    Hypothesized(String),
    /// Final text for one utterance
    Recognized(String),
    /// Speech was heard but could not be matched
    Rejected,
}

/// Inbound callbacks from the recognizer.
///
/// Implementations must tolerate being called from any thread.
pub trait RecognitionEventSink: Send + Sync {
    fn on_detected(&self);
    fn on_hypothesized(&self, text: &str);
    fn on_recognized(&self, text: &str);
    fn on_rejected(&self);

    /// Dispatch an event value to the matching callback.
    fn deliver(&self, event: &RecognitionEvent) {
        match event {
            RecognitionEvent::Detected => self.on_detected(),
            RecognitionEvent::Hypothesized(text) => self.on_hypothesized(text),
            RecognitionEvent::Recognized(text) => self.on_recognized(text),
            RecognitionEvent::Rejected => self.on_rejected(),
        }
    }
}

/// Speech recognition engine trait
///
/// Implementations wrap a concrete engine (platform speech API, offline
/// model, scripted replay). `begin` must return promptly; events are
/// delivered to the sink afterwards until `end` is called.
pub trait RecognitionEngine: Send {
    /// List installed recognizers in enumeration order
    fn list_available_recognizers(&self) -> Vec<RecognizerDescriptor>;

    /// Select a recognizer and load a grammar
    fn configure(&mut self, descriptor: &RecognizerDescriptor, grammar: GrammarMode) -> Result<()>;

    /// Acquire the audio input and start asynchronous recognition
    fn begin(&mut self, input: AudioInput, sink: Arc<dyn RecognitionEventSink>) -> Result<()>;

    /// Stop asynchronous recognition. Engine shutdown may finish later.
    fn end(&mut self) -> Result<()>;

    /// Release engine resources. No calls follow.
    fn release(&mut self) -> Result<()> {
        Ok(())
    }

    /// Engine name for logging
    fn name(&self) -> &str;
}
