//! Scripted recognition engine.
//!
//! Replays a fixed list of recognition events on a background thread, the
//! way a platform engine delivers callbacks off the UI thread. Used by the
//! demo binary and by tests.

use std::path::Path;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::engine::{
    AudioInput, GrammarMode, RecognitionEngine, RecognitionEvent, RecognitionEventSink,
    RecognizerDescriptor,
};
use crate::error::{Result, SpeechError};

/// Installed recognizers plus the events to replay per session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionScript {
    pub recognizers: Vec<RecognizerDescriptor>,
    #[serde(default)]
    pub events: Vec<RecognitionEvent>,
}

impl RecognitionScript {
    /// Load a script from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| SpeechError::Script(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| SpeechError::Script(e.to_string()))
    }

    /// A short dictation in English, used when no script is given
    pub fn demo() -> Self {
        let phrases = [
            "hello world",
            "this is a demo of speech recognition",
            "the words appear as they are recognized",
        ];

        let mut events = Vec::new();
        for phrase in phrases {
            events.push(RecognitionEvent::Detected);
            let first_word = phrase.split_whitespace().next().unwrap_or(phrase);
            events.push(RecognitionEvent::Hypothesized(first_word.to_string()));
            events.push(RecognitionEvent::Recognized(phrase.to_string()));
        }
        events.push(RecognitionEvent::Detected);
        events.push(RecognitionEvent::Rejected);

        Self {
            recognizers: vec![
                RecognizerDescriptor::new("tr-TR", "Turkish (Türkiye)"),
                RecognizerDescriptor::new("en-US", "English (United States)"),
            ],
            events,
        }
    }
}

/// One call made against the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineCall {
    Configure,
    /// A `begin` that started capture; rejected attempts are not recorded
    Begin,
    End,
    Release,
}

/// Shared record of the calls made against a `ScriptedRecognizer`
#[derive(Debug, Clone, Default)]
pub struct EngineCalls {
    history: Arc<Mutex<Vec<EngineCall>>>,
    capturing: Arc<AtomicBool>,
}

impl EngineCalls {
    fn record(&self, call: EngineCall) {
        let mut history = self.history.lock().unwrap_or_else(|e| e.into_inner());
        history.push(call);
    }

    /// Calls in the order they were made
    pub fn history(&self) -> Vec<EngineCall> {
        self.history.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn count(&self, call: EngineCall) -> usize {
        self.history().iter().filter(|c| **c == call).count()
    }

    pub fn begin_count(&self) -> usize {
        self.count(EngineCall::Begin)
    }

    pub fn end_count(&self) -> usize {
        self.count(EngineCall::End)
    }

    /// Whether audio capture is currently active
    pub fn is_capturing(&self) -> bool {
        self.capturing.load(Ordering::SeqCst)
    }
}

pub struct ScriptedRecognizer {
    script: RecognitionScript,
    event_delay: Duration,
    configured: Option<RecognizerDescriptor>,
    calls: EngineCalls,
    stop_signal: Option<Arc<AtomicBool>>,
    /// Replay threads not yet joined, including ones told to stop
    workers: Vec<JoinHandle<()>>,
    fail_configure: bool,
    fail_begin: bool,
    fail_end: bool,
}

impl ScriptedRecognizer {
    pub fn new(script: RecognitionScript) -> Self {
        Self {
            script,
            event_delay: Duration::from_millis(400),
            configured: None,
            calls: EngineCalls::default(),
            stop_signal: None,
            workers: Vec::new(),
            fail_configure: false,
            fail_begin: false,
            fail_end: false,
        }
    }

    /// Delay before each replayed event
    pub fn with_event_delay(mut self, delay: Duration) -> Self {
        self.event_delay = delay;
        self
    }

    /// Make `configure` fail, as when the grammar cannot be loaded
    pub fn failing_configure(mut self) -> Self {
        self.fail_configure = true;
        self
    }

    /// Make `begin` fail with a device error, as when no microphone is present
    pub fn failing_begin(mut self) -> Self {
        self.fail_begin = true;
        self
    }

    /// Make `end` fail after capture has been stopped
    pub fn failing_end(mut self) -> Self {
        self.fail_end = true;
        self
    }

    /// Handle for inspecting calls after the engine has been moved away
    pub fn calls(&self) -> EngineCalls {
        self.calls.clone()
    }

    fn stop_worker(&mut self) {
        if let Some(signal) = self.stop_signal.take() {
            signal.store(true, Ordering::SeqCst);
        }
    }
}

impl RecognitionEngine for ScriptedRecognizer {
    fn list_available_recognizers(&self) -> Vec<RecognizerDescriptor> {
        self.script.recognizers.clone()
    }

    fn configure(&mut self, descriptor: &RecognizerDescriptor, grammar: GrammarMode) -> Result<()> {
        self.calls.record(EngineCall::Configure);

        if self.fail_configure {
            return Err(SpeechError::Engine(format!(
                "grammar could not be loaded for {}",
                descriptor.culture_id
            )));
        }

        if !self.script.recognizers.contains(descriptor) {
            return Err(SpeechError::Engine(format!(
                "recognizer {} is not installed",
                descriptor.culture_id
            )));
        }

        debug!(culture = %descriptor.culture_id, ?grammar, "Scripted recognizer configured");
        self.configured = Some(descriptor.clone());
        Ok(())
    }

    fn begin(&mut self, input: AudioInput, sink: Arc<dyn RecognitionEventSink>) -> Result<()> {
        if self.configured.is_none() {
            return Err(SpeechError::EngineUnavailable);
        }

        if self.calls.is_capturing() {
            return Err(SpeechError::Engine("already capturing".to_string()));
        }

        if self.fail_begin {
            return Err(SpeechError::DeviceError(format!(
                "no audio input available ({:?})",
                input
            )));
        }

        self.calls.record(EngineCall::Begin);
        self.calls.capturing.store(true, Ordering::SeqCst);

        let stop_signal = Arc::new(AtomicBool::new(false));
        self.stop_signal = Some(Arc::clone(&stop_signal));

        let events = self.script.events.clone();
        let delay = self.event_delay;

        // Replay on a separate thread like a platform callback thread
        let worker = thread::spawn(move || {
            for event in events.iter() {
                thread::sleep(delay);

                if stop_signal.load(Ordering::SeqCst) {
                    break;
                }

                sink.deliver(event);
            }
            debug!("Scripted recognition replay finished");
        });

        // Earlier replays were told to stop in end(); keep them until release
        self.workers.retain(|w| !w.is_finished());
        self.workers.push(worker);

        info!("Scripted recognition started ({} events)", self.script.events.len());
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        self.calls.record(EngineCall::End);
        self.stop_worker();
        self.calls.capturing.store(false, Ordering::SeqCst);

        if self.fail_end {
            return Err(SpeechError::Engine("recognizer did not stop cleanly".to_string()));
        }

        Ok(())
    }

    fn release(&mut self) -> Result<()> {
        self.calls.record(EngineCall::Release);
        self.stop_worker();
        self.calls.capturing.store(false, Ordering::SeqCst);

        let mut panicked = false;
        for worker in self.workers.drain(..) {
            panicked |= worker.join().is_err();
        }

        self.configured = None;
        if panicked {
            return Err(SpeechError::Engine("replay thread panicked".to_string()));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

impl Drop for ScriptedRecognizer {
    fn drop(&mut self) {
        self.stop_worker();
    }
}
