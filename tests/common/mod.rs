// Test doubles shared by the integration tests
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use voxdesk::display::DisplaySurface;
use voxdesk::error::{Result, SpeechError};
use voxdesk::recognition::{RecognitionEvent, RecognitionScript, RecognizerDescriptor};
use voxdesk::session::{SessionState, Status};
use voxdesk::synthesis::{SynthesisEngine, SynthesisSettings};
use voxdesk::Transcript;

pub const PLACEHOLDER: &str = "Text will appear here...";

/// One notification received by the display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    State(SessionState),
    Status(Status),
    Transcript(String),
}

/// Display surface that records every notification in order
#[derive(Debug)]
pub struct RecordingDisplay {
    pub log: Vec<Shown>,
    pub transcript: Transcript,
    pub status: Option<String>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self {
            log: Vec::new(),
            transcript: Transcript::new(PLACEHOLDER),
            status: None,
        }
    }

    pub fn statuses(&self) -> Vec<Status> {
        self.log
            .iter()
            .filter_map(|s| match s {
                Shown::Status(status) => Some(status.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn count_status(&self, wanted: &Status) -> usize {
        self.statuses().iter().filter(|s| *s == wanted).count()
    }

    pub fn last_status(&self) -> Option<Status> {
        self.statuses().last().cloned()
    }
}

impl DisplaySurface for RecordingDisplay {
    fn on_state_changed(&mut self, state: SessionState) {
        self.log.push(Shown::State(state));
    }

    fn on_status(&mut self, status: &Status) {
        self.status = Some(status.to_string());
        self.log.push(Shown::Status(status.clone()));
    }

    fn on_transcript_append(&mut self, text: &str) {
        self.transcript.append(text);
        self.log.push(Shown::Transcript(text.to_string()));
    }
}

pub fn script(events: Vec<RecognitionEvent>) -> RecognitionScript {
    RecognitionScript {
        recognizers: vec![
            RecognizerDescriptor::new("tr-TR", "Turkish (Türkiye)"),
            RecognizerDescriptor::new("en-US", "English (United States)"),
        ],
        events,
    }
}

pub fn empty_script() -> RecognitionScript {
    script(Vec::new())
}

/// Synthesizer that records phrases and can be told to fail or stall
#[derive(Default)]
pub struct RecordingSynth {
    pub spoken: Mutex<Vec<String>>,
    pub in_flight: AtomicUsize,
    pub fail_speak: bool,
    pub fail_configure: bool,
    pub speak_time: Duration,
}

impl RecordingSynth {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail_speak: true,
            ..Default::default()
        })
    }

    pub fn failing_configure() -> Arc<Self> {
        Arc::new(Self {
            fail_configure: true,
            ..Default::default()
        })
    }

    pub fn slow(speak_time: Duration) -> Arc<Self> {
        Arc::new(Self {
            speak_time,
            ..Default::default()
        })
    }

    pub fn spoken(&self) -> Vec<String> {
        self.spoken.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl SynthesisEngine for RecordingSynth {
    fn configure(&self, _settings: &SynthesisSettings) -> Result<()> {
        if self.fail_configure {
            return Err(SpeechError::DeviceError("no output device".to_string()));
        }
        Ok(())
    }

    async fn speak(&self, text: &str) -> Result<()> {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.speak_time).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.fail_speak {
            return Err(SpeechError::SynthesisError("voice crashed".to_string()));
        }
        self.spoken.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// Poll `condition` until it holds or two seconds pass
pub async fn wait_for(mut condition: impl FnMut() -> bool) -> bool {
    for _ in 0..200 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}
