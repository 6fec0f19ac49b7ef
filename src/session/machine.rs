use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::config::SessionConfig;
use super::state::SessionState;
use super::stats::SessionStats;
use super::status::Status;
use crate::display::DisplaySurface;
use crate::error::SpeechError;
use crate::recognition::{
    is_english, select_recognizer, AudioInput, GrammarMode, RecognitionEngine, RecognitionEvent,
    RecognitionEventSink, RecognizerDescriptor,
};
use crate::synthesis::Acknowledger;

/// Builds the event sink handed to the recognizer for one session.
pub type SinkFactory = Box<dyn Fn(Uuid) -> Arc<dyn RecognitionEventSink> + Send>;

/// Sink used until a controller attaches its queue
struct DiscardSink;

impl RecognitionEventSink for DiscardSink {
    fn on_detected(&self) {}
    fn on_hypothesized(&self, _text: &str) {}
    fn on_recognized(&self, _text: &str) {}
    fn on_rejected(&self) {}
}

/// The speech session state machine.
///
/// Owns the recognizer, the acknowledgement speaker and the display surface.
/// All methods take `&mut self` and are meant to be driven from one task;
/// `SessionController` provides that task. Adapter failures never escape:
/// each one becomes a `Status` report and the machine settles in `Idle`.
pub struct SessionMachine<D: DisplaySurface> {
    config: SessionConfig,

    /// Recognition engine, released on shutdown
    engine: Option<Box<dyn RecognitionEngine>>,

    /// Recognizer chosen at startup. `None` disables recognition for the run.
    recognizer: Option<RecognizerDescriptor>,

    acknowledger: Acknowledger,
    display: D,
    state: SessionState,
    sink_factory: SinkFactory,

    /// Identifier of the active session, if listening
    session_id: Option<Uuid>,

    /// When the active session started
    started_at: Option<DateTime<Utc>>,

    sessions_started: usize,
    utterances_recognized: usize,
}

impl<D: DisplaySurface> SessionMachine<D> {
    /// Create the machine and select the recognizer for the run.
    ///
    /// Selection happens exactly once. If nothing is installed, or the chosen
    /// recognizer cannot be configured, the failure is reported on the display
    /// and every later start reports `EngineUnavailable`.
    pub fn new(
        mut engine: Box<dyn RecognitionEngine>,
        acknowledger: Acknowledger,
        mut display: D,
        config: SessionConfig,
    ) -> Self {
        let available = engine.list_available_recognizers();
        for descriptor in &available {
            info!(
                culture = %descriptor.culture_id,
                "Recognizer available: {}",
                descriptor.display_name
            );
        }

        let recognizer = match select_recognizer(&available).cloned() {
            None => {
                warn!(engine = engine.name(), "No speech recognizer installed");
                display.on_status(&Status::NoRecognizerInstalled);
                None
            }
            Some(descriptor) => match engine.configure(&descriptor, GrammarMode::FreeDictation) {
                Ok(()) => {
                    info!(
                        engine = engine.name(),
                        culture = %descriptor.culture_id,
                        "Speech recognition ready"
                    );
                    display.on_status(&Status::Ready {
                        language: descriptor.display_name.clone(),
                        english: is_english(&descriptor),
                    });
                    Some(descriptor)
                }
                Err(e) => {
                    error!(engine = engine.name(), "Failed to configure recognizer: {}", e);
                    display.on_status(&Status::InitializationFailed(e.to_string()));
                    None
                }
            },
        };

        display.on_state_changed(SessionState::Idle);

        Self {
            config,
            engine: Some(engine),
            recognizer,
            acknowledger,
            display,
            state: SessionState::Idle,
            sink_factory: Box::new(|_: Uuid| {
                Arc::new(DiscardSink) as Arc<dyn RecognitionEventSink>
            }),
            session_id: None,
            started_at: None,
            sessions_started: 0,
            utterances_recognized: 0,
        }
    }

    /// Route recognition callbacks for future sessions through `factory`
    pub fn attach_sink(&mut self, factory: SinkFactory) {
        self.sink_factory = factory;
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether a recognizer was selected and configured at startup
    pub fn is_available(&self) -> bool {
        self.recognizer.is_some() && self.engine.is_some()
    }

    pub fn recognizer(&self) -> Option<&RecognizerDescriptor> {
        self.recognizer.as_ref()
    }

    /// Identifier of the active session, if listening
    pub fn session_id(&self) -> Option<Uuid> {
        self.session_id
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            state: self.state,
            session_id: self.session_id,
            started_at: self.started_at,
            sessions_started: self.sessions_started,
            utterances_recognized: self.utterances_recognized,
            recognizer: self.recognizer.as_ref().map(|d| d.culture_id.clone()),
        }
    }

    /// Move to `target`; callers check `can_transition_to` first
    fn enter(&mut self, target: SessionState) {
        debug_assert!(
            self.state.can_transition_to(&target),
            "invalid session transition {} -> {}",
            self.state,
            target
        );
        debug!("Session state: {} -> {}", self.state, target);
        self.state = target;
    }

    /// Start listening.
    ///
    /// No-op unless `Idle`. Issues exactly one `begin()` per successful start.
    pub fn request_start(&mut self) {
        if !self.state.can_transition_to(&SessionState::Listening) {
            debug!(state = %self.state, "Start ignored");
            return;
        }

        let engine = match (self.engine.as_mut(), self.recognizer.as_ref()) {
            (Some(engine), Some(_)) => engine,
            _ => {
                warn!("Start requested but speech recognition is unavailable");
                self.display.on_status(&Status::EngineUnavailable);
                return;
            }
        };

        let session_id = Uuid::new_v4();
        let sink = (self.sink_factory)(session_id);

        if let Err(e) = engine.begin(AudioInput::Default, sink) {
            warn!(engine = engine.name(), "Failed to start listening: {}", e);
            let status = match e {
                SpeechError::EngineUnavailable => Status::EngineUnavailable,
                SpeechError::DeviceError(reason) => Status::DeviceError(reason),
                other => Status::StartFailed(other.to_string()),
            };
            self.display.on_status(&status);
            // Re-offer the start affordance
            self.display.on_state_changed(SessionState::Idle);
            return;
        }

        self.enter(SessionState::Listening);
        self.session_id = Some(session_id);
        self.started_at = Some(Utc::now());
        self.sessions_started += 1;

        info!(session_id = %session_id, "Listening started");

        self.display.on_state_changed(SessionState::Listening);
        self.display.on_status(&Status::Listening);
        self.acknowledger.acknowledge(&self.config.started_phrase);
    }

    /// Stop listening.
    ///
    /// No-op unless `Listening`. `end()` is issued before the state becomes
    /// `Idle`; the engine may finish shutting down afterwards.
    pub fn request_stop(&mut self) {
        if !self.state.can_transition_to(&SessionState::Idle) {
            debug!(state = %self.state, "Stop ignored");
            return;
        }

        let result = match self.engine.as_mut() {
            Some(engine) => engine.end(),
            None => Ok(()),
        };

        let session_id = self.session_id.take();
        self.started_at = None;
        self.enter(SessionState::Idle);

        info!(session_id = ?session_id, "Listening stopped");

        self.display.on_state_changed(SessionState::Idle);
        match result {
            Ok(()) => {
                self.display.on_status(&Status::Stopped);
                self.acknowledger.acknowledge(&self.config.stopped_phrase);
            }
            Err(e) => {
                warn!(session_id = ?session_id, "Recognizer reported an error while stopping: {}", e);
                self.display.on_status(&Status::StopFailed(e.to_string()));
            }
        }
    }

    /// Apply one recognition event from session `session_id`.
    ///
    /// Events from a session other than the active one are dropped, which
    /// covers late callbacks delivered after a stop.
    pub fn handle_recognition(&mut self, session_id: Uuid, event: RecognitionEvent) {
        if !self.state.is_listening() || self.session_id != Some(session_id) {
            debug!(session_id = %session_id, ?event, "Dropping event from inactive session");
            return;
        }

        match event {
            RecognitionEvent::Recognized(text) => {
                if text.trim().is_empty() {
                    debug!(session_id = %session_id, "Ignoring empty recognition result");
                    return;
                }
                self.display.on_transcript_append(&text);
                self.utterances_recognized += 1;
                self.display.on_status(&Status::Recognized(text));
            }
            RecognitionEvent::Detected => self.display.on_status(&Status::Detected),
            RecognitionEvent::Hypothesized(text) => {
                self.display.on_status(&Status::Hypothesized(text))
            }
            RecognitionEvent::Rejected => self.display.on_status(&Status::Rejected),
        }
    }

    /// End recognition if listening and release both adapters. Irreversible.
    pub fn shutdown(&mut self) {
        if !self.state.can_transition_to(&SessionState::Disposed) {
            return;
        }

        if let Some(mut engine) = self.engine.take() {
            if self.state.is_listening() {
                if let Err(e) = engine.end() {
                    warn!("Recognizer reported an error while stopping: {}", e);
                }
            }
            if let Err(e) = engine.release() {
                warn!(engine = engine.name(), "Failed to release recognizer: {}", e);
            }
        }

        self.acknowledger = Acknowledger::disabled();
        self.recognizer = None;
        self.session_id = None;
        self.started_at = None;
        self.enter(SessionState::Disposed);

        info!("Speech session shut down");

        self.display.on_state_changed(SessionState::Disposed);
        self.display.on_status(&Status::ShutDown);
    }
}

impl<D: DisplaySurface> Drop for SessionMachine<D> {
    fn drop(&mut self) {
        if let Some(mut engine) = self.engine.take() {
            if self.state.is_listening() {
                let _ = engine.end();
            }
            let _ = engine.release();
        }
    }
}
