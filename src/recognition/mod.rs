//! Recognition engine adapter
//!
//! The recognition engine is an external collaborator. This module defines
//! the capability surface the session consumes:
//! - Enumerating installed recognizers and picking one at startup
//! - Loading a free dictation grammar
//! - Beginning and ending asynchronous recognition
//! - Delivering recognition events through a `RecognitionEventSink`

mod engine;
mod scripted;
mod selection;

pub use engine::{
    AudioInput, GrammarMode, RecognitionEngine, RecognitionEvent, RecognitionEventSink,
    RecognizerDescriptor,
};
pub use scripted::{EngineCall, EngineCalls, RecognitionScript, ScriptedRecognizer};
pub use selection::{is_english, select_recognizer};
