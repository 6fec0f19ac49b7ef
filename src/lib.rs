pub mod config;
pub mod display;
pub mod error;
pub mod recognition;
pub mod session;
pub mod synthesis;

pub use config::Config;
pub use display::{ConsoleDisplay, DisplaySurface, Transcript};
pub use error::{Result, SpeechError};
pub use recognition::{
    RecognitionEngine, RecognitionEvent, RecognitionEventSink, RecognitionScript,
    RecognizerDescriptor, ScriptedRecognizer,
};
pub use session::{
    SessionConfig, SessionController, SessionHandle, SessionMachine, SessionState, SessionStats,
    Status,
};
pub use synthesis::{Acknowledger, ConsoleSynthesizer, SynthesisEngine, SynthesisSettings};
