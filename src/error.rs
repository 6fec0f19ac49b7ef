use thiserror::Error;

/// Errors raised by the recognition and synthesis adapters.
///
/// None of these escape the session state machine; they are turned into
/// status reports at the start/stop/acknowledgement boundary.
#[derive(Debug, Error)]
pub enum SpeechError {
    /// No recognizer is installed. Permanent for the run.
    #[error("no speech recognizer is installed")]
    EngineUnavailable,

    /// Audio input or output could not be acquired.
    #[error("audio device error: {0}")]
    DeviceError(String),

    /// Acknowledgement speech failed. Never fatal.
    #[error("speech synthesis failed: {0}")]
    SynthesisError(String),

    /// Any other failure reported by the recognition engine.
    #[error("recognition engine error: {0}")]
    Engine(String),

    /// A recognition script could not be read or parsed.
    #[error("invalid recognition script: {0}")]
    Script(String),
}

pub type Result<T> = std::result::Result<T, SpeechError>;
