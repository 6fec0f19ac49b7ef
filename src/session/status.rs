use std::fmt;

/// Status message shown by the display surface.
///
/// Each report overwrites the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Recognizer selected and configured at startup
    Ready { language: String, english: bool },
    /// Startup found no installed recognizer
    NoRecognizerInstalled,
    /// Startup found a recognizer but could not configure it
    InitializationFailed(String),
    /// Start requested while recognition is disabled for the run
    EngineUnavailable,
    Listening,
    /// Start failed because the audio input could not be acquired
    DeviceError(String),
    /// Start failed for any other engine reason
    StartFailed(String),
    Stopped,
    /// Capture was stopped but the engine reported an error doing so
    StopFailed(String),
    Detected,
    Hypothesized(String),
    Recognized(String),
    Rejected,
    ShutDown,
}

impl Status {
    /// Whether this report describes a failure
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Status::NoRecognizerInstalled
                | Status::InitializationFailed(_)
                | Status::EngineUnavailable
                | Status::DeviceError(_)
                | Status::StartFailed(_)
                | Status::StopFailed(_)
        )
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ready { language, english } => {
                let hint = if *english {
                    "speak English"
                } else {
                    "speak this language"
                };
                write!(f, "✅ Speech recognition ready - Language: {} ({})", language, hint)
            }
            Status::NoRecognizerInstalled => write!(f, "❌ No speech recognizer installed"),
            Status::InitializationFailed(reason) => {
                write!(f, "❌ Speech recognition could not be initialized: {}", reason)
            }
            Status::EngineUnavailable => write!(f, "❌ Speech recognition is unavailable"),
            Status::Listening => write!(f, "🎤 Listening... you can start speaking"),
            Status::DeviceError(reason) => {
                write!(f, "❌ Could not start listening, no audio input: {}", reason)
            }
            Status::StartFailed(reason) => write!(f, "❌ Could not start listening: {}", reason),
            Status::Stopped => write!(f, "⏹️ Listening stopped"),
            Status::StopFailed(reason) => {
                write!(f, "⚠️ Listening stopped with an error: {}", reason)
            }
            Status::Detected => write!(f, "👂 Speech detected..."),
            Status::Hypothesized(text) => write!(f, "🤔 Guess: {}", text),
            Status::Recognized(text) => write!(f, "✅ Recognized: {}", text),
            Status::Rejected => write!(f, "❓ Speech not recognized, try again"),
            Status::ShutDown => write!(f, "Speech recognition shut down"),
        }
    }
}
