use serde::{Deserialize, Serialize};

/// Configuration for the speech session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Spoken when listening starts
    pub started_phrase: String,

    /// Spoken when listening stops
    pub stopped_phrase: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            started_phrase: "Listening started".to_string(),
            stopped_phrase: "Listening stopped".to_string(),
        }
    }
}
