use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::state::SessionState;

/// Snapshot of the session state machine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    /// Current lifecycle state
    pub state: SessionState,

    /// Identifier of the active session, if listening
    pub session_id: Option<Uuid>,

    /// When the active session started
    pub started_at: Option<DateTime<Utc>>,

    /// Sessions successfully started since launch
    pub sessions_started: usize,

    /// Utterances appended to the transcript since launch
    pub utterances_recognized: usize,

    /// Culture of the selected recognizer, if any
    pub recognizer: Option<String>,
}

impl SessionStats {
    /// Seconds the active session has been running
    pub fn listening_secs(&self) -> Option<f64> {
        self.started_at.map(|started| {
            Utc::now().signed_duration_since(started).num_milliseconds() as f64 / 1000.0
        })
    }
}
