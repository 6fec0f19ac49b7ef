//! Display surface
//!
//! The session notifies a `DisplaySurface` of state, status and transcript
//! changes. The surface owns the transcript and the status string; the
//! session never touches widgets directly.

mod console;
mod transcript;

pub use console::ConsoleDisplay;
pub use transcript::{Transcript, DEFAULT_PLACEHOLDER};

use crate::session::{SessionState, Status};

/// Notifications from the session state machine.
///
/// Always called from the single UI task.
pub trait DisplaySurface: Send {
    fn on_state_changed(&mut self, state: SessionState);

    /// Replace the current status message
    fn on_status(&mut self, status: &Status);

    /// Add one recognized utterance to the transcript
    fn on_transcript_append(&mut self, text: &str);
}
