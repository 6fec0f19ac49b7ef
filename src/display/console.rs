use std::io::Write;

use super::transcript::Transcript;
use super::DisplaySurface;
use crate::session::{SessionState, Status};

/// Terminal display surface
///
/// Prints each status change on its own line and keeps the transcript for
/// the summary printed on exit.
pub struct ConsoleDisplay {
    transcript: Transcript,
    status: String,
    state: SessionState,
}

impl ConsoleDisplay {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            transcript: Transcript::new(placeholder),
            status: String::new(),
            state: SessionState::Idle,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Print the current transcript
    pub fn render_transcript(&self) {
        println!("────────────────────────────────────────");
        println!("{}", self.transcript.text());
        println!("────────────────────────────────────────");
    }

    fn affordances(&self) -> &'static str {
        match self.state {
            SessionState::Idle => "[start] [quit]",
            SessionState::Listening => "[stop] [quit]",
            SessionState::Disposed => "",
        }
    }
}

impl DisplaySurface for ConsoleDisplay {
    fn on_state_changed(&mut self, state: SessionState) {
        self.state = state;
        println!("● {}  {}", state, self.affordances());
    }

    fn on_status(&mut self, status: &Status) {
        self.status = status.to_string();
        println!("  {}", self.status);
    }

    fn on_transcript_append(&mut self, text: &str) {
        self.transcript.append(text);
        println!("» {}", self.transcript.text());
        std::io::stdout().flush().ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_transcript_and_state() {
        let mut display = ConsoleDisplay::new("Text will appear here...");
        assert!(display.transcript().is_placeholder());

        display.on_state_changed(SessionState::Listening);
        display.on_transcript_append("hello");
        display.on_transcript_append("world");
        display.on_status(&Status::Recognized("world".to_string()));

        assert_eq!(display.transcript().text(), "hello world");
        assert_eq!(display.state(), SessionState::Listening);
        assert_eq!(display.status(), Status::Recognized("world".to_string()).to_string());
    }
}
