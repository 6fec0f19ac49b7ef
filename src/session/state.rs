//! Session lifecycle states.
//!
//! Valid transitions:
//! - Idle -> Listening (start)
//! - Listening -> Idle (stop)
//! - Idle | Listening -> Disposed (shutdown, irreversible)

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle state of the speech session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Not capturing. Ready to start.
    #[default]
    Idle,
    /// Microphone capture and recognition are active.
    Listening,
    /// Adapters released. No further transitions.
    Disposed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Idle => write!(f, "Idle"),
            SessionState::Listening => write!(f, "Listening"),
            SessionState::Disposed => write!(f, "Disposed"),
        }
    }
}

impl SessionState {
    /// Returns whether a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: &SessionState) -> bool {
        matches!(
            (self, target),
            (SessionState::Idle, SessionState::Listening)
                | (SessionState::Listening, SessionState::Idle)
                | (SessionState::Idle, SessionState::Disposed)
                | (SessionState::Listening, SessionState::Disposed)
        )
    }

    pub fn is_listening(&self) -> bool {
        matches!(self, SessionState::Listening)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_display() {
        assert_eq!(SessionState::Idle.to_string(), "Idle");
        assert_eq!(SessionState::Listening.to_string(), "Listening");
        assert_eq!(SessionState::Disposed.to_string(), "Disposed");
    }

    #[test]
    fn test_valid_transitions() {
        assert!(SessionState::Idle.can_transition_to(&SessionState::Listening));
        assert!(SessionState::Listening.can_transition_to(&SessionState::Idle));
        assert!(SessionState::Idle.can_transition_to(&SessionState::Disposed));
        assert!(SessionState::Listening.can_transition_to(&SessionState::Disposed));
    }

    #[test]
    fn test_disposed_is_terminal() {
        assert!(!SessionState::Disposed.can_transition_to(&SessionState::Idle));
        assert!(!SessionState::Disposed.can_transition_to(&SessionState::Listening));
        assert!(!SessionState::Disposed.can_transition_to(&SessionState::Disposed));
    }

    #[test]
    fn test_no_self_transitions() {
        assert!(!SessionState::Idle.can_transition_to(&SessionState::Idle));
        assert!(!SessionState::Listening.can_transition_to(&SessionState::Listening));
    }
}
