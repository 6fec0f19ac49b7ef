//! Speech session management
//!
//! This module provides the `SessionMachine` that owns:
//! - The Idle/Listening lifecycle and the begin/end calls to the recognizer
//! - Translation of recognition events into transcript and status updates
//! - Acknowledgement speech on each transition
//!
//! and the `SessionController` that runs it on a single UI task.

mod config;
mod controller;
mod machine;
mod state;
mod stats;
mod status;

pub use config::SessionConfig;
pub use controller::{Intent, QueueSink, SessionClosed, SessionController, SessionHandle, UiMessage};
pub use machine::{SessionMachine, SinkFactory};
pub use state::SessionState;
pub use stats::SessionStats;
pub use status::Status;
