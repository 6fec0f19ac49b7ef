//! Synthesis engine adapter
//!
//! Acknowledgement speech ("listening started", "listening stopped") is
//! best-effort: it runs detached from the session, is never awaited, and its
//! failures are only logged.

mod acknowledger;
mod console;
mod engine;

pub use acknowledger::Acknowledger;
pub use console::ConsoleSynthesizer;
pub use engine::{OutputDevice, SynthesisEngine, SynthesisSettings};
