use std::sync::Arc;

use tracing::{debug, warn};

use super::engine::{SynthesisEngine, SynthesisSettings};

/// Fire-and-forget speaker for acknowledgement utterances.
///
/// Each utterance runs on its own detached task with no cancellation, so it
/// may keep speaking after the session it acknowledges has ended.
#[derive(Clone, Default)]
pub struct Acknowledger {
    engine: Option<Arc<dyn SynthesisEngine>>,
}

impl Acknowledger {
    /// Configure the engine once. A configuration failure disables speech for the run.
    pub fn new(engine: Arc<dyn SynthesisEngine>, settings: &SynthesisSettings) -> Self {
        match engine.configure(settings) {
            Ok(()) => {
                debug!(
                    engine = engine.name(),
                    rate = settings.rate,
                    volume = settings.volume,
                    "Speech synthesis configured"
                );
                Self {
                    engine: Some(engine),
                }
            }
            Err(e) => {
                warn!(engine = engine.name(), "Speech synthesis unavailable: {}", e);
                Self::disabled()
            }
        }
    }

    pub fn disabled() -> Self {
        Self { engine: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.engine.is_some()
    }

    /// Start speaking `text` and return immediately
    pub fn acknowledge(&self, text: &str) {
        let Some(engine) = self.engine.clone() else {
            return;
        };

        if text.trim().is_empty() {
            return;
        }

        let text = text.to_string();
        let job = async move {
            if let Err(e) = engine.speak(&text).await {
                warn!(engine = engine.name(), "Acknowledgement \"{}\" failed: {}", text, e);
            }
        };

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(job);
            }
            Err(_) => {
                // No runtime on this thread: speak on a throwaway one
                std::thread::spawn(move || {
                    match tokio::runtime::Builder::new_current_thread()
                        .enable_all()
                        .build()
                    {
                        Ok(runtime) => runtime.block_on(job),
                        Err(e) => warn!("Could not start acknowledgement runtime: {}", e),
                    }
                });
            }
        }
    }
}

impl std::fmt::Debug for Acknowledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Acknowledger")
            .field("engine", &self.engine.as_ref().map(|e| e.name().to_string()))
            .finish()
    }
}
