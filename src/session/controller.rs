use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info};
use uuid::Uuid;

use super::machine::SessionMachine;
use super::state::SessionState;
use super::stats::SessionStats;
use crate::display::DisplaySurface;
use crate::recognition::{RecognitionEvent, RecognitionEventSink};

/// User intents sent by the display surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Start,
    Stop,
    Shutdown,
}

/// Work item for the UI task
#[derive(Debug)]
pub enum UiMessage {
    Intent(Intent),
    Recognition {
        session_id: Uuid,
        event: RecognitionEvent,
    },
    Stats(oneshot::Sender<SessionStats>),
}

/// The UI task has exited; no more intents are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("speech session has shut down")]
pub struct SessionClosed;

/// Recognition sink that posts events onto the UI queue.
///
/// Holds a weak sender so a lingering recognizer thread does not keep the
/// UI task alive.
pub struct QueueSink {
    session_id: Uuid,
    tx: mpsc::WeakUnboundedSender<UiMessage>,
}

impl QueueSink {
    pub fn new(session_id: Uuid, tx: mpsc::WeakUnboundedSender<UiMessage>) -> Self {
        Self { session_id, tx }
    }

    fn post(&self, event: RecognitionEvent) {
        let Some(tx) = self.tx.upgrade() else {
            debug!(session_id = %self.session_id, "UI queue gone, dropping event");
            return;
        };

        let message = UiMessage::Recognition {
            session_id: self.session_id,
            event,
        };
        if tx.send(message).is_err() {
            debug!(session_id = %self.session_id, "UI queue closed, dropping event");
        }
    }
}

impl RecognitionEventSink for QueueSink {
    fn on_detected(&self) {
        self.post(RecognitionEvent::Detected);
    }

    fn on_hypothesized(&self, text: &str) {
        self.post(RecognitionEvent::Hypothesized(text.to_string()));
    }

    fn on_recognized(&self, text: &str) {
        self.post(RecognitionEvent::Recognized(text.to_string()));
    }

    fn on_rejected(&self) {
        self.post(RecognitionEvent::Rejected);
    }
}

/// Cloneable handle for sending intents to the UI task
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: mpsc::UnboundedSender<UiMessage>,
}

impl SessionHandle {
    pub fn request_start(&self) -> Result<(), SessionClosed> {
        self.send(UiMessage::Intent(Intent::Start))
    }

    pub fn request_stop(&self) -> Result<(), SessionClosed> {
        self.send(UiMessage::Intent(Intent::Stop))
    }

    pub fn shutdown(&self) -> Result<(), SessionClosed> {
        self.send(UiMessage::Intent(Intent::Shutdown))
    }

    /// Snapshot taken on the UI task after all previously queued messages
    pub async fn stats(&self) -> Result<SessionStats, SessionClosed> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(UiMessage::Stats(reply_tx))?;
        reply_rx.await.map_err(|_| SessionClosed)
    }

    /// Whether the UI task has exited
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }

    fn send(&self, message: UiMessage) -> Result<(), SessionClosed> {
        self.tx.send(message).map_err(|_| SessionClosed)
    }
}

/// Runs a `SessionMachine` on a single task.
///
/// Intents from the display and events from the recognizer share one queue,
/// so every state and display mutation happens on that task in arrival order.
pub struct SessionController;

impl SessionController {
    /// Move `machine` onto its own task.
    ///
    /// The task ends after a shutdown intent, or once every `SessionHandle`
    /// has been dropped, and yields the disposed machine.
    pub fn spawn<D>(
        mut machine: SessionMachine<D>,
    ) -> (SessionHandle, JoinHandle<SessionMachine<D>>)
    where
        D: DisplaySurface + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel();

        let weak_tx = tx.downgrade();
        machine.attach_sink(Box::new(move |session_id: Uuid| {
            Arc::new(QueueSink::new(session_id, weak_tx.clone())) as Arc<dyn RecognitionEventSink>
        }));

        let task = tokio::spawn(async move {
            info!("Session UI task started");

            while let Some(message) = rx.recv().await {
                match message {
                    UiMessage::Intent(Intent::Start) => machine.request_start(),
                    UiMessage::Intent(Intent::Stop) => machine.request_stop(),
                    UiMessage::Intent(Intent::Shutdown) => {
                        machine.shutdown();
                        break;
                    }
                    UiMessage::Recognition { session_id, event } => {
                        machine.handle_recognition(session_id, event)
                    }
                    UiMessage::Stats(reply) => {
                        let _ = reply.send(machine.stats());
                    }
                }
            }

            if machine.state() != SessionState::Disposed {
                debug!("All session handles dropped, shutting down");
                machine.shutdown();
            }

            info!("Session UI task stopped");
            machine
        });

        (SessionHandle { tx }, task)
    }
}
