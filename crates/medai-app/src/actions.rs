//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use medai_core::prelude::*;
use tokio::task::JoinHandle;

use crate::classifier::Classifier;
use crate::handler::UpdateAction;
use crate::message::Message;
use crate::playground::RequestId;

/// Background task handles; each slot holds at most one task
#[derive(Debug, Default)]
pub struct TaskSlots {
    debounce: Option<JoinHandle<()>>,
    classification: Option<(RequestId, JoinHandle<()>)>,
}

impl TaskSlots {
    fn replace_debounce(&mut self, handle: Option<JoinHandle<()>>) {
        if let Some(old) = std::mem::replace(&mut self.debounce, handle) {
            old.abort();
        }
    }

    fn replace_classification(&mut self, entry: Option<(RequestId, JoinHandle<()>)>) {
        if let Some((id, old)) = std::mem::replace(&mut self.classification, entry) {
            if !old.is_finished() {
                debug!("Aborting classification task {}", id);
            }
            old.abort();
        }
    }

    /// Whether a debounce timer task is still pending
    pub fn debounce_pending(&self) -> bool {
        self.debounce.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Whether a classification task is still running
    pub fn classification_running(&self) -> bool {
        self.classification
            .as_ref()
            .is_some_and(|(_, h)| !h.is_finished())
    }

    /// Abort everything; used on shutdown
    pub fn abort_all(&mut self) {
        self.replace_debounce(None);
        self.replace_classification(None);
    }
}

impl Drop for TaskSlots {
    fn drop(&mut self) {
        self.abort_all();
    }
}

/// Execute an action by spawning or cancelling a background task
///
/// View-side actions (`ScrollToSection`) are handled by the caller and are
/// ignored here.
pub fn handle_action<C>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    classifier: &Arc<C>,
    slots: &mut TaskSlots,
    shutdown_rx: watch::Receiver<bool>,
) where
    C: Classifier + Send + Sync + 'static,
{
    match action {
        UpdateAction::ScrollToSection { .. } => {}

        UpdateAction::ArmDebounce { generation, delay } => {
            let handle = spawn_debounce(generation, delay, msg_tx, shutdown_rx);
            slots.replace_debounce(Some(handle));
        }

        UpdateAction::CancelDebounce => {
            slots.replace_debounce(None);
        }

        UpdateAction::SpawnClassification {
            request_id,
            text,
            trigger: _,
            superseded,
        } => {
            if let Some(old) = superseded {
                debug!("Request {} superseded, aborting its task", old);
            }
            let handle = spawn_classification(request_id, text, classifier.clone(), msg_tx);
            slots.replace_classification(Some((request_id, handle)));
        }
    }
}

fn spawn_debounce(
    generation: u64,
    delay: Duration,
    msg_tx: mpsc::Sender<Message>,
    mut shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            _ = tokio::time::sleep(delay) => {
                if let Err(e) = deliver(&msg_tx, Message::DebounceElapsed { generation }).await {
                    debug!("Debounce timer {} undelivered: {}", generation, e);
                }
            }
            _ = shutdown_rx.changed() => {
                debug!("Debounce timer {} cancelled by shutdown", generation);
            }
        }
    })
}

fn spawn_classification<C>(
    request_id: RequestId,
    text: String,
    classifier: Arc<C>,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()>
where
    C: Classifier + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let result = classifier.classify(&text).await;
        let msg = Message::ClassificationCompleted { request_id, result };
        if let Err(e) = deliver(&msg_tx, msg).await {
            debug!("Result of request {} undelivered: {}", request_id, e);
        }
    })
}

/// Hand a task result back to the engine loop
async fn deliver(msg_tx: &mpsc::Sender<Message>, msg: Message) -> Result<()> {
    msg_tx
        .send(msg)
        .await
        .map_err(|e| Error::channel_send(e.to_string()))
}
