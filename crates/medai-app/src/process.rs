//! Message processing: runs the TEA update loop and dispatches actions

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::actions::{handle_action, TaskSlots};
use crate::classifier::Classifier;
use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
///
/// Follow-up messages are handled before returning, so they run ahead of the
/// next external message. Returns the section indices that were requested to
/// scroll into view, in order.
pub fn process_message<C>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    classifier: &Arc<C>,
    slots: &mut TaskSlots,
    shutdown_rx: &watch::Receiver<bool>,
) -> Vec<usize>
where
    C: Classifier + Send + Sync + 'static,
{
    let mut scroll_requests = Vec::new();

    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            if let UpdateAction::ScrollToSection { index } = action {
                let smooth = state.settings.ui.smooth_scroll;
                state.document_view.scroll_to_section(index, smooth);
                scroll_requests.push(index);
            } else {
                handle_action(
                    action,
                    msg_tx.clone(),
                    classifier,
                    slots,
                    shutdown_rx.clone(),
                );
            }
        }

        // Continue with follow-up message
        msg = result.message;
    }

    scroll_requests
}
