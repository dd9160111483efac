//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `navigation`: Section navigation and viewport scrolling
//! - `playground`: Input, live-mode debounce and classification lifecycle
//! - `palette`: Command palette handlers
//! - `dialogs`: Examples dialog, explanation sheet and results view

pub(crate) mod dialogs;
pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod palette;
pub(crate) mod playground;
pub(crate) mod update;


use std::time::Duration;

use crate::message::Message;
use crate::playground::{RequestId, TriggerSource};

pub use keys::handle_key;
pub use navigation::goto;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Bring a section into view (the one scroll side effect of navigation)
    ScrollToSection { index: usize },

    /// Start the live-mode timer, replacing any pending one
    ArmDebounce { generation: u64, delay: Duration },

    /// Drop the pending live-mode timer
    CancelDebounce,

    /// Run the classifier on `text` in the background
    SpawnClassification {
        request_id: RequestId,
        text: String,
        trigger: TriggerSource,
        /// In-flight request this one replaces, whose task should be aborted
        superseded: Option<RequestId>,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    /// Action now, then a follow-up message
    pub fn action_then(action: Option<UpdateAction>, msg: Message) -> Self {
        Self {
            message: Some(msg),
            action,
        }
    }

    pub fn maybe_action(action: Option<UpdateAction>) -> Self {
        Self {
            message: None,
            action,
        }
    }
}
