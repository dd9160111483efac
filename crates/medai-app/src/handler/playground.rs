//! Playground handlers: input edits, live-mode debounce, classification lifecycle

use medai_core::prelude::*;
use medai_core::{copy, normalize_text, ClassificationError, Prediction, SAMPLE_ABSTRACTS};

use super::{UpdateAction, UpdateResult};
use crate::message::Message;
use crate::playground::{RequestId, TriggerSource};
use crate::sections::well_known;
use crate::state::{AppState, ToastKind, UiMode};

/// Re-evaluate the live-mode timer after the text or the live flag changed
///
/// Any pending timer is superseded; a new one is armed only when live mode is
/// on and the text is long enough.
fn rearm_live(state: &mut AppState) -> Option<UpdateAction> {
    let min_chars = state.settings.playground.live_min_chars;
    if state.playground.live_eligible(min_chars) {
        let generation = state.playground.debounce.arm();
        Some(UpdateAction::ArmDebounce {
            generation,
            delay: state.settings.playground.debounce(),
        })
    } else if state.playground.debounce.is_armed() {
        state.playground.debounce.cancel();
        Some(UpdateAction::CancelDebounce)
    } else {
        None
    }
}

fn start_classification(state: &mut AppState, trigger: TriggerSource) -> UpdateAction {
    let (request_id, superseded) = state.playground.requests.begin(trigger);
    if let Some(old) = superseded {
        debug!("Request {} superseded by {}", old, request_id);
    }
    info!(
        "Classification {} started ({:?}, {} chars)",
        request_id,
        trigger,
        state.playground.input_text().chars().count()
    );
    UpdateAction::SpawnClassification {
        request_id,
        text: normalize_text(state.playground.input_text()),
        trigger,
        superseded,
    }
}

pub fn handle_set_input_text(state: &mut AppState, text: String) -> UpdateResult {
    if text == state.playground.input_text() {
        return UpdateResult::none();
    }
    state.playground.set_text(text);
    UpdateResult::maybe_action(rearm_live(state))
}

pub fn handle_toggle_live_mode(state: &mut AppState) -> UpdateResult {
    state.playground.live_mode = !state.playground.live_mode;
    info!("Live mode {}", if state.live_mode() { "on" } else { "off" });
    UpdateResult::maybe_action(rearm_live(state))
}

pub fn handle_trigger_classify(state: &mut AppState) -> UpdateResult {
    match state.playground.can_trigger() {
        Ok(()) => UpdateResult::action(start_classification(state, TriggerSource::Manual)),
        Err(rejection) => {
            debug!("Classification trigger rejected: {}", rejection);
            UpdateResult::none()
        }
    }
}

pub fn handle_debounce_elapsed(state: &mut AppState, generation: u64) -> UpdateResult {
    if !state.playground.debounce.fire(generation) {
        debug!("Dropping stale debounce timer (generation {})", generation);
        return UpdateResult::none();
    }

    let min_chars = state.settings.playground.live_min_chars;
    if !state.playground.live_eligible(min_chars) {
        return UpdateResult::none();
    }

    UpdateResult::action(start_classification(state, TriggerSource::Live))
}

pub fn handle_classification_completed(
    state: &mut AppState,
    request_id: RequestId,
    result: std::result::Result<Vec<Prediction>, ClassificationError>,
) -> UpdateResult {
    if !state.playground.requests.complete(request_id) {
        debug!("Discarding stale completion for request {}", request_id);
        return UpdateResult::none();
    }

    match result {
        Ok(predictions) => {
            info!(
                "Classification {} completed with {} predictions",
                request_id,
                predictions.len()
            );
            state.playground.settle_ok(request_id, predictions);
            if state.explanation_index >= state.predictions().len() {
                state.explanation_index = 0;
            }
        }
        Err(e) => {
            warn!("Classification {} failed: {}", request_id, e);
            state.playground.settle_err(request_id, &e);
            let title = copy(state.language).dialogs.classification_failed;
            state.show_toast(ToastKind::Error, title, e.to_string());
        }
    }
    UpdateResult::none()
}

pub fn handle_load_sample(state: &mut AppState, index: usize) -> UpdateResult {
    let Some(sample) = SAMPLE_ABSTRACTS.get(index) else {
        warn!("No sample abstract at index {}", index);
        return UpdateResult::none();
    };

    if state.ui_mode == UiMode::Examples {
        state.ui_mode = UiMode::Browse;
    }

    let action = if *sample == state.playground.input_text() {
        None
    } else {
        state.playground.set_text((*sample).to_string());
        rearm_live(state)
    };

    let dialogs = &copy(state.language).dialogs;
    state.show_toast(
        ToastKind::Info,
        dialogs.example_loaded_title,
        dialogs.example_loaded_body,
    );

    UpdateResult::action_then(action, Message::GotoSection(well_known::PLAYGROUND))
}

pub fn handle_start_editing(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Editing;
    UpdateResult::none()
}

pub fn handle_stop_editing(state: &mut AppState) -> UpdateResult {
    if state.ui_mode == UiMode::Editing {
        state.ui_mode = UiMode::Browse;
    }
    UpdateResult::none()
}

/// Bracketed paste: appended to whatever is receiving text
pub fn handle_paste(state: &mut AppState, text: String) -> UpdateResult {
    match state.ui_mode {
        UiMode::Editing => {
            let mut next = state.playground.input_text().to_string();
            next.push_str(&text);
            UpdateResult::message(Message::SetInputText(next))
        }
        UiMode::Palette => {
            for c in text.chars().filter(|c| !c.is_control()) {
                state.palette.push_char(c);
            }
            UpdateResult::none()
        }
        UiMode::Browse if state.current_section == well_known::PLAYGROUND => {
            let mut next = state.playground.input_text().to_string();
            next.push_str(&text);
            UpdateResult::message(Message::SetInputText(next))
        }
        _ => UpdateResult::none(),
    }
}
