//! Examples dialog, explanation sheet and results view handlers

use medai_core::SAMPLE_ABSTRACTS;
use tracing::debug;

use super::UpdateResult;
use crate::message::Message;
use crate::state::{AppState, UiMode};

pub fn handle_open_examples(state: &mut AppState) -> UpdateResult {
    state.examples_selected = 0;
    state.ui_mode = UiMode::Examples;
    UpdateResult::none()
}

pub fn handle_close_examples(state: &mut AppState) -> UpdateResult {
    if state.ui_mode == UiMode::Examples {
        state.ui_mode = UiMode::Browse;
    }
    UpdateResult::none()
}

pub fn handle_examples_up(state: &mut AppState) -> UpdateResult {
    state.examples_selected = state.examples_selected.saturating_sub(1);
    UpdateResult::none()
}

pub fn handle_examples_down(state: &mut AppState) -> UpdateResult {
    state.examples_selected = (state.examples_selected + 1).min(SAMPLE_ABSTRACTS.len() - 1);
    UpdateResult::none()
}

pub fn handle_examples_confirm(state: &mut AppState) -> UpdateResult {
    let index = state.examples_selected;
    handle_close_examples(state);
    UpdateResult::message(Message::LoadSample(index))
}

/// Open the sheet for the top prediction; needs at least one prediction
pub fn handle_open_explanation(state: &mut AppState) -> UpdateResult {
    if state.predictions().is_empty() {
        debug!("No predictions to explain");
        return UpdateResult::none();
    }
    state.explanation_index = 0;
    state.ui_mode = UiMode::Explanation;
    UpdateResult::none()
}

pub fn handle_close_explanation(state: &mut AppState) -> UpdateResult {
    if state.ui_mode == UiMode::Explanation {
        state.ui_mode = UiMode::Browse;
    }
    UpdateResult::none()
}

pub fn handle_explanation_next(state: &mut AppState) -> UpdateResult {
    let count = state.predictions().len();
    if count > 0 {
        state.explanation_index = (state.explanation_index + 1) % count;
    }
    UpdateResult::none()
}

pub fn handle_explanation_previous(state: &mut AppState) -> UpdateResult {
    let count = state.predictions().len();
    if count > 0 {
        state.explanation_index = (state.explanation_index + count - 1) % count;
    }
    UpdateResult::none()
}

pub fn handle_toggle_model_tab(state: &mut AppState) -> UpdateResult {
    state.results_view.model_tab = state.results_view.model_tab.toggled();
    UpdateResult::none()
}

pub fn handle_matrix_move(state: &mut AppState, d_row: isize, d_col: isize) -> UpdateResult {
    state.results_view.move_cursor(d_row, d_col);
    UpdateResult::none()
}
