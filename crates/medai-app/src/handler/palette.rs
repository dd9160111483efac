//! Command palette handlers

use tracing::debug;

use super::UpdateResult;
use crate::state::{AppState, UiMode};

/// Open the palette; a no-op when it is already open
pub fn handle_open(state: &mut AppState) -> UpdateResult {
    if state.ui_mode == UiMode::Palette {
        return UpdateResult::none();
    }
    state.palette.reset();
    state.ui_mode = UiMode::Palette;
    UpdateResult::none()
}

pub fn handle_close(state: &mut AppState) -> UpdateResult {
    if state.ui_mode == UiMode::Palette {
        state.ui_mode = UiMode::Browse;
        state.palette.reset();
    }
    UpdateResult::none()
}

pub fn handle_input(state: &mut AppState, c: char) -> UpdateResult {
    state.palette.push_char(c);
    UpdateResult::none()
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    state.palette.pop_char();
    UpdateResult::none()
}

pub fn handle_clear_query(state: &mut AppState) -> UpdateResult {
    state.palette.clear_query();
    UpdateResult::none()
}

pub fn handle_up(state: &mut AppState) -> UpdateResult {
    state.palette.select_previous();
    UpdateResult::none()
}

pub fn handle_down(state: &mut AppState) -> UpdateResult {
    let visible = state.palette_entries().len();
    state.palette.select_next(visible);
    UpdateResult::none()
}

/// Close the palette, then dispatch the selected command
pub fn handle_confirm(state: &mut AppState) -> UpdateResult {
    let entries = state.palette_entries();
    let selected = state.palette.selected_entry(&entries).cloned();

    handle_close(state);

    match selected {
        Some(entry) => {
            debug!("Palette command: {}", entry.label);
            UpdateResult::message(entry.command.message())
        }
        None => UpdateResult::none(),
    }
}
