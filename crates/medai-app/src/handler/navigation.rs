//! Section navigation and manual viewport scrolling

use medai_core::prelude::*;

use super::{UpdateAction, UpdateResult};
use crate::state::AppState;

/// Make section `index` current and request it be scrolled into view
///
/// Fails with [`Error::IndexOutOfRange`] and leaves state untouched when
/// `index` is not a registered section.
pub fn goto(state: &mut AppState, index: usize) -> Result<UpdateAction> {
    state.sections.check(index)?;
    if state.current_section != index {
        debug!(from = state.current_section, to = index, "section change");
    }
    state.current_section = index;
    Ok(UpdateAction::ScrollToSection { index })
}

pub fn handle_goto(state: &mut AppState, index: usize) -> UpdateResult {
    match goto(state, index) {
        Ok(action) => UpdateResult::action(action),
        Err(e) => {
            warn!("Ignoring navigation: {}", e);
            UpdateResult::none()
        }
    }
}

pub fn handle_next(state: &mut AppState) -> UpdateResult {
    let next = state.sections.next_index(state.current_section);
    handle_goto(state, next)
}

pub fn handle_previous(state: &mut AppState) -> UpdateResult {
    let previous = state.sections.previous_index(state.current_section);
    handle_goto(state, previous)
}

pub fn handle_scroll_up(state: &mut AppState) -> UpdateResult {
    state.document_view.scroll_by(-1);
    UpdateResult::none()
}

pub fn handle_scroll_down(state: &mut AppState) -> UpdateResult {
    state.document_view.scroll_by(1);
    UpdateResult::none()
}

pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    state.document_view.page_up();
    UpdateResult::none()
}

pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    state.document_view.page_down();
    UpdateResult::none()
}

pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    state.document_view.scroll_to_top();
    UpdateResult::none()
}

pub fn handle_scroll_to_bottom(state: &mut AppState) -> UpdateResult {
    state.document_view.scroll_to_bottom();
    UpdateResult::none()
}
