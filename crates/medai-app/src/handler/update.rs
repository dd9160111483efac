//! Main update function - handles state transitions (TEA pattern)

use medai_core::Language;
use tracing::info;

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{dialogs, keys::handle_key, navigation, palette, playground, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Paste(text) => playground::handle_paste(state, text),

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::GotoSection(index) => navigation::handle_goto(state, index),
        Message::NextSection => navigation::handle_next(state),
        Message::PreviousSection => navigation::handle_previous(state),

        Message::ScrollUp => navigation::handle_scroll_up(state),
        Message::ScrollDown => navigation::handle_scroll_down(state),
        Message::PageUp => navigation::handle_page_up(state),
        Message::PageDown => navigation::handle_page_down(state),
        Message::ScrollToTop => navigation::handle_scroll_to_top(state),
        Message::ScrollToBottom => navigation::handle_scroll_to_bottom(state),

        // ─────────────────────────────────────────────────────────
        // Playground
        // ─────────────────────────────────────────────────────────
        Message::SetInputText(text) => playground::handle_set_input_text(state, text),
        Message::TriggerClassify => playground::handle_trigger_classify(state),
        Message::ToggleLiveMode => playground::handle_toggle_live_mode(state),
        Message::DebounceElapsed { generation } => {
            playground::handle_debounce_elapsed(state, generation)
        }
        Message::ClassificationCompleted { request_id, result } => {
            playground::handle_classification_completed(state, request_id, result)
        }
        Message::LoadSample(index) => playground::handle_load_sample(state, index),
        Message::StartEditing => playground::handle_start_editing(state),
        Message::StopEditing => playground::handle_stop_editing(state),

        // ─────────────────────────────────────────────────────────
        // Palette
        // ─────────────────────────────────────────────────────────
        Message::OpenPalette => palette::handle_open(state),
        Message::ClosePalette => palette::handle_close(state),
        Message::PaletteInput(c) => palette::handle_input(state, c),
        Message::PaletteBackspace => palette::handle_backspace(state),
        Message::PaletteClearQuery => palette::handle_clear_query(state),
        Message::PaletteUp => palette::handle_up(state),
        Message::PaletteDown => palette::handle_down(state),
        Message::PaletteConfirm => palette::handle_confirm(state),

        // ─────────────────────────────────────────────────────────
        // Language
        // ─────────────────────────────────────────────────────────
        Message::SetLanguage(language) => handle_set_language(state, language),
        Message::ToggleLanguage => UpdateResult::message(Message::SetLanguage(
            state.language.toggled(),
        )),

        // ─────────────────────────────────────────────────────────
        // Dialogs and results view
        // ─────────────────────────────────────────────────────────
        Message::OpenExamples => dialogs::handle_open_examples(state),
        Message::CloseExamples => dialogs::handle_close_examples(state),
        Message::ExamplesUp => dialogs::handle_examples_up(state),
        Message::ExamplesDown => dialogs::handle_examples_down(state),
        Message::ExamplesConfirm => dialogs::handle_examples_confirm(state),
        Message::OpenExplanation => dialogs::handle_open_explanation(state),
        Message::CloseExplanation => dialogs::handle_close_explanation(state),
        Message::ExplanationNext => dialogs::handle_explanation_next(state),
        Message::ExplanationPrevious => dialogs::handle_explanation_previous(state),
        Message::ToggleModelTab => dialogs::handle_toggle_model_tab(state),
        Message::MatrixUp => dialogs::handle_matrix_move(state, -1, 0),
        Message::MatrixDown => dialogs::handle_matrix_move(state, 1, 0),
        Message::MatrixLeft => dialogs::handle_matrix_move(state, 0, -1),
        Message::MatrixRight => dialogs::handle_matrix_move(state, 0, 1),
    }
}

fn handle_set_language(state: &mut AppState, language: Language) -> UpdateResult {
    if state.language != language {
        info!("Language set to {}", language);
        state.language = language;
    }
    UpdateResult::none()
}
