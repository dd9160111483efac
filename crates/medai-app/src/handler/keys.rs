//! Key event handlers for UI modes

use medai_core::SAMPLE_ABSTRACTS;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::sections::well_known;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
///
/// `Ctrl+C`, `Mod+K` and `Mod+Enter` are global; everything else depends on
/// the mode. Unrecognized keys map to `None`.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::CharCtrl('k') => return Some(Message::OpenPalette),
        InputKey::EnterMod => {
            return if state.input_text().is_empty() {
                None
            } else {
                Some(Message::TriggerClassify)
            };
        }
        _ => {}
    }

    match state.ui_mode {
        UiMode::Browse => handle_key_browse(state, key),
        UiMode::Editing => handle_key_editing(state, key),
        UiMode::Palette => handle_key_palette(key),
        UiMode::Examples => handle_key_examples(key),
        UiMode::Explanation => handle_key_explanation(key),
    }
}

fn handle_key_browse(state: &AppState, key: InputKey) -> Option<Message> {
    let section = state.current_section();

    // Section-local bindings take priority
    let local = match section {
        well_known::HERO => handle_key_hero(&key),
        well_known::PLAYGROUND => handle_key_playground(&key),
        well_known::RESULTS => handle_key_results(&key),
        _ => None,
    };
    if local.is_some() {
        return local;
    }

    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Char('?') => Some(Message::OpenPalette),

        // Section navigation
        InputKey::Tab | InputKey::Char(']') => Some(Message::NextSection),
        InputKey::BackTab | InputKey::Char('[') => Some(Message::PreviousSection),
        InputKey::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            (index < state.sections().len()).then_some(Message::GotoSection(index))
        }

        // Viewport
        InputKey::Char('j') | InputKey::Down => Some(Message::ScrollDown),
        InputKey::Char('k') | InputKey::Up => Some(Message::ScrollUp),
        InputKey::PageDown | InputKey::Char(' ') => Some(Message::PageDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::Char('g') | InputKey::Home => Some(Message::ScrollToTop),
        InputKey::Char('G') | InputKey::End => Some(Message::ScrollToBottom),

        // Global toggles
        InputKey::Char('L') => Some(Message::ToggleLanguage),
        InputKey::Char('l') => Some(Message::ToggleLiveMode),

        _ => None,
    }
}

fn handle_key_hero(key: &InputKey) -> Option<Message> {
    match key {
        // "Try demo"
        InputKey::Enter => Some(Message::GotoSection(well_known::PLAYGROUND)),
        // "See story"
        InputKey::Char('s') => Some(Message::GotoSection(well_known::PROBLEM)),
        _ => None,
    }
}

fn handle_key_playground(key: &InputKey) -> Option<Message> {
    match key {
        InputKey::Char('i') | InputKey::Enter => Some(Message::StartEditing),
        InputKey::Char('c') => Some(Message::TriggerClassify),
        InputKey::Char('e') => Some(Message::OpenExamples),
        InputKey::Char('w') => Some(Message::OpenExplanation),
        _ => None,
    }
}

fn handle_key_results(key: &InputKey) -> Option<Message> {
    match key {
        InputKey::Up => Some(Message::MatrixUp),
        InputKey::Down => Some(Message::MatrixDown),
        InputKey::Left => Some(Message::MatrixLeft),
        InputKey::Right => Some(Message::MatrixRight),
        InputKey::Char('t') => Some(Message::ToggleModelTab),
        _ => None,
    }
}

fn handle_key_editing(state: &AppState, key: InputKey) -> Option<Message> {
    let text = state.input_text();
    match key {
        InputKey::Esc => Some(Message::StopEditing),
        InputKey::Char(c) => {
            let mut next = text.to_string();
            next.push(c);
            Some(Message::SetInputText(next))
        }
        InputKey::Enter => Some(Message::SetInputText(format!("{}\n", text))),
        InputKey::Backspace => {
            let mut next = text.to_string();
            next.pop()?;
            Some(Message::SetInputText(next))
        }
        InputKey::CharCtrl('u') => {
            (!text.is_empty()).then(|| Message::SetInputText(String::new()))
        }
        _ => None,
    }
}

fn handle_key_palette(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::ClosePalette),
        InputKey::Enter => Some(Message::PaletteConfirm),
        InputKey::Up | InputKey::CharCtrl('p') => Some(Message::PaletteUp),
        InputKey::Down | InputKey::CharCtrl('n') => Some(Message::PaletteDown),
        InputKey::Backspace => Some(Message::PaletteBackspace),
        InputKey::CharCtrl('u') => Some(Message::PaletteClearQuery),
        InputKey::Char(c) => Some(Message::PaletteInput(c)),
        _ => None,
    }
}

fn handle_key_examples(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('q') => Some(Message::CloseExamples),
        InputKey::Up | InputKey::Char('k') => Some(Message::ExamplesUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ExamplesDown),
        InputKey::Enter => Some(Message::ExamplesConfirm),
        InputKey::Char('?') => Some(Message::OpenPalette),
        InputKey::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            (index < SAMPLE_ABSTRACTS.len()).then_some(Message::LoadSample(index))
        }
        _ => None,
    }
}

fn handle_key_explanation(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('q') | InputKey::Char('w') => {
            Some(Message::CloseExplanation)
        }
        InputKey::Right | InputKey::Char('l') | InputKey::Tab => Some(Message::ExplanationNext),
        InputKey::Left | InputKey::Char('h') | InputKey::BackTab => {
            Some(Message::ExplanationPrevious)
        }
        InputKey::Char('?') => Some(Message::OpenPalette),
        _ => None,
    }
}
