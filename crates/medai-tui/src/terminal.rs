//! Terminal setup and restoration

use std::io::stdout;

use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::supports_keyboard_enhancement;
use medai_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
        let _ = execute!(stdout(), DisableBracketedPaste);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Turn on bracketed paste so pasted abstracts arrive as one event
pub fn enable_paste() -> Result<()> {
    execute!(stdout(), EnableBracketedPaste)
        .map_err(|e| Error::terminal(format!("enable bracketed paste: {}", e)))
}

pub fn disable_paste() -> Result<()> {
    execute!(stdout(), DisableBracketedPaste).map_err(|e| Error::TerminalRestore(e.to_string()))
}

/// Ask the terminal to report modified keys such as Ctrl+Enter unambiguously
///
/// Returns whether the flags were pushed; terminals without support keep
/// the legacy encoding.
pub fn enable_keyboard_enhancement() -> Result<bool> {
    if !supports_keyboard_enhancement()? {
        return Ok(false);
    }
    execute!(
        stdout(),
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
    )
    .map_err(|e| Error::terminal(format!("enable keyboard enhancement: {}", e)))?;
    Ok(true)
}

pub fn disable_keyboard_enhancement() -> Result<()> {
    execute!(stdout(), PopKeyboardEnhancementFlags)
        .map_err(|e| Error::TerminalRestore(e.to_string()))
}
