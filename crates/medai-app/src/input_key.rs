//! Abstract input key event, independent of terminal library.
//!
//! `medai-app` never sees crossterm types; the TUI converts its key events
//! into `InputKey` at the boundary so the engine can be driven headless and
//! in tests.

/// Abstract input key event, independent of terminal library.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl or Super modifier (Ctrl+k, Cmd+k, etc.)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    // Action keys
    /// Enter/Return key
    Enter,
    /// Enter with Ctrl or Super held
    EnterMod,
    /// Escape key
    Esc,
    /// Tab key
    Tab,
    /// Shift+Tab (BackTab)
    BackTab,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
}
