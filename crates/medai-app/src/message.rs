//! Message types for the application (TEA pattern)

use medai_core::{ClassificationError, Language, Prediction};

use crate::input_key::InputKey;
use crate::playground::RequestId;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),
    /// Bracketed paste from terminal
    Paste(String),
    /// Tick event for animations and smooth scrolling
    Tick,
    /// Request to quit
    Quit,

    // ─────────────────────────────────────────────────────────
    // Section navigation
    // ─────────────────────────────────────────────────────────
    /// Make section `index` current and scroll it into view
    GotoSection(usize),
    NextSection,
    PreviousSection,

    // ─────────────────────────────────────────────────────────
    // Viewport (manual scrolling, never changes the current section)
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,

    // ─────────────────────────────────────────────────────────
    // Playground
    // ─────────────────────────────────────────────────────────
    /// Replace the input text
    SetInputText(String),
    /// Manual classification trigger
    TriggerClassify,
    ToggleLiveMode,
    /// Live-mode debounce timer elapsed
    DebounceElapsed { generation: u64 },
    /// A classification task finished
    ClassificationCompleted {
        request_id: RequestId,
        result: Result<Vec<Prediction>, ClassificationError>,
    },
    /// Load sample abstract `index` into the playground and go there
    LoadSample(usize),
    StartEditing,
    StopEditing,

    // ─────────────────────────────────────────────────────────
    // Command palette
    // ─────────────────────────────────────────────────────────
    OpenPalette,
    ClosePalette,
    PaletteInput(char),
    PaletteBackspace,
    PaletteClearQuery,
    PaletteUp,
    PaletteDown,
    /// Run the selected command
    PaletteConfirm,

    // ─────────────────────────────────────────────────────────
    // Language
    // ─────────────────────────────────────────────────────────
    SetLanguage(Language),
    ToggleLanguage,

    // ─────────────────────────────────────────────────────────
    // Dialogs and results view
    // ─────────────────────────────────────────────────────────
    OpenExamples,
    CloseExamples,
    ExamplesUp,
    ExamplesDown,
    ExamplesConfirm,
    OpenExplanation,
    CloseExplanation,
    ExplanationNext,
    ExplanationPrevious,
    ToggleModelTab,
    MatrixUp,
    MatrixDown,
    MatrixLeft,
    MatrixRight,
}
