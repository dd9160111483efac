//! Application state (Model in TEA pattern)

use medai_core::{Language, ModelKind, Prediction, CONFUSION_MATRIX};
use serde::Serialize;

use crate::config::Settings;
use crate::palette::{catalogue, filter_entries, PaletteEntry, PaletteState};
use crate::playground::PlaygroundState;
use crate::sections::{DocumentViewState, SectionRegistry};

/// Current UI mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Reading the document; global shortcuts active
    #[default]
    Browse,

    /// Typing into the playground input
    Editing,

    /// Command palette overlay
    Palette,

    /// Sample abstracts dialog
    Examples,

    /// "Why?" explanation sheet for one prediction
    Explanation,
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

/// Transient notification shown in the footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub body: String,
    pub(crate) ticks_left: u32,
}

impl Toast {
    pub fn ticks_left(&self) -> u32 {
        self.ticks_left
    }
}

/// Results section view state
#[derive(Debug, Clone, Default)]
pub struct ResultsViewState {
    pub model_tab: ModelKind,
    /// (true row, predicted column) under the matrix cursor
    pub matrix_cursor: (usize, usize),
}

impl ResultsViewState {
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let last = CONFUSION_MATRIX.dimension() as isize - 1;
        let (row, col) = self.matrix_cursor;
        self.matrix_cursor = (
            (row as isize + d_row).clamp(0, last) as usize,
            (col as isize + d_col).clamp(0, last) as usize,
        );
    }
}

/// Value copy of the interaction core
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractionSnapshot {
    pub current_section: usize,
    pub input_text: String,
    pub predictions: Vec<Prediction>,
    pub is_classifying: bool,
    pub palette_open: bool,
    pub language: Language,
    pub live_mode: bool,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current UI mode
    pub ui_mode: UiMode,

    pub phase: AppPhase,

    /// Configuration settings
    pub settings: Settings,

    pub(crate) sections: SectionRegistry,
    pub(crate) current_section: usize,
    pub(crate) language: Language,
    pub(crate) playground: PlaygroundState,

    /// Palette query and cursor
    pub palette: PaletteState,

    /// Cursor in the examples dialog
    pub examples_selected: usize,

    /// Prediction index shown by the explanation sheet
    pub explanation_index: usize,

    pub results_view: ResultsViewState,

    /// Viewport over the stacked sections
    pub document_view: DocumentViewState,

    pub toast: Option<Toast>,

    /// Frame counter for spinners
    pub animation_frame: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            ui_mode: UiMode::Browse,
            phase: AppPhase::Running,
            sections: SectionRegistry::default(),
            current_section: 0,
            language: settings.behavior.language,
            playground: PlaygroundState::new(settings.behavior.live_mode),
            palette: PaletteState::default(),
            examples_selected: 0,
            explanation_index: 0,
            results_view: ResultsViewState::default(),
            document_view: DocumentViewState::default(),
            toast: None,
            animation_frame: 0,
            settings,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Read-only projections
    // ─────────────────────────────────────────────────────────

    pub fn sections(&self) -> &SectionRegistry {
        &self.sections
    }

    pub fn current_section(&self) -> usize {
        self.current_section
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn playground(&self) -> &PlaygroundState {
        &self.playground
    }

    pub fn input_text(&self) -> &str {
        self.playground.input_text()
    }

    pub fn predictions(&self) -> &[Prediction] {
        self.playground.predictions()
    }

    pub fn is_classifying(&self) -> bool {
        self.playground.is_classifying()
    }

    pub fn live_mode(&self) -> bool {
        self.playground.live_mode()
    }

    pub fn palette_open(&self) -> bool {
        self.ui_mode == UiMode::Palette
    }

    /// Reading progress for the header gauge
    pub fn progress_percent(&self) -> f64 {
        self.sections.progress_percent(self.current_section)
    }

    pub fn snapshot(&self) -> InteractionSnapshot {
        InteractionSnapshot {
            current_section: self.current_section,
            input_text: self.playground.input_text().to_string(),
            predictions: self.playground.predictions().to_vec(),
            is_classifying: self.is_classifying(),
            palette_open: self.palette_open(),
            language: self.language,
            live_mode: self.live_mode(),
        }
    }

    /// Palette entries matching the current query
    pub fn palette_entries(&self) -> Vec<PaletteEntry> {
        let entries = catalogue(&self.sections, self.language, self.live_mode());
        filter_entries(&entries, &self.palette.query)
    }

    /// Prediction shown by the explanation sheet
    pub fn explained_prediction(&self) -> Option<&Prediction> {
        self.predictions().get(self.explanation_index)
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub(crate) fn show_toast(
        &mut self,
        kind: ToastKind,
        title: impl Into<String>,
        body: impl Into<String>,
    ) {
        self.toast = Some(Toast {
            kind,
            title: title.into(),
            body: body.into(),
            ticks_left: self.settings.ui.toast_ticks,
        });
    }

    /// Advance animations and expire toasts
    pub(crate) fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);

        if let Some(toast) = self.toast.as_mut() {
            toast.ticks_left = toast.ticks_left.saturating_sub(1);
            if toast.ticks_left == 0 {
                self.toast = None;
            }
        }

        self.document_view.tick();
    }
}
