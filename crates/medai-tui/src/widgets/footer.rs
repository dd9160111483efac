//! Footer: key hints for the current mode, replaced by a toast while one is live

use medai_app::{Toast, UiMode};
use medai_core::Language;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

pub struct Footer<'a> {
    mode: UiMode,
    language: Language,
    toast: Option<&'a Toast>,
}

impl<'a> Footer<'a> {
    pub fn new(mode: UiMode, language: Language) -> Self {
        Self {
            mode,
            language,
            toast: None,
        }
    }

    pub fn toast(mut self, toast: Option<&'a Toast>) -> Self {
        self.toast = toast;
        self
    }
}

/// `(key, label)` pairs for the active mode
fn hints(mode: UiMode, language: Language) -> &'static [(&'static str, &'static str)] {
    match (mode, language) {
        (UiMode::Browse, Language::Es) => &[
            ("Tab", "sección"),
            ("1-6", "ir a"),
            ("j/k", "desplazar"),
            ("⌘K", "paleta"),
            ("L", "idioma"),
            ("q", "salir"),
        ],
        (UiMode::Browse, Language::En) => &[
            ("Tab", "section"),
            ("1-6", "go to"),
            ("j/k", "scroll"),
            ("⌘K", "palette"),
            ("L", "language"),
            ("q", "quit"),
        ],
        (UiMode::Editing, Language::Es) => &[
            ("Esc", "terminar"),
            ("⌘Enter", "clasificar"),
            ("^U", "borrar"),
        ],
        (UiMode::Editing, Language::En) => &[
            ("Esc", "done"),
            ("⌘Enter", "classify"),
            ("^U", "clear"),
        ],
        (UiMode::Palette, Language::Es) => &[("↑↓", "elegir"), ("Enter", "ejecutar"), ("Esc", "cerrar")],
        (UiMode::Palette, Language::En) => &[("↑↓", "select"), ("Enter", "run"), ("Esc", "close")],
        (UiMode::Examples, Language::Es) => &[("↑↓", "elegir"), ("Enter", "cargar"), ("Esc", "cerrar")],
        (UiMode::Examples, Language::En) => &[("↑↓", "select"), ("Enter", "load"), ("Esc", "close")],
        (UiMode::Explanation, Language::Es) => &[("←→", "predicción"), ("Esc", "cerrar")],
        (UiMode::Explanation, Language::En) => &[("←→", "prediction"), ("Esc", "close")],
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let line = match self.toast {
            Some(toast) => Line::from(vec![
                Span::raw(" "),
                Span::styled(toast.title.clone(), styles::toast(toast.kind)),
                Span::styled(" · ", styles::text_muted()),
                Span::styled(toast.body.clone(), styles::text_primary()),
            ]),
            None => {
                let mut spans = vec![Span::raw(" ")];
                for (key, label) in hints(self.mode, self.language) {
                    spans.push(Span::styled(*key, styles::keybinding()));
                    spans.push(Span::styled(format!(" {}  ", label), styles::text_muted()));
                }
                Line::from(spans)
            }
        };

        buf.set_line(area.x, area.y, &line, area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use medai_app::handler::update;
    use medai_app::{AppState, Message};

    #[test]
    fn test_browse_hints() {
        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(Footer::new(UiMode::Browse, Language::Es), term.area());
        assert!(term.buffer_contains("paleta"));
        assert!(term.buffer_contains("salir"));
    }

    #[test]
    fn test_hints_follow_mode() {
        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(Footer::new(UiMode::Editing, Language::En), term.area());
        assert!(term.buffer_contains("classify"));
        assert!(!term.buffer_contains("quit"));
    }

    #[test]
    fn test_toast_replaces_hints() {
        let mut state = AppState::new();
        update(&mut state, Message::LoadSample(0));

        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(
            Footer::new(state.ui_mode, state.language()).toast(state.toast.as_ref()),
            term.area(),
        );

        assert!(term.buffer_contains("Ejemplo cargado"));
        assert!(term.buffer_contains("Texto copiado al playground"));
        assert!(!term.buffer_contains("salir"));
    }
}
