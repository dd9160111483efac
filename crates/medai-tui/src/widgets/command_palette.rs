//! Command palette dialog
//!
//! Query input on top, then the filtered entries grouped under
//! "Navegación" / "Acciones" headings. An empty filter result shows the
//! localized empty state instead of a list.

use medai_app::{PaletteEntry, PaletteGroup};
use medai_core::{copy, Language};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use super::modal_overlay;
use crate::theme::styles;

const WIDTH: u16 = 56;

pub struct CommandPalette<'a> {
    query: &'a str,
    entries: &'a [PaletteEntry],
    selected: usize,
    language: Language,
}

impl<'a> CommandPalette<'a> {
    pub fn new(query: &'a str, entries: &'a [PaletteEntry], selected: usize, language: Language) -> Self {
        Self {
            query,
            entries,
            selected,
            language,
        }
    }

    fn body(&self) -> Vec<Line<'static>> {
        let texts = &copy(self.language).palette;

        if self.entries.is_empty() {
            return vec![Line::default(), Line::styled(texts.empty, styles::text_muted())];
        }

        let mut lines = Vec::new();
        let mut group: Option<PaletteGroup> = None;
        for (i, entry) in self.entries.iter().enumerate() {
            let entry_group = entry.command.group();
            if group != Some(entry_group) {
                if group.is_some() {
                    lines.push(Line::default());
                }
                lines.push(Line::styled(
                    entry_group.heading(self.language),
                    styles::text_secondary(),
                ));
                group = Some(entry_group);
            }

            let line = if i == self.selected {
                Line::styled(format!(" ▸ {} ", entry.label), styles::focused_selected())
            } else {
                Line::styled(format!("   {} ", entry.label), styles::text_primary())
            };
            lines.push(line);
        }
        lines
    }
}

impl Widget for CommandPalette<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let body = self.body();
        // borders + query row + separator + body
        let height = (body.len() as u16).saturating_add(4);
        let rect = modal_overlay::centered_rect(WIDTH, height, area);
        modal_overlay::prepare(buf, area, rect);

        let block = styles::modal_block(" ⌘K ");
        let inner = block.inner(rect);
        block.render(rect, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let placeholder = copy(self.language).palette.placeholder;
        let query_line = if self.query.is_empty() {
            Line::from(vec![
                Span::styled("> ", styles::accent_bold()),
                Span::styled(placeholder, styles::text_muted()),
            ])
        } else {
            Line::from(vec![
                Span::styled("> ", styles::accent_bold()),
                Span::styled(self.query.to_string(), styles::text_bright()),
                Span::styled("▏", styles::accent()),
            ])
        };
        buf.set_line(inner.x + 1, inner.y, &query_line, inner.width.saturating_sub(1));

        if inner.height > 1 {
            buf.set_string(
                inner.x,
                inner.y + 1,
                "─".repeat(inner.width as usize),
                styles::border_inactive(),
            );
        }

        for (row, line) in body.iter().enumerate() {
            let y = inner.y + 2 + row as u16;
            if y >= inner.bottom() {
                break;
            }
            buf.set_line(inner.x + 1, y, line, inner.width.saturating_sub(2));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use medai_app::palette::{catalogue, filter_entries};
    use medai_app::SectionRegistry;

    fn entries(query: &str, language: Language) -> Vec<PaletteEntry> {
        filter_entries(&catalogue(&SectionRegistry::default(), language, false), query)
    }

    #[test]
    fn test_palette_lists_both_groups() {
        let all = entries("", Language::Es);
        let mut term = TestTerminal::with_size(80, 24);
        term.render_widget(CommandPalette::new("", &all, 0, Language::Es), term.area());

        assert!(term.buffer_contains("Buscar acciones..."));
        assert!(term.buffer_contains("Navegación"));
        assert!(term.buffer_contains("Acciones"));
        assert!(term.buffer_contains("▸ Inicio"));
        assert!(term.buffer_contains("Cambiar idioma"));
    }

    #[test]
    fn test_palette_play_query() {
        let found = entries("play", Language::Es);
        let mut term = TestTerminal::with_size(80, 24);
        term.render_widget(CommandPalette::new("play", &found, 0, Language::Es), term.area());

        assert!(term.buffer_contains("> play"));
        assert!(term.buffer_contains("Playground"));
        assert!(!term.buffer_contains("Acciones"));
    }

    #[test]
    fn test_palette_empty_state() {
        let none = entries("zzz", Language::En);
        let mut term = TestTerminal::with_size(80, 24);
        term.render_widget(CommandPalette::new("zzz", &none, 0, Language::En), term.area());

        assert!(term.buffer_contains("No results found."));
        assert!(!term.buffer_contains("Navigation"));
    }
}
