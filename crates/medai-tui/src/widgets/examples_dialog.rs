//! Sample abstracts picker

use medai_core::{copy, Language, SAMPLE_ABSTRACTS};
use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};
use unicode_width::UnicodeWidthChar;

use super::modal_overlay;
use crate::theme::styles;

const WIDTH: u16 = 72;

pub struct ExamplesDialog {
    selected: usize,
    language: Language,
}

impl ExamplesDialog {
    pub fn new(selected: usize, language: Language) -> Self {
        Self { selected, language }
    }
}

/// Clip `text` to `width` display cells, marking the cut with an ellipsis
fn truncate(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            out.push('…');
            return out;
        }
        out.push(c);
        used += w;
    }
    out
}

impl Widget for ExamplesDialog {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let texts = &copy(self.language).dialogs;
        // borders + description + blank + one row per sample
        let height = SAMPLE_ABSTRACTS.len() as u16 + 4;
        let rect = modal_overlay::centered_rect(WIDTH, height, area);
        modal_overlay::prepare(buf, area, rect);

        let title = format!(" {} ", texts.examples_title);
        let block = styles::modal_block(&title);
        let inner = block.inner(rect);
        block.render(rect, buf);
        if inner.height == 0 || inner.width < 8 {
            return;
        }

        buf.set_line(
            inner.x + 1,
            inner.y,
            &Line::styled(texts.examples_description, styles::text_secondary()),
            inner.width - 2,
        );

        let text_width = inner.width as usize - 6;
        for (i, sample) in SAMPLE_ABSTRACTS.iter().enumerate() {
            let y = inner.y + 2 + i as u16;
            if y >= inner.bottom() {
                break;
            }
            let style = if i == self.selected {
                styles::focused_selected()
            } else {
                styles::text_primary()
            };
            let row = format!("{} {}", i + 1, truncate(sample, text_width));
            buf.set_string(inner.x + 1, y, if i == self.selected { "▸" } else { " " }, styles::accent());
            buf.set_string(inner.x + 3, y, row, style);
        }
    }
}
