//! Stacked document view
//!
//! All sections are laid out one after another and the viewport slides over
//! them. Section heights are reported to [`DocumentViewState`] on every
//! render so scroll targets always match what is on screen.

use medai_app::DocumentViewState;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::StatefulWidget;

use super::sections::MARGIN;

pub struct Document {
    sections: Vec<Vec<Line<'static>>>,
}

impl Document {
    pub fn new(sections: Vec<Vec<Line<'static>>>) -> Self {
        Self { sections }
    }

    fn heights(&self) -> Vec<u16> {
        self.sections
            .iter()
            .map(|s| u16::try_from(s.len()).unwrap_or(u16::MAX))
            .collect()
    }
}

impl StatefulWidget for Document {
    type State = DocumentViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.set_layout(self.heights(), area.height);
        if area.height == 0 || area.width == 0 {
            return;
        }

        let x = area.x + MARGIN as u16;
        let width = area.width.saturating_sub(MARGIN as u16 * 2);
        let visible = self
            .sections
            .iter()
            .flatten()
            .skip(state.offset as usize)
            .take(area.height as usize);

        for (row, line) in visible.enumerate() {
            buf.set_line(x, area.y + row as u16, line, width);
        }
    }
}
