use medai_app::sections::well_known;
use medai_app::AppState;
use medai_core::copy;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::{bullet, heading};
use crate::theme::styles;

const ARROW: &str = " → ";

pub(super) fn lines(state: &AppState, width: usize, focused: bool) -> Vec<Line<'static>> {
    let texts = &copy(state.language()).pipeline;

    let mut lines = heading(well_known::PIPELINE + 1, texts.title, focused);

    // Steps flow left to right, breaking onto a new row when they overflow
    let mut row: Vec<Span<'static>> = Vec::new();
    let mut row_width = 0;
    let arrow_width = UnicodeWidthStr::width(ARROW);
    for (i, step) in texts.steps.iter().enumerate() {
        let label = format!("{}. {}", i + 1, step);
        let label_width = UnicodeWidthStr::width(label.as_str());
        let sep = if row.is_empty() { 0 } else { arrow_width };
        if row_width > 0 && row_width + sep + label_width > width {
            lines.push(Line::from(std::mem::take(&mut row)));
            row_width = 0;
        }
        if !row.is_empty() {
            row.push(Span::styled(ARROW, styles::text_muted()));
            row_width += arrow_width;
        }
        row.push(Span::styled(label, styles::accent()));
        row_width += label_width;
    }
    if !row.is_empty() {
        lines.push(Line::from(row));
    }

    lines.push(Line::default());
    lines.extend(bullet("✓", texts.reproducibility, width, styles::status_green()));
    lines.extend(bullet("!", texts.warning, width, styles::status_yellow()));
    lines
}
