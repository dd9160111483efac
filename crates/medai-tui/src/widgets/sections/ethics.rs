use medai_app::sections::well_known;
use medai_app::AppState;
use medai_core::copy;
use ratatui::text::{Line, Span};

use super::{bullet, heading, paragraph};
use crate::theme::styles;

pub(super) fn lines(state: &AppState, width: usize, focused: bool) -> Vec<Line<'static>> {
    let texts = &copy(state.language()).ethics;

    let mut lines = heading(well_known::ETHICS + 1, texts.title, focused);
    lines.extend(bullet("⚠", texts.warning, width, styles::status_yellow()));
    lines.push(Line::default());
    lines.extend(paragraph(texts.deliverables, width, styles::text_secondary()));
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(format!("↗ {}", texts.repo), styles::accent()),
        Span::raw("   "),
        Span::styled(format!("↻ {}", texts.continue_iteration), styles::accent()),
    ]));
    lines
}
