use medai_app::AppState;
use medai_core::copy;
use ratatui::text::{Line, Span};

use super::{key_hint, paragraph};
use crate::theme::styles;

pub(super) fn lines(state: &AppState, width: usize) -> Vec<Line<'static>> {
    let texts = &copy(state.language()).hero;

    let mut lines = vec![
        Line::default(),
        Line::styled(format!("✚ {}", texts.title), styles::accent_bold()),
        Line::default(),
    ];
    lines.extend(paragraph(texts.subtitle, width, styles::text_bright()));
    lines.extend(paragraph(texts.description, width, styles::text_secondary()));
    lines.push(Line::default());

    let mut actions = key_hint("Enter", texts.try_demo, true);
    actions.push(Span::raw("   "));
    actions.extend(key_hint("s", texts.see_story, true));
    lines.push(Line::from(actions));
    lines.push(Line::default());
    lines
}
