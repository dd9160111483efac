//! Line builders for each narrative section
//!
//! Every section renders to owned `Line`s so the document can measure
//! heights before drawing. Builders wrap text to the document width
//! themselves; the document never reflows.

mod ethics;
mod hero;
mod pipeline;
mod playground;
mod problem;
mod results;

use medai_app::sections::well_known;
use medai_app::AppState;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

/// Horizontal padding inside the document
pub(crate) const MARGIN: usize = 2;

/// Build every section's lines in registry order
pub fn build(state: &AppState, width: u16) -> Vec<Vec<Line<'static>>> {
    let inner = (width as usize).saturating_sub(MARGIN * 2).max(10);
    (0..state.sections().len())
        .map(|index| {
            let focused = index == state.current_section();
            let mut lines = match index {
                well_known::HERO => hero::lines(state, inner),
                well_known::PROBLEM => problem::lines(state, inner, focused),
                well_known::PIPELINE => pipeline::lines(state, inner, focused),
                well_known::PLAYGROUND => playground::lines(state, inner, focused),
                well_known::RESULTS => results::lines(state, inner, focused),
                _ => ethics::lines(state, inner, focused),
            };
            lines.push(Line::default());
            lines
        })
        .collect()
}

/// Section heading: `02  El Problema` plus an underline
pub(crate) fn heading(number: usize, title: &str, focused: bool) -> Vec<Line<'static>> {
    let number_style = if focused {
        styles::accent_bold()
    } else {
        styles::text_muted()
    };
    let rule = "─".repeat(UnicodeWidthStr::width(title) + 4);
    vec![
        Line::from(vec![
            Span::styled(format!("{:02}  ", number), number_style),
            Span::styled(title.to_string(), styles::text_bright()),
        ]),
        Line::styled(
            rule,
            if focused {
                styles::border_active()
            } else {
                styles::border_inactive()
            },
        ),
        Line::default(),
    ]
}

/// `[k] label` affordance; disabled ones are dimmed
pub(crate) fn key_hint(key: &str, label: &str, enabled: bool) -> Vec<Span<'static>> {
    if enabled {
        vec![
            Span::styled("[", styles::text_muted()),
            Span::styled(key.to_string(), styles::keybinding()),
            Span::styled("] ", styles::text_muted()),
            Span::styled(label.to_string(), styles::text_primary()),
        ]
    } else {
        vec![Span::styled(format!("[{}] {}", key, label), styles::disabled())]
    }
}

/// Greedy word wrap by display width
///
/// Explicit newlines are kept; a single word wider than `width` gets its own
/// line and is clipped when drawn.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;
        for word in paragraph.split_whitespace() {
            let word_width = UnicodeWidthStr::width(word);
            if current_width > 0 && current_width + 1 + word_width > width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if current_width > 0 {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }
        lines.push(current);
    }
    lines
}

/// Wrapped paragraph with a uniform style and optional prefix on the first line
pub(crate) fn paragraph(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    wrap(text, width)
        .into_iter()
        .map(|l| Line::styled(l, style))
        .collect()
}

/// Bulleted item; continuation lines are indented under the text
pub(crate) fn bullet(marker: &str, text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    let indent = UnicodeWidthStr::width(marker) + 1;
    wrap(text, width.saturating_sub(indent))
        .into_iter()
        .enumerate()
        .map(|(i, l)| {
            let lead = if i == 0 {
                Span::styled(format!("{} ", marker), styles::accent())
            } else {
                Span::raw(" ".repeat(indent))
            };
            Line::from(vec![lead, Span::styled(l, style)])
        })
        .collect()
}

/// Horizontal bar `█████░░░░░` of `width` cells for a ratio in [0, 1]
pub(crate) fn bar(ratio: f64, width: usize) -> (String, String) {
    let filled = ((ratio.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    ("█".repeat(filled), "░".repeat(width - filled))
}
