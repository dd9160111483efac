//! Playground: input box, affordances and the ranked predictions list

use medai_app::sections::well_known;
use medai_app::{AppState, UiMode};
use medai_core::{copy, Prediction};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::{bar, heading, key_hint, wrap};
use crate::theme::styles;

/// Braille spinner shown while a request is in flight
const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const LABEL_WIDTH: usize = 24;

pub(super) fn lines(state: &AppState, width: usize, focused: bool) -> Vec<Line<'static>> {
    let texts = &copy(state.language()).playground;
    let editing = state.ui_mode == UiMode::Editing;

    let mut lines = heading(well_known::PLAYGROUND + 1, texts.title, focused);

    let live_badge = if state.live_mode() {
        Span::styled(" ● LIVE ", styles::focused_selected())
    } else {
        Span::raw("")
    };
    lines.push(Line::from(vec![
        Span::styled(format!("◆ {}  ", texts.card_title), styles::text_bright()),
        live_badge,
    ]));

    lines.extend(input_box(state, width, editing));

    lines.push(Line::styled(
        format!("{} chars", state.input_text().chars().count()),
        styles::text_muted(),
    ));
    lines.push(Line::from(action_row(state)));
    lines.push(Line::default());

    if !state.predictions().is_empty() {
        lines.push(Line::styled(texts.predictions, styles::text_secondary()));
        let bar_width = width.saturating_sub(LABEL_WIDTH + 12).clamp(4, 30);
        for (rank, prediction) in state.predictions().iter().enumerate() {
            lines.push(prediction_line(state, rank, prediction, bar_width));
        }
    }
    lines
}

fn input_box(state: &AppState, width: usize, editing: bool) -> Vec<Line<'static>> {
    let texts = &copy(state.language()).playground;
    let border = if editing {
        styles::border_active()
    } else {
        styles::border_inactive()
    };
    let inner = width.saturating_sub(4).max(1);

    let (body, body_style): (Vec<String>, Style) = if state.input_text().is_empty() {
        (wrap(texts.placeholder, inner), styles::text_muted())
    } else {
        (wrap(state.input_text(), inner), styles::text_primary())
    };

    let mut lines = vec![Line::styled(
        format!("╭{}╮", "─".repeat(inner + 2)),
        border,
    )];
    let last = body.len().saturating_sub(1);
    for (i, text) in body.into_iter().enumerate() {
        let mut spans = vec![Span::styled("│ ", border)];
        let mut used = UnicodeWidthStr::width(text.as_str());
        spans.push(Span::styled(text, body_style));
        if editing && i == last {
            spans.push(Span::styled("▏", styles::accent_bold()));
            used += 1;
        }
        spans.push(Span::raw(" ".repeat(inner.saturating_sub(used))));
        spans.push(Span::styled(" │", border));
        lines.push(Line::from(spans));
    }
    lines.push(Line::styled(
        format!("╰{}╯", "─".repeat(inner + 2)),
        border,
    ));
    lines
}

fn action_row(state: &AppState) -> Vec<Span<'static>> {
    let texts = &copy(state.language()).playground;

    let mut spans = if state.is_classifying() {
        let frame = SPINNER[(state.animation_frame as usize) % SPINNER.len()];
        vec![Span::styled(
            format!("{} {}", frame, texts.classifying),
            styles::status_yellow(),
        )]
    } else {
        key_hint("c", texts.classify, state.playground().can_trigger().is_ok())
    };

    spans.push(Span::raw("  "));
    let live = if state.live_mode() { "ON" } else { "OFF" };
    spans.extend(key_hint("l", &format!("{}: {}", texts.live_mode, live), true));
    spans.push(Span::raw("  "));
    spans.extend(key_hint("e", texts.examples, true));
    spans.push(Span::raw("  "));
    spans.extend(key_hint("w", texts.why, !state.predictions().is_empty()));
    spans
}

fn prediction_line(
    state: &AppState,
    rank: usize,
    prediction: &Prediction,
    bar_width: usize,
) -> Line<'static> {
    let label = prediction.category.label(state.language());
    let pad = LABEL_WIDTH.saturating_sub(UnicodeWidthStr::width(label));
    let (filled, empty) = bar(prediction.probability, bar_width);
    let fill_style = if rank == 0 {
        styles::accent_bold()
    } else {
        styles::accent()
    };

    Line::from(vec![
        Span::styled(format!("{}. ", rank + 1), styles::text_muted()),
        Span::styled(format!("{}{}", label, " ".repeat(pad)), styles::text_primary()),
        Span::styled(filled, fill_style),
        Span::styled(empty, styles::text_muted()),
        Span::styled(
            format!(" {:>6}", prediction.probability_percent()),
            styles::text_bright(),
        ),
    ])
}
