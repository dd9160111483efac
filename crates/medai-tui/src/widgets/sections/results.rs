//! Results: metric cards, model tabs and the confusion matrix

use medai_app::sections::well_known;
use medai_app::AppState;
use medai_core::{copy, Category, ModelKind, CONFUSION_MATRIX, METRICS};
use ratatui::text::{Line, Span};

use super::{heading, paragraph};
use crate::theme::styles;

/// Width of one matrix column
const CELL_WIDTH: usize = 5;

pub(super) fn lines(state: &AppState, width: usize, focused: bool) -> Vec<Line<'static>> {
    let language = state.language();
    let texts = &copy(language).results;

    let mut lines = heading(well_known::RESULTS + 1, texts.title, focused);

    // Metric cards
    lines.push(Line::from(vec![
        Span::styled(format!("{}  ", texts.accuracy), styles::text_secondary()),
        Span::styled(METRICS.accuracy_percent(), styles::text_bright()),
        Span::styled(
            format!("  {} {}", METRICS.accuracy_gain(), texts.vs_baseline),
            styles::status_green(),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled(format!("{}  ", texts.macro_f1), styles::text_secondary()),
        Span::styled(METRICS.macro_f1_display(), styles::text_bright()),
        Span::styled(
            format!("  {} {}", METRICS.macro_f1_gain(), texts.vs_baseline),
            styles::status_green(),
        ),
    ]));
    lines.push(Line::default());

    // Model comparison tabs
    let selected = state.results_view.model_tab;
    let tab = |kind: ModelKind, label: &str| {
        let style = if kind == selected {
            styles::focused_selected()
        } else {
            styles::text_secondary()
        };
        Span::styled(format!(" {} ", label), style)
    };
    lines.push(Line::from(vec![
        tab(ModelKind::Baseline, texts.baseline),
        Span::styled(" │ ", styles::text_muted()),
        tab(ModelKind::Transformer, texts.transformer),
        Span::styled("   [t]", styles::keybinding()),
    ]));
    lines.push(Line::styled(selected.architecture(), styles::accent()));
    lines.extend(paragraph(
        selected.description(language),
        width,
        styles::text_secondary(),
    ));
    lines.push(Line::default());

    lines.push(Line::styled(texts.confusion_matrix, styles::text_bright()));
    lines.extend(matrix_lines(state));
    lines.push(Line::default());
    lines.push(tooltip(state));
    lines.push(Line::styled(texts.matrix_hint, styles::text_muted()));
    lines
}

fn matrix_lines(state: &AppState) -> Vec<Line<'static>> {
    let (cursor_row, cursor_col) = state.results_view.matrix_cursor;

    let mut header = vec![Span::raw(" ".repeat(CELL_WIDTH))];
    for (col, category) in Category::ALL.iter().enumerate() {
        let style = if col == cursor_col {
            styles::accent_bold()
        } else {
            styles::text_muted()
        };
        header.push(Span::styled(
            format!("{:>width$}", category.abbreviation(), width = CELL_WIDTH),
            style,
        ));
    }

    let mut lines = vec![Line::from(header)];
    for (row, counts) in CONFUSION_MATRIX.rows().enumerate() {
        let label_style = if row == cursor_row {
            styles::accent_bold()
        } else {
            styles::text_muted()
        };
        let mut spans = vec![Span::styled(
            format!("{:<width$}", Category::ALL[row].abbreviation(), width = CELL_WIDTH),
            label_style,
        )];
        for (col, count) in counts.iter().enumerate() {
            let selected = row == cursor_row && col == cursor_col;
            spans.push(Span::styled(
                format!("{:>width$}", count, width = CELL_WIDTH),
                styles::matrix_cell(CONFUSION_MATRIX.cell_kind(row, col), selected),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines
}

/// "Verdadero: X / Predicho: Y / Casos: N" for the cursor cell
fn tooltip(state: &AppState) -> Line<'static> {
    let language = state.language();
    let texts = &copy(language).results;
    let (row, col) = state.results_view.matrix_cursor;
    let count = CONFUSION_MATRIX.cell(row, col).unwrap_or(0);

    Line::from(vec![
        Span::styled(format!("{}: ", texts.true_label), styles::text_muted()),
        Span::styled(Category::ALL[row].label(language), styles::text_primary()),
        Span::styled(" / ", styles::text_muted()),
        Span::styled(format!("{}: ", texts.predicted_label), styles::text_muted()),
        Span::styled(Category::ALL[col].label(language), styles::text_primary()),
        Span::styled(" / ", styles::text_muted()),
        Span::styled(format!("{}: ", texts.cases), styles::text_muted()),
        Span::styled(count.to_string(), styles::text_bright()),
    ])
}
