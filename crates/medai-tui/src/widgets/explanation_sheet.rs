//! "Why?" side sheet for one prediction

use medai_core::{copy, Language, Prediction, EXPLANATION_KEYWORDS};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Gauge, Widget},
};

use super::modal_overlay;
use crate::theme::styles;

const WIDTH: u16 = 44;

pub struct ExplanationSheet<'a> {
    prediction: &'a Prediction,
    index: usize,
    count: usize,
    language: Language,
}

impl<'a> ExplanationSheet<'a> {
    pub fn new(prediction: &'a Prediction, index: usize, count: usize, language: Language) -> Self {
        Self {
            prediction,
            index,
            count,
            language,
        }
    }

    /// Gauge caption, e.g. "82.4% de confianza"
    pub fn confidence_label(&self) -> String {
        format!(
            "{} {}",
            self.prediction.confidence_percent(),
            copy(self.language).dialogs.confidence_suffix
        )
    }
}

/// Keyword chips, wrapped onto as many rows as `width` needs
fn keyword_chips(width: usize) -> Vec<Line<'static>> {
    let mut rows = Vec::new();
    let mut row: Vec<Span<'static>> = Vec::new();
    let mut used = 0;
    for keyword in EXPLANATION_KEYWORDS {
        let chip = format!(" {} ", keyword);
        let chip_width = chip.chars().count() + 1;
        if used > 0 && used + chip_width > width {
            rows.push(Line::from(std::mem::take(&mut row)));
            used = 0;
        }
        row.push(Span::styled(chip, styles::focused_selected()));
        row.push(Span::raw(" "));
        used += chip_width;
    }
    if !row.is_empty() {
        rows.push(Line::from(row));
    }
    rows
}

impl Widget for ExplanationSheet<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let texts = &copy(self.language).dialogs;
        let rect = modal_overlay::right_sheet(WIDTH, area);
        modal_overlay::prepare(buf, area, rect);

        let title = format!(" {} ", texts.explanation_title);
        let block = styles::modal_block(&title);
        let inner = block.inner(rect);
        block.render(rect, buf);
        if inner.height < 8 || inner.width < 10 {
            return;
        }

        let x = inner.x + 1;
        let width = inner.width - 2;

        let mut lines = vec![
            Line::styled(texts.explanation_description, styles::text_secondary()),
            Line::default(),
            Line::from(vec![
                Span::styled(
                    self.prediction.category.label(self.language),
                    styles::accent_bold(),
                ),
                Span::styled(
                    format!("  ({}/{})", self.index + 1, self.count),
                    styles::text_muted(),
                ),
            ]),
            Line::default(),
            Line::styled(texts.keywords, styles::text_secondary()),
        ];
        lines.extend(keyword_chips(width as usize));
        lines.push(Line::default());
        lines.push(Line::styled(texts.confidence, styles::text_secondary()));

        let mut y = inner.y;
        for line in &lines {
            if y >= inner.bottom() {
                return;
            }
            buf.set_line(x, y, line, width);
            y += 1;
        }

        if y < inner.bottom() {
            Gauge::default()
                .ratio(self.prediction.confidence.clamp(0.0, 1.0))
                .label(self.confidence_label())
                .gauge_style(styles::accent())
                .render(Rect::new(x, y, width, 1), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use medai_core::Category;

    #[test]
    fn test_confidence_label_localized() {
        let p = Prediction::new(Category::Oncology, 0.6, 0.824);
        assert_eq!(
            ExplanationSheet::new(&p, 0, 3, Language::Es).confidence_label(),
            "82.4% de confianza"
        );
        assert_eq!(
            ExplanationSheet::new(&p, 0, 3, Language::En).confidence_label(),
            "82.4% confidence"
        );
    }

    #[test]
    fn test_keyword_chips_wrap() {
        assert_eq!(keyword_chips(200).len(), 1);
        assert_eq!(keyword_chips(30).len(), 2);
    }

    #[test]
    fn test_sheet_shows_category_and_keywords() {
        let p = Prediction::new(Category::Neurology, 0.7, 0.9);
        let mut term = TestTerminal::new();
        term.render_widget(ExplanationSheet::new(&p, 1, 3, Language::Es), term.area());

        assert!(term.buffer_contains("Neurología"));
        assert!(term.buffer_contains("(2/3)"));
        assert!(term.buffer_contains("tratamiento"));
        assert!(term.buffer_contains("resultados"));
        assert!(term.buffer_contains("90.0% de confianza"));
    }
}
