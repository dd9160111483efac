//! Header bar widget
//!
//! Brand, current section, palette hint, language tag and the scroll
//! progress gauge.

use medai_core::Language;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{LineGauge, Widget},
};

use crate::theme::{palette, styles};

pub struct MainHeader<'a> {
    section_title: &'a str,
    language: Language,
    /// Scroll progress in percent (0-100)
    progress: f64,
}

impl<'a> MainHeader<'a> {
    pub fn new(section_title: &'a str, language: Language, progress: f64) -> Self {
        Self {
            section_title,
            language,
            progress,
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        self.render_title_row(Rect { height: 1, ..inner }, buf);

        if inner.height >= 2 {
            let gauge_area = Rect {
                y: inner.y + 1,
                height: 1,
                ..inner
            };
            LineGauge::default()
                .ratio((self.progress / 100.0).clamp(0.0, 1.0))
                .label(Line::styled(
                    format!("{:>3.0}%", self.progress),
                    styles::text_secondary(),
                ))
                .filled_style(styles::accent())
                .unfilled_style(styles::text_muted())
                .render(gauge_area, buf);
        }
    }
}

impl MainHeader<'_> {
    fn render_title_row(&self, area: Rect, buf: &mut Buffer) {
        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled("✚", styles::status_red()),
            Span::raw(" "),
            Span::styled("MedAI", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.section_title.to_string(), styles::text_secondary()),
        ]);
        let left_width = left.width() as u16;

        let right = Line::from(vec![
            Span::styled("[", styles::text_muted()),
            Span::styled("⌘K", styles::keybinding()),
            Span::styled("] ", styles::text_muted()),
            Span::styled(
                self.language.tag().to_uppercase(),
                styles::focused_selected(),
            ),
            Span::raw(" "),
        ]);
        let right_width = right.width() as u16;

        buf.set_line(area.x, area.y, &left, area.width);

        // Right-align the hint and language tag when they fit
        if left_width + right_width + 2 <= area.width {
            let right_x = area.x + area.width - right_width;
            buf.set_line(right_x, area.y, &right, right_width);
        }
    }
}
