//! Section indicator dots on the right edge

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::theme::styles;

/// Vertical dot per section, current one highlighted
pub struct SectionIndicator {
    count: usize,
    current: usize,
}

impl SectionIndicator {
    pub fn new(count: usize, current: usize) -> Self {
        Self { count, current }
    }
}

impl Widget for SectionIndicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || self.count == 0 {
            return;
        }

        // One blank row between dots when there is room
        let step: u16 = if area.height as usize >= self.count * 2 { 2 } else { 1 };
        let span = step * (self.count as u16 - 1) + 1;
        let top = area.y + area.height.saturating_sub(span) / 2;
        let x = area.x + area.width / 2;

        for i in 0..self.count {
            let y = top + step * i as u16;
            if y >= area.y + area.height {
                break;
            }
            let (dot, style) = if i == self.current {
                ("●", styles::accent_bold())
            } else {
                ("○", styles::text_muted())
            };
            buf.set_string(x, y, dot, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_one_dot_per_section() {
        let mut term = TestTerminal::with_size(3, 20);
        term.render_widget(SectionIndicator::new(6, 2), term.area());

        let content = term.content();
        assert_eq!(content.matches('●').count(), 1);
        assert_eq!(content.matches('○').count(), 5);
    }

    #[test]
    fn test_current_dot_position() {
        let mut term = TestTerminal::with_size(3, 12);
        term.render_widget(SectionIndicator::new(6, 0), term.area());

        // 6 dots at step 2 span 11 rows starting at row 0
        assert_eq!(term.cell_at(1, 0), Some("●"));
        assert_eq!(term.cell_at(1, 2), Some("○"));
    }

    #[test]
    fn test_compact_height_packs_dots() {
        let mut term = TestTerminal::with_size(3, 6);
        term.render_widget(SectionIndicator::new(6, 5), term.area());
        assert_eq!(term.cell_at(1, 5), Some("●"));
    }
}
