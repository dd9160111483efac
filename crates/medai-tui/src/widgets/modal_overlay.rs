//! Shared overlay helpers for the palette, examples dialog and explanation sheet.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// Center a fixed-size rect within an area, clamped to the area
///
/// ```
/// use ratatui::layout::Rect;
/// use medai_tui::widgets::modal_overlay::centered_rect;
///
/// let modal = centered_rect(40, 10, Rect::new(0, 0, 80, 24));
/// assert_eq!(modal, Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width - w) / 2;
    let y = area.y + (area.height - h) / 2;
    Rect::new(x, y, w, h)
}

/// Full-height panel docked to the right edge
pub fn right_sheet(width: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    Rect::new(area.x + area.width - w, area.y, w, area.height)
}

/// Dim every cell in `area` to push the page behind a modal
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim);
            }
        }
    }
}

/// One-cell drop shadow along the right and bottom edges of `rect`
pub fn render_shadow(buf: &mut Buffer, rect: Rect) {
    let shadow = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);
    let right = rect.right();
    let bottom = rect.bottom();

    let edge = (rect.y + 1..=bottom)
        .map(|y| (right, y))
        .chain((rect.x + 1..right).map(|x| (x, bottom)));
    for pos in edge {
        if let Some(cell) = buf.cell_mut(pos) {
            cell.set_char(' ');
            cell.set_style(shadow);
        }
    }
}

/// Dim the screen, drop a shadow and clear `rect` for modal content
pub fn prepare(buf: &mut Buffer, screen: Rect, rect: Rect) {
    dim_background(buf, screen);
    render_shadow(buf, rect);
    Clear.render(rect, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_within_area() {
        let result = centered_rect(40, 10, Rect::new(0, 0, 80, 24));
        assert_eq!(result, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let result = centered_rect(40, 10, Rect::new(0, 0, 30, 8));
        assert_eq!(result, Rect::new(0, 0, 30, 8));
    }

    #[test]
    fn test_centered_rect_with_offset_area() {
        let result = centered_rect(40, 10, Rect::new(10, 5, 80, 24));
        assert_eq!(result, Rect::new(30, 12, 40, 10));
    }

    #[test]
    fn test_right_sheet_docks_right() {
        let sheet = right_sheet(30, Rect::new(0, 0, 80, 24));
        assert_eq!(sheet, Rect::new(50, 0, 30, 24));

        let narrow = right_sheet(30, Rect::new(0, 0, 20, 10));
        assert_eq!(narrow, Rect::new(0, 0, 20, 10));
    }

    #[test]
    fn test_dim_background_only_touches_area() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 10));
        dim_background(&mut buf, Rect::new(5, 3, 10, 5));

        assert_eq!(buf[(5, 3)].bg, palette::DEEPEST_BG);
        assert_eq!(buf[(14, 7)].fg, palette::TEXT_MUTED);
        assert_ne!(buf[(4, 3)].bg, palette::DEEPEST_BG);
        assert_ne!(buf[(15, 8)].bg, palette::DEEPEST_BG);
    }

    #[test]
    fn test_shadow_is_offset_by_one() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 10));
        render_shadow(&mut buf, Rect::new(5, 2, 10, 6));

        // Right edge starts one row down, bottom edge one column right
        assert_eq!(buf[(15, 3)].bg, palette::SHADOW);
        assert_eq!(buf[(6, 8)].bg, palette::SHADOW);
        assert_ne!(buf[(15, 2)].bg, palette::SHADOW);
        assert_ne!(buf[(5, 8)].bg, palette::SHADOW);
    }

    #[test]
    fn test_shadow_off_screen_is_ignored() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 5));
        render_shadow(&mut buf, Rect::new(0, 0, 10, 5));
    }
}
