//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the section indicator column on the right edge
pub const INDICATOR_WIDTH: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header (brand, section title, palette hint, language, progress)
    pub header: Rect,

    /// Stacked document of all sections
    pub document: Rect,

    /// Section indicator dots
    pub indicator: Rect,

    /// Key hints and toasts
    pub footer: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Length(4), // Header: borders + title row + progress row
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    let body =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(INDICATOR_WIDTH)]).split(rows[1]);

    ScreenAreas {
        header: rows[0],
        document: body[0],
        indicator: body[1],
        footer: rows[2],
    }
}
