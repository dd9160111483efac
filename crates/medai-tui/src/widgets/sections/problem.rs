use medai_app::sections::well_known;
use medai_app::AppState;
use medai_core::copy;
use ratatui::text::Line;

use super::{bullet, heading};
use crate::theme::styles;

pub(super) fn lines(state: &AppState, width: usize, focused: bool) -> Vec<Line<'static>> {
    let texts = &copy(state.language()).problem;

    let mut lines = heading(well_known::PROBLEM + 1, texts.title, focused);
    for point in texts.points {
        lines.extend(bullet("▸", point, width, styles::text_primary()));
    }
    lines
}
