//! Semantic style builders.

use medai_app::ToastKind;
use medai_core::CellKind;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bright() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// Key in a `[k] label` hint
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// Affordance that cannot be used right now
pub fn disabled() -> Style {
    Style::default()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::DIM)
}

/// "Black on accent" - used for focused+selected items across widgets
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Domain mappings ---

/// Confusion matrix cell style; the cursor cell is always reversed
pub fn matrix_cell(kind: CellKind, selected: bool) -> Style {
    let base = match kind {
        CellKind::Correct => Style::default()
            .fg(palette::TEXT_BRIGHT)
            .bg(palette::MATRIX_CORRECT_BG)
            .add_modifier(Modifier::BOLD),
        CellKind::Misclassified => Style::default()
            .fg(palette::TEXT_PRIMARY)
            .bg(palette::MATRIX_MISS_BG),
        CellKind::Empty => text_muted(),
    };
    if selected {
        base.add_modifier(Modifier::REVERSED)
    } else {
        base
    }
}

pub fn toast(kind: ToastKind) -> Style {
    match kind {
        ToastKind::Info => status_green().add_modifier(Modifier::BOLD),
        ToastKind::Error => status_red().add_modifier(Modifier::BOLD),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_switches_block_border() {
        let focused = glass_block(true);
        let unfocused = glass_block(false);
        assert_ne!(focused, unfocused);
    }

    #[test]
    fn test_empty_matrix_cells_are_muted() {
        assert_eq!(matrix_cell(CellKind::Empty, false).fg, Some(palette::TEXT_MUTED));
    }

    #[test]
    fn test_matrix_cell_selection_reverses() {
        let plain = matrix_cell(CellKind::Correct, false);
        let selected = matrix_cell(CellKind::Correct, true);
        assert!(!plain.add_modifier.contains(Modifier::REVERSED));
        assert!(selected.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_matrix_diagonal_differs_from_misses() {
        assert_ne!(
            matrix_cell(CellKind::Correct, false).bg,
            matrix_cell(CellKind::Misclassified, false).bg
        );
    }

    #[test]
    fn test_toast_styles_follow_kind() {
        assert_eq!(toast(ToastKind::Info).fg, Some(palette::STATUS_GREEN));
        assert_eq!(toast(ToastKind::Error).fg, Some(palette::STATUS_RED));
    }
}
