//! Main render/view function (View in TEA pattern)


use medai_app::{AppState, UiMode};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Pure apart from the document viewport, which records the measured
/// section heights so scroll targets match the screen.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    let section_title = state
        .sections()
        .get(state.current_section())
        .map(|s| s.title)
        .unwrap_or_default();
    frame.render_widget(
        widgets::MainHeader::new(section_title, state.language(), state.progress_percent()),
        areas.header,
    );

    let document = widgets::Document::new(widgets::sections::build(state, areas.document.width));
    frame.render_stateful_widget(document, areas.document, &mut state.document_view);

    frame.render_widget(
        widgets::SectionIndicator::new(state.sections().len(), state.current_section()),
        areas.indicator,
    );

    frame.render_widget(
        widgets::Footer::new(state.ui_mode, state.language()).toast(state.toast.as_ref()),
        areas.footer,
    );

    // Overlays for modal UI modes
    match state.ui_mode {
        UiMode::Palette => {
            let entries = state.palette_entries();
            frame.render_widget(
                widgets::CommandPalette::new(
                    &state.palette.query,
                    &entries,
                    state.palette.selected,
                    state.language(),
                ),
                area,
            );
        }
        UiMode::Examples => {
            frame.render_widget(
                widgets::ExamplesDialog::new(state.examples_selected, state.language()),
                area,
            );
        }
        UiMode::Explanation => {
            if let Some(prediction) = state.explained_prediction() {
                frame.render_widget(
                    widgets::ExplanationSheet::new(
                        prediction,
                        state.explanation_index,
                        state.predictions().len(),
                        state.language(),
                    ),
                    area,
                );
            }
        }
        UiMode::Browse | UiMode::Editing => {}
    }
}
