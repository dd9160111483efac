//! Command palette: command catalogue, filtering and selection state

use medai_core::{copy, Language};

use crate::fuzzy::fuzzy_filter;
use crate::message::Message;
use crate::sections::SectionRegistry;

/// Palette group, rendered as a heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteGroup {
    Navigation,
    Actions,
}

impl PaletteGroup {
    pub fn heading(&self, language: Language) -> &'static str {
        let texts = &copy(language).palette;
        match self {
            PaletteGroup::Navigation => texts.navigation,
            PaletteGroup::Actions => texts.actions,
        }
    }
}

/// What selecting a palette entry does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteCommand {
    Goto(usize),
    PasteExample,
    ToggleLive,
    Classify,
    SwitchLanguage,
}

impl PaletteCommand {
    pub fn group(&self) -> PaletteGroup {
        match self {
            PaletteCommand::Goto(_) => PaletteGroup::Navigation,
            _ => PaletteGroup::Actions,
        }
    }

    /// The message this command dispatches once the palette has closed
    pub fn message(&self) -> Message {
        match *self {
            PaletteCommand::Goto(index) => Message::GotoSection(index),
            PaletteCommand::PasteExample => Message::LoadSample(0),
            PaletteCommand::ToggleLive => Message::ToggleLiveMode,
            PaletteCommand::Classify => Message::TriggerClassify,
            PaletteCommand::SwitchLanguage => Message::ToggleLanguage,
        }
    }
}

/// One visible palette row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    pub command: PaletteCommand,
    pub label: &'static str,
}

/// Full catalogue in display order
///
/// Navigation labels are the fixed section titles; action labels follow the
/// interface language, and the live-mode entry names what it will do.
pub fn catalogue(
    sections: &SectionRegistry,
    language: Language,
    live_mode: bool,
) -> Vec<PaletteEntry> {
    let texts = &copy(language).palette;

    let mut entries: Vec<PaletteEntry> = sections
        .iter()
        .enumerate()
        .map(|(index, section)| PaletteEntry {
            command: PaletteCommand::Goto(index),
            label: section.title,
        })
        .collect();

    entries.push(PaletteEntry {
        command: PaletteCommand::PasteExample,
        label: texts.paste_example,
    });
    entries.push(PaletteEntry {
        command: PaletteCommand::ToggleLive,
        label: if live_mode {
            texts.disable_live
        } else {
            texts.enable_live
        },
    });
    entries.push(PaletteEntry {
        command: PaletteCommand::Classify,
        label: texts.classify_now,
    });
    entries.push(PaletteEntry {
        command: PaletteCommand::SwitchLanguage,
        label: texts.switch_language,
    });

    entries
}

/// Filter entries by query, keeping group order and ranking within a group
pub fn filter_entries(entries: &[PaletteEntry], query: &str) -> Vec<PaletteEntry> {
    [PaletteGroup::Navigation, PaletteGroup::Actions]
        .into_iter()
        .flat_map(|group| {
            let in_group: Vec<&PaletteEntry> = entries
                .iter()
                .filter(|e| e.command.group() == group)
                .collect();
            let labels: Vec<&str> = in_group.iter().map(|e| e.label).collect();
            fuzzy_filter(query, &labels)
                .into_iter()
                .map(|i| in_group[i].clone())
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Query and cursor of the open palette
#[derive(Debug, Clone, Default)]
pub struct PaletteState {
    pub query: String,
    pub selected: usize,
}

impl PaletteState {
    pub fn reset(&mut self) {
        self.query.clear();
        self.selected = 0;
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.selected = 0;
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
        self.selected = 0;
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.selected = 0;
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self, visible: usize) {
        if visible > 0 {
            self.selected = (self.selected + 1).min(visible - 1);
        }
    }

    /// Selected entry among `visible`, clamping a stale cursor
    pub fn selected_entry<'a>(&self, visible: &'a [PaletteEntry]) -> Option<&'a PaletteEntry> {
        if visible.is_empty() {
            None
        } else {
            visible.get(self.selected.min(visible.len() - 1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(entries: &[PaletteEntry]) -> Vec<&'static str> {
        entries.iter().map(|e| e.label).collect()
    }

    #[test]
    fn test_catalogue_groups_in_order() {
        let entries = catalogue(&SectionRegistry::default(), Language::Es, false);
        assert_eq!(entries.len(), 10);
        assert!(entries[..6]
            .iter()
            .all(|e| e.command.group() == PaletteGroup::Navigation));
        assert!(entries[6..]
            .iter()
            .all(|e| e.command.group() == PaletteGroup::Actions));
        assert_eq!(entries[6].label, "Pegar ejemplo de demo");
    }

    #[test]
    fn test_live_label_reflects_state() {
        let off = catalogue(&SectionRegistry::default(), Language::Es, false);
        let on = catalogue(&SectionRegistry::default(), Language::Es, true);
        assert_eq!(off[7].label, "Activar modo tiempo real");
        assert_eq!(on[7].label, "Desactivar modo tiempo real");
    }

    #[test]
    fn test_filter_play_yields_only_playground() {
        for language in [Language::Es, Language::En] {
            for live in [false, true] {
                let entries = catalogue(&SectionRegistry::default(), language, live);
                let visible = filter_entries(&entries, "play");
                assert_eq!(labels(&visible), vec!["Playground"]);
                assert_eq!(visible[0].command, PaletteCommand::Goto(3));
            }
        }
    }

    #[test]
    fn test_filter_zzz_is_empty() {
        let entries = catalogue(&SectionRegistry::default(), Language::Es, false);
        assert!(filter_entries(&entries, "zzz").is_empty());
    }

    #[test]
    fn test_filter_keeps_group_order() {
        let entries = catalogue(&SectionRegistry::default(), Language::En, false);
        // "e" hits both groups; navigation rows must all come first
        let visible = filter_entries(&entries, "e");
        let first_action = visible
            .iter()
            .position(|e| e.command.group() == PaletteGroup::Actions)
            .unwrap();
        assert!(visible[first_action..]
            .iter()
            .all(|e| e.command.group() == PaletteGroup::Actions));
        assert!(first_action > 0);
    }

    #[test]
    fn test_empty_query_shows_everything() {
        let entries = catalogue(&SectionRegistry::default(), Language::Es, false);
        assert_eq!(filter_entries(&entries, ""), entries);
    }

    #[test]
    fn test_selection_clamps() {
        let entries = catalogue(&SectionRegistry::default(), Language::Es, false);
        let mut state = PaletteState::default();
        state.select_previous();
        assert_eq!(state.selected, 0);
        for _ in 0..20 {
            state.select_next(entries.len());
        }
        assert_eq!(state.selected, entries.len() - 1);

        let narrowed = filter_entries(&entries, "inicio");
        assert_eq!(
            state.selected_entry(&narrowed).map(|e| e.label),
            Some("Inicio")
        );
    }

    #[test]
    fn test_query_edit_resets_selection() {
        let mut state = PaletteState {
            query: "pl".into(),
            selected: 3,
        };
        state.push_char('a');
        assert_eq!(state.query, "pla");
        assert_eq!(state.selected, 0);
        state.pop_char();
        assert_eq!(state.query, "pl");
        state.clear_query();
        assert!(state.query.is_empty());
    }

    #[test]
    fn test_command_messages() {
        assert!(matches!(
            PaletteCommand::Goto(2).message(),
            Message::GotoSection(2)
        ));
        assert!(matches!(
            PaletteCommand::PasteExample.message(),
            Message::LoadSample(0)
        ));
    }
}
