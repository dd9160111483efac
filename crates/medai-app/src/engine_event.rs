//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The TUI runner and the headless JSON printer are
//! the two subscribers.

use medai_core::Language;
use serde::Serialize;

use crate::playground::{RequestId, TriggerSource};

/// Domain events emitted by the Engine for external consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// A section should be scrolled into view
    ScrollRequested { index: usize },

    /// The current section changed
    SectionChanged { from: usize, to: usize },

    // ─────────────────────────────────────────────────────────
    // Palette
    // ─────────────────────────────────────────────────────────
    PaletteOpened,
    PaletteClosed,

    // ─────────────────────────────────────────────────────────
    // Classification
    // ─────────────────────────────────────────────────────────
    ClassificationStarted {
        request_id: RequestId,
        trigger: TriggerSource,
    },

    ClassificationCompleted { request_id: RequestId, count: usize },

    ClassificationFailed { request_id: RequestId, reason: String },

    // ─────────────────────────────────────────────────────────
    // Preferences
    // ─────────────────────────────────────────────────────────
    LanguageChanged { language: Language },

    LiveModeChanged { enabled: bool },

    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Short label for logging and filtering
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ScrollRequested { .. } => "scroll_requested",
            Self::SectionChanged { .. } => "section_changed",
            Self::PaletteOpened => "palette_opened",
            Self::PaletteClosed => "palette_closed",
            Self::ClassificationStarted { .. } => "classification_started",
            Self::ClassificationCompleted { .. } => "classification_completed",
            Self::ClassificationFailed { .. } => "classification_failed",
            Self::LanguageChanged { .. } => "language_changed",
            Self::LiveModeChanged { .. } => "live_mode_changed",
            Self::Shutdown => "shutdown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_event_type_labels() {
        assert_eq!(EngineEvent::Shutdown.event_type(), "shutdown");
        assert_eq!(
            EngineEvent::ScrollRequested { index: 3 }.event_type(),
            "scroll_requested"
        );
    }

    #[test]
    fn test_engine_event_serializes_tagged() {
        let event = EngineEvent::ClassificationStarted {
            request_id: RequestId(4),
            trigger: TriggerSource::Live,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "classification_started");
        assert_eq!(json["request_id"], 4);
        assert_eq!(json["trigger"], "live");
    }

    #[test]
    fn test_serialized_tag_matches_event_type() {
        let events = vec![
            EngineEvent::ScrollRequested { index: 1 },
            EngineEvent::SectionChanged { from: 0, to: 1 },
            EngineEvent::PaletteOpened,
            EngineEvent::PaletteClosed,
            EngineEvent::ClassificationCompleted {
                request_id: RequestId(1),
                count: 3,
            },
            EngineEvent::ClassificationFailed {
                request_id: RequestId(2),
                reason: "timeout".into(),
            },
            EngineEvent::LanguageChanged {
                language: Language::En,
            },
            EngineEvent::LiveModeChanged { enabled: true },
            EngineEvent::Shutdown,
        ];
        for event in events {
            let json = serde_json::to_value(&event).unwrap();
            assert_eq!(json["event"], event.event_type());
        }
    }
}
