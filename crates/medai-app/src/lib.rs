//! medai-app - Interaction state and orchestration for the MedAI playground
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! interaction core: section navigation, the playground controller with its
//! live-mode debounce and request token, the command palette, and the
//! Engine that runs background work. It has no terminal dependency.

pub mod actions;
pub mod classifier;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod fuzzy;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod palette;
pub mod playground;
pub mod process;
pub mod sections;
pub mod signals;
pub mod state;

// Re-export primary types
pub use classifier::{Classifier, LocalClassifier, MockClassifier};
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use palette::{PaletteCommand, PaletteEntry, PaletteGroup};
pub use playground::{RequestId, TriggerRejection, TriggerSource};
pub use sections::{DocumentViewState, SectionRegistry};
pub use state::{AppPhase, AppState, InteractionSnapshot, Toast, ToastKind, UiMode};
