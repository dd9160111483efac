//! MedAI Playground
//!
//! Terminal playground for a medical literature classifier: a scrollable
//! narrative, a mock classifier with live mode, a command palette and a
//! static evaluation dashboard.

pub mod headless;

// Re-export main entry points
pub use headless::runner::run_headless;
pub use medai_tui::run;
