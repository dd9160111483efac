//! Configuration types for the MedAI playground
//!
//! Defines:
//! - `Settings` - Global application settings
//! - Per-section sub-types with serde defaults

use medai_core::Language;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Global settings from `.medai/config.toml`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub playground: PlaygroundSettings,

    #[serde(default)]
    pub classifier: ClassifierSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Behavior settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Interface language at startup
    #[serde(default)]
    pub language: Language,

    /// Start with live classification enabled
    #[serde(default)]
    pub live_mode: bool,
}

/// Playground timing and thresholds
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaygroundSettings {
    /// Quiescence period before a live classification fires
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Live mode only arms when the input is strictly longer than this
    #[serde(default = "default_live_min_chars")]
    pub live_min_chars: usize,

    /// Artificial latency of the mock classifier
    #[serde(default = "default_classify_latency_ms")]
    pub classify_latency_ms: u64,

    /// Number of predictions kept after ranking
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

impl Default for PlaygroundSettings {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            live_min_chars: default_live_min_chars(),
            classify_latency_ms: default_classify_latency_ms(),
            top_k: default_top_k(),
        }
    }
}

impl PlaygroundSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn classify_latency(&self) -> Duration {
        Duration::from_millis(self.classify_latency_ms)
    }
}

/// Mock classifier settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClassifierSettings {
    /// Fixed RNG seed for reproducible scores; entropy-seeded when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// How many ticks a toast stays visible
    #[serde(default = "default_toast_ticks")]
    pub toast_ticks: u32,

    /// Ease the viewport toward a requested section instead of jumping
    #[serde(default = "default_true")]
    pub smooth_scroll: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            toast_ticks: default_toast_ticks(),
            smooth_scroll: true,
        }
    }
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_live_min_chars() -> usize {
    50
}

fn default_classify_latency_ms() -> u64 {
    1200
}

fn default_top_k() -> usize {
    3
}

fn default_toast_ticks() -> u32 {
    60
}

fn default_true() -> bool {
    true
}
