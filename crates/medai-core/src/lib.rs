//! # medai-core - Core Domain Types
//!
//! Foundation crate for the MedAI playground. Provides domain types, static
//! reference data, localized copy, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Section`], [`SECTIONS`] - Ordered narrative panels
//! - [`Category`] - The seven medical literature labels
//! - [`Prediction`] - One ranked classifier output
//! - [`Language`] - Interface language (`es` primary, `en` secondary)
//!
//! ### Reference Data (`reference`)
//! - [`METRICS`], [`CONFUSION_MATRIX`] - Static evaluation snapshot
//! - [`SAMPLE_ABSTRACTS`] - Demo inputs for the playground
//! - [`ModelKind`] - Baseline vs transformer comparison tabs
//!
//! ### Localization (`locale`)
//! - [`copy()`] - Typed string table for a language
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`ClassificationError`] - Failure kinds a classifier backend may report
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use medai_core::prelude::*;
//! ```

pub mod error;
pub mod locale;
pub mod logging;
pub mod reference;
pub mod text;
pub mod types;

/// Prelude for common imports used throughout all MedAI crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{ClassificationError, Error, Result, ResultExt};
pub use locale::{copy, Texts};
pub use reference::{
    BaselineMetrics, CellKind, ConfusionMatrix, MetricsSnapshot, ModelKind, CONFUSION_MATRIX,
    EXPLANATION_KEYWORDS, METRICS, SAMPLE_ABSTRACTS,
};
pub use text::{char_len, normalize_text};
pub use types::{Category, Language, Prediction, Section, SECTIONS};
