//! Configuration file parsing for the MedAI playground
//!
//! Supports:
//! - `.medai/config.toml` - Global settings

pub mod settings;
pub mod types;

pub use settings::{
    config_path_for, init_config_dir, init_config_file, load_settings, load_settings_from,
    CONFIG_FILENAME, MEDAI_DIR,
};
pub use types::*;
