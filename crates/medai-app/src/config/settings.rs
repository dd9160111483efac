//! Settings parser for .medai/config.toml

use super::types::Settings;
use medai_core::prelude::*;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.toml";
pub const MEDAI_DIR: &str = ".medai";

const DEFAULT_CONFIG: &str = r#"# MedAI Playground Configuration

[behavior]
language = "es"         # "es" or "en"
live_mode = false       # Classify automatically while typing

[playground]
debounce_ms = 500           # Quiet period before a live classification
live_min_chars = 50         # Live mode needs more characters than this
classify_latency_ms = 1200  # Artificial classifier latency
top_k = 3                   # Predictions shown per run

[classifier]
# seed = 42             # Fix the RNG for reproducible scores

[ui]
toast_ticks = 60        # Toast lifetime in ticks (50ms each)
smooth_scroll = true    # Ease toward the requested section
"#;

/// Path of the config file inside a project directory
pub fn config_path_for(project_path: &Path) -> PathBuf {
    project_path.join(MEDAI_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `.medai/config.toml` under `project_path`
pub fn load_settings(project_path: &Path) -> Settings {
    load_settings_from(&config_path_for(project_path))
}

/// Load settings from an explicit file
///
/// Missing, unreadable or invalid files fall back to defaults.
pub fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create `.medai/config.toml` with commented defaults under `project_path`
pub fn init_config_dir(project_path: &Path) -> Result<PathBuf> {
    let config_path = config_path_for(project_path);
    init_config_file(&config_path)?;
    Ok(config_path)
}

/// Write the commented default config to `config_path` unless it exists
///
/// Returns `true` when a new file was written.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::config(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }
    }

    if config_path.exists() {
        debug!("Config already present at {:?}", config_path);
        return Ok(false);
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
    info!("Wrote default config to {:?}", config_path);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use medai_core::Language;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());

        assert_eq!(settings.behavior.language, Language::Es);
        assert!(!settings.behavior.live_mode);
        assert_eq!(settings.playground.debounce_ms, 500);
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let medai_dir = temp.path().join(".medai");
        std::fs::create_dir_all(&medai_dir).unwrap();

        let config = r#"
[behavior]
language = "en"
live_mode = true

[classifier]
seed = 7
"#;
        std::fs::write(medai_dir.join("config.toml"), config).unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings.behavior.language, Language::En);
        assert!(settings.behavior.live_mode);
        assert_eq!(settings.classifier.seed, Some(7));
        assert_eq!(settings.playground.classify_latency_ms, 1200);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("broken.toml");
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        let settings = load_settings_from(&path);
        assert_eq!(settings.playground.top_k, 3);
    }

    #[test]
    fn test_load_settings_unknown_language_falls_back() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[behavior]\nlanguage = \"fr\"\n").unwrap();

        let settings = load_settings_from(&path);
        assert_eq!(settings.behavior.language, Language::Es);
    }

    #[test]
    fn test_init_config_dir() {
        let temp = tempdir().unwrap();

        let path = init_config_dir(temp.path()).unwrap();

        assert!(temp.path().join(".medai").exists());
        assert_eq!(path, temp.path().join(".medai/config.toml"));

        let content = std::fs::read_to_string(&path).unwrap();
        let settings: Settings =
            toml::from_str(&content).expect("Default config should be valid TOML");
        assert_eq!(settings.playground.debounce_ms, 500);
        assert!(settings.classifier.seed.is_none());
    }

    #[test]
    fn test_init_config_file_idempotent() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested/dir/config.toml");

        assert!(init_config_file(&path).unwrap());
        std::fs::write(&path, "[ui]\ntoast_ticks = 5\n").unwrap();
        assert!(!init_config_file(&path).unwrap());

        let settings = load_settings_from(&path);
        assert_eq!(settings.ui.toast_ticks, 5);
    }
}
