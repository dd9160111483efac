//! MedAI - terminal playground for a medical literature classifier
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use medai_app::config::{self, Settings};
use medai_core::prelude::*;
use medai_core::Language;

/// MedAI - medical literature classifier playground
#[derive(Parser, Debug)]
#[command(name = "medai")]
#[command(about = "Terminal playground for a medical literature classifier", long_about = None)]
struct Args {
    /// Interface language
    #[arg(long, value_name = "es|en")]
    lang: Option<Language>,

    /// Start with live mode enabled
    #[arg(long)]
    live: bool,

    /// Seed for reproducible classifier scores
    #[arg(long, value_name = "U64")]
    seed: Option<u64>,

    /// Path to the config file
    #[arg(long, value_name = "PATH", default_value = "./.medai/config.toml")]
    config: PathBuf,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Run in headless mode (JSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Text to classify in headless mode (read from stdin when omitted)
    #[arg(long, requires = "headless")]
    text: Option<String>,
}

impl Args {
    /// Apply command-line overrides on top of file settings
    fn apply(&self, settings: &mut Settings) {
        if let Some(language) = self.lang {
            settings.behavior.language = language;
        }
        if self.live {
            settings.behavior.live_mode = true;
        }
        if let Some(seed) = self.seed {
            settings.classifier.seed = Some(seed);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.init_config {
        if config::init_config_file(&args.config)? {
            println!("Wrote default config to {}", args.config.display());
        } else {
            eprintln!("Config already exists at {}", args.config.display());
        }
        return Ok(());
    }

    medai_core::logging::init()?;
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    let mut settings = config::load_settings_from(&args.config);
    args.apply(&mut settings);

    if args.headless {
        let text = match args.text {
            Some(text) => text,
            None => read_stdin()?,
        };
        medai::run_headless(settings, text).await
    } else {
        medai::run(settings).await
    }
}

fn read_stdin() -> Result<String> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("Reading abstract from stdin (end with Ctrl+D)...");
    }
    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .context("Failed to read abstract from stdin")?;
    Ok(text.trim_end().to_string())
}
