//! Main TUI runner - entry point and event loop

use medai_app::config::Settings;
use medai_app::{Engine, EngineEvent};
use medai_core::prelude::*;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;

use super::{event, render, terminal};

/// Run the TUI until the user quits or a signal arrives
pub async fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    if let Err(e) = terminal::enable_paste() {
        warn!("Bracketed paste unavailable: {}", e);
    }
    let enhanced = terminal::enable_keyboard_enhancement().unwrap_or_else(|e| {
        warn!("Keyboard enhancement unavailable: {}", e);
        false
    });

    let mut engine = Engine::new(settings);
    let event_log = spawn_event_logger(engine.subscribe());

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown().await;
    drop(engine);
    if let Err(e) = event_log.await {
        debug!("Event logger ended abnormally: {}", e);
    }

    if enhanced {
        if let Err(e) = terminal::disable_keyboard_enhancement() {
            warn!("{}", e);
        }
    }
    if let Err(e) = terminal::disable_paste() {
        warn!("{}", e);
    }
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Timer deliveries, classification results, signals
        engine.drain_pending_messages();

        terminal
            .draw(|frame| render::view(frame, &mut engine.state))
            .map_err(|e| Error::terminal(e.to_string()))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}

/// Mirror engine events into the log file
fn spawn_event_logger(mut events: broadcast::Receiver<EngineEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => debug!("[{}] {:?}", event.event_type(), event),
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Event logger lagged, {} events skipped", skipped)
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}
