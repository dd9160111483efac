//! Headless mode runner - drives a single classification without the TUI

use std::io::{self, Write};

use medai_app::config::Settings;
use medai_app::sections::well_known;
use medai_app::{Engine, EngineEvent, Message};
use medai_core::prelude::*;
use medai_core::ClassificationError;
use tokio::sync::broadcast::{self, error::TryRecvError};

use super::{emit_engine_event, HeadlessEvent};

/// Classify `text` once and print the engine events to stdout
pub async fn run_headless(settings: Settings, text: String) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("MedAI starting in HEADLESS mode");
    info!("Input: {} chars", text.chars().count());
    info!("═══════════════════════════════════════════════════════");

    let mut engine = Engine::new(settings);
    let mut stdout = io::stdout();
    let result = classify_once(&mut engine, text, &mut stdout).await;

    info!("MedAI headless mode exiting");
    result
}

/// Submit `text` the way the playground would and wait until it settles
///
/// In live mode with a long enough text the debounce timer starts the
/// request; otherwise a manual trigger is sent. A rejected trigger is
/// reported as a fatal `error` record and returned as an invalid-input error.
pub async fn classify_once<W: Write>(
    engine: &mut Engine,
    text: String,
    out: &mut W,
) -> Result<()> {
    let mut events = engine.subscribe();

    engine.process_message(Message::GotoSection(well_known::PLAYGROUND));
    engine.process_message(Message::SetInputText(text));
    if !engine.state.playground().debounce_armed() {
        if let Err(rejection) = engine.state.playground().can_trigger() {
            let err: Error = ClassificationError::InvalidInput {
                reason: rejection.to_string(),
            }
            .into();
            forward_events(&mut events, out);
            HeadlessEvent::error(err.to_string(), true).emit_to(out);
            engine.shutdown().await;
            forward_events(&mut events, out);
            return Err(err);
        }
        engine.process_message(Message::TriggerClassify);
    }
    forward_events(&mut events, out);

    let mut outcome = Ok(());
    while !engine.should_quit() && is_busy(engine) {
        if !engine.process_next().await {
            warn!("Message channel closed before classification settled");
            let err = Error::ChannelClosed;
            HeadlessEvent::error(err.to_string(), err.is_fatal()).emit_to(out);
            outcome = Err(err);
            break;
        }
        forward_events(&mut events, out);
    }

    let predictions = engine.state.predictions();
    if !predictions.is_empty() {
        HeadlessEvent::predictions(engine.state.language(), predictions).emit_to(out);
    }

    engine.shutdown().await;
    forward_events(&mut events, out);
    outcome
}

fn is_busy(engine: &Engine) -> bool {
    engine.state.is_classifying() || engine.state.playground().debounce_armed()
}

fn forward_events<W: Write>(events: &mut broadcast::Receiver<EngineEvent>, out: &mut W) {
    loop {
        match events.try_recv() {
            Ok(event) => emit_engine_event(out, &event),
            Err(TryRecvError::Lagged(n)) => warn!("Headless output skipped {} events", n),
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
        }
    }
}
