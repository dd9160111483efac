//! Headless mode - one classification, NDJSON on stdout
//!
//! Every engine event is written as one JSON object per line with a
//! millisecond `timestamp` added. Two records are specific to this mode:
//!
//! ```json
//! {"event":"predictions","language":"es","predictions":[...],"timestamp":1704700001000}
//! {"event":"error","message":"invalid input: input text is empty","fatal":true,"timestamp":1704700001000}
//! ```

pub mod runner;

use std::io::Write;

use chrono::Utc;
use medai_app::EngineEvent;
use medai_core::prelude::*;
use medai_core::{Language, Prediction};
use serde::Serialize;

/// Records produced by the headless runner itself
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Final ranking of a settled classification
    Predictions {
        language: Language,
        predictions: Vec<Prediction>,
        timestamp: i64,
    },

    /// The run could not proceed
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    pub fn predictions(language: Language, predictions: &[Prediction]) -> Self {
        Self::Predictions {
            language,
            predictions: predictions.to_vec(),
            timestamp: now(),
        }
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: now(),
        }
    }

    pub fn emit_to<W: Write>(&self, out: &mut W) {
        write_line(out, self);
    }
}

/// An engine event stamped with the time it was forwarded
#[derive(Debug, Serialize)]
struct StampedEvent<'a> {
    #[serde(flatten)]
    event: &'a EngineEvent,
    timestamp: i64,
}

/// Write an engine event as one JSON line
pub fn emit_engine_event<W: Write>(out: &mut W, event: &EngineEvent) {
    write_line(
        out,
        &StampedEvent {
            event,
            timestamp: now(),
        },
    );
}

fn to_json<T: Serialize>(record: &T) -> Result<String> {
    Ok(serde_json::to_string(record)?)
}

fn write_line<W: Write, T: Serialize>(out: &mut W, record: &T) {
    let json = match to_json(record) {
        Ok(json) => json,
        Err(e) => {
            error!("Failed to serialize headless record: {}", e);
            return;
        }
    };

    if let Err(e) = writeln!(out, "{}", json) {
        error!("Failed to write headless record: {}", e);
        return;
    }

    if let Err(e) = out.flush() {
        error!("Failed to flush headless output: {}", e);
    }
}

/// Current timestamp in milliseconds
fn now() -> i64 {
    Utc::now().timestamp_millis()
}
