//! Playground controller state
//!
//! Owns the input text, live-mode flag and prediction results, plus the two
//! tokens that keep asynchronous work honest:
//! - [`DebounceTimer`]: a generation counter; only the most recently armed
//!   timer may fire.
//! - [`RequestSlot`]: the single in-flight classification; only the current
//!   request may publish results.

use chrono::{DateTime, Local};
use medai_core::{char_len, ClassificationError, Prediction};
use serde::Serialize;

/// Identifier of one classification run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RequestId(pub u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What started a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerSource {
    Manual,
    Live,
}

/// Why a manual trigger was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TriggerRejection {
    #[error("input text is empty")]
    EmptyInput,
    #[error("a classification is already in flight")]
    AlreadyClassifying,
}

// ─────────────────────────────────────────────────────────────────────────────
// Debounce
// ─────────────────────────────────────────────────────────────────────────────

/// Generation token for the single pending live-mode timer
#[derive(Debug, Clone, Default)]
pub struct DebounceTimer {
    generation: u64,
    armed: bool,
}

impl DebounceTimer {
    /// Arm a new timer, invalidating any previous one
    pub fn arm(&mut self) -> u64 {
        self.generation += 1;
        self.armed = true;
        self.generation
    }

    /// Invalidate the pending timer, if any
    pub fn cancel(&mut self) {
        if self.armed {
            self.generation += 1;
            self.armed = false;
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Consume a timer delivery; true only for the latest armed generation
    pub fn fire(&mut self, generation: u64) -> bool {
        if self.armed && generation == self.generation {
            self.armed = false;
            true
        } else {
            false
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Request slot
// ─────────────────────────────────────────────────────────────────────────────

/// Single-slot record of the latest in-flight classification
#[derive(Debug, Clone, Default)]
pub struct RequestSlot {
    next_id: u64,
    in_flight: Option<(RequestId, TriggerSource)>,
}

impl RequestSlot {
    /// Start a request, superseding any in-flight one
    ///
    /// Returns the new id and the id it replaced.
    pub fn begin(&mut self, source: TriggerSource) -> (RequestId, Option<RequestId>) {
        self.next_id += 1;
        let id = RequestId(self.next_id);
        let superseded = self.in_flight.replace((id, source)).map(|(old, _)| old);
        (id, superseded)
    }

    /// Settle a request; false (and no change) if `id` is not current
    pub fn complete(&mut self, id: RequestId) -> bool {
        match self.in_flight {
            Some((current, _)) if current == id => {
                self.in_flight = None;
                true
            }
            _ => false,
        }
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight.map(|(id, _)| id)
    }

    pub fn in_flight_source(&self) -> Option<TriggerSource> {
        self.in_flight.map(|(_, source)| source)
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Forget the in-flight request without publishing anything
    pub fn clear(&mut self) {
        self.in_flight = None;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Playground state
// ─────────────────────────────────────────────────────────────────────────────

/// How the last settled request ended
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Completed { count: usize },
    Failed { reason: String },
}

/// Last request that settled, kept for change detection and the status line
#[derive(Debug, Clone, PartialEq)]
pub struct SettledRequest {
    pub request_id: RequestId,
    pub outcome: Outcome,
    pub at: DateTime<Local>,
}

#[derive(Debug, Clone, Default)]
pub struct PlaygroundState {
    pub(crate) input_text: String,
    pub(crate) live_mode: bool,
    pub(crate) predictions: Vec<Prediction>,
    pub(crate) debounce: DebounceTimer,
    pub(crate) requests: RequestSlot,
    pub(crate) last_settled: Option<SettledRequest>,
}

impl PlaygroundState {
    pub fn new(live_mode: bool) -> Self {
        Self {
            live_mode,
            ..Default::default()
        }
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn live_mode(&self) -> bool {
        self.live_mode
    }

    pub fn predictions(&self) -> &[Prediction] {
        &self.predictions
    }

    pub fn is_classifying(&self) -> bool {
        self.requests.is_busy()
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.requests.in_flight()
    }

    pub fn in_flight_source(&self) -> Option<TriggerSource> {
        self.requests.in_flight_source()
    }

    pub fn last_settled(&self) -> Option<&SettledRequest> {
        self.last_settled.as_ref()
    }

    pub fn debounce_armed(&self) -> bool {
        self.debounce.is_armed()
    }

    /// Check whether a manual trigger may start now
    pub fn can_trigger(&self) -> Result<(), TriggerRejection> {
        if self.input_text.is_empty() {
            Err(TriggerRejection::EmptyInput)
        } else if self.requests.is_busy() {
            Err(TriggerRejection::AlreadyClassifying)
        } else {
            Ok(())
        }
    }

    /// Whether the current text qualifies for a live classification
    pub fn live_eligible(&self, min_chars: usize) -> bool {
        self.live_mode && char_len(&self.input_text) > min_chars
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.input_text = text;
    }

    /// Publish a current request's predictions
    pub(crate) fn settle_ok(&mut self, request_id: RequestId, predictions: Vec<Prediction>) {
        let count = predictions.len();
        self.predictions = predictions;
        self.last_settled = Some(SettledRequest {
            request_id,
            outcome: Outcome::Completed { count },
            at: Local::now(),
        });
    }

    /// Record a current request's failure; prior predictions stay visible
    pub(crate) fn settle_err(&mut self, request_id: RequestId, error: &ClassificationError) {
        self.last_settled = Some(SettledRequest {
            request_id,
            outcome: Outcome::Failed {
                reason: error.to_string(),
            },
            at: Local::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medai_core::Category;

    #[test]
    fn test_debounce_latest_generation_wins() {
        let mut timer = DebounceTimer::default();
        let first = timer.arm();
        let second = timer.arm();
        assert!(!timer.fire(first));
        assert!(timer.fire(second));
        assert!(!timer.fire(second), "a timer fires at most once");
    }

    #[test]
    fn test_debounce_cancel_invalidates() {
        let mut timer = DebounceTimer::default();
        let generation = timer.arm();
        timer.cancel();
        assert!(!timer.is_armed());
        assert!(!timer.fire(generation));
    }

    #[test]
    fn test_request_slot_supersede() {
        let mut slot = RequestSlot::default();
        let (first, replaced) = slot.begin(TriggerSource::Manual);
        assert!(replaced.is_none());
        let (second, replaced) = slot.begin(TriggerSource::Live);
        assert_eq!(replaced, Some(first));
        assert_eq!(slot.in_flight_source(), Some(TriggerSource::Live));

        assert!(!slot.complete(first), "stale completion must be ignored");
        assert!(slot.is_busy());
        assert!(slot.complete(second));
        assert!(!slot.is_busy());
    }

    #[test]
    fn test_can_trigger() {
        let mut playground = PlaygroundState::default();
        assert_eq!(playground.can_trigger(), Err(TriggerRejection::EmptyInput));

        playground.set_text("abc".into());
        assert_eq!(playground.can_trigger(), Ok(()));

        playground.requests.begin(TriggerSource::Manual);
        assert_eq!(
            playground.can_trigger(),
            Err(TriggerRejection::AlreadyClassifying)
        );
    }

    #[test]
    fn test_live_eligible_is_strictly_longer() {
        let mut playground = PlaygroundState::new(true);
        playground.set_text("x".repeat(50));
        assert!(!playground.live_eligible(50));
        playground.set_text("x".repeat(51));
        assert!(playground.live_eligible(50));

        playground.live_mode = false;
        assert!(!playground.live_eligible(50));
    }

    #[test]
    fn test_live_eligible_counts_chars_not_bytes() {
        let mut playground = PlaygroundState::new(true);
        // 30 two-byte chars: 60 bytes but only 30 chars
        playground.set_text("é".repeat(30));
        assert!(!playground.live_eligible(50));
    }

    #[test]
    fn test_settle_err_keeps_predictions() {
        let mut playground = PlaygroundState::default();
        let (id, _) = playground.requests.begin(TriggerSource::Manual);
        playground.requests.complete(id);
        playground.settle_ok(id, vec![Prediction::new(Category::Oncology, 0.9, 0.8)]);

        let (id2, _) = playground.requests.begin(TriggerSource::Manual);
        playground.requests.complete(id2);
        playground.settle_err(id2, &ClassificationError::Timeout { after_ms: 10 });

        assert_eq!(playground.predictions().len(), 1);
        assert!(matches!(
            playground.last_settled().map(|s| &s.outcome),
            Some(Outcome::Failed { .. })
        ));
    }
}
