//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel, the background task
//! slots, the shutdown signal and the event broadcaster. Frontends feed it
//! messages and render `engine.state`.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::actions::TaskSlots;
use crate::classifier::{Classifier, MockClassifier};
use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::playground::{Outcome, RequestId, TriggerSource};
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone, PartialEq)]
struct StateSnapshot {
    current_section: usize,
    palette_open: bool,
    language: medai_core::Language,
    live_mode: bool,
    in_flight: Option<(RequestId, TriggerSource)>,
    last_settled: Option<(RequestId, Outcome)>,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        let playground = state.playground();
        Self {
            current_section: state.current_section(),
            palette_open: state.palette_open(),
            language: state.language(),
            live_mode: playground.live_mode(),
            in_flight: playground.in_flight().zip(playground.in_flight_source()),
            last_settled: playground
                .last_settled()
                .map(|s| (s.request_id, s.outcome.clone())),
        }
    }
}

/// Orchestration engine for the playground.
///
/// Generic over the classifier so tests can substitute a recording double.
pub struct Engine<C = MockClassifier> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, timers, tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Send `true` to stop background tasks.
    pub shutdown_tx: watch::Sender<bool>,

    pub shutdown_rx: watch::Receiver<bool>,

    /// Loaded settings
    pub settings: Settings,

    classifier: Arc<C>,

    tasks: TaskSlots,

    signal_task: Option<JoinHandle<()>>,

    /// Event broadcaster for frontends
    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine<MockClassifier> {
    /// Create an engine backed by the mock classifier and install the OS
    /// signal handler. Must be called inside a tokio runtime.
    pub fn new(settings: Settings) -> Self {
        let classifier = MockClassifier::from_settings(&settings);
        let mut engine = Self::with_classifier(settings, classifier);
        engine.signal_task = Some(signals::spawn_signal_handler(
            engine.msg_tx.clone(),
            engine.shutdown_rx.clone(),
        ));
        engine
    }
}

impl<C> Engine<C>
where
    C: Classifier + Send + Sync + 'static,
{
    /// Create an engine with an explicit classifier; no signal handler
    pub fn with_classifier(settings: Settings, classifier: C) -> Self {
        let state = AppState::with_settings(settings.clone());
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let (event_tx, _) = broadcast::channel(256);

        info!(
            "Engine ready (language {}, live mode {})",
            state.language(),
            state.live_mode()
        );

        Self {
            state,
            msg_tx,
            msg_rx,
            shutdown_tx,
            shutdown_rx,
            settings,
            classifier: Arc::new(classifier),
            tasks: TaskSlots::default(),
            signal_task: None,
            event_tx,
        }
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind, older events are dropped and the
    /// receiver reports `RecvError::Lagged`.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// The classifier backing this engine
    #[cfg(test)]
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Process a single message through the TEA update cycle and emit
    /// events for whatever changed.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        let scroll_requests = process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.classifier,
            &mut self.tasks,
            &self.shutdown_rx,
        );

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post, &scroll_requests);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it.
    ///
    /// Returns false once every sender is gone.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Whether background work (timer or classification) is outstanding
    pub fn has_pending_work(&self) -> bool {
        self.tasks.debounce_pending() || self.tasks.classification_running()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Abort the timer and classification tasks, signal background tasks
    /// and announce shutdown. Results arriving afterwards are never applied.
    pub async fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);

        self.state.playground.debounce.cancel();
        self.state.playground.requests.clear();
        self.tasks.abort_all();

        let _ = self.shutdown_tx.send(true);

        if let Some(handle) = self.signal_task.take() {
            if let Err(e) = handle.await {
                debug!("Signal task ended abnormally: {}", e);
            }
        }

        info!("Engine shut down");
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot, scroll_requests: &[usize]) {
        match (pre.palette_open, post.palette_open) {
            (false, true) => self.emit(EngineEvent::PaletteOpened),
            (true, false) => self.emit(EngineEvent::PaletteClosed),
            _ => {}
        }

        if pre.current_section != post.current_section {
            self.emit(EngineEvent::SectionChanged {
                from: pre.current_section,
                to: post.current_section,
            });
        }

        for &index in scroll_requests {
            self.emit(EngineEvent::ScrollRequested { index });
        }

        if pre.language != post.language {
            self.emit(EngineEvent::LanguageChanged {
                language: post.language,
            });
        }

        if pre.live_mode != post.live_mode {
            self.emit(EngineEvent::LiveModeChanged {
                enabled: post.live_mode,
            });
        }

        if pre.last_settled != post.last_settled {
            if let Some((request_id, outcome)) = &post.last_settled {
                self.emit(match outcome {
                    Outcome::Completed { count } => EngineEvent::ClassificationCompleted {
                        request_id: *request_id,
                        count: *count,
                    },
                    Outcome::Failed { reason } => EngineEvent::ClassificationFailed {
                        request_id: *request_id,
                        reason: reason.clone(),
                    },
                });
            }
        }

        if pre.in_flight != post.in_flight {
            if let Some((request_id, trigger)) = post.in_flight {
                self.emit(EngineEvent::ClassificationStarted {
                    request_id,
                    trigger,
                });
            }
        }
    }

    fn emit(&self, event: EngineEvent) {
        // No subscribers is fine
        let _ = self.event_tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medai_core::{Category, ClassificationError, Prediction, SAMPLE_ABSTRACTS};
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::sync::broadcast::error::TryRecvError;

    /// Classifier double that records every call
    #[derive(Default)]
    struct RecordingClassifier {
        calls: Mutex<Vec<String>>,
        latency: Duration,
        fail: bool,
    }

    impl RecordingClassifier {
        fn with_latency(ms: u64) -> Self {
            Self {
                latency: Duration::from_millis(ms),
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Classifier for RecordingClassifier {
        async fn classify(&self, text: &str) -> Result<Vec<Prediction>, ClassificationError> {
            self.calls.lock().unwrap().push(text.to_string());
            tokio::time::sleep(self.latency).await;
            if self.fail {
                return Err(ClassificationError::ServiceUnavailable {
                    message: "offline".into(),
                });
            }
            Ok(vec![
                Prediction::new(Category::Oncology, 0.8, 0.9),
                Prediction::new(Category::Neurology, 0.5, 0.8),
                Prediction::new(Category::Cardiology, 0.2, 0.75),
            ])
        }
    }

    fn engine_with(settings: Settings, classifier: RecordingClassifier) -> Engine<RecordingClassifier> {
        Engine::with_classifier(settings, classifier)
    }

    fn live_settings() -> Settings {
        let mut settings = Settings::default();
        settings.behavior.live_mode = true;
        settings
    }

    /// Let the paused clock run `ms`, then apply whatever arrived
    async fn advance<C: Classifier + Send + Sync + 'static>(engine: &mut Engine<C>, ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
        engine.drain_pending_messages();
        // give freshly spawned tasks a chance to start
        tokio::task::yield_now().await;
    }

    fn drain_events(rx: &mut broadcast::Receiver<EngineEvent>) -> Vec<EngineEvent> {
        let mut events = Vec::new();
        loop {
            match rx.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
                Err(TryRecvError::Lagged(_)) => continue,
            }
        }
        events
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_classification_end_to_end() {
        let mut engine = engine_with(Settings::default(), RecordingClassifier::with_latency(1200));
        let mut events = engine.subscribe();

        engine.process_message(Message::SetInputText(SAMPLE_ABSTRACTS[0].to_string()));
        engine.process_message(Message::TriggerClassify);
        assert!(engine.state.is_classifying());

        advance(&mut engine, 1199).await;
        assert!(engine.state.is_classifying());
        assert!(engine.state.predictions().is_empty());

        advance(&mut engine, 2).await;
        assert!(!engine.state.is_classifying());
        assert_eq!(engine.state.predictions().len(), 3);
        assert_eq!(engine.classifier().calls().len(), 1);

        let events = drain_events(&mut events);
        assert!(events.iter().any(|e| matches!(
            e,
            EngineEvent::ClassificationStarted {
                trigger: TriggerSource::Manual,
                ..
            }
        )));
        assert!(events
            .iter()
            .any(|e| matches!(e, EngineEvent::ClassificationCompleted { count: 3, .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_live_mode_fires_once_after_debounce() {
        let mut engine = engine_with(live_settings(), RecordingClassifier::with_latency(1200));

        engine.process_message(Message::SetInputText("a".repeat(51)));

        advance(&mut engine, 499).await;
        assert!(engine.classifier().calls().is_empty());

        advance(&mut engine, 2).await;
        assert_eq!(engine.classifier().calls().len(), 1);
        assert!(engine.state.is_classifying());

        advance(&mut engine, 5000).await;
        assert_eq!(engine.classifier().calls().len(), 1);
        assert_eq!(engine.state.predictions().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_edits_debounce_to_final_text() {
        let mut engine = engine_with(live_settings(), RecordingClassifier::with_latency(100));
        let base = "b".repeat(60);

        for i in 0..5 {
            engine.process_message(Message::SetInputText(format!("{base}  {i}")));
            advance(&mut engine, 100).await;
        }

        advance(&mut engine, 2000).await;
        assert_eq!(engine.classifier().calls(), vec![format!("{base} 4")]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_text_never_fires_in_live_mode() {
        let mut engine = engine_with(live_settings(), RecordingClassifier::with_latency(10));

        engine.process_message(Message::SetInputText("a".repeat(50)));
        advance(&mut engine, 2000).await;

        assert!(engine.classifier().calls().is_empty());
        assert!(!engine.has_pending_work());
    }

    #[tokio::test(start_paused = true)]
    async fn test_disabling_live_mode_cancels_pending_timer() {
        let mut engine = engine_with(live_settings(), RecordingClassifier::with_latency(10));

        engine.process_message(Message::SetInputText("a".repeat(80)));
        advance(&mut engine, 300).await;
        engine.process_message(Message::ToggleLiveMode);
        advance(&mut engine, 2000).await;

        assert!(engine.classifier().calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_trigger_rejected_while_in_flight() {
        let mut engine = engine_with(Settings::default(), RecordingClassifier::with_latency(1200));

        engine.process_message(Message::SetInputText("texto".into()));
        engine.process_message(Message::TriggerClassify);
        advance(&mut engine, 100).await;
        engine.process_message(Message::TriggerClassify);
        advance(&mut engine, 3000).await;

        assert_eq!(engine.classifier().calls().len(), 1);
        assert!(!engine.state.is_classifying());
    }

    #[tokio::test(start_paused = true)]
    async fn test_live_trigger_supersedes_in_flight_request() {
        let mut engine = engine_with(live_settings(), RecordingClassifier::with_latency(1200));
        let mut events = engine.subscribe();

        engine.process_message(Message::SetInputText("x".repeat(60)));
        advance(&mut engine, 501).await;
        let first = engine.state.playground().in_flight().unwrap();

        engine.process_message(Message::SetInputText("y".repeat(60)));
        advance(&mut engine, 501).await;
        let second = engine.state.playground().in_flight().unwrap();
        assert_ne!(first, second);

        advance(&mut engine, 3000).await;
        assert_eq!(engine.classifier().calls().len(), 2);
        assert!(!engine.state.is_classifying());

        let completed: Vec<RequestId> = drain_events(&mut events)
            .into_iter()
            .filter_map(|e| match e {
                EngineEvent::ClassificationCompleted { request_id, .. } => Some(request_id),
                _ => None,
            })
            .collect();
        assert_eq!(completed, vec![second]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_completion_is_discarded() {
        let mut engine = engine_with(Settings::default(), RecordingClassifier::with_latency(10));

        engine.process_message(Message::ClassificationCompleted {
            request_id: RequestId(99),
            result: Ok(vec![Prediction::new(Category::Oncology, 0.5, 0.9)]),
        });

        assert!(engine.state.predictions().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_keeps_predictions_and_clears_flag() {
        let classifier = RecordingClassifier {
            latency: Duration::from_millis(10),
            fail: true,
            ..Default::default()
        };
        let mut engine = engine_with(Settings::default(), classifier);
        let mut events = engine.subscribe();

        engine.process_message(Message::SetInputText("texto".into()));
        engine.process_message(Message::TriggerClassify);
        advance(&mut engine, 50).await;

        assert!(!engine.state.is_classifying());
        assert!(engine.state.predictions().is_empty());
        assert!(engine.state.toast.is_some());
        assert!(drain_events(&mut events)
            .iter()
            .any(|e| matches!(e, EngineEvent::ClassificationFailed { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_goto_emits_one_scroll_request() {
        let mut engine = engine_with(Settings::default(), RecordingClassifier::default());
        let mut events = engine.subscribe();

        engine.process_message(Message::GotoSection(3));

        let events = drain_events(&mut events);
        let scrolls: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, EngineEvent::ScrollRequested { .. }))
            .collect();
        assert_eq!(scrolls, vec![&EngineEvent::ScrollRequested { index: 3 }]);
        assert!(events.contains(&EngineEvent::SectionChanged { from: 0, to: 3 }));
        assert_eq!(engine.state.current_section(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_question_mark_opens_palette_once() {
        let mut engine = engine_with(Settings::default(), RecordingClassifier::default());
        let mut events = engine.subscribe();

        engine.process_message(Message::Key(crate::InputKey::Char('?')));
        engine.process_message(Message::Key(crate::InputKey::Char('?')));

        let opened = drain_events(&mut events)
            .into_iter()
            .filter(|e| *e == EngineEvent::PaletteOpened)
            .count();
        assert_eq!(opened, 1);
        assert!(engine.state.palette_open());
        assert_eq!(engine.state.palette.query, "?");
    }

    #[tokio::test(start_paused = true)]
    async fn test_palette_paste_example_flow() {
        let mut engine = engine_with(Settings::default(), RecordingClassifier::default());
        let mut events = engine.subscribe();

        engine.process_message(Message::OpenPalette);
        for c in "pegar".chars() {
            engine.process_message(Message::PaletteInput(c));
        }
        engine.process_message(Message::PaletteConfirm);

        assert!(!engine.state.palette_open());
        assert_eq!(engine.state.input_text(), SAMPLE_ABSTRACTS[0]);
        assert_eq!(engine.state.current_section(), 3);

        let events = drain_events(&mut events);
        let closed = events
            .iter()
            .position(|e| *e == EngineEvent::PaletteClosed)
            .unwrap();
        let scrolled = events
            .iter()
            .position(|e| *e == EngineEvent::ScrollRequested { index: 3 })
            .unwrap();
        assert!(closed < scrolled, "palette closes before the command runs");
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_drops_pending_work() {
        let mut engine = engine_with(live_settings(), RecordingClassifier::with_latency(100));
        let mut events = engine.subscribe();

        engine.process_message(Message::SetInputText("z".repeat(70)));
        assert!(engine.has_pending_work());

        engine.shutdown().await;
        advance(&mut engine, 2000).await;

        assert!(engine.classifier().calls().is_empty());
        assert!(!engine.state.is_classifying());
        assert!(drain_events(&mut events).contains(&EngineEvent::Shutdown));
    }

    #[tokio::test(start_paused = true)]
    async fn test_language_and_live_events() {
        let mut engine = engine_with(Settings::default(), RecordingClassifier::default());
        let mut events = engine.subscribe();

        engine.process_message(Message::ToggleLanguage);
        engine.process_message(Message::ToggleLiveMode);

        let events = drain_events(&mut events);
        assert!(events.contains(&EngineEvent::LanguageChanged {
            language: medai_core::Language::En
        }));
        assert!(events.contains(&EngineEvent::LiveModeChanged { enabled: true }));
    }
}
