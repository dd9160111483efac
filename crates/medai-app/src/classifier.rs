//! Classifier capability and the bundled mock implementation

use std::sync::Mutex;
use std::time::Duration;

use medai_core::{Category, ClassificationError, Prediction};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::Settings;

/// Ranks categories for a piece of text.
///
/// The controller owns the classifying flag; implementations must not touch
/// shared state.
#[trait_variant::make(Classifier: Send)]
pub trait LocalClassifier {
    /// Produce predictions sorted by descending probability
    async fn classify(&self, text: &str) -> Result<Vec<Prediction>, ClassificationError>;
}

/// Random-score classifier with artificial latency
///
/// Draws an independent probability in [0.1, 0.9) and confidence in
/// [0.7, 1.0) for every category, then keeps the top `top_k`. Never fails,
/// not even for empty text.
#[derive(Debug)]
pub struct MockClassifier {
    latency: Duration,
    top_k: usize,
    rng: Mutex<StdRng>,
}

impl MockClassifier {
    pub fn new(latency: Duration, top_k: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            latency,
            top_k,
            rng: Mutex::new(rng),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.playground.classify_latency(),
            settings.playground.top_k,
            settings.classifier.seed,
        )
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    fn draw(&self) -> Vec<Prediction> {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        let mut predictions: Vec<Prediction> = Category::ALL
            .iter()
            .map(|&category| {
                let probability = rng.gen_range(0.1..0.9);
                let confidence = rng.gen_range(0.7..1.0);
                Prediction::new(category, probability, confidence)
            })
            .collect();

        predictions.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        predictions.truncate(self.top_k);
        predictions
    }
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl Classifier for MockClassifier {
    async fn classify(&self, text: &str) -> Result<Vec<Prediction>, ClassificationError> {
        debug!(chars = text.chars().count(), "mock classification started");
        tokio::time::sleep(self.latency).await;
        Ok(self.draw())
    }
}

#[cfg(test)]
mod tests {
    use super::{Classifier, MockClassifier};
    use medai_core::Category;
    use std::collections::HashSet;
    use std::time::Duration;

    fn fast(seed: Option<u64>) -> MockClassifier {
        MockClassifier::new(Duration::ZERO, 3, seed)
    }

    #[tokio::test]
    async fn test_classify_returns_top_three_sorted() {
        let classifier = fast(None);
        for _ in 0..50 {
            let predictions = classifier.classify("texto").await.unwrap();
            assert_eq!(predictions.len(), 3);
            assert!(predictions
                .windows(2)
                .all(|w| w[0].probability >= w[1].probability));

            let unique: HashSet<_> = predictions.iter().map(|p| p.category).collect();
            assert_eq!(unique.len(), 3);

            for p in &predictions {
                assert!((0.1..0.9).contains(&p.probability));
                assert!((0.7..1.0).contains(&p.confidence));
            }
        }
    }

    #[tokio::test]
    async fn test_classify_accepts_empty_text() {
        let predictions = fast(None).classify("").await.unwrap();
        assert_eq!(predictions.len(), 3);
    }

    #[tokio::test]
    async fn test_seeded_classifier_is_reproducible() {
        let a = fast(Some(42)).classify("a").await.unwrap();
        let b = fast(Some(42)).classify("b").await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_top_k_is_configurable() {
        let classifier = MockClassifier::new(Duration::ZERO, 5, Some(1));
        assert_eq!(classifier.classify("x").await.unwrap().len(), 5);

        let classifier = MockClassifier::new(Duration::ZERO, 20, Some(1));
        assert_eq!(
            classifier.classify("x").await.unwrap().len(),
            Category::ALL.len()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_applied() {
        let classifier = MockClassifier::new(Duration::from_millis(1200), 3, Some(3));
        let started = tokio::time::Instant::now();
        classifier.classify("x").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1200));
    }
}
