//! Image classification seam
//!
//! A real deployment would plug a vision model in behind [`ImageClassifier`].
//! [`MockImageClassifier`] is a stand-in that ignores the pixels and returns a
//! random item from a short canned list.

use crate::error::{IdentifyError, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::Mutex;
use tracing::debug;

/// Output of an image classifier: a catalog key plus confidence
#[derive(Debug, Clone, PartialEq)]
pub struct ImageClassification {
    pub item: String,
    pub confidence: f64,
}

/// Classifies an encoded image into a catalog item
pub trait ImageClassifier: Send + Sync + std::fmt::Debug {
    /// Short identifier for logs
    fn name(&self) -> &str;

    /// Classify a non-empty image payload
    fn classify(&self, image: &[u8]) -> Result<ImageClassification>;
}

/// Items the mock classifier chooses from
pub const MOCK_CANDIDATES: &[&str] = &[
    "plastic bottle",
    "aluminum can",
    "cardboard",
    "glass bottle",
    "battery",
];

/// Confidence reported by the mock classifier
pub const MOCK_CONFIDENCE: f64 = 0.85;

/// Non-deterministic placeholder classifier.
///
/// Picks uniformly from [`MOCK_CANDIDATES`]. Use [`MockImageClassifier::seeded`]
/// for repeatable output in tests.
#[derive(Debug)]
pub struct MockImageClassifier {
    rng: Mutex<StdRng>,
}

impl MockImageClassifier {
    /// Classifier seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Classifier with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for MockImageClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageClassifier for MockImageClassifier {
    fn name(&self) -> &str {
        "mock"
    }

    fn classify(&self, image: &[u8]) -> Result<ImageClassification> {
        if image.is_empty() {
            return Err(IdentifyError::InvalidImage);
        }

        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let item = MOCK_CANDIDATES
            .choose(&mut *rng)
            .ok_or_else(|| IdentifyError::Classifier("no mock candidates".into()))?;

        debug!(bytes = image.len(), item = *item, "mock image classification");

        Ok(ImageClassification {
            item: (*item).to_string(),
            confidence: MOCK_CONFIDENCE,
        })
    }
}
