use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

use crate::domain::{Label, LabelRange};

/// Anything that maps a feature vector to a label
pub trait Classifier: Send + Sync {
    /// Backend identifier, reported by the health endpoint
    fn name(&self) -> &str;

    /// Labels this classifier may return
    fn labels(&self) -> LabelRange;

    /// Predict a label for the given features
    fn predict(&self, features: &[f64]) -> Label;
}

enum RngSource {
    /// OS-seeded thread-local generator, nothing shared between requests
    ThreadLocal,
    /// Single generator seeded once, so the label sequence is reproducible
    Seeded(Mutex<StdRng>),
}

/// Placeholder classifier: ignores its input and picks a label uniformly at random
pub struct RandomClassifier {
    labels: LabelRange,
    source: RngSource,
}

impl RandomClassifier {
    pub fn new(labels: LabelRange) -> Self {
        Self {
            labels,
            source: RngSource::ThreadLocal,
        }
    }

    pub fn seeded(labels: LabelRange, seed: u64) -> Self {
        Self {
            labels,
            source: RngSource::Seeded(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    /// Build from an optional seed (config or CLI)
    pub fn from_seed(labels: LabelRange, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(labels, seed),
            None => Self::new(labels),
        }
    }

    pub fn is_seeded(&self) -> bool {
        matches!(self.source, RngSource::Seeded(_))
    }
}

impl Classifier for RandomClassifier {
    fn name(&self) -> &str {
        "random"
    }

    fn labels(&self) -> LabelRange {
        self.labels
    }

    fn predict(&self, _features: &[f64]) -> Label {
        let count = self.labels.count();
        match &self.source {
            RngSource::ThreadLocal => rand::thread_rng().gen_range(0..count),
            RngSource::Seeded(rng) => {
                // A panic while holding the lock cannot leave the RNG half-updated.
                let mut rng = rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                rng.gen_range(0..count)
            }
        }
    }
}

impl std::fmt::Debug for RandomClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomClassifier")
            .field("labels", &self.labels)
            .field("seeded", &self.is_seeded())
            .finish()
    }
}
