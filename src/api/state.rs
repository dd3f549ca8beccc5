use axum::extract::FromRef;
use std::sync::Arc;

use crate::ml::Classifier;
use crate::services::{HealthState, Metrics};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<dyn Classifier>,
    pub metrics: Arc<Metrics>,
    pub health: Arc<HealthState>,
}

impl AppState {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        let labels = classifier.labels();
        let metrics = Arc::new(Metrics::new(labels));
        let health = Arc::new(
            HealthState::new(classifier.name(), labels).with_metrics(Arc::clone(&metrics)),
        );

        Self {
            classifier,
            metrics,
            health,
        }
    }
}

impl FromRef<AppState> for Arc<HealthState> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.health)
    }
}
