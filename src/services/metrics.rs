use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::{Label, LabelRange};

/// Request counters for observability
pub struct Metrics {
    /// Predictions returned with 200
    pub predictions_served: AtomicU64,
    /// Requests rejected with 400
    pub rejected_requests: AtomicU64,
    /// Predictions per label, indexed by label
    label_counts: Vec<AtomicU64>,
}

impl Metrics {
    /// Create a new metrics instance with one counter per label
    pub fn new(labels: LabelRange) -> Self {
        Self {
            predictions_served: AtomicU64::new(0),
            rejected_requests: AtomicU64::new(0),
            label_counts: labels.iter().map(|_| AtomicU64::new(0)).collect(),
        }
    }

    /// Count a served prediction
    pub fn record_prediction(&self, label: Label) {
        self.predictions_served.fetch_add(1, Ordering::Relaxed);
        if let Some(counter) = self.label_counts.get(label as usize) {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Count a rejected request
    pub fn inc_rejected(&self) {
        self.rejected_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn served(&self) -> u64 {
        self.predictions_served.load(Ordering::Relaxed)
    }

    pub fn rejected(&self) -> u64 {
        self.rejected_requests.load(Ordering::Relaxed)
    }

    /// Predictions served per label, in label order
    pub fn label_counts(&self) -> Vec<u64> {
        self.label_counts
            .iter()
            .map(|c| c.load(Ordering::Relaxed))
            .collect()
    }

    /// Export metrics in Prometheus format
    pub fn prometheus(&self) -> String {
        let mut out = format!(
            r#"# HELP labelstub_predictions_total Predictions served
# TYPE labelstub_predictions_total counter
labelstub_predictions_total {}

# HELP labelstub_rejected_requests_total Requests rejected as invalid input
# TYPE labelstub_rejected_requests_total counter
labelstub_rejected_requests_total {}

# HELP labelstub_label_predictions_total Predictions served per label
# TYPE labelstub_label_predictions_total counter
"#,
            self.served(),
            self.rejected(),
        );

        for (label, count) in self.label_counts().into_iter().enumerate() {
            out.push_str(&format!(
                "labelstub_label_predictions_total{{label=\"{}\"}} {}\n",
                label, count
            ));
        }

        out
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new(LabelRange::default())
    }
}
