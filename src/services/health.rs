//! Health check endpoints for process supervision
//!
//! Liveness and readiness probes, a JSON health summary and a Prometheus
//! metrics endpoint. Mounted next to the prediction routes.

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::domain::LabelRange;
use crate::services::Metrics;

/// Overall service status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Startup delay still running
    Starting,
    Healthy,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Healthy)
    }
}

/// Overall system health response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub ready: bool,
    pub classifier: String,
    pub labels: u32,
    pub predictions_served: u64,
}

/// Shared state for health endpoints
pub struct HealthState {
    /// When the process started
    pub started_at: DateTime<Utc>,
    /// Set once the model is trained
    ready: AtomicBool,
    /// Name of the classifier backend
    classifier: String,
    /// Label range served by the classifier
    labels: LabelRange,
    /// Metrics reference
    pub metrics: Option<Arc<Metrics>>,
}

impl HealthState {
    pub fn new(classifier: impl Into<String>, labels: LabelRange) -> Self {
        Self {
            started_at: Utc::now(),
            ready: AtomicBool::new(false),
            classifier: classifier.into(),
            labels,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, m: Arc<Metrics>) -> Self {
        self.metrics = Some(m);
        self
    }

    /// Mark the service ready to take predictions
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::SeqCst);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    /// Get overall health status
    pub fn get_health(&self) -> HealthResponse {
        let ready = self.is_ready();
        let uptime = (Utc::now() - self.started_at).num_seconds().max(0) as u64;

        HealthResponse {
            status: if ready {
                HealthStatus::Healthy
            } else {
                HealthStatus::Starting
            },
            timestamp: Utc::now(),
            uptime_seconds: uptime,
            ready,
            classifier: self.classifier.clone(),
            labels: self.labels.count(),
            predictions_served: self.metrics.as_ref().map_or(0, |m| m.served()),
        }
    }
}

/// Routes for `/health`, `/healthz`, `/readyz` and `/metrics`
pub fn health_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    Arc<HealthState>: FromRef<S>,
{
    Router::new()
        .route("/health", get(health_handler))
        .route("/healthz", get(liveness_handler))
        .route("/readyz", get(readiness_handler))
        .route("/metrics", get(metrics_handler))
}

/// Full health check endpoint
async fn health_handler(State(state): State<Arc<HealthState>>) -> impl IntoResponse {
    let health = state.get_health();
    let status_code = if health.status.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status_code, Json(health))
}

/// Liveness probe - is the process alive?
async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// Readiness probe - has the startup delay finished?
async fn readiness_handler(State(state): State<Arc<HealthState>>) -> impl IntoResponse {
    if state.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// Prometheus metrics endpoint
async fn metrics_handler(State(state): State<Arc<HealthState>>) -> impl IntoResponse {
    let health = state.get_health();
    let up = if state.is_ready() { 1 } else { 0 };

    let mut body = format!(
        r#"# HELP labelstub_up Readiness (1=ready, 0=starting)
# TYPE labelstub_up gauge
labelstub_up {}

# HELP labelstub_uptime_seconds Uptime in seconds
# TYPE labelstub_uptime_seconds counter
labelstub_uptime_seconds {}

"#,
        up, health.uptime_seconds,
    );

    if let Some(ref m) = state.metrics {
        body.push_str(&m.prometheus());
    }

    (
        StatusCode::OK,
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; charset=utf-8",
        )],
        body,
    )
}
