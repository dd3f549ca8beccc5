use axum::{body::Bytes, extract::State, Json};
use tracing::debug;

use crate::api::state::AppState;
use crate::domain::Prediction;
use crate::error::{LabelStubError, Result};

/// POST /predict
///
/// Body is a JSON array of numbers. Replies with the features echoed back
/// alongside the predicted label, or 400 `Invalid input` if the body does
/// not decode.
pub async fn predict(State(state): State<AppState>, body: Bytes) -> Result<Json<Prediction>> {
    let features: Vec<f64> = serde_json::from_slice(&body).map_err(|e| {
        state.metrics.inc_rejected();
        debug!(error = %e, bytes = body.len(), "rejecting prediction request");
        LabelStubError::InvalidInput(e.to_string())
    })?;

    let label = state.classifier.predict(&features);
    state.metrics.record_prediction(label);
    debug!(features = features.len(), label, "prediction served");

    Ok(Json(Prediction::new(features, label)))
}
