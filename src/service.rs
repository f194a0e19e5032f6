//! HTTP surface: one page, one prediction endpoint, one health probe.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

use crate::encode;
use crate::model::Predictor;
use crate::types::{ChurnLabel, RawInput};
use crate::ui;

/// Shared request state: the loaded model and its authoritative column
/// order. Both are read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<Predictor>,
    pub feature_names: Arc<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct PredictOut {
    pub label: ChurnLabel,
    pub will_churn: bool,
    pub probability: f64,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/predict", post(predict))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(ui::PAGE)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

/// Encode one submission into the model's row layout and score it.
///
/// Both failure classes degrade to a JSON error body: an encoding failure
/// means the form and the encoder tables disagree (422), a scoring failure
/// means the backend choked on the row (500). Neither takes the process
/// down.
pub async fn predict(
    State(state): State<AppState>,
    Json(raw): Json<RawInput>,
) -> Result<Json<PredictOut>, (StatusCode, Json<serde_json::Value>)> {
    let record = encode::encode(&raw, &state.feature_names).map_err(|e| {
        tracing::warn!("encoding failed: {e}");
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": e.to_string() })),
        )
    })?;

    let result = state.predictor.score(&record).map_err(|e| {
        tracing::error!("scoring failed: {e}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": e.to_string() })),
        )
    })?;

    Ok(Json(PredictOut {
        label: result.label,
        will_churn: result.label == ChurnLabel::Churn,
        probability: result.probability,
    }))
}
