//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse},
    Json,
};
use log::info;
use serde::{Deserialize, Serialize};

use crate::classifier::PredictError;

use super::error::Result;
use super::state::AppState;

/// Fallback landing page, compiled in so `GET /` succeeds even when the
/// static directory is missing at runtime.
const BUILTIN_INDEX: &str = include_str!("../../static/index.html");

/// Serves the frontend landing page.
pub async fn serve_index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    if let Some(dir) = state.config.static_dir.as_ref() {
        if let Ok(page) = tokio::fs::read_to_string(dir.join("index.html")).await {
            return Html(page);
        }
    }
    Html(BUILTIN_INDEX.to_string())
}

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    /// Flattened hand-landmark coordinates. A request without the field is
    /// treated the same as an empty vector.
    #[serde(default)]
    pub landmarks: Vec<f32>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub gesture: &'static str,
    pub confidence: f32,
}

/// Receives hand landmarks, predicts the gesture, and returns the result.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>> {
    let model = state.model.as_ref().ok_or(PredictError::ModelUnavailable)?;

    let prediction = model.predict(&request.landmarks)?;
    info!(
        "Prediction: {} ({:.2})",
        prediction.gesture, prediction.confidence
    );

    Ok(Json(PredictResponse {
        gesture: prediction.gesture,
        confidence: prediction.confidence,
    }))
}
