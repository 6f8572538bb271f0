//! Circuit generation, visualization, analysis and recommendation endpoints.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::advisor::Recommendation;
use crate::dto::{
    AnalyzeRequest, AnalyzeResponse, GenerateRequest, GenerateResponse, RecommendRequest,
    VisualizeRequest, VisualizeResponse,
};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/circuits/generate - Build a template circuit.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let response = state.service.generate(&req.algorithm, &req.params)?;
    Ok(Json(response))
}

/// POST /api/circuits/visualize - Decode circuit text and return an SVG diagram.
pub async fn visualize(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VisualizeRequest>,
) -> Result<Json<VisualizeResponse>, ApiError> {
    let response = state.service.visualize(&req.circuit_text, req.style)?;
    Ok(Json(response))
}

/// POST /api/circuits/analyze - Gate statistics for circuit text.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let response = state.service.analyze(&req.circuit_text)?;
    Ok(Json(response))
}

/// POST /api/circuits/recommend - Suggest an execution backend.
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RecommendRequest>,
) -> Result<Json<Recommendation>, ApiError> {
    let mut features = state.service.features(&req.circuit_text)?;
    features.target_latency_ms = req.target_latency_ms;
    features.preferred_backend = req.preferred_backend;

    let recommendation = state.advisor.recommend(&features).await?;
    tracing::info!(
        advisor = state.advisor.name(),
        backend = ?recommendation.backend,
        rule = recommendation.rule,
        "Recommended backend"
    );
    Ok(Json(recommendation))
}
