use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use crate::summary::registry::Aggregation;
use crate::summary::state::{DraftOverrides, SummaryState};

#[derive(Deserialize)]
pub struct AggregateRequest {
    pub state: SummaryState,
    #[serde(default)]
    pub drafts: Option<DraftOverrides>,
}

/// GET /api/v1/sessions/:id/summary
pub async fn handle_session_summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Aggregation>, AppError> {
    let summary = state.sessions.summary(id, &state.registry, None).await?;
    Ok(Json(summary.as_ref().clone()))
}

/// POST /api/v1/sessions/:id/summary/preview
pub async fn handle_session_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(drafts): Json<DraftOverrides>,
) -> Result<Json<Aggregation>, AppError> {
    let drafts = Arc::new(drafts);
    let summary = state
        .sessions
        .summary(id, &state.registry, Some(&drafts))
        .await?;
    Ok(Json(summary.as_ref().clone()))
}

/// POST /api/v1/summary
pub async fn handle_aggregate(
    State(state): State<AppState>,
    Json(req): Json<AggregateRequest>,
) -> Json<Aggregation> {
    Json(state.registry.aggregate(&req.state, req.drafts.as_ref()))
}
