use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use crate::wizard::models::WizardAction;
use crate::wizard::step::StepSync;
use crate::wizard::store::SessionSnapshot;

#[derive(Deserialize)]
pub struct StepQuery {
    pub step: Option<String>,
}

#[derive(Serialize)]
pub struct SessionResponse {
    #[serde(flatten)]
    pub session: SessionSnapshot,
    pub step_sync: StepSync,
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionSnapshot>) {
    (StatusCode::CREATED, Json(state.sessions.create().await))
}

/// GET /api/v1/sessions/:id?step=<step>
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<StepQuery>,
) -> Result<Json<SessionResponse>, AppError> {
    let (session, step_sync) = state
        .sessions
        .sync_step(id, params.step.as_deref())
        .await?;
    Ok(Json(SessionResponse { session, step_sync }))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Session {id} not found")))
    }
}

/// POST /api/v1/sessions/:id/actions
pub async fn handle_dispatch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(action): Json<WizardAction>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let session = state.sessions.dispatch(id, action).await?;
    Ok(Json(session))
}
