pub mod health;

use axum::{
    routing::{get, post},
    Json, Router,
};

use crate::reference::{all_industries, IndustryRef};
use crate::state::AppState;
use crate::summary::handlers as summary;
use crate::wizard::handlers as wizard;

/// GET /api/v1/reference/industries
async fn list_industries() -> Json<Vec<IndustryRef>> {
    Json(all_industries())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/reference/industries", get(list_industries))
        // Wizard sessions
        .route("/api/v1/sessions", post(wizard::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(wizard::handle_get_session).delete(wizard::handle_delete_session),
        )
        .route("/api/v1/sessions/:id/actions", post(wizard::handle_dispatch))
        // Summary
        .route(
            "/api/v1/sessions/:id/summary",
            get(summary::handle_session_summary),
        )
        .route(
            "/api/v1/sessions/:id/summary/preview",
            post(summary::handle_session_preview),
        )
        .route("/api/v1/summary", post(summary::handle_aggregate))
        .with_state(state)
}
