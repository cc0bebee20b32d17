//! API router
//!
//! Combines both task APIs and the health endpoint into a unified router.
//! The richer schema lives under `/tasks`; the second, simpler schema is
//! versioned under `/v2/tasks`.

use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use std::sync::Arc;

use crate::shared::state::AppState;

pub fn configure_api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health_check))
        .nest("/tasks", crate::tasks::task_routes())
        .nest("/v2/tasks", crate::todos::todo_routes())
}

pub async fn health_check() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ok",
            "service": "taskserver",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}
