use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use std::sync::Arc;

use super::types::{CreateTaskRequest, ListQuery, Task, TaskUpdate};
use crate::shared::error::ApiError;
use crate::shared::state::AppState;

pub fn task_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_tasks_handler))
        .route("/", post(create_task_handler))
        .route("/:id", get(get_task_handler))
        .route("/:id", put(update_task_handler))
        .route("/:id", delete(delete_task_handler))
}

pub async fn list_tasks_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Task>> {
    Json(state.tasks.list(query.first_n).await)
}

pub async fn create_task_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateTaskRequest>,
) -> Result<Json<Task>, ApiError> {
    request.validate()?;
    let task = state.tasks.create(request).await;
    log::debug!("created task {}", task.id);
    Ok(Json(task))
}

pub async fn get_task_handler(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<u64>,
) -> Result<Json<Task>, ApiError> {
    let task = state.tasks.get(task_id).await?;
    Ok(Json(task))
}

pub async fn update_task_handler(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<u64>,
    Json(request): Json<TaskUpdate>,
) -> Result<Json<Task>, ApiError> {
    request.validate()?;
    let task = state.tasks.update(task_id, request).await?;
    Ok(Json(task))
}

pub async fn delete_task_handler(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<u64>,
) -> Result<Json<Task>, ApiError> {
    let task = state.tasks.delete(task_id).await?;
    log::debug!("deleted task {}", task.id);
    Ok(Json(task))
}
