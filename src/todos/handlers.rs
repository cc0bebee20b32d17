use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use std::sync::Arc;

use super::types::{CreateTodoRequest, Todo, TodoListQuery, TodoUpdate};
use crate::shared::error::ApiError;
use crate::shared::state::AppState;

pub fn todo_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_todos_handler))
        .route("/", post(create_todo_handler))
        .route("/:id", get(get_todo_handler))
        .route("/:id", put(update_todo_handler))
        .route("/:id", delete(delete_todo_handler))
}

// Path ids are validated at the boundary; the store never sees id 0.
fn check_path_id(id: u64) -> Result<(), ApiError> {
    if id == 0 {
        return Err(ApiError::InvalidInput(
            "id must be a positive integer".to_string(),
        ));
    }
    Ok(())
}

pub async fn list_todos_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TodoListQuery>,
) -> Json<Vec<Todo>> {
    Json(state.todos.list(query.limit).await)
}

pub async fn create_todo_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = state.todos.create(request).await?;
    log::debug!("created task {} (v2)", todo.id);
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn get_todo_handler(
    State(state): State<Arc<AppState>>,
    Path(todo_id): Path<u64>,
) -> Result<Json<Todo>, ApiError> {
    check_path_id(todo_id)?;
    let todo = state.todos.get(todo_id).await?;
    Ok(Json(todo))
}

pub async fn update_todo_handler(
    State(state): State<Arc<AppState>>,
    Path(todo_id): Path<u64>,
    Json(request): Json<TodoUpdate>,
) -> Result<Json<Todo>, ApiError> {
    check_path_id(todo_id)?;
    let todo = state.todos.update(todo_id, request).await?;
    Ok(Json(todo))
}

pub async fn delete_todo_handler(
    State(state): State<Arc<AppState>>,
    Path(todo_id): Path<u64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    check_path_id(todo_id)?;
    let todo = state.todos.delete(todo_id).await?;
    log::debug!("deleted task {} (v2)", todo.id);
    Ok(Json(serde_json::json!({
        "message": format!("Task {} deleted", todo.id)
    })))
}
