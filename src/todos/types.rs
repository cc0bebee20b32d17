//! Types for the second, simpler task API (`/v2/tasks`).
use serde::{Deserialize, Serialize};

fn default_id() -> u64 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub is_complete: bool,
}

/// Create request. The id is caller-supplied and defaults to 1 when absent;
/// the store rejects non-positive and already-used ids.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default = "default_id")]
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub is_complete: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoUpdate {
    pub title: Option<String>,
    pub is_complete: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct TodoListQuery {
    pub limit: Option<usize>,
}
