use tokio::sync::RwLock;

use super::types::{CreateTodoRequest, Todo, TodoUpdate};
use crate::shared::error::ApiError;

/// Insertion-ordered in-memory collection for the simpler task schema.
/// Ids come from the caller; uniqueness is checked under the write lock.
#[derive(Debug)]
pub struct TodoStore {
    todos: RwLock<Vec<Todo>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            todos: RwLock::new(Vec::new()),
        }
    }

    /// Fixture data loaded at startup.
    pub fn seeded() -> Self {
        let seed = vec![
            Todo {
                id: 1,
                title: "Task 1".to_string(),
                is_complete: false,
            },
            Todo {
                id: 2,
                title: "Task 2".to_string(),
                is_complete: true,
            },
        ];
        Self {
            todos: RwLock::new(seed),
        }
    }

    /// First `limit` records in insertion order, or all of them.
    /// An explicit `limit` of 0 returns the empty list.
    pub async fn list(&self, limit: Option<usize>) -> Vec<Todo> {
        let todos = self.todos.read().await;
        match limit {
            Some(n) => todos.iter().take(n).cloned().collect(),
            None => todos.clone(),
        }
    }

    pub async fn get(&self, id: u64) -> Result<Todo, ApiError> {
        let todos = self.todos.read().await;
        todos
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    /// Appends with the caller-supplied id. Rejects an id of 0 and any id
    /// already present in the store.
    pub async fn create(&self, request: CreateTodoRequest) -> Result<Todo, ApiError> {
        if request.id == 0 {
            return Err(ApiError::InvalidInput(
                "id must be a positive integer".to_string(),
            ));
        }
        let mut todos = self.todos.write().await;
        if todos.iter().any(|t| t.id == request.id) {
            return Err(ApiError::InvalidInput(format!(
                "id {} is already in use",
                request.id
            )));
        }
        let todo = Todo {
            id: request.id,
            title: request.title,
            is_complete: request.is_complete,
        };
        todos.push(todo.clone());
        Ok(todo)
    }

    pub async fn update(&self, id: u64, update: TodoUpdate) -> Result<Todo, ApiError> {
        let mut todos = self.todos.write().await;
        let todo = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(ApiError::NotFound)?;
        if let Some(title) = update.title {
            todo.title = title;
        }
        if let Some(is_complete) = update.is_complete {
            todo.is_complete = is_complete;
        }
        Ok(todo.clone())
    }

    pub async fn delete(&self, id: u64) -> Result<Todo, ApiError> {
        let mut todos = self.todos.write().await;
        let index = todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(ApiError::NotFound)?;
        Ok(todos.remove(index))
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}
