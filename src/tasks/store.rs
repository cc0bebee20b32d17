use tokio::sync::RwLock;

use super::types::{CreateTaskRequest, Priority, Task, TaskUpdate};
use crate::shared::error::ApiError;

/// Insertion-ordered in-memory task collection. All mutation is serialized
/// behind a single `RwLock`; lookups are linear scans.
#[derive(Debug)]
pub struct TaskStore {
    tasks: RwLock<Vec<Task>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: RwLock::new(Vec::new()),
        }
    }

    /// Fixture data loaded at startup. The store resets to this set on every
    /// process restart; nothing is persisted.
    pub fn seeded() -> Self {
        let seed = vec![
            Task {
                id: 1,
                title: "Task 1".to_string(),
                description: "This is Task 1".to_string(),
                priority: Priority::Low,
                is_complete: true,
            },
            Task {
                id: 2,
                title: "Task 2".to_string(),
                description: "This is Task 2".to_string(),
                priority: Priority::High,
                is_complete: false,
            },
            Task {
                id: 3,
                title: "Task 3".to_string(),
                description: "This is Task 3".to_string(),
                priority: Priority::Low,
                is_complete: false,
            },
            Task {
                id: 4,
                title: "Task 4".to_string(),
                description: "This is Task 4".to_string(),
                priority: Priority::Medium,
                is_complete: true,
            },
        ];
        Self {
            tasks: RwLock::new(seed),
        }
    }

    /// First `first_n` tasks in insertion order, or all of them.
    /// An explicit `first_n` of 0 returns the empty list.
    pub async fn list(&self, first_n: Option<usize>) -> Vec<Task> {
        let tasks = self.tasks.read().await;
        match first_n {
            Some(n) => tasks.iter().take(n).cloned().collect(),
            None => tasks.clone(),
        }
    }

    pub async fn get(&self, id: u64) -> Result<Task, ApiError> {
        let tasks = self.tasks.read().await;
        tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    /// Assigns `max(existing ids) + 1` (1 for an empty store) and appends.
    pub async fn create(&self, request: CreateTaskRequest) -> Task {
        let mut tasks = self.tasks.write().await;
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let task = Task {
            id: next_id,
            title: request.title,
            description: request.description,
            priority: request.priority.unwrap_or_default(),
            is_complete: request.is_complete,
        };
        tasks.push(task.clone());
        task
    }

    /// Overwrites exactly the fields supplied in `update`, in place.
    pub async fn update(&self, id: u64, update: TaskUpdate) -> Result<Task, ApiError> {
        let mut tasks = self.tasks.write().await;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(ApiError::NotFound)?;
        if let Some(title) = update.title {
            task.title = title;
        }
        if let Some(description) = update.description {
            task.description = description;
        }
        if let Some(priority) = update.priority {
            task.priority = priority;
        }
        if let Some(is_complete) = update.is_complete {
            task.is_complete = is_complete;
        }
        Ok(task.clone())
    }

    /// Removes exactly one record and returns it.
    pub async fn delete(&self, id: u64) -> Result<Task, ApiError> {
        let mut tasks = self.tasks.write().await;
        let index = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(ApiError::NotFound)?;
        Ok(tasks.remove(index))
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: &str) -> CreateTaskRequest {
        CreateTaskRequest {
            title: title.to_string(),
            description: format!("This is {title}"),
            priority: None,
            is_complete: false,
        }
    }

    #[tokio::test]
    async fn create_assigns_strictly_increasing_id_and_appends_last() {
        let store = TaskStore::seeded();
        let created = store.create(request("Task 5")).await;
        assert_eq!(created.id, 5);

        let all = store.list(None).await;
        assert_eq!(all.len(), 5);
        assert_eq!(all.last().map(|t| t.id), Some(5));
    }

    #[tokio::test]
    async fn create_on_empty_store_starts_at_one() {
        let store = TaskStore::new();
        let created = store.create(request("First")).await;
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn create_after_deleting_max_id_reuses_it() {
        // max+1 over remaining ids, not a monotonic counter
        let store = TaskStore::seeded();
        store.delete(4).await.unwrap();
        let created = store.create(request("Again")).await;
        assert_eq!(created.id, 4);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order_and_honors_first_n() {
        let store = TaskStore::seeded();
        let ids: Vec<u64> = store.list(None).await.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        let first_two: Vec<u64> = store.list(Some(2)).await.iter().map(|t| t.id).collect();
        assert_eq!(first_two, vec![1, 2]);
    }

    #[tokio::test]
    async fn list_with_zero_limit_is_empty() {
        let store = TaskStore::seeded();
        assert!(store.list(Some(0)).await.is_empty());
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let store = TaskStore::seeded();
        assert_eq!(store.get(9999).await, Err(ApiError::NotFound));
    }

    #[tokio::test]
    async fn update_changes_only_supplied_fields() {
        let store = TaskStore::seeded();
        let updated = store
            .update(
                2,
                TaskUpdate {
                    title: Some("Renamed".to_string()),
                    ..TaskUpdate::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.description, "This is Task 2");
        assert_eq!(updated.priority, Priority::High);
        assert!(!updated.is_complete);
    }

    #[tokio::test]
    async fn update_applies_explicit_false() {
        // Presence-tracked merge: Some(false) is not "unset".
        let store = TaskStore::seeded();
        let updated = store
            .update(
                1,
                TaskUpdate {
                    is_complete: Some(false),
                    ..TaskUpdate::default()
                },
            )
            .await
            .unwrap();
        assert!(!updated.is_complete);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let store = TaskStore::seeded();
        let result = store.update(9999, TaskUpdate::default()).await;
        assert_eq!(result, Err(ApiError::NotFound));
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_record() {
        let store = TaskStore::seeded();
        let removed = store.delete(3).await.unwrap();
        assert_eq!(removed.id, 3);
        assert_eq!(store.list(None).await.len(), 3);
        assert_eq!(store.get(3).await, Err(ApiError::NotFound));
    }

    #[tokio::test]
    async fn delete_unknown_id_leaves_store_unchanged() {
        let store = TaskStore::seeded();
        assert_eq!(store.delete(9999).await, Err(ApiError::NotFound));
        assert_eq!(store.list(None).await.len(), 4);
    }
}
