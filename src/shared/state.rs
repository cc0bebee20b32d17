use crate::config::AppConfig;
use crate::tasks::TaskStore;
use crate::todos::TodoStore;

/// Shared application state. One instance lives behind an `Arc` for the
/// lifetime of the process; both stores reset to their seed data on restart.
pub struct AppState {
    pub config: Option<AppConfig>,
    pub tasks: TaskStore,
    pub todos: TodoStore,
}

impl AppState {
    pub fn new(config: Option<AppConfig>) -> Self {
        Self {
            config,
            tasks: TaskStore::seeded(),
            todos: TodoStore::seeded(),
        }
    }
}
