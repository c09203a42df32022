//! Task record and the initial seed list.

use serde::{Deserialize, Serialize};

use super::ids::TaskId;

/// A single to-do item.
///
/// `id` は生成後に変わらない。`name` と `completed` は reducer が
/// 新しいコピーを作ることで更新される（in-place では書き換えない）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create an incomplete task.
    pub fn new(id: TaskId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            completed: false,
        }
    }

    /// Copy of this task with `completed` set.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Tasks present at process start.
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task::new(TaskId::new("todo-0"), "Eat").with_completed(true),
        Task::new(TaskId::new("todo-1"), "Sleep"),
        Task::new(TaskId::new("todo-2"), "Repeat"),
    ]
}
