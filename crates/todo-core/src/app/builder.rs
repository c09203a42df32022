//! AppBuilder - AppState の構築とワイヤリング
//!
//! # Fail-fast 設計
//! - build() 時に初期タスクの id が一意であることをチェック
//! - 重複があれば BuildError を返す（起動後に壊れた状態を持たない）

use std::collections::HashSet;

use tracing::debug;

use crate::app::AppState;
use crate::domain::{Filter, Task, TaskId, seed_tasks};
use crate::ports::{IdGenerator, SystemClock, UlidGenerator};

/// AppBuilder は AppState を構築
///
/// # 使用例
/// ```
/// use todo_core::app::AppBuilder;
/// use todo_core::domain::Filter;
///
/// let app = AppBuilder::new().with_filter(Filter::Active).build().unwrap();
/// assert_eq!(app.visible_tasks().len(), 2);
/// ```
///
/// # デフォルト
/// - tasks: `seed_tasks()`
/// - filter: `Filter::All`
/// - id generator: `UlidGenerator<SystemClock>`
pub struct AppBuilder {
    tasks: Vec<Task>,
    filter: Filter,
    ids: Option<Box<dyn IdGenerator>>,
}

/// BuildError は AppState 構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Duplicate task id '{0}' in the initial task list.")]
    DuplicateTaskId(TaskId),
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            tasks: seed_tasks(),
            filter: Filter::default(),
            ids: None,
        }
    }

    /// 初期タスクを差し替える（空リストも可）
    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Some(Box::new(ids));
        self
    }

    /// AppBuilder を検証して AppState を生成
    ///
    /// # 検証
    /// - 初期タスクの id が重複していれば BuildError::DuplicateTaskId
    pub fn build(self) -> Result<AppState, BuildError> {
        let mut seen = HashSet::new();
        for task in &self.tasks {
            if !seen.insert(&task.id) {
                return Err(BuildError::DuplicateTaskId(task.id.clone()));
            }
        }
        debug!(tasks = self.tasks.len(), filter = %self.filter, "built app state");

        let ids = self
            .ids
            .unwrap_or_else(|| Box::new(UlidGenerator::new(SystemClock)));
        Ok(AppState::new(self.tasks, self.filter, ids))
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
