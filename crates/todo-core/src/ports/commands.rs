//! TaskCommands port - 表示層から状態を操作する入口
//!
//! 表示層はこの trait だけを受け取り、`add` / `toggle` / `delete` / `rename`
//! と filter の切り替えを呼び出します。空の名前はここで弾かれ、reducer
//! には届きません。

use crate::domain::{Filter, Result, TaskId, TodoError};

pub trait TaskCommands {
    /// Add a task and return its freshly generated id.
    ///
    /// # Errors
    /// - `EmptyName`: `name` が空文字列
    fn add(&mut self, name: &str) -> Result<TaskId>;

    /// Flip completion. Unknown ids are ignored.
    fn toggle(&mut self, id: &TaskId);

    /// Remove a task. Unknown ids are ignored.
    fn delete(&mut self, id: &TaskId);

    /// Rename a task. Unknown ids are ignored.
    ///
    /// # Errors
    /// - `EmptyName`: `name` が空文字列
    fn rename(&mut self, id: &TaskId, name: &str) -> Result<()>;

    fn set_filter(&mut self, filter: Filter);
}

/// Reject exactly the empty string. Whitespace-only names are accepted.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(TodoError::EmptyName);
    }
    Ok(())
}
