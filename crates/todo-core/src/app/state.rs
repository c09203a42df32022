//! AppState - アプリケーション状態
//!
//! Task List と Filter はここにだけ存在します（グローバル状態は持たない）。
//! 表示層は `&AppState` で読み、`TaskCommands` 経由で更新します。
//! Task List は action ごとに reducer の結果で丸ごと置き換えられます。

use serde_json::Value;
use tracing::debug;

use crate::domain::{Action, Filter, Result, Task, TaskId, filter_tasks};
use crate::ports::{IdGenerator, TaskCommands, validate_name};
use crate::reducer::reduce;

pub struct AppState {
    tasks: Vec<Task>,
    filter: Filter,
    ids: Box<dyn IdGenerator>,
}

impl AppState {
    pub(crate) fn new(tasks: Vec<Task>, filter: Filter, ids: Box<dyn IdGenerator>) -> Self {
        Self { tasks, filter, ids }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Tasks selected by the current filter.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        filter_tasks(&self.tasks, self.filter)
    }

    /// List heading, counting the visible tasks.
    ///
    /// # 例
    /// - `"3 tasks remaining"`
    /// - `"1 task remaining"`
    pub fn heading_text(&self) -> String {
        let count = self.visible_tasks().len();
        let noun = if count == 1 { "task" } else { "tasks" };
        format!("{count} {noun} remaining")
    }

    /// Replace the task list with the reduction of `action`.
    pub fn dispatch(&mut self, action: Action) {
        self.tasks = reduce(&self.tasks, action, self.ids.as_ref());
    }

    /// Decode and dispatch a `"type"`-tagged descriptor.
    ///
    /// # Errors
    /// - `UnknownAction`: fatal。状態は変わらない
    /// - `MalformedAction`: 状態は変わらない
    pub fn dispatch_descriptor(&mut self, descriptor: &Value) -> Result<()> {
        let action = Action::from_descriptor(descriptor)?;
        self.dispatch(action);
        Ok(())
    }
}

impl TaskCommands for AppState {
    fn add(&mut self, name: &str) -> Result<TaskId> {
        validate_name(name)?;
        let before = self.tasks.len();
        self.dispatch(Action::add(name));
        // Add は必ず末尾に 1 件追加する
        Ok(self.tasks[before].id.clone())
    }

    fn toggle(&mut self, id: &TaskId) {
        self.dispatch(Action::toggle(id.clone()));
    }

    fn delete(&mut self, id: &TaskId) {
        self.dispatch(Action::delete(id.clone()));
    }

    fn rename(&mut self, id: &TaskId, name: &str) -> Result<()> {
        validate_name(name)?;
        self.dispatch(Action::rename(id.clone(), name));
        Ok(())
    }

    fn set_filter(&mut self, filter: Filter) {
        debug!(from = %self.filter, to = %filter, "filter changed");
        self.filter = filter;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppBuilder;
    use crate::domain::TodoError;
    use crate::ports::SequentialIdGenerator;
    use serde_json::json;

    fn seeded() -> AppState {
        AppBuilder::new()
            .with_id_generator(SequentialIdGenerator::new("new-"))
            .build()
            .unwrap()
    }

    #[test]
    fn add_returns_the_generated_id() {
        let mut app = seeded();

        let id = app.add("Code").unwrap();

        assert_eq!(id, TaskId::new("new-1"));
        assert_eq!(app.tasks().last().unwrap().id, id);
        assert!(!app.tasks().last().unwrap().completed);
    }

    #[test]
    fn empty_names_never_reach_the_reducer() {
        let mut app = seeded();
        let before = app.tasks().to_vec();

        assert!(matches!(app.add(""), Err(TodoError::EmptyName)));
        assert!(matches!(
            app.rename(&TaskId::new("todo-0"), ""),
            Err(TodoError::EmptyName)
        ));
        assert_eq!(app.tasks(), before.as_slice());
    }

    #[test]
    fn filter_changes_the_view_not_the_list() {
        let mut app = seeded();

        app.set_filter(Filter::Completed);

        assert_eq!(app.filter(), Filter::Completed);
        assert_eq!(app.visible_tasks().len(), 1);
        assert_eq!(app.tasks().len(), 3);
    }

    #[test]
    fn heading_counts_visible_tasks() {
        let mut app = seeded();
        assert_eq!(app.heading_text(), "3 tasks remaining");

        app.set_filter(Filter::Completed);
        assert_eq!(app.heading_text(), "1 task remaining");

        app.delete(&TaskId::new("todo-0"));
        assert_eq!(app.heading_text(), "0 tasks remaining");
    }

    #[test]
    fn commands_dispatch_through_the_reducer() {
        let mut app = seeded();
        let sleep = TaskId::new("todo-1");

        app.toggle(&sleep);
        app.rename(&sleep, "Nap").unwrap();

        let task = app.tasks().iter().find(|t| t.id == sleep).unwrap();
        assert!(task.completed);
        assert_eq!(task.name, "Nap");
    }

    #[test]
    fn unknown_descriptor_leaves_state_untouched() {
        let mut app = seeded();
        let before = app.tasks().to_vec();

        let err = app
            .dispatch_descriptor(&json!({"type": "bogus"}))
            .unwrap_err();

        assert!(err.is_fatal());
        assert_eq!(app.tasks(), before.as_slice());
    }

    #[test]
    fn descriptor_dispatch_updates_state() {
        let mut app = seeded();
        app.dispatch_descriptor(&json!({"type": "add", "name": "Walk"}))
            .unwrap();
        assert_eq!(app.tasks().len(), 4);
        assert_eq!(app.tasks()[3].name, "Walk");
    }
}
