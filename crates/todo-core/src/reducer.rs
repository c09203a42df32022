//! Task List Reducer - `(tasks, action) -> next tasks`
//!
//! # 契約
//! - 入力スライスは決して書き換えない（常に新しい Vec を返す）
//! - 該当 id がない Toggle / Delete / Rename は no-op（エラーではない）
//! - 未知の action kind は descriptor のデコード時点で fatal エラー
//!
//! Add の新しい id は IdGenerator から取る。reducer 自身は状態を持たない。

use serde_json::Value;
use tracing::{debug, trace};

use crate::domain::{Action, Result, Task, TaskId};
use crate::ports::IdGenerator;

/// Apply `action` to `tasks` and return the next list.
pub fn reduce(tasks: &[Task], action: Action, ids: &dyn IdGenerator) -> Vec<Task> {
    let kind = action.kind();
    let next = match action {
        Action::Add { name } => {
            let mut next = Vec::with_capacity(tasks.len() + 1);
            next.extend_from_slice(tasks);
            next.push(Task::new(ids.generate_task_id(), name));
            next
        }
        Action::ToggleCompleted { id } => {
            update_matching(tasks, &id, |task| task.completed = !task.completed)
        }
        Action::Delete { id } => {
            trace_if_absent(tasks, &id);
            tasks.iter().filter(|task| task.id != id).cloned().collect()
        }
        Action::Rename { id, name } => {
            update_matching(tasks, &id, |task| task.name.clone_from(&name))
        }
    };
    debug!(action = kind, before = tasks.len(), after = next.len(), "reduced task list");
    next
}

/// Decode a descriptor and reduce.
///
/// # Errors
/// - `UnknownAction`: fatal。リストは返さない
/// - `MalformedAction`: 必要なフィールドが欠けている
pub fn reduce_descriptor(
    tasks: &[Task],
    descriptor: &Value,
    ids: &dyn IdGenerator,
) -> Result<Vec<Task>> {
    let action = Action::from_descriptor(descriptor)?;
    Ok(reduce(tasks, action, ids))
}

fn update_matching(tasks: &[Task], id: &TaskId, mut apply: impl FnMut(&mut Task)) -> Vec<Task> {
    trace_if_absent(tasks, id);
    tasks
        .iter()
        .map(|task| {
            let mut task = task.clone();
            if task.id == *id {
                apply(&mut task);
            }
            task
        })
        .collect()
}

fn trace_if_absent(tasks: &[Task], id: &TaskId) {
    if !tasks.iter().any(|task| task.id == *id) {
        trace!(%id, "no task matched; list unchanged");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TodoError, seed_tasks};
    use crate::ports::SequentialIdGenerator;
    use serde_json::json;

    fn sample() -> Vec<Task> {
        vec![
            Task::new(TaskId::new("t0"), "Eat").with_completed(true),
            Task::new(TaskId::new("t1"), "Sleep"),
        ]
    }

    #[test]
    fn delete_removes_only_the_match() {
        let ids = SequentialIdGenerator::default();
        let next = reduce(&sample(), Action::delete("t0"), &ids);
        assert_eq!(next, vec![Task::new(TaskId::new("t1"), "Sleep")]);
    }

    #[test]
    fn toggle_flips_only_the_match() {
        let ids = SequentialIdGenerator::default();
        let next = reduce(&sample(), Action::toggle("t1"), &ids);
        assert_eq!(
            next,
            vec![
                Task::new(TaskId::new("t0"), "Eat").with_completed(true),
                Task::new(TaskId::new("t1"), "Sleep").with_completed(true),
            ]
        );
    }

    #[test]
    fn add_appends_incomplete_task_with_fresh_id() {
        let ids = SequentialIdGenerator::new("new-");
        let before = seed_tasks();

        let next = reduce(&before, Action::add("Code"), &ids);

        assert_eq!(next.len(), before.len() + 1);
        assert_eq!(&next[..before.len()], before.as_slice());
        assert_eq!(next[3], Task::new(TaskId::new("new-1"), "Code"));
    }

    #[test]
    fn add_does_not_validate_the_name() {
        let ids = SequentialIdGenerator::default();
        let next = reduce(&[], Action::add(""), &ids);
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].name, "");
    }

    #[test]
    fn rename_replaces_only_the_name() {
        let ids = SequentialIdGenerator::default();
        let next = reduce(&sample(), Action::rename("t0", "Feast"), &ids);
        assert_eq!(
            next[0],
            Task::new(TaskId::new("t0"), "Feast").with_completed(true)
        );
        assert_eq!(next[1], sample()[1]);
    }

    #[test]
    fn absent_ids_are_no_ops() {
        let ids = SequentialIdGenerator::default();
        let tasks = sample();

        assert_eq!(reduce(&tasks, Action::toggle("nope"), &ids), tasks);
        assert_eq!(reduce(&tasks, Action::delete("nope"), &ids), tasks);
        assert_eq!(reduce(&tasks, Action::rename("nope", "x"), &ids), tasks);
    }

    #[test]
    fn descriptor_with_unknown_kind_is_an_error() {
        let ids = SequentialIdGenerator::default();
        let result = reduce_descriptor(&sample(), &json!({"type": "bogus"}), &ids);
        assert!(matches!(result, Err(TodoError::UnknownAction(kind)) if kind == "bogus"));
    }

    #[test]
    fn descriptor_with_legacy_tag_reduces() {
        let ids = SequentialIdGenerator::default();
        let next =
            reduce_descriptor(&sample(), &json!({"type": "deleted", "id": "t1"}), &ids).unwrap();
        assert_eq!(next, vec![sample()[0].clone()]);
    }
}
