//! Action - reducer への入力（tagged union）
//!
//! # Descriptor 形式
//! 外部からは `"type"` タグ付きの JSON オブジェクトとして受け取ります。
//!
//! | kind               | alias     | fields       |
//! |--------------------|-----------|--------------|
//! | `add`              | `added`   | `name`       |
//! | `toggle_completed` | `updated` | `id`         |
//! | `delete`           | `deleted` | `id`         |
//! | `rename`           | `edited`  | `id`, `name` |
//!
//! 未知の kind は `TodoError::UnknownAction` になります。黙ってリストを
//! 返すことはしません（呼び出し側のバグを隠さないため）。

use serde::Serialize;
use serde_json::Value;

use super::errors::{Result, TodoError};
use super::ids::TaskId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Append a new incomplete task.
    Add { name: String },

    /// Invert `completed` on the matching task.
    ToggleCompleted { id: TaskId },

    /// Remove the matching task.
    Delete { id: TaskId },

    /// Replace the matching task's name.
    Rename { id: TaskId, name: String },
}

impl Action {
    pub fn add(name: impl Into<String>) -> Self {
        Action::Add { name: name.into() }
    }

    pub fn toggle(id: impl Into<TaskId>) -> Self {
        Action::ToggleCompleted { id: id.into() }
    }

    pub fn delete(id: impl Into<TaskId>) -> Self {
        Action::Delete { id: id.into() }
    }

    pub fn rename(id: impl Into<TaskId>, name: impl Into<String>) -> Self {
        Action::Rename {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Canonical descriptor tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Add { .. } => "add",
            Action::ToggleCompleted { .. } => "toggle_completed",
            Action::Delete { .. } => "delete",
            Action::Rename { .. } => "rename",
        }
    }

    /// Decode a `"type"`-tagged descriptor.
    ///
    /// # Errors
    /// - `UnknownAction`: タグが既知の集合にない
    /// - `MalformedAction`: `type` がない、または必要なフィールドが文字列でない
    pub fn from_descriptor(value: &Value) -> Result<Self> {
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| TodoError::MalformedAction("missing string field `type`".into()))?;

        let field = |key: &str| -> Result<String> {
            value
                .get(key)
                .and_then(Value::as_str)
                .map(str::to_owned)
                .ok_or_else(|| {
                    TodoError::MalformedAction(format!("`{kind}` requires string field `{key}`"))
                })
        };

        match kind {
            "add" | "added" => Ok(Action::add(field("name")?)),
            "toggle_completed" | "updated" => Ok(Action::toggle(field("id")?)),
            "delete" | "deleted" => Ok(Action::delete(field("id")?)),
            "rename" | "edited" => Ok(Action::rename(field("id")?, field("name")?)),
            other => Err(TodoError::UnknownAction(other.to_owned())),
        }
    }

    /// Encode as a canonical descriptor.
    pub fn to_descriptor(&self) -> Value {
        // 全フィールドが文字列なので失敗しない
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
