//! Domain identifiers.
//!
//! # TaskId
//! TaskId は不透明な文字列 ID です。初期タスクは `todo-0` のような固定値、
//! 新規タスクは `todo-<ULID>` の形で生成されます。
//!
//! ## なぜ文字列なのか？
//! - 初期データの ID（`todo-0`）は ULID ではない
//! - 生成アルゴリズムに振る舞いを依存させない（IdGenerator で差し替え可能）

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// Identifier of a Task. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Display/生成時のプレフィックス
    pub const PREFIX: &'static str = "todo-";

    /// 任意の文字列から TaskId を作成（初期データ・CLI 入力用）
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// ULID から `todo-<ULID>` 形式の TaskId を作成
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(format!("{}{}", Self::PREFIX, ulid))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ulid_ids_carry_prefix() {
        let ulid = Ulid::new();
        let id = TaskId::from_ulid(ulid);

        assert!(id.as_str().starts_with("todo-"));
        assert_eq!(id.to_string(), format!("todo-{ulid}"));
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = TaskId::new("todo-0");

        let serialized = serde_json::to_string(&id).unwrap();
        assert_eq!(serialized, "\"todo-0\"");

        let deserialized: TaskId = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, id);
    }
}
