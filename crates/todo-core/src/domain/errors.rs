//! Errors - エラー型と分類
//!
//! # 分類
//! - UnknownAction: 呼び出し側の不具合（fatal、リトライ無意味）
//! - MalformedAction / UnknownFilter: 入力の形式エラー
//! - EmptyName: コマンド境界での入力検証（reducer には届かない）

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("unknown action: {0}")]
    UnknownAction(String),

    #[error("malformed action descriptor: {0}")]
    MalformedAction(String),

    #[error("task name must not be empty")]
    EmptyName,

    #[error("unknown filter: {0} (expected All, Active or Completed)")]
    UnknownFilter(String),
}

impl TodoError {
    /// Is this a programming error that must stop the caller?
    pub fn is_fatal(&self) -> bool {
        matches!(self, TodoError::UnknownAction(_))
    }
}

pub type Result<T, E = TodoError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unknown_action_is_fatal() {
        assert!(TodoError::UnknownAction("bogus".into()).is_fatal());
        assert!(!TodoError::MalformedAction("x".into()).is_fatal());
        assert!(!TodoError::EmptyName.is_fatal());
        assert!(!TodoError::UnknownFilter("Done".into()).is_fatal());
    }

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            TodoError::UnknownAction("bogus".into()).to_string(),
            "unknown action: bogus"
        );
    }
}
