//! Filter - 表示用の部分列を導出する述語
//!
//! Filter は Task List の外側にある一時的な状態で、保存されたリストには
//! 一切影響しません。表示のたびに `filter_tasks` で再計算します。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::TodoError;
use super::task::Task;

/// Status filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Filter names in display order.
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn name(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Does `task` belong to this view?
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Filter {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Filter::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| TodoError::UnknownFilter(s.to_string()))
    }
}

impl TryFrom<String> for Filter {
    type Error = TodoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Filter> for String {
    fn from(filter: Filter) -> Self {
        filter.name().to_string()
    }
}

/// Subsequence of `tasks` selected by `filter`, order preserved.
pub fn filter_tasks(tasks: &[Task], filter: Filter) -> Vec<&Task> {
    tasks.iter().filter(|task| filter.matches(task)).collect()
}
