//! Settings: defaults, then `todo.toml`, then environment, then CLI flags.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use todo_core::domain::{Filter, Task};

pub const DEFAULT_CONFIG_PATH: &str = "todo.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub filter: Filter,
    pub log_level: String,
    /// Start from the built-in seed tasks when `tasks` is not given.
    pub seed: bool,
    /// Replacement initial list.
    pub tasks: Option<Vec<Task>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            filter: Filter::All,
            log_level: "warn".into(),
            seed: true,
            tasks: None,
        }
    }
}

impl Settings {
    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        toml::from_str(raw).context("parse settings")
    }

    /// Overlay `TODO_FILTER` and `TODO_LOG` from `lookup`.
    pub fn apply_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        if let Some(v) = lookup("TODO_FILTER") {
            self.filter = v.parse().context("TODO_FILTER")?;
        }
        if let Some(v) = lookup("TODO_LOG") {
            self.log_level = v;
        }
        Ok(self)
    }

    /// Initial task list implied by these settings.
    pub fn initial_tasks(&self) -> Option<Vec<Task>> {
        match (&self.tasks, self.seed) {
            (Some(tasks), _) => Some(tasks.clone()),
            (None, true) => None,
            (None, false) => Some(Vec::new()),
        }
    }
}

/// Load settings from `path`, or from `todo.toml` if it exists.
///
/// An explicit `path` that cannot be read is an error; a missing default file is not.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let settings = match path {
        Some(path) => read_settings(path, true)?,
        None => read_settings(Path::new(DEFAULT_CONFIG_PATH), false)?,
    };
    settings.apply_env(|key| std::env::var(key).ok())
}

/// Read one settings file. Only `NotFound` on an optional file falls back to defaults.
fn read_settings(path: &Path, required: bool) -> anyhow::Result<Settings> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if !required && e.kind() == io::ErrorKind::NotFound => {
            return Ok(Settings::default());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("read config {}", path.display()));
        }
    };
    Settings::from_toml_str(&raw).with_context(|| format!("config {}", path.display()))
}
