//! Line commands read from stdin.

use serde_json::Value;
use thiserror::Error;
use todo_core::domain::{Filter, TaskId, TodoError};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Add(String),
    Toggle(TaskId),
    Delete(TaskId),
    Rename(TaskId, String),
    Filter(Filter),
    /// Raw action descriptor, decoded by the core.
    Dispatch(Value),
    Help,
    Quit,
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("'{command}' needs <{arg}>")]
    MissingArgument {
        command: &'static str,
        arg: &'static str,
    },

    #[error(transparent)]
    Filter(#[from] TodoError),

    #[error("dispatch: invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

pub const HELP: &str = "\
commands:
  list                    show the visible tasks
  add <name>              add a task
  toggle <id>             flip completion
  delete <id>             remove a task
  rename <id> <name>      rename a task
  filter <All|Active|Completed>
  dispatch <json>         apply a raw action descriptor
  help
  quit";

impl Command {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        match head {
            "" => Err(ParseError::Empty),
            "list" | "ls" => Ok(Command::List),
            // 空の名前は TaskCommands::add が EmptyName として弾く
            "add" => Ok(Command::Add(rest.to_string())),
            "toggle" => Ok(Command::Toggle(required_id("toggle", rest)?)),
            "delete" | "rm" => Ok(Command::Delete(required_id("delete", rest)?)),
            "rename" => {
                let (id, name) = match rest.split_once(char::is_whitespace) {
                    Some((id, name)) => (id, name.trim()),
                    None => (rest, ""),
                };
                Ok(Command::Rename(required_id("rename", id)?, name.to_string()))
            }
            "filter" => {
                if rest.is_empty() {
                    return Err(ParseError::MissingArgument {
                        command: "filter",
                        arg: "name",
                    });
                }
                Ok(Command::Filter(rest.parse()?))
            }
            "dispatch" => Ok(Command::Dispatch(serde_json::from_str(rest)?)),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }

    /// Does this command change the task list or the filter?
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Command::List | Command::Help | Command::Quit)
    }
}

fn required_id(command: &'static str, raw: &str) -> Result<TaskId, ParseError> {
    if raw.is_empty() {
        return Err(ParseError::MissingArgument { command, arg: "id" });
    }
    Ok(TaskId::new(raw))
}
