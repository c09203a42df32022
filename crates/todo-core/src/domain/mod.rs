//! Domain model (IDs, tasks, filters, actions, errors).

pub mod ids;
pub mod task;
pub mod filter;
pub mod action;
pub mod errors;

pub use action::Action;
pub use errors::{Result, TodoError};
pub use filter::{Filter, filter_tasks};
pub use ids::TaskId;
pub use task::{Task, seed_tasks};
