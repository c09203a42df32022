//! todo-core
//!
//! Core building blocks for the todomatic task list.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, task, filter, action, errors）
//! - **ports**: 抽象化レイヤー（IdGenerator, Clock, TaskCommands）
//! - **reducer**: `(現在のリスト, Action) -> 次のリスト` の純粋関数
//! - **app**: アプリケーション状態（AppState）と構築（AppBuilder）

pub mod domain;
pub mod ports;
pub mod reducer;
pub mod app;

pub use reducer::{reduce, reduce_descriptor};
