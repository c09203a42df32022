//! Ports - 抽象化レイヤー
//!
//! 各 trait は reducer / AppState が外部に依存する箇所（時刻、ID 生成）と、
//! 表示層が AppState を操作する入口（TaskCommands）を定義します。

pub mod clock;
pub mod id_generator;
pub mod commands;

// 主要な trait を再エクスポート
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::commands::{TaskCommands, validate_name};
pub use self::id_generator::{IdGenerator, SequentialIdGenerator, UlidGenerator};
