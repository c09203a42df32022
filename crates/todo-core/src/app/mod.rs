//! App - アプリケーション層
//!
//! # 主要コンポーネント
//! - **AppState**: Task List と Filter を保持する唯一の状態ホルダ
//! - **AppBuilder**: AppState の構築と起動時検証

pub mod builder;
pub mod state;

pub use self::builder::{AppBuilder, BuildError};
pub use self::state::AppState;
