//! 型定義モジュール

mod config;
mod player;

// 全ての型を再エクスポート
pub use config::*;
pub use player::*;
