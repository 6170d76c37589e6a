//! 埋め込み YouTube iframe プレイヤーのリモコンブリッジ
//!
//! 外部ホストされた web プレイヤーを webview 内に抱え、ネイティブ側
//! から play/pause/seek 等を送り、プレイヤーのライフサイクルイベント
//! をコールバックで受け取るための薄いブリッジ。
//!
//! コアはランタイム非依存（[`bridge::EmbeddedRuntime`] を実装すれば
//! どの埋め込みランタイムでも動く）。`tauri` フィーチャを有効にすると
//! Tauri プラグインとしての統合（[`webview`]）が付いてくる。

pub mod bridge;
mod error;
mod listener;
pub mod loader;
mod player;
mod state;
mod types;
mod video_url;

#[cfg(feature = "tauri")]
pub mod webview;

pub use error::{AppError, AppResult};
pub use listener::PlayerCallbacks;
pub use player::YoutubePlayer;
pub use types::{PlaybackQuality, PlayerConfig, PlayerError, PlayerSnapshot, PlayerState};
pub use video_url::extract_video_id;

#[cfg(feature = "tauri")]
pub use webview::{init, PlayerRegistry};

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize tracing/logging
///
/// ホストアプリが自前の subscriber を持たない場合の補助。
/// RUST_LOG env controls log level: error, warn, info, debug, trace
/// Example: RUST_LOG=tauri_youtube_player=debug
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
