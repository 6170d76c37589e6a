//! Tauri webview との統合レイヤ
//!
//! プラグインとして組み込み、プレイヤーを紐付けた webview の
//! ナビゲーションを横取りしてイベントチャネルへ流す。レンダリング
//! 済みドキュメントは登録した URI スキームから配信する。

pub mod commands;

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tauri::http;
use tauri::plugin::{Builder as PluginBuilder, TauriPlugin};
use tauri::{Manager, Runtime, WebviewWindow};
use tracing::{debug, warn};
use url::Url;

use crate::bridge::EmbeddedRuntime;
use crate::error::{AppError, AppResult};
use crate::listener::PlayerCallbacks;
use crate::player::YoutubePlayer;

/// レンダリング済みドキュメントの配信に使うスキーム
pub const EMBED_SCHEME: &str = "ytembed";

/// webview ラベル → プレイヤー/ドキュメントの対応表（managed state）
#[derive(Default)]
pub struct PlayerRegistry {
    players: Mutex<HashMap<String, YoutubePlayer>>,
    documents: Mutex<HashMap<String, String>>,
}

impl PlayerRegistry {
    fn register(&self, label: String, player: YoutubePlayer) {
        self.players.lock().insert(label, player);
    }

    pub fn player(&self, label: &str) -> Option<YoutubePlayer> {
        self.players.lock().get(label).cloned()
    }

    /// webview を閉じたときの後始末
    pub fn detach(&self, label: &str) {
        self.players.lock().remove(label);
        self.documents.lock().remove(label);
    }

    fn set_document(&self, label: String, html: String) {
        self.documents.lock().insert(label, html);
    }

    fn document(&self, label: &str) -> Option<String> {
        self.documents.lock().get(label).cloned()
    }
}

/// `EmbeddedRuntime` の webview 実装
struct WebviewRuntime<R: Runtime> {
    webview: WebviewWindow<R>,
}

impl<R: Runtime> EmbeddedRuntime for WebviewRuntime<R> {
    fn run_script(&self, script: &str) -> AppResult<()> {
        self.webview
            .eval(script)
            .map_err(|e| AppError::Script(e.to_string()))
    }

    fn load_document(&self, html: String, base_url: Url) -> AppResult<()> {
        // webview のナビゲーションでは任意の base URL を名乗れないため、
        // ドキュメントは常に埋め込みスキームから配信する。origin は
        // 設定 JSON の中でそのまま iframe API へ届く。
        debug!(
            "[WebviewRuntime] Serving document for '{}' (requested base: {})",
            self.webview.label(),
            base_url
        );

        let registry = self
            .webview
            .app_handle()
            .try_state::<PlayerRegistry>()
            .ok_or_else(|| {
                AppError::InvalidState("youtube-player plugin is not initialized".to_string())
            })?;
        registry.set_document(self.webview.label().to_string(), html);

        self.webview
            .clone()
            .navigate(embed_url())
            .map_err(|e| AppError::Load(e.to_string()))
    }
}

impl YoutubePlayer {
    /// プレイヤーを webview ウィンドウへ紐付ける
    ///
    /// 以後この webview のナビゲーションはプラグインが横取りし、
    /// コマンドは `WebviewWindow::eval` で注入される。
    pub fn attach<R: Runtime>(
        webview: WebviewWindow<R>,
        callbacks: PlayerCallbacks,
    ) -> AppResult<Self> {
        let app = webview.app_handle().clone();
        let label = webview.label().to_string();

        let registry = app.try_state::<PlayerRegistry>().ok_or_else(|| {
            AppError::InvalidState("youtube-player plugin is not initialized".to_string())
        })?;

        let runtime = Arc::new(WebviewRuntime { webview });
        let player = YoutubePlayer::new(runtime, callbacks);
        registry.register(label, player.clone());
        Ok(player)
    }
}

/// プラグインの初期化
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    PluginBuilder::new("youtube-player")
        .invoke_handler(tauri::generate_handler![
            commands::load_video,
            commands::load_playlist,
            commands::play,
            commands::pause,
            commands::stop,
            commands::seek,
            commands::mute,
            commands::unmute,
            commands::set_shuffle,
            commands::previous_video,
            commands::next_video,
            commands::get_player_state,
            commands::get_duration,
            commands::get_current_time,
        ])
        .setup(|app, _api| {
            app.manage(PlayerRegistry::default());
            Ok(())
        })
        .on_navigation(|webview, url| {
            let registry = webview.app_handle().state::<PlayerRegistry>();
            match registry.player(webview.label()) {
                Some(player) => player.handle_navigation(url),
                // プレイヤーが紐付いていない webview には干渉しない
                None => true,
            }
        })
        .register_uri_scheme_protocol(EMBED_SCHEME, |ctx, _request| {
            let registry = ctx.app_handle().state::<PlayerRegistry>();
            let response = match registry.document(ctx.webview_label()) {
                Some(html) => http::Response::builder()
                    .header(http::header::CONTENT_TYPE, "text/html; charset=utf-8")
                    .body(html.into_bytes()),
                None => {
                    warn!(
                        "[WebviewRuntime] No document loaded for webview '{}'",
                        ctx.webview_label()
                    );
                    http::Response::builder()
                        .status(http::StatusCode::NOT_FOUND)
                        .body(Vec::new())
                }
            };
            response.expect("static response parts are valid")
        })
        .build()
}

fn embed_url() -> Url {
    #[cfg(any(target_os = "windows", target_os = "android"))]
    let raw = format!("http://{EMBED_SCHEME}.localhost/");
    #[cfg(not(any(target_os = "windows", target_os = "android")))]
    let raw = format!("{EMBED_SCHEME}://localhost/");
    Url::parse(&raw).expect("embed scheme URL is valid")
}
