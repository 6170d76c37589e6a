//! 埋め込み YouTube プレイヤービューの公開サーフェス

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, info, warn};
use url::Url;

use crate::bridge::command::{PlayerCommand, PlayerQuery};
use crate::bridge::event::{self, PlayerEvent};
use crate::bridge::EmbeddedRuntime;
use crate::error::{AppError, AppResult};
use crate::listener::PlayerCallbacks;
use crate::loader;
use crate::state::SharedState;
use crate::types::{PlaybackQuality, PlayerConfig, PlayerSnapshot, PlayerState};
use crate::video_url;

struct PlayerInner {
    runtime: Arc<dyn EmbeddedRuntime>,
    shared: SharedState,
    callbacks: PlayerCallbacks,
}

/// 埋め込み YouTube iframe プレイヤーへのリモコン
///
/// クローン可能なハンドル。コマンドはスクリプト注入の一方通行、
/// イベントは `handle_navigation` に渡ってくる予約スキームURLの
/// 横取りで届く。
#[derive(Clone)]
pub struct YoutubePlayer {
    inner: Arc<PlayerInner>,
}

impl YoutubePlayer {
    pub fn new(runtime: Arc<dyn EmbeddedRuntime>, callbacks: PlayerCallbacks) -> Self {
        Self {
            inner: Arc::new(PlayerInner {
                runtime,
                shared: SharedState::new(),
                callbacks,
            }),
        }
    }

    // ---- ロード ----

    pub fn load_video(&self, video_id: &str) -> AppResult<()> {
        self.load(PlayerConfig::for_video(video_id))
    }

    pub fn load_playlist(&self, playlist_id: &str) -> AppResult<()> {
        self.load(PlayerConfig::for_playlist(playlist_id))
    }

    /// 設定を差し込んだドキュメントを埋め込みランタイムへ読み込む
    ///
    /// キャッシュ状態はロードのたびに作り直される。設定の
    /// シリアライズに失敗すると `Err` を返しつつ診断コールバックにも
    /// 通知する。
    pub fn load(&self, config: PlayerConfig) -> AppResult<()> {
        self.inner.shared.reset();

        let html = match loader::render_document(&config) {
            Ok(html) => html,
            Err(e) => {
                self.inner
                    .callbacks
                    .emit_diagnostic(format!("Failed to serialize player configuration: {e}"));
                return Err(e);
            }
        };

        let base = loader::base_url(&config);
        info!("[YoutubePlayer] Loading player document (base: {})", base);
        self.inner.runtime.load_document(html, base)
    }

    // ---- fire-and-forget コマンド ----

    pub fn play(&self) -> AppResult<()> {
        self.command(PlayerCommand::Play)
    }

    pub fn pause(&self) -> AppResult<()> {
        self.command(PlayerCommand::Pause)
    }

    pub fn stop(&self) -> AppResult<()> {
        self.command(PlayerCommand::Stop)
    }

    pub fn clear(&self) -> AppResult<()> {
        self.command(PlayerCommand::Clear)
    }

    pub fn mute(&self) -> AppResult<()> {
        self.command(PlayerCommand::Mute)
    }

    pub fn un_mute(&self) -> AppResult<()> {
        self.command(PlayerCommand::UnMute)
    }

    pub fn seek_to(&self, seconds: f32, allow_seek_ahead: bool) -> AppResult<()> {
        self.command(PlayerCommand::SeekTo {
            seconds,
            allow_seek_ahead,
        })
    }

    pub fn set_shuffle(&self, shuffle: bool) -> AppResult<()> {
        self.command(PlayerCommand::SetShuffle(shuffle))
    }

    pub fn previous_video(&self) -> AppResult<()> {
        self.command(PlayerCommand::PreviousVideo)
    }

    pub fn next_video(&self) -> AppResult<()> {
        self.command(PlayerCommand::NextVideo)
    }

    fn command(&self, command: PlayerCommand) -> AppResult<()> {
        let script = command.to_script();
        debug!("[YoutubePlayer] Running command: {}", script);
        self.inner.runtime.run_script(&script)
    }

    // ---- 非同期クエリ ----
    //
    // スクリプト評価は非同期なので即値は返せない。呼び出し時点で
    // 完了待ちスロットの登録とスクリプト注入まで済ませ、待つところ
    // だけを Future にして返す。

    /// 動画の長さ（秒）
    pub fn duration(&self) -> impl Future<Output = AppResult<f64>> {
        let pending = self.begin_query(PlayerQuery::Duration);
        async move { parse_seconds(await_query(pending).await?) }
    }

    /// 現在の再生位置（秒）
    pub fn current_time(&self) -> impl Future<Output = AppResult<f64>> {
        let pending = self.begin_query(PlayerQuery::CurrentTime);
        async move { parse_seconds(await_query(pending).await?) }
    }

    /// 再生中の動画のURL
    pub fn video_url(&self) -> impl Future<Output = AppResult<String>> {
        let pending = self.begin_query(PlayerQuery::VideoUrl);
        async move { await_query(pending).await }
    }

    /// 埋め込み用の embed コード
    pub fn video_embed_code(&self) -> impl Future<Output = AppResult<String>> {
        let pending = self.begin_query(PlayerQuery::EmbedCode);
        async move { await_query(pending).await }
    }

    /// 再生中の動画のID（動画URLから導出。どちらの形式でもなければ `None`）
    pub fn video_id(&self) -> impl Future<Output = AppResult<Option<String>>> {
        let pending = self.begin_query(PlayerQuery::VideoUrl);
        async move {
            let url = await_query(pending).await?;
            Ok(video_url::extract_video_id(&url))
        }
    }

    fn begin_query(
        &self,
        query: PlayerQuery,
    ) -> AppResult<tokio::sync::oneshot::Receiver<String>> {
        let (id, rx) = self.inner.shared.register_query();
        let script = query.to_script(id);
        debug!("[YoutubePlayer] Running query {} (id {})", query.method(), id);
        if let Err(e) = self.inner.runtime.run_script(&script) {
            self.inner.shared.abandon_query(id);
            return Err(e);
        }
        Ok(rx)
    }

    // ---- キャッシュ状態 ----

    /// 埋め込みランタイムから最初の API ready 合図が届いたか
    pub fn is_ready(&self) -> bool {
        self.inner.shared.is_ready()
    }

    /// 最後に観測した再生状態
    pub fn state(&self) -> PlayerState {
        self.inner.shared.state()
    }

    /// 最後に観測した再生品質
    pub fn quality(&self) -> Option<PlaybackQuality> {
        self.inner.shared.quality()
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        self.inner.shared.snapshot()
    }

    // ---- イベントチャネル ----

    /// 埋め込みランタイムのナビゲーション試行を観測する
    ///
    /// 戻り値はナビゲーションを通すかどうか。予約スキームは
    /// イベントとして処理して必ずキャンセルし（イベント名が未知でも）、
    /// それ以外は手を付けずに通す。
    pub fn handle_navigation(&self, url: &Url) -> bool {
        if !event::is_reserved(url) {
            return true;
        }
        if let Some(ev) = event::decode(url) {
            self.dispatch(ev);
        }
        false
    }

    fn dispatch(&self, event: PlayerEvent) {
        match event {
            PlayerEvent::IframeApiReady => {
                if self.inner.shared.mark_ready() {
                    debug!("[YoutubePlayer] iframe API ready");
                }
            }
            PlayerEvent::Ready => self.inner.callbacks.emit_ready(),
            PlayerEvent::StateChange(state) => {
                self.inner.shared.set_state(state);
                self.inner.callbacks.emit_state_changed(state);
            }
            PlayerEvent::PlaybackQualityChange(quality) => {
                self.inner.shared.set_quality(quality);
                self.inner.callbacks.emit_playback_quality_changed(quality);
            }
            PlayerEvent::Error(error) => {
                warn!("[YoutubePlayer] Player error: {:?}", error);
                self.inner.callbacks.emit_error(error);
            }
            PlayerEvent::PlayTime(seconds) => {
                self.inner.shared.set_play_time(seconds);
                self.inner.callbacks.emit_play_time(seconds);
            }
            PlayerEvent::QueryResult { id, value } => {
                if !self.inner.shared.resolve_query(id, value) {
                    debug!("[YoutubePlayer] Dropping result for unknown query id {}", id);
                }
            }
        }
    }
}

impl std::fmt::Debug for YoutubePlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YoutubePlayer")
            .field("snapshot", &self.snapshot())
            .finish()
    }
}

async fn await_query(
    pending: AppResult<tokio::sync::oneshot::Receiver<String>>,
) -> AppResult<String> {
    pending?
        .await
        .map_err(|_| AppError::Bridge("query abandoned before a result arrived".to_string()))
}

fn parse_seconds(raw: String) -> AppResult<f64> {
    raw.parse::<f64>()
        .map_err(|_| AppError::Parse(format!("expected seconds, got '{raw}'")))
}
