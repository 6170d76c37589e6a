//! プレイヤーのキャッシュ状態と進行中クエリの管理

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

use parking_lot::Mutex;
use tokio::sync::oneshot;

use crate::types::{PlaybackQuality, PlayerSnapshot, PlayerState};

/// 埋め込みランタイムから届いた最新の状態のキャッシュ
///
/// 状態遷移そのものは埋め込みプレイヤー側で起きる。ここでは最後に
/// 観測した値を保持するだけで、`load` のたびに全て作り直される。
pub struct SharedState {
    ready: Mutex<bool>,
    state: Mutex<PlayerState>,
    quality: Mutex<Option<PlaybackQuality>>,
    play_time: Mutex<f64>,
    pending_queries: Mutex<HashMap<u32, oneshot::Sender<String>>>,
    next_query_id: AtomicU32,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            ready: Mutex::new(false),
            state: Mutex::new(PlayerState::Unstarted),
            quality: Mutex::new(None),
            play_time: Mutex::new(0.0),
            pending_queries: Mutex::new(HashMap::new()),
            next_query_id: AtomicU32::new(1),
        }
    }

    /// ロード時のリセット。保留中のクエリは送信側が drop されるので
    /// 待っている Future には `Bridge` エラーが返る。
    pub fn reset(&self) {
        *self.ready.lock() = false;
        *self.state.lock() = PlayerState::Unstarted;
        *self.quality.lock() = None;
        *self.play_time.lock() = 0.0;
        self.pending_queries.lock().clear();
        // クエリIDはロードをまたいで一意のままにする
    }

    /// readiness フラグを立てる。初回の遷移だったときのみ true を返す。
    pub fn mark_ready(&self) -> bool {
        let mut ready = self.ready.lock();
        let first = !*ready;
        *ready = true;
        first
    }

    pub fn is_ready(&self) -> bool {
        *self.ready.lock()
    }

    pub fn set_state(&self, state: PlayerState) {
        *self.state.lock() = state;
    }

    pub fn state(&self) -> PlayerState {
        *self.state.lock()
    }

    pub fn set_quality(&self, quality: PlaybackQuality) {
        *self.quality.lock() = Some(quality);
    }

    pub fn quality(&self) -> Option<PlaybackQuality> {
        *self.quality.lock()
    }

    pub fn set_play_time(&self, seconds: f64) {
        *self.play_time.lock() = seconds;
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            ready: self.is_ready(),
            state: self.state(),
            quality: self.quality(),
            play_time: *self.play_time.lock(),
        }
    }

    /// 新しいクエリIDを払い出し、完了待ちのスロットを登録する
    pub fn register_query(&self) -> (u32, oneshot::Receiver<String>) {
        let id = self.next_query_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = oneshot::channel();
        self.pending_queries.lock().insert(id, tx);
        (id, rx)
    }

    /// スクリプト注入に失敗したクエリの後始末
    pub fn abandon_query(&self, id: u32) {
        self.pending_queries.lock().remove(&id);
    }

    /// queryResult イベントで届いた値を対応する Future へ渡す
    pub fn resolve_query(&self, id: u32, value: String) -> bool {
        match self.pending_queries.lock().remove(&id) {
            Some(tx) => tx.send(value).is_ok(),
            None => false,
        }
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}
