//! ホスト側コールバック
//!
//! 全スロットが個別に省略可能で、未設定のスロットへの通知は no-op。

use crate::types::{PlaybackQuality, PlayerError, PlayerState};

type Slot<T> = Box<dyn Fn(T) + Send + Sync>;

/// プレイヤーイベントを受け取るコールバック集合
///
/// ```
/// use tauri_youtube_player::PlayerCallbacks;
///
/// let callbacks = PlayerCallbacks::new()
///     .on_ready(|| println!("player ready"))
///     .on_play_time(|seconds| println!("at {seconds}s"));
/// ```
#[derive(Default)]
pub struct PlayerCallbacks {
    on_ready: Option<Box<dyn Fn() + Send + Sync>>,
    on_state_changed: Option<Slot<PlayerState>>,
    on_playback_quality_changed: Option<Slot<PlaybackQuality>>,
    on_error: Option<Slot<PlayerError>>,
    on_play_time: Option<Slot<f64>>,
    on_diagnostic: Option<Slot<String>>,
}

impl PlayerCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_ready(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_ready = Some(Box::new(f));
        self
    }

    pub fn on_state_changed(mut self, f: impl Fn(PlayerState) + Send + Sync + 'static) -> Self {
        self.on_state_changed = Some(Box::new(f));
        self
    }

    pub fn on_playback_quality_changed(
        mut self,
        f: impl Fn(PlaybackQuality) + Send + Sync + 'static,
    ) -> Self {
        self.on_playback_quality_changed = Some(Box::new(f));
        self
    }

    pub fn on_error(mut self, f: impl Fn(PlayerError) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }

    pub fn on_play_time(mut self, f: impl Fn(f64) + Send + Sync + 'static) -> Self {
        self.on_play_time = Some(Box::new(f));
        self
    }

    /// 診断メッセージ（設定のシリアライズ失敗など）の通知先
    pub fn on_diagnostic(mut self, f: impl Fn(String) + Send + Sync + 'static) -> Self {
        self.on_diagnostic = Some(Box::new(f));
        self
    }

    pub(crate) fn emit_ready(&self) {
        if let Some(f) = &self.on_ready {
            f();
        }
    }

    pub(crate) fn emit_state_changed(&self, state: PlayerState) {
        if let Some(f) = &self.on_state_changed {
            f(state);
        }
    }

    pub(crate) fn emit_playback_quality_changed(&self, quality: PlaybackQuality) {
        if let Some(f) = &self.on_playback_quality_changed {
            f(quality);
        }
    }

    pub(crate) fn emit_error(&self, error: PlayerError) {
        if let Some(f) = &self.on_error {
            f(error);
        }
    }

    pub(crate) fn emit_play_time(&self, seconds: f64) {
        if let Some(f) = &self.on_play_time {
            f(seconds);
        }
    }

    pub(crate) fn emit_diagnostic(&self, message: String) {
        if let Some(f) = &self.on_diagnostic {
            f(message);
        }
    }
}

impl std::fmt::Debug for PlayerCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerCallbacks")
            .field("on_ready", &self.on_ready.is_some())
            .field("on_state_changed", &self.on_state_changed.is_some())
            .field(
                "on_playback_quality_changed",
                &self.on_playback_quality_changed.is_some(),
            )
            .field("on_error", &self.on_error.is_some())
            .field("on_play_time", &self.on_play_time.is_some())
            .field("on_diagnostic", &self.on_diagnostic.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[test]
    fn unset_slots_are_no_ops() {
        let callbacks = PlayerCallbacks::new();
        callbacks.emit_ready();
        callbacks.emit_state_changed(PlayerState::Playing);
        callbacks.emit_error(PlayerError::Html5);
        callbacks.emit_play_time(1.0);
        callbacks.emit_diagnostic("nothing listening".to_string());
    }

    #[test]
    fn set_slots_receive_values() {
        let count = Arc::new(AtomicU32::new(0));
        let count_clone = count.clone();
        let callbacks = PlayerCallbacks::new().on_state_changed(move |state| {
            assert_eq!(state, PlayerState::Paused);
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
        callbacks.emit_state_changed(PlayerState::Paused);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
