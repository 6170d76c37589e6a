//! コマンドチャネル: プレイヤー操作をスクリプト文へ変換する

use crate::bridge::event::RESERVED_SCHEME;

/// fire-and-forget のプレイヤーコマンド
///
/// それぞれ `player.<method>(<args>);` ちょうど 1 文に対応する。
/// 埋め込みランタイム内での失敗は表には出ない。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerCommand {
    Play,
    Pause,
    Stop,
    Clear,
    Mute,
    UnMute,
    SeekTo { seconds: f32, allow_seek_ahead: bool },
    SetShuffle(bool),
    PreviousVideo,
    NextVideo,
}

impl PlayerCommand {
    /// 引数は数値/真偽値リテラルのみ。`Display` の出力にスクリプトの
    /// メタ文字が混ざることはないのでエスケープ層は持たない。
    pub fn to_script(&self) -> String {
        match *self {
            Self::Play => "player.playVideo();".to_string(),
            Self::Pause => "player.pauseVideo();".to_string(),
            Self::Stop => "player.stopVideo();".to_string(),
            Self::Clear => "player.clearVideo();".to_string(),
            Self::Mute => "player.mute();".to_string(),
            Self::UnMute => "player.unMute();".to_string(),
            Self::SeekTo {
                seconds,
                allow_seek_ahead,
            } => {
                // 非有限値は JS 側でリテラルにならないため 0 に丸める
                let seconds = if seconds.is_finite() { seconds } else { 0.0 };
                format!("player.seekTo({}, {});", seconds, allow_seek_ahead)
            }
            Self::SetShuffle(shuffle) => format!("player.setShuffle({});", shuffle),
            Self::PreviousVideo => "player.previousVideo();".to_string(),
            Self::NextVideo => "player.nextVideo();".to_string(),
        }
    }
}

/// 結果を返すクエリ
///
/// スクリプト評価は本質的に非同期なので、結果は即値ではなく
/// `queryResult` イベント経由でリクエストIDと一緒に戻ってくる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerQuery {
    Duration,
    CurrentTime,
    VideoUrl,
    EmbedCode,
}

impl PlayerQuery {
    pub fn method(&self) -> &'static str {
        match self {
            Self::Duration => "getDuration",
            Self::CurrentTime => "getCurrentTime",
            Self::VideoUrl => "getVideoUrl",
            Self::EmbedCode => "getVideoEmbedCode",
        }
    }

    /// 結果を予約スキームで送り返す自己実行スクリプトを組み立てる
    pub fn to_script(&self, id: u32) -> String {
        format!(
            "(function () {{ var r; try {{ r = player.{method}(); }} catch (e) {{ r = ''; }} \
             window.location.href = '{scheme}://queryResult?id={id}&data=' + \
             encodeURIComponent(String(r)); }})();",
            method = self.method(),
            scheme = RESERVED_SCHEME,
            id = id,
        )
    }
}
