//! プレイヤー状態関連の型定義

use serde::{Deserialize, Serialize};

/// 埋め込みプレイヤーの再生状態
///
/// iframe API 側のステートマシンをそのまま写したもの。ワイヤ上は
/// 数値コード (-1, 0, 1, 2, 3, 5) で届く。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerState {
    Unstarted,
    Ended,
    Playing,
    Paused,
    Buffering,
    Queued,
}

impl PlayerState {
    /// 数値コードからのパース。未知の値は `None`（通知もキャッシュ更新もしない）
    pub fn from_wire(data: &str) -> Option<Self> {
        match data {
            "-1" => Some(Self::Unstarted),
            "0" => Some(Self::Ended),
            "1" => Some(Self::Playing),
            "2" => Some(Self::Paused),
            "3" => Some(Self::Buffering),
            "5" => Some(Self::Queued),
            _ => None,
        }
    }
}

/// 再生品質
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackQuality {
    Small,
    Medium,
    Large,
    Hd720,
    Hd1080,
    #[serde(rename = "highres")]
    HighRes,
}

impl PlaybackQuality {
    pub fn from_wire(data: &str) -> Option<Self> {
        match data {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            "hd720" => Some(Self::Hd720),
            "hd1080" => Some(Self::Hd1080),
            "highres" => Some(Self::HighRes),
            _ => None,
        }
    }
}

/// 埋め込みプレイヤーのエラー種別
///
/// iframe API の数値エラーコードを 4 種類に正規化したもの。
/// 105 と 150 はそれぞれ 100 と 101 のエイリアス。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlayerError {
    InvalidParameter,
    Html5,
    VideoNotFound,
    NotEmbeddable,
}

impl PlayerError {
    pub fn from_wire(data: &str) -> Option<Self> {
        match data {
            "2" => Some(Self::InvalidParameter),
            "5" => Some(Self::Html5),
            "100" | "105" => Some(Self::VideoNotFound),
            "101" | "150" => Some(Self::NotEmbeddable),
            _ => None,
        }
    }
}

/// キャッシュ状態のスナップショット
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub ready: bool,
    pub state: PlayerState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<PlaybackQuality>,
    pub play_time: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_codes_parse_exactly() {
        assert_eq!(PlayerState::from_wire("-1"), Some(PlayerState::Unstarted));
        assert_eq!(PlayerState::from_wire("0"), Some(PlayerState::Ended));
        assert_eq!(PlayerState::from_wire("1"), Some(PlayerState::Playing));
        assert_eq!(PlayerState::from_wire("2"), Some(PlayerState::Paused));
        assert_eq!(PlayerState::from_wire("3"), Some(PlayerState::Buffering));
        assert_eq!(PlayerState::from_wire("5"), Some(PlayerState::Queued));
        // 4 は iframe API 側でも未割り当て
        assert_eq!(PlayerState::from_wire("4"), None);
        assert_eq!(PlayerState::from_wire("playing"), None);
        assert_eq!(PlayerState::from_wire(""), None);
    }

    #[test]
    fn quality_strings_parse_exactly() {
        assert_eq!(
            PlaybackQuality::from_wire("small"),
            Some(PlaybackQuality::Small)
        );
        assert_eq!(
            PlaybackQuality::from_wire("hd1080"),
            Some(PlaybackQuality::Hd1080)
        );
        assert_eq!(
            PlaybackQuality::from_wire("highres"),
            Some(PlaybackQuality::HighRes)
        );
        assert_eq!(PlaybackQuality::from_wire("4k"), None);
    }

    #[test]
    fn error_code_mapping_is_exhaustive_and_exact() {
        assert_eq!(
            PlayerError::from_wire("2"),
            Some(PlayerError::InvalidParameter)
        );
        assert_eq!(PlayerError::from_wire("5"), Some(PlayerError::Html5));
        assert_eq!(
            PlayerError::from_wire("100"),
            Some(PlayerError::VideoNotFound)
        );
        assert_eq!(
            PlayerError::from_wire("101"),
            Some(PlayerError::NotEmbeddable)
        );
        assert_eq!(
            PlayerError::from_wire("105"),
            Some(PlayerError::VideoNotFound)
        );
        assert_eq!(
            PlayerError::from_wire("150"),
            Some(PlayerError::NotEmbeddable)
        );
        assert_eq!(PlayerError::from_wire("3"), None);
        assert_eq!(PlayerError::from_wire("151"), None);
    }

    #[test]
    fn quality_wire_form_matches_serde() {
        let json = serde_json::to_string(&PlaybackQuality::HighRes).unwrap();
        assert_eq!(json, "\"highres\"");
        let json = serde_json::to_string(&PlayerError::VideoNotFound).unwrap();
        assert_eq!(json, "\"videoNotFound\"");
    }
}
