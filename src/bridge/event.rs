//! イベントチャネル: 予約スキームのナビゲーションをイベントへ復号する

use percent_encoding::percent_decode_str;
use tracing::debug;
use url::Url;

use crate::types::{PlaybackQuality, PlayerError, PlayerState};

/// ネイティブ/スクリプト間の合図にだけ使う予約スキーム。
/// 実際のナビゲーションとして解決されることはない。
pub const RESERVED_SCHEME: &str = "ytplayer";

/// 埋め込みランタイムから届くイベント
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    IframeApiReady,
    Ready,
    StateChange(PlayerState),
    PlaybackQualityChange(PlaybackQuality),
    Error(PlayerError),
    PlayTime(f64),
    /// 非同期クエリの戻り値（内部イベント）
    QueryResult { id: u32, value: String },
}

/// 予約スキームかどうか。予約スキームのナビゲーションは
/// イベント名が未知でも必ずキャンセルされる。
pub fn is_reserved(url: &Url) -> bool {
    url.scheme() == RESERVED_SCHEME
}

/// 予約スキームURLをイベントへ復号する
///
/// どの段階の失敗も黙殺（`None`）。イベント名はホスト部で、
/// `ytplayer` は非特殊スキームなので大文字小文字は保たれる。
pub fn decode(url: &Url) -> Option<PlayerEvent> {
    if !is_reserved(url) {
        return None;
    }

    let name = url.host_str().unwrap_or_default();
    let query = url.query().unwrap_or_default();

    match name {
        "iframeAPIReady" => Some(PlayerEvent::IframeApiReady),
        "ready" => Some(PlayerEvent::Ready),
        "stateChange" => query_param(query, "data")
            .and_then(|data| PlayerState::from_wire(&data))
            .map(PlayerEvent::StateChange),
        "playbackQualityChange" => query_param(query, "data")
            .and_then(|data| PlaybackQuality::from_wire(&data))
            .map(PlayerEvent::PlaybackQualityChange),
        "error" => query_param(query, "data")
            .and_then(|data| PlayerError::from_wire(&data))
            .map(PlayerEvent::Error),
        "playTime" => query_param(query, "data")
            .and_then(|data| data.parse::<f64>().ok())
            .map(PlayerEvent::PlayTime),
        "queryResult" => {
            let id = query_param(query, "id")?.parse::<u32>().ok()?;
            let value = query_param(query, "data")?;
            Some(PlayerEvent::QueryResult { id, value })
        }
        other => {
            debug!("[EventChannel] Ignoring unknown event '{}'", other);
            None
        }
    }
}

/// クエリ文字列から単一パラメータを取り出す
///
/// `&` で区切り、各ペアは最初の `=` でだけ分割する。`=` を含まない
/// ペアは黙って捨てる。値はパーセントデコードされる。
fn query_param(query: &str, key: &str) -> Option<String> {
    for pair in query.split('&') {
        if let Some((k, v)) = pair.split_once('=') {
            if k == key {
                return Some(percent_decode_str(v).decode_utf8_lossy().into_owned());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_str(s: &str) -> Option<PlayerEvent> {
        decode(&Url::parse(s).unwrap())
    }

    #[test]
    fn all_event_names_decode() {
        assert_eq!(
            decode_str("ytplayer://iframeAPIReady"),
            Some(PlayerEvent::IframeApiReady)
        );
        assert_eq!(decode_str("ytplayer://ready"), Some(PlayerEvent::Ready));
        assert_eq!(
            decode_str("ytplayer://stateChange?data=1"),
            Some(PlayerEvent::StateChange(PlayerState::Playing))
        );
        assert_eq!(
            decode_str("ytplayer://playbackQualityChange?data=hd720"),
            Some(PlayerEvent::PlaybackQualityChange(PlaybackQuality::Hd720))
        );
        assert_eq!(
            decode_str("ytplayer://error?data=100"),
            Some(PlayerEvent::Error(PlayerError::VideoNotFound))
        );
        assert_eq!(
            decode_str("ytplayer://playTime?data=12.5"),
            Some(PlayerEvent::PlayTime(12.5))
        );
    }

    #[test]
    fn unknown_event_names_are_ignored() {
        assert_eq!(decode_str("ytplayer://somethingElse?data=1"), None);
        // ホスト部の大文字小文字は区別される
        assert_eq!(decode_str("ytplayer://statechange?data=1"), None);
    }

    #[test]
    fn malformed_data_yields_nothing() {
        assert_eq!(decode_str("ytplayer://stateChange?data=99"), None);
        assert_eq!(decode_str("ytplayer://stateChange?data="), None);
        assert_eq!(decode_str("ytplayer://stateChange"), None);
        assert_eq!(decode_str("ytplayer://playbackQualityChange?data=4k"), None);
        assert_eq!(decode_str("ytplayer://playTime?data=fast"), None);
        assert_eq!(decode_str("ytplayer://error?data=42"), None);
    }

    #[test]
    fn non_reserved_urls_are_not_decoded() {
        assert_eq!(decode_str("https://www.youtube.com/watch?v=abc"), None);
        assert!(!is_reserved(&Url::parse("https://example.com").unwrap()));
        assert!(is_reserved(&Url::parse("ytplayer://ready").unwrap()));
    }

    #[test]
    fn query_result_carries_id_and_value() {
        assert_eq!(
            decode_str("ytplayer://queryResult?id=3&data=42.5"),
            Some(PlayerEvent::QueryResult {
                id: 3,
                value: "42.5".to_string()
            })
        );
        // id が無い/壊れている場合は黙殺
        assert_eq!(decode_str("ytplayer://queryResult?data=42.5"), None);
        assert_eq!(decode_str("ytplayer://queryResult?id=x&data=1"), None);
    }

    #[test]
    fn query_values_are_percent_decoded() {
        let event =
            decode_str("ytplayer://queryResult?id=1&data=https%3A%2F%2Fyoutu.be%2Fabc123");
        assert_eq!(
            event,
            Some(PlayerEvent::QueryResult {
                id: 1,
                value: "https://youtu.be/abc123".to_string()
            })
        );
    }

    #[test]
    fn query_split_is_on_first_equals_only() {
        assert_eq!(query_param("data=a=b=c", "data"), Some("a=b=c".to_string()));
        // `=` を含まないペアは落ちる
        assert_eq!(query_param("data", "data"), None);
        assert_eq!(query_param("junk&data=1", "data"), Some("1".to_string()));
        // 他のパラメータは無視される
        assert_eq!(query_param("x=9&data=2&y=3", "data"), Some("2".to_string()));
    }
}
