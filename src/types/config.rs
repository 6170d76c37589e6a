//! プレイヤー設定関連の型定義

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AppResult;

/// iframe API のイベント名 → 埋め込みドキュメント内のコールバック関数名
///
/// 内部固定のマッピングで、利用側からは変更できない。
const EVENT_BINDINGS: [(&str, &str); 4] = [
    ("onReady", "onReady"),
    ("onStateChange", "onStateChange"),
    ("onPlaybackQualityChange", "onPlaybackQualityChange"),
    ("onError", "onPlayerError"),
];

/// 埋め込みプレイヤーへ渡す設定
///
/// JSON にシリアライズされてテンプレートへ 1 回だけ埋め込まれる。
/// 設定を変えたいときは再シリアライズして `load` し直すしかない
/// （差分での再設定は存在しない）。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerConfig {
    /// 常に "100%"（情報提供のみ、実寸はビューに従う）
    pub width: String,
    pub height: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    /// 埋め込みプレイヤーライブラリへそのまま渡される変数
    /// （listType, list, origin など）
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub player_vars: Map<String, Value>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            width: "100%".to_string(),
            height: "100%".to_string(),
            video_id: None,
            player_vars: Map::new(),
        }
    }
}

impl PlayerConfig {
    /// 単一動画用の設定。`listType`/`list` には触らない。
    pub fn for_video(video_id: impl Into<String>) -> Self {
        Self {
            video_id: Some(video_id.into()),
            ..Self::default()
        }
    }

    /// プレイリスト用の設定。`videoId` は持たない。
    pub fn for_playlist(playlist_id: impl Into<String>) -> Self {
        let mut config = Self::default();
        config
            .player_vars
            .insert("listType".to_string(), Value::from("playlist"));
        config
            .player_vars
            .insert("list".to_string(), Value::from(playlist_id.into()));
        config
    }

    pub fn with_player_var(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.player_vars.insert(key.into(), value.into());
        self
    }

    /// `origin` プレイヤー変数（ベースURLの導出に使う）
    pub fn origin(&self) -> Option<&str> {
        self.player_vars.get("origin").and_then(Value::as_str)
    }

    /// テンプレートへ埋め込む JSON を組み立てる
    ///
    /// 固定の `events` マッピングをここで合成する。
    pub fn to_document_json(&self) -> AppResult<String> {
        let mut doc = serde_json::to_value(self)?;
        let events: Map<String, Value> = EVENT_BINDINGS
            .iter()
            .map(|(event, callback)| ((*event).to_string(), Value::from(*callback)))
            .collect();
        doc["events"] = Value::Object(events);
        Ok(serde_json::to_string(&doc)?)
    }
}
