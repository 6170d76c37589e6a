//! 埋め込みドキュメントのローダ
//!
//! 静的テンプレートの `%@` プレースホルダへ設定 JSON を 1 回だけ
//! 差し込み、ベースURLと一緒に埋め込みランタイムへ渡す。

use tracing::debug;
use url::Url;

use crate::error::AppResult;
use crate::types::PlayerConfig;

/// テンプレート内の設定プレースホルダ
pub(crate) const CONFIG_PLACEHOLDER: &str = "%@";

/// origin 指定が無いときの中立なベースURL
const NEUTRAL_BASE_URL: &str = "about:blank";

const PLAYER_DOCUMENT: &str = include_str!("../assets/player.html");

/// 設定を差し込んだドキュメントをレンダリングする
pub fn render_document(config: &PlayerConfig) -> AppResult<String> {
    let json = config.to_document_json()?;
    debug!("[Loader] Rendering player document ({} bytes of config)", json.len());
    Ok(PLAYER_DOCUMENT.replacen(CONFIG_PLACEHOLDER, &json, 1))
}

/// ベースURLの導出: `origin` プレイヤー変数が有効なURLならそれ、
/// そうでなければ空ドキュメントのアドレス
pub fn base_url(config: &PlayerConfig) -> Url {
    config
        .origin()
        .and_then(|origin| Url::parse(origin).ok())
        .unwrap_or_else(|| {
            Url::parse(NEUTRAL_BASE_URL).expect("about:blank is a valid URL")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_replaced_exactly_once() {
        assert_eq!(PLAYER_DOCUMENT.matches(CONFIG_PLACEHOLDER).count(), 1);

        let html = render_document(&PlayerConfig::for_video("abc123")).unwrap();
        assert!(!html.contains(CONFIG_PLACEHOLDER));
        assert!(html.contains("\"videoId\":\"abc123\""));
    }

    #[test]
    fn rendered_config_is_valid_json_in_place() {
        let html = render_document(&PlayerConfig::for_playlist("PL1")).unwrap();
        // テンプレートの代入行から JSON を切り出して検証
        let start = html.find("const config = ").unwrap() + "const config = ".len();
        let end = html[start..].find(";\n").unwrap() + start;
        let parsed: serde_json::Value = serde_json::from_str(&html[start..end]).unwrap();
        assert_eq!(parsed["playerVars"]["list"], "PL1");
    }

    #[test]
    fn base_url_prefers_origin_var() {
        let config = PlayerConfig::default().with_player_var("origin", "https://example.com");
        assert_eq!(base_url(&config).as_str(), "https://example.com/");
    }

    #[test]
    fn base_url_falls_back_to_about_blank() {
        assert_eq!(base_url(&PlayerConfig::default()).as_str(), "about:blank");
        let invalid = PlayerConfig::default().with_player_var("origin", "not a url");
        assert_eq!(base_url(&invalid).as_str(), "about:blank");
    }
}
