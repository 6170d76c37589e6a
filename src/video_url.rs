//! 動画URLからの動画ID抽出

use url::Url;

/// 長い形式 (`?v=<id>`) と短縮ドメインの形式 (`youtu.be/<id>`) の
/// どちらからも動画IDを取り出す。どちらでもなければ `None`。
pub fn extract_video_id(video_url: &str) -> Option<String> {
    let parsed = Url::parse(video_url).ok()?;
    let host = parsed.host_str()?;

    if host == "youtu.be" || host.ends_with(".youtu.be") {
        let id = parsed.path_segments()?.find(|segment| !segment.is_empty())?;
        return Some(id.to_string());
    }

    parsed
        .query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned())
        .filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_form_yields_id() {
        assert_eq!(
            extract_video_id("https://youtube.com/watch?v=abc123"),
            Some("abc123".to_string())
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=abc123&t=42"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn short_form_yields_id() {
        assert_eq!(
            extract_video_id("https://youtu.be/abc123"),
            Some("abc123".to_string())
        );
        assert_eq!(
            extract_video_id("https://youtu.be/abc123?t=30"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn neither_form_yields_nothing() {
        assert_eq!(extract_video_id("https://youtube.com/watch"), None);
        assert_eq!(extract_video_id("https://youtube.com/watch?v="), None);
        assert_eq!(extract_video_id("https://youtu.be/"), None);
        assert_eq!(extract_video_id("https://example.com/video/abc123"), None);
        assert_eq!(extract_video_id("not a url"), None);
    }
}
