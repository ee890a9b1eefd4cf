use serde::{Deserialize, Serialize};
use url::Url;

/// A YouTube video identifier extracted from a link.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoLinkError {
    Parse(String),
    UnsupportedHost(String),
    MissingId,
    InvalidId(String),
}

impl std::fmt::Display for VideoLinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VideoLinkError::Parse(msg) => write!(f, "video link is not a valid URL: {msg}"),
            VideoLinkError::UnsupportedHost(host) => write!(f, "unsupported video host: {host:?}"),
            VideoLinkError::MissingId => write!(f, "video link carries no video id"),
            VideoLinkError::InvalidId(id) => write!(f, "video id has unexpected characters: {id:?}"),
        }
    }
}

impl std::error::Error for VideoLinkError {}

/// Extract the video id from the link shapes YouTube hands out:
///
/// - `https://youtu.be/{id}`
/// - `https://www.youtube.com/shorts/{id}` and `.../embed/{id}`
/// - `https://www.youtube.com/watch?v={id}`
pub fn parse_video_link(href: &str) -> Result<VideoId, VideoLinkError> {
    let url = Url::parse(href.trim()).map_err(|e| VideoLinkError::Parse(e.to_string()))?;
    let host = url.host_str().unwrap_or_default();

    let id = if host == "youtu.be" {
        url.path_segments()
            .and_then(|mut segments| segments.next())
            .map(str::to_owned)
    } else if host.contains("youtube.com") {
        let segments: Vec<&str> = url
            .path_segments()
            .map(|s| s.filter(|seg| !seg.is_empty()).collect())
            .unwrap_or_default();
        match segments.first() {
            Some(&"shorts" | &"embed") => segments.get(1).map(|s| (*s).to_owned()),
            _ => url
                .query_pairs()
                .find(|(k, _)| k == "v")
                .map(|(_, v)| v.into_owned()),
        }
    } else {
        return Err(VideoLinkError::UnsupportedHost(host.to_owned()));
    };

    let id = id.filter(|id| !id.is_empty()).ok_or(VideoLinkError::MissingId)?;
    if !id
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    {
        return Err(VideoLinkError::InvalidId(id));
    }
    Ok(VideoId(id))
}

/// Like [`parse_video_link`], for callers that only care whether a link is usable.
pub fn video_id(href: &str) -> Option<VideoId> {
    match parse_video_link(href) {
        Ok(id) => Some(id),
        Err(err) => {
            tracing::debug!(href, %err, "video link ignored");
            None
        }
    }
}

/// Resolve a trigger link: its `href` when that names a video, else the
/// video-source attribute. Script-driven triggers often carry `href="#"`.
pub fn video_id_from_link(href: Option<&str>, data_src: Option<&str>) -> Option<VideoId> {
    href.and_then(video_id).or_else(|| data_src.and_then(video_id))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    pub embed_base: String,
    /// Query parameters appended to every embed URL, in order.
    pub player_params: Vec<(String, String)>,
    pub thumbnail_base: String,
    /// Thumbnail file names, best first.
    pub thumbnail_variants: Vec<String>,
    pub default_title: String,
}

impl Default for VideoConfig {
    fn default() -> Self {
        let param = |k: &str, v: &str| (k.to_owned(), v.to_owned());
        Self {
            embed_base: "https://www.youtube.com/embed/".to_owned(),
            player_params: vec![
                param("autoplay", "1"),
                param("rel", "0"),
                param("playsinline", "1"),
                param("modestbranding", "1"),
            ],
            thumbnail_base: "https://img.youtube.com/vi/".to_owned(),
            thumbnail_variants: vec!["maxresdefault.jpg".to_owned(), "hqdefault.jpg".to_owned()],
            default_title: "YouTube video".to_owned(),
        }
    }
}

impl VideoConfig {
    pub fn embed_url(&self, id: &VideoId) -> String {
        let mut url = format!("{}{}", self.embed_base, id);
        if !self.player_params.is_empty() {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(self.player_params.iter())
                .finish();
            url.push('?');
            url.push_str(&query);
        }
        url
    }

    pub fn thumbnail_urls(&self, id: &VideoId) -> Vec<String> {
        self.thumbnail_variants
            .iter()
            .map(|variant| format!("{}{}/{}", self.thumbnail_base, id, variant))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{VideoConfig, VideoLinkError, parse_video_link, video_id, video_id_from_link};
    use pretty_assertions::assert_eq;

    fn id(href: &str) -> Option<String> {
        video_id(href).map(|v| v.as_str().to_owned())
    }

    #[test]
    fn extracts_ids_from_known_shapes() {
        assert_eq!(id("https://www.youtube.com/watch?v=abc123"), Some("abc123".into()));
        assert_eq!(id("https://youtu.be/abc123"), Some("abc123".into()));
        assert_eq!(id("https://www.youtube.com/shorts/abc123"), Some("abc123".into()));
        assert_eq!(id("https://www.youtube.com/embed/abc123"), Some("abc123".into()));
        assert_eq!(id("https://m.youtube.com/watch?feature=share&v=x_Y-9"), Some("x_Y-9".into()));
        assert_eq!(id("https://youtu.be/abc123?t=42"), Some("abc123".into()));
    }

    #[test]
    fn unrelated_hosts_yield_nothing() {
        assert_eq!(id("https://vimeo.com/123456"), None);
        assert_eq!(
            parse_video_link("https://example.com/watch?v=abc123"),
            Err(VideoLinkError::UnsupportedHost("example.com".into()))
        );
    }

    #[test]
    fn malformed_links_yield_nothing() {
        assert!(matches!(parse_video_link("not a url"), Err(VideoLinkError::Parse(_))));
        assert!(matches!(parse_video_link("/relative/path"), Err(VideoLinkError::Parse(_))));
        assert_eq!(parse_video_link("https://youtu.be/"), Err(VideoLinkError::MissingId));
        assert_eq!(
            parse_video_link("https://www.youtube.com/shorts/"),
            Err(VideoLinkError::MissingId)
        );
        assert_eq!(
            parse_video_link("https://www.youtube.com/watch"),
            Err(VideoLinkError::MissingId)
        );
        assert!(matches!(
            parse_video_link("https://www.youtube.com/watch?v=a%22b"),
            Err(VideoLinkError::InvalidId(_))
        ));
    }

    #[test]
    fn placeholder_href_falls_back_to_source_attribute() {
        let from_link = |href, src| video_id_from_link(href, src).map(|v| v.as_str().to_owned());
        assert_eq!(from_link(Some("#"), Some("https://youtu.be/abc123")), Some("abc123".into()));
        assert_eq!(from_link(None, Some("https://youtu.be/abc123")), Some("abc123".into()));
        assert_eq!(
            from_link(Some("https://youtu.be/fromhref"), Some("https://youtu.be/fromattr")),
            Some("fromhref".into())
        );
        assert_eq!(from_link(Some("#"), Some("not a url")), None);
        assert_eq!(from_link(None, None), None);
    }

    #[test]
    fn embed_url_carries_player_params() {
        let cfg = VideoConfig::default();
        let vid = video_id("https://youtu.be/abc123").unwrap();
        assert_eq!(
            cfg.embed_url(&vid),
            "https://www.youtube.com/embed/abc123?autoplay=1&rel=0&playsinline=1&modestbranding=1"
        );
    }

    #[test]
    fn thumbnails_are_best_first() {
        let cfg = VideoConfig::default();
        let vid = video_id("https://youtu.be/abc123").unwrap();
        assert_eq!(
            cfg.thumbnail_urls(&vid),
            vec![
                "https://img.youtube.com/vi/abc123/maxresdefault.jpg".to_owned(),
                "https://img.youtube.com/vi/abc123/hqdefault.jpg".to_owned(),
            ]
        );
    }
}
