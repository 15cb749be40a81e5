use url::Url;

use crate::config::{NATIVE_VIDEO_EXTENSIONS, YOUTUBE_EMBED_BASE};

/// How a demonstration video link can be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Playable {
    /// Player page for an <iframe>.
    Embed(String),
    /// File played by a native <video> element.
    Native(String),
}

/// `None` means the link is not something we know how to play; callers show nothing.
pub fn resolve(link: &str) -> Option<Playable> {
    let link = link.trim();
    if link.is_empty() {
        return None;
    }
    if let Some(embed) = youtube_embed(link) {
        return Some(Playable::Embed(embed));
    }
    if is_native_video(link) {
        return Some(Playable::Native(link.to_string()));
    }
    None
}

/// Embed URL for `youtube.com/watch?v=<id>` and `youtu.be/<id>` links.
pub fn youtube_embed(link: &str) -> Option<String> {
    let parsed = Url::parse(link).ok()?;
    let host = parsed.host_str()?;

    let id = if host.contains("youtube.com") {
        parsed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())?
    } else if host.contains("youtu.be") {
        let path = parsed.path();
        path.strip_prefix('/').unwrap_or(path).to_string()
    } else {
        return None;
    };

    if id.is_empty() {
        return None;
    }
    Some(format!("{YOUTUBE_EMBED_BASE}{id}"))
}

/// Relative paths such as `/videos/angel.mp4` count too.
pub fn is_native_video(link: &str) -> bool {
    let lower = link.trim().to_ascii_lowercase();
    NATIVE_VIDEO_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn youtube_watch_link() {
        assert_eq!(
            resolve("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42"),
            Some(Playable::Embed("https://www.youtube.com/embed/dQw4w9WgXcQ".into()))
        );
    }

    #[test]
    fn youtube_short_link() {
        assert_eq!(
            resolve("https://youtu.be/abc123"),
            Some(Playable::Embed("https://www.youtube.com/embed/abc123".into()))
        );
    }

    #[test]
    fn youtube_without_id_is_not_playable() {
        assert_eq!(resolve("https://www.youtube.com/channel/xyz"), None);
        assert_eq!(resolve("https://youtu.be/"), None);
    }

    #[test]
    fn mobile_youtube_host() {
        assert_eq!(
            youtube_embed("https://m.youtube.com/watch?v=zz"),
            Some("https://www.youtube.com/embed/zz".into())
        );
    }

    #[test]
    fn direct_files_play_natively() {
        assert_eq!(
            resolve("/videos/angel.mp4"),
            Some(Playable::Native("/videos/angel.mp4".into()))
        );
        // Extension match ignores ASCII case on purpose.
        assert_eq!(
            resolve("https://cdn.example.org/clip.WEBM"),
            Some(Playable::Native("https://cdn.example.org/clip.WEBM".into()))
        );
        assert!(is_native_video("demo.ogg"));
    }

    #[test]
    fn unknown_or_malformed_links_are_not_playable() {
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("   "), None);
        assert_eq!(resolve("not a url"), None);
        assert_eq!(resolve("https://vimeo.com/123"), None);
        assert_eq!(resolve("https://example.org/photo.png"), None);
        assert_eq!(resolve("http://[::1"), None);
    }
}
