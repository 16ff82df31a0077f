//! YouTube URL validation.
//!
//! A fixed pattern accepting the `watch?v=`, `shorts/`, and `youtu.be/` forms
//! with a trailing video identifier. No normalization is attempted; playlist
//! suppression happens downstream via `--no-playlist`.

use regex::Regex;
use std::sync::LazyLock;

static YOUTUBE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?(www\.)?(youtube\.com/(watch\?v=|shorts/)|youtu\.be/)[\w-]+")
        .expect("pattern is valid")
});

/// Returns true only for strings matching a recognized YouTube URL form.
#[must_use]
pub fn is_valid_youtube_url(url: &str) -> bool {
    YOUTUBE_URL.is_match(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_watch_urls() {
        assert!(is_valid_youtube_url(
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        ));
        assert!(is_valid_youtube_url("http://youtube.com/watch?v=abc_-123"));
        assert!(is_valid_youtube_url("youtube.com/watch?v=abc123"));
    }

    #[test]
    fn accepts_shorts_urls() {
        assert!(is_valid_youtube_url(
            "https://youtube.com/shorts/dQw4w9WgXcQ"
        ));
        assert!(is_valid_youtube_url("www.youtube.com/shorts/x9y8z7"));
    }

    #[test]
    fn accepts_short_domain() {
        assert!(is_valid_youtube_url("https://youtu.be/dQw4w9WgXcQ"));
        assert!(is_valid_youtube_url("youtu.be/dQw4w9WgXcQ"));
    }

    #[test]
    fn rejects_other_hosts_and_garbage() {
        assert!(!is_valid_youtube_url(""));
        assert!(!is_valid_youtube_url("https://vimeo.com/12345"));
        assert!(!is_valid_youtube_url("https://example.com/watch?v=abc"));
        assert!(!is_valid_youtube_url("not a url at all"));
        assert!(!is_valid_youtube_url("https://youtube.com/playlist?list=PL1"));
        assert!(!is_valid_youtube_url("https://youtube.com/watch?v="));
        assert!(!is_valid_youtube_url("youtu.be/"));
    }

    #[test]
    fn rejects_lookalike_domains() {
        assert!(!is_valid_youtube_url("https://notyoutube.com/watch?v=abc"));
        // Dot must be literal, not a wildcard
        assert!(!is_valid_youtube_url("https://youtubeXcom/watch?v=abc"));
    }
}
