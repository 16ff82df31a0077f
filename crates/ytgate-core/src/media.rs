//! Format, quality, and metadata domain types.

use serde::{Deserialize, Serialize};

use crate::error::FetchError;
use crate::url::is_valid_youtube_url;

/// Placeholder title used when the extractor returns nothing usable.
pub const UNTITLED: &str = "Untitled";

/// Requested output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaFormat {
    Video,
    Audio,
}

impl MediaFormat {
    /// File extension of the produced container.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Video => "mp4",
            Self::Audio => "mp3",
        }
    }

    /// Content type of the produced container.
    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Video => "video/mp4",
            Self::Audio => "audio/mpeg",
        }
    }
}

/// Video quality selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoQuality {
    /// Best available streams, no height constraint.
    Best,
    /// Best streams not exceeding this height in pixels.
    MaxHeight(u32),
}

impl VideoQuality {
    /// Parse a user-supplied quality string (`"best"` or a height like `"1080"`).
    pub fn parse(quality: &str) -> Result<Self, FetchError> {
        if quality.eq_ignore_ascii_case("best") {
            return Ok(Self::Best);
        }
        quality
            .parse::<u32>()
            .ok()
            .filter(|h| *h > 0)
            .map(Self::MaxHeight)
            .ok_or_else(|| FetchError::InvalidQuality(quality.to_string()))
    }
}

/// Audio quality code, passed through verbatim to `--audio-quality`.
///
/// yt-dlp accepts either a VBR level (`0`..`10`) or a bitrate like `192K`;
/// the gateway does not enumerate them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioQuality(pub String);

impl AudioQuality {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// What to download and at which quality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadKind {
    Video(VideoQuality),
    Audio(AudioQuality),
}

/// Intent-based description of a single download request.
///
/// Constructing a spec validates the URL and the quality string, so a value of
/// this type is always safe to turn into an argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadSpec {
    url: String,
    kind: DownloadKind,
}

impl DownloadSpec {
    /// Validate and build a download spec from raw request fields.
    pub fn new(url: &str, format: MediaFormat, quality: &str) -> Result<Self, FetchError> {
        if !is_valid_youtube_url(url) {
            return Err(FetchError::InvalidUrl);
        }
        let kind = match format {
            MediaFormat::Video => DownloadKind::Video(VideoQuality::parse(quality)?),
            MediaFormat::Audio => DownloadKind::Audio(AudioQuality(quality.to_string())),
        };
        Ok(Self {
            url: url.to_string(),
            kind,
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub const fn kind(&self) -> &DownloadKind {
        &self.kind
    }

    #[must_use]
    pub const fn format(&self) -> MediaFormat {
        match self.kind {
            DownloadKind::Video(_) => MediaFormat::Video,
            DownloadKind::Audio(_) => MediaFormat::Audio,
        }
    }

    /// File extension of the output container.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        self.format().extension()
    }

    /// Content type of the output container.
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        self.format().content_type()
    }
}

/// Read-only metadata subset returned by the info endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoInfo {
    pub title: String,
    /// Duration in seconds, absent when the extractor does not report one.
    pub duration: Option<f64>,
    pub thumbnail: Option<String>,
    pub uploader: Option<String>,
}

impl VideoInfo {
    /// Extract the four-field subset from a yt-dlp `--dump-json` document.
    #[must_use]
    pub fn from_dump(dump: &serde_json::Value) -> Self {
        let title = dump
            .get("title")
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(UNTITLED)
            .to_string();
        let duration = dump
            .get("duration")
            .and_then(serde_json::Value::as_f64)
            .filter(|d| *d >= 0.0);
        let thumbnail = dump
            .get("thumbnail")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string);
        let uploader = dump
            .get("uploader")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string);
        Self {
            title,
            duration,
            thumbnail,
            uploader,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn format_deserializes_from_lowercase_only() {
        assert_eq!(
            serde_json::from_str::<MediaFormat>("\"video\"").unwrap(),
            MediaFormat::Video
        );
        assert_eq!(
            serde_json::from_str::<MediaFormat>("\"audio\"").unwrap(),
            MediaFormat::Audio
        );
        assert!(serde_json::from_str::<MediaFormat>("\"gif\"").is_err());
    }

    #[test]
    fn video_quality_parses_best_and_heights() {
        assert_eq!(VideoQuality::parse("best").unwrap(), VideoQuality::Best);
        assert_eq!(VideoQuality::parse("BEST").unwrap(), VideoQuality::Best);
        assert_eq!(
            VideoQuality::parse("720").unwrap(),
            VideoQuality::MaxHeight(720)
        );
    }

    #[test]
    fn video_quality_rejects_garbage() {
        assert!(VideoQuality::parse("").is_err());
        assert!(VideoQuality::parse("0").is_err());
        assert!(VideoQuality::parse("-480").is_err());
        assert!(VideoQuality::parse("1080p").is_err());
    }

    #[test]
    fn spec_rejects_invalid_url() {
        let err = DownloadSpec::new("https://vimeo.com/1", MediaFormat::Video, "best");
        assert!(matches!(err, Err(FetchError::InvalidUrl)));
    }

    #[test]
    fn audio_quality_is_passed_through() {
        let spec =
            DownloadSpec::new("https://youtu.be/dQw4w9WgXcQ", MediaFormat::Audio, "192K").unwrap();
        match spec.kind() {
            DownloadKind::Audio(q) => assert_eq!(q.as_str(), "192K"),
            DownloadKind::Video(_) => panic!("expected audio"),
        }
        assert_eq!(spec.extension(), "mp3");
        assert_eq!(spec.content_type(), "audio/mpeg");
    }

    #[test]
    fn info_extracts_subset_from_dump() {
        let dump = json!({
            "title": "Some Video",
            "duration": 212.0,
            "thumbnail": "https://i.ytimg.com/vi/x/hq720.jpg",
            "uploader": "Channel",
            "formats": [{"format_id": "22"}],
        });
        let info = VideoInfo::from_dump(&dump);
        assert_eq!(info.title, "Some Video");
        assert_eq!(info.duration, Some(212.0));
        assert_eq!(info.uploader.as_deref(), Some("Channel"));
    }

    #[test]
    fn info_title_falls_back_to_placeholder() {
        let info = VideoInfo::from_dump(&json!({"title": "  "}));
        assert_eq!(info.title, UNTITLED);
        let info = VideoInfo::from_dump(&json!({}));
        assert_eq!(info.title, UNTITLED);
    }

    #[test]
    fn info_drops_negative_duration() {
        let info = VideoInfo::from_dump(&json!({"title": "x", "duration": -5}));
        assert_eq!(info.duration, None);
    }
}
