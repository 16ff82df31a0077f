//! Pure argument-vector construction for yt-dlp invocations.
//!
//! These functions are the only place where format and quality choices turn
//! into command-line flags, so the mapping stays testable without spawning
//! the real binary.

use std::path::Path;

use crate::media::{DownloadKind, DownloadSpec, VideoQuality};

/// Fixed browser user agent sent to the extractor.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Flags shared by every invocation: single-item, IPv4-only, Android player
/// client to dodge login interstitials, fixed user agent.
fn hardening_args() -> Vec<String> {
    vec![
        "--no-playlist".into(),
        "--force-ipv4".into(),
        "--extractor-args".into(),
        "youtube:player_client=android".into(),
        "--user-agent".into(),
        USER_AGENT.into(),
    ]
}

/// Arguments for a metadata dump of a single video.
#[must_use]
pub fn info_args(url: &str) -> Vec<String> {
    let mut args = vec!["--dump-json".to_string()];
    args.extend(hardening_args());
    args.push(url.to_string());
    args
}

/// yt-dlp format selector for a video download.
///
/// `Best` never constrains height; a numeric quality bounds `height<=H` with a
/// fallback chain so an unmergeable pair still degrades to a single stream.
#[must_use]
pub fn format_selector(quality: VideoQuality) -> String {
    match quality {
        VideoQuality::Best => "bestvideo+bestaudio/best".to_string(),
        VideoQuality::MaxHeight(h) => {
            format!("bestvideo[height<={h}]+bestaudio/best[height<={h}]/best")
        }
    }
}

/// Arguments for downloading a video or audio file to `output`.
#[must_use]
pub fn download_args(spec: &DownloadSpec, output: &Path) -> Vec<String> {
    let mut args = hardening_args();

    match spec.kind() {
        DownloadKind::Audio(quality) => {
            args.extend([
                "-x".to_string(),
                "--audio-format".to_string(),
                "mp3".to_string(),
                "--audio-quality".to_string(),
                quality.as_str().to_string(),
            ]);
        }
        DownloadKind::Video(quality) => {
            args.extend([
                "-f".to_string(),
                format_selector(*quality),
                "--merge-output-format".to_string(),
                "mp4".to_string(),
            ]);
        }
    }

    args.push("-o".to_string());
    args.push(output.to_string_lossy().into_owned());
    args.push(spec.url().to_string());
    args
}
