//! Port definitions (trait abstractions) for external tools.
//!
//! Ports express intent, not implementation: the HTTP layer asks for metadata
//! or a finished file and never sees command lines or child processes. This
//! keeps handlers testable with stub implementations.

use async_trait::async_trait;
use std::path::Path;

use crate::error::FetchError;
use crate::media::{DownloadSpec, VideoInfo};

/// Port for fetching metadata and media from the external extraction tool.
#[async_trait]
pub trait MediaFetcher: Send + Sync {
    /// Probe a URL for its metadata subset.
    ///
    /// The URL must already be validated; implementations may still fail with
    /// tool-level errors (unavailable video, network, parse failures).
    async fn probe(&self, url: &str) -> Result<VideoInfo, FetchError>;

    /// Download media described by `spec` into `output`.
    ///
    /// On success the file at `output` exists and is complete. On failure any
    /// partial file has been removed.
    async fn fetch(&self, spec: &DownloadSpec, output: &Path) -> Result<(), FetchError>;
}

/// Port for probing collaborator tools for health reporting.
#[async_trait]
pub trait ToolProbe: Send + Sync {
    /// First line of `ffmpeg -version` output, or `None` when unavailable.
    async fn ffmpeg_version(&self) -> Option<String>;
}
