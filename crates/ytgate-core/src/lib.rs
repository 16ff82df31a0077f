//! Core domain types and port definitions for ytgate.
//!
//! This crate holds everything the adapters share: URL validation, the
//! format/quality model, pure argument-vector construction for yt-dlp, error
//! types, and the port traits that infrastructure implements. It has no
//! process, filesystem, or HTTP dependencies.

#![deny(unused_crate_dependencies)]

pub mod args;
pub mod error;
pub mod media;
pub mod ports;
pub mod url;

// Re-export commonly used types for convenience
pub use error::FetchError;
pub use media::{AudioQuality, DownloadKind, DownloadSpec, MediaFormat, VideoInfo, VideoQuality};
pub use ports::{MediaFetcher, ToolProbe};
pub use url::is_valid_youtube_url;
