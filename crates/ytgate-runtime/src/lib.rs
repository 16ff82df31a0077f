//! Subprocess adapter for ytgate.
//!
//! Implements the core ports against real external binaries: `YtDlpFetcher`
//! spawns and supervises yt-dlp, `FfmpegProbe` checks ffmpeg availability,
//! and `ScratchDir`/`ScratchFile` own the per-request temp-file lifecycle.

#![deny(unused_crate_dependencies)]

pub mod probe;
pub mod scratch;
pub mod ytdlp;

pub use probe::FfmpegProbe;
pub use scratch::{ScratchDir, ScratchFile};
pub use ytdlp::YtDlpFetcher;
