//! yt-dlp invocation: spawn, supervise, collect.
//!
//! One child process per call, held for the call's lifetime. Tool stderr is
//! captured into the error for server-side logging and never surfaces to
//! clients.

use std::path::{Path, PathBuf};
use std::process::Output;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use ytgate_core::args::{download_args, info_args};
use ytgate_core::{DownloadSpec, FetchError, MediaFetcher, VideoInfo};

const TOOL: &str = "yt-dlp";

/// `MediaFetcher` implementation backed by the yt-dlp binary.
#[derive(Debug, Clone)]
pub struct YtDlpFetcher {
    binary: PathBuf,
}

impl YtDlpFetcher {
    /// Use the binary at `binary` (a bare name resolves via `$PATH`).
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    async fn run(&self, args: &[String]) -> Result<Output, FetchError> {
        debug!(target: "ytgate.ytdlp", binary = %self.binary.display(), ?args, "spawning yt-dlp");
        Command::new(&self.binary)
            .args(args)
            .kill_on_drop(false)
            .output()
            .await
            .map_err(|e| FetchError::SpawnFailed {
                tool: TOOL,
                message: e.to_string(),
            })
    }

    fn tool_failed(output: &Output) -> FetchError {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        warn!(
            target: "ytgate.ytdlp",
            code = ?output.status.code(),
            stderr = %stderr,
            "yt-dlp exited unsuccessfully"
        );
        FetchError::ToolFailed {
            tool: TOOL,
            code: output.status.code(),
            stderr,
        }
    }
}

#[async_trait]
impl MediaFetcher for YtDlpFetcher {
    async fn probe(&self, url: &str) -> Result<VideoInfo, FetchError> {
        let output = self.run(&info_args(url)).await?;
        if !output.status.success() {
            return Err(Self::tool_failed(&output));
        }

        let dump: serde_json::Value = serde_json::from_slice(&output.stdout)
            .map_err(|e| FetchError::Metadata(e.to_string()))?;
        Ok(VideoInfo::from_dump(&dump))
    }

    async fn fetch(&self, spec: &DownloadSpec, output_path: &Path) -> Result<(), FetchError> {
        let output = self.run(&download_args(spec, output_path)).await?;

        if !output.status.success() {
            // Remove any partial file before reporting
            let _ = tokio::fs::remove_file(output_path).await;
            return Err(Self::tool_failed(&output));
        }

        if !tokio::fs::try_exists(output_path).await.unwrap_or(false) {
            return Err(FetchError::OutputMissing);
        }
        Ok(())
    }
}
