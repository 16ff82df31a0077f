//! Collaborator tool probes for health reporting.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;

use ytgate_core::ToolProbe;

/// Probes the ffmpeg binary with `-version`.
#[derive(Debug, Clone)]
pub struct FfmpegProbe {
    binary: PathBuf,
}

impl FfmpegProbe {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

#[async_trait]
impl ToolProbe for FfmpegProbe {
    async fn ffmpeg_version(&self) -> Option<String> {
        let output = Command::new(&self.binary).arg("-version").output().await.ok()?;
        if !output.status.success() {
            return None;
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        // Try stdout first, fall back to stderr (some tools report there)
        let text = if stdout.trim().is_empty() {
            stderr
        } else {
            stdout
        };
        text.lines().next().map(|s| s.trim().to_string())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn fake_ffmpeg(dir: &TempDir, script: &str) -> PathBuf {
        let path = dir.path().join("ffmpeg");
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[tokio::test]
    async fn reports_first_version_line() {
        let dir = TempDir::new().unwrap();
        let tool = fake_ffmpeg(
            &dir,
            "#!/bin/sh\necho 'ffmpeg version 6.1.1 Copyright (c) 2000-2023'\necho 'built with gcc'\n",
        );

        let version = FfmpegProbe::new(tool).ffmpeg_version().await;
        assert_eq!(
            version.as_deref(),
            Some("ffmpeg version 6.1.1 Copyright (c) 2000-2023")
        );
    }

    #[tokio::test]
    async fn missing_binary_reports_none() {
        let version = FfmpegProbe::new("/nonexistent/ffmpeg").ffmpeg_version().await;
        assert_eq!(version, None);
    }

    #[tokio::test]
    async fn nonzero_exit_reports_none() {
        let dir = TempDir::new().unwrap();
        let tool = fake_ffmpeg(&dir, "#!/bin/sh\nexit 1\n");
        let version = FfmpegProbe::new(tool).ffmpeg_version().await;
        assert_eq!(version, None);
    }
}
