//! Domain error type for metadata probes and downloads.
//!
//! `FetchError` abstracts away subprocess implementation details and gives
//! adapters a stable surface to map onto transport-specific errors. Captured
//! tool diagnostics stay inside the error for logging; they are never meant
//! for end users.

use thiserror::Error;

/// Errors that can occur while probing metadata or fetching media.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The submitted string is not a recognized YouTube URL.
    #[error("Invalid YouTube URL")]
    InvalidUrl,

    /// The requested quality is not valid for the requested format.
    #[error("Invalid quality: {0}")]
    InvalidQuality(String),

    /// The external tool could not be spawned (missing binary, permissions).
    #[error("Failed to spawn {tool}: {message}")]
    SpawnFailed {
        /// Tool binary name (for logging).
        tool: &'static str,
        message: String,
    },

    /// The external tool ran but exited with a non-zero status.
    #[error("{tool} exited unsuccessfully")]
    ToolFailed {
        tool: &'static str,
        /// Exit code, if the process was not killed by a signal.
        code: Option<i32>,
        /// Captured stderr, kept for server-side logging only.
        stderr: String,
    },

    /// The tool reported success but the expected output file is absent.
    #[error("Output file was not created")]
    OutputMissing,

    /// The tool's metadata dump could not be parsed.
    #[error("Could not parse video metadata")]
    Metadata(String),

    /// Filesystem error around the scratch file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FetchError {
    /// Returns a suggested HTTP status code for this error.
    #[must_use]
    pub const fn suggested_status_code(&self) -> u16 {
        match self {
            Self::InvalidUrl | Self::InvalidQuality(_) => 400,
            Self::SpawnFailed { .. }
            | Self::ToolFailed { .. }
            | Self::OutputMissing
            | Self::Metadata(_)
            | Self::Io(_) => 500,
        }
    }

    /// Captured tool diagnostics, if any. For logs, not for clients.
    #[must_use]
    pub fn diagnostics(&self) -> Option<&str> {
        match self {
            Self::ToolFailed { stderr, .. } => Some(stderr),
            Self::Metadata(detail) => Some(detail),
            _ => None,
        }
    }
}
