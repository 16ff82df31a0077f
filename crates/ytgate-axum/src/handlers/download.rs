//! Download handler - subprocess run plus streamed response.
//!
//! The scratch file is a drop guard moved into the response stream, so the
//! temp file disappears when streaming completes, errors out, or the client
//! disconnects mid-transfer.

use axum::body::Body;
use axum::extract::{Json, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use futures_util::StreamExt;
use serde::Deserialize;
use tokio_util::io::ReaderStream;

use crate::error::HttpError;
use crate::state::AppState;
use ytgate_core::{DownloadSpec, FetchError, MediaFormat};

/// Request body for `/api/download`.
#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    pub url: String,
    pub format: String,
    pub quality: String,
}

fn parse_format(format: &str) -> Result<MediaFormat, HttpError> {
    match format {
        "video" => Ok(MediaFormat::Video),
        "audio" => Ok(MediaFormat::Audio),
        other => Err(HttpError::BadRequest(format!(
            "Unsupported format: {other}"
        ))),
    }
}

/// Download a video or audio file and stream it back as an attachment.
pub async fn fetch(
    State(state): State<AppState>,
    Json(req): Json<DownloadRequest>,
) -> Result<Response, HttpError> {
    let format = parse_format(&req.format)?;
    let spec = DownloadSpec::new(&req.url, format, &req.quality)?;

    let scratch = state.scratch.allocate(spec.extension());
    tracing::info!(
        target: "ytgate.download",
        url = %spec.url(),
        format = ?spec.format(),
        output = %scratch.path().display(),
        "starting download"
    );

    // Guard drops here on failure, removing any partial file the tool missed
    state.fetcher.fetch(&spec, scratch.path()).await?;

    let file = tokio::fs::File::open(scratch.path())
        .await
        .map_err(FetchError::Io)?;

    // Move the guard into the stream: the scratch file lives exactly as long
    // as the response body, on every exit path.
    let stream = ReaderStream::new(file).map(move |chunk| {
        let _ = &scratch;
        chunk
    });

    let filename = format!("download.{}", spec.extension());
    let headers = [
        (header::CONTENT_TYPE, spec.content_type().to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];

    Ok((headers, Body::from_stream(stream)).into_response())
}
