//! Metadata probe handler.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use crate::error::HttpError;
use crate::state::AppState;
use ytgate_core::{VideoInfo, is_valid_youtube_url};

/// Request body for `/api/info`.
#[derive(Debug, Deserialize)]
pub struct InfoRequest {
    pub url: String,
}

/// Probe a YouTube URL for its metadata subset.
pub async fn probe(
    State(state): State<AppState>,
    Json(req): Json<InfoRequest>,
) -> Result<Json<VideoInfo>, HttpError> {
    if !is_valid_youtube_url(&req.url) {
        return Err(HttpError::BadRequest("Invalid YouTube URL".to_string()));
    }

    tracing::debug!(target: "ytgate.info", url = %req.url, "probing metadata");
    let info = state.fetcher.probe(&req.url).await?;
    Ok(Json(info))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_request_requires_url_field() {
        let req: InfoRequest =
            serde_json::from_value(serde_json::json!({"url": "https://youtu.be/x"})).unwrap();
        assert_eq!(req.url, "https://youtu.be/x");

        let missing: Result<InfoRequest, _> = serde_json::from_value(serde_json::json!({}));
        assert!(missing.is_err());
    }
}
