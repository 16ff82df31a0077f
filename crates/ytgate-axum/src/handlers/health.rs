//! Health handler - static status plus an ffmpeg probe.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Response body for `/api/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub ffmpeg: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Report gateway status and ffmpeg availability.
///
/// Probe failures degrade to `"missing"`; this endpoint never errors.
pub async fn status(State(state): State<AppState>) -> Json<HealthResponse> {
    let version = state.probe.ffmpeg_version().await;
    let ffmpeg = if version.is_some() {
        "installed"
    } else {
        "missing"
    };
    Json(HealthResponse {
        status: "ok",
        ffmpeg,
        version,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_omits_version_when_absent() {
        let body = serde_json::to_value(HealthResponse {
            status: "ok",
            ffmpeg: "missing",
            version: None,
        })
        .unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["ffmpeg"], "missing");
        assert!(body.get("version").is_none());
    }

    #[test]
    fn response_carries_version_when_installed() {
        let body = serde_json::to_value(HealthResponse {
            status: "ok",
            ffmpeg: "installed",
            version: Some("ffmpeg version 6.1.1".into()),
        })
        .unwrap();
        assert_eq!(body["version"], "ffmpeg version 6.1.1");
    }
}
