use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::models::ErrorResponse;

/// Everything that can go wrong between receiving a request and shaping a
/// response. Each variant carries enough context for the client message.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("could not extract a video ID from {0:?}")]
    InvalidInput(String),

    #[error("no transcript found for video {} in requested languages [{}]", .video_id, .languages.join(", "))]
    NoTranscriptFound {
        video_id: String,
        languages: Vec<String>,
    },

    #[error("subtitles are disabled for video {0}")]
    TranscriptsDisabled(String),

    #[error("video {0} is unavailable")]
    VideoUnavailable(String),

    #[error("upstream request failed: {0}")]
    Upstream(String),
}

impl TranscriptError {
    pub fn status(&self) -> StatusCode {
        match self {
            TranscriptError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            TranscriptError::NoTranscriptFound { .. }
            | TranscriptError::TranscriptsDisabled(_)
            | TranscriptError::VideoUnavailable(_) => StatusCode::NOT_FOUND,
            TranscriptError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<reqwest::Error> for TranscriptError {
    fn from(err: reqwest::Error) -> Self {
        TranscriptError::Upstream(err.to_string())
    }
}

impl IntoResponse for TranscriptError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("{}", self);
        }
        (status, Json(ErrorResponse { detail: self.to_string() })).into_response()
    }
}
