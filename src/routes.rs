use axum::{
    extract::{Path, Query, State},
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::error::TranscriptError;
use crate::extract::extract_video_id;
use crate::format::shape;
use crate::models::{
    default_languages, TranscriptFormat, TranscriptListResponse, TranscriptRequest,
    TranscriptResponse,
};
use crate::youtube;

pub fn create_routes(client: reqwest::Client) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/docs", get(docs))
        .route("/transcript", post(post_transcript))
        .route("/transcript/:video_id", get(get_transcript))
        .route("/list/:video_id", get(list_transcripts))
        .with_state(client)
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "YouTube Transcript API Server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}

// A simple GET route describing the API surface
async fn docs() -> Html<&'static str> {
    Html(
        r#"
    <!DOCTYPE html>
    <html>
      <head>
        <title>YouTube Transcript API</title>
        <link href="https://cdn.jsdelivr.net/npm/tailwindcss@3.2.7/dist/tailwind.min.css" rel="stylesheet">
      </head>
      <body class="p-4">
        <h1 class="text-2xl font-bold mb-4">YouTube Transcript API</h1>
        <p class="mb-4">Extracts YouTube video captions as JSON or plain text.</p>

        <h2 class="text-xl font-bold">POST /transcript</h2>
        <p>Body fields:</p>
        <pre class="border rounded p-2 mb-4">
{
  "url_or_id": "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
  "languages": ["ko", "en"],
  "format": "json",
  "preserve_formatting": false
}
        </pre>

        <h2 class="text-xl font-bold">GET /transcript/{video_id}</h2>
        <p class="mb-4">Query parameters: <code>languages</code> (comma-separated,
        default <code>ko,en</code>), <code>format</code> (<code>json</code> or
        <code>text</code>), <code>preserve_formatting</code> (<code>true</code>/<code>false</code>).</p>

        <h2 class="text-xl font-bold">GET /list/{video_id}</h2>
        <p class="mb-4">Lists the available caption tracks for a video without
        fetching their content.</p>

        <h2 class="text-xl font-bold">Errors</h2>
        <p>Failures return <code>{"detail": "..."}</code> with status 400
        (bad input), 404 (no matching transcript, captions disabled, or video
        unavailable) or 502 (YouTube unreachable).</p>
      </body>
    </html>
    "#,
    )
}

// Accept JSON describing which transcript to fetch
async fn post_transcript(
    State(client): State<reqwest::Client>,
    Json(request): Json<TranscriptRequest>,
) -> Result<Json<TranscriptResponse>, TranscriptError> {
    fetch_shaped(&client, &request).await.map(Json)
}

#[derive(Debug, Deserialize)]
struct TranscriptQuery {
    languages: Option<String>,
    #[serde(default)]
    format: TranscriptFormat,
    #[serde(default)]
    preserve_formatting: bool,
}

// GET variant: path + query parameters, converging on the POST logic
async fn get_transcript(
    State(client): State<reqwest::Client>,
    Path(video_id): Path<String>,
    Query(query): Query<TranscriptQuery>,
) -> Result<Json<TranscriptResponse>, TranscriptError> {
    let languages = match query.languages.as_deref() {
        Some(raw) => split_languages(raw),
        None => default_languages(),
    };
    let request = TranscriptRequest {
        url_or_id: video_id,
        languages,
        format: query.format,
        preserve_formatting: query.preserve_formatting,
    };
    fetch_shaped(&client, &request).await.map(Json)
}

async fn list_transcripts(
    State(client): State<reqwest::Client>,
    Path(video_id): Path<String>,
) -> Result<Json<TranscriptListResponse>, TranscriptError> {
    let video_id = extract_video_id(&video_id)?;
    let available_transcripts = youtube::list_transcripts(&client, &video_id).await?;
    Ok(Json(TranscriptListResponse {
        video_id,
        available_transcripts,
    }))
}

/// Normalize, fetch, shape. The response's `video_id` is always the
/// Normalizer's output for this request.
async fn fetch_shaped(
    client: &reqwest::Client,
    request: &TranscriptRequest,
) -> Result<TranscriptResponse, TranscriptError> {
    let video_id = extract_video_id(&request.url_or_id)?;
    let fetched = youtube::fetch_transcript(
        client,
        &video_id,
        &request.languages,
        request.preserve_formatting,
    )
    .await?;
    Ok(shape(video_id, fetched, request.format))
}

fn split_languages(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        create_routes(reqwest::Client::new())
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn split_languages_trims_and_drops_empties() {
        assert_eq!(split_languages("ko,en"), vec!["ko", "en"]);
        assert_eq!(split_languages(" ko , en ,"), vec!["ko", "en"]);
        assert!(split_languages(",").is_empty());
    }

    #[tokio::test]
    async fn root_reports_name_and_version() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["message"], "YouTube Transcript API Server");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn health_is_healthy() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn docs_page_renders() {
        let response = app()
            .oneshot(Request::builder().uri("/docs").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn post_with_unparseable_input_is_bad_request() {
        let payload = r#"{"url_or_id": "https://example.com/watch?v=dQw4w9WgXcQ"}"#;
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/transcript")
                    .header("content-type", "application/json")
                    .body(Body::from(payload))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json["detail"]
            .as_str()
            .unwrap()
            .contains("could not extract a video ID"));
    }

    #[tokio::test]
    async fn get_with_bad_id_characters_is_bad_request() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/transcript/bad%24id%24chars")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn get_with_unknown_format_is_rejected() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/transcript/dQw4w9WgXcQ?format=srt")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn post_with_missing_body_field_is_client_error() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/transcript")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"languages": ["en"]}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn list_with_bad_id_is_bad_request() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/list/not%20an%20id")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
