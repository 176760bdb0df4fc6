use serde::{Deserialize, Serialize};

/// Requested output shape for the transcript body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Deserialize)]
pub struct TranscriptRequest {
    pub url_or_id: String,
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    #[serde(default)]
    pub format: TranscriptFormat,
    #[serde(default)]
    pub preserve_formatting: bool,
}

pub fn default_languages() -> Vec<String> {
    vec!["ko".to_string(), "en".to_string()]
}

/// One timed caption line, exactly as parsed from the caption track.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaptionLine {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Transcript body: either the joined text or the full line sequence.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum TranscriptContent {
    Text(String),
    Lines(Vec<CaptionLine>),
}

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub video_id: String,
    pub language: String,
    pub language_code: String,
    pub is_generated: bool,
    pub transcript: TranscriptContent,
}

/// Metadata for one available caption track, content not fetched.
#[derive(Debug, Serialize)]
pub struct TranscriptInfo {
    pub language: String,
    pub language_code: String,
    pub is_generated: bool,
    pub is_translatable: bool,
    pub translation_languages: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct TranscriptListResponse {
    pub video_id: String,
    pub available_transcripts: Vec<TranscriptInfo>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}
