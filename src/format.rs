use crate::models::{CaptionLine, TranscriptContent, TranscriptFormat, TranscriptResponse};
use crate::youtube::FetchedTranscript;

/// Shape a fetched caption track into the response body. `video_id` is the
/// Normalizer's output and is echoed back untouched.
pub fn shape(video_id: String, fetched: FetchedTranscript, format: TranscriptFormat) -> TranscriptResponse {
    let transcript = match format {
        TranscriptFormat::Json => TranscriptContent::Lines(fetched.lines),
        TranscriptFormat::Text => TranscriptContent::Text(join_text(&fetched.lines)),
    };

    TranscriptResponse {
        video_id,
        language: fetched.language,
        language_code: fetched.language_code,
        is_generated: fetched.is_generated,
        transcript,
    }
}

/// Join line texts in chronological order, one space between lines.
fn join_text(lines: &[CaptionLine]) -> String {
    lines
        .iter()
        .map(|l| l.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
