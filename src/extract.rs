use regex::Regex;

use crate::error::TranscriptError;

/// Extract a video ID from the supported YouTube URL shapes, or accept a
/// bare ID token as-is. First matching shape wins.
pub fn extract_video_id(input: &str) -> Result<String, TranscriptError> {
    let input = input.trim();

    let patterns = [
        r"youtube\.com/watch\?v=([^&#?/\s]+)",
        r"youtu\.be/([^&#?/\s]+)",
        r"youtube\.com/embed/([^&#?/\s]+)",
        // watch URLs where v= is not the first query parameter
        r"youtube\.com/watch\?.*v=([^&#?/\s]+)",
    ];
    for pattern in patterns {
        if let Some(caps) = Regex::new(pattern).unwrap().captures(input) {
            return checked(&caps[1], input);
        }
    }

    // Not a URL at all: the whole token is the ID.
    if !input.contains('/') && !input.contains(':') {
        return checked(input, input);
    }

    Err(TranscriptError::InvalidInput(input.to_string()))
}

/// Video IDs are limited to letters, digits, `-` and `_`.
fn checked(candidate: &str, original: &str) -> Result<String, TranscriptError> {
    let valid = !candidate.is_empty()
        && candidate
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    if valid {
        Ok(candidate.to_string())
    } else {
        Err(TranscriptError::InvalidInput(original.to_string()))
    }
}
