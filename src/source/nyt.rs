//! Remote answer source
//!
//! Fetches today's puzzle page and pulls the answer list out of the
//! `window.gameData` blob embedded in it. Every failure mode (network,
//! missing marker, unexpected payload shape) surfaces as
//! [`TallyError::DataSource`] and propagates to the caller. No retry, no
//! cached fallback.

use crate::core::TallyError;
use serde::Deserialize;

const PUZZLE_URL: &str = "https://www.nytimes.com/puzzles/spelling-bee";
const DATA_MARKER: &str = "window.gameData = ";

#[derive(Debug, Deserialize)]
struct GameData {
    today: PuzzleDay,
}

#[derive(Debug, Deserialize)]
struct PuzzleDay {
    answers: Vec<String>,
}

/// Fetch today's answer list from the puzzle site
///
/// This is the single blocking network call in the tool.
///
/// # Errors
/// Returns [`TallyError::DataSource`] on any network failure, a non-success
/// HTTP status, a page without the game-data marker, or a payload that does
/// not deserialize into the expected shape.
pub fn fetch_today_answers() -> Result<Vec<String>, TallyError> {
    log::info!("fetching today's puzzle from {PUZZLE_URL}");
    let body = reqwest::blocking::get(PUZZLE_URL)
        .and_then(reqwest::blocking::Response::error_for_status)
        .and_then(|response| response.text())
        .map_err(|e| TallyError::DataSource(e.to_string()))?;
    log::debug!("puzzle page is {} bytes", body.len());
    extract_answers(&body)
}

/// Pull the answer list out of the page body
fn extract_answers(body: &str) -> Result<Vec<String>, TallyError> {
    let start = body.find(DATA_MARKER).ok_or_else(|| {
        TallyError::DataSource(format!("page does not contain the {DATA_MARKER:?} marker"))
    })?;
    let payload = &body[start + DATA_MARKER.len()..];

    // The blob is a JSON object followed by the rest of the script; take
    // the first complete value and ignore the trailing text.
    let mut stream = serde_json::Deserializer::from_str(payload).into_iter::<GameData>();
    let data = stream
        .next()
        .ok_or_else(|| TallyError::DataSource("game data payload is empty".to_string()))?
        .map_err(|e| TallyError::DataSource(format!("malformed game data payload: {e}")))?;

    log::debug!("extracted {} answers", data.today.answers.len());
    Ok(data.today.answers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_answers_from_embedded_blob() {
        let body = concat!(
            "<html><script>var x = 1;\n",
            "window.gameData = {\"today\":{\"answers\":[\"onion\",\"noon\"],",
            "\"centerLetter\":\"n\"},\"yesterday\":{\"answers\":[]}};\n",
            "</script></html>"
        );
        let answers = extract_answers(body).unwrap();
        assert_eq!(answers, vec!["onion", "noon"]);
    }

    #[test]
    fn missing_marker_is_a_data_source_error() {
        let err = extract_answers("<html>nothing here</html>").unwrap_err();
        assert!(matches!(err, TallyError::DataSource(_)));
    }

    #[test]
    fn malformed_payload_is_a_data_source_error() {
        let body = "window.gameData = {\"today\":{\"no_answers_key\":true}}";
        let err = extract_answers(body).unwrap_err();
        assert!(matches!(err, TallyError::DataSource(_)));

        let body = "window.gameData = not json at all";
        let err = extract_answers(body).unwrap_err();
        assert!(matches!(err, TallyError::DataSource(_)));
    }
}
