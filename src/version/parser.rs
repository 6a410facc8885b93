//! Dotted version string parsing

use crate::version::error::ParseError;

/// Parse a dotted version string into its numeric segments.
///
/// A missing or empty input stands for "no version known" and parses as
/// `[0, 0, 0]`. Any non-numeric segment is a caller error; the input is
/// expected to be pre-trimmed.
///
/// Examples:
/// - `Some("1.2.3")` -> `[1, 2, 3]`
/// - `Some("1.2.0.1")` -> `[1, 2, 0, 1]`
/// - `None` / `Some("")` -> `[0, 0, 0]`
pub fn parse(text: Option<&str>) -> Result<Vec<u64>, ParseError> {
    let text = match text {
        None | Some("") => return Ok(vec![0, 0, 0]),
        Some(text) => text,
    };

    text.split('.')
        .map(|segment| {
            segment.parse::<u64>().map_err(|_| ParseError {
                input: text.to_string(),
                segment: segment.to_string(),
            })
        })
        .collect()
}

/// Render parsed segments back into dotted form.
pub fn render(segments: &[u64]) -> String {
    segments
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(".")
}
