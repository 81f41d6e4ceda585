use crate::utils::error::ParseError;

/// Slice the ranking table out of the full page text.
///
/// The slice runs from the first occurrence of `start_marker` (inclusive) to
/// the first occurrence of `end_marker` (exclusive). Either marker missing
/// means the page no longer matches the season configuration, which is a
/// structural failure and never retried.
pub fn locate<'a>(
    page_text: &'a str,
    start_marker: &str,
    end_marker: &str,
) -> Result<&'a str, ParseError> {
    let start = page_text
        .find(start_marker)
        .ok_or_else(|| ParseError::MarkerNotFound {
            marker: start_marker.to_string(),
        })?;
    let end = page_text
        .find(end_marker)
        .ok_or_else(|| ParseError::MarkerNotFound {
            marker: end_marker.to_string(),
        })?;

    // An end marker before the header leaves no table rows; classification
    // reports the missing header downstream.
    if end <= start {
        return Ok("");
    }

    Ok(&page_text[start..end])
}
