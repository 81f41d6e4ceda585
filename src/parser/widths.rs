use crate::utils::error::ParseError;
use once_cell::sync::Lazy;
use regex::Regex;

// A column token is a run of non-whitespace followed by its trailing padding.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+\s*").unwrap());

/// Infer the fixed character width of each column from one data line: the
/// length of each value-plus-padding token is that column's width.
pub fn detect_widths(data_line: &str) -> Vec<usize> {
    TOKEN_RE
        .find_iter(data_line)
        .map(|token| token.as_str().chars().count())
        .collect()
}

/// Measure column widths from the first data line containing `probe`.
///
/// The probe is a single-word team name known to appear in the dataset, so
/// the selected line has one token per column and is safe to calibrate
/// against. Exact substring containment, not a truthy match. The measured
/// widths are assumed stable for every other data line in the season.
pub fn measure_from_probe(data_lines: &[String], probe: &str) -> Result<Vec<usize>, ParseError> {
    let line = data_lines
        .iter()
        .find(|line| line.contains(probe))
        .ok_or_else(|| ParseError::ProbeNotFound {
            probe: probe.to_string(),
        })?;

    Ok(detect_widths(line))
}
