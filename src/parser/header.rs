use crate::utils::error::ParseError;
use std::collections::HashSet;

/// Label that repeats once per ranking system in the header.
const REPEAT_LABEL: &str = "Rank";
/// Label immediately following each repeat, renamed in lockstep.
const PAIR_LABEL: &str = "Team";

/// Turn a whitespace-delimited header line into a comma-delimited one.
///
/// Leading spaces are stripped and any stray comma already in the line is
/// removed first (the source format has none, this guards copy artifacts).
pub fn make_csv_line(line: &str) -> String {
    line.trim_start_matches(' ')
        .replace(',', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(",")
}

/// Rename every `Rank`/`Team` pair after the first with an occurrence
/// suffix (`Rank_1`/`Team_1`, `Rank_2`/`Team_2`, ...), preserving order.
/// The first pair keeps its plain name.
fn rename_duplicate_columns(header_row: &str) -> Vec<String> {
    let mut names: Vec<String> = header_row.split(',').map(str::to_string).collect();

    let repeat_indices: Vec<usize> = names
        .iter()
        .enumerate()
        .filter(|(_, name)| name.as_str() == REPEAT_LABEL)
        .map(|(i, _)| i)
        .skip(1)
        .collect();

    for (occurrence, idx) in repeat_indices.into_iter().enumerate() {
        let suffix = occurrence + 1;
        names[idx] = format!("{}_{}", REPEAT_LABEL, suffix);
        if idx + 1 < names.len() {
            names[idx + 1] = format!("{}_{}", PAIR_LABEL, suffix);
        }
    }

    names
}

/// Normalize the raw header line into unique, ordered column names.
pub fn normalize_header(header_line: &str) -> Result<Vec<String>, ParseError> {
    let names = rename_duplicate_columns(&make_csv_line(header_line));

    let mut seen = HashSet::new();
    for name in &names {
        if !seen.insert(name.as_str()) {
            return Err(ParseError::DuplicateColumn { name: name.clone() });
        }
    }

    Ok(names)
}
