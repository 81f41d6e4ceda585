use crate::utils::error::ParseError;

/// Rows of one table slice after classification: the canonical header line
/// (kept verbatim) and the data lines with their leading gutter removed.
#[derive(Debug, Clone)]
pub struct ClassifiedRows {
    pub header: String,
    pub data: Vec<String>,
}

/// Split a table slice into header and data rows.
///
/// Blank lines are dropped. A line whose space-trimmed form starts with
/// `start_marker` is a header candidate: the first one becomes the canonical
/// header and later ones are dropped (the source repeats the header every
/// few dozen rows for readability). Every other line is a data row; its
/// first character is a one-character gutter (rank-tie indicator) that is
/// not part of any column value and is stripped here.
pub fn classify(table_slice: &str, start_marker: &str) -> Result<ClassifiedRows, ParseError> {
    let mut header: Option<String> = None;
    let mut data = Vec::new();

    for line in table_slice.lines() {
        if line.is_empty() {
            continue;
        }

        if line.trim_start_matches(' ').starts_with(start_marker) {
            if header.is_none() {
                header = Some(line.to_string());
            }
            continue;
        }

        data.push(line.chars().skip(1).collect());
    }

    match header {
        Some(header) => Ok(ClassifiedRows { header, data }),
        None => Err(ParseError::HeaderNotFound {
            marker: start_marker.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_keeps_first_header_only() {
        let slice = "HDR a b\n 1 Duke\n\n  HDR a b\n 2 Kansas\n";
        let rows = classify(slice, "HDR").unwrap();
        assert_eq!(rows.header, "HDR a b");
        assert_eq!(rows.data, vec!["1 Duke", "2 Kansas"]);
    }

    #[test]
    fn test_classify_strips_data_gutter() {
        let slice = "HDR a b\n*1 Duke\n";
        let rows = classify(slice, "HDR").unwrap();
        assert_eq!(rows.data, vec!["1 Duke"]);
    }

    #[test]
    fn test_classify_without_header_fails() {
        let err = classify(" 1 Duke\n 2 Kansas\n", "HDR").unwrap_err();
        assert!(matches!(err, ParseError::HeaderNotFound { .. }));
    }
}
