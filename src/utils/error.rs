use thiserror::Error;

/// Structural parse failures for the fixed-width ranking tables.
///
/// None of these are transient: every variant means the page text or the
/// season configuration no longer matches the expected table format, so
/// callers should surface them rather than retry.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("marker not found in page text: {marker:?}")]
    MarkerNotFound { marker: String },

    #[error("no header row starting with {marker:?} before the end of the table")]
    HeaderNotFound { marker: String },

    #[error("no data row contains the width probe {probe:?}")]
    ProbeNotFound { probe: String },

    #[error("duplicate column name after disambiguation: {name:?}")]
    DuplicateColumn { name: String },

    #[error("malformed win-loss record: {value:?}")]
    MalformedRecord { value: String },

    #[error("column {column:?} not present in decoded table")]
    UnknownColumn { column: String },

    #[error("no configuration for season {season}")]
    UnknownSeason { season: u16 },
}
