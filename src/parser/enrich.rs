use crate::models::RankingTable;
use crate::utils::error::ParseError;

/// Column holding the composite "wins-losses" string in every season.
pub const RECORD_COLUMN: &str = "Record";

/// Win percentage from a "wins-losses" record string.
///
/// Fails on anything other than exactly two integer parts, and on a
/// zero-game record (0-0): a team with no games is bad input data worth
/// investigating, not a 0.0 to default to.
pub fn compute_win_percentage(team_record: &str) -> Result<f64, ParseError> {
    let malformed = || ParseError::MalformedRecord {
        value: team_record.to_string(),
    };

    let parts: Vec<&str> = team_record.split('-').collect();
    if parts.len() != 2 {
        return Err(malformed());
    }

    let wins: u32 = parts[0].parse().map_err(|_| malformed())?;
    let losses: u32 = parts[1].parse().map_err(|_| malformed())?;

    if wins + losses == 0 {
        return Err(malformed());
    }

    Ok(f64::from(wins) / f64::from(wins + losses))
}

/// Append the constant `season` column and the `win_pct` column derived
/// from each row's `Record` field.
pub fn enrich(table: &mut RankingTable, season: u16) -> Result<(), ParseError> {
    let record_idx = table
        .column_index(RECORD_COLUMN)
        .ok_or_else(|| ParseError::UnknownColumn {
            column: RECORD_COLUMN.to_string(),
        })?;

    let mut win_pcts = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        win_pcts.push(compute_win_percentage(&row[record_idx])?.to_string());
    }

    let seasons = vec![season.to_string(); table.rows.len()];
    table.push_column("season", seasons);
    table.push_column("win_pct", win_pcts);
    Ok(())
}

/// Drop the season's configured unwanted columns from the table.
///
/// Every drop name is resolved against the actual column set before any
/// mutation, so a misconfigured season fails cleanly instead of leaving a
/// half-pruned table.
pub fn prune(table: &mut RankingTable, drop_columns: &[String]) -> Result<(), ParseError> {
    let mut indices = Vec::with_capacity(drop_columns.len());
    for name in drop_columns {
        let idx = table
            .column_index(name)
            .ok_or_else(|| ParseError::UnknownColumn {
                column: name.clone(),
            })?;
        indices.push(idx);
    }

    table.remove_columns(indices);
    Ok(())
}
