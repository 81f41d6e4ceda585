use crate::models::RankingTable;

/// Decode fixed-width data lines into a table.
///
/// Fields are cut at the cumulative offsets of `widths` and trimmed. Only as
/// many leading columns as `widths` covers are populated; extra names are
/// ignored because some seasons' header carries more label tokens than the
/// data has columns (multi-word labels). Lines shorter than the full width
/// sum decode their missing trailing fields as empty strings.
pub fn decode(data_lines: &[String], widths: &[usize], names: &[String]) -> RankingTable {
    let column_count = widths.len().min(names.len());
    let mut table = RankingTable::new(names[..column_count].to_vec());

    for line in data_lines {
        let chars: Vec<char> = line.chars().collect();
        let mut row = Vec::with_capacity(column_count);
        let mut offset = 0;

        for &width in &widths[..column_count] {
            let field: String = if offset < chars.len() {
                let end = (offset + width).min(chars.len());
                chars[offset..end].iter().collect()
            } else {
                String::new()
            };
            row.push(field.trim().to_string());
            offset += width;
        }

        table.rows.push(row);
    }

    table
}
