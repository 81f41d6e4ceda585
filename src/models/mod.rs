use serde::{Deserialize, Serialize};

/// A decoded ranking table: ordered column names plus one row of cell text
/// per team. Rows always have exactly `columns.len()` cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RankingTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Position of a column by name, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Append a column, filling every row from `values` (one value per row).
    pub fn push_column(&mut self, name: &str, values: Vec<String>) {
        debug_assert_eq!(values.len(), self.rows.len());
        self.columns.push(name.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
    }

    /// Remove the columns at the given positions from the header and from
    /// every row. Positions must be valid; callers validate names first.
    pub fn remove_columns(&mut self, mut indices: Vec<usize>) {
        // Remove from the right so earlier positions stay valid.
        indices.sort_unstable();
        for &idx in indices.iter().rev() {
            self.columns.remove(idx);
            for row in &mut self.rows {
                row.remove(idx);
            }
        }
    }
}
