use crate::models::RankingTable;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Output path for one season's CSV under `out_dir`.
pub fn csv_path(out_dir: &Path, season: u16) -> PathBuf {
    out_dir.join(format!("rankings_{}.csv", season))
}

/// Write the table as CSV, replacing any existing file for that season.
/// Header row first, one row per team, no index column.
pub fn save_table_to_csv(table: &RankingTable, path: &Path) -> Result<()> {
    if path.is_file() {
        std::fs::remove_file(path).context("Failed to remove previous CSV file")?;
    }

    let mut writer = csv::Writer::from_path(path).context("Failed to create CSV file")?;
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush().context("Failed to flush CSV file")?;

    Ok(())
}

/// Save a parsed table to a JSON cache file.
pub fn save_table_to_cache(table: &RankingTable, cache_file: &str) -> Result<()> {
    if let Some(parent) = Path::new(cache_file).parent() {
        std::fs::create_dir_all(parent).context("Failed to create cache directory")?;
    }
    let json = serde_json::to_string_pretty(table).context("Failed to serialize table")?;
    std::fs::write(cache_file, json).context("Failed to write cache file")?;
    Ok(())
}

/// Load a parsed table from a JSON cache file.
pub fn load_table_from_cache(cache_file: &str) -> Result<RankingTable> {
    let json = std::fs::read_to_string(cache_file).context("Failed to read cache file")?;
    let table: RankingTable = serde_json::from_str(&json).context("Failed to deserialize table")?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> RankingTable {
        RankingTable {
            columns: vec!["Rank".to_string(), "Team".to_string(), "win_pct".to_string()],
            rows: vec![
                vec!["1".to_string(), "Duke".to_string(), "0.875".to_string()],
                vec!["2".to_string(), "Kansas".to_string(), "0.84375".to_string()],
            ],
        }
    }

    #[test]
    fn test_csv_path() {
        let path = csv_path(Path::new("data"), 2018);
        assert_eq!(path, Path::new("data/rankings_2018.csv"));
    }

    #[test]
    fn test_save_table_to_csv() {
        let path = std::env::temp_dir().join("massey_rankings_csv_test.csv");
        save_table_to_csv(&sample_table(), &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "Rank,Team,win_pct\n1,Duke,0.875\n2,Kansas,0.84375\n"
        );

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_rewrite_is_byte_identical() {
        let path = std::env::temp_dir().join("massey_rankings_overwrite_test.csv");
        let table = sample_table();

        save_table_to_csv(&table, &path).unwrap();
        let first = std::fs::read(&path).unwrap();
        save_table_to_csv(&table, &path).unwrap();
        let second = std::fs::read(&path).unwrap();
        assert_eq!(first, second);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_cache_round_trip() {
        let cache_file = std::env::temp_dir()
            .join("massey_rankings_cache_test.json")
            .to_string_lossy()
            .to_string();

        let table = sample_table();
        save_table_to_cache(&table, &cache_file).unwrap();
        let loaded = load_table_from_cache(&cache_file).unwrap();
        assert_eq!(loaded.columns, table.columns);
        assert_eq!(loaded.rows, table.rows);

        std::fs::remove_file(&cache_file).unwrap();
    }
}
