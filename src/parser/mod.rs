pub mod classify;
pub mod decode;
pub mod enrich;
pub mod header;
pub mod locate;
pub mod widths;

use crate::config::{SeasonConfig, END_MARKER};
use crate::models::RankingTable;
use crate::utils::error::ParseError;

/// Convert one season's page text into its output table.
///
/// Linear pipeline over the preformatted text: locate the table slice,
/// classify rows, measure column widths from the probe line, normalize the
/// header, decode the fixed-width rows, then enrich with `season` and
/// `win_pct` and drop the season's unwanted columns. Any stage failing
/// aborts the season; no partial table is produced.
pub fn parse_table(page_text: &str, config: &SeasonConfig) -> Result<RankingTable, ParseError> {
    let slice = locate::locate(page_text, &config.start_marker, END_MARKER)?;
    let rows = classify::classify(slice, &config.start_marker)?;

    let widths = widths::measure_from_probe(&rows.data, &config.probe)?;
    let names = header::normalize_header(&rows.header)?;

    let mut table = decode::decode(&rows.data, &widths, &names);
    enrich::enrich(&mut table, config.season)?;
    enrich::prune(&mut table, &config.drop_columns)?;

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> SeasonConfig {
        SeasonConfig {
            season: 2018,
            url: "https://www.masseyratings.com/cb/arch/compare2018-18.htm".to_string(),
            start_marker: "WLK BWE".to_string(),
            probe: "Duke".to_string(),
            drop_columns: vec![
                "Record".to_string(),
                "Rank_1".to_string(),
                "Team_1".to_string(),
            ],
        }
    }

    // A miniature archive page: preamble, header row repeated mid-table for
    // readability, one-character gutter on every data row, and the trailing
    // separator. The Duke row calibrates the column widths.
    fn sample_page() -> String {
        let mut page = String::new();
        page.push_str("College Basketball Ranking Comparison\n");
        page.push_str("\n");
        page.push_str("WLK BWE  Rank Team      Record  Rank Team\n");
        page.push_str("\n");
        page.push_str(" 1    2    1    Duke        28-4    1    Duke\n");
        page.push_str(" 2    1    2    Kansas      27-5\n");
        page.push_str("  WLK BWE  Rank Team      Record  Rank Team\n");
        page.push_str("*3    3    3    Virginia    26-7    3    UVa\n");
        page.push_str("--------------------\n");
        page.push_str("Legend and notes follow the table.\n");
        page
    }

    #[test]
    fn test_parse_table_end_to_end() {
        let table = parse_table(&sample_page(), &sample_config()).unwrap();

        assert_eq!(
            table.columns,
            vec!["WLK", "BWE", "Rank", "Team", "season", "win_pct"]
        );
        assert_eq!(
            table.rows,
            vec![
                vec!["1", "2", "1", "Duke", "2018", "0.875"],
                vec!["2", "1", "2", "Kansas", "2018", "0.84375"],
                vec!["3", "3", "3", "Virginia", "2018", "0.7878787878787878"],
            ]
        );
    }

    #[test]
    fn test_repeated_header_rows_are_dropped() {
        let table = parse_table(&sample_page(), &sample_config()).unwrap();
        // Three data rows; the repeated header did not decode as data.
        assert_eq!(table.rows.len(), 3);
    }

    #[test]
    fn test_reencoding_reproduces_source_lines() {
        let config = sample_config();
        let page = sample_page();
        let slice = locate::locate(&page, &config.start_marker, END_MARKER).unwrap();
        let rows = classify::classify(slice, &config.start_marker).unwrap();
        let widths = widths::measure_from_probe(&rows.data, &config.probe).unwrap();
        let names = header::normalize_header(&rows.header).unwrap();
        let table = decode::decode(&rows.data, &widths, &names);

        for (cells, source) in table.rows.iter().zip(&rows.data) {
            let reencoded: String = cells
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{:<1$}", cell, width))
                .collect();
            assert_eq!(reencoded.trim_end(), source.trim_end());
        }
    }

    #[test]
    fn test_missing_end_marker_fails() {
        let page = sample_page().replace("--------------------", "");
        let err = parse_table(&page, &sample_config()).unwrap_err();
        assert!(matches!(err, ParseError::MarkerNotFound { .. }));
    }

    #[test]
    fn test_misconfigured_drop_column_fails() {
        let mut config = sample_config();
        config.drop_columns.push("St.Dev".to_string());
        let err = parse_table(&sample_page(), &config).unwrap_err();
        match err {
            ParseError::UnknownColumn { column } => assert_eq!(column, "St.Dev"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_misconfigured_start_marker_fails() {
        let mut config = sample_config();
        config.start_marker = "SAG BOB".to_string();
        let err = parse_table(&sample_page(), &config).unwrap_err();
        assert!(matches!(err, ParseError::MarkerNotFound { .. }));
    }
}
