pub mod config;
pub mod models;
pub mod parser;
pub mod scrapers;
pub mod utils;

pub use config::{SeasonConfig, SeasonRegistry};
pub use models::RankingTable;
pub use utils::error::ParseError;

use anyhow::{Context, Result};
use scrapers::massey::MasseyScraper;
use std::path::{Path, PathBuf};
use utils::data::{csv_path, load_table_from_cache, save_table_to_cache, save_table_to_csv};

/// Convert already-fetched page text for one season into its output table.
pub fn convert_season(page_text: &str, config: &SeasonConfig) -> Result<RankingTable> {
    parser::parse_table(page_text, config)
        .with_context(|| format!("Failed to convert season {}", config.season))
}

/// Fetch, convert, and write one season's rankings CSV.
///
/// With `use_cache` set, a previously parsed table is reloaded from its JSON
/// cache file instead of refetching the archive page. Returns the path of
/// the written CSV.
pub async fn scrape_season(
    registry: &SeasonRegistry,
    season: u16,
    out_dir: &Path,
    use_cache: bool,
) -> Result<PathBuf> {
    let config = registry.get(season)?;

    let cache_file = format!("cache/rankings_{}.json", season);
    let table = if use_cache && Path::new(&cache_file).exists() {
        tracing::info!("Loading season {} table from cache: {}", season, cache_file);
        load_table_from_cache(&cache_file)?
    } else {
        tracing::info!("Fetching season {} from {}", season, config.url);
        let scraper = MasseyScraper::new();
        let page_text = scraper
            .fetch_page_text(&config.url)
            .await
            .with_context(|| format!("Failed to fetch season {} page", season))?;

        let table = convert_season(&page_text, config)?;
        save_table_to_cache(&table, &cache_file)?;
        table
    };

    std::fs::create_dir_all(out_dir).context("Failed to create output directory")?;
    let path = csv_path(out_dir, season);
    save_table_to_csv(&table, &path)?;

    Ok(path)
}
