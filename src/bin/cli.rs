use anyhow::Result;
use clap::Parser;
use massey_rankings::config::SeasonRegistry;
use massey_rankings::scrape_season;
use massey_rankings::utils::logging::setup_logging;
use std::path::PathBuf;

/// Convert Massey Ratings comparison archives into per-season CSV files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Season to convert (e.g. 2018)
    #[arg(short, long)]
    season: Option<u16>,

    /// Convert every configured season
    #[arg(long)]
    all: bool,

    /// Output directory for the CSV files
    #[arg(short, long, default_value = "data")]
    out_dir: PathBuf,

    /// Reuse cached tables instead of refetching archive pages
    #[arg(long)]
    use_cache: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();

    let args = Args::parse();
    let registry = SeasonRegistry::builtin();

    let seasons = if args.all {
        registry.seasons()
    } else if let Some(season) = args.season {
        vec![season]
    } else {
        anyhow::bail!("pass --season <year> or --all");
    };

    println!("Massey Ratings Rankings Converter\n");

    for season in seasons {
        let path = scrape_season(&registry, season, &args.out_dir, args.use_cache).await?;
        println!("Saved season {} rankings to {}", season, path.display());
    }

    Ok(())
}
