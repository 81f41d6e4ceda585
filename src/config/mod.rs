use crate::utils::error::ParseError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Literal marking the end of the tabular data on every archive page.
pub const END_MARKER: &str = "--------------------";

/// Single-word team guaranteed to appear in every season's table, used to
/// pick the data row measured for fixed field widths.
pub const DEFAULT_PROBE: &str = "Duke";

/// Everything that varies season to season: where the page lives, which
/// literal marks the header row, and which decoded columns to drop before
/// writing the CSV.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonConfig {
    pub season: u16,
    pub url: String,
    pub start_marker: String,
    pub probe: String,
    pub drop_columns: Vec<String>,
}

/// Season-keyed configuration registry, injected into the pipeline rather
/// than read from globals so per-season runs are independently testable.
#[derive(Debug, Clone, Default)]
pub struct SeasonRegistry {
    seasons: HashMap<u16, SeasonConfig>,
}

impl SeasonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-loaded with every archived season (2003-2018).
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for config in builtin_seasons() {
            registry.insert(config);
        }
        registry
    }

    pub fn insert(&mut self, config: SeasonConfig) {
        self.seasons.insert(config.season, config);
    }

    pub fn get(&self, season: u16) -> Result<&SeasonConfig, ParseError> {
        self.seasons
            .get(&season)
            .ok_or(ParseError::UnknownSeason { season })
    }

    /// All configured season keys, oldest first.
    pub fn seasons(&self) -> Vec<u16> {
        let mut keys: Vec<u16> = self.seasons.keys().copied().collect();
        keys.sort_unstable();
        keys
    }
}

fn season(year: u16, url: &str, start_marker: &str, drop_columns: &[&str]) -> SeasonConfig {
    SeasonConfig {
        season: year,
        url: url.to_string(),
        start_marker: start_marker.to_string(),
        probe: DEFAULT_PROBE.to_string(),
        drop_columns: drop_columns.iter().map(|c| c.to_string()).collect(),
    }
}

fn builtin_seasons() -> Vec<SeasonConfig> {
    vec![
        season(
            2018,
            "https://www.masseyratings.com/cb/arch/compare2018-18.htm",
            "WLK BWE",
            &[
                "Record", "Rank_1", "Team_1", "Rank_2", "Team_2", "Rank_3", "Team_3", "BNT",
                "USA", "AP", "DES", "Mean", "Median", "St.Dev",
            ],
        ),
        season(
            2017,
            "https://www.masseyratings.com/cb/arch/compare2017-18.htm",
            "BWE WLK",
            &[
                "Record", "Rank_1", "Team_1", "Rank_2", "Team_2", "Rank_3", "Team_3", "Rank_4",
                "Team_4", "USA", "AP", "DES", "Mean", "Median", "St.Dev",
            ],
        ),
        season(
            2016,
            "https://www.masseyratings.com/cb/arch/compare2016-18.htm",
            "BWE FAS",
            &[
                "Record", "Rank_1", "Team_1", "Rank_2", "Team_2", "Rank_3", "Team_3", "D1A",
                "USA", "AP", "DES", "Mean", "Median", "St.Dev",
            ],
        ),
        season(
            2015,
            "https://www.masseyratings.com/cb/arch/compare2015-18.htm",
            "STF DII",
            &[
                "Record", "Rank_1", "Team_1", "Rank_2", "Team_2", "Rank_3", "Team_3", "D1A",
                "USA", "AP", "DES", "Mean", "Median", "St.Dev",
            ],
        ),
        season(
            2014,
            "https://www.masseyratings.com/cb/arch/compare2014-19.htm",
            "STH STF",
            &[
                "Record", "Rank_1", "Team_1", "Rank_2", "Team_2", "Rank_3", "Team_3", "D1A",
                "USA", "AP", "DES", "Mean", "Median", "St.Dev",
            ],
        ),
        season(
            2013,
            "https://www.masseyratings.com/cb/arch/compare2013-19.htm",
            "KPK STH",
            &[
                "Record", "Rank_1", "Team_1", "Rank_2", "Team_2", "Rank_3", "Team_3", "D1A",
                "USA", "AP", "DES", "Mean", "Median", "St.Dev",
            ],
        ),
        season(
            2012,
            "https://www.masseyratings.com/cb/arch/compare2012-18.htm",
            "KPK BOB",
            &[
                "Record", "Rank_1", "Team_1", "Rank_2", "Team_2", "Rank_3", "Team_3", "USA",
                "AP", "DES", "Mean", "Median", "St.Dev",
            ],
        ),
        season(
            2011,
            "https://www.masseyratings.com/cb/arch/compare2011-18.htm",
            "KPK SAG",
            &[
                "Record", "Rank_1", "Team_1", "Rank_2", "Team_2", "USA", "AP", "DES", "Mean",
                "Median", "St.Dev",
            ],
        ),
        season(
            2010,
            "https://www.masseyratings.com/cb/arch/compare2010-18.htm",
            "MAS SAG",
            &[
                "Record", "Rank_1", "Team_1", "Rank_2", "Team_2", "TRX", "USA", "AP", "DES",
                "Mean", "Median", "St.Dev",
            ],
        ),
        season(
            2009,
            "https://www.masseyratings.com/cb/arch/compare2009-18.htm",
            "BOB GRN",
            &[
                "Record", "Rank_1", "Team_1", "Rank_2", "Team_2", "TRX", "USA", "AP", "DES",
                "Mean", "Median", "St.Dev",
            ],
        ),
        season(
            2008,
            "https://www.masseyratings.com/cb/arch/compare2008-18.htm",
            "GRN BOB",
            &[
                "Record", "Rank_1", "Team_1", "Rank_2", "Team_2", "LYN", "USA", "AP", "DES",
                "Mean", "Median", "St.Dev",
            ],
        ),
        season(
            2007,
            "https://www.masseyratings.com/cb/arch/compare2007-18.htm",
            "ROH SEL",
            &[
                "Record", "Rank_1", "Team_1", "Rank_2", "Team_2", "LYN", "USA", "AP", "Mean",
                "Median", "St.Dev",
            ],
        ),
        season(
            2006,
            "https://www.masseyratings.com/cb/arch/compare2006-18.htm",
            "BOB GRN",
            &[
                "Record", "Rank_1", "Team_1", "TRX", "LYN", "USA", "AP", "Mean", "Median",
                "St.Dev",
            ],
        ),
        season(
            2005,
            "https://www.masseyratings.com/cb/arch/compare2005-18.htm",
            "BOB ROH",
            &[
                "Record", "Rank_1", "Team_1", "LYN", "DES", "USA", "AP", "Mean", "Median",
                "St.Dev",
            ],
        ),
        season(
            2004,
            "https://www.masseyratings.com/cb/arch/compare2004-17.htm",
            "WLK MAS",
            &[
                "Record", "Rank_1", "Team_1", "LYN", "DES", "USA", "AP", "Mean", "Median",
                "St.Dev",
            ],
        ),
        season(
            2003,
            "https://www.masseyratings.com/cb/arch/compare2003-14.htm",
            "SAG BOB",
            &["Record", "Rank_1", "Team_1", "USA", "AP", "Mean", "Median", "St.Dev"],
        ),
    ]
}
