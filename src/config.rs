//! Pipeline defaults.

use std::time::Duration;

use crate::{
    cli::types::{PerMode, Season},
    cluster::SelectorConfig,
    nba::DEFAULT_REQUEST_DELAY,
};

/// Per-game columns clustered when no `--feature` is given.
pub const DEFAULT_FEATURES: [&str; 12] = [
    "PTS", "FGM", "FG_PCT", "FG3M", "FG3_PCT", "FT_PCT", "OREB", "AST", "STL", "BLK", "TOV",
    "DREB",
];

pub const DEFAULT_SAMPLE_SIZE: usize = 50;

/// Players whose last season is earlier than this are filtered out.
pub const DEFAULT_MIN_TO_YEAR: i64 = 2018;

/// Everything the `cluster` command needs besides the HTTP context.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub season: Season,
    pub per_mode: PerMode,
    pub sample_size: usize,
    pub roster: RosterFilter,
    pub features: Vec<String>,
    /// Pause between career stats requests
    pub delay: Duration,
    pub skip_incomplete: bool,
    pub selector: SelectorConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            season: Season::default(),
            per_mode: PerMode::default(),
            sample_size: DEFAULT_SAMPLE_SIZE,
            roster: RosterFilter::default(),
            features: DEFAULT_FEATURES.iter().map(|f| f.to_string()).collect(),
            delay: DEFAULT_REQUEST_DELAY,
            skip_incomplete: false,
            selector: SelectorConfig::default(),
        }
    }
}

/// Which roster rows are eligible for sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterFilter {
    /// Keep players with `TO_YEAR >= min_to_year`
    pub min_to_year: i64,
    /// Keep only players with `GAMES_PLAYED_FLAG == "Y"`
    pub require_games_played: bool,
}

impl Default for RosterFilter {
    fn default() -> Self {
        Self {
            min_to_year: DEFAULT_MIN_TO_YEAR,
            require_games_played: true,
        }
    }
}
