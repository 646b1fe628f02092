//! CLI argument definitions and parsing.

pub mod types;

use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use types::{PerMode, PlayerId, Season};

use crate::{
    cluster::{SelectorConfig, DEFAULT_SEED},
    config::{
        PipelineConfig, RosterFilter, DEFAULT_FEATURES, DEFAULT_MIN_TO_YEAR, DEFAULT_SAMPLE_SIZE,
    },
};

/// Connection settings shared by every command
#[derive(Debug, Args)]
pub struct ApiArgs {
    /// API base URL (or set `NBA_STATS_BASE_URL` env var).
    #[clap(long, global = true)]
    pub base_url: Option<String>,

    /// User-Agent header (or set `NBA_STATS_USER_AGENT` env var).
    #[clap(long, global = true)]
    pub user_agent: Option<String>,
}

/// Roster filter shared by `roster` and `cluster`
#[derive(Debug, Args)]
pub struct RosterArgs {
    /// Season in `YYYY-YY` form (e.g. 2016-17).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,

    /// Keep only players whose last season is at least this year.
    #[clap(long, default_value_t = DEFAULT_MIN_TO_YEAR)]
    pub min_to_year: i64,

    /// Also keep players that never appeared in a game.
    #[clap(long)]
    pub include_no_games: bool,
}

impl RosterArgs {
    pub fn filter(&self) -> RosterFilter {
        RosterFilter {
            min_to_year: self.min_to_year,
            require_games_played: !self.include_no_games,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the players who pass the roster filter
    Roster {
        #[clap(flatten)]
        roster: RosterArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show one player's regular season career totals
    Stats {
        /// stats.nba.com player ID (e.g. 201939).
        #[clap(long, short)]
        player_id: PlayerId,

        /// Aggregation mode for the stats.
        #[clap(long, value_enum, default_value_t = PerMode::default())]
        per_mode: PerMode,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Sample players, fetch their stats and cluster them.
    ///
    /// Tries every cluster count from `--min-k` to `--max-k` and reports the
    /// partition with the best silhouette score.
    Cluster {
        #[clap(flatten)]
        args: ClusterArgs,

        /// Output the report as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

/// Pipeline flags of the `cluster` command
#[derive(Debug, Args)]
pub struct ClusterArgs {
    #[clap(flatten)]
    pub roster: RosterArgs,

    /// Number of players to sample from the filtered roster.
    #[clap(long, short = 'n', default_value_t = DEFAULT_SAMPLE_SIZE)]
    pub sample_size: usize,

    /// Smallest cluster count to try.
    #[clap(long, default_value_t = 2)]
    pub min_k: usize,

    /// Largest cluster count to try.
    #[clap(long, default_value_t = 8)]
    pub max_k: usize,

    /// Stat column to cluster on (repeatable): `-f PTS -f AST`. Defaults to 12 per-game stats.
    #[clap(long = "feature", short = 'f')]
    pub features: Option<Vec<String>>,

    /// Seconds to wait between stats requests.
    #[clap(long, default_value_t = 2.0)]
    pub delay_secs: f64,

    /// Seed for sampling and k-means.
    #[clap(long, default_value_t = DEFAULT_SEED, conflicts_with = "unseeded")]
    pub seed: u64,

    /// Draw randomness from the OS instead of a fixed seed.
    #[clap(long)]
    pub unseeded: bool,

    /// Drop players with missing stats instead of failing.
    #[clap(long)]
    pub skip_incomplete: bool,

    /// Aggregation mode for the stats.
    #[clap(long, value_enum, default_value_t = PerMode::default())]
    pub per_mode: PerMode,
}

#[derive(Debug, Parser)]
#[clap(name = "nba-clusters", about = "Cluster NBA players by their career stats")]
pub struct NbaClusters {
    #[clap(flatten)]
    pub api: ApiArgs,

    #[clap(subcommand)]
    pub command: Commands,
}

impl ClusterArgs {
    /// Validate the flags and fold them into a [`PipelineConfig`].
    pub fn into_config(self) -> crate::Result<PipelineConfig> {
        if !self.delay_secs.is_finite() || self.delay_secs < 0.0 {
            return Err(crate::NbaError::InvalidParameter {
                name: "delay-secs",
                message: format!("{} is not a non-negative number of seconds", self.delay_secs),
            });
        }
        if self.sample_size == 0 {
            return Err(crate::NbaError::InvalidParameter {
                name: "sample-size",
                message: "must be at least 1".to_string(),
            });
        }

        Ok(PipelineConfig {
            season: self.roster.season,
            per_mode: self.per_mode,
            sample_size: self.sample_size,
            roster: self.roster.filter(),
            features: self
                .features
                .filter(|f| !f.is_empty())
                .unwrap_or_else(|| DEFAULT_FEATURES.iter().map(|f| f.to_string()).collect()),
            delay: Duration::from_secs_f64(self.delay_secs),
            skip_incomplete: self.skip_incomplete,
            selector: SelectorConfig::default()
                .with_range(self.min_k, self.max_k)
                .with_seed((!self.unseeded).then_some(self.seed)),
        })
    }
}

#[cfg(test)]
mod tests;
