//! Aggregation mode for career stats.

use std::fmt;

/// How stats.nba.com aggregates career numbers (`PerMode` query parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PerMode {
    /// Per-game averages
    #[default]
    PerGame,
    /// Raw career totals
    Totals,
    /// Normalized to 36 minutes
    Per36,
}

impl PerMode {
    pub fn as_query_value(&self) -> &'static str {
        match self {
            PerMode::PerGame => "PerGame",
            PerMode::Totals => "Totals",
            PerMode::Per36 => "Per36",
        }
    }
}

impl fmt::Display for PerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_value())
    }
}
