//! stats.nba.com access: response types, tables, fetchers and the paced batch loop.

pub mod batch;
pub mod http;
pub mod table;
pub mod types;

pub use batch::{collect_player_stats, StatsRequest, DEFAULT_REQUEST_DELAY};
pub use http::{fetch_career_stats, fetch_roster, NBA_STATS_BASE_URL};
pub use table::{Row, Table};
