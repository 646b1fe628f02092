//! NBA player clustering library
//!
//! Pulls the player listing and per-player career totals from the public
//! stats.nba.com API, builds a joined table, and groups players with
//! k-means, choosing the cluster count by silhouette score.
//!
//! ## Pipeline
//!
//! - **Roster**: `commonallplayers` result set, filtered to recent players
//!   who appeared in a game, then sampled
//! - **Stats**: one `playercareerstats` call per sampled player, paced and
//!   strictly serial
//! - **Clustering**: k-means++ with restarts for every candidate count, best
//!   mean silhouette wins
//! - **Report**: cluster label to the players assigned to it
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_clusters::{
//!     commands::{cluster::run_pipeline, ApiContext},
//!     config::PipelineConfig,
//!     core::Progress,
//! };
//!
//! # async fn example() -> nba_clusters::Result<()> {
//! let ctx = ApiContext::new(None, None)?;
//! let config = PipelineConfig::default();
//!
//! let report = run_pipeline(&ctx, &config, Progress::Stdout).await?;
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! stats.nba.com rejects clients that do not look like a browser. Override
//! the built-in User-Agent or point at a mirror with:
//! ```bash
//! export NBA_STATS_USER_AGENT="Mozilla/5.0 ..."
//! export NBA_STATS_BASE_URL=http://localhost:9000
//! ```

pub mod cli;
pub mod cluster;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod nba;
pub mod report;

// Re-export commonly used types
pub use cli::types::{PerMode, PlayerId, Season};
pub use error::{NbaError, Result};
pub use nba::Table;
pub use report::{ClusterReport, PlayerIdentity};

pub const USER_AGENT_ENV_VAR: &str = "NBA_STATS_USER_AGENT";
pub const BASE_URL_ENV_VAR: &str = "NBA_STATS_BASE_URL";
