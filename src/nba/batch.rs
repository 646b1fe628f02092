//! Serial, paced collection of per-player career stats.

use std::time::Duration;

use reqwest::{header::HeaderMap, Client};
use tracing::debug;

use crate::{
    cli::types::PerMode,
    core::Progress,
    nba::{http::fetch_career_stats, table::Table, types::columns},
    Result,
};


/// Default pause between two stats requests.
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_secs(2);

/// Everything needed to call the career stats endpoint repeatedly.
#[derive(Debug, Clone)]
pub struct StatsRequest<'a> {
    pub client: &'a Client,
    pub base_url: &'a str,
    pub headers: &'a HeaderMap,
    pub per_mode: PerMode,
    /// Pause between consecutive requests
    pub delay: Duration,
}

/// Fetch career stats for every player in `players`, in row order.
///
/// Each request is awaited (and followed by `delay`) before the next one is
/// sent, so the stats endpoint never sees more than one request at a time.
/// The first failure aborts the whole batch. The result is `players` left
/// joined to the combined stats on `PERSON_ID == PLAYER_ID`.
pub async fn collect_player_stats(
    request: &StatsRequest<'_>,
    players: &Table,
    progress: Progress,
) -> Result<Table> {
    let mut per_player = Vec::with_capacity(players.len());

    for (i, row) in players.iter().enumerate() {
        if i > 0 && !request.delay.is_zero() {
            debug!(delay_ms = request.delay.as_millis() as u64, "pausing before next request");
            tokio::time::sleep(request.delay).await;
        }

        let id = row.get_player_id(columns::PERSON_ID)?;
        let stats = fetch_career_stats(
            request.client,
            request.base_url,
            request.headers,
            request.per_mode,
            id,
        )
        .await?;
        per_player.push(stats);

        progress.line(format!("i={} Added player stats for ID={}", i, id));
    }

    let stats = Table::concat(per_player)?;
    players.left_join(&stats, columns::PERSON_ID, columns::PLAYER_ID)
}
