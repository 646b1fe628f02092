//! Fetchers for the two stats.nba.com endpoints used by the pipeline.

use reqwest::{header::HeaderMap, Client};
use serde_json::Value;
use tracing::debug;

use crate::{
    cli::types::{PerMode, PlayerId, Season},
    nba::{
        table::Table,
        types::{columns, ResultSetsEnvelope, CAREER_TOTALS_RESULT_SET, ROSTER_RESULT_SET},
    },
    Result,
};


/// Base path for the stats.nba.com API.
pub const NBA_STATS_BASE_URL: &str = "https://stats.nba.com/stats";

/// URL of the players-listing endpoint.
pub fn roster_url(base_url: &str) -> String {
    format!("{}/commonallplayers", base_url.trim_end_matches('/'))
}

/// Career stats URL up to (and including) the `PlayerID=` parameter.
///
/// The player identifier is appended directly to this string.
pub fn career_stats_url(base_url: &str, per_mode: PerMode) -> String {
    format!(
        "{}/playercareerstats?PerMode={}&PlayerID=",
        base_url.trim_end_matches('/'),
        per_mode
    )
}

/// Fetch every player known for `season` (`resultSets[0]`), with `TO_YEAR` as an integer.
pub async fn fetch_roster(
    client: &Client,
    base_url: &str,
    headers: &HeaderMap,
    season: Season,
) -> Result<Table> {
    let url = roster_url(base_url);
    let season = season.to_string();
    let params = [
        ("LeagueId", "00"),
        ("Season", season.as_str()),
        ("IsOnlyCurrentSeason", "0"),
    ];

    let body = get_json(client, &url, &params, headers).await?;
    let mut table = parse_result_set(body, ROSTER_RESULT_SET)?;
    table.coerce_integer_column(columns::TO_YEAR)?;
    Ok(table)
}

/// Fetch one player's regular-season career totals (`resultSets[1]`),
/// with `PLAYER_ID` as an integer.
pub async fn fetch_career_stats(
    client: &Client,
    base_url: &str,
    headers: &HeaderMap,
    per_mode: PerMode,
    player_id: PlayerId,
) -> Result<Table> {
    let url = format!("{}{}", career_stats_url(base_url, per_mode), player_id);

    let body = get_json(client, &url, &[], headers).await?;
    let mut table = parse_result_set(body, CAREER_TOTALS_RESULT_SET)?;
    table.coerce_integer_column(columns::PLAYER_ID)?;
    Ok(table)
}

/// Turn a raw response body into the table at `index`.
pub fn parse_result_set(body: Value, index: usize) -> Result<Table> {
    let envelope: ResultSetsEnvelope = serde_json::from_value(body)?;
    Table::from_result_set(envelope.into_result_set(index)?)
}

async fn get_json(
    client: &Client,
    url: &str,
    params: &[(&str, &str)],
    headers: &HeaderMap,
) -> Result<Value> {
    let builder = client.get(url).headers(headers.clone()).query(params);

    if let Some(req) = builder.try_clone().and_then(|b| b.build().ok()) {
        debug!(url = %req.url(), "GET");
    }

    let v = builder
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;
    Ok(v)
}
