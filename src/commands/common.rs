//! Shared setup for the command handlers: HTTP context, roster filtering
//! and sampling.

use std::io::{self, Write};

use rand::{rngs::StdRng, seq::index, SeedableRng};
use reqwest::{header::HeaderMap, Client};
use serde::Serialize;
use tracing::debug;

use crate::{
    config::RosterFilter,
    core::{build_headers, resolve_base_url, resolve_user_agent},
    nba::{types::columns, Table},
    Result,
};

/// Client, base URL and headers shared by every request in a run.
#[derive(Debug, Clone)]
pub struct ApiContext {
    pub client: Client,
    pub base_url: String,
    pub headers: HeaderMap,
}

impl ApiContext {
    /// Resolve the base URL and User-Agent (flag, then env var, then default)
    /// and build the client.
    pub fn new(base_url: Option<String>, user_agent: Option<String>) -> Result<Self> {
        let base_url = resolve_base_url(base_url);
        let user_agent = resolve_user_agent(user_agent);
        debug!(%base_url, %user_agent, "api context");

        Ok(Self {
            client: Client::new(),
            headers: build_headers(&user_agent)?,
            base_url,
        })
    }
}

/// Keep players still active at `filter.min_to_year` who have played a game.
pub fn filter_roster(roster: &Table, filter: &RosterFilter) -> Result<Table> {
    roster.column_index(columns::TO_YEAR)?;
    if filter.require_games_played {
        roster.column_index(columns::GAMES_PLAYED_FLAG)?;
    }

    Ok(roster.filter_rows(|row| {
        let recent = row
            .get_i64(columns::TO_YEAR)
            .map_or(false, |year| year >= filter.min_to_year);
        let played = !filter.require_games_played
            || matches!(row.get_str(columns::GAMES_PLAYED_FLAG), Ok(Some("Y")));
        recent && played
    }))
}

/// Draw `sample_size` rows without replacement, keeping table order.
///
/// Tables with at most `sample_size` rows come back whole.
pub fn sample_rows(table: &Table, sample_size: usize, seed: Option<u64>) -> Table {
    if table.len() <= sample_size {
        return table.clone();
    }

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let mut picked = index::sample(&mut rng, table.len(), sample_size).into_vec();
    picked.sort_unstable();
    table.select_rows(&picked)
}

/// Write a command's final output to stdout, as pretty JSON or as `text`.
pub fn write_output<T: Serialize + ?Sized>(as_json: bool, value: &T, text: &str) -> Result<()> {
    let mut out = io::stdout().lock();
    if as_json {
        writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    } else {
        write!(out, "{}", text)?;
    }
    out.flush()?;
    Ok(())
}
