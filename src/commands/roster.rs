//! Roster command implementation

use std::fmt::Write as _;

use crate::{
    config::RosterFilter,
    core::Progress,
    nba::{fetch_roster, types::columns, Table},
    Result, Season,
};

use super::common::{filter_roster, write_output, ApiContext};

/// Handle the roster command
pub async fn handle_roster(
    ctx: &ApiContext,
    season: Season,
    filter: RosterFilter,
    as_json: bool,
) -> Result<()> {
    let progress = Progress::for_output(as_json);

    let roster = fetch_roster(&ctx.client, &ctx.base_url, &ctx.headers, season).await?;
    let players = filter_roster(&roster, &filter)?;
    progress.line(format!(
        "Got {} of {} players playing up to {}.",
        players.len(),
        roster.len(),
        filter.min_to_year
    ));

    write_output(as_json, &players.to_records(), &roster_lines(&players)?)
}

/// One `PERSON_ID  TO_YEAR  name` line per player.
pub fn roster_lines(players: &Table) -> Result<String> {
    let mut text = String::new();
    for row in players.iter() {
        let id = row.get_player_id(columns::PERSON_ID)?;
        let to_year = row.get_i64(columns::TO_YEAR)?;
        let name = row
            .get_str(columns::DISPLAY_LAST_COMMA_FIRST)?
            .unwrap_or_default();
        let _ = writeln!(text, "{:>8}  {}  {}", id.as_u64(), to_year, name);
    }
    Ok(text)
}
