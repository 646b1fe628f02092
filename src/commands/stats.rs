//! Career stats command implementation

use std::fmt::Write as _;

use crate::{
    nba::{fetch_career_stats, Table},
    PerMode, PlayerId, Result,
};

use super::common::{write_output, ApiContext};

/// Handle the stats command
pub async fn handle_stats(
    ctx: &ApiContext,
    player_id: PlayerId,
    per_mode: PerMode,
    as_json: bool,
) -> Result<()> {
    let stats =
        fetch_career_stats(&ctx.client, &ctx.base_url, &ctx.headers, per_mode, player_id).await?;

    let text = if stats.is_empty() {
        format!("No career totals for player {} ({})\n", player_id, per_mode)
    } else {
        stat_lines(&stats)
    };
    write_output(as_json, &stats.to_records(), &text)
}

/// `COLUMN: value` lines, one block per result row.
pub fn stat_lines(stats: &Table) -> String {
    let width = stats.columns().iter().map(String::len).max().unwrap_or(0);
    let mut text = String::new();
    for (i, row) in stats.iter().enumerate() {
        if i > 0 {
            text.push('\n');
        }
        for (column, value) in stats.columns().iter().zip(row.cells()) {
            let value = match value.as_str() {
                Some(s) => s.to_string(),
                None => value.to_string(),
            };
            let _ = writeln!(text, "{:<width$}  {}", column, value, width = width);
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stat_lines_aligns_columns() {
        let table = Table::new(
            vec!["PLAYER_ID".into(), "PTS".into(), "LEAGUE_ID".into()],
            vec![vec![json!(201939), json!(23.5), json!("00")]],
        )
        .unwrap();

        assert_eq!(
            stat_lines(&table),
            "PLAYER_ID  201939\nPTS        23.5\nLEAGUE_ID  00\n"
        );
    }
}
