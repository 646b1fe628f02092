use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{error::NbaError, Result};


/// Column names used from the stats.nba.com result sets.
pub mod columns {
    /// Roster identifier (`commonallplayers`)
    pub const PERSON_ID: &str = "PERSON_ID";
    /// Stats identifier (`playercareerstats`)
    pub const PLAYER_ID: &str = "PLAYER_ID";
    pub const DISPLAY_LAST_COMMA_FIRST: &str = "DISPLAY_LAST_COMMA_FIRST";
    pub const TO_YEAR: &str = "TO_YEAR";
    pub const GAMES_PLAYED_FLAG: &str = "GAMES_PLAYED_FLAG";
}

/// Index of the roster result set in a `commonallplayers` response.
pub const ROSTER_RESULT_SET: usize = 0;

/// Index of `CareerTotalsRegularSeason` in a `playercareerstats` response.
pub const CAREER_TOTALS_RESULT_SET: usize = 1;

/// One named table in a stats.nba.com response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResultSet {
    #[serde(default)]
    pub name: Option<String>,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

/// Top-level envelope shared by the stats endpoints
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResultSetsEnvelope {
    #[serde(rename = "resultSets")]
    pub result_sets: Vec<ResultSet>,
}

impl ResultSetsEnvelope {
    /// Take the result set at `index`, consuming the envelope.
    pub fn into_result_set(self, index: usize) -> Result<ResultSet> {
        let available = self.result_sets.len();
        self.result_sets
            .into_iter()
            .nth(index)
            .ok_or(NbaError::MissingResultSet { index, available })
    }
}
