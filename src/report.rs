//! Cluster membership report.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::{
    cli::types::PlayerId,
    cluster::{CandidateScore, FeatureMatrix, Selection},
    error::NbaError,
    nba::{table::Table, types::columns},
    Result,
};


/// Basic identity of a clustered player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerIdentity {
    pub player_id: PlayerId,
    pub first_name: String,
    pub last_name: String,
}

/// Cluster label to member players, plus how the cluster count was chosen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterReport {
    pub n_clusters: usize,
    pub silhouette: f64,
    pub candidates: Vec<CandidateScore>,
    pub clusters: BTreeMap<usize, Vec<PlayerIdentity>>,
}

/// Split a `"Last, First"` display name into `(first_name, last_name)`.
///
/// The name is split on whitespace: the last token is the first name and the
/// first token (without a trailing comma) is the last name. Middle tokens are
/// dropped, so `"Nance Jr., Larry"` gives `("Larry", "Nance")`. A single
/// token is used for both fields. Blank names are rejected.
pub fn split_display_name(display: &str) -> Result<(String, String)> {
    let tokens: Vec<&str> = display.split_whitespace().collect();
    let (Some(first_token), Some(last_token)) = (tokens.first(), tokens.last()) else {
        return Err(NbaError::InvalidDisplayName {
            name: display.to_string(),
        });
    };

    let last_name = first_token.trim_end_matches(',');
    let last_name = if last_name.is_empty() { *first_token } else { last_name };
    Ok((last_token.to_string(), last_name.to_string()))
}

impl ClusterReport {
    /// Group the rows behind `features` by their winning label.
    ///
    /// Every label in `0..n_clusters` gets an entry, in label order; members
    /// keep table order.
    pub fn build(table: &Table, features: &FeatureMatrix, selection: &Selection) -> Result<Self> {
        if features.source_rows.len() != selection.labels.len() {
            return Err(NbaError::InvalidParameter {
                name: "labels",
                message: format!(
                    "{} labels for {} clustered rows",
                    selection.labels.len(),
                    features.source_rows.len()
                ),
            });
        }

        let n_labels = selection
            .labels
            .iter()
            .max()
            .map_or(0, |m| m + 1)
            .max(selection.n_clusters);
        let mut clusters: BTreeMap<usize, Vec<PlayerIdentity>> =
            (0..n_labels).map(|label| (label, Vec::new())).collect();

        for (&row_idx, &label) in features.source_rows.iter().zip(&selection.labels) {
            let row = table.row(row_idx).ok_or_else(|| NbaError::InvalidParameter {
                name: "source_rows",
                message: format!("row {} is outside the table", row_idx),
            })?;

            let player_id = row.get_player_id(columns::PERSON_ID)?;
            let display = row
                .get_str(columns::DISPLAY_LAST_COMMA_FIRST)?
                .unwrap_or_default();
            let (first_name, last_name) = split_display_name(display)?;

            clusters.entry(label).or_default().push(PlayerIdentity {
                player_id,
                first_name,
                last_name,
            });
        }

        Ok(Self {
            n_clusters: selection.n_clusters,
            silhouette: selection.score,
            candidates: selection.candidates.clone(),
            clusters,
        })
    }

    pub fn total_players(&self) -> usize {
        self.clusters.values().map(Vec::len).sum()
    }
}

impl fmt::Display for ClusterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} clusters (silhouette {:.4}), {} players",
            self.n_clusters,
            self.silhouette,
            self.total_players()
        )?;
        for (label, members) in &self.clusters {
            writeln!(f, "\nCluster {} ({} players)", label, members.len())?;
            for p in members {
                writeln!(f, "  {} {} {}", p.player_id, p.first_name, p.last_name)?;
            }
        }
        Ok(())
    }
}
