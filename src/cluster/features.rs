//! Feature matrix extraction from a joined table.

use tracing::warn;

use crate::{
    error::NbaError,
    nba::table::{coerce_float, Table},
    Result,
};

/// Numeric rows ready for clustering, with the table row each one came from.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    pub rows: Vec<Vec<f64>>,
    /// `source_rows[i]` is the table row index of `rows[i]`
    pub source_rows: Vec<usize>,
}

impl FeatureMatrix {
    /// Pull `columns` out of `table` as floats.
    ///
    /// A null or non-numeric cell is an error naming the player (read from
    /// `id_column`) unless `skip_incomplete` is set, in which case the row is
    /// dropped with a warning.
    pub fn from_table(
        table: &Table,
        columns: &[String],
        id_column: &str,
        skip_incomplete: bool,
    ) -> Result<Self> {
        if columns.is_empty() {
            return Err(NbaError::InvalidParameter {
                name: "features",
                message: "at least one feature column is required".to_string(),
            });
        }
        let indices = columns
            .iter()
            .map(|c| table.column_index(c))
            .collect::<Result<Vec<_>>>()?;
        table.column_index(id_column)?;

        let mut rows = Vec::with_capacity(table.len());
        let mut source_rows = Vec::with_capacity(table.len());

        'rows: for (i, row) in table.iter().enumerate() {
            let mut values = Vec::with_capacity(indices.len());
            for (&idx, column) in indices.iter().zip(columns) {
                match coerce_float(&row.cells()[idx]).filter(|v| v.is_finite()) {
                    Some(v) => values.push(v),
                    None => {
                        let player_id = row.get(id_column)?.to_string();
                        if skip_incomplete {
                            warn!(%player_id, %column, "dropping player with missing feature");
                            continue 'rows;
                        }
                        return Err(NbaError::NonNumericFeature {
                            player_id,
                            column: column.clone(),
                        });
                    }
                }
            }
            rows.push(values);
            source_rows.push(i);
        }

        Ok(Self { rows, source_rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
