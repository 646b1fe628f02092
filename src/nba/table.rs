//! Column-named tables built from stats.nba.com result sets.
//!
//! A [`Table`] keeps the `headers`/`rowSet` shape of the API: an ordered list
//! of column names plus row-major JSON cells. Columns are addressed by name,
//! so callers pick features and identity fields without a typed schema for
//! every endpoint.

use std::collections::{HashMap, HashSet};

use serde_json::{Map, Number, Value};

use crate::{cli::types::PlayerId, error::NbaError, nba::types::ResultSet, Result};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

/// Borrowed view of a single table row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a Table,
    cells: &'a [Value],
}

impl Table {
    /// Build a table, checking that every row matches the column count.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        if let Some(bad) = rows.iter().find(|r| r.len() != columns.len()) {
            return Err(NbaError::InvalidParameter {
                name: "rowSet",
                message: format!(
                    "row has {} cells but {} headers were declared",
                    bad.len(),
                    columns.len()
                ),
            });
        }
        Ok(Self { columns, rows })
    }

    pub fn from_result_set(result_set: ResultSet) -> Result<Self> {
        Self::new(result_set.headers, result_set.row_set)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| NbaError::MissingColumn {
                column: name.to_string(),
            })
    }

    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        self.rows.get(index).map(|cells| Row {
            table: self,
            cells: cells.as_slice(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(move |cells| Row {
            table: self,
            cells: cells.as_slice(),
        })
    }

    /// Rewrite every cell of `column` as a JSON integer.
    ///
    /// Accepts integers, integral floats and numeric strings. Anything else
    /// (including null) fails with [`NbaError::InvalidInteger`].
    pub fn coerce_integer_column(&mut self, column: &str) -> Result<()> {
        let idx = self.column_index(column)?;
        for row in &mut self.rows {
            let cell = &mut row[idx];
            let n = coerce_integer(cell).ok_or_else(|| NbaError::InvalidInteger {
                column: column.to_string(),
                value: cell.to_string(),
            })?;
            *cell = Value::Number(Number::from(n));
        }
        Ok(())
    }

    /// Keep the rows for which `keep` returns true.
    pub fn filter_rows<F>(&self, mut keep: F) -> Table
    where
        F: FnMut(Row<'_>) -> bool,
    {
        let rows = self
            .rows
            .iter()
            .filter(|cells| {
                keep(Row {
                    table: self,
                    cells: cells.as_slice(),
                })
            })
            .cloned()
            .collect();
        Table {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Copy out the rows at `indices`, in the order given.
    pub fn select_rows(&self, indices: &[usize]) -> Table {
        let rows = indices
            .iter()
            .filter_map(|&i| self.rows.get(i).cloned())
            .collect();
        Table {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Stack tables that share the same columns.
    ///
    /// An empty input produces an empty table with no columns.
    pub fn concat(tables: Vec<Table>) -> Result<Table> {
        let mut iter = tables.into_iter();
        let Some(mut out) = iter.next() else {
            return Ok(Table::default());
        };
        for table in iter {
            if table.columns != out.columns {
                return Err(NbaError::SchemaMismatch {
                    expected: out.columns,
                    found: table.columns,
                });
            }
            out.rows.extend(table.rows);
        }
        Ok(out)
    }

    /// Left join `right` onto `self` where `self[left_key] == right[right_key]`.
    ///
    /// Every left row is kept. A left row with several matches is repeated
    /// once per match; a left row with none gets nulls for the right columns.
    /// Keys compare as integers. Column names present on both sides (other
    /// than the keys themselves) get `_x` / `_y` suffixes.
    pub fn left_join(&self, right: &Table, left_key: &str, right_key: &str) -> Result<Table> {
        let left_idx = self.column_index(left_key)?;
        // A keyless right side only happens when no stats were fetched.
        let right_idx = if right.columns.is_empty() {
            None
        } else {
            Some(right.column_index(right_key)?)
        };

        let overlap: HashSet<&str> = self
            .columns
            .iter()
            .map(String::as_str)
            .filter(|c| *c != left_key && right.columns.iter().any(|r| r == c))
            .collect();
        let shared = |c: &str| overlap.contains(c) && c != right_key;

        let mut columns: Vec<String> = self
            .columns
            .iter()
            .map(|c| if shared(c) { format!("{c}_x") } else { c.clone() })
            .collect();
        columns.extend(
            right
                .columns
                .iter()
                .map(|c| if shared(c) { format!("{c}_y") } else { c.clone() }),
        );

        let mut by_key: HashMap<i64, Vec<usize>> = HashMap::new();
        if let Some(ri) = right_idx {
            for (i, row) in right.rows.iter().enumerate() {
                if let Some(k) = coerce_integer(&row[ri]) {
                    by_key.entry(k).or_default().push(i);
                }
            }
        }

        let nulls = vec![Value::Null; right.columns.len()];
        let mut rows = Vec::with_capacity(self.rows.len());
        for left in &self.rows {
            let matches = coerce_integer(&left[left_idx]).and_then(|k| by_key.get(&k));
            match matches {
                Some(hits) => {
                    for &hit in hits {
                        let mut row = left.clone();
                        row.extend(right.rows[hit].iter().cloned());
                        rows.push(row);
                    }
                }
                None => {
                    let mut row = left.clone();
                    row.extend(nulls.iter().cloned());
                    rows.push(row);
                }
            }
        }

        Ok(Table { columns, rows })
    }

    /// Rows as JSON objects keyed by column name.
    pub fn to_records(&self) -> Vec<Map<String, Value>> {
        self.iter().map(|row| row.to_record()).collect()
    }
}

impl<'a> Row<'a> {
    pub fn get(&self, column: &str) -> Result<&'a Value> {
        let idx = self.table.column_index(column)?;
        Ok(&self.cells[idx])
    }

    pub fn get_i64(&self, column: &str) -> Result<i64> {
        let value = self.get(column)?;
        coerce_integer(value).ok_or_else(|| NbaError::InvalidInteger {
            column: column.to_string(),
            value: value.to_string(),
        })
    }

    pub fn get_player_id(&self, column: &str) -> Result<PlayerId> {
        let raw = self.get_i64(column)?;
        u64::try_from(raw)
            .map(PlayerId::new)
            .map_err(|_| NbaError::InvalidInteger {
                column: column.to_string(),
                value: raw.to_string(),
            })
    }

    /// Numeric value of a cell, or `None` for null and non-numeric cells.
    pub fn get_f64(&self, column: &str) -> Result<Option<f64>> {
        Ok(coerce_float(self.get(column)?))
    }

    pub fn get_str(&self, column: &str) -> Result<Option<&'a str>> {
        Ok(self.get(column)?.as_str())
    }

    pub fn cells(&self) -> &'a [Value] {
        self.cells
    }

    pub fn to_record(&self) -> Map<String, Value> {
        self.table
            .columns
            .iter()
            .cloned()
            .zip(self.cells.iter().cloned())
            .collect()
    }
}

/// Interpret a cell as an integer.
pub fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Interpret a cell as a float.
pub fn coerce_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
