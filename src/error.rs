//! Error types for the NBA clustering CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NbaError>;

#[derive(Error, Debug)]
pub enum NbaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse player ID: {0}")]
    InvalidPlayerId(#[from] std::num::ParseIntError),

    #[error("Result set {index} not found in response ({available} available)")]
    MissingResultSet { index: usize, available: usize },

    #[error("Column not found: {column}")]
    MissingColumn { column: String },

    #[error("Column {column} holds a non-integer value: {value}")]
    InvalidInteger { column: String, value: String },

    #[error("Player {player_id} has no numeric value for feature {column}")]
    NonNumericFeature { player_id: String, column: String },

    #[error("Cannot combine tables with different columns: {expected:?} vs {found:?}")]
    SchemaMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("K-means failed: {0}")]
    KMeans(#[from] linfa_clustering::KMeansError),

    #[error("Invalid cluster range {min}..={max} for {n_rows} rows")]
    InvalidClusterRange { min: usize, max: usize, n_rows: usize },

    #[error("Clustering produced {n_labels} distinct labels for {n_rows} rows; silhouette is undefined")]
    DegenerateClustering { n_labels: usize, n_rows: usize },

    #[error("Display name cannot be split into first and last name: {name:?}")]
    InvalidDisplayName { name: String },

    #[error("Invalid season: {season} (expected e.g. 2016-17)")]
    InvalidSeason { season: String },

    #[error("Invalid parameter {name}: {message}")]
    InvalidParameter { name: &'static str, message: String },

    #[error("No players matched the roster filter")]
    NoData,
}
