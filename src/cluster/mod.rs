//! Grouping players by their stat lines.
//!
//! ## K-means
//!
//! Assign each row to the nearest centroid, move each centroid to the mean
//! of its rows, repeat. The objective is the within-cluster sum of squares:
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ||x - μ_k||²
//! ```
//!
//! K-means needs the cluster count up front. [`select_clusters`] tries every
//! count in a range and keeps the partition with the highest mean
//! silhouette, which rewards tight clusters that sit far from each other.
//!
//! ## Usage
//!
//! ```rust
//! use nba_clusters::cluster::{select_clusters, SelectorConfig};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//!     vec![20.0, 0.0],
//!     vec![20.1, 0.1],
//! ];
//!
//! let config = SelectorConfig::default().with_range(2, 4);
//! let selection = select_clusters(&data, &config).unwrap();
//! assert_eq!(selection.n_clusters, 3);
//! assert_eq!(selection.labels[0], selection.labels[1]);
//! ```

mod features;
mod kmeans;
mod select;
mod silhouette;
mod traits;

pub use features::FeatureMatrix;
pub use kmeans::{KMeans, KMeansFit};
pub use select::{
    select_clusters, select_clusters_using, select_clusters_with, CandidateScore, SelectorConfig,
    Selection, DEFAULT_SEED,
};
pub use silhouette::silhouette_score;
pub use traits::Clustering;
