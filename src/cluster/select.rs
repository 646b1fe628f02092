//! Choosing the cluster count by silhouette score.

use std::collections::{BTreeSet, HashMap};

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;
use tracing::{info, warn};

use crate::{
    cluster::{kmeans::KMeans, silhouette::silhouette_score, traits::Clustering},
    error::NbaError,
    Result,
};

/// Seed used when the caller does not ask for an unseeded run.
pub const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Clone, PartialEq)]
pub struct SelectorConfig {
    /// Smallest candidate cluster count (inclusive)
    pub min_clusters: usize,
    /// Largest candidate cluster count (inclusive)
    pub max_clusters: usize,
    /// `None` draws k-means seedings from OS entropy
    pub seed: Option<u64>,
    pub n_init: usize,
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            min_clusters: 2,
            max_clusters: 8,
            seed: Some(DEFAULT_SEED),
            n_init: 10,
            max_iterations: 300,
            tolerance: 1e-4,
        }
    }
}

impl SelectorConfig {
    pub fn with_range(mut self, min_clusters: usize, max_clusters: usize) -> Self {
        self.min_clusters = min_clusters;
        self.max_clusters = max_clusters;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Check the candidate range against the number of rows to cluster.
    pub fn validate(&self, n_rows: usize) -> Result<()> {
        if self.min_clusters < 2
            || self.max_clusters < self.min_clusters
            || self.max_clusters >= n_rows
        {
            return Err(NbaError::InvalidClusterRange {
                min: self.min_clusters,
                max: self.max_clusters,
                n_rows,
            });
        }
        Ok(())
    }
}

/// Score of one candidate cluster count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CandidateScore {
    /// Cluster count the model was asked for
    pub n_clusters: usize,
    /// Non-empty clusters in the resulting partition
    pub effective_clusters: usize,
    pub score: f64,
}

/// The winning partition.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Non-empty clusters in the winning partition
    pub n_clusters: usize,
    pub score: f64,
    /// One label per row, in `0..n_clusters`
    pub labels: Vec<usize>,
    /// Every candidate scored, in scan order
    pub candidates: Vec<CandidateScore>,
}

/// Fit k-means for every candidate count and keep the best silhouette.
pub fn select_clusters(data: &[Vec<f64>], config: &SelectorConfig) -> Result<Selection> {
    select_clusters_with(data, config, |_| {})
}

/// [`select_clusters`], reporting each candidate's score as it is computed.
pub fn select_clusters_with<F>(
    data: &[Vec<f64>],
    config: &SelectorConfig,
    on_candidate: F,
) -> Result<Selection>
where
    F: FnMut(&CandidateScore),
{
    select_clusters_using(
        data,
        config,
        |n, seed| {
            KMeans::new(n)
                .with_seed(Some(seed))
                .with_n_init(config.n_init)
                .with_max_iterations(config.max_iterations)
                .with_tolerance(config.tolerance)
        },
        on_candidate,
    )
}

/// Scan `config`'s range with models built by `make_model(n, seed)`.
///
/// A later candidate replaces the running best only with a strictly higher
/// score, so ties go to the smallest cluster count. A model may return fewer
/// clusters than asked for (duplicate rows). Labels are renumbered onto
/// `0..count` and the selection reports the clusters that actually hold rows.
pub fn select_clusters_using<M, B, F>(
    data: &[Vec<f64>],
    config: &SelectorConfig,
    mut make_model: B,
    mut on_candidate: F,
) -> Result<Selection>
where
    M: Clustering,
    B: FnMut(usize, u64) -> M,
    F: FnMut(&CandidateScore),
{
    config.validate(data.len())?;

    // One stream of per-candidate seeds keeps the whole scan reproducible.
    let mut rng = match config.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let mut best: Option<Selection> = None;
    let mut candidates = Vec::new();

    for n in config.min_clusters..=config.max_clusters {
        let model = make_model(n, rng.gen());
        let (labels, effective) = contiguous(model.fit_predict(data)?);
        let score = silhouette_score(data, &labels)?;

        let candidate = CandidateScore {
            n_clusters: n,
            effective_clusters: effective,
            score,
        };
        if effective < n {
            warn!(n_clusters = n, effective, "fewer non-empty clusters than requested");
        }
        info!(n_clusters = n, effective, score, "scored candidate");
        on_candidate(&candidate);
        candidates.push(candidate);

        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(Selection {
                n_clusters: effective,
                score,
                labels,
                candidates: Vec::new(),
            });
        }
    }

    let mut best = best.ok_or(NbaError::InvalidClusterRange {
        min: config.min_clusters,
        max: config.max_clusters,
        n_rows: data.len(),
    })?;
    best.candidates = candidates;
    Ok(best)
}

/// Renumber labels onto `0..count` keeping their order. Returns the labels and `count`.
fn contiguous(mut labels: Vec<usize>) -> (Vec<usize>, usize) {
    let used: BTreeSet<usize> = labels.iter().copied().collect();
    let remap: HashMap<usize, usize> = used.iter().enumerate().map(|(i, &l)| (l, i)).collect();
    for l in labels.iter_mut() {
        *l = remap[&*l];
    }
    (labels, used.len())
}
