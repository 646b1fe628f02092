//! K-means over `linfa-clustering`, with k-means++ seeding and restarts.

use std::collections::HashSet;

use linfa::{
    traits::{Fit, Predict},
    DatasetBase,
};
use linfa_clustering::KMeans as LinfaKMeans;
use ndarray::{Array1, Array2};
use rand::{rngs::StdRng, SeedableRng};
use tracing::debug;

use crate::{cluster::traits::Clustering, error::NbaError, Result};

/// K-means configuration.
///
/// Several restarts are run from different k-means++ seedings and the one
/// with the lowest inertia wins. With `seed: Some(_)` the whole fit is
/// reproducible; with `None` the seedings draw from OS entropy.
///
/// When the data holds fewer distinct rows than `n_clusters`, the fit uses
/// one cluster per distinct row.
#[derive(Debug, Clone)]
pub struct KMeans {
    n_clusters: usize,
    max_iterations: usize,
    tolerance: f64,
    n_init: usize,
    seed: Option<u64>,
}

/// Result of a k-means fit.
#[derive(Debug, Clone)]
pub struct KMeansFit {
    /// One centroid per non-empty cluster
    pub centroids: Vec<Vec<f64>>,
    /// Label per input row, contiguous in `0..centroids.len()`
    pub labels: Vec<usize>,
    /// Sum of squared distances to the assigned centroid
    pub inertia: f64,
}

impl KMeansFit {
    pub fn k(&self) -> usize {
        self.centroids.len()
    }
}

impl KMeans {
    pub fn new(n_clusters: usize) -> Self {
        Self {
            n_clusters,
            max_iterations: 300,
            tolerance: 1e-4,
            n_init: 10,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Convergence threshold, relative to the mean per-feature variance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_n_init(mut self, n_init: usize) -> Self {
        self.n_init = n_init;
        self
    }

    pub fn fit(&self, data: &[Vec<f64>]) -> Result<KMeansFit> {
        let dims = validate(data)?;
        if self.n_clusters == 0 || self.n_clusters > data.len() {
            return Err(NbaError::InvalidParameter {
                name: "n_clusters",
                message: format!(
                    "{} clusters requested for {} rows",
                    self.n_clusters,
                    data.len()
                ),
            });
        }
        if self.n_init == 0 || self.max_iterations == 0 {
            return Err(NbaError::InvalidParameter {
                name: "n_init",
                message: "restarts and iterations must be at least 1".to_string(),
            });
        }
        if self.tolerance.is_nan() || self.tolerance <= 0.0 {
            return Err(NbaError::InvalidParameter {
                name: "tolerance",
                message: format!("{} is not a positive tolerance", self.tolerance),
            });
        }

        // k-means++ needs a fresh distinct point for every extra centroid
        let k = self.n_clusters.min(distinct_rows(data));
        if k < self.n_clusters {
            debug!(requested = self.n_clusters, k, "fewer distinct rows than clusters");
        }

        let scaled = self.tolerance * mean_variance(data, dims);
        let tolerance = if scaled > 0.0 { scaled } else { self.tolerance };
        let rng = match self.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };

        let records = Array2::from_shape_vec((data.len(), dims), data.concat()).map_err(|e| {
            NbaError::InvalidParameter {
                name: "data",
                message: e.to_string(),
            }
        })?;
        let dataset = DatasetBase::from(records);

        let model = LinfaKMeans::params_with_rng(k, rng)
            .n_runs(self.n_init)
            .max_n_iterations(self.max_iterations as u64)
            .tolerance(tolerance)
            .fit(&dataset)?;
        let labels: Array1<usize> = model.predict(dataset.records());

        let centroids: Vec<Vec<f64>> = model
            .centroids()
            .outer_iter()
            .map(|row| row.to_vec())
            .collect();
        let labels = labels.to_vec();
        let inertia = data
            .iter()
            .zip(&labels)
            .map(|(point, &l)| squared_euclidean(point, &centroids[l]))
            .sum();
        debug!(k, inertia, "kmeans fit");

        Ok(compact(KMeansFit {
            centroids,
            labels,
            inertia,
        }))
    }
}

impl Clustering for KMeans {
    fn fit_predict(&self, data: &[Vec<f64>]) -> Result<Vec<usize>> {
        Ok(self.fit(data)?.labels)
    }

    fn n_clusters(&self) -> usize {
        self.n_clusters
    }
}

/// Check the matrix is non-empty, rectangular and finite. Returns the dimensionality.
fn validate(data: &[Vec<f64>]) -> Result<usize> {
    let Some(first) = data.first() else {
        return Err(NbaError::InvalidParameter {
            name: "data",
            message: "cannot cluster an empty dataset".to_string(),
        });
    };
    let dims = first.len();
    if dims == 0 {
        return Err(NbaError::InvalidParameter {
            name: "data",
            message: "rows have no features".to_string(),
        });
    }
    for (i, row) in data.iter().enumerate() {
        if row.len() != dims {
            return Err(NbaError::InvalidParameter {
                name: "data",
                message: format!("row {} has {} features, expected {}", i, row.len(), dims),
            });
        }
        if row.iter().any(|v| !v.is_finite()) {
            return Err(NbaError::InvalidParameter {
                name: "data",
                message: format!("row {} holds a non-finite value", i),
            });
        }
    }
    Ok(dims)
}

/// Number of distinct rows, treating `-0.0` and `0.0` as equal.
pub(crate) fn distinct_rows(data: &[Vec<f64>]) -> usize {
    data.iter()
        .map(|row| row.iter().map(|v| (v + 0.0).to_bits()).collect::<Vec<u64>>())
        .collect::<HashSet<_>>()
        .len()
}

fn mean_variance(data: &[Vec<f64>], dims: usize) -> f64 {
    let n = data.len() as f64;
    let total: f64 = (0..dims)
        .map(|j| {
            let mean = data.iter().map(|r| r[j]).sum::<f64>() / n;
            data.iter().map(|r| (r[j] - mean).powi(2)).sum::<f64>() / n
        })
        .sum();
    total / dims as f64
}

/// Drop centroids nobody is assigned to and renumber labels to stay contiguous.
fn compact(mut fit: KMeansFit) -> KMeansFit {
    let mut used = vec![false; fit.centroids.len()];
    for &l in &fit.labels {
        used[l] = true;
    }
    if used.iter().all(|&u| u) {
        return fit;
    }

    let mut remap = vec![usize::MAX; used.len()];
    let mut centroids = Vec::new();
    for (old, centroid) in fit.centroids.into_iter().enumerate() {
        if used[old] {
            remap[old] = centroids.len();
            centroids.push(centroid);
        }
    }
    for l in fit.labels.iter_mut() {
        *l = remap[*l];
    }
    fit.centroids = centroids;
    fit
}

#[inline]
pub(crate) fn squared_euclidean(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}
