//! Mean silhouette coefficient.

use crate::{cluster::kmeans::squared_euclidean, error::NbaError, Result};

/// Mean silhouette coefficient of a labelling, using Euclidean distance.
///
/// For row `i`, `a` is the mean distance to the other members of its cluster
/// and `b` the smallest mean distance to the members of another cluster;
/// `s(i) = (b - a) / max(a, b)`. Rows alone in their cluster score 0.
///
/// The score is only defined for `2 <= distinct labels <= rows - 1`;
/// anything else is [`NbaError::DegenerateClustering`].
pub fn silhouette_score(data: &[Vec<f64>], labels: &[usize]) -> Result<f64> {
    if data.len() != labels.len() {
        return Err(NbaError::InvalidParameter {
            name: "labels",
            message: format!("{} labels for {} rows", labels.len(), data.len()),
        });
    }

    let n = data.len();
    let k = labels.iter().max().map_or(0, |m| m + 1);
    let mut sizes = vec![0usize; k];
    for &l in labels {
        sizes[l] += 1;
    }
    let n_labels = sizes.iter().filter(|&&s| s > 0).count();
    if n_labels < 2 || n_labels >= n {
        return Err(NbaError::DegenerateClustering {
            n_labels,
            n_rows: n,
        });
    }

    let mut total = 0.0;
    let mut dist_sums = vec![0.0; k];
    for i in 0..n {
        let own = labels[i];
        if sizes[own] == 1 {
            continue;
        }

        dist_sums.iter_mut().for_each(|d| *d = 0.0);
        for j in 0..n {
            if i != j {
                dist_sums[labels[j]] += squared_euclidean(&data[i], &data[j]).sqrt();
            }
        }

        let a = dist_sums[own] / (sizes[own] - 1) as f64;
        let b = (0..k)
            .filter(|&c| c != own && sizes[c] > 0)
            .map(|c| dist_sums[c] / sizes[c] as f64)
            .fold(f64::INFINITY, f64::min);

        let denom = a.max(b);
        if denom > 0.0 {
            total += (b - a) / denom;
        }
    }

    Ok(total / n as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_separated_scores_near_one() {
        let data = vec![vec![0.0], vec![0.1], vec![10.0], vec![10.1]];
        let score = silhouette_score(&data, &[0, 0, 1, 1]).unwrap();
        assert!(score > 0.98, "score was {score}");
    }

    #[test]
    fn test_known_value() {
        // Points 0, 1, 4 on a line; clusters {0, 1} and {4}.
        // s(0) = (4 - 1) / 4, s(1) = (3 - 1) / 3, s(4) = 0 (singleton)
        let data = vec![vec![0.0], vec![1.0], vec![4.0]];
        let score = silhouette_score(&data, &[0, 0, 1]).unwrap();
        let expected = (0.75 + 2.0 / 3.0) / 3.0;
        assert!((score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_swapped_labels_score_negative() {
        let data = vec![vec![0.0], vec![0.1], vec![10.0], vec![10.1]];
        let score = silhouette_score(&data, &[0, 1, 0, 1]).unwrap();
        assert!(score < 0.0);
    }

    #[test]
    fn test_label_permutation_does_not_matter() {
        let data = vec![vec![0.0], vec![1.0], vec![5.0], vec![6.0], vec![6.5]];
        let a = silhouette_score(&data, &[0, 0, 1, 1, 1]).unwrap();
        let b = silhouette_score(&data, &[1, 1, 0, 0, 0]).unwrap();
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_labellings() {
        let data = vec![vec![0.0], vec![1.0], vec![2.0]];
        assert!(matches!(
            silhouette_score(&data, &[0, 0, 0]),
            Err(NbaError::DegenerateClustering { n_labels: 1, n_rows: 3 })
        ));
        assert!(matches!(
            silhouette_score(&data, &[0, 1, 2]),
            Err(NbaError::DegenerateClustering { n_labels: 3, n_rows: 3 })
        ));
    }

    #[test]
    fn test_length_mismatch() {
        let data = vec![vec![0.0], vec![1.0]];
        assert!(matches!(
            silhouette_score(&data, &[0]),
            Err(NbaError::InvalidParameter { .. })
        ));
    }
}
