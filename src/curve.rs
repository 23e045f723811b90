//! Threshold sweep shared by the ROC and precision-recall computations.
//!
//! Samples are ordered by descending score and grouped by distinct score
//! value, so every sample sharing a score is resolved at the same
//! threshold regardless of how the sort orders ties.

use crate::error::{Error, Result};

/// Weighted cumulative counts at each distinct threshold.
///
/// Entry `i` counts every sample whose score is `>= thresholds[i]`.
/// Thresholds are strictly decreasing.
#[derive(Debug, Clone, PartialEq)]
pub struct ClfCounts {
    /// Cumulative weighted false positives.
    pub fps: Vec<f64>,
    /// Cumulative weighted true positives.
    pub tps: Vec<f64>,
    /// Distinct score values, descending.
    pub thresholds: Vec<f64>,
}

impl ClfCounts {
    /// Number of distinct thresholds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    /// True when no sample carried weight.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    /// Total weight of positive samples.
    #[must_use]
    pub fn total_positive(&self) -> f64 {
        self.tps.last().copied().unwrap_or(0.0)
    }

    /// Total weight of negative samples.
    #[must_use]
    pub fn total_negative(&self) -> f64 {
        self.fps.last().copied().unwrap_or(0.0)
    }
}

/// Check scores and weights against the number of labels.
pub(crate) fn validate(n_labels: usize, scores: &[f64], weights: Option<&[f64]>) -> Result<()> {
    if n_labels != scores.len() {
        return Err(Error::DataLengthMismatch {
            labels_len: n_labels,
            scores_len: scores.len(),
        });
    }

    if scores.is_empty() {
        return Err(Error::EmptyData);
    }

    if let Some((index, &value)) = scores.iter().enumerate().find(|(_, s)| !s.is_finite()) {
        return Err(Error::NonFiniteScore { index, value });
    }

    if let Some(weights) = weights {
        if weights.len() != scores.len() {
            return Err(Error::WeightLengthMismatch {
                expected: scores.len(),
                actual: weights.len(),
            });
        }
        if let Some((index, &value)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(Error::InvalidWeight { index, value });
        }
    }

    Ok(())
}

/// Compute weighted cumulative TP/FP counts per distinct score.
///
/// Zero-weight samples are skipped entirely and never introduce a
/// threshold of their own.
///
/// # Arguments
///
/// * `is_positive` - Per-sample membership in the positive class
/// * `scores` - Prediction scores (higher = more likely positive)
/// * `weights` - Optional non-negative sample weights
pub fn binary_clf_curve(
    is_positive: &[bool],
    scores: &[f64],
    weights: Option<&[f64]>,
) -> Result<ClfCounts> {
    validate(is_positive.len(), scores, weights)?;
    sweep(is_positive, scores, weights)
}

/// Sweep already validated inputs.
///
/// # Errors
///
/// [`Error::WeightOverflow`] when a class total is not finite.
pub(crate) fn sweep(
    is_positive: &[bool],
    scores: &[f64],
    weights: Option<&[f64]>,
) -> Result<ClfCounts> {
    let weight_of = |i: usize| weights.map_or(1.0, |w| w[i]);

    // Get sorted indices by score (descending)
    let mut indices: Vec<usize> = (0..scores.len()).filter(|&i| weight_of(i) > 0.0).collect();
    indices.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let mut counts = ClfCounts {
        fps: Vec::new(),
        tps: Vec::new(),
        thresholds: Vec::new(),
    };
    let mut tp = 0.0;
    let mut fp = 0.0;

    let mut i = 0;
    while i < indices.len() {
        let threshold = scores[indices[i]];

        // Resolve the whole tie group before emitting a point
        while i < indices.len() && scores[indices[i]] == threshold {
            let idx = indices[i];
            if is_positive[idx] {
                tp += weight_of(idx);
            } else {
                fp += weight_of(idx);
            }
            i += 1;
        }

        counts.tps.push(tp);
        counts.fps.push(fp);
        counts.thresholds.push(threshold);
    }

    // Cumulative sums are monotone, so checking the totals covers every point
    if !tp.is_finite() {
        return Err(Error::WeightOverflow { class: "positive" });
    }
    if !fp.is_finite() {
        return Err(Error::WeightOverflow { class: "negative" });
    }

    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_basic() {
        let pos = [false, true, true, false];
        let scores = [0.1, 0.4, 0.35, 0.8];

        let c = binary_clf_curve(&pos, &scores, None).unwrap();

        assert_eq!(c.thresholds, vec![0.8, 0.4, 0.35, 0.1]);
        assert_eq!(c.fps, vec![1.0, 1.0, 1.0, 2.0]);
        assert_eq!(c.tps, vec![0.0, 1.0, 2.0, 2.0]);
        assert_eq!(c.total_positive(), 2.0);
        assert_eq!(c.total_negative(), 2.0);
    }

    #[test]
    fn test_ties_grouped_into_one_threshold() {
        let pos = [false, true, false, true, true];
        let scores = [0.5, 0.5, 0.5, 0.9, 0.1];

        let c = binary_clf_curve(&pos, &scores, None).unwrap();

        assert_eq!(c.len(), 3);
        assert_eq!(c.thresholds, vec![0.9, 0.5, 0.1]);
        assert_eq!(c.tps, vec![1.0, 2.0, 3.0]);
        assert_eq!(c.fps, vec![0.0, 2.0, 2.0]);
    }

    #[test]
    fn test_weighted_counts() {
        let pos = [true, false, true];
        let scores = [0.9, 0.5, 0.2];
        let weights = [2.0, 3.0, 0.5];

        let c = binary_clf_curve(&pos, &scores, Some(&weights)).unwrap();

        assert_eq!(c.tps, vec![2.0, 2.0, 2.5]);
        assert_eq!(c.fps, vec![0.0, 3.0, 3.0]);
    }

    #[test]
    fn test_zero_weight_samples_skipped() {
        let pos = [true, false, true];
        let scores = [0.9, 0.5, 0.2];
        let weights = [1.0, 0.0, 1.0];

        let c = binary_clf_curve(&pos, &scores, Some(&weights)).unwrap();

        assert_eq!(c.thresholds, vec![0.9, 0.2]);
        assert_eq!(c.total_negative(), 0.0);
    }

    #[test]
    fn test_overflowing_weight_total_rejected() {
        let pos = [false, true, true, false];
        let scores = [0.1, 0.4, 0.35, 0.8];

        let result = binary_clf_curve(&pos, &scores, Some(&[1e308; 4]));
        assert_eq!(
            result.unwrap_err(),
            Error::WeightOverflow { class: "positive" }
        );

        let result = binary_clf_curve(&pos, &scores, Some(&[1e308, 1.0, 1.0, 1e308]));
        assert_eq!(
            result.unwrap_err(),
            Error::WeightOverflow { class: "negative" }
        );
    }

    #[test]
    fn test_length_mismatch() {
        let result = binary_clf_curve(&[true, false, true], &[0.5, 0.6], None);
        assert!(matches!(result, Err(Error::DataLengthMismatch { .. })));
    }

    #[test]
    fn test_empty() {
        let result = binary_clf_curve(&[], &[], None);
        assert_eq!(result.unwrap_err(), Error::EmptyData);
    }

    #[test]
    fn test_nan_score_rejected() {
        let result = binary_clf_curve(&[true, false], &[0.5, f64::NAN], None);
        assert!(matches!(result, Err(Error::NonFiniteScore { index: 1, .. })));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let result = binary_clf_curve(&[true, false], &[0.5, 0.4], Some(&[1.0, -1.0]));
        assert!(matches!(result, Err(Error::InvalidWeight { index: 1, .. })));
    }

    #[test]
    fn test_weight_length_mismatch() {
        let result = binary_clf_curve(&[true, false], &[0.5, 0.4], Some(&[1.0]));
        assert_eq!(
            result.unwrap_err(),
            Error::WeightLengthMismatch {
                expected: 2,
                actual: 1
            }
        );
    }
}
