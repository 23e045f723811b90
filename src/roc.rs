//! ROC curve and AUC computation.
//!
//! ROC (Receiver Operating Characteristic) curves trace the true positive
//! rate against the false positive rate as the decision threshold sweeps
//! from above the highest score down to the lowest.
//!
//! # References
//!
//! - Fawcett, T. (2006). "An introduction to ROC analysis." Pattern Recognition
//!   Letters, 27(8), 861-874.

use crate::curve::{sweep, validate, ClfCounts};
use crate::error::{Error, Result};
use crate::label::{partition, ClassLabel};
use crate::metrics::trapezoid;

/// A point on a ROC curve with the threshold that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// False positive rate.
    pub fpr: f64,
    /// True positive rate.
    pub tpr: f64,
    /// Scores `>= threshold` are classified positive.
    pub threshold: f64,
}

/// Options for [`compute_roc`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RocOptions<L> {
    /// Class treated as positive; inferred from the labels when absent.
    pub positive_label: Option<L>,
    /// Per-sample weights; every sample weighs 1 when absent.
    pub sample_weight: Option<Vec<f64>>,
    /// Drop interior points collinear with their neighbours.
    pub drop_intermediate: bool,
}

impl<L> Default for RocOptions<L> {
    fn default() -> Self {
        Self {
            positive_label: None,
            sample_weight: None,
            drop_intermediate: true,
        }
    }
}

impl<L> RocOptions<L> {
    /// Create options with defaults (inferred positive label, unit weights,
    /// intermediate points dropped).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the positive class.
    #[must_use]
    pub fn positive_label(mut self, label: L) -> Self {
        self.positive_label = Some(label);
        self
    }

    /// Set per-sample weights.
    #[must_use]
    pub fn sample_weight(mut self, weights: Vec<f64>) -> Self {
        self.sample_weight = Some(weights);
        self
    }

    /// Enable or disable collinear point thinning.
    #[must_use]
    pub fn drop_intermediate(mut self, drop: bool) -> Self {
        self.drop_intermediate = drop;
        self
    }
}

/// Computed ROC curve.
///
/// `fpr`, `tpr` and `thresholds` have equal length. The curve starts at
/// `(0, 0)` with a `+inf` threshold and ends at `(1, 1)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RocCurve {
    /// False positive rates, non-decreasing.
    pub fpr: Vec<f64>,
    /// True positive rates, non-decreasing.
    pub tpr: Vec<f64>,
    /// Decision thresholds, decreasing.
    pub thresholds: Vec<f64>,
    /// Area under the curve.
    pub auc: f64,
}

impl RocCurve {
    /// Number of points on the curve.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fpr.len()
    }

    /// True when the curve has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fpr.is_empty()
    }

    /// Iterate over the curve points in threshold order.
    pub fn points(&self) -> impl Iterator<Item = CurvePoint> + '_ {
        self.fpr
            .iter()
            .zip(&self.tpr)
            .zip(&self.thresholds)
            .map(|((&fpr, &tpr), &threshold)| CurvePoint {
                fpr,
                tpr,
                threshold,
            })
    }
}

/// Compute a ROC curve from binary labels and prediction scores.
///
/// # Arguments
///
/// * `labels` - Binary ground truth labels
/// * `scores` - Prediction scores (higher = more likely positive)
/// * `options` - Positive label, sample weights and thinning
///
/// # Errors
///
/// Invalid-input errors for malformed arguments, [`Error::UndefinedRate`]
/// when either class carries no weight.
///
/// # Example
///
/// ```
/// use trueno_roc::prelude::*;
///
/// let roc = compute_roc(&[0, 1, 1, 0], &[0.1, 0.4, 0.35, 0.8], &RocOptions::new()).unwrap();
/// assert_eq!(roc.fpr, vec![0.0, 0.5, 0.5, 1.0]);
/// assert_eq!(roc.tpr, vec![0.0, 0.0, 1.0, 1.0]);
/// assert!((roc.auc - 0.5).abs() < 1e-12);
/// ```
pub fn compute_roc<L: ClassLabel>(
    labels: &[L],
    scores: &[f64],
    options: &RocOptions<L>,
) -> Result<RocCurve> {
    roc_with_positive(labels, scores, options).map(|(roc, _)| roc)
}

/// Compute a ROC curve along with the positive class it was computed for.
pub(crate) fn roc_with_positive<L: ClassLabel>(
    labels: &[L],
    scores: &[f64],
    options: &RocOptions<L>,
) -> Result<(RocCurve, L)> {
    let weights = options.sample_weight.as_deref();
    validate(labels.len(), scores, weights)?;

    let partition = partition(labels, options.positive_label.as_ref())?;
    let counts = sweep(&partition.is_positive, scores, weights)?;
    let roc = roc_from_counts(&counts, options.drop_intermediate)?;

    Ok((roc, partition.positive))
}

/// Normalize sweep counts into a ROC curve.
pub fn roc_from_counts(counts: &ClfCounts, drop_intermediate: bool) -> Result<RocCurve> {
    let total_positives = counts.total_positive();
    let total_negatives = counts.total_negative();

    if total_positives <= 0.0 {
        return Err(Error::UndefinedRate { class: "positive" });
    }
    if total_negatives <= 0.0 {
        return Err(Error::UndefinedRate { class: "negative" });
    }

    // Start at (0, 0) with threshold above every score
    let mut fps = Vec::with_capacity(counts.len() + 2);
    let mut tps = Vec::with_capacity(counts.len() + 2);
    let mut thresholds = Vec::with_capacity(counts.len() + 2);
    fps.push(0.0);
    tps.push(0.0);
    thresholds.push(f64::INFINITY);
    fps.extend_from_slice(&counts.fps);
    tps.extend_from_slice(&counts.tps);
    thresholds.extend_from_slice(&counts.thresholds);

    let kept = if drop_intermediate {
        non_collinear_indices(&fps, &tps)
    } else {
        (0..fps.len()).collect()
    };

    let mut fpr: Vec<f64> = kept.iter().map(|&i| fps[i] / total_negatives).collect();
    let mut tpr: Vec<f64> = kept.iter().map(|&i| tps[i] / total_positives).collect();
    let mut thresholds: Vec<f64> = kept.iter().map(|&i| thresholds[i]).collect();

    // Ensure we end at (1, 1)
    if let (Some(&x), Some(&y)) = (fpr.last(), tpr.last()) {
        if x < 1.0 || y < 1.0 {
            fpr.push(1.0);
            tpr.push(1.0);
            thresholds.push(f64::NEG_INFINITY);
        }
    }

    let auc = trapezoid(&fpr, &tpr);

    log::debug!(
        "roc curve: {} thresholds, {} points kept, auc={auc:.6}",
        counts.len(),
        fpr.len()
    );

    Ok(RocCurve {
        fpr,
        tpr,
        thresholds,
        auc,
    })
}

/// Indices of the points that change the direction of the curve.
///
/// A point is dropped when it lies exactly on the segment joining the last
/// kept point and its successor. The curve is monotone in both coordinates,
/// so such a point is always between the two and the polyline (and its
/// area) is unchanged. Endpoints are always kept.
fn non_collinear_indices(fps: &[f64], tps: &[f64]) -> Vec<usize> {
    let n = fps.len();
    if n <= 2 {
        return (0..n).collect();
    }

    let mut kept = Vec::with_capacity(n);
    kept.push(0);
    let mut anchor = 0;
    for i in 1..n - 1 {
        let cross = (fps[i] - fps[anchor]) * (tps[i + 1] - tps[anchor])
            - (fps[i + 1] - fps[anchor]) * (tps[i] - tps[anchor]);
        if cross != 0.0 {
            kept.push(i);
            anchor = i;
        }
    }
    kept.push(n - 1);
    kept
}
