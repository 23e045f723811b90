//! Scalar summaries of classifier curves.
//!
//! Area under arbitrary monotone curves, ROC AUC with optional partial-AUC
//! standardization, and the precision-recall curve with average precision.
//!
//! # References
//!
//! - McClish, D. K. (1989). "Analyzing a portion of the ROC curve."
//!   Medical Decision Making, 9(3), 190-195.
//! - Davis, J., & Goadrich, M. (2006). "The relationship between Precision-Recall
//!   and ROC curves." ICML '06.

use crate::curve::{sweep, validate};
use crate::error::{Error, Result};
use crate::label::{partition, ClassLabel};
use crate::roc::{compute_roc, RocOptions};

/// Trapezoidal area for non-decreasing `x`.
pub(crate) fn trapezoid(x: &[f64], y: &[f64]) -> f64 {
    x.windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| (xs[1] - xs[0]) * (ys[0] + ys[1]) / 2.0)
        .sum()
}

/// Area under a curve using the trapezoidal rule.
///
/// `x` must be monotone: either non-decreasing or non-increasing. A
/// non-increasing `x` yields the same (positive) area as the reversed curve.
///
/// # Example
///
/// ```
/// use trueno_roc::metrics::auc;
///
/// let area = auc(&[0.0, 0.5, 1.0], &[0.0, 0.5, 1.0]).unwrap();
/// assert!((area - 0.5).abs() < 1e-12);
/// ```
pub fn auc(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(Error::DataLengthMismatch {
            labels_len: x.len(),
            scores_len: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(Error::EmptyData);
    }

    let mut direction = 1.0;
    if let Some(first_drop) = x.windows(2).position(|w| w[1] < w[0]) {
        if let Some(rise) = x.windows(2).position(|w| w[1] > w[0]) {
            return Err(Error::NonMonotonic {
                index: first_drop.max(rise) + 1,
            });
        }
        direction = -1.0;
    }

    Ok(direction * trapezoid(x, y))
}

/// Area under the ROC curve, optionally standardized up to `max_fpr`.
///
/// With `max_fpr` in `(0, 1)`, the partial area over `[0, max_fpr]` is
/// McClish-corrected so that a random classifier scores 0.5 and a perfect
/// one 1.0. `max_fpr = 1` returns the full AUC.
pub fn roc_auc_score<L: ClassLabel>(
    labels: &[L],
    scores: &[f64],
    options: &RocOptions<L>,
    max_fpr: Option<f64>,
) -> Result<f64> {
    if let Some(m) = max_fpr {
        if !(m > 0.0 && m <= 1.0) {
            return Err(Error::InvalidMaxFpr(m));
        }
    }

    let roc = compute_roc(labels, scores, options)?;

    let max_fpr = match max_fpr {
        Some(m) if m < 1.0 => m,
        _ => return Ok(roc.auc),
    };

    // First index with fpr > max_fpr; fpr[0] = 0 and the last fpr is 1.
    let stop = roc.fpr.partition_point(|&f| f <= max_fpr);
    let (x0, x1) = (roc.fpr[stop - 1], roc.fpr[stop]);
    let (y0, y1) = (roc.tpr[stop - 1], roc.tpr[stop]);
    let y_cut = y0 + (y1 - y0) * (max_fpr - x0) / (x1 - x0);

    let mut x = roc.fpr[..stop].to_vec();
    let mut y = roc.tpr[..stop].to_vec();
    x.push(max_fpr);
    y.push(y_cut);

    let partial = trapezoid(&x, &y);
    let min_area = 0.5 * max_fpr * max_fpr;
    let max_area = max_fpr;

    Ok(0.5 * (1.0 + (partial - min_area) / (max_area - min_area)))
}

/// Computed Precision-Recall curve.
///
/// Points run from the highest threshold down: recall is non-decreasing,
/// starting at `(recall 0, precision 1)` with a `+inf` threshold.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrCurve {
    /// Precision at each threshold.
    pub precision: Vec<f64>,
    /// Recall at each threshold.
    pub recall: Vec<f64>,
    /// Decision thresholds, decreasing.
    pub thresholds: Vec<f64>,
    /// Average Precision (step-wise area under the PR curve).
    pub average_precision: f64,
}

/// Compute a Precision-Recall curve from binary labels and prediction scores.
///
/// `options.drop_intermediate` is ignored: PR curves are not piecewise
/// linear in the same sense and every threshold is kept.
pub fn precision_recall_curve<L: ClassLabel>(
    labels: &[L],
    scores: &[f64],
    options: &RocOptions<L>,
) -> Result<PrCurve> {
    let weights = options.sample_weight.as_deref();
    validate(labels.len(), scores, weights)?;

    let partition = partition(labels, options.positive_label.as_ref())?;
    let counts = sweep(&partition.is_positive, scores, weights)?;

    let total_positives = counts.total_positive();
    if total_positives <= 0.0 {
        return Err(Error::UndefinedRate { class: "positive" });
    }

    let mut precision = Vec::with_capacity(counts.len() + 1);
    let mut recall = Vec::with_capacity(counts.len() + 1);
    let mut thresholds = Vec::with_capacity(counts.len() + 1);

    // At the highest threshold precision is undefined but we use 1
    precision.push(1.0);
    recall.push(0.0);
    thresholds.push(f64::INFINITY);

    for ((&tp, &fp), &threshold) in counts.tps.iter().zip(&counts.fps).zip(&counts.thresholds) {
        // Every threshold group carries positive weight, so tp + fp > 0
        precision.push(tp / (tp + fp));
        recall.push(tp / total_positives);
        thresholds.push(threshold);
    }

    let average_precision = step_area(&recall, &precision);

    Ok(PrCurve {
        precision,
        recall,
        thresholds,
        average_precision,
    })
}

/// Average precision: precision at each threshold weighted by the recall gained.
pub fn average_precision<L: ClassLabel>(
    labels: &[L],
    scores: &[f64],
    options: &RocOptions<L>,
) -> Result<f64> {
    precision_recall_curve(labels, scores, options).map(|pr| pr.average_precision)
}

/// Right-hand step integral of `y` over non-decreasing `x`.
fn step_area(x: &[f64], y: &[f64]) -> f64 {
    x.windows(2)
        .zip(&y[1..])
        .map(|(xs, &y)| (xs[1] - xs[0]) * y)
        .sum()
}
