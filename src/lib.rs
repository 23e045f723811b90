//! # Trueno-ROC
//!
//! ROC curves, AUC and precision-recall statistics for binary classifiers.
//!
//! Curves are computed from ground-truth labels and real-valued scores with
//! optional sample weights. Tied scores are always resolved together, and
//! collinear points can be dropped without changing the curve or its area.
//! The [`display`] module turns a computed curve into a plot model (line,
//! legend label, axis labels, limits) for any renderer to draw.
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_roc::prelude::*;
//!
//! let labels = ["b", "c", "c", "b"];
//! let scores = [0.1, 0.4, 0.35, 0.8];
//!
//! let roc = compute_roc(&labels, &scores, &RocOptions::new().positive_label("c"))?;
//! assert_eq!(roc.fpr, vec![0.0, 0.5, 0.5, 1.0]);
//! assert_eq!(roc.tpr, vec![0.0, 0.0, 1.0, 1.0]);
//! # Ok::<(), trueno_roc::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize/deserialize options, curves and plot models
//!
//! ## Academic References
//!
//! - Fawcett, T. (2006). "An introduction to ROC analysis." Pattern Recognition
//!   Letters, 27(8), 861-874.
//! - McClish, D. K. (1989). "Analyzing a portion of the ROC curve."
//!   Medical Decision Making, 9(3), 190-195.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Class labels and positive-class resolution.
pub mod label;

/// Threshold sweep over sorted scores.
pub mod curve;

/// ROC curve computation.
pub mod roc;

/// AUC, partial AUC and precision-recall metrics.
pub mod metrics;

// ============================================================================
// Display Modules
// ============================================================================

/// Non-rendering ROC plot model.
pub mod display;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-roc operations.
pub mod error;

pub use error::{Error, ErrorKind, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use trueno_roc::prelude::*;
/// ```
pub mod prelude {
    pub use crate::display::{PlotLine, PlotOptions, RocCurveDisplay, RocPlot, ScoreArgs};
    pub use crate::error::{Error, ErrorKind, Result};
    pub use crate::label::ClassLabel;
    pub use crate::metrics::{
        auc, average_precision, precision_recall_curve, roc_auc_score, PrCurve,
    };
    pub use crate::roc::{compute_roc, CurvePoint, RocCurve, RocOptions};
}

// ============================================================================
// Tests
// ============================================================================
