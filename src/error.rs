//! Error types for trueno-roc operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or ambiguous arguments, rejected before any computation.
    InvalidInput,
    /// Well-formed input whose class distribution leaves a rate undefined.
    UndefinedRate,
}

/// Errors that can occur in trueno-roc operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Labels and scores (or x and y) have different lengths.
    #[error("Data length mismatch: labels have {labels_len} elements, scores have {scores_len} elements")]
    DataLengthMismatch {
        /// Length of the label (or x) data.
        labels_len: usize,
        /// Length of the score (or y) data.
        scores_len: usize,
    },

    /// Sample weights do not match the number of samples.
    #[error("Sample weight length mismatch: expected {expected} weights, got {actual}")]
    WeightLengthMismatch {
        /// Number of samples.
        expected: usize,
        /// Number of weights supplied.
        actual: usize,
    },

    /// Empty data provided where non-empty is required.
    #[error("Empty data provided")]
    EmptyData,

    /// A score is NaN or infinite.
    #[error("Score at index {index} is not finite: {value}")]
    NonFiniteScore {
        /// Sample index.
        index: usize,
        /// Offending score.
        value: f64,
    },

    /// A sample weight is negative or not finite.
    #[error("Sample weight at index {index} must be finite and non-negative, got {value}")]
    InvalidWeight {
        /// Sample index.
        index: usize,
        /// Offending weight.
        value: f64,
    },

    /// The summed weight of one class is too large to represent.
    #[error("Total weight of {class} samples overflows to infinity")]
    WeightOverflow {
        /// Which class overflowed, `"positive"` or `"negative"`.
        class: &'static str,
    },

    /// More than two distinct label values were found.
    #[error("Labels must be binary, found at least {found} distinct values")]
    NonBinaryLabels {
        /// Number of distinct values seen before giving up.
        found: usize,
    },

    /// The positive class cannot be inferred from the label values.
    #[error("Positive label is ambiguous for classes [{}]; specify it explicitly", .classes.join(", "))]
    AmbiguousPositiveLabel {
        /// Distinct class values, formatted.
        classes: Vec<String>,
    },

    /// Both the current and the legacy score argument were given.
    #[error("`y_pred` and `y_score` cannot be both specified")]
    ConflictingScores,

    /// Neither the current nor the legacy score argument was given.
    #[error("No scores provided: pass `y_score`")]
    MissingScores,

    /// The x coordinates of a curve are neither non-decreasing nor non-increasing.
    #[error("x is neither increasing nor decreasing at index {index}")]
    NonMonotonic {
        /// Index of the first offending step.
        index: usize,
    },

    /// Partial AUC bound outside `(0, 1]`.
    #[error("max_fpr must be in (0, 1], got {0}")]
    InvalidMaxFpr(f64),

    /// A rate denominator is zero (only one class carries weight).
    #[error("Rate is undefined: total weight of {class} samples is zero")]
    UndefinedRate {
        /// Which class is missing, `"positive"` or `"negative"`.
        class: &'static str,
    },
}

impl Error {
    /// Returns the coarse kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UndefinedRate { .. } => ErrorKind::UndefinedRate,
            _ => ErrorKind::InvalidInput,
        }
    }
}
