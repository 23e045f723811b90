//! ROC curve display model.
//!
//! [`RocCurveDisplay`] holds computed curve statistics and turns them into a
//! [`RocPlot`]: the line data, legend label, axis labels, axis limits and an
//! optional chance-level reference line that a renderer draws. Nothing here
//! rasterizes.

use std::sync::Once;

use crate::error::{Error, Result};
use crate::label::ClassLabel;
use crate::roc::{roc_with_positive, RocOptions};

/// Default display name for curves computed from raw predictions.
pub const DEFAULT_NAME: &str = "Classifier";

/// Default label of the chance-level line.
pub const CHANCE_LEVEL_LABEL: &str = "Chance level (AUC = 0.5)";

/// Axis limits shared by both axes, padded so the curve is not clipped.
pub const AXIS_LIMITS: (f64, f64) = (-0.01, 1.01);

static LEGACY_PRED_WARNING: Once = Once::new();

/// Score arguments, accepting the legacy `y_pred` name.
///
/// `y_score` is the current name. `y_pred` is still honoured on its own,
/// with a deprecation warning logged once per process, but never together
/// with `y_score`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreArgs<'a> {
    /// Prediction scores.
    pub y_score: Option<&'a [f64]>,
    /// Legacy name for `y_score`.
    pub y_pred: Option<&'a [f64]>,
}

impl<'a> ScoreArgs<'a> {
    /// Scores passed under the current name.
    #[must_use]
    pub fn score(y_score: &'a [f64]) -> Self {
        Self {
            y_score: Some(y_score),
            y_pred: None,
        }
    }

    /// Scores passed under the legacy name.
    #[must_use]
    pub fn legacy_pred(y_pred: &'a [f64]) -> Self {
        Self {
            y_score: None,
            y_pred: Some(y_pred),
        }
    }

    /// Pick the scores to use.
    ///
    /// # Errors
    ///
    /// [`Error::ConflictingScores`] when both names are given,
    /// [`Error::MissingScores`] when neither is.
    pub fn resolve(self) -> Result<&'a [f64]> {
        match (self.y_score, self.y_pred) {
            (Some(_), Some(_)) => Err(Error::ConflictingScores),
            (Some(scores), None) => Ok(scores),
            (None, Some(scores)) => {
                LEGACY_PRED_WARNING.call_once(|| {
                    log::warn!(
                        "y_pred was deprecated in version 1.6 and will be removed in 1.8; use y_score instead"
                    );
                });
                Ok(scores)
            }
            (None, None) => Err(Error::MissingScores),
        }
    }
}

/// A polyline with an optional legend entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlotLine {
    /// X coordinates.
    pub x: Vec<f64>,
    /// Y coordinates.
    pub y: Vec<f64>,
    /// Legend label.
    pub label: Option<String>,
}

/// Everything a renderer needs to draw a ROC plot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RocPlot {
    /// The ROC curve itself.
    pub line: PlotLine,
    /// Diagonal reference line, when requested.
    pub chance_level: Option<PlotLine>,
    /// X axis label.
    pub x_label: String,
    /// Y axis label.
    pub y_label: String,
    /// X axis limits.
    pub x_lim: (f64, f64),
    /// Y axis limits.
    pub y_lim: (f64, f64),
    /// Axes use an equal aspect ratio with a box-adjusted frame.
    pub equal_aspect: bool,
}

/// Options for [`RocCurveDisplay::plot`].
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlotOptions {
    /// Overrides the display's name in the legend.
    pub name: Option<String>,
    /// Draw the chance-level diagonal.
    pub plot_chance_level: bool,
    /// Custom legend label for the chance-level line.
    pub chance_level_label: Option<String>,
}

impl PlotOptions {
    /// Create default plot options (no chance level, display name).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the legend name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Show or hide the chance-level reference line.
    #[must_use]
    pub fn chance_level(mut self, show: bool) -> Self {
        self.plot_chance_level = show;
        self
    }

    /// Set a custom chance-level legend label.
    #[must_use]
    pub fn chance_level_label(mut self, label: impl Into<String>) -> Self {
        self.chance_level_label = Some(label.into());
        self
    }
}

/// ROC curve statistics ready for plotting.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RocCurveDisplay {
    /// False positive rates.
    pub fpr: Vec<f64>,
    /// True positive rates.
    pub tpr: Vec<f64>,
    /// Area under the curve, when known.
    pub roc_auc: Option<f64>,
    /// Display name of the classifier.
    pub name: Option<String>,
    /// String form of the positive class.
    pub pos_label: Option<String>,
}

impl RocCurveDisplay {
    /// Create a display from precomputed rates.
    #[must_use]
    pub fn new(fpr: Vec<f64>, tpr: Vec<f64>) -> Self {
        Self {
            fpr,
            tpr,
            roc_auc: None,
            name: None,
            pos_label: None,
        }
    }

    /// Set the area under the curve.
    #[must_use]
    pub fn roc_auc(mut self, auc: f64) -> Self {
        self.roc_auc = Some(auc);
        self
    }

    /// Set the display name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the positive label shown on the axes.
    #[must_use]
    pub fn pos_label(mut self, label: impl Into<String>) -> Self {
        self.pos_label = Some(label.into());
        self
    }

    /// Compute the curve from labels and prediction scores.
    ///
    /// `name` defaults to [`DEFAULT_NAME`]. The positive label shown on the
    /// axes is the resolved positive class, explicit or inferred.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_roc::prelude::*;
    ///
    /// let scores = [0.1, 0.4, 0.35, 0.8];
    /// let display = RocCurveDisplay::from_predictions(
    ///     &[0, 1, 1, 0],
    ///     ScoreArgs::score(&scores),
    ///     &RocOptions::new(),
    ///     None,
    /// )
    /// .unwrap();
    ///
    /// let plot = display.plot(&PlotOptions::new());
    /// assert_eq!(plot.line.label.as_deref(), Some("Classifier (AUC = 0.50)"));
    /// assert_eq!(plot.x_label, "False Positive Rate (Positive label: 1)");
    /// ```
    pub fn from_predictions<L: ClassLabel>(
        labels: &[L],
        scores: ScoreArgs<'_>,
        options: &RocOptions<L>,
        name: Option<&str>,
    ) -> Result<Self> {
        let scores = scores.resolve()?;
        let (roc, positive) = roc_with_positive(labels, scores, options)?;

        Ok(Self {
            fpr: roc.fpr,
            tpr: roc.tpr,
            roc_auc: Some(roc.auc),
            name: Some(name.unwrap_or(DEFAULT_NAME).to_string()),
            pos_label: Some(positive.to_string()),
        })
    }

    /// Legend label for the curve.
    ///
    /// `"{name} (AUC = {auc:.2})"`, or whichever part is known.
    #[must_use]
    pub fn line_label(&self, name: Option<&str>) -> Option<String> {
        let name = name.or(self.name.as_deref());
        match (name, self.roc_auc) {
            (Some(name), Some(auc)) => Some(format!("{name} (AUC = {auc:.2})")),
            (None, Some(auc)) => Some(format!("AUC = {auc:.2}")),
            (Some(name), None) => Some(name.to_string()),
            (None, None) => None,
        }
    }

    fn axis_label(&self, base: &str) -> String {
        match &self.pos_label {
            Some(pos) => format!("{base} (Positive label: {pos})"),
            None => base.to_string(),
        }
    }

    /// Produce the plot model.
    #[must_use]
    pub fn plot(&self, options: &PlotOptions) -> RocPlot {
        let line = PlotLine {
            x: self.fpr.clone(),
            y: self.tpr.clone(),
            label: self.line_label(options.name.as_deref()),
        };

        let chance_level = options.plot_chance_level.then(|| PlotLine {
            x: vec![0.0, 1.0],
            y: vec![0.0, 1.0],
            label: Some(
                options
                    .chance_level_label
                    .clone()
                    .unwrap_or_else(|| CHANCE_LEVEL_LABEL.to_string()),
            ),
        });

        RocPlot {
            line,
            chance_level,
            x_label: self.axis_label("False Positive Rate"),
            y_label: self.axis_label("True Positive Rate"),
            x_lim: AXIS_LIMITS,
            y_lim: AXIS_LIMITS,
            equal_aspect: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const Y_TRUE: [i32; 4] = [0, 1, 1, 0];
    const Y_SCORE: [f64; 4] = [0.1, 0.4, 0.35, 0.8];

    #[test]
    fn test_default_labels() {
        let base = || RocCurveDisplay::new(vec![0.0, 0.5, 1.0], vec![0.0, 0.5, 1.0]);

        let plot = base().roc_auc(0.9).plot(&PlotOptions::new());
        assert_eq!(plot.line.label.as_deref(), Some("AUC = 0.90"));

        let plot = base().name("my_est").plot(&PlotOptions::new());
        assert_eq!(plot.line.label.as_deref(), Some("my_est"));

        let plot = base().roc_auc(0.8).name("my_est2").plot(&PlotOptions::new());
        assert_eq!(plot.line.label.as_deref(), Some("my_est2 (AUC = 0.80)"));

        assert_eq!(base().plot(&PlotOptions::new()).line.label, None);
    }

    #[test]
    fn test_plot_name_override() {
        let display = RocCurveDisplay::new(vec![0.0, 1.0], vec![0.0, 1.0])
            .roc_auc(0.5)
            .name("first");
        let plot = display.plot(&PlotOptions::new().name("second"));
        assert_eq!(plot.line.label.as_deref(), Some("second (AUC = 0.50)"));
    }

    #[test]
    fn test_axes() {
        let display = RocCurveDisplay::new(vec![0.0, 1.0], vec![0.0, 1.0]);
        let plot = display.plot(&PlotOptions::new());

        assert_eq!(plot.x_label, "False Positive Rate");
        assert_eq!(plot.y_label, "True Positive Rate");
        assert_eq!(plot.x_lim, (-0.01, 1.01));
        assert_eq!(plot.x_lim, plot.y_lim);
        assert!(plot.equal_aspect);
    }

    #[test]
    fn test_chance_level_line() {
        let display = RocCurveDisplay::new(vec![0.0, 1.0], vec![0.0, 1.0]);

        assert!(display.plot(&PlotOptions::new()).chance_level.is_none());

        let plot = display.plot(&PlotOptions::new().chance_level(true));
        let chance = plot.chance_level.unwrap();
        assert_eq!(chance.x, vec![0.0, 1.0]);
        assert_eq!(chance.y, vec![0.0, 1.0]);
        assert_eq!(chance.label.as_deref(), Some(CHANCE_LEVEL_LABEL));

        let plot = display.plot(
            &PlotOptions::new()
                .chance_level(true)
                .chance_level_label("DummyEstimator"),
        );
        assert_eq!(
            plot.chance_level.and_then(|c| c.label).as_deref(),
            Some("DummyEstimator")
        );
    }

    #[test]
    fn test_from_predictions_with_score() {
        let display = RocCurveDisplay::from_predictions(
            &Y_TRUE,
            ScoreArgs::score(&Y_SCORE),
            &RocOptions::new(),
            None,
        )
        .unwrap();

        assert_eq!(display.fpr, vec![0.0, 0.5, 0.5, 1.0]);
        assert_eq!(display.tpr, vec![0.0, 0.0, 1.0, 1.0]);
        assert_eq!(display.name.as_deref(), Some(DEFAULT_NAME));
        assert_eq!(display.pos_label.as_deref(), Some("1"));
    }

    #[test]
    fn test_from_predictions_legacy_pred() {
        let display = RocCurveDisplay::from_predictions(
            &Y_TRUE,
            ScoreArgs::legacy_pred(&Y_SCORE),
            &RocOptions::new(),
            Some("legacy"),
        )
        .unwrap();

        assert_eq!(display.fpr, vec![0.0, 0.5, 0.5, 1.0]);
        assert_eq!(display.tpr, vec![0.0, 0.0, 1.0, 1.0]);
        assert_eq!(display.name.as_deref(), Some("legacy"));
    }

    #[test]
    fn test_both_score_names_rejected() {
        let y_pred = [0.2, 0.3, 0.5, 0.1];
        let args = ScoreArgs {
            y_score: Some(&Y_SCORE[..]),
            y_pred: Some(&y_pred[..]),
        };

        let err = RocCurveDisplay::from_predictions(&Y_TRUE, args, &RocOptions::new(), None)
            .unwrap_err();
        assert_eq!(err, Error::ConflictingScores);
    }

    #[test]
    fn test_missing_scores_rejected() {
        let err = ScoreArgs::default().resolve().unwrap_err();
        assert_eq!(err, Error::MissingScores);
    }

    #[test]
    fn test_legacy_pred_warning_logged_once() {
        let first = ScoreArgs::legacy_pred(&Y_SCORE).resolve().unwrap();
        assert!(LEGACY_PRED_WARNING.is_completed());

        let second = ScoreArgs::legacy_pred(&Y_SCORE).resolve().unwrap();
        assert_eq!(first, second);
        assert!(LEGACY_PRED_WARNING.is_completed());
    }

    #[test]
    fn test_from_predictions_ambiguous_signed_labels() {
        let err = RocCurveDisplay::from_predictions(
            &[-1, 0, 0, -1],
            ScoreArgs::score(&Y_SCORE),
            &RocOptions::new(),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, Error::AmbiguousPositiveLabel { .. }));
    }
}
