//! Binary classification metrics
//!
//! Five ratio metrics over the confusion counts. Each function recomputes
//! the confusion matrix from its inputs; a zero denominator yields
//! `f64::NAN` rather than an error, so callers can tell an undefined ratio
//! apart from a computed one without error handling.

use serde::{Deserialize, Serialize};

use super::confusion::ConfusionMatrix;
use crate::error::EvalResult;

/// Guarded ratio: NaN on a zero denominator, with a stderr notice
fn ratio(numerator: usize, denominator: usize, metric: &str) -> f64 {
    if denominator == 0 {
        eprintln!("{metric} is undefined: zero denominator");
        return f64::NAN;
    }
    numerator as f64 / denominator as f64
}

/// Proportion of correctly classified samples: (TP + TN) / total
///
/// NaN when the inputs are empty.
///
/// # Errors
/// Returns `EvalError::LengthMismatch` if the sequences differ in length.
pub fn accuracy<L: PartialEq>(predicted: &[L], actual: &[L], positive: &L) -> EvalResult<f64> {
    let cm = ConfusionMatrix::from_labels(predicted, actual, positive)?;
    Ok(ratio(
        cm.true_positives() + cm.true_negatives(),
        cm.total(),
        "accuracy",
    ))
}

/// True positive rate (recall): TP / (TP + FN)
///
/// NaN when no actual positives exist.
///
/// # Errors
/// Returns `EvalError::LengthMismatch` if the sequences differ in length.
pub fn sensitivity<L: PartialEq>(predicted: &[L], actual: &[L], positive: &L) -> EvalResult<f64> {
    let cm = ConfusionMatrix::from_labels(predicted, actual, positive)?;
    Ok(ratio(
        cm.true_positives(),
        cm.true_positives() + cm.false_negatives(),
        "sensitivity",
    ))
}

/// True negative rate: TN / (TN + FP)
///
/// NaN when no actual negatives exist.
///
/// # Errors
/// Returns `EvalError::LengthMismatch` if the sequences differ in length.
pub fn specificity<L: PartialEq>(predicted: &[L], actual: &[L], positive: &L) -> EvalResult<f64> {
    let cm = ConfusionMatrix::from_labels(predicted, actual, positive)?;
    Ok(ratio(
        cm.true_negatives(),
        cm.true_negatives() + cm.false_positives(),
        "specificity",
    ))
}

/// Precision for the positive class: TP / (TP + FP)
///
/// NaN when no predicted positives exist.
///
/// # Errors
/// Returns `EvalError::LengthMismatch` if the sequences differ in length.
pub fn positive_predictive_value<L: PartialEq>(
    predicted: &[L],
    actual: &[L],
    positive: &L,
) -> EvalResult<f64> {
    let cm = ConfusionMatrix::from_labels(predicted, actual, positive)?;
    Ok(ratio(
        cm.true_positives(),
        cm.true_positives() + cm.false_positives(),
        "positive predictive value",
    ))
}

/// Precision for the negative class: TN / (TN + FN)
///
/// NaN when no predicted negatives exist.
///
/// # Errors
/// Returns `EvalError::LengthMismatch` if the sequences differ in length.
pub fn negative_predictive_value<L: PartialEq>(
    predicted: &[L],
    actual: &[L],
    positive: &L,
) -> EvalResult<f64> {
    let cm = ConfusionMatrix::from_labels(predicted, actual, positive)?;
    Ok(ratio(
        cm.true_negatives(),
        cm.true_negatives() + cm.false_negatives(),
        "negative predictive value",
    ))
}

/// All five binary metrics computed from one confusion matrix
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BinaryMetrics {
    /// (TP + TN) / total
    pub accuracy: f64,
    /// TP / (TP + FN)
    pub sensitivity: f64,
    /// TN / (TN + FP)
    pub specificity: f64,
    /// TP / (TP + FP)
    pub positive_predictive_value: f64,
    /// TN / (TN + FN)
    pub negative_predictive_value: f64,
}

impl BinaryMetrics {
    /// Compute all five metrics from confusion counts
    ///
    /// Undefined ratios come back as NaN, same as the free functions.
    pub fn from_confusion_matrix(cm: &ConfusionMatrix) -> Self {
        let (tp, fp, tn, fn_) = cm.as_counts();
        Self {
            accuracy: ratio(tp + tn, cm.total(), "accuracy"),
            sensitivity: ratio(tp, tp + fn_, "sensitivity"),
            specificity: ratio(tn, tn + fp, "specificity"),
            positive_predictive_value: ratio(tp, tp + fp, "positive predictive value"),
            negative_predictive_value: ratio(tn, tn + fn_, "negative predictive value"),
        }
    }

    /// Compute from predictions and ground truth
    ///
    /// # Errors
    /// Returns `EvalError::LengthMismatch` if the sequences differ in
    /// length.
    pub fn from_labels<L: PartialEq>(
        predicted: &[L],
        actual: &[L],
        positive: &L,
    ) -> EvalResult<Self> {
        let cm = ConfusionMatrix::from_labels(predicted, actual, positive)?;
        Ok(Self::from_confusion_matrix(&cm))
    }
}
