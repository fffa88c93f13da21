//! Evaluation report functions

use std::io::{self, Write};

use super::confusion::ConfusionMatrix;
use super::metrics;
use crate::error::EvalResult;

/// Compute the binary confusion matrix from predictions and ground truth
///
/// # Arguments
/// * `predicted` - Predicted class labels
/// * `actual` - Ground truth class labels
/// * `positive` - Label value treated as the positive class
///
/// # Errors
/// Returns `EvalError::LengthMismatch` if the sequences differ in length.
///
/// # Example
/// ```ignore
/// use evaluar::confusion_matrix;
///
/// let predicted = vec![1, 0, 1, 0];
/// let actual = vec![0, 0, 1, 1];
/// let cm = confusion_matrix(&predicted, &actual, &1)?;
///
/// assert_eq!(cm.as_counts(), (1, 1, 1, 1));
/// ```
pub fn confusion_matrix<L: PartialEq>(
    predicted: &[L],
    actual: &[L],
    positive: &L,
) -> EvalResult<ConfusionMatrix> {
    ConfusionMatrix::from_labels(predicted, actual, positive)
}

/// Format the five evaluation metrics, one labeled line each
///
/// Invokes each metric function with identical arguments, in a fixed
/// order: accuracy, sensitivity, specificity, positive predictive value,
/// negative predictive value. Undefined ratios render as `NaN`.
///
/// # Errors
/// Returns `EvalError::LengthMismatch` if the sequences differ in length.
pub fn evaluation_report<L: PartialEq>(
    predicted: &[L],
    actual: &[L],
    positive: &L,
) -> EvalResult<String> {
    let mut report = String::new();

    report.push_str(&format!(
        "Accuracy: {}\n",
        metrics::accuracy(predicted, actual, positive)?
    ));
    report.push_str(&format!(
        "Sensitivity: {}\n",
        metrics::sensitivity(predicted, actual, positive)?
    ));
    report.push_str(&format!(
        "Specificity: {}\n",
        metrics::specificity(predicted, actual, positive)?
    ));
    report.push_str(&format!(
        "Positive predictive value: {}\n",
        metrics::positive_predictive_value(predicted, actual, positive)?
    ));
    report.push_str(&format!(
        "Negative predictive value: {}\n",
        metrics::negative_predictive_value(predicted, actual, positive)?
    ));

    Ok(report)
}

/// Write the evaluation report to an output sink
///
/// # Errors
/// Returns `EvalError::LengthMismatch` if the sequences differ in length,
/// or `EvalError::Io` if the sink write fails.
pub fn write_evaluation<L: PartialEq, W: Write>(
    out: &mut W,
    predicted: &[L],
    actual: &[L],
    positive: &L,
) -> EvalResult<()> {
    let report = evaluation_report(predicted, actual, positive)?;
    out.write_all(report.as_bytes())?;
    Ok(())
}

/// Print the evaluation report to stdout
///
/// # Errors
/// Returns `EvalError::LengthMismatch` if the sequences differ in length,
/// or `EvalError::Io` if the write fails.
pub fn print_evaluation<L: PartialEq>(
    predicted: &[L],
    actual: &[L],
    positive: &L,
) -> EvalResult<()> {
    write_evaluation(&mut io::stdout(), predicted, actual, positive)
}
