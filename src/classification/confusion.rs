//! Confusion matrix for binary classification

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EvalError, EvalResult};

/// Binary confusion matrix for a chosen positive class
///
/// Labels equal to the positive class count as positive; every other value
/// counts as negative. The four counts always sum to the input length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    true_positives: usize,
    false_positives: usize,
    true_negatives: usize,
    false_negatives: usize,
}

impl ConfusionMatrix {
    /// Count outcomes from parallel predicted/actual label sequences
    ///
    /// Each index pair lands in exactly one bucket by testing both sides
    /// against the positive class independently.
    ///
    /// # Errors
    /// Returns `EvalError::LengthMismatch` if the sequences differ in
    /// length; no counting is performed.
    pub fn from_labels<L: PartialEq>(
        predicted: &[L],
        actual: &[L],
        positive: &L,
    ) -> EvalResult<Self> {
        if predicted.len() != actual.len() {
            return Err(EvalError::LengthMismatch {
                predicted: predicted.len(),
                actual: actual.len(),
            });
        }

        let mut cm = Self {
            true_positives: 0,
            false_positives: 0,
            true_negatives: 0,
            false_negatives: 0,
        };

        for (pred, act) in predicted.iter().zip(actual.iter()) {
            match (pred == positive, act == positive) {
                (true, true) => cm.true_positives += 1,
                (true, false) => cm.false_positives += 1,
                (false, false) => cm.true_negatives += 1,
                (false, true) => cm.false_negatives += 1,
            }
        }

        Ok(cm)
    }

    /// True positives: predicted positive, actually positive
    pub fn true_positives(&self) -> usize {
        self.true_positives
    }

    /// False positives: predicted positive, actually negative
    pub fn false_positives(&self) -> usize {
        self.false_positives
    }

    /// True negatives: predicted negative, actually negative
    pub fn true_negatives(&self) -> usize {
        self.true_negatives
    }

    /// False negatives: predicted negative, actually positive
    pub fn false_negatives(&self) -> usize {
        self.false_negatives
    }

    /// Total number of samples
    pub fn total(&self) -> usize {
        self.true_positives + self.false_positives + self.true_negatives + self.false_negatives
    }

    /// Counts as a `(TP, FP, TN, FN)` tuple
    pub fn as_counts(&self) -> (usize, usize, usize, usize) {
        (
            self.true_positives,
            self.false_positives,
            self.true_negatives,
            self.false_negatives,
        )
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confusion Matrix:")?;
        writeln!(f, "       Pred + Pred -")?;
        writeln!(
            f,
            "True + {:>6} {:>6}",
            self.true_positives, self.false_negatives
        )?;
        writeln!(
            f,
            "True - {:>6} {:>6}",
            self.false_positives, self.true_negatives
        )?;
        Ok(())
    }
}
