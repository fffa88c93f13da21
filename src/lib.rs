//! Binary classifier evaluation utilities
//!
//! Two independent tool groups:
//!
//! - `split`: random partition of a dataset into train/test subsets by a
//!   caller-specified percentage
//! - `classification`: binary confusion matrix, ratio metrics, and labeled
//!   evaluation reports
//!
//! ## Example
//!
//! ```ignore
//! use evaluar::{accuracy, evaluation_report, train_test_split};
//!
//! let (train, test) = train_test_split(&data, 20.0)?;
//!
//! let acc = accuracy(&predicted, &actual, &1)?;
//! println!("{}", evaluation_report(&predicted, &actual, &1)?);
//! ```

pub mod classification;
pub mod error;
pub mod split;

// Re-export main types
pub use classification::{
    accuracy, confusion_matrix, evaluation_report, negative_predictive_value,
    positive_predictive_value, print_evaluation, sensitivity, specificity, write_evaluation,
    BinaryMetrics, ConfusionMatrix,
};
pub use error::{EvalError, EvalResult};
pub use split::{train_test_split, TrainTestSplit};
