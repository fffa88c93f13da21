//! Binary classification evaluation
//!
//! Provides:
//! - Confusion matrix over a chosen positive class
//! - Accuracy, sensitivity, specificity, positive/negative predictive value
//! - Labeled evaluation reports

mod confusion;
mod metrics;
mod report;


// Re-export all public types and functions
pub use confusion::ConfusionMatrix;
pub use metrics::{
    accuracy, negative_predictive_value, positive_predictive_value, sensitivity, specificity,
    BinaryMetrics,
};
pub use report::{confusion_matrix, evaluation_report, print_evaluation, write_evaluation};
