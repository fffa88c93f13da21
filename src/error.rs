//! Evaluation error types

/// Result type for evaluation operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluation errors
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("test percentage must be between 0 and 100, got {0}")]
    InvalidPercentage(f64),

    #[error("predicted and actual labels must have the same length ({predicted} vs {actual})")]
    LengthMismatch { predicted: usize, actual: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
