//! Random train/test partitioning
//!
//! Splits a dataset into training and testing subsets by percentage. The
//! input slice is never mutated; each call shuffles a fresh copy.

use rand::prelude::*;

use crate::error::{EvalError, EvalResult};

/// Train/test splitter
///
/// Shuffles a copy of the dataset and carves off the requested percentage
/// as the test set.
#[derive(Clone, Debug)]
pub struct TrainTestSplit {
    test_percent: f64,
    seed: Option<u64>,
}

impl TrainTestSplit {
    /// Create a splitter reserving `test_percent` percent of the data for testing
    pub fn new(test_percent: f64) -> Self {
        Self { test_percent, seed: None }
    }

    /// Set random seed for a reproducible partition
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Partition `data` into `(train, test)` subsets
    ///
    /// The test set holds `floor(len * test_percent / 100)` elements drawn
    /// from a uniform random permutation of the input; the remainder is the
    /// train set.
    ///
    /// # Errors
    /// Returns `EvalError::InvalidPercentage` if the test percentage lies
    /// outside `[0, 100]`.
    pub fn split<T: Clone>(&self, data: &[T]) -> EvalResult<(Vec<T>, Vec<T>)> {
        if !(0.0..=100.0).contains(&self.test_percent) {
            return Err(EvalError::InvalidPercentage(self.test_percent));
        }

        let test_len = (data.len() as f64 * self.test_percent / 100.0).floor() as usize;

        let mut shuffled = data.to_vec();
        match self.seed {
            Some(seed) => shuffled.shuffle(&mut StdRng::seed_from_u64(seed)),
            None => shuffled.shuffle(&mut rand::rng()),
        }

        // First test_len elements of the permutation form the test set.
        let train = shuffled.split_off(test_len);
        Ok((train, shuffled))
    }
}

/// Split `data` into `(train, test)` subsets, reserving `test_percent`
/// percent of the elements for testing
///
/// Each call shuffles independently; use [`TrainTestSplit::with_seed`] for
/// a reproducible partition.
///
/// # Errors
/// Returns `EvalError::InvalidPercentage` if `test_percent` lies outside
/// `[0, 100]`.
pub fn train_test_split<T: Clone>(data: &[T], test_percent: f64) -> EvalResult<(Vec<T>, Vec<T>)> {
    TrainTestSplit::new(test_percent).split(data)
}
