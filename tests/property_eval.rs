//! Property tests for the evaluation utilities
//!
//! Ensures the splitter and metrics satisfy their invariants:
//! - Train/test partitions preserve length and multiset content
//! - Confusion counts always sum to the input length
//! - Metrics are bounded to [0, 1] or NaN, never infinite

use evaluar::{
    accuracy, confusion_matrix, negative_predictive_value, positive_predictive_value, sensitivity,
    specificity, train_test_split, TrainTestSplit,
};
use proptest::collection::vec;
use proptest::prelude::*;

// =============================================================================
// Strategy Helpers
// =============================================================================

/// Generate a vector of class labels in range [0, n_classes)
fn class_labels(
    n_classes: u8,
    len: impl Into<proptest::collection::SizeRange>,
) -> impl Strategy<Value = Vec<u8>> {
    vec(0..n_classes, len)
}

/// Generate pair of prediction/actual labels with same length
fn label_pair(
    n_classes: u8,
    len: std::ops::Range<usize>,
) -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    len.prop_flat_map(move |l| (vec(0..n_classes, l), vec(0..n_classes, l)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10_000))]

    // -------------------------------------------------------------------------
    // Splitter Properties
    // -------------------------------------------------------------------------

    #[test]
    fn prop_split_partition_sizes(
        data in vec(any::<u32>(), 0..200),
        pct in 0.0f64..=100.0
    ) {
        let (train, test) = train_test_split(&data, pct).unwrap();

        prop_assert_eq!(train.len() + test.len(), data.len());
        prop_assert_eq!(
            test.len(),
            (data.len() as f64 * pct / 100.0).floor() as usize
        );
    }

    #[test]
    fn prop_split_preserves_multiset(
        data in vec(any::<u32>(), 0..200),
        pct in 0.0f64..=100.0
    ) {
        let (train, test) = train_test_split(&data, pct).unwrap();

        let mut combined: Vec<u32> = train.into_iter().chain(test).collect();
        combined.sort_unstable();
        let mut expected = data;
        expected.sort_unstable();

        prop_assert_eq!(combined, expected);
    }

    #[test]
    fn prop_split_zero_percent(data in vec(any::<u32>(), 0..100)) {
        let (train, test) = train_test_split(&data, 0.0).unwrap();

        prop_assert!(test.is_empty());
        prop_assert_eq!(train.len(), data.len());
    }

    #[test]
    fn prop_split_full_percent(data in vec(any::<u32>(), 0..100)) {
        let (train, test) = train_test_split(&data, 100.0).unwrap();

        prop_assert!(train.is_empty());
        prop_assert_eq!(test.len(), data.len());
    }

    #[test]
    fn prop_split_rejects_out_of_range(
        data in vec(any::<u32>(), 0..20),
        pct in prop_oneof![-1e6f64..=-0.1, 100.1f64..=1e6]
    ) {
        prop_assert!(train_test_split(&data, pct).is_err());
    }

    #[test]
    fn prop_split_seeded_deterministic(
        data in vec(any::<u32>(), 0..100),
        pct in 0.0f64..=100.0,
        seed in any::<u64>()
    ) {
        let splitter = TrainTestSplit::new(pct).with_seed(seed);
        let first = splitter.split(&data).unwrap();
        let second = splitter.split(&data).unwrap();

        prop_assert_eq!(first, second);
    }

    // -------------------------------------------------------------------------
    // Confusion Matrix Properties
    // -------------------------------------------------------------------------

    #[test]
    fn prop_confusion_counts_sum(
        (predicted, actual) in label_pair(4, 0..100),
        positive in 0u8..6
    ) {
        let cm = confusion_matrix(&predicted, &actual, &positive).unwrap();
        let (tp, fp, tn, fn_) = cm.as_counts();

        prop_assert_eq!(tp + fp + tn + fn_, predicted.len());
        prop_assert_eq!(cm.total(), predicted.len());
    }

    #[test]
    fn prop_confusion_perfect_predictions(labels in class_labels(4, 1..100)) {
        let cm = confusion_matrix(&labels, &labels, &1).unwrap();

        prop_assert_eq!(cm.false_positives(), 0);
        prop_assert_eq!(cm.false_negatives(), 0);
    }

    // -------------------------------------------------------------------------
    // Metric Properties
    // -------------------------------------------------------------------------

    #[test]
    fn prop_metrics_bounded_or_nan((predicted, actual) in label_pair(3, 0..100)) {
        let values = [
            accuracy(&predicted, &actual, &1).unwrap(),
            sensitivity(&predicted, &actual, &1).unwrap(),
            specificity(&predicted, &actual, &1).unwrap(),
            positive_predictive_value(&predicted, &actual, &1).unwrap(),
            negative_predictive_value(&predicted, &actual, &1).unwrap(),
        ];

        for value in values {
            prop_assert!(
                value.is_nan() || (0.0..=1.0).contains(&value),
                "metric {} not in [0, 1]",
                value
            );
            prop_assert!(!value.is_infinite(), "metric {} is infinite", value);
        }
    }

    #[test]
    fn prop_accuracy_perfect_predictions(labels in class_labels(3, 1..100)) {
        let acc = accuracy(&labels, &labels, &1).unwrap();

        prop_assert!(
            (acc - 1.0).abs() < 1e-9,
            "perfect predictions should have accuracy 1.0, got {}",
            acc
        );
    }

    #[test]
    fn prop_accuracy_defined_on_non_empty((predicted, actual) in label_pair(3, 1..100)) {
        let acc = accuracy(&predicted, &actual, &1).unwrap();

        prop_assert!(!acc.is_nan(), "accuracy NaN on non-empty input");
    }
}
