//! Population coverage ranking.
//!
//! A variant's base weight is the sum of its designated allele frequency fields.
//! The blowup variant discounts each weight by `threshold ^ neighbors`, where
//! `neighbors` counts the other variants inside its window, so crowded variants
//! that would multiply haplotype paths sink in the ranking.
use varrank_core::models::{VariantTable, WeightFields};

use crate::windows::Window;

pub fn base_weights(table: &VariantTable, fields: &WeightFields) -> Vec<f64> {
    table.iter().map(|v| fields.base_weight(v)).collect()
}

///
/// Natural log of each blowup penalty, `neighbors * ln(threshold)`. Kept in log space
/// so that crowded windows still rank apart once `threshold ^ neighbors` would
/// underflow to 0.
///
pub fn blowup_log_penalties(windows: &[Window], threshold: f64) -> Vec<f64> {
    let ln_threshold = threshold.ln();
    windows
        .iter()
        .map(|w| w.neighbors() as f64 * ln_threshold)
        .collect()
}

///
/// `ln(weight * penalty)`, ordered like the adjusted weights themselves. A zero
/// weight maps to negative infinity.
///
pub fn adjusted_log_weights(weights: &[f64], log_penalties: &[f64]) -> Vec<f64> {
    weights
        .iter()
        .zip(log_penalties.iter())
        .map(|(w, p)| w.ln() + p)
        .collect()
}

///
/// Row indices ordered by weight, highest first. The sort is stable: rows with
/// equal weight keep their table order.
///
pub fn order_by_weight(weights: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..weights.len()).collect();
    order.sort_by(|&a, &b| weights[b].total_cmp(&weights[a]));
    order
}

pub fn rank_popcov(table: &VariantTable, fields: &WeightFields) -> Vec<usize> {
    order_by_weight(&base_weights(table, fields))
}

pub fn rank_popcov_blowup(
    table: &VariantTable,
    windows: &[Window],
    fields: &WeightFields,
    threshold: f64,
) -> Vec<usize> {
    let weights = base_weights(table, fields);
    let log_penalties = blowup_log_penalties(windows, threshold);
    order_by_weight(&adjusted_log_weights(&weights, &log_penalties))
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_order_is_descending_and_stable() {
        let weights = vec![0.2, 0.9, 0.2, 0.5, 0.9, 0.0];
        assert_eq!(order_by_weight(&weights), vec![1, 4, 3, 0, 2, 5]);
    }

    #[rstest]
    fn test_order_of_empty_weights() {
        assert_eq!(order_by_weight(&[]), Vec::<usize>::new());
    }

    #[rstest]
    fn test_zero_neighbors_means_no_penalty() {
        let windows = vec![Window { first: 3, last: 3 }];
        let log_penalties = blowup_log_penalties(&windows, 1.0 / 3.0);
        assert_eq!(log_penalties[0].exp(), 1.0);
    }

    #[rstest]
    fn test_penalty_decays_with_neighbors() {
        let windows: Vec<Window> = (0..6).map(|n| Window { first: 0, last: n }).collect();
        let log_penalties = blowup_log_penalties(&windows, 1.0 / 3.0);

        for pair in log_penalties.windows(2) {
            assert!(pair[1] < pair[0]);
        }
        assert!((log_penalties[2].exp() - 1.0 / 9.0).abs() < 1e-12);
    }

    #[rstest]
    fn test_crowded_windows_stay_ordered() {
        // (1/3)^700 and beyond underflow to 0 as plain products
        assert_eq!((1.0_f64 / 3.0).powf(700.0), 0.0);

        let windows = vec![
            Window { first: 0, last: 800 },
            Window { first: 0, last: 700 },
            Window { first: 0, last: 1_000 },
        ];
        let log_penalties = blowup_log_penalties(&windows, 1.0 / 3.0);
        let adjusted = adjusted_log_weights(&[1.0, 1.0, 1.0], &log_penalties);

        assert!(adjusted.iter().all(|w| w.is_finite()));
        assert_eq!(order_by_weight(&adjusted), vec![1, 0, 2]);
    }

    #[rstest]
    fn test_adjusted_log_weights() {
        let adjusted = adjusted_log_weights(&[1.0, 0.5, 0.0], &[0.5_f64.ln(), 0.0, 0.0]);

        assert!((adjusted[0] - adjusted[1]).abs() < 1e-12);
        assert_eq!(adjusted[2], f64::NEG_INFINITY);
        assert_eq!(order_by_weight(&adjusted), vec![0, 1, 2]);
    }
}
