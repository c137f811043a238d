//! # Layout Stats
//!
//! Read-only summary of a finished layout, used for diagnostics and to
//! decide whether another optimization pass is worth running.

mod optimize;

pub use optimize::{optimize, MAX_OPTIMIZE_PASSES};

use serde::Serialize;

use crate::layout::Column;

/// Height statistics over a set of columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutStats {
    pub heights: Vec<u32>,
    pub max: u32,
    pub min: u32,
    pub mean: f64,
    /// `max - min`.
    pub height_difference: u32,
    /// `height_difference / mean`, or 0 when the mean is 0. Lower is evener.
    pub balance: f64,
    pub item_counts: Vec<usize>,
}

/// Summarize `columns`. No columns → all zeros.
pub fn compute_stats<T>(columns: &[Column<T>]) -> LayoutStats {
    if columns.is_empty() {
        return LayoutStats::default();
    }

    let heights: Vec<u32> = columns.iter().map(|c| c.height).collect();
    let item_counts = columns.iter().map(Column::len).collect();
    let max = heights.iter().copied().max().unwrap_or(0);
    let min = heights.iter().copied().min().unwrap_or(0);
    let total: u64 = heights.iter().map(|&h| u64::from(h)).sum();
    let mean = total as f64 / heights.len() as f64;
    let height_difference = max - min;
    let balance = if mean == 0.0 {
        0.0
    } else {
        f64::from(height_difference) / mean
    };

    LayoutStats {
        heights,
        max,
        min,
        mean,
        height_difference,
        balance,
        item_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::PlacedItem;
    use crate::model::Variant;

    fn column(height: u32, items: usize) -> Column<()> {
        Column {
            height,
            items: (0..items)
                .map(|_| PlacedItem {
                    item: (),
                    variant: Variant::Small,
                    height: 0,
                })
                .collect(),
        }
    }

    #[test]
    fn test_known_heights() {
        let columns = vec![column(340, 1), column(270, 1), column(420, 2)];
        let stats = compute_stats(&columns);
        assert_eq!(stats.max, 420);
        assert_eq!(stats.min, 270);
        assert_eq!(stats.height_difference, 150);
        assert!((stats.mean - 343.333).abs() < 0.01);
        assert!((stats.balance - 0.437).abs() < 0.001);
        assert_eq!(stats.item_counts, vec![1, 1, 2]);
    }

    #[test]
    fn test_no_columns_all_zero() {
        let stats = compute_stats::<()>(&[]);
        assert_eq!(stats, LayoutStats::default());
        assert_eq!(stats.balance, 0.0);
    }

    #[test]
    fn test_empty_columns_zero_balance() {
        let stats = compute_stats(&[column(0, 0), column(0, 0), column(0, 0)]);
        assert_eq!(stats.heights, vec![0, 0, 0]);
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.balance, 0.0);
    }

    #[test]
    fn test_single_column_is_balanced() {
        let stats = compute_stats(&[column(1230, 4)]);
        assert_eq!(stats.height_difference, 0);
        assert_eq!(stats.balance, 0.0);
    }
}
