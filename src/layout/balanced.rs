//! # Balanced Packer
//!
//! Shortest-column placement with a one-step lookahead. For each item:
//!
//! 1. Compute the spread (tallest − shortest) that results from dropping it
//!    into the shortest column. Within the balance threshold → place it there.
//! 2. Otherwise try every column and keep the one whose resulting spread is
//!    smallest. The shortest column is the starting candidate, so a tie never
//!    moves an item off it; among the other columns the lowest index wins.
//!
//! Greedy, not optimal. The extra scan costs O(columns) per item and only
//! runs when the fast path is rejected.

use rand::Rng;

use super::{shortest_column, spread_if_placed, usable_column_count, Layout, PlacedItem};
use crate::model::{Item, LayoutConfig};
use crate::variant::assign::assign_variants;

/// Pack `items` into `column_count` columns, minding the spread.
pub fn pack_balanced<T, R: Rng + ?Sized>(
    items: Vec<Item<T>>,
    column_count: usize,
    config: &LayoutConfig,
    rng: &mut R,
) -> Layout<T> {
    let column_count = usable_column_count(column_count);
    let variants = assign_variants(&items, config, rng);
    let threshold = config.effective_threshold();
    let mut layout = Layout::empty(column_count, config.gap);
    let mut heights = vec![0u32; column_count];
    let mut lookaheads = 0usize;

    for (item, variant) in items.into_iter().zip(variants) {
        let height = config.heights.height_of(&variant);
        let extent = height.saturating_add(config.gap);

        let shortest = shortest_column(&heights);
        let target = if spread_if_placed(&heights, shortest, extent) <= threshold {
            shortest
        } else {
            lookaheads += 1;
            least_spread_column(&heights, shortest, extent)
        };

        heights[target] = heights[target].saturating_add(extent);
        tracing::trace!(%variant, column = target, shortest, "balanced placement");
        layout.place(
            target,
            PlacedItem {
                item: item.payload,
                variant,
                height,
            },
        );
    }

    tracing::debug!(
        items = layout.item_count(),
        columns = column_count,
        lookaheads,
        spread = layout.spread(),
        "balanced pack complete"
    );
    layout
}

/// Column whose hypothetical placement leaves the smallest spread.
///
/// Only a strictly smaller spread displaces `shortest`, which keeps the
/// result never worse than shortest-column placement.
fn least_spread_column(heights: &[u32], shortest: usize, extent: u32) -> usize {
    let mut best = shortest;
    let mut best_spread = spread_if_placed(heights, shortest, extent);
    for column in 0..heights.len() {
        let candidate = spread_if_placed(heights, column, extent);
        if candidate < best_spread {
            best = column;
            best_spread = candidate;
        }
    }
    best
}
