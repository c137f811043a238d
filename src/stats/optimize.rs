//! Post-pack rebalancing.
//!
//! Local search: take the last item off the tallest column and put it on the
//! shortest, but only if the spread strictly shrinks. The first rejected move
//! ends the search, and a hard pass limit backs that up.

use crate::layout::{shortest_column, spread, tallest_column, Layout};

/// Upper bound on accepted moves in one [`optimize`] call.
pub const MAX_OPTIMIZE_PASSES: usize = 100;

/// Move trailing items from the tallest to the shortest column while the
/// spread exceeds `max_imbalance` and each move strictly reduces it.
///
/// Never drops or duplicates items and never increases the spread. A layout
/// already within `max_imbalance` comes back unchanged.
pub fn optimize<T>(mut layout: Layout<T>, max_imbalance: u32) -> Layout<T> {
    let gap = layout.gap;
    let mut moves = 0;

    for _ in 0..MAX_OPTIMIZE_PASSES {
        let heights = layout.heights();
        let current = spread(&heights);
        if current <= max_imbalance {
            break;
        }

        let tallest = tallest_column(&heights);
        let shortest = shortest_column(&heights);
        let Some(last) = layout.columns[tallest].items.last() else {
            break;
        };

        let extent = last.height.saturating_add(gap);
        let mut moved = heights;
        moved[tallest] = moved[tallest].saturating_sub(extent);
        moved[shortest] = moved[shortest].saturating_add(extent);
        if spread(&moved) >= current {
            break;
        }

        if let Some(placed) = layout.columns[tallest].pop(gap) {
            layout.columns[shortest].push(placed, gap);
            moves += 1;
        }
    }

    tracing::debug!(moves, spread = layout.spread(), max_imbalance, "optimize complete");
    layout
}
