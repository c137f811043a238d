//! # Basic Packer
//!
//! The baseline: every item goes into whichever column is currently
//! shortest. Variants are cyclic. O(items × columns), no lookahead.

use super::{shortest_column, usable_column_count, Layout, PlacedItem};
use crate::model::{Item, LayoutConfig};
use crate::variant::assign::assign_cyclic_variants;

/// Pack `items` shortest-column-first into `column_count` columns.
pub fn pack_basic<T>(items: Vec<Item<T>>, column_count: usize, config: &LayoutConfig) -> Layout<T> {
    let column_count = usable_column_count(column_count);
    let variants = assign_cyclic_variants(&items, &config.variants);
    let mut layout = Layout::empty(column_count, config.gap);
    let mut heights = vec![0u32; column_count];

    for (item, variant) in items.into_iter().zip(variants) {
        let height = config.heights.height_of(&variant);
        let target = shortest_column(&heights);
        heights[target] = heights[target].saturating_add(height.saturating_add(config.gap));
        tracing::trace!(%variant, column = target, "basic placement");
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
        spread = layout.spread(),
        "basic pack complete"
    );
    layout
}
