//! # Masonry Layout Engine
//!
//! Distributes gallery items across a fixed number of columns so that the
//! columns end up roughly the same height.
//!
//! ## How It Works
//!
//! 1. Give every item a size variant (cyclic pattern or percentage split)
//! 2. Resolve each variant to a nominal height from the height table
//! 3. Walk the items in order and drop each one into a column:
//!    - **basic**: always the shortest column
//!    - **balanced**: the shortest column, unless that would push the
//!      max−min spread past the balance threshold, in which case every
//!      column is tried and the one with the smallest resulting spread wins
//! 4. Optionally hand the result to [`crate::stats::optimize`], which moves
//!    trailing items from the tallest column to the shortest one while that
//!    keeps helping
//!
//! The responsive entry point picks the column count from the viewport width
//! before packing. Nothing here is retained between calls.

pub mod balanced;
pub mod basic;
pub mod responsive;

use rand::Rng;
use serde::Serialize;

use crate::model::{Item, LayoutConfig, Variant};
use crate::stats::{compute_stats, LayoutStats};
use responsive::Breakpoints;

/// An item after placement: payload, the variant it got, and that variant's
/// resolved height (gap excluded).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedItem<T> {
    #[serde(flatten)]
    pub item: T,
    pub variant: Variant,
    pub height: u32,
}

/// One column of the masonry grid.
///
/// `height` always equals the sum of `item.height + gap` over `items`, as
/// long as that sum fits in a `u32`; past that it saturates at `u32::MAX`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column<T> {
    pub height: u32,
    pub items: Vec<PlacedItem<T>>,
}

impl<T> Default for Column<T> {
    fn default() -> Self {
        Self {
            height: 0,
            items: Vec::new(),
        }
    }
}

impl<T> Column<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item and grow the column by its height plus the gap.
    pub fn push(&mut self, placed: PlacedItem<T>, gap: u32) {
        self.height = self.height.saturating_add(placed.height.saturating_add(gap));
        self.items.push(placed);
    }

    /// Remove the last-placed item and shrink the column accordingly.
    pub fn pop(&mut self, gap: u32) -> Option<PlacedItem<T>> {
        let placed = self.items.pop()?;
        self.height = self.height.saturating_sub(placed.height.saturating_add(gap));
        Some(placed)
    }
}

/// The result of one layout computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout<T> {
    pub columns: Vec<Column<T>>,
    /// Gap the columns were packed with; the optimizer needs it to move items.
    pub gap: u32,
}

impl<T> Layout<T> {
    /// `count` empty columns.
    pub fn empty(count: usize, gap: u32) -> Self {
        Self {
            columns: (0..count).map(|_| Column::new()).collect(),
            gap,
        }
    }

    pub fn from_columns(columns: Vec<Column<T>>, gap: u32) -> Self {
        Self { columns, gap }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn item_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    pub fn heights(&self) -> Vec<u32> {
        self.columns.iter().map(|c| c.height).collect()
    }

    /// Tallest minus shortest column height.
    pub fn spread(&self) -> u32 {
        spread(&self.heights())
    }

    pub fn stats(&self) -> LayoutStats {
        compute_stats(&self.columns)
    }

    /// Append an item to a column.
    pub fn place(&mut self, column: usize, placed: PlacedItem<T>) {
        let gap = self.gap;
        self.columns[column].push(placed, gap);
    }

    /// Strip placement data, handing back the payloads column by column.
    pub fn into_payloads(self) -> Vec<Vec<T>> {
        self.columns
            .into_iter()
            .map(|c| c.items.into_iter().map(|p| p.item).collect())
            .collect()
    }
}

/// Stateless front door to the packers.
///
/// The only thing it holds is the breakpoint policy used by [`layout`].
///
/// [`layout`]: MasonryEngine::layout
#[derive(Debug, Clone, Default)]
pub struct MasonryEngine {
    breakpoints: Breakpoints,
}

impl MasonryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a different width → column-count policy.
    pub fn with_breakpoints(breakpoints: Breakpoints) -> Self {
        Self { breakpoints }
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// Shortest-column-first packing with cyclic variants.
    pub fn pack_basic<T>(
        &self,
        items: Vec<Item<T>>,
        column_count: usize,
        config: &LayoutConfig,
    ) -> Layout<T> {
        basic::pack_basic(items, column_count, config)
    }

    /// Spread-aware packing with distribution-aware variants.
    pub fn pack_balanced<T, R: Rng + ?Sized>(
        &self,
        items: Vec<Item<T>>,
        column_count: usize,
        config: &LayoutConfig,
        rng: &mut R,
    ) -> Layout<T> {
        balanced::pack_balanced(items, column_count, config, rng)
    }

    /// Pick the column count for `viewport_width`, then pack basic.
    pub fn layout_basic<T>(
        &self,
        items: Vec<Item<T>>,
        viewport_width: u32,
        config: &LayoutConfig,
    ) -> Layout<T> {
        responsive::pack_basic_responsive(items, viewport_width, config, &self.breakpoints)
    }

    /// Pick the column count for `viewport_width`, then pack balanced.
    pub fn layout<T, R: Rng + ?Sized>(
        &self,
        items: Vec<Item<T>>,
        viewport_width: u32,
        config: &LayoutConfig,
        rng: &mut R,
    ) -> Layout<T> {
        responsive::layout_responsive(items, viewport_width, config, &self.breakpoints, rng)
    }
}

// ── Shared helpers ──────────────────────────────────────────────

/// Column count actually used: at least one, so every item has a home.
pub(crate) fn usable_column_count(column_count: usize) -> usize {
    if column_count == 0 {
        tracing::warn!("column count 0 requested, packing into a single column");
        1
    } else {
        column_count
    }
}

/// Index of the shortest column; ties go to the lowest index.
pub(crate) fn shortest_column(heights: &[u32]) -> usize {
    let mut best = 0;
    for (i, &h) in heights.iter().enumerate() {
        if h < heights[best] {
            best = i;
        }
    }
    best
}

/// Index of the tallest column; ties go to the lowest index.
pub(crate) fn tallest_column(heights: &[u32]) -> usize {
    let mut best = 0;
    for (i, &h) in heights.iter().enumerate() {
        if h > heights[best] {
            best = i;
        }
    }
    best
}

/// Max minus min over column heights; 0 for no columns.
pub(crate) fn spread(heights: &[u32]) -> u32 {
    let max = heights.iter().copied().max().unwrap_or(0);
    let min = heights.iter().copied().min().unwrap_or(0);
    max - min
}

/// Spread after hypothetically adding `extent` to column `column`.
pub(crate) fn spread_if_placed(heights: &[u32], column: usize, extent: u32) -> u32 {
    let mut max = 0;
    let mut min = u32::MAX;
    for (i, &h) in heights.iter().enumerate() {
        let h = if i == column { h.saturating_add(extent) } else { h };
        max = max.max(h);
        min = min.min(h);
    }
    if heights.is_empty() {
        0
    } else {
        max - min
    }
}
