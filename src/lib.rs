//! # gallerywall
//!
//! A responsive masonry layout engine for art galleries.
//!
//! Give it an ordered list of pieces and a viewport width; it decides how
//! many columns fit, gives every piece a size variant (small, medium, large),
//! and drops the pieces into columns so the columns come out about the same
//! height. It knows nothing about pixels on screen: every variant has a fixed
//! nominal height, and that is what gets balanced.
//!
//! ## Architecture
//!
//! ```text
//! Input (items, viewport width, config)
//!       ↓
//!   [layout::responsive]  — viewport width → column count
//!       ↓
//!   [variant]             — size variant per item, height per variant
//!       ↓
//!   [layout]              — basic / balanced column packing
//!       ↓
//!   [stats]               — optional rebalancing pass, height statistics
//! ```
//!
//! Every call is independent. The one random step, shuffling variants under
//! a percentage distribution, draws from an RNG the caller passes in.

pub mod error;
pub mod layout;
pub mod model;
pub mod stats;
pub mod variant;

#[cfg(feature = "wasm")]
pub mod wasm;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

pub use error::LayoutError;
use layout::{Column, Layout, MasonryEngine};
use model::{Algorithm, GalleryDocument, LayoutConfig};
use variant::HeightTable;
use stats::LayoutStats;

/// Payload type used by the JSON surface: the item object minus `variant`.
pub type JsonPayload = serde_json::Map<String, serde_json::Value>;

/// What [`layout_json`] returns.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOutput {
    pub column_count: usize,
    pub columns: Vec<Column<JsonPayload>>,
    pub stats: LayoutStats,
    /// Whether the optimizer ran.
    pub optimized: bool,
}

/// Lay out a parsed gallery document.
///
/// `columnCount` wins over `viewportWidth` when both are present. A document
/// with neither is rejected, as is one whose items could stack taller than a
/// `u32` column height.
pub fn layout_document(document: GalleryDocument) -> Result<LayoutOutput, LayoutError> {
    check_height_budget(document.items.len(), &document.config)?;

    let engine = MasonryEngine::new();
    let mut rng = match document.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let config = &document.config;
    let layout: Layout<JsonPayload> = match (document.column_count, document.viewport_width) {
        (Some(columns), _) => match document.algorithm {
            Algorithm::Basic => engine.pack_basic(document.items, columns, config),
            Algorithm::Balanced => engine.pack_balanced(document.items, columns, config, &mut rng),
        },
        (None, Some(width)) => match document.algorithm {
            Algorithm::Basic => engine.layout_basic(document.items, width, config),
            Algorithm::Balanced => engine.layout(document.items, width, config, &mut rng),
        },
        (None, None) => return Err(LayoutError::MissingColumns),
    };

    let (layout, optimized) = match document.max_imbalance {
        Some(max_imbalance) => (stats::optimize(layout, max_imbalance), true),
        None => (layout, false),
    };

    let stats = layout.stats();
    Ok(LayoutOutput {
        column_count: layout.column_count(),
        columns: layout.columns,
        stats,
        optimized,
    })
}

/// Reject configs where a single column holding every item would not fit in
/// a `u32`. Scaling only shrinks heights, so the unscaled table bounds it.
fn check_height_budget(items: usize, config: &LayoutConfig) -> Result<(), LayoutError> {
    let HeightTable {
        small,
        medium,
        large,
        fallback,
    } = config.heights;
    let tallest = small.max(medium).max(large).max(fallback);
    let worst = (items as u128) * (u128::from(tallest) + u128::from(config.gap));
    if worst > u128::from(u32::MAX) {
        return Err(LayoutError::HeightOverflow {
            items,
            tallest,
            gap: config.gap,
        });
    }
    Ok(())
}

/// Lay out a gallery document given as JSON and return the layout as JSON.
pub fn layout_json(json: &str) -> Result<String, LayoutError> {
    let document: GalleryDocument = serde_json::from_str(json)?;
    let output = layout_document(document)?;
    Ok(serde_json::to_string_pretty(&output)?)
}
