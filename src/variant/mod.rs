//! # Variant Heights
//!
//! Maps a size variant to the nominal pixel height of its card. The engine
//! never measures rendered cards; these constants are the whole truth about
//! how tall things are.
//!
//! Narrow viewports shrink every card by a fixed factor:
//!
//! | viewport width | factor |
//! |----------------|--------|
//! | < 480          | 0.8    |
//! | 480 – 767      | 0.9    |
//! | ≥ 768          | 1.0    |
//!
//! Scaled heights are always floored to whole pixels.

pub mod assign;

use serde::{Deserialize, Serialize};

use crate::model::Variant;

/// Nominal card height per variant, plus the fallback for unknown names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeightTable {
    pub small: u32,
    pub medium: u32,
    pub large: u32,
    /// Height of any variant the table doesn't recognize.
    pub fallback: u32,
}

impl Default for HeightTable {
    fn default() -> Self {
        Self {
            small: 250,
            medium: 320,
            large: 400,
            fallback: 300,
        }
    }
}

impl HeightTable {
    /// Height of a variant in pixels. Never fails.
    pub fn height_of(&self, variant: &Variant) -> u32 {
        match variant {
            Variant::Small => self.small,
            Variant::Medium => self.medium,
            Variant::Large => self.large,
            Variant::Other(_) => self.fallback,
        }
    }

    /// Height of a variant after narrow-viewport scaling.
    pub fn responsive_height_of(&self, variant: &Variant, viewport_width: u32) -> u32 {
        scale(self.height_of(variant), viewport_width)
    }

    /// The whole table scaled for a viewport, fallback included.
    pub fn scaled_for(&self, viewport_width: u32) -> HeightTable {
        HeightTable {
            small: scale(self.small, viewport_width),
            medium: scale(self.medium, viewport_width),
            large: scale(self.large, viewport_width),
            fallback: scale(self.fallback, viewport_width),
        }
    }
}

/// Scaling factor applied to card heights at a given viewport width.
pub fn scale_factor(viewport_width: u32) -> f64 {
    if viewport_width < 480 {
        0.8
    } else if viewport_width < 768 {
        0.9
    } else {
        1.0
    }
}

fn scale(height: u32, viewport_width: u32) -> u32 {
    (height as f64 * scale_factor(viewport_width)).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_heights() {
        let table = HeightTable::default();
        assert_eq!(table.height_of(&Variant::Small), 250);
        assert_eq!(table.height_of(&Variant::Medium), 320);
        assert_eq!(table.height_of(&Variant::Large), 400);
    }

    #[test]
    fn test_unknown_variant_falls_back() {
        let table = HeightTable::default();
        assert_eq!(table.height_of(&Variant::from("xl")), 300);
    }

    #[test]
    fn test_responsive_scaling_tiers() {
        let table = HeightTable::default();
        assert_eq!(table.responsive_height_of(&Variant::Large, 375), 320);
        assert_eq!(table.responsive_height_of(&Variant::Large, 479), 320);
        assert_eq!(table.responsive_height_of(&Variant::Large, 480), 360);
        assert_eq!(table.responsive_height_of(&Variant::Large, 767), 360);
        assert_eq!(table.responsive_height_of(&Variant::Large, 768), 400);
    }

    #[test]
    fn test_responsive_scaling_floors() {
        let table = HeightTable {
            small: 251,
            ..Default::default()
        };
        // 251 * 0.9 = 225.9
        assert_eq!(table.responsive_height_of(&Variant::Small, 600), 225);
        // 251 * 0.8 = 200.8
        assert_eq!(table.responsive_height_of(&Variant::Small, 320), 200);
    }

    #[test]
    fn test_scaled_table_matches_per_variant_scaling() {
        let table = HeightTable::default();
        let scaled = table.scaled_for(500);
        for v in [Variant::Small, Variant::Medium, Variant::Large, Variant::from("odd")] {
            assert_eq!(scaled.height_of(&v), table.responsive_height_of(&v, 500));
        }
    }
}
