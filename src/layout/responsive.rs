//! # Responsive Column Selection
//!
//! Maps a viewport width to a column count and hands off to a packer
//! (balanced by default, basic on request). The policy is an ordered list of rules; the default one is the
//! storefront's three tiers:
//!
//! ```text
//!   width < 480   → 1 column
//!   width < 768   → 2 columns
//!   otherwise     → 3 columns
//! ```

use std::borrow::Cow;

use rand::Rng;

use super::balanced::pack_balanced;
use super::basic::pack_basic;
use super::Layout;
use crate::model::{Item, LayoutConfig};

/// One rule: widths strictly below `max_width` get `columns` columns.
/// A rule without `max_width` matches everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    pub max_width: Option<u32>,
    pub columns: usize,
}

impl Breakpoint {
    pub fn below(max_width: u32, columns: usize) -> Self {
        Self {
            max_width: Some(max_width),
            columns,
        }
    }

    pub fn otherwise(columns: usize) -> Self {
        Self {
            max_width: None,
            columns,
        }
    }

    fn matches(&self, viewport_width: u32) -> bool {
        self.max_width.map_or(true, |max| viewport_width < max)
    }
}

/// Ordered width → column-count policy. First matching rule wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakpoints {
    rules: Vec<Breakpoint>,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::new(vec![
            Breakpoint::below(480, 1),
            Breakpoint::below(768, 2),
            Breakpoint::otherwise(3),
        ])
    }
}

impl Breakpoints {
    pub fn new(rules: Vec<Breakpoint>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Breakpoint] {
        &self.rules
    }

    /// Column count for a viewport. Widths past every bounded rule fall to
    /// the last rule; an empty policy means one column.
    pub fn columns_for(&self, viewport_width: u32) -> usize {
        self.rules
            .iter()
            .find(|rule| rule.matches(viewport_width))
            .or(self.rules.last())
            .map_or(1, |rule| rule.columns)
    }
}

/// Lay out `items` for a viewport: resolve columns, then pack balanced.
pub fn layout_responsive<T, R: Rng + ?Sized>(
    items: Vec<Item<T>>,
    viewport_width: u32,
    config: &LayoutConfig,
    breakpoints: &Breakpoints,
    rng: &mut R,
) -> Layout<T> {
    let columns = breakpoints.columns_for(viewport_width);
    tracing::debug!(viewport_width, columns, "resolved breakpoint");
    pack_balanced(items, columns, &config_for_viewport(config, viewport_width), rng)
}

/// Lay out `items` for a viewport with the basic packer.
pub fn pack_basic_responsive<T>(
    items: Vec<Item<T>>,
    viewport_width: u32,
    config: &LayoutConfig,
    breakpoints: &Breakpoints,
) -> Layout<T> {
    let columns = breakpoints.columns_for(viewport_width);
    tracing::debug!(viewport_width, columns, "resolved breakpoint");
    pack_basic(items, columns, &config_for_viewport(config, viewport_width))
}

/// `config` with its height table scaled to the viewport when
/// `scale_heights` asks for it.
fn config_for_viewport(config: &LayoutConfig, viewport_width: u32) -> Cow<'_, LayoutConfig> {
    if config.scale_heights {
        Cow::Owned(LayoutConfig {
            heights: config.heights.scaled_for(viewport_width),
            ..config.clone()
        })
    } else {
        Cow::Borrowed(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Variant;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_default_breakpoint_boundaries() {
        let bp = Breakpoints::default();
        assert_eq!(bp.columns_for(0), 1);
        assert_eq!(bp.columns_for(479), 1);
        assert_eq!(bp.columns_for(480), 2);
        assert_eq!(bp.columns_for(767), 2);
        assert_eq!(bp.columns_for(768), 3);
        assert_eq!(bp.columns_for(2560), 3);
    }

    #[test]
    fn test_custom_policy() {
        let bp = Breakpoints::new(vec![Breakpoint::below(600, 2), Breakpoint::below(1200, 4)]);
        assert_eq!(bp.columns_for(599), 2);
        assert_eq!(bp.columns_for(600), 4);
        // nothing matches, so the last rule applies
        assert_eq!(bp.columns_for(1920), 4);
        assert_eq!(Breakpoints::new(vec![]).columns_for(1000), 1);
    }

    #[test]
    fn test_layout_uses_resolved_columns() {
        let items: Vec<Item<usize>> = (0..7).map(Item::new).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let layout = layout_responsive(
            items,
            600,
            &LayoutConfig::default(),
            &Breakpoints::default(),
            &mut rng,
        );
        assert_eq!(layout.column_count(), 2);
        assert_eq!(layout.item_count(), 7);
    }

    #[test]
    fn test_scaled_heights_on_narrow_viewport() {
        let items = vec![Item::new("a").with_variant(Variant::Large)];
        let config = LayoutConfig {
            gap: 0,
            scale_heights: true,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let layout = layout_responsive(items, 320, &config, &Breakpoints::default(), &mut rng);
        assert_eq!(layout.columns[0].items[0].height, 320);
        assert_eq!(layout.heights(), vec![320]);
    }

    #[test]
    fn test_basic_responsive_scales_like_balanced() {
        let config = LayoutConfig {
            gap: 0,
            scale_heights: true,
            ..Default::default()
        };
        let items = || (0..4).map(Item::new).collect::<Vec<Item<usize>>>();
        let basic = pack_basic_responsive(items(), 600, &config, &Breakpoints::default());
        let balanced = layout_responsive(
            items(),
            600,
            &config,
            &Breakpoints::default(),
            &mut ChaCha8Rng::seed_from_u64(5),
        );
        assert_eq!(basic.column_count(), 2);
        // small 225, medium 288, large 360, small 225
        assert_eq!(basic.heights(), vec![585, 513]);
        assert_eq!(basic, balanced);
    }
}
