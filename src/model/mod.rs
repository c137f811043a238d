//! # Gallery Model
//!
//! The input representation for the masonry engine. A gallery is an ordered
//! list of items, each carrying an opaque payload (the art piece as the
//! storefront knows it) and an optional pre-set size preference.
//!
//! The engine never looks inside the payload. It only attaches a [`Variant`]
//! to each item it places, and that variant decides the nominal card height.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::variant::HeightTable;

/// A display-size category for a gallery card.
///
/// Unrecognized names deserialize to [`Variant::Other`] rather than failing;
/// they resolve to the height table's fallback height.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Variant {
    Small,
    Medium,
    Large,
    Other(String),
}

impl Variant {
    /// The reference variant order used when a config lists none.
    pub const DEFAULT_ORDER: [Variant; 3] = [Variant::Small, Variant::Medium, Variant::Large];

    pub fn name(&self) -> &str {
        match self {
            Variant::Small => "small",
            Variant::Medium => "medium",
            Variant::Large => "large",
            Variant::Other(name) => name,
        }
    }
}

impl From<&str> for Variant {
    fn from(name: &str) -> Self {
        match name {
            "small" => Variant::Small,
            "medium" => Variant::Medium,
            "large" => Variant::Large,
            other => Variant::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Variant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Variant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Variant::from(name.as_str()))
    }
}

/// A gallery item: opaque payload plus an optional size preference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item<T> {
    /// Everything the storefront knows about the piece. Passed through.
    #[serde(flatten)]
    pub payload: T,

    /// Pre-set size preference. Wins over whatever the assigner picks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,
}

impl<T> Item<T> {
    pub fn new(payload: T) -> Self {
        Self {
            payload,
            variant: None,
        }
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }
}

/// One share of a [`Distribution`]: a variant and its percentage of items.
#[derive(Debug, Clone, PartialEq)]
pub struct Share {
    pub variant: Variant,
    pub percent: f64,
}

/// Percentage weights per variant, in listed order.
///
/// Order matters: the last listed variant absorbs whatever the floor
/// rounding of the others leaves over. In JSON this is an object such as
/// `{"small": 50, "medium": 30, "large": 20}`, and key order is preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Distribution {
    shares: Vec<Share>,
}

impl Distribution {
    pub fn new(shares: impl IntoIterator<Item = (Variant, f64)>) -> Self {
        Self {
            shares: shares
                .into_iter()
                .map(|(variant, percent)| Share { variant, percent })
                .collect(),
        }
    }

    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    /// Sum of the declared percentages, last share included.
    pub fn total_percent(&self) -> f64 {
        self.shares.iter().map(|s| s.percent).sum()
    }
}

impl Serialize for Distribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.shares.len()))?;
        for share in &self.shares {
            map.serialize_entry(share.variant.name(), &share.percent)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Distribution {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedShares;

        impl<'de> Visitor<'de> for OrderedShares {
            type Value = Distribution;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping variant names to percentages")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Distribution, A::Error> {
                let mut shares = Vec::with_capacity(access.size_hint().unwrap_or(3));
                while let Some((name, percent)) = access.next_entry::<String, f64>()? {
                    shares.push(Share {
                        variant: Variant::from(name.as_str()),
                        percent,
                    });
                }
                Ok(Distribution { shares })
            }
        }

        deserializer.deserialize_map(OrderedShares)
    }
}

/// Everything the packers need except the column count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Eligible variants for cyclic assignment, in cycle order.
    #[serde(default = "default_variants")]
    pub variants: Vec<Variant>,

    /// Vertical gap added below every placed card, in pixels.
    #[serde(default = "default_gap")]
    pub gap: u32,

    /// Largest height spread tolerated before the balanced packer looks
    /// past the shortest column. Unset means never look past it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance_threshold: Option<u32>,

    /// Percentage weights per variant. Unset means cyclic assignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_distribution: Option<Distribution>,

    /// Nominal card height per variant.
    #[serde(default)]
    pub heights: HeightTable,

    /// Scale the height table down on narrow viewports (responsive entry only).
    #[serde(default)]
    pub scale_heights: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            variants: default_variants(),
            gap: default_gap(),
            balance_threshold: None,
            variant_distribution: None,
            heights: HeightTable::default(),
            scale_heights: false,
        }
    }
}

impl LayoutConfig {
    /// The threshold the balanced packer actually compares against.
    pub fn effective_threshold(&self) -> u32 {
        self.balance_threshold.unwrap_or(u32::MAX)
    }
}

fn default_variants() -> Vec<Variant> {
    Variant::DEFAULT_ORDER.to_vec()
}

fn default_gap() -> u32 {
    20
}

/// Which packer a document asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Basic,
    #[default]
    Balanced,
}

/// A complete layout request as accepted by [`crate::layout_json`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryDocument {
    /// The pieces to lay out, in display order.
    pub items: Vec<Item<serde_json::Map<String, serde_json::Value>>>,

    /// Viewport width in pixels; picks the column count via breakpoints.
    #[serde(default)]
    pub viewport_width: Option<u32>,

    /// Fixed column count. Takes precedence over `viewport_width`.
    #[serde(default)]
    pub column_count: Option<usize>,

    #[serde(default)]
    pub config: LayoutConfig,

    #[serde(default)]
    pub algorithm: Algorithm,

    /// Seed for the distribution shuffle. Unset draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// When set, run the optimizer after packing with this tolerance.
    #[serde(default)]
    pub max_imbalance: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_variant_deserializes_to_other() {
        let v: Variant = serde_json::from_str("\"panorama\"").unwrap();
        assert_eq!(v, Variant::Other("panorama".to_string()));
        assert_eq!(serde_json::to_string(&v).unwrap(), "\"panorama\"");
    }

    #[test]
    fn test_distribution_preserves_key_order() {
        let d: Distribution =
            serde_json::from_str(r#"{"large": 20, "small": 50, "medium": 30}"#).unwrap();
        let order: Vec<&str> = d.shares().iter().map(|s| s.variant.name()).collect();
        assert_eq!(order, vec!["large", "small", "medium"]);
        assert!((d.total_percent() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_item_payload_is_flattened() {
        let item: Item<serde_json::Map<String, serde_json::Value>> =
            serde_json::from_str(r#"{"id": "p-7", "title": "Dusk", "variant": "large"}"#).unwrap();
        assert_eq!(item.variant, Some(Variant::Large));
        assert_eq!(item.payload.get("id").and_then(|v| v.as_str()), Some("p-7"));
        assert!(!item.payload.contains_key("variant"));
    }

    #[test]
    fn test_config_defaults() {
        let config: LayoutConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, LayoutConfig::default());
        assert_eq!(config.gap, 20);
        assert_eq!(config.effective_threshold(), u32::MAX);
    }

    #[test]
    fn test_config_camel_case_keys() {
        let config: LayoutConfig = serde_json::from_str(
            r#"{"gap": 12, "balanceThreshold": 80, "variantDistribution": {"small": 100}}"#,
        )
        .unwrap();
        assert_eq!(config.gap, 12);
        assert_eq!(config.balance_threshold, Some(80));
        assert_eq!(config.variant_distribution.map(|d| d.shares().len()), Some(1));
    }
}
