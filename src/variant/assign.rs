//! # Variant Assignment
//!
//! Produces one variant label per item. Two modes:
//!
//! - **Cyclic**: item `i` gets `variants[i % V]`. Deterministic.
//! - **Distribution**: counts per variant come from percentages, the labels
//!   are laid out in count order and then shuffled so that size doesn't
//!   correlate with input order. The shuffle is the only source of
//!   randomness in the engine, and it draws from the caller's RNG.
//!
//! Items that carry their own pre-set variant keep it either way; they still
//! consume their position, so everyone else's labels are unaffected.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{Distribution, Item, LayoutConfig, Variant};

/// Cyclic labels for `n` items.
pub fn assign_cyclic(n: usize, variants: &[Variant]) -> Vec<Variant> {
    let fallback;
    let variants = if variants.is_empty() {
        tracing::warn!("empty variant list, cycling through the default order");
        fallback = Variant::DEFAULT_ORDER.to_vec();
        &fallback[..]
    } else {
        variants
    };
    (0..n).map(|i| variants[i % variants.len()].clone()).collect()
}

/// Item counts per share, in the distribution's listed order.
///
/// Every share but the last gets `floor(percent / 100 * n)`; the last gets
/// whatever remains, so the counts always sum to exactly `n`.
///
/// When the leading percentages already add up to more than 100, counts are
/// handed out in listed order and capped by the items still unallocated, so
/// later shares (the last one included) may end up with nothing.
pub fn distribution_counts(distribution: &Distribution, n: usize) -> Vec<usize> {
    let shares = distribution.shares();
    let Some((_, leading)) = shares.split_last() else {
        return vec![];
    };

    let mut counts = Vec::with_capacity(shares.len());
    let mut remaining = n;
    for share in leading {
        let wanted = floor_share(share.percent, n);
        if wanted > remaining {
            tracing::warn!(
                variant = %share.variant,
                wanted,
                remaining,
                "variant distribution exceeds 100%, capping share"
            );
        }
        let count = wanted.min(remaining);
        remaining -= count;
        counts.push(count);
    }
    counts.push(remaining);
    counts
}

fn floor_share(percent: f64, n: usize) -> usize {
    if percent.is_nan() || percent <= 0.0 {
        return 0;
    }
    (percent / 100.0 * n as f64).floor() as usize
}

/// Distribution labels for `n` items, shuffled with `rng`.
pub fn assign_distributed<R: Rng + ?Sized>(
    n: usize,
    distribution: &Distribution,
    rng: &mut R,
) -> Vec<Variant> {
    if distribution.is_empty() {
        return assign_cyclic(n, &[]);
    }

    let counts = distribution_counts(distribution, n);
    let mut labels = Vec::with_capacity(n);
    for (share, &count) in distribution.shares().iter().zip(&counts) {
        labels.extend(std::iter::repeat(share.variant.clone()).take(count));
    }
    debug_assert_eq!(labels.len(), n);

    labels.shuffle(rng);
    labels
}

/// Labels for a whole item list under a config, pre-set preferences applied.
pub fn assign_variants<T, R: Rng + ?Sized>(
    items: &[Item<T>],
    config: &LayoutConfig,
    rng: &mut R,
) -> Vec<Variant> {
    let assigned = match &config.variant_distribution {
        Some(distribution) => assign_distributed(items.len(), distribution, rng),
        None => assign_cyclic(items.len(), &config.variants),
    };
    apply_preferences(items, assigned)
}

/// Cyclic labels for a whole item list, pre-set preferences applied.
pub fn assign_cyclic_variants<T>(items: &[Item<T>], variants: &[Variant]) -> Vec<Variant> {
    apply_preferences(items, assign_cyclic(items.len(), variants))
}

fn apply_preferences<T>(items: &[Item<T>], assigned: Vec<Variant>) -> Vec<Variant> {
    items
        .iter()
        .zip(assigned)
        .map(|(item, label)| item.variant.clone().unwrap_or(label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn abc() -> Vec<Variant> {
        vec![Variant::Small, Variant::Medium, Variant::Large]
    }

    fn count(labels: &[Variant], v: &Variant) -> usize {
        labels.iter().filter(|l| *l == v).count()
    }

    #[test]
    fn test_cyclic_pattern() {
        let labels = assign_cyclic(5, &abc());
        assert_eq!(
            labels,
            vec![
                Variant::Small,
                Variant::Medium,
                Variant::Large,
                Variant::Small,
                Variant::Medium
            ]
        );
    }

    #[test]
    fn test_cyclic_empty_variants_uses_default_order() {
        let labels = assign_cyclic(4, &[]);
        assert_eq!(labels[0], Variant::Small);
        assert_eq!(labels[3], Variant::Small);
    }

    #[test]
    fn test_distribution_exact_counts() {
        let d = Distribution::new([
            (Variant::Small, 50.0),
            (Variant::Medium, 30.0),
            (Variant::Large, 20.0),
        ]);
        // medium: floor(1.8) = 1, large absorbs the remainder
        assert_eq!(distribution_counts(&d, 6), vec![3, 1, 2]);

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let labels = assign_distributed(6, &d, &mut rng);
        assert_eq!(labels.len(), 6);
        assert_eq!(count(&labels, &Variant::Small), 3);
        assert_eq!(count(&labels, &Variant::Medium), 1);
        assert_eq!(count(&labels, &Variant::Large), 2);
    }

    #[test]
    fn test_distribution_empty_and_single() {
        let d = Distribution::new([(Variant::Large, 50.0), (Variant::Small, 50.0)]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(assign_distributed(0, &d, &mut rng).is_empty());
        // floor(0.5) = 0 large, so the only label is the remainder
        assert_eq!(assign_distributed(1, &d, &mut rng), vec![Variant::Small]);
    }

    #[test]
    fn test_distribution_same_seed_same_shuffle() {
        let d = Distribution::new([(Variant::Small, 40.0), (Variant::Large, 60.0)]);
        let a = assign_distributed(20, &d, &mut ChaCha8Rng::seed_from_u64(99));
        let b = assign_distributed(20, &d, &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_distribution_overflow_still_labels_every_item() {
        let d = Distribution::new([
            (Variant::Small, 80.0),
            (Variant::Medium, 60.0),
            (Variant::Large, 10.0),
        ]);
        assert_eq!(distribution_counts(&d, 10), vec![8, 2, 0]);
        let labels = assign_distributed(10, &d, &mut ChaCha8Rng::seed_from_u64(3));
        assert_eq!(labels.len(), 10);
        assert_eq!(count(&labels, &Variant::Large), 0);
    }

    #[test]
    fn test_share_is_fraction_times_count() {
        // 0.29 * 100 evaluates to 28.999..., which floors to 28
        let d = Distribution::new([(Variant::Small, 29.0), (Variant::Large, 71.0)]);
        assert_eq!(distribution_counts(&d, 100), vec![28, 72]);
    }

    #[test]
    fn test_negative_percent_counts_as_zero() {
        let d = Distribution::new([(Variant::Small, -20.0), (Variant::Large, 0.0)]);
        assert_eq!(distribution_counts(&d, 4), vec![0, 4]);
    }

    #[test]
    fn test_preferences_override_assignment() {
        let items = vec![
            Item::new(0),
            Item::new(1).with_variant(Variant::Large),
            Item::new(2),
        ];
        let labels = assign_cyclic_variants(&items, &[Variant::Small]);
        assert_eq!(labels, vec![Variant::Small, Variant::Large, Variant::Small]);
    }
}
