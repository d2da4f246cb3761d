// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Category placement along the category axis.
//!
//! Each category gets a normalized position in `[0, xmax]` where `xmax` is `1` for uniform
//! spacing. Optional per-category weights push later categories further along the axis; the
//! axis extent grows by the total weight so the plot keeps every category visible.

extern crate alloc;

use alloc::vec::Vec;

use crate::error::ConfigError;

/// Validated per-category spacing weights.
///
/// Weight `i` is the extra room inserted after category `i`, relative to the other weights.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpacingWeights(Vec<f64>);

impl SpacingWeights {
    /// Validates and wraps a weight sequence.
    ///
    /// Weights must be finite and non-negative.
    pub fn new(weights: impl Into<Vec<f64>>) -> Result<Self, ConfigError> {
        let weights = weights.into();
        for (index, &weight) in weights.iter().enumerate() {
            if !weight.is_finite() {
                return Err(ConfigError::NonFiniteSpacing { index });
            }
            if weight < 0.0 {
                return Err(ConfigError::NegativeSpacing { index, weight });
            }
        }
        Ok(Self(weights))
    }

    /// Returns the weights as given.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns the number of weights.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no weights were given.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the sum of the weights as given.
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Returns the weights rescaled to sum to exactly `1` when their total reaches `1`.
    ///
    /// Totals below `1` are returned verbatim.
    pub fn scaled(&self) -> Vec<f64> {
        let total = self.total();
        if total >= 1.0 {
            self.0.iter().map(|w| w / total).collect()
        } else {
            self.0.clone()
        }
    }

    /// Checks the weights against the number of categories they apply to.
    pub fn check_categories(&self, categories: usize) -> Result<(), ConfigError> {
        if self.0.is_empty() {
            return Ok(());
        }
        if categories == 0 {
            return Err(ConfigError::SpacingWithoutCategories {
                weights: self.0.len(),
            });
        }
        if self.0.len() > categories {
            return Err(ConfigError::TooManySpacingWeights {
                weights: self.0.len(),
                categories,
            });
        }
        Ok(())
    }
}

/// The result of placing `N` categories.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryPositions {
    /// Normalized slot centers, one per category, strictly increasing.
    pub positions: Vec<f64>,
    /// New category-axis extent, or `None` when there are no categories (extent unchanged).
    pub xmax: Option<f64>,
}

/// Places `count` categories along the category axis.
///
/// Without weights, category `i` sits at `(i + 0.5) / count` and the extent is `1`.
/// With weights, the offset accumulated before category `i` is
/// `Σ_{j<i} scaled[j] / Σ scaled · (count − 1)` slot units, and the extent becomes
/// `(count + Σ scaled) / count`. Weights missing at the tail count as zero.
pub fn category_positions(count: usize, weights: Option<&SpacingWeights>) -> CategoryPositions {
    if count == 0 {
        return CategoryPositions::default();
    }
    let n = count as f64;
    let scaled = weights.map(SpacingWeights::scaled);
    let scaled_sum: f64 = scaled.as_deref().map_or(0.0, |s| s.iter().sum());

    let mut cumulative = 0.0;
    let mut positions = Vec::with_capacity(count);
    for i in 0..count {
        if let Some(scaled) = scaled.as_deref()
            && i > 0
            && scaled_sum > 0.0
        {
            let w = scaled.get(i - 1).copied().unwrap_or(0.0);
            cumulative += w / scaled_sum * (n - 1.0);
        }
        positions.push((i as f64 + 0.5) / n + cumulative / n);
    }

    let xmax = if scaled.is_some() {
        (n + scaled_sum) / n
    } else {
        1.0
    };
    CategoryPositions {
        positions,
        xmax: Some(xmax),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() <= 1e-9, "{a} != {b}");
    }

    #[test]
    fn uniform_positions_are_slot_centers() {
        let p = category_positions(4, None);
        for (i, pos) in p.positions.iter().enumerate() {
            assert_close(*pos, (i as f64 + 0.5) / 4.0);
        }
        assert!(p.positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(p.xmax, Some(1.0));
    }

    #[test]
    fn three_categories_without_spacing() {
        let p = category_positions(3, None);
        assert_close(p.positions[0], 1.0 / 6.0);
        assert_close(p.positions[1], 3.0 / 6.0);
        assert_close(p.positions[2], 5.0 / 6.0);
        assert_eq!(p.xmax, Some(1.0));
    }

    #[test]
    fn small_weights_are_used_verbatim() {
        let w = SpacingWeights::new(vec![0.2, 0.3]).unwrap();
        assert_eq!(w.scaled(), vec![0.2, 0.3]);

        let p = category_positions(2, Some(&w));
        assert_close(p.positions[0], 0.25);
        // cumulative = 0.2 / 0.5 * 1 = 0.4
        assert_close(p.positions[1], 1.5 / 2.0 + 0.4 / 2.0);
        assert_close(p.xmax.unwrap(), 1.25);
    }

    #[test]
    fn large_weights_are_rescaled_to_one() {
        let w = SpacingWeights::new(vec![1.0, 2.0, 1.0]).unwrap();
        let scaled = w.scaled();
        assert_close(scaled.iter().sum(), 1.0);
        assert_close(scaled[1], 0.5);

        let p = category_positions(4, Some(&w));
        assert_close(p.xmax.unwrap(), 5.0 / 4.0);
        assert!(p.positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn total_of_exactly_one_is_rescaled() {
        let w = SpacingWeights::new(vec![0.5, 0.5]).unwrap();
        assert_close(w.scaled().iter().sum(), 1.0);
    }

    #[test]
    fn short_weights_leave_tail_unspaced() {
        let w = SpacingWeights::new(vec![0.4]).unwrap();
        let p = category_positions(3, Some(&w));
        // All of the spacing goes after category 0: 0.4 / 0.4 * 2 = 2 slot units.
        assert_close(p.positions[1], 1.5 / 3.0 + 2.0 / 3.0);
        assert_close(p.positions[2] - p.positions[1], 1.0 / 3.0);
    }

    #[test]
    fn zero_weights_do_not_divide_by_zero() {
        let w = SpacingWeights::new(vec![0.0, 0.0]).unwrap();
        let p = category_positions(2, Some(&w));
        assert_close(p.positions[1], 0.75);
        assert_close(p.xmax.unwrap(), 1.0);
    }

    #[test]
    fn no_categories_leaves_extent_unchanged() {
        let p = category_positions(0, None);
        assert!(p.positions.is_empty());
        assert_eq!(p.xmax, None);
    }

    #[test]
    fn invalid_weights_are_rejected() {
        assert_eq!(
            SpacingWeights::new(vec![0.1, -0.2]),
            Err(ConfigError::NegativeSpacing {
                index: 1,
                weight: -0.2
            })
        );
        assert_eq!(
            SpacingWeights::new(vec![f64::NAN]),
            Err(ConfigError::NonFiniteSpacing { index: 0 })
        );
        let w = SpacingWeights::new(vec![0.1, 0.1]).unwrap();
        assert_eq!(
            w.check_categories(0),
            Err(ConfigError::SpacingWithoutCategories { weights: 2 })
        );
        assert_eq!(
            w.check_categories(1),
            Err(ConfigError::TooManySpacingWeights {
                weights: 2,
                categories: 1
            })
        );
        assert_eq!(w.check_categories(2), Ok(()));
    }
}
