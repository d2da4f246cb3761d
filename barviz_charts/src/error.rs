// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.

use thiserror::Error;

/// An invalid chart configuration.
///
/// These are reported before any layout happens; a chart that constructed successfully never
/// fails while laying out or rendering.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// A spacing weight is negative.
    #[error("spacing weight {index} is negative ({weight})")]
    NegativeSpacing {
        /// Offending weight position.
        index: usize,
        /// Offending weight.
        weight: f64,
    },
    /// A spacing weight is NaN or infinite.
    #[error("spacing weight {index} is not finite")]
    NonFiniteSpacing {
        /// Offending weight position.
        index: usize,
    },
    /// Spacing weights were given for a chart without categories.
    #[error("{weights} spacing weights given but the chart has no categories")]
    SpacingWithoutCategories {
        /// Number of configured weights.
        weights: usize,
    },
    /// More spacing weights than categories.
    #[error("{weights} spacing weights given for {categories} categories")]
    TooManySpacingWeights {
        /// Number of configured weights.
        weights: usize,
        /// Number of categories.
        categories: usize,
    },
    /// No series share the category axis, so sub-slots cannot be divided.
    #[error("bar order is zero: at least one series is required")]
    ZeroOrder,
    /// A series index does not fit in the sibling count.
    #[error("series index {index} is out of range for {order} sibling series")]
    SeriesIndexOutOfRange {
        /// The series index.
        index: usize,
        /// The number of sibling series.
        order: usize,
    },
    /// Two series share an index, so one sibling slot would hold both.
    #[error("series index {index} is used by more than one series")]
    DuplicateSeriesIndex {
        /// The repeated series index.
        index: usize,
    },
    /// A margin fraction is outside `[0, 0.5)`.
    #[error("{name} must be in [0, 0.5), got {value}")]
    InvalidMargin {
        /// Which margin (`series_margin` or `serie_margin`).
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// A font size is non-finite or not positive.
    #[error("{name} must be a positive finite size, got {value}")]
    InvalidFontSize {
        /// Which size (`value_font_size` or `value_label_font_size`).
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// The baseline is NaN or infinite.
    #[error("baseline must be finite, got {0}")]
    NonFiniteBaseline(f64),
    /// A corner radius is negative or not finite.
    #[error("series {index} has an invalid corner radius ({radius})")]
    InvalidRadius {
        /// The series index.
        index: usize,
        /// Offending radius.
        radius: f64,
    },
}
