// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart-wide bar configuration.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::bar_layout::{DEFAULT_SERIE_MARGIN, DEFAULT_SERIES_MARGIN};
use crate::error::ConfigError;
use crate::placement::ValuePosition;
use crate::series::Value;
use crate::shape::CustomShapeSpec;
use crate::spacing::SpacingWeights;

/// Formats a value for tooltips and printed values.
pub type ValueFormatter = Arc<dyn Fn(f64) -> String>;

/// Chart-wide options for bar rendering.
///
/// Every field has a default; see [`BarChartConfig::new`].
#[derive(Clone)]
pub struct BarChartConfig {
    /// Draw bars horizontally (categories down the vertical axis).
    pub horizontal: bool,
    /// Use a logarithmic value axis. Non-positive values are skipped.
    pub logarithmic: bool,
    /// Baseline from which bar heights are measured.
    pub zero: f64,
    /// Optional per-category spacing weights (uniform when `None`).
    pub spacing: Option<SpacingWeights>,
    /// Per-point image URLs; point `i` uses `bar_images[i]` when present.
    pub bar_images: Vec<String>,
    /// Optional custom shape replacing rectangles.
    pub custom_shape: Option<CustomShapeSpec>,
    /// Print values next to bars.
    pub print_values: bool,
    /// Print per-point labels next to bars.
    pub print_labels: bool,
    /// Print values that format as `"0"`.
    pub print_zeroes: bool,
    /// Where printed values sit.
    pub print_values_position: ValuePosition,
    /// Font size of printed values.
    pub value_font_size: f64,
    /// Font size of printed labels.
    pub value_label_font_size: f64,
    /// Fraction of a category slot reserved on each side.
    pub series_margin: f64,
    /// Fraction of a sibling sub-slot reserved on each side.
    pub serie_margin: f64,
    /// Category labels, used in tooltips.
    pub x_labels: Vec<String>,
    /// Value formatter.
    pub value_formatter: ValueFormatter,
}

impl core::fmt::Debug for BarChartConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BarChartConfig")
            .field("horizontal", &self.horizontal)
            .field("logarithmic", &self.logarithmic)
            .field("zero", &self.zero)
            .field("spacing", &self.spacing)
            .field("bar_images", &self.bar_images.len())
            .field("custom_shape", &self.custom_shape)
            .field("print_values", &self.print_values)
            .field("print_labels", &self.print_labels)
            .field("print_zeroes", &self.print_zeroes)
            .field("print_values_position", &self.print_values_position)
            .field("value_font_size", &self.value_font_size)
            .field("value_label_font_size", &self.value_label_font_size)
            .field("series_margin", &self.series_margin)
            .field("serie_margin", &self.serie_margin)
            .field("x_labels", &self.x_labels)
            .field("value_formatter", &"<fn>")
            .finish()
    }
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl BarChartConfig {
    /// Creates the default configuration: vertical, linear, baseline `0`, uniform spacing,
    /// rectangles, values centered but not printed, 16/10 font sizes, 6% margins.
    pub fn new() -> Self {
        Self {
            horizontal: false,
            logarithmic: false,
            zero: 0.0,
            spacing: None,
            bar_images: Vec::new(),
            custom_shape: None,
            print_values: false,
            print_labels: false,
            print_zeroes: true,
            print_values_position: ValuePosition::Centered,
            value_font_size: 16.0,
            value_label_font_size: 10.0,
            series_margin: DEFAULT_SERIES_MARGIN,
            serie_margin: DEFAULT_SERIE_MARGIN,
            x_labels: Vec::new(),
            value_formatter: Arc::new(default_format),
        }
    }

    /// Sets the orientation.
    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    /// Enables or disables the logarithmic value axis.
    pub fn with_logarithmic(mut self, logarithmic: bool) -> Self {
        self.logarithmic = logarithmic;
        self
    }

    /// Sets the baseline.
    pub fn with_zero(mut self, zero: f64) -> Self {
        self.zero = zero;
        self
    }

    /// Sets per-category spacing weights.
    pub fn with_spacing(mut self, spacing: SpacingWeights) -> Self {
        self.spacing = Some(spacing);
        self
    }

    /// Sets per-point image URLs.
    pub fn with_bar_images(mut self, images: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.bar_images = images.into_iter().map(Into::into).collect();
        self
    }

    /// Sets a custom bar shape.
    pub fn with_custom_shape(mut self, shape: CustomShapeSpec) -> Self {
        self.custom_shape = Some(shape);
        self
    }

    /// Enables printed values at the given position.
    pub fn with_print_values(mut self, position: ValuePosition) -> Self {
        self.print_values = true;
        self.print_values_position = position;
        self
    }

    /// Enables or disables printed labels.
    pub fn with_print_labels(mut self, print_labels: bool) -> Self {
        self.print_labels = print_labels;
        self
    }

    /// Enables or disables printing of zero values.
    pub fn with_print_zeroes(mut self, print_zeroes: bool) -> Self {
        self.print_zeroes = print_zeroes;
        self
    }

    /// Sets the printed value and label font sizes.
    pub fn with_font_sizes(mut self, value: f64, label: f64) -> Self {
        self.value_font_size = value;
        self.value_label_font_size = label;
        self
    }

    /// Sets the between-category and between-sibling margin fractions.
    pub fn with_margins(mut self, series_margin: f64, serie_margin: f64) -> Self {
        self.series_margin = series_margin;
        self.serie_margin = serie_margin;
        self
    }

    /// Sets category labels.
    pub fn with_x_labels(mut self, labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.x_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the value formatter.
    pub fn with_value_formatter(mut self, f: impl Fn(f64) -> String + 'static) -> Self {
        self.value_formatter = Arc::new(f);
        self
    }

    /// Formats a value with the configured formatter.
    pub fn format_value(&self, value: f64) -> String {
        (self.value_formatter)(value)
    }

    /// Formats a point for its tooltip and printed value.
    ///
    /// Pairs read `low, high`, each component formatted on its own.
    pub fn format_point(&self, value: Value) -> String {
        match value {
            Value::Single(v) => self.format_value(v),
            Value::Pair { low, high } => {
                format!("{}, {}", self.format_value(low), self.format_value(high))
            }
        }
    }

    /// Checks the options that do not depend on series data.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.zero.is_finite() {
            return Err(ConfigError::NonFiniteBaseline(self.zero));
        }
        for (name, value) in [
            ("series_margin", self.series_margin),
            ("serie_margin", self.serie_margin),
        ] {
            if !(0.0..0.5).contains(&value) {
                return Err(ConfigError::InvalidMargin { name, value });
            }
        }
        for (name, value) in [
            ("value_font_size", self.value_font_size),
            ("value_label_font_size", self.value_label_font_size),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidFontSize { name, value });
            }
        }
        Ok(())
    }
}

/// The default value formatter: at most six decimals, without trailing zeros.
pub fn default_format(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    let s = format!("{value:.6}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        return String::from("0");
    }
    String::from(s)
}
