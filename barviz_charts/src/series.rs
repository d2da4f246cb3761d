// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series data and per-point metadata.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use barviz_core::Decoration;
use hashbrown::HashMap;
use peniko::Brush;

/// One datum of a series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    /// A plain scalar.
    Single(f64),
    /// A dual value (`{low, high}`), as carried by dual-value charts.
    ///
    /// The bar extends to `high`; sign decisions use `low`. Tooltips and printed values show
    /// both components.
    Pair {
        /// First component.
        low: f64,
        /// Second component.
        high: f64,
    },
}

impl Value {
    /// The coordinate drawn on the value axis.
    pub fn plotted(self) -> f64 {
        match self {
            Self::Single(v) => v,
            Self::Pair { high, .. } => high,
        }
    }

    /// The component used for sign decisions (the first component of a pair).
    pub fn leading(self) -> f64 {
        match self {
            Self::Single(v) => v,
            Self::Pair { low, .. } => low,
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Single(value)
    }
}

impl From<(f64, f64)> for Value {
    fn from((low, high): (f64, f64)) -> Self {
        Self::Pair { low, high }
    }
}

/// A manual confidence interval for one point, in data units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfidenceInterval {
    /// Lower bound.
    pub low: f64,
    /// Upper bound.
    pub high: f64,
}

/// Optional per-point metadata.
#[derive(Clone, Debug, Default)]
pub struct PointMeta {
    /// Label printed next to the value and stored in the bar's description.
    pub label: Option<String>,
    /// Link target wrapping the bar.
    pub link: Option<String>,
    /// Fill override.
    pub fill: Option<Brush>,
    /// Extra attributes merged into the bar node.
    pub node_attrs: Vec<(String, String)>,
    /// Confidence interval drawn over the bar.
    pub ci: Option<ConfidenceInterval>,
}

impl PointMeta {
    /// Creates empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the link target.
    pub fn with_link(mut self, href: impl Into<String>) -> Self {
        self.link = Some(href.into());
        self
    }

    /// Sets the fill override.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Adds an attribute merged into the bar node.
    pub fn with_node_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.node_attrs.push((name.into(), value.into()));
        self
    }

    /// Sets a manual confidence interval.
    pub fn with_ci(mut self, low: f64, high: f64) -> Self {
        self.ci = Some(ConfidenceInterval { low, high });
        self
    }

    pub(crate) fn decoration(&self) -> Decoration<'_> {
        Decoration {
            link: self.link.as_deref(),
            fill: self.fill.as_ref(),
            label: self.label.as_deref(),
        }
    }
}

/// One data series drawn across the categories.
#[derive(Clone, Debug)]
pub struct Series {
    /// Position among the sibling series sharing the category axis.
    pub index: usize,
    /// Values in category order; `None` marks a missing datum.
    pub values: Vec<Option<Value>>,
    /// Corner radius for rounded bars.
    pub rounded: Option<f64>,
    /// Series fill.
    pub fill: Option<Brush>,
    /// Per-point metadata keyed by point index.
    pub metadata: HashMap<usize, PointMeta>,
}

impl Series {
    /// Creates a series of scalar values.
    pub fn new(index: usize, values: impl IntoIterator<Item = Option<f64>>) -> Self {
        Self::from_values(index, values.into_iter().map(|v| v.map(Value::Single)))
    }

    /// Creates a series from arbitrary values.
    pub fn from_values(index: usize, values: impl IntoIterator<Item = Option<Value>>) -> Self {
        Self {
            index,
            values: values.into_iter().collect(),
            rounded: None,
            fill: None,
            metadata: HashMap::new(),
        }
    }

    /// Enables rounded corners with the given radius.
    pub fn with_rounded(mut self, radius: f64) -> Self {
        self.rounded = Some(radius);
        self
    }

    /// Sets the series fill.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Attaches metadata to the point at `index`.
    pub fn with_meta(mut self, index: usize, meta: PointMeta) -> Self {
        self.metadata.insert(index, meta);
        self
    }

    /// Returns the number of values (including missing ones).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the series has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the metadata of the point at `index`.
    pub fn meta(&self, index: usize) -> Option<&PointMeta> {
        self.metadata.get(&index)
    }

    /// Iterates over the finite plotted values, skipping missing ones.
    pub fn plotted_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values
            .iter()
            .flatten()
            .map(|v| v.plotted())
            .filter(|v| v.is_finite())
    }
}
