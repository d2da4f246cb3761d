// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Domain → pixel mapping.
//!
//! Bar layout works in a "vertical frame": `x` runs along the category axis and `y` along the
//! value axis. A [`View`] maps domain coordinates into that frame. For horizontal charts the
//! frame is transposed later, when nodes are emitted (see `barviz_core::Scene::transposable_node`).

use kurbo::{Point, Rect};

use crate::scale::AxisScale;

/// A domain → pixel mapping for both chart axes.
///
/// The layout engine only calls these methods; it never inspects how the mapping is built.
pub trait View {
    /// Maps a category-axis domain value into the frame.
    fn map_x(&self, x: f64) -> f64;
    /// Maps a value-axis domain value into the frame.
    fn map_y(&self, y: f64) -> f64;
    /// Inverse of [`View::map_x`].
    fn invert_x(&self, px: f64) -> f64;
    /// Inverse of [`View::map_y`].
    fn invert_y(&self, py: f64) -> f64;

    /// Maps a domain point into the frame.
    fn map(&self, x: f64, y: f64) -> Point {
        Point::new(self.map_x(x), self.map_y(y))
    }
}

/// The chart's domain bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DomainBox {
    /// Category-axis minimum.
    pub xmin: f64,
    /// Category-axis maximum (grows with category spacing).
    pub xmax: f64,
    /// Value-axis minimum.
    pub ymin: f64,
    /// Value-axis maximum.
    pub ymax: f64,
}

impl Default for DomainBox {
    fn default() -> Self {
        Self {
            xmin: 0.0,
            xmax: 1.0,
            ymin: 0.0,
            ymax: 1.0,
        }
    }
}

impl DomainBox {
    /// Category-axis extent.
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Value-axis extent.
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Widens degenerate extents so both axes map to a non-empty range.
    pub fn fix(&mut self) {
        if self.width() == 0.0 {
            self.xmax = self.xmin + 1.0;
        }
        if self.height() == 0.0 {
            self.ymin -= 0.5;
            self.ymax = self.ymin + 1.0;
        }
    }
}

/// A [`View`] onto a plot rectangle.
///
/// Vertical charts map categories left → right and values bottom → top. Horizontal charts map
/// categories top → bottom and values left → right, expressed in the untransposed frame
/// (frame `x` is the screen `y`).
#[derive(Clone, Copy, Debug)]
pub struct PlotView {
    x: AxisScale,
    y: AxisScale,
}

impl PlotView {
    /// Creates a view mapping `bbox` onto `plot`.
    pub fn new(plot: Rect, bbox: &DomainBox, logarithmic: bool, horizontal: bool) -> Self {
        let (x_range, y_range) = if horizontal {
            ((plot.y0, plot.y1), (plot.x0, plot.x1))
        } else {
            ((plot.x0, plot.x1), (plot.y1, plot.y0))
        };
        let x = AxisScale::linear((bbox.xmin, bbox.xmax), x_range);
        let y = if logarithmic {
            AxisScale::log((bbox.ymin, bbox.ymax), y_range)
        } else {
            AxisScale::linear((bbox.ymin, bbox.ymax), y_range)
        };
        Self { x, y }
    }

    /// Returns the value-axis scale.
    pub fn y_scale(&self) -> AxisScale {
        self.y
    }
}

impl View for PlotView {
    fn map_x(&self, x: f64) -> f64 {
        self.x.map(x)
    }

    fn map_y(&self, y: f64) -> f64 {
        self.y.map(y)
    }

    fn invert_x(&self, px: f64) -> f64 {
        self.x.invert(px)
    }

    fn invert_y(&self, py: f64) -> f64 {
        self.y.invert(py)
    }
}
