// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar geometry.
//!
//! A bar's rectangle is derived from its category position in four steps:
//! 1. the category slot is one `N`-th of the mapped unit interval,
//! 2. the series margin insets the slot on both sides,
//! 3. the inset slot is split evenly between the `order` sibling series,
//! 4. the serie margin insets the sibling's sub-slot.
//!
//! Height is measured from the baseline and keeps its sign.

extern crate alloc;

use alloc::string::String;

use barviz_core::Element;
use kurbo::{Point, Rect};

use crate::error::ConfigError;
use crate::shape::CustomShapeSpec;
use crate::view::View;

/// Default fraction of a category slot reserved on each side between categories.
pub const DEFAULT_SERIES_MARGIN: f64 = 0.06;
/// Default fraction of a sub-slot reserved on each side between sibling series.
pub const DEFAULT_SERIE_MARGIN: f64 = 0.06;

/// A bar rectangle in the (untransposed) frame.
///
/// `width` is positive. `height` is signed: `y + height` is always the baseline, so a negative
/// height means the bar extends below `y` in frame coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarGeometry {
    /// Left edge along the category axis.
    pub x: f64,
    /// Far edge along the value axis (the mapped value).
    pub y: f64,
    /// Extent along the category axis.
    pub width: f64,
    /// Signed extent from `y` to the baseline.
    pub height: f64,
}

impl BarGeometry {
    /// Returns the normalized rectangle covered by the bar.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height).abs()
    }

    /// Returns the center of the bar.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns the baseline coordinate along the value axis.
    pub fn baseline(&self) -> f64 {
        self.y + self.height
    }
}

/// Per-chart bar layout parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarLayout {
    categories: usize,
    order: usize,
    series_margin: f64,
    serie_margin: f64,
    horizontal: bool,
}

impl BarLayout {
    /// Creates a layout for `categories` slots shared by `order` sibling series.
    ///
    /// Returns [`ConfigError::ZeroOrder`] when `order` is zero.
    pub fn new(categories: usize, order: usize) -> Result<Self, ConfigError> {
        if order == 0 {
            return Err(ConfigError::ZeroOrder);
        }
        Ok(Self {
            categories,
            order,
            series_margin: DEFAULT_SERIES_MARGIN,
            serie_margin: DEFAULT_SERIE_MARGIN,
            horizontal: false,
        })
    }

    /// Sets the between-category and between-sibling margin fractions.
    pub fn with_margins(mut self, series_margin: f64, serie_margin: f64) -> Self {
        self.series_margin = series_margin;
        self.serie_margin = serie_margin;
        self
    }

    /// Sets the orientation.
    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    /// Returns the number of sibling series.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the pixel width of one full category slot.
    pub fn slot_width(&self, view: &dyn View) -> f64 {
        if self.categories == 0 {
            return 0.0;
        }
        (view.map_x(1.0) - view.map_x(0.0)) / self.categories as f64
    }

    /// Returns which sub-slot the series at `series_index` occupies.
    ///
    /// Horizontal charts mirror sibling order.
    pub fn sub_slot_index(&self, series_index: usize) -> usize {
        if self.horizontal {
            self.order.saturating_sub(series_index + 1)
        } else {
            series_index
        }
    }

    /// Computes the bar for the point `(x, y)` (domain units) of the series at `series_index`.
    pub fn geometry(
        &self,
        view: &dyn View,
        series_index: usize,
        x: f64,
        y: f64,
        zero: f64,
    ) -> BarGeometry {
        let mut width = self.slot_width(view);
        let p = view.map(x, y);
        let mut x = p.x;

        let series_margin = width * self.series_margin;
        x += series_margin;
        width -= 2.0 * series_margin;
        width /= self.order as f64;

        x += self.sub_slot_index(series_index) as f64 * width;

        let serie_margin = width * self.serie_margin;
        x += serie_margin;
        width -= 2.0 * serie_margin;

        BarGeometry {
            x,
            y: p.y,
            width,
            height: view.map_y(zero) - p.y,
        }
    }
}

/// What a bar is drawn as.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BarFill<'a> {
    /// A custom polygon.
    Shape(&'a CustomShapeSpec),
    /// An image stretched over the rectangle.
    Image(&'a str),
    /// A plain rectangle.
    Rect {
        /// Corner radius.
        radius: f64,
    },
}

impl<'a> BarFill<'a> {
    /// Picks the fill for the point at `index`: custom shape, then per-point image, then rect.
    pub fn select(
        shape: Option<&'a CustomShapeSpec>,
        images: &'a [String],
        index: usize,
        rounded: Option<f64>,
    ) -> Self {
        if let Some(shape) = shape {
            return Self::Shape(shape);
        }
        if let Some(href) = images.get(index) {
            return Self::Image(href);
        }
        Self::Rect {
            radius: rounded.unwrap_or(0.0),
        }
    }

    /// Builds the node payload for `geometry`.
    pub fn element(&self, geometry: &BarGeometry) -> Element {
        let BarGeometry {
            x,
            y,
            width,
            height,
        } = *geometry;
        match self {
            Self::Shape(shape) => shape.element(geometry),
            Self::Image(href) => Element::image(*href, x, y, width, height),
            Self::Rect { radius } => Element::rect(x, y, width, height, *radius),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use super::*;
    use crate::view::{DomainBox, PlotView};

    fn view(horizontal: bool) -> PlotView {
        let bbox = DomainBox {
            xmin: 0.0,
            xmax: 1.0,
            ymin: -10.0,
            ymax: 10.0,
        };
        PlotView::new(Rect::new(0.0, 0.0, 300.0, 200.0), &bbox, false, horizontal)
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() <= 1e-9, "{a} != {b}");
    }

    #[test]
    fn zero_order_is_rejected() {
        assert_eq!(BarLayout::new(3, 0), Err(ConfigError::ZeroOrder));
    }

    #[test]
    fn single_series_bar_is_inset_by_both_margins() {
        let v = view(false);
        let layout = BarLayout::new(3, 1).unwrap();
        let g = layout.geometry(&v, 0, 0.5, 5.0, 0.0);
        // slot = 100, series margin 6 -> 88 wide, serie margin 5.28 -> 77.44 wide.
        assert_close(g.width, 100.0 * 0.88 * 0.88);
        assert_close(g.x, 150.0 + 6.0 + 88.0 * 0.06);
        assert_close(g.y, 50.0);
        assert_close(g.height, 50.0);
        assert_close(g.baseline(), 100.0);
    }

    #[test]
    fn negative_values_keep_negative_height() {
        let v = view(false);
        let layout = BarLayout::new(1, 1).unwrap();
        let g = layout.geometry(&v, 0, 0.5, -5.0, 0.0);
        assert_close(g.y, 150.0);
        assert_close(g.height, -50.0);
        assert_eq!(g.rect().y0, 100.0);
        assert_eq!(g.rect().y1, 150.0);
    }

    #[test]
    fn siblings_tile_the_inset_slot_without_overlap() {
        let v = view(false);
        let layout = BarLayout::new(2, 3).unwrap();
        let slot = layout.slot_width(&v);
        let bars: vec::Vec<_> = (0..3)
            .map(|i| layout.geometry(&v, i, 0.25, 1.0, 0.0))
            .collect();
        for w in bars.windows(2) {
            assert!(w[0].x + w[0].width <= w[1].x, "siblings overlap: {w:?}");
        }
        let used: f64 = bars.iter().map(|b| b.width).sum();
        assert!(used <= slot * (1.0 - 2.0 * DEFAULT_SERIES_MARGIN) + 1e-9);
    }

    #[test]
    fn horizontal_mirrors_sub_slots() {
        let layout = BarLayout::new(1, 3).unwrap().with_horizontal(true);
        assert_eq!(layout.sub_slot_index(0), 2);
        assert_eq!(layout.sub_slot_index(2), 0);
        let vertical = BarLayout::new(1, 3).unwrap();
        assert_eq!(vertical.sub_slot_index(0), 0);
    }

    #[test]
    fn fill_selection_prefers_shape_then_image() {
        let images = vec!["a.png".to_string()];
        let shape = CustomShapeSpec::new(5);
        assert_eq!(
            BarFill::select(Some(&shape), &images, 0, Some(3.0)),
            BarFill::Shape(&shape)
        );
        assert_eq!(
            BarFill::select(None, &images, 0, Some(3.0)),
            BarFill::Image("a.png")
        );
        assert_eq!(
            BarFill::select(None, &images, 1, Some(3.0)),
            BarFill::Rect { radius: 3.0 }
        );
        assert_eq!(
            BarFill::select(None, &[], 0, None),
            BarFill::Rect { radius: 0.0 }
        );
    }

    #[test]
    fn rect_fill_normalizes_signed_geometry() {
        let g = BarGeometry {
            x: 10.0,
            y: 80.0,
            width: 20.0,
            height: -30.0,
        };
        let Element::Rect { rect, radius } = BarFill::Rect { radius: 2.0 }.element(&g) else {
            panic!("expected rect");
        };
        assert_eq!(rect, Rect::new(10.0, 50.0, 30.0, 80.0));
        assert_eq!(radius, 2.0);
    }
}
