// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Custom bar shapes.
//!
//! A custom shape replaces the bar rectangle with a polygon inscribed in the bar's box, with its
//! flat base on the baseline. Unknown side counts degrade to a triangle.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use barviz_core::Element;
use kurbo::{BezPath, Point};
use smallvec::SmallVec;

use crate::bar_layout::BarGeometry;

/// How a custom shape is emitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShapeTag {
    /// A `polygon` node with a vertex list.
    #[default]
    Polygon,
    /// A closed `path` node.
    Path,
}

/// A custom bar shape.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomShapeSpec {
    /// Node kind to emit.
    pub tag: ShapeTag,
    /// Number of sides: 3, 5 or 6; anything else draws a triangle.
    pub sides: u32,
    /// Extra attributes merged into the shape node.
    pub attrs: Vec<(String, String)>,
}

impl CustomShapeSpec {
    /// Creates a polygon shape with `sides` sides.
    pub fn new(sides: u32) -> Self {
        Self {
            tag: ShapeTag::Polygon,
            sides,
            attrs: Vec::new(),
        }
    }

    /// Sets the node kind.
    pub fn with_tag(mut self, tag: ShapeTag) -> Self {
        self.tag = tag;
        self
    }

    /// Adds an attribute merged into the shape node.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Builds the node payload for a bar.
    pub fn element(&self, geometry: &BarGeometry) -> Element {
        let vertices = shape_vertices(geometry, self.sides);
        match self.tag {
            ShapeTag::Polygon => Element::Polygon { points: vertices },
            ShapeTag::Path => {
                let mut path = BezPath::new();
                let mut it = vertices.into_iter();
                if let Some(first) = it.next() {
                    path.move_to(first);
                    for p in it {
                        path.line_to(p);
                    }
                    path.close_path();
                }
                Element::Path { path }
            }
        }
    }
}

/// Returns the vertices of a regular-ish polygon inscribed in `geometry`.
///
/// Vertices start at the bottom-left corner (on the baseline) and run counter-clockwise in
/// screen terms. `sides` of 3, 5 and 6 are supported; any other count yields the triangle.
pub fn shape_vertices(geometry: &BarGeometry, sides: u32) -> SmallVec<[Point; 6]> {
    let BarGeometry {
        x,
        y,
        width: w,
        height: h,
    } = *geometry;
    let base = y + h;
    let mid = y + h / 2.0;
    let bottom_left = Point::new(x, base);
    let bottom_right = Point::new(x + w, base);
    let top_center = Point::new(x + w / 2.0, y);

    match sides {
        5 => SmallVec::from_slice(&[
            bottom_left,
            bottom_right,
            Point::new(x + w, mid),
            top_center,
            Point::new(x, mid),
        ]),
        6 => SmallVec::from_slice(&[
            bottom_left,
            bottom_right,
            Point::new(x + w, mid),
            Point::new(x + 0.75 * w, y),
            Point::new(x + 0.25 * w, y),
            Point::new(x, mid),
        ]),
        _ => SmallVec::from_slice(&[bottom_left, bottom_right, top_center]),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    const BAR: BarGeometry = BarGeometry {
        x: 10.0,
        y: 20.0,
        width: 40.0,
        height: 80.0,
    };

    #[test]
    fn vertex_counts_follow_sides_with_triangle_fallback() {
        assert_eq!(shape_vertices(&BAR, 3).len(), 3);
        assert_eq!(shape_vertices(&BAR, 5).len(), 5);
        assert_eq!(shape_vertices(&BAR, 6).len(), 6);
        for other in [0, 1, 4, 7, 12] {
            assert_eq!(shape_vertices(&BAR, other).len(), 3);
        }
        assert_eq!(shape_vertices(&BAR, 4), shape_vertices(&BAR, 3));
    }

    #[test]
    fn triangle_sits_on_the_baseline() {
        let v = shape_vertices(&BAR, 3);
        assert_eq!(v[0], Point::new(10.0, 100.0));
        assert_eq!(v[1], Point::new(50.0, 100.0));
        assert_eq!(v[2], Point::new(30.0, 20.0));
    }

    #[test]
    fn hexagon_traces_mid_and_quarter_points() {
        let v = shape_vertices(&BAR, 6);
        assert_eq!(v[2], Point::new(50.0, 60.0));
        assert_eq!(v[3], Point::new(40.0, 20.0));
        assert_eq!(v[4], Point::new(20.0, 20.0));
        assert_eq!(v[5], Point::new(10.0, 60.0));
    }

    #[test]
    fn negative_bars_point_away_from_the_baseline() {
        let down = BarGeometry {
            height: -80.0,
            ..BAR
        };
        let v = shape_vertices(&down, 3);
        assert_eq!(v[0].y, -60.0);
        assert_eq!(v[2].y, 20.0);
    }

    #[test]
    fn path_tag_emits_closed_path() {
        let e = CustomShapeSpec::new(5)
            .with_tag(ShapeTag::Path)
            .element(&BAR);
        let Element::Path { path } = e else {
            panic!("expected path");
        };
        // move + 4 lines + close
        assert_eq!(path.elements().len(), 6);
    }
}
