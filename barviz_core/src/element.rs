// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawable element payloads.

extern crate alloc;

use alloc::string::String;

use kurbo::{Affine, BezPath, Point, Rect};
use smallvec::SmallVec;

/// Horizontal text alignment relative to the anchor point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the anchor.
    Start,
    /// Text is centered on the anchor.
    #[default]
    Middle,
    /// Text ends at the anchor.
    End,
}

impl TextAnchor {
    /// Returns the SVG `text-anchor` keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// The payload of a node.
///
/// Rectangles are stored normalized (non-negative width and height); callers that carry a signed
/// extent must keep the sign themselves.
#[derive(Clone, Debug)]
pub enum Element {
    /// A grouping node without geometry.
    Group,
    /// A hyperlink wrapping its children.
    Link {
        /// Link target.
        href: String,
    },
    /// An axis-aligned rectangle with optional rounded corners.
    Rect {
        /// Normalized rectangle.
        rect: Rect,
        /// Corner radius (`0` for square corners).
        radius: f64,
    },
    /// An image stretched to fill `rect` (no aspect-ratio preservation).
    Image {
        /// Image URL.
        href: String,
        /// Normalized target rectangle.
        rect: Rect,
    },
    /// A closed polygon.
    Polygon {
        /// Vertices, in drawing order.
        points: SmallVec<[Point; 6]>,
    },
    /// An arbitrary path.
    Path {
        /// Path geometry.
        path: BezPath,
    },
    /// A single-line text run.
    Text {
        /// Unshaped text.
        text: String,
        /// Anchor position (baseline).
        pos: Point,
        /// Alignment relative to `pos`.
        anchor: TextAnchor,
        /// Font size in scene units.
        font_size: f64,
    },
    /// Non-rendered descriptive data (tooltip payloads, labels).
    Desc {
        /// Descriptive text.
        text: String,
    },
}

impl Element {
    /// Creates a rectangle from a possibly signed origin/size.
    ///
    /// Negative `width`/`height` move the origin so the stored rectangle covers the same area.
    pub fn rect(x: f64, y: f64, width: f64, height: f64, radius: f64) -> Self {
        Self::Rect {
            rect: Rect::new(x, y, x + width, y + height).abs(),
            radius,
        }
    }

    /// Creates an image element from a possibly signed origin/size.
    pub fn image(href: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::Image {
            href: href.into(),
            rect: Rect::new(x, y, x + width, y + height).abs(),
        }
    }

    /// Creates a polygon element.
    pub fn polygon(points: impl IntoIterator<Item = Point>) -> Self {
        Self::Polygon {
            points: points.into_iter().collect(),
        }
    }

    /// Creates a descriptive (non-rendered) element.
    pub fn desc(text: impl Into<String>) -> Self {
        Self::Desc { text: text.into() }
    }

    /// Returns the SVG-like tag name of this element.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Group => "g",
            Self::Link { .. } => "a",
            Self::Rect { .. } => "rect",
            Self::Image { .. } => "image",
            Self::Polygon { .. } => "polygon",
            Self::Path { .. } => "path",
            Self::Text { .. } => "text",
            Self::Desc { .. } => "desc",
        }
    }

    /// Returns this element with its x and y roles swapped.
    ///
    /// Used for horizontal charts, whose geometry is computed in a vertical frame.
    pub fn transposed(self) -> Self {
        let swap = Affine::new([0.0, 1.0, 1.0, 0.0, 0.0, 0.0]);
        match self {
            Self::Rect { rect, radius } => Self::Rect {
                rect: swap_rect(rect),
                radius,
            },
            Self::Image { href, rect } => Self::Image {
                href,
                rect: swap_rect(rect),
            },
            Self::Polygon { points } => Self::Polygon {
                points: points.into_iter().map(|p| swap * p).collect(),
            },
            Self::Path { mut path } => {
                path.apply_affine(swap);
                Self::Path { path }
            }
            Self::Text {
                text,
                pos,
                anchor,
                font_size,
            } => Self::Text {
                text,
                pos: swap * pos,
                anchor,
                font_size,
            },
            other => other,
        }
    }

    /// Returns the geometric bounds of this element, if it has any.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect { rect, .. } | Self::Image { rect, .. } => Some(*rect),
            Self::Polygon { points } => {
                let mut it = points.iter();
                let first = it.next()?;
                Some(it.fold(Rect::from_points(*first, *first), |r, p| {
                    r.union_pt(*p)
                }))
            }
            Self::Path { path } => {
                if path.elements().is_empty() {
                    None
                } else {
                    Some(kurbo::Shape::bounding_box(path))
                }
            }
            Self::Text { pos, .. } => Some(Rect::from_points(*pos, *pos)),
            Self::Group | Self::Link { .. } | Self::Desc { .. } => None,
        }
    }
}

fn swap_rect(rect: Rect) -> Rect {
    Rect::new(rect.y0, rect.x0, rect.y1, rect.x1)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn negative_extent_is_normalized() {
        let Element::Rect { rect, .. } = Element::rect(10.0, 50.0, 20.0, -30.0, 0.0) else {
            panic!("expected rect");
        };
        assert_eq!(rect, Rect::new(10.0, 20.0, 30.0, 50.0));
    }

    #[test]
    fn transposed_rect_swaps_axes() {
        let Element::Rect { rect, radius } = Element::rect(1.0, 2.0, 3.0, 4.0, 2.5).transposed()
        else {
            panic!("expected rect");
        };
        assert_eq!(rect, Rect::new(2.0, 1.0, 6.0, 4.0));
        assert_eq!(radius, 2.5);
    }

    #[test]
    fn transposed_polygon_swaps_each_vertex() {
        let e = Element::polygon([Point::new(1.0, 2.0), Point::new(3.0, 4.0)]).transposed();
        let Element::Polygon { points } = e else {
            panic!("expected polygon");
        };
        assert_eq!(points.as_slice(), &[Point::new(2.0, 1.0), Point::new(4.0, 3.0)]);
    }

    #[test]
    fn groups_have_no_bounds() {
        assert!(Element::Group.bounds().is_none(), "groups carry no geometry");
        assert_eq!(Element::Group.tag(), "g");
    }
}
