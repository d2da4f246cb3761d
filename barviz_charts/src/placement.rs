// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip and printed-value anchors.

use kurbo::Point;

use crate::bar_layout::BarGeometry;
use crate::series::Value;

/// Where printed values sit relative to their bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ValuePosition {
    /// Just past the bar's far edge.
    Top,
    /// Just inside the bar's baseline edge.
    Bottom,
    /// At the bar's center.
    #[default]
    Centered,
}

/// Anchors for one bar, in screen coordinates (already transposed for horizontal charts).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueAnchors {
    /// Tooltip anchor: always the bar's center.
    pub tooltip: Point,
    /// Printed-value anchor.
    pub value: Point,
}

/// Returns `-1` when the value lies strictly below `zero`, else `+1`.
///
/// Dual values decide on their first component.
pub fn value_sign(value: Value, zero: f64) -> f64 {
    if value.leading() < zero { -1.0 } else { 1.0 }
}

/// Computes the tooltip and printed-value anchors for a bar.
pub fn value_anchors(
    geometry: &BarGeometry,
    value: Value,
    zero: f64,
    horizontal: bool,
    position: ValuePosition,
    font_size: f64,
) -> ValueAnchors {
    let transpose = |x: f64, y: f64| {
        if horizontal {
            Point::new(y, x)
        } else {
            Point::new(x, y)
        }
    };
    let BarGeometry {
        x,
        y,
        width,
        height,
    } = *geometry;
    let center = transpose(x + width / 2.0, y + height / 2.0);
    // `far` is the mapped value, `near` the baseline corner.
    let far = transpose(x, y);
    let near = transpose(x + width, y + height);

    let sign = value_sign(value, zero);
    let offset = sign * font_size / 2.0;

    let value_anchor = match (position, horizontal) {
        (ValuePosition::Top, true) => Point::new(far.x + offset, center.y),
        (ValuePosition::Top, false) => Point::new(center.x, far.y - offset),
        (ValuePosition::Bottom, true) => Point::new(near.x + offset, center.y),
        (ValuePosition::Bottom, false) => Point::new(center.x, near.y - offset),
        (ValuePosition::Centered, _) => center,
    };

    ValueAnchors {
        tooltip: center,
        value: value_anchor,
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    const UP: BarGeometry = BarGeometry {
        x: 10.0,
        y: 20.0,
        width: 40.0,
        height: 80.0,
    };

    #[test]
    fn sign_is_negative_only_strictly_below_zero() {
        assert_eq!(value_sign(Value::Single(-0.5), 0.0), -1.0);
        assert_eq!(value_sign(Value::Single(0.0), 0.0), 1.0);
        assert_eq!(value_sign(Value::Single(3.0), 0.0), 1.0);
        assert_eq!(value_sign(Value::Single(3.0), 5.0), -1.0);
        assert_eq!(value_sign(Value::Pair { low: -1.0, high: 9.0 }, 0.0), -1.0);
    }

    #[test]
    fn tooltip_is_always_the_center() {
        for pos in [ValuePosition::Top, ValuePosition::Bottom, ValuePosition::Centered] {
            let a = value_anchors(&UP, Value::Single(4.0), 0.0, false, pos, 16.0);
            assert_eq!(a.tooltip, Point::new(30.0, 60.0));
        }
        let a = value_anchors(&UP, Value::Single(4.0), 0.0, false, ValuePosition::Centered, 16.0);
        assert_eq!(a.value, a.tooltip);
    }

    #[test]
    fn vertical_top_and_bottom() {
        let top = value_anchors(&UP, Value::Single(4.0), 0.0, false, ValuePosition::Top, 16.0);
        assert_eq!(top.value, Point::new(30.0, 12.0));
        let bottom =
            value_anchors(&UP, Value::Single(4.0), 0.0, false, ValuePosition::Bottom, 16.0);
        assert_eq!(bottom.value, Point::new(30.0, 92.0));
    }

    #[test]
    fn negative_values_flip_the_offset() {
        let down = BarGeometry {
            x: 10.0,
            y: 140.0,
            width: 40.0,
            height: -40.0,
        };
        let top = value_anchors(&down, Value::Single(-4.0), 0.0, false, ValuePosition::Top, 16.0);
        assert_eq!(top.value, Point::new(30.0, 148.0));
    }

    #[test]
    fn horizontal_swaps_roles() {
        // Frame: category along x (screen y), value along y (screen x), value at 120, base at 20.
        let bar = BarGeometry {
            x: 10.0,
            y: 120.0,
            width: 40.0,
            height: -100.0,
        };
        let a = value_anchors(&bar, Value::Single(4.0), 0.0, true, ValuePosition::Top, 16.0);
        assert_eq!(a.tooltip, Point::new(70.0, 30.0));
        assert_eq!(a.value, Point::new(128.0, 30.0));
        let b = value_anchors(&bar, Value::Single(4.0), 0.0, true, ValuePosition::Bottom, 16.0);
        assert_eq!(b.value, Point::new(28.0, 30.0));
    }
}
