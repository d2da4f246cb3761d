// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis scales backing [`PlotView`](crate::PlotView).

use core::f64::consts::LN_10;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// How domain values are spaced along an axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScaleKind {
    /// Evenly spaced values.
    #[default]
    Linear,
    /// Decades evenly spaced; non-positive values have no position.
    Log10,
}

/// A mapping between a domain interval and a pixel interval.
///
/// Either interval may be reversed (e.g. a value axis growing upwards on screen).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisScale {
    kind: ScaleKind,
    domain: (f64, f64),
    range: (f64, f64),
}

impl AxisScale {
    /// Creates a linear scale.
    pub fn linear(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            kind: ScaleKind::Linear,
            domain,
            range,
        }
    }

    /// Creates a base-10 logarithmic scale.
    pub fn log(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            kind: ScaleKind::Log10,
            domain,
            range,
        }
    }

    /// Returns the spacing kind.
    pub fn kind(&self) -> ScaleKind {
        self.kind
    }

    /// Returns the domain interval.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the pixel interval.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Maps a domain value to a pixel coordinate.
    ///
    /// Values without a position (non-positive on a log scale) and degenerate domains map to the
    /// start of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (r0, r1) = self.range;
        let (Some(d0), Some(d1), Some(v)) = (
            self.project(self.domain.0),
            self.project(self.domain.1),
            self.project(x),
        ) else {
            return r0;
        };
        if d1 == d0 {
            return r0;
        }
        r0 + (v - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Maps a pixel coordinate back to a domain value.
    pub fn invert(&self, px: f64) -> f64 {
        let (r0, r1) = self.range;
        let (Some(d0), Some(d1)) = (self.project(self.domain.0), self.project(self.domain.1))
        else {
            return self.domain.0;
        };
        if r1 == r0 {
            return self.domain.0;
        }
        let v = d0 + (px - r0) / (r1 - r0) * (d1 - d0);
        match self.kind {
            ScaleKind::Linear => v,
            ScaleKind::Log10 => (v * LN_10).exp(),
        }
    }

    fn project(&self, x: f64) -> Option<f64> {
        match self.kind {
            ScaleKind::Linear => Some(x),
            ScaleKind::Log10 if x > 0.0 => Some(x.ln() / LN_10),
            ScaleKind::Log10 => None,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() <= 1e-9, "{a} != {b}");
    }

    #[test]
    fn reversed_linear_range() {
        let s = AxisScale::linear((0.0, 10.0), (100.0, 0.0));
        assert_close(s.map(2.5), 75.0);
        assert_close(s.invert(75.0), 2.5);
    }

    #[test]
    fn log_decades_are_evenly_spaced() {
        let s = AxisScale::log((1.0, 100.0), (0.0, 10.0));
        assert_close(s.map(1.0), 0.0);
        assert_close(s.map(10.0), 5.0);
        assert_close(s.map(100.0), 10.0);
        assert_close(s.invert(5.0), 10.0);
    }

    #[test]
    fn positionless_values_map_to_range_start() {
        let s = AxisScale::log((1.0, 100.0), (40.0, 10.0));
        assert_eq!(s.map(0.0), 40.0);
        assert_eq!(s.map(-3.0), 40.0);
        let flat = AxisScale::linear((3.0, 3.0), (5.0, 9.0));
        assert_eq!(flat.map(42.0), 5.0);
    }
}
