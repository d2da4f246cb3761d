// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout checkpoints.
//!
//! A [`TraceHook`] observes the layout pass without influencing it. Every method has an empty
//! default, so hooks only implement the checkpoints they care about.

use crate::bar_layout::BarGeometry;
use crate::view::DomainBox;

/// Observer invoked at layout checkpoints.
pub trait TraceHook {
    /// A category position was computed.
    fn position_computed(&self, _category: usize, _position: f64) {}

    /// The domain box was computed.
    fn extent_computed(&self, _bbox: &DomainBox) {}

    /// A point was skipped (missing, non-finite, or non-positive on a log axis).
    fn point_skipped(&self, _series: usize, _point: usize) {}

    /// A bar's geometry was computed.
    fn geometry_computed(&self, _series: usize, _point: usize, _geometry: &BarGeometry) {}
}

/// A [`TraceHook`] that forwards every checkpoint to `tracing` debug events.
#[cfg(feature = "tracing")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingHook;

#[cfg(feature = "tracing")]
impl TraceHook for TracingHook {
    fn position_computed(&self, category: usize, position: f64) {
        tracing::debug!(category, position, "category position");
    }

    fn extent_computed(&self, bbox: &DomainBox) {
        tracing::debug!(
            xmax = bbox.xmax,
            ymin = bbox.ymin,
            ymax = bbox.ymax,
            "domain box"
        );
    }

    fn point_skipped(&self, series: usize, point: usize) {
        tracing::debug!(series, point, "point skipped");
    }

    fn geometry_computed(&self, series: usize, point: usize, geometry: &BarGeometry) {
        tracing::debug!(
            series,
            point,
            x = geometry.x,
            y = geometry.y,
            width = geometry.width,
            height = geometry.height,
            "bar geometry"
        );
    }
}
