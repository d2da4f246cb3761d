// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar chart geometry and spacing for `barviz_core`.
//!
//! This crate turns series of numbers into bar nodes:
//! - **Spacing** places categories along the category axis, optionally with uneven gaps.
//! - **Bar layout** splits each category slot between sibling series and measures bars from a
//!   baseline.
//! - **Shapes** replace rectangles with inscribed polygons.
//! - **Placement** anchors tooltips and printed values.
//!
//! [`BarChart`] ties these together: it validates a [`BarChartConfig`] once, computes the
//! domain box, and emits nodes into a [`barviz_core::Scene`] through any [`View`].
//!
//! Text measurement, axes, legends and serialization are out of scope.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bar_layout;
mod chart;
mod config;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod log;
mod placement;
mod scale;
mod series;
mod shape;
mod spacing;
mod trace;
mod view;

pub use bar_layout::{BarFill, BarGeometry, BarLayout, DEFAULT_SERIE_MARGIN, DEFAULT_SERIES_MARGIN};
pub use chart::{BarChart, ComputedLayout, LayoutSource, SecondaryRescale, SeriesPoint};
pub use config::{BarChartConfig, ValueFormatter, default_format};
pub use error::ConfigError;
pub use placement::{ValueAnchors, ValuePosition, value_anchors, value_sign};
pub use scale::{AxisScale, ScaleKind};
pub use series::{ConfidenceInterval, PointMeta, Series, Value};
pub use shape::{CustomShapeSpec, ShapeTag, shape_vertices};
pub use spacing::{CategoryPositions, SpacingWeights, category_positions};
#[cfg(feature = "tracing")]
pub use trace::TracingHook;
pub use trace::TraceHook;
pub use view::{DomainBox, PlotView, View};
