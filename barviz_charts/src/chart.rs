// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar chart layout and node emission.
//!
//! A render pass has two phases:
//! - [`BarChart::compute_layout`] places the categories and computes the domain box (once),
//! - [`BarChart::plot`] walks primary series, then secondary series, and emits one group per
//!   drawable point, in point order.
//!
//! Emission order is deterministic for identical input.

extern crate alloc;

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use barviz_core::{Element, NodeId, Scene};
use kurbo::{Point, Rect};

use crate::bar_layout::{BarFill, BarLayout};
use crate::config::BarChartConfig;
use crate::error::ConfigError;
use crate::log::{debug, trace};
use crate::placement::value_anchors;
use crate::series::{PointMeta, Series, Value};
use crate::spacing::category_positions;
use crate::trace::TraceHook;
use crate::view::{DomainBox, PlotView, View};

/// Classes carried by every bar node (rect, image or custom shape).
const BAR_CLASSES: [&str; 3] = ["rect", "reactive", "tooltip-trigger"];
/// Width of confidence interval caps.
const CI_CAP_WIDTH: f64 = 7.0;

/// What the layout engine needs from a chart.
pub trait LayoutSource {
    /// Primary series, drawn first.
    fn series(&self) -> &[Series];

    /// Secondary series, drawn after the primary ones and rescaled into their range.
    fn secondary_series(&self) -> &[Series];

    /// Number of categories: the length of the longest series.
    fn category_count(&self) -> usize {
        self.series()
            .iter()
            .chain(self.secondary_series())
            .map(Series::len)
            .max()
            .unwrap_or(0)
    }

    /// Number of sibling series sharing each category.
    fn order(&self) -> usize {
        self.series().len() + self.secondary_series().len()
    }
}

/// Linear mapping of secondary-series values into the primary value range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SecondaryRescale {
    /// Multiplier applied to secondary offsets.
    pub scale: f64,
    /// Primary value the secondary minimum maps to.
    pub offset: f64,
    /// Secondary minimum.
    pub secondary_min: f64,
}

impl SecondaryRescale {
    /// Maps the secondary range `[min, max]` onto the value range of `primary`.
    pub fn new(primary: &DomainBox, min: f64, max: f64) -> Self {
        let span = max - min;
        let scale = if span == 0.0 {
            1.0
        } else {
            primary.height() / span
        };
        Self {
            scale,
            offset: primary.ymin,
            secondary_min: min,
        }
    }

    /// Rescales one secondary value.
    pub fn apply(&self, y: f64) -> f64 {
        self.offset + (y - self.secondary_min) * self.scale
    }
}

/// One point of a series, placed on the category axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesPoint {
    /// Point index within its series.
    pub index: usize,
    /// Category position (domain units).
    pub x: f64,
    /// Value-axis coordinate (after rescaling), `None` when missing.
    pub y: Option<f64>,
    /// The raw value.
    pub value: Option<Value>,
}

/// The result of [`BarChart::compute_layout`].
#[derive(Clone, Debug, PartialEq)]
pub struct ComputedLayout {
    /// Category positions, one per category.
    pub positions: Vec<f64>,
    /// Domain box.
    pub bbox: DomainBox,
    /// Effective baseline (the box minimum on log axes with a non-positive configured baseline).
    pub zero: f64,
    /// Secondary rescale, when secondary series have values.
    pub rescale: Option<SecondaryRescale>,
}

/// A validated bar chart: configuration plus series.
#[derive(Clone)]
pub struct BarChart {
    config: BarChartConfig,
    series: Vec<Series>,
    secondary: Vec<Series>,
    bar_layout: BarLayout,
    layout: Option<ComputedLayout>,
    trace_hook: Option<Arc<dyn TraceHook>>,
}

impl core::fmt::Debug for BarChart {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BarChart")
            .field("config", &self.config)
            .field("series", &self.series)
            .field("secondary", &self.secondary)
            .field("bar_layout", &self.bar_layout)
            .field("layout", &self.layout)
            .field("trace_hook", &self.trace_hook.as_ref().map(|_| "<hook>"))
            .finish()
    }
}

impl LayoutSource for BarChart {
    fn series(&self) -> &[Series] {
        &self.series
    }

    fn secondary_series(&self) -> &[Series] {
        &self.secondary
    }
}

impl BarChart {
    /// Validates `config` against the series and builds a chart.
    ///
    /// Every configuration error is reported here; layout and rendering cannot fail afterwards.
    pub fn new(
        config: BarChartConfig,
        series: Vec<Series>,
        secondary: Vec<Series>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut chart = Self {
            config,
            series,
            secondary,
            bar_layout: BarLayout::new(0, 1)?,
            layout: None,
            trace_hook: None,
        };

        let categories = chart.category_count();
        let order = chart.order();
        chart.bar_layout = BarLayout::new(categories, order)?
            .with_margins(chart.config.series_margin, chart.config.serie_margin)
            .with_horizontal(chart.config.horizontal);

        let mut taken = alloc::vec![false; order];
        for s in chart.series.iter().chain(&chart.secondary) {
            if s.index >= order {
                return Err(ConfigError::SeriesIndexOutOfRange {
                    index: s.index,
                    order,
                });
            }
            if core::mem::replace(&mut taken[s.index], true) {
                return Err(ConfigError::DuplicateSeriesIndex { index: s.index });
            }
            if let Some(radius) = s.rounded
                && (!radius.is_finite() || radius < 0.0)
            {
                return Err(ConfigError::InvalidRadius {
                    index: s.index,
                    radius,
                });
            }
        }
        if let Some(spacing) = &chart.config.spacing {
            spacing.check_categories(categories)?;
        }
        Ok(chart)
    }

    /// Installs a trace hook.
    pub fn with_trace_hook(mut self, hook: Arc<dyn TraceHook>) -> Self {
        self.trace_hook = Some(hook);
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &BarChartConfig {
        &self.config
    }

    /// Returns the per-bar layout parameters.
    pub fn bar_layout(&self) -> &BarLayout {
        &self.bar_layout
    }

    /// Returns the layout stored by the last [`BarChart::compute_layout`] call.
    pub fn layout(&self) -> Option<&ComputedLayout> {
        self.layout.as_ref()
    }

    /// Places the categories, computes the domain box and stores the result.
    ///
    /// This is the only call that reports layout checkpoints to the trace hook.
    pub fn compute_layout(&mut self) -> &ComputedLayout {
        let layout = self.layout_pass(self.trace_hook.as_deref());
        self.layout.insert(layout)
    }

    /// Builds a [`PlotView`] mapping the current domain box onto `plot`.
    ///
    /// Without a stored layout, an equal layout is derived for this call only. It is neither
    /// stored nor reported to the trace hook; call [`BarChart::compute_layout`] first to reuse it.
    pub fn view(&self, plot: Rect) -> PlotView {
        let layout = self.current_layout();
        PlotView::new(
            plot,
            &layout.bbox,
            self.config.logarithmic,
            self.config.horizontal,
        )
    }

    /// Pairs each value of `series` with its category position.
    ///
    /// With `rescale`, values are mapped into the primary range (when secondary series exist).
    /// Uses the stored layout like [`BarChart::view`].
    pub fn points(&self, series: &Series, rescale: bool) -> Vec<SeriesPoint> {
        points_in(&self.current_layout(), series, rescale)
    }

    /// Draws primary series, then secondary series.
    ///
    /// Uses the stored layout like [`BarChart::view`]; the layout is derived at most once per
    /// call.
    pub fn plot(&self, scene: &mut Scene, view: &dyn View) {
        let layout = self.current_layout();
        for s in &self.series {
            self.emit_series(&layout, scene, view, s, false);
        }
        for s in &self.secondary {
            self.emit_series(&layout, scene, view, s, true);
        }
    }

    /// Runs a full pass into a new scene for the given plot rectangle.
    pub fn render(&mut self, plot: Rect) -> Scene {
        self.compute_layout();
        let view = self.view(plot);
        let mut scene = Scene::new().with_horizontal(self.config.horizontal);
        self.plot(&mut scene, &view);
        scene
    }

    /// Emits the bars of one series.
    ///
    /// Missing points, non-finite values and non-positive values on a logarithmic axis are
    /// skipped without emitting anything. Uses the stored layout like [`BarChart::view`].
    pub fn render_series(&self, scene: &mut Scene, view: &dyn View, series: &Series, rescale: bool) {
        self.emit_series(&self.current_layout(), scene, view, series, rescale);
    }

    fn emit_series(
        &self,
        layout: &ComputedLayout,
        scene: &mut Scene,
        view: &dyn View,
        series: &Series,
        rescale: bool,
    ) {
        let config = &self.config;
        let hook = self.trace_hook.as_deref();
        let rescale_fn = if rescale { layout.rescale } else { None };
        let zero = layout.zero;

        let nodes = scene.serie(series.index);
        if let Some(fill) = &series.fill {
            scene.set_fill(nodes.plot, fill.clone());
        }
        let bars = scene.node(nodes.plot, Element::Group, &["bars"]);

        for point in points_in(layout, series, rescale) {
            let i = point.index;
            let drawable = point
                .y
                .zip(point.value)
                .filter(|(y, value)| {
                    let positionless =
                        config.logarithmic && (*y <= 0.0 || value.plotted() <= 0.0);
                    y.is_finite() && !positionless
                });
            let Some((y, value)) = drawable else {
                trace!(series = series.index, point = i, "skipping point");
                if let Some(hook) = hook {
                    hook.point_skipped(series.index, i);
                }
                continue;
            };

            let meta = series.meta(i);
            let text = config.format_point(value);

            let bar = scene.node(bars, Element::Group, &["bar"]);
            let bar = match meta {
                Some(m) => scene.decorate(bar, &m.decoration()),
                None => bar,
            };

            let geometry = self
                .bar_layout
                .geometry(view, series.index, point.x, y, zero);
            if let Some(hook) = hook {
                hook.geometry_computed(series.index, i, &geometry);
            }

            let fill = BarFill::select(
                config.custom_shape.as_ref(),
                &config.bar_images,
                i,
                series.rounded,
            );
            let node = scene.transposable_node(bar, fill.element(&geometry), &BAR_CLASSES);
            if let BarFill::Shape(shape) = fill {
                scene.alter(node, &shape.attrs);
            }

            if let Some(meta) = meta {
                scene.alter(node, &meta.node_attrs);
                if let Some(ci) = meta.ci {
                    let (low, high) = match rescale_fn {
                        Some(r) => (r.apply(ci.low), r.apply(ci.high)),
                        None => (ci.low, ci.high),
                    };
                    scene.confidence_interval(
                        nodes.overlay,
                        geometry.x + geometry.width / 2.0,
                        view.map_y(low),
                        view.map_y(high),
                        CI_CAP_WIDTH,
                    );
                }
            }

            let anchors = value_anchors(
                &geometry,
                value,
                zero,
                config.horizontal,
                config.print_values_position,
                config.value_font_size,
            );
            let x_label = config.x_labels.get(i).map(String::as_str);
            scene.tooltip_data(bar, &text, anchors.tooltip, "centered", x_label);
            self.static_value(scene, nodes.text_overlay, &text, anchors.value, meta);
        }
    }

    fn static_value(
        &self,
        scene: &mut Scene,
        parent: NodeId,
        text: &str,
        anchor: Point,
        meta: Option<&PointMeta>,
    ) {
        let config = &self.config;
        let mut y = anchor.y;
        if config.print_labels
            && let Some(label) = meta.and_then(|m| m.label.as_deref())
            && !label.is_empty()
        {
            if config.print_values {
                y -= config.value_font_size / 2.0;
            }
            scene.static_value(
                parent,
                label,
                Point::new(anchor.x, y + config.value_label_font_size / 3.0),
                config.value_label_font_size,
                &["label"],
            );
            y += config.value_font_size;
        }
        if config.print_values {
            let shown = if config.print_zeroes || text != "0" {
                text
            } else {
                ""
            };
            scene.static_value(
                parent,
                shown,
                Point::new(anchor.x, y + config.value_font_size / 3.0),
                config.value_font_size,
                &["value"],
            );
        }
    }

    fn current_layout(&self) -> Cow<'_, ComputedLayout> {
        match &self.layout {
            Some(layout) => Cow::Borrowed(layout),
            None => Cow::Owned(self.layout_pass(None)),
        }
    }

    fn layout_pass(&self, hook: Option<&dyn TraceHook>) -> ComputedLayout {
        let config = &self.config;
        let categories = self.category_count();

        let placed = category_positions(categories, config.spacing.as_ref());
        if let Some(hook) = hook {
            for (i, p) in placed.positions.iter().enumerate() {
                hook.position_computed(i, *p);
            }
        }

        let mut bbox = DomainBox::default();
        if let Some(xmax) = placed.xmax {
            bbox.xmax = xmax;
        }

        let log = config.logarithmic;
        let include_zero = !log || config.zero > 0.0;
        match value_range(&self.series, log) {
            Some((min, max)) => {
                bbox.ymin = if include_zero { min.min(config.zero) } else { min };
                bbox.ymax = if include_zero { max.max(config.zero) } else { max };
            }
            None if log => {
                bbox.ymin = 1.0;
                bbox.ymax = 10.0;
            }
            None if include_zero => {
                bbox.ymin = bbox.ymin.min(config.zero);
                bbox.ymax = bbox.ymax.max(config.zero);
            }
            None => {}
        }
        if log && bbox.height() == 0.0 {
            bbox.ymin /= 10.0;
            bbox.ymax *= 10.0;
        }
        bbox.fix();

        let zero = if log && config.zero <= 0.0 {
            bbox.ymin
        } else {
            config.zero
        };
        let rescale = value_range(&self.secondary, log)
            .map(|(min, max)| SecondaryRescale::new(&bbox, min, max));

        debug!(
            categories,
            xmax = bbox.xmax,
            ymin = bbox.ymin,
            ymax = bbox.ymax,
            "computed bar layout"
        );
        if let Some(hook) = hook {
            hook.extent_computed(&bbox);
        }

        ComputedLayout {
            positions: placed.positions,
            bbox,
            zero,
            rescale,
        }
    }
}

fn points_in(layout: &ComputedLayout, series: &Series, rescale: bool) -> Vec<SeriesPoint> {
    let rescale = if rescale { layout.rescale } else { None };
    layout
        .positions
        .iter()
        .zip(&series.values)
        .enumerate()
        .map(|(index, (&x, value))| SeriesPoint {
            index,
            x,
            y: value.map(|v| {
                let y = v.plotted();
                rescale.map_or(y, |r| r.apply(y))
            }),
            value: *value,
        })
        .collect()
}

/// Returns the `(min, max)` of the drawable values of `series`.
fn value_range(series: &[Series], logarithmic: bool) -> Option<(f64, f64)> {
    series
        .iter()
        .flat_map(Series::plotted_values)
        .filter(|v| !logarithmic || *v > 0.0)
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((v.min(min), v.max(max))),
        })
}
