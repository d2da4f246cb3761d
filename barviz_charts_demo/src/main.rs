// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar chart demos for `barviz_charts`.
//!
//! Writes one SVG per demo into the directory given as the first argument (default: current
//! directory). Set `RUST_LOG=barviz_charts=trace` to see layout checkpoints.

mod svg;

use std::path::PathBuf;
use std::sync::Arc;

use barviz_charts::{
    BarChart, BarChartConfig, ConfigError, CustomShapeSpec, PointMeta, Series, ShapeTag,
    SpacingWeights, TracingHook, ValuePosition,
};
use kurbo::Rect;
use peniko::Color;
use peniko::color::palette::css;

const PLOT: Rect = Rect::new(40.0, 20.0, 600.0, 380.0);
const VIEW_BOX: Rect = Rect::new(0.0, 0.0, 640.0, 400.0);
const PALETTE: [Color; 4] = [css::STEEL_BLUE, css::TOMATO, css::MEDIUM_SEA_GREEN, css::GOLDENROD];

type Demo = (&'static str, fn() -> Result<BarChart, ConfigError>);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let demos: [Demo; 6] = [
        ("grouped", grouped_demo),
        ("spacing", spacing_demo),
        ("horizontal", horizontal_demo),
        ("logarithmic", log_demo),
        ("secondary", secondary_demo),
        ("shapes", shapes_demo),
    ];

    for (name, build) in demos {
        let mut chart = match build() {
            Ok(chart) => chart.with_trace_hook(Arc::new(TracingHook)),
            Err(err) => {
                tracing::error!(demo = name, %err, "invalid chart configuration");
                continue;
            }
        };
        let scene = chart.render(PLOT);
        let path = out_dir.join(format!("barviz_{name}.svg"));
        std::fs::write(&path, svg::to_svg_string(&scene, VIEW_BOX)).expect("write demo svg");
        tracing::info!(demo = name, nodes = scene.len(), path = %path.display(), "wrote demo");
    }
}

fn colored(index: usize, values: impl IntoIterator<Item = Option<f64>>) -> Series {
    Series::new(index, values).with_fill(PALETTE[index % PALETTE.len()])
}

fn grouped_demo() -> Result<BarChart, ConfigError> {
    let config = BarChartConfig::new()
        .with_x_labels(["Q1", "Q2", "Q3", "Q4"])
        .with_print_values(ValuePosition::Top);
    BarChart::new(
        config,
        vec![
            colored(0, [Some(12.0), Some(18.0), Some(-4.0), Some(9.0)]),
            colored(1, [Some(7.0), None, Some(3.5), Some(14.0)]).with_rounded(4.0),
            colored(2, [Some(2.0), Some(5.0), Some(8.0), Some(0.0)]),
        ],
        Vec::new(),
    )
}

fn spacing_demo() -> Result<BarChart, ConfigError> {
    let config = BarChartConfig::new()
        .with_spacing(SpacingWeights::new(vec![0.0, 2.0, 0.0, 1.0])?)
        .with_print_values(ValuePosition::Centered);
    BarChart::new(
        config,
        vec![colored(
            0,
            [Some(3.0), Some(5.0), Some(2.0), Some(6.0), Some(4.0)],
        )],
        Vec::new(),
    )
}

fn horizontal_demo() -> Result<BarChart, ConfigError> {
    let config = BarChartConfig::new()
        .with_horizontal(true)
        .with_print_values(ValuePosition::Top)
        .with_print_labels(true);
    let labelled = colored(0, [Some(30.0), Some(-12.0), Some(21.0)])
        .with_meta(0, PointMeta::new().with_label("best").with_ci(26.0, 34.0))
        .with_meta(
            1,
            PointMeta::new()
                .with_label("worst")
                .with_link("https://example.com/worst"),
        );
    BarChart::new(
        config,
        vec![labelled, colored(1, [Some(10.0), Some(15.0), Some(5.0)])],
        Vec::new(),
    )
}

fn log_demo() -> Result<BarChart, ConfigError> {
    let config = BarChartConfig::new()
        .with_logarithmic(true)
        .with_print_values(ValuePosition::Bottom);
    BarChart::new(
        config,
        vec![colored(
            0,
            [Some(1.0), Some(10.0), Some(0.0), Some(1000.0), Some(-5.0), Some(42.0)],
        )],
        Vec::new(),
    )
}

fn secondary_demo() -> Result<BarChart, ConfigError> {
    let config = BarChartConfig::new().with_value_formatter(|v| format!("{v:.0}"));
    BarChart::new(
        config,
        vec![colored(0, [Some(1.0), Some(4.0), Some(2.0)])],
        vec![colored(1, [Some(250.0), Some(900.0), Some(400.0)])],
    )
}

fn shapes_demo() -> Result<BarChart, ConfigError> {
    let config = BarChartConfig::new().with_custom_shape(
        CustomShapeSpec::new(6)
            .with_tag(ShapeTag::Path)
            .with_attr("stroke", "#222"),
    );
    BarChart::new(
        config,
        vec![
            colored(0, [Some(5.0), Some(8.0), Some(3.0)]),
            colored(1, [Some(6.0), Some(2.0), Some(7.0)]),
        ],
        Vec::new(),
    )
}
