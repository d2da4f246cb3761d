// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `barviz_charts_demo`.

use std::fmt::Write as _;

use barviz_core::{Element, Node, NodeId, Scene};
use kurbo::Rect;
use peniko::Brush;

/// Serializes a scene into a standalone SVG document covering `view_box`.
pub(crate) fn to_svg_string(scene: &Scene, view_box: Rect) -> String {
    let mut out = String::new();
    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(r#"xmlns:xlink="http://www.w3.org/1999/xlink" "#);
    let _ = write!(
        out,
        r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
        view_box.x0,
        view_box.y0,
        view_box.width(),
        view_box.height(),
        view_box.width(),
        view_box.height()
    );
    out.push('\n');
    out.push_str(
        "<style>.nofill{fill:none;stroke:#333;stroke-width:1}text{font-family:sans-serif}</style>\n",
    );
    write_node(&mut out, scene, scene.root(), 0);
    out.push_str("</svg>\n");
    out
}

fn write_node(out: &mut String, scene: &Scene, id: NodeId, depth: usize) {
    let Some(node) = scene.get(id) else {
        return;
    };
    for _ in 0..depth {
        out.push_str("  ");
    }

    let tag = node.element.tag();
    let _ = write!(out, "<{tag}");
    if !node.classes.is_empty() {
        let _ = write!(out, r#" class="{}""#, node.classes.join(" "));
    }
    write_geometry(out, &node.element);
    if let Some(fill) = &node.fill {
        write_paint_attr(out, "fill", fill);
    }
    for (k, v) in &node.attrs {
        let _ = write!(out, r#" {k}="{}""#, escape_xml(v));
    }

    match &node.element {
        Element::Text { text, .. } | Element::Desc { text } => {
            let _ = writeln!(out, ">{}</{tag}>", escape_xml(text));
        }
        _ if node.children.is_empty() => out.push_str("/>\n"),
        _ => {
            out.push_str(">\n");
            write_children(out, scene, node, depth + 1);
            for _ in 0..depth {
                out.push_str("  ");
            }
            let _ = writeln!(out, "</{tag}>");
        }
    }
}

fn write_children(out: &mut String, scene: &Scene, node: &Node, depth: usize) {
    for child in &node.children {
        write_node(out, scene, *child, depth);
    }
}

fn write_geometry(out: &mut String, element: &Element) {
    match element {
        Element::Group | Element::Desc { .. } => {}
        Element::Link { href } => {
            let _ = write!(out, r#" xlink:href="{}""#, escape_xml(href));
        }
        Element::Rect { rect, radius } => {
            let _ = write!(
                out,
                r#" x="{}" y="{}" width="{}" height="{}""#,
                rect.x0,
                rect.y0,
                rect.width(),
                rect.height()
            );
            if *radius > 0.0 {
                let _ = write!(out, r#" rx="{radius}" ry="{radius}""#);
            }
        }
        Element::Image { href, rect } => {
            let _ = write!(
                out,
                r#" x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="none" xlink:href="{}""#,
                rect.x0,
                rect.y0,
                rect.width(),
                rect.height(),
                escape_xml(href)
            );
        }
        Element::Polygon { points } => {
            let coords: Vec<String> = points.iter().map(|p| format!("{},{}", p.x, p.y)).collect();
            let _ = write!(out, r#" points="{}""#, coords.join(" "));
        }
        Element::Path { path } => {
            let _ = write!(out, r#" d="{}""#, path.to_svg());
        }
        Element::Text {
            pos,
            anchor,
            font_size,
            ..
        } => {
            let _ = write!(
                out,
                r#" x="{}" y="{}" font-size="{}" text-anchor="{}""#,
                pos.x,
                pos.y,
                font_size,
                anchor.as_str()
            );
        }
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let fill_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, fill_opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
