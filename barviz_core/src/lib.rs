// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal graphic node tree for barviz charts.
//!
//! Chart code builds a [`Scene`]: an append-only tree of [`Node`]s, each carrying one
//! [`Element`] (group, rect, image, polygon, path, text, ...), a class list and a few
//! pass-through attributes.
//!
//! The tree knows about chart orientation only in one place: [`Scene::transposable_node`]
//! swaps the coordinate roles of the element before inserting it, so layout code can work
//! in a single "vertical" frame and still produce horizontal charts.
//!
//! Serialization (SVG, HTML, raster) is out of scope; the tree is consumed by renderers.

#![no_std]

extern crate alloc;

mod element;
mod scene;

pub use element::{Element, TextAnchor};
pub use scene::{Decoration, Node, NodeId, Scene, SeriesNodes};
