// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The node tree and its builder helpers.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{BezPath, Point};
use peniko::Brush;
use smallvec::SmallVec;

use crate::element::{Element, TextAnchor};

/// Identity of a node inside a [`Scene`].
///
/// Ids are allocated in creation order, so sorting by id reproduces emission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// One node of the tree.
#[derive(Clone, Debug)]
pub struct Node {
    /// Parent node (`None` only for the root).
    pub parent: Option<NodeId>,
    /// Children in insertion order.
    pub children: Vec<NodeId>,
    /// Drawable payload.
    pub element: Element,
    /// Class list (rendered as a space-separated `class` attribute).
    pub classes: SmallVec<[String; 2]>,
    /// Extra pass-through attributes, in insertion order.
    pub attrs: Vec<(String, String)>,
    /// Fill override.
    pub fill: Option<Brush>,
}

impl Node {
    fn new(parent: Option<NodeId>, element: Element, classes: &[&str]) -> Self {
        Self {
            parent,
            children: Vec::new(),
            element,
            classes: classes.iter().map(|c| (*c).to_string()).collect(),
            attrs: Vec::new(),
            fill: None,
        }
    }

    /// Returns `true` if the node carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Returns the value of a pass-through attribute.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the text of a [`Element::Desc`] or [`Element::Text`] node.
    pub fn text(&self) -> Option<&str> {
        match &self.element {
            Element::Desc { text } | Element::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// The per-series containers returned by [`Scene::serie`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeriesNodes {
    /// Container for the series' main geometry (bars).
    pub plot: NodeId,
    /// Container drawn above every plot container (confidence intervals).
    pub overlay: NodeId,
    /// Container for printed values and labels, drawn last.
    pub text_overlay: NodeId,
}

/// Per-point decoration applied by [`Scene::decorate`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Decoration<'a> {
    /// Wraps the decorated node in a link.
    pub link: Option<&'a str>,
    /// Overrides the fill of the decorated node.
    pub fill: Option<&'a Brush>,
    /// Adds a `desc.label` child.
    pub label: Option<&'a str>,
}

/// An append-only graphic node tree.
///
/// The tree is created with three top-level containers (`plot`, `overlay`, `text_overlay`) so
/// that everything a series puts in an overlay paints above every series' plot geometry.
#[derive(Clone, Debug)]
pub struct Scene {
    nodes: Vec<Node>,
    horizontal: bool,
    plot: NodeId,
    overlay: NodeId,
    text_overlay: NodeId,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Creates an empty (vertical) scene.
    pub fn new() -> Self {
        let mut scene = Self {
            nodes: alloc::vec![Node::new(None, Element::Group, &["graph"])],
            horizontal: false,
            plot: NodeId(0),
            overlay: NodeId(0),
            text_overlay: NodeId(0),
        };
        let root = scene.root();
        scene.plot = scene.node(root, Element::Group, &["plot"]);
        scene.overlay = scene.node(root, Element::Group, &["plot", "overlay"]);
        scene.text_overlay = scene.node(root, Element::Group, &["plot", "text-overlay"]);
        scene
    }

    /// Sets whether [`Scene::transposable_node`] swaps coordinates.
    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    /// Returns `true` if this scene transposes geometry.
    pub fn is_horizontal(&self) -> bool {
        self.horizontal
    }

    /// Returns the root node id.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Returns the number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the scene only contains its fixed containers.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 4
    }

    /// Returns a node by id.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Returns a mutable node by id.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Returns the children of `id` (empty for unknown ids).
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Iterates over all nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Returns `id` and all of its descendants in depth-first pre-order.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = alloc::vec![id];
        while let Some(next) = stack.pop() {
            if self.get(next).is_none() {
                continue;
            }
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// Returns the ids of all nodes carrying `class`, in creation order.
    pub fn find_by_class(&self, class: &str) -> Vec<NodeId> {
        self.iter()
            .filter(|(_, n)| n.has_class(class))
            .map(|(id, _)| id)
            .collect()
    }

    /// Appends a node under `parent`.
    ///
    /// An unknown parent falls back to the root.
    pub fn node(&mut self, parent: NodeId, element: Element, classes: &[&str]) -> NodeId {
        let parent = if parent.0 < self.nodes.len() {
            parent
        } else {
            self.root()
        };
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(Some(parent), element, classes));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Appends a node whose geometry is swapped on horizontal scenes.
    pub fn transposable_node(
        &mut self,
        parent: NodeId,
        element: Element,
        classes: &[&str],
    ) -> NodeId {
        let element = if self.horizontal {
            element.transposed()
        } else {
            element
        };
        self.node(parent, element, classes)
    }

    /// Creates the containers for the series at `index`.
    pub fn serie(&mut self, index: usize) -> SeriesNodes {
        let serie = format!("serie-{index}");
        let color = format!("color-{index}");
        let classes = ["series", serie.as_str(), color.as_str()];
        SeriesNodes {
            plot: self.node(self.plot, Element::Group, &classes),
            overlay: self.node(self.overlay, Element::Group, &classes),
            text_overlay: self.node(self.text_overlay, Element::Group, &classes),
        }
    }

    /// Applies per-point decoration to `node` and returns the node further content goes into.
    ///
    /// A link wraps a new child group; fill and label apply to the returned node.
    pub fn decorate(&mut self, node: NodeId, decoration: &Decoration<'_>) -> NodeId {
        let mut target = node;
        if let Some(href) = decoration.link {
            let link = self.node(
                node,
                Element::Link {
                    href: href.to_string(),
                },
                &[],
            );
            self.set_attr(link, "target", "_blank");
            target = link;
        }
        if let Some(fill) = decoration.fill
            && let Some(n) = self.get_mut(target)
        {
            n.fill = Some(fill.clone());
        }
        if let Some(label) = decoration.label
            && !label.is_empty()
        {
            self.node(target, Element::desc(label), &["label"]);
        }
        target
    }

    /// Merges pass-through attributes into `node`, replacing existing keys.
    pub fn alter(&mut self, node: NodeId, attrs: &[(String, String)]) {
        for (k, v) in attrs {
            self.set_attr(node, k, v);
        }
    }

    /// Sets a pass-through attribute.
    pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        let Some(n) = self.get_mut(node) else {
            return;
        };
        if let Some(slot) = n.attrs.iter_mut().find(|(k, _)| k == name) {
            slot.1 = value.to_string();
        } else {
            n.attrs.push((name.to_string(), value.to_string()));
        }
    }

    /// Sets the fill override of a node.
    pub fn set_fill(&mut self, node: NodeId, fill: Brush) {
        if let Some(n) = self.get_mut(node) {
            n.fill = Some(fill);
        }
    }

    /// Emits tooltip payload nodes under `parent`.
    ///
    /// `anchor` is the tooltip position in scene coordinates (already transposed).
    pub fn tooltip_data(
        &mut self,
        parent: NodeId,
        value: &str,
        anchor: Point,
        classes: &str,
        x_label: Option<&str>,
    ) {
        self.node(parent, Element::desc(value), &["value"]);
        self.node(parent, Element::desc(format_coord(anchor.x)), &["x", classes]);
        self.node(parent, Element::desc(format_coord(anchor.y)), &["y", classes]);
        if let Some(label) = x_label {
            self.node(parent, Element::desc(label), &["x_label"]);
        }
    }

    /// Emits a printed value or label.
    pub fn static_value(
        &mut self,
        parent: NodeId,
        text: &str,
        pos: Point,
        font_size: f64,
        classes: &[&str],
    ) -> NodeId {
        self.node(
            parent,
            Element::Text {
                text: text.to_string(),
                pos,
                anchor: TextAnchor::Middle,
                font_size,
            },
            classes,
        )
    }

    /// Emits an error bar from `y_start` to `y_end` at `x`, with caps `cap_width` wide.
    ///
    /// Coordinates are in the vertical frame; the path is transposed on horizontal scenes.
    pub fn confidence_interval(
        &mut self,
        parent: NodeId,
        x: f64,
        y_start: f64,
        y_end: f64,
        cap_width: f64,
    ) -> NodeId {
        let half = cap_width / 2.0;
        let mut path = BezPath::new();
        path.move_to((x, y_start));
        path.line_to((x, y_end));
        path.move_to((x - half, y_start));
        path.line_to((x + half, y_start));
        path.move_to((x - half, y_end));
        path.line_to((x + half, y_end));
        self.transposable_node(parent, Element::Path { path }, &["nofill", "ci"])
    }
}

fn format_coord(v: f64) -> String {
    format!("{v}")
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Rect;

    use super::*;

    #[test]
    fn serie_containers_live_under_fixed_layers() {
        let mut scene = Scene::new();
        let s = scene.serie(3);
        let plot = scene.get(s.plot).unwrap();
        assert!(plot.has_class("serie-3"));
        assert!(plot.has_class("color-3"));
        let parent = scene.get(plot.parent.unwrap()).unwrap();
        assert!(parent.has_class("plot"));
        assert!(!parent.has_class("overlay"));
        let overlay_parent = scene.get(s.overlay).unwrap().parent.unwrap();
        assert!(scene.get(overlay_parent).unwrap().has_class("overlay"));
    }

    #[test]
    fn transposable_node_only_swaps_on_horizontal_scenes() {
        let mut v = Scene::new();
        let id = v.transposable_node(v.root(), Element::rect(1.0, 2.0, 3.0, 4.0, 0.0), &[]);
        assert_eq!(v.get(id).unwrap().element.bounds(), Some(Rect::new(1.0, 2.0, 4.0, 6.0)));

        let mut h = Scene::new().with_horizontal(true);
        let id = h.transposable_node(h.root(), Element::rect(1.0, 2.0, 3.0, 4.0, 0.0), &[]);
        assert_eq!(h.get(id).unwrap().element.bounds(), Some(Rect::new(2.0, 1.0, 6.0, 4.0)));
    }

    #[test]
    fn decorate_wraps_in_link_and_adds_label() {
        let mut scene = Scene::new();
        let bar = scene.node(scene.root(), Element::Group, &["bar"]);
        let fill = Brush::default();
        let target = scene.decorate(
            bar,
            &Decoration {
                link: Some("https://example.org/a"),
                fill: Some(&fill),
                label: Some("first"),
            },
        );
        assert_ne!(target, bar);
        let link = scene.get(target).unwrap();
        assert_eq!(link.element.tag(), "a");
        assert_eq!(link.attr("target"), Some("_blank"));
        assert!(link.fill.is_some());
        let label = scene.children(target)[0];
        assert_eq!(scene.get(label).unwrap().text(), Some("first"));
    }

    #[test]
    fn alter_replaces_existing_attributes() {
        let mut scene = Scene::new();
        let id = scene.node(scene.root(), Element::Group, &[]);
        scene.set_attr(id, "data-k", "1");
        scene.alter(
            id,
            &[
                ("data-k".to_string(), "2".to_string()),
                ("data-j".to_string(), "3".to_string()),
            ],
        );
        let n = scene.get(id).unwrap();
        assert_eq!(n.attr("data-k"), Some("2"));
        assert_eq!(n.attr("data-j"), Some("3"));
        assert_eq!(n.attrs.len(), 2);
    }

    #[test]
    fn tooltip_data_emits_descs_in_order() {
        let mut scene = Scene::new();
        let parent = scene.node(scene.root(), Element::Group, &[]);
        scene.tooltip_data(parent, "42", Point::new(1.5, 2.0), "centered", Some("Jan"));
        let texts: Vec<_> = scene
            .children(parent)
            .iter()
            .map(|id| scene.get(*id).unwrap().text().unwrap())
            .collect();
        assert_eq!(texts, ["42", "1.5", "2", "Jan"]);
        let x = scene.get(scene.children(parent)[1]).unwrap();
        assert!(x.has_class("x") && x.has_class("centered"));
    }

    #[test]
    fn descendants_are_pre_order() {
        let mut scene = Scene::new();
        let a = scene.node(scene.root(), Element::Group, &[]);
        let b = scene.node(a, Element::Group, &[]);
        let c = scene.node(a, Element::Group, &[]);
        let d = scene.node(b, Element::Group, &[]);
        assert_eq!(scene.descendants(a), [a, b, d, c]);
    }

    #[test]
    fn confidence_interval_is_transposed_on_horizontal_scenes() {
        let mut scene = Scene::new().with_horizontal(true);
        let id = scene.confidence_interval(scene.root(), 10.0, 20.0, 40.0, 8.0);
        let b = scene.get(id).unwrap().element.bounds().unwrap();
        assert_eq!(b, Rect::new(20.0, 6.0, 40.0, 14.0));
    }
}
