//! In-memory host: a small style tree with a deliberately simple reflow model.
//!
//! Each node carries declared styles, inline overrides written by the engine, and
//! an intrinsic content size. Sizes follow a handful of block-layout rules:
//!
//! - an explicit `width`/`height` is read in the box named by `box-sizing`;
//! - an `auto` width fills the parent's content box, except for floated nodes and
//!   the root, which shrink to their intrinsic width;
//! - an `auto` height is the intrinsic height;
//! - `max-*` caps the size, then `min-*` raises it, then it is floored at zero.

use super::{GeometryMutator, GeometryProvider, NodeRef, StyleMap, font_context};
use css_box::{AxisEdges, BoxKind, BoxSides, Dimension};
use css_values_units::resolve_length;
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
struct MemoryNode {
    parent: Option<NodeRef>,
    children: Vec<NodeRef>,
    attributes: HashMap<String, String>,
    declared: StyleMap,
    inline: StyleMap,
    intrinsic_width: i32,
    intrinsic_height: i32,
}

/// A host whose whole document lives in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryHost {
    nodes: Vec<MemoryNode>,
    writes: usize,
}

impl MemoryHost {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached node. The first node created becomes the document root.
    pub fn create_node(&mut self, declarations: &[(&str, &str)]) -> NodeRef {
        let handle = NodeRef(self.nodes.len() as u64);
        let declared = declarations
            .iter()
            .map(|(property, value)| ((*property).to_owned(), (*value).to_owned()))
            .collect();
        self.nodes.push(MemoryNode {
            declared,
            ..MemoryNode::default()
        });
        handle
    }

    /// Create a node and append it to `parent`'s children.
    pub fn append_child(&mut self, parent: NodeRef, declarations: &[(&str, &str)]) -> NodeRef {
        let child = self.create_node(declarations);
        if let Some(parent_node) = self.node_mut(parent) {
            parent_node.children.push(child);
            if let Some(child_node) = self.node_mut(child) {
                child_node.parent = Some(parent);
            }
        }
        child
    }

    /// Add or replace a declared (stylesheet) property.
    pub fn declare(&mut self, node: NodeRef, property: &str, value: &str) {
        if let Some(entry) = self.node_mut(node) {
            entry.declared.insert(property.to_owned(), value.to_owned());
        }
    }

    pub fn set_attribute(&mut self, node: NodeRef, name: &str, value: &str) {
        if let Some(entry) = self.node_mut(node) {
            entry.attributes.insert(name.to_owned(), value.to_owned());
        }
    }

    /// Content size the node has when nothing constrains it.
    pub fn set_intrinsic_size(&mut self, node: NodeRef, width: i32, height: i32) {
        if let Some(entry) = self.node_mut(node) {
            entry.intrinsic_width = width;
            entry.intrinsic_height = height;
        }
    }

    /// Inline override the engine wrote for `property`, if any.
    pub fn inline_style(&self, node: NodeRef, property: &str) -> Option<&str> {
        self.node(node)?.inline.get(property).map(String::as_str)
    }

    /// Every inline override on `node`.
    pub fn inline_styles(&self, node: NodeRef) -> Option<&StyleMap> {
        self.node(node).map(|entry| &entry.inline)
    }

    /// All nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeRef> + '_ {
        (0..self.nodes.len()).map(|index| NodeRef(index as u64))
    }

    /// Number of style writes received so far.
    #[inline]
    pub const fn write_count(&self) -> usize {
        self.writes
    }

    /// Margin-box size of `node` along `dimension`.
    pub fn margin_box(&self, node: NodeRef, dimension: Dimension) -> i32 {
        self.offset_size(node, dimension) + self.edges(node, dimension).margin
    }

    fn node(&self, node: NodeRef) -> Option<&MemoryNode> {
        usize::try_from(node.0)
            .ok()
            .and_then(|index| self.nodes.get(index))
    }

    fn node_mut(&mut self, node: NodeRef) -> Option<&mut MemoryNode> {
        usize::try_from(node.0)
            .ok()
            .and_then(|index| self.nodes.get_mut(index))
    }

    /// Inline override when present, declared value otherwise.
    fn lookup(&self, node: NodeRef, property: &str) -> Option<&str> {
        let entry = self.node(node)?;
        entry
            .inline
            .get(property)
            .or_else(|| entry.declared.get(property))
            .map(String::as_str)
    }

    fn resolve(&self, node: NodeRef, property: &str) -> Option<i32> {
        let raw = self.lookup(node, property)?;
        resolve_length(raw, font_context(self, node))
    }

    fn edges(&self, node: NodeRef, dimension: Dimension) -> AxisEdges {
        BoxSides::from_resolver(|property| self.resolve(node, property)).axis_edges(dimension)
    }

    fn box_sizing(&self, node: NodeRef) -> BoxKind {
        self.lookup(node, "box-sizing")
            .and_then(BoxKind::from_keyword)
            .unwrap_or(BoxKind::Content)
    }

    fn is_floated(&self, node: NodeRef) -> bool {
        self.lookup(node, "float")
            .is_some_and(|value| matches!(value.trim(), "left" | "right"))
    }

    fn content_size(&self, node: NodeRef, dimension: Dimension) -> i32 {
        let edges = self.edges(node, dimension);
        let sizing = self.box_sizing(node);
        let to_content = |size: i32| match sizing {
            BoxKind::Content => size,
            BoxKind::Padding => size - edges.padding,
            BoxKind::Border => size - edges.padding - edges.border,
            BoxKind::Margin => size - edges.padding - edges.border - edges.margin,
        };
        let content = self
            .resolve(node, dimension.property())
            .map_or_else(|| self.auto_content_size(node, dimension, edges), to_content);
        let capped = self
            .resolve(node, dimension.max_property())
            .map_or(content, |max| content.min(to_content(max)));
        let floored = self
            .resolve(node, dimension.min_property())
            .map_or(capped, |min| capped.max(to_content(min)));
        floored.max(0)
    }

    fn auto_content_size(&self, node: NodeRef, dimension: Dimension, edges: AxisEdges) -> i32 {
        let Some(entry) = self.node(node) else {
            return 0;
        };
        match (dimension, entry.parent) {
            (Dimension::Height, _) => entry.intrinsic_height,
            (Dimension::Width, None) => entry.intrinsic_width,
            (Dimension::Width, Some(_)) if self.is_floated(node) => entry.intrinsic_width,
            (Dimension::Width, Some(parent)) => {
                let available = self.content_size(parent, Dimension::Width);
                (available - edges.margin - edges.border - edges.padding).max(0)
            }
        }
    }
}

impl GeometryProvider for MemoryHost {
    fn computed_style(&self, node: NodeRef) -> Option<StyleMap> {
        let entry = self.node(node)?;
        let mut style = entry.declared.clone();
        style.extend(
            entry
                .inline
                .iter()
                .map(|(property, value)| (property.clone(), value.clone())),
        );
        Some(style)
    }

    fn client_size(&self, node: NodeRef, dimension: Dimension) -> i32 {
        let content = self.content_size(node, dimension);
        let edges = self.edges(node, dimension);
        match self.box_sizing(node) {
            BoxKind::Content => content,
            BoxKind::Padding => content + edges.padding,
            BoxKind::Border => content + edges.padding + edges.border,
            BoxKind::Margin => content + edges.padding + edges.border + edges.margin,
        }
    }

    fn offset_size(&self, node: NodeRef, dimension: Dimension) -> i32 {
        let edges = self.edges(node, dimension);
        self.content_size(node, dimension) + edges.padding + edges.border
    }

    fn attribute(&self, node: NodeRef, name: &str) -> Option<String> {
        self.node(node)?.attributes.get(name).cloned()
    }

    fn parent(&self, node: NodeRef) -> Option<NodeRef> {
        self.node(node)?.parent
    }

    fn children(&self, node: NodeRef) -> Vec<NodeRef> {
        self.node(node)
            .map(|entry| entry.children.clone())
            .unwrap_or_default()
    }

    fn root(&self) -> Option<NodeRef> {
        (!self.nodes.is_empty()).then_some(NodeRef(0))
    }

    fn style_property(&self, node: NodeRef, property: &str) -> Option<String> {
        self.lookup(node, property).map(str::to_owned)
    }
}

impl GeometryMutator for MemoryHost {
    fn set_style_property(&mut self, node: NodeRef, property: &str, value: &str) {
        let Some(entry) = self.node_mut(node) else {
            return;
        };
        if value.is_empty() {
            entry.inline.remove(property);
        } else {
            entry.inline.insert(property.to_owned(), value.to_owned());
        }
        self.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if auto widths do not fill the parent or shrink when floated.
    fn auto_width_fills_parent_unless_floated() {
        let mut host = MemoryHost::new();
        let root = host.create_node(&[("width", "200px"), ("padding-left", "10px")]);
        let child = host.append_child(root, &[("margin-right", "15px"), ("border-left-width", "5px")]);
        host.set_intrinsic_size(child, 40, 12);

        assert_eq!(host.client_size(child, Dimension::Width), 180);
        assert_eq!(host.offset_size(child, Dimension::Width), 185);
        assert_eq!(host.margin_box(child, Dimension::Width), 200);

        host.set_style_property(child, "float", "left");
        assert_eq!(host.client_size(child, Dimension::Width), 40);
        assert_eq!(host.client_size(child, Dimension::Height), 12);

        host.set_style_property(child, "float", "");
        assert_eq!(host.inline_style(child, "float"), None);
        assert_eq!(host.write_count(), 2);
    }

    #[test]
    /// # Panics
    /// Panics if `box-sizing` does not pick the box reported as the client size.
    fn client_size_follows_box_sizing() {
        let mut host = MemoryHost::new();
        let root = host.create_node(&[("width", "300px")]);
        let node = host.append_child(
            root,
            &[
                ("box-sizing", "border-box"),
                ("width", "100px"),
                ("padding-left", "10px"),
                ("border-right-width", "2px"),
            ],
        );
        assert_eq!(host.client_size(node, Dimension::Width), 100);
        assert_eq!(host.offset_size(node, Dimension::Width), 100);
        assert_eq!(host.content_size(node, Dimension::Width), 88);
    }

    #[test]
    /// # Panics
    /// Panics if max and min constraints are not applied in that order.
    fn constraints_clamp_max_then_min() {
        let mut host = MemoryHost::new();
        let root = host.create_node(&[("width", "300px")]);
        let node = host.append_child(root, &[("max-width", "50px"), ("min-width", "80px")]);
        assert_eq!(host.client_size(node, Dimension::Width), 80);

        host.set_style_property(node, "min-width", "0px");
        assert_eq!(host.client_size(node, Dimension::Width), 50);
    }

    #[test]
    /// # Panics
    /// Panics if inline overrides do not shadow declared values in the computed style.
    fn inline_overrides_shadow_declarations() {
        let mut host = MemoryHost::new();
        let root = host.create_node(&[("height", "10px"), ("font-size", "20px")]);
        host.set_style_property(root, "height", "2em");
        assert_eq!(host.client_size(root, Dimension::Height), 40);
        let style = host.computed_style(root).unwrap_or_default();
        assert_eq!(style.get("height").map(String::as_str), Some("2em"));
        assert!(host.computed_style(NodeRef(9)).is_none());
    }
}
