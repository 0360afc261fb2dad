//! Host seam: the read and write interfaces a flex layout pass drives.
//!
//! The engine never owns geometry. Every measurement is a query against a
//! [`GeometryProvider`] and every outcome is a style write through a
//! [`GeometryMutator`]; the host reflows between the two.

pub mod memory;

use core::fmt;
use css_box::Dimension;
use css_values_units::{
    DEFAULT_FONT_SIZE_PX, FontContext, compute_length_px, parse_length_str, resolve_length,
};
use std::collections::HashMap;

/// Opaque handle to a host node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeRef(pub u64);

impl fmt::Display for NodeRef {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "#{}", self.0)
    }
}

/// Computed style of a node, keyed by CSS property name.
pub type StyleMap = HashMap<String, String>;

/// Read-only view of the host's styles, geometry and tree.
pub trait GeometryProvider {
    /// Computed style of `node`, or `None` when the node does not exist.
    fn computed_style(&self, node: NodeRef) -> Option<StyleMap>;

    /// The host's native size of `node`: the box its `box-sizing` names.
    fn client_size(&self, node: NodeRef, dimension: Dimension) -> i32;

    /// Border-box size of `node`.
    fn offset_size(&self, node: NodeRef, dimension: Dimension) -> i32;

    fn attribute(&self, node: NodeRef, name: &str) -> Option<String>;

    fn parent(&self, node: NodeRef) -> Option<NodeRef>;

    /// Direct children of `node` in document order.
    fn children(&self, node: NodeRef) -> Vec<NodeRef>;

    /// The document root, when the host has one.
    fn root(&self) -> Option<NodeRef>;

    /// A single computed property. Hosts with cheap per-property lookup should override this.
    #[inline]
    fn style_property(&self, node: NodeRef, property: &str) -> Option<String> {
        self.computed_style(node)?.remove(property)
    }
}

/// Write side of the host: inline style assignments.
pub trait GeometryMutator {
    /// Set an inline style property. An empty `value` removes the override.
    fn set_style_property(&mut self, node: NodeRef, property: &str, value: &str);
}

/// A host that can be both measured and mutated.
pub trait Host: GeometryProvider + GeometryMutator {}

impl<T: GeometryProvider + GeometryMutator + ?Sized> Host for T {}

/// Computed `font-size` of `node` in pixels.
///
/// Walks from the root down so `em` font sizes compound through their ancestors.
pub fn font_size_px<H: GeometryProvider + ?Sized>(host: &H, node: NodeRef) -> f32 {
    let mut chain = vec![node];
    let mut cursor = host.parent(node);
    while let Some(ancestor) = cursor {
        chain.push(ancestor);
        cursor = host.parent(ancestor);
    }
    let mut size = DEFAULT_FONT_SIZE_PX;
    let mut root_size = None;
    for current in chain.into_iter().rev() {
        let fonts = FontContext {
            font_size_px: size,
            root_font_size_px: root_size.unwrap_or(DEFAULT_FONT_SIZE_PX),
        };
        let declared = host
            .style_property(current, "font-size")
            .and_then(|raw| parse_length_str(&raw).ok())
            .map(|length| compute_length_px(length, fonts));
        if let Some(pixels) = declared.filter(|pixels| pixels.is_finite() && *pixels > 0.0) {
            size = pixels;
        }
        root_size.get_or_insert(size);
    }
    size
}

/// Font metrics the lengths declared on `node` resolve against.
///
/// `em` uses the parent's computed font size. The root has no parent and falls
/// back to its own, which is also what `rem` uses.
pub fn font_context<H: GeometryProvider + ?Sized>(host: &H, node: NodeRef) -> FontContext {
    let root_font_size_px = host
        .root()
        .map_or(DEFAULT_FONT_SIZE_PX, |root| font_size_px(host, root));
    FontContext {
        font_size_px: host
            .parent(node)
            .map_or(root_font_size_px, |parent| font_size_px(host, parent)),
        root_font_size_px,
    }
}

/// Resolve a computed length property of `node` to whole pixels.
#[inline]
pub fn resolved_property<H: GeometryProvider + ?Sized>(
    host: &H,
    node: NodeRef,
    property: &str,
) -> Option<i32> {
    let raw = host.style_property(node, property)?;
    resolve_length(&raw, font_context(host, node))
}
