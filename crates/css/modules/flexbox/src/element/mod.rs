//! Host nodes viewed through the box model.
//!
//! An [`Element`] never caches geometry: every query measures the host, and every
//! assignment is written back as an inline style before re-measuring.

use crate::error::LayoutError;
use crate::host::{GeometryProvider, Host, NodeRef, font_context, resolved_property};
use css_box::{BoxKind, BoxSides, BoxSizes, Dimension, Side};
use css_values_units::{FontContext, resolve_length, resolve_length_or};
use log::{debug, trace};

/// Inline properties the engine owns and clears before each layout.
const OWNED_PROPERTIES: [&str; 17] = [
    "float",
    "clear",
    "width",
    "min-width",
    "max-width",
    "height",
    "min-height",
    "max-height",
    "margin",
    "margin-top",
    "margin-right",
    "margin-bottom",
    "margin-left",
    "top",
    "right",
    "bottom",
    "left",
];

/// Anything that can be measured along a dimension and asked to take a size.
pub trait Measurable {
    /// Every box of this member along `dimension`.
    fn measure<H: Host>(&self, host: &mut H, dimension: Dimension) -> BoxSizes;

    /// Size of box `kind` along `dimension`.
    #[inline]
    fn size<H: Host>(&self, host: &mut H, dimension: Dimension, kind: BoxKind) -> i32 {
        self.measure(host, dimension).size(kind)
    }

    /// Assign `size`, expressed in box `target`, along `dimension`.
    ///
    /// Returns the size of `target` measured after the write, which is smaller
    /// than requested when a host constraint such as `max-width` clamps it.
    fn set_size<H: Host>(
        &mut self,
        host: &mut H,
        size: i32,
        dimension: Dimension,
        target: BoxKind,
    ) -> i32;
}

/// A host node plus the float state the layout has committed for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    node: NodeRef,
    /// Measure while floated left so `auto` sizes shrink to their content.
    float_on_measure: bool,
    /// Inline `float` restored after every floated measurement.
    committed_float: String,
}

impl Element {
    /// Wrap `node`, checking that the host knows it.
    ///
    /// # Errors
    /// Returns `LayoutError::MissingNode` when the host has no computed style for `node`.
    pub fn new<H: GeometryProvider + ?Sized>(host: &H, node: NodeRef) -> Result<Self, LayoutError> {
        host.computed_style(node)
            .ok_or(LayoutError::MissingNode(node))?;
        Ok(Self {
            node,
            float_on_measure: false,
            committed_float: String::new(),
        })
    }

    /// Wrap `node` as a shrink-to-fit element, measured floated left.
    ///
    /// # Errors
    /// Returns `LayoutError::MissingNode` when the host has no computed style for `node`.
    pub fn floated<H: GeometryProvider + ?Sized>(
        host: &H,
        node: NodeRef,
    ) -> Result<Self, LayoutError> {
        let mut element = Self::new(host, node)?;
        element.float_on_measure = true;
        Ok(element)
    }

    #[inline]
    pub const fn node(&self) -> NodeRef {
        self.node
    }

    /// Float value currently committed for this element.
    #[inline]
    pub fn committed_float(&self) -> &str {
        &self.committed_float
    }

    #[inline]
    pub fn fonts<H: GeometryProvider + ?Sized>(&self, host: &H) -> FontContext {
        font_context(host, self.node)
    }

    /// Resolve a raw length against this element's fonts, `default` when unparseable.
    #[inline]
    pub fn resolve<H: GeometryProvider + ?Sized>(&self, host: &H, raw: &str, default: i32) -> i32 {
        resolve_length_or(raw, self.fonts(host), default)
    }

    /// A computed length property in whole pixels.
    #[inline]
    pub fn property_px<H: GeometryProvider + ?Sized>(&self, host: &H, property: &str) -> Option<i32> {
        resolved_property(host, self.node, property)
    }

    /// Margins, borders and padding from the computed style.
    pub fn sides<H: GeometryProvider + ?Sized>(&self, host: &H) -> BoxSides {
        let style = host.computed_style(self.node).unwrap_or_default();
        let fonts = self.fonts(host);
        BoxSides::from_resolver(|property| {
            style
                .get(property)
                .and_then(|raw| resolve_length(raw, fonts))
        })
    }

    /// Resolve `raw` and assign it like [`Measurable::set_size`]. Unparseable input assigns zero.
    pub fn set_length<H: Host>(
        &mut self,
        host: &mut H,
        raw: &str,
        dimension: Dimension,
        target: BoxKind,
    ) -> i32 {
        let size = self.resolve(host, raw, 0);
        self.set_size(host, size, dimension, target)
    }

    /// Grow the margin on `side` by `amount` pixels.
    pub fn add_margin<H: Host>(&self, host: &mut H, side: Side, amount: i32) {
        if amount == 0 {
            return;
        }
        let property = side.margin_property();
        let current = self.property_px(host, property).unwrap_or(0);
        trace!(target: "css::flexbox::element", "{} {property}: {current} + {amount}", self.node);
        host.set_style_property(self.node, property, &format!("{}px", current + amount));
    }

    /// Commit an inline `float`; measurements restore to this value.
    pub fn set_float<H: Host>(&mut self, host: &mut H, value: &str) {
        value.clone_into(&mut self.committed_float);
        host.set_style_property(self.node, "float", value);
    }

    pub fn set_clear<H: Host>(&self, host: &mut H, value: &str) {
        host.set_style_property(self.node, "clear", value);
    }

    /// Clear every inline property the layout writes. Idempotent.
    pub fn reset_style<H: Host>(&mut self, host: &mut H) {
        self.committed_float.clear();
        for property in OWNED_PROPERTIES {
            host.set_style_property(self.node, property, "");
        }
    }
}

impl Measurable for Element {
    fn measure<H: Host>(&self, host: &mut H, dimension: Dimension) -> BoxSizes {
        if self.float_on_measure {
            host.set_style_property(self.node, "float", "left");
        }
        let edges = self.sides(host).axis_edges(dimension);
        let client = host.client_size(self.node, dimension);
        let border_box = host.offset_size(self.node, dimension);
        if self.float_on_measure {
            host.set_style_property(self.node, "float", &self.committed_float);
        }
        let sizes = BoxSizes::from_border_box(border_box, edges, client);
        trace!(
            target: "css::flexbox::element",
            "{} {dimension}: margin box {} content box {} sizing {:?}",
            self.node,
            sizes.margin_box,
            sizes.content_box,
            sizes.sizing
        );
        sizes
    }

    fn set_size<H: Host>(
        &mut self,
        host: &mut H,
        size: i32,
        dimension: Dimension,
        target: BoxKind,
    ) -> i32 {
        let sizes = self.measure(host, dimension);
        let assigned = sizes.convert(size, target, sizes.sizing);
        debug!(
            target: "css::flexbox::element",
            "{} {dimension}: {size} ({target:?}) -> {assigned}px ({:?})",
            self.node,
            sizes.sizing
        );
        host.set_style_property(self.node, dimension.property(), &format!("{assigned}px"));
        self.size(host, dimension, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{GeometryMutator as _, StyleMap};
    use crate::host::memory::MemoryHost;
    use core::error::Error;

    fn host_with_child(declarations: &[(&str, &str)]) -> (MemoryHost, NodeRef) {
        let mut host = MemoryHost::new();
        let root = host.create_node(&[("width", "400px")]);
        let child = host.append_child(root, declarations);
        host.set_intrinsic_size(child, 30, 20);
        (host, child)
    }

    #[test]
    /// # Panics
    /// Panics if a margin-box assignment is not converted into the content-box property.
    fn set_size_converts_to_native_box() -> Result<(), Box<dyn Error>> {
        let (mut host, node) = host_with_child(&[
            ("margin-left", "5px"),
            ("margin-right", "5px"),
            ("padding-left", "4px"),
            ("border-right-width", "1px"),
        ]);
        let mut element = Element::floated(&host, node)?;
        let actual = element.set_size(&mut host, 100, Dimension::Width, BoxKind::Margin);
        assert_eq!(actual, 100);
        assert_eq!(host.inline_style(node, "width"), Some("85px"));
        assert_eq!(element.size(&mut host, Dimension::Width, BoxKind::Content), 85);
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if border-box elements are not assigned their border box.
    fn set_size_respects_border_box_sizing() -> Result<(), Box<dyn Error>> {
        let (mut host, node) = host_with_child(&[
            ("box-sizing", "border-box"),
            ("margin-top", "10px"),
            ("padding-top", "6px"),
        ]);
        let mut element = Element::new(&host, node)?;
        let actual = element.set_size(&mut host, 70, Dimension::Height, BoxKind::Margin);
        assert_eq!(actual, 70);
        assert_eq!(host.inline_style(node, "height"), Some("60px"));
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if a host clamp is not reflected in the returned size.
    fn set_size_reports_clamped_result() -> Result<(), Box<dyn Error>> {
        let (mut host, node) = host_with_child(&[("max-width", "40px")]);
        let mut element = Element::floated(&host, node)?;
        assert_eq!(element.set_size(&mut host, 90, Dimension::Width, BoxKind::Margin), 40);
        assert_eq!(element.set_length(&mut host, "2em", Dimension::Width, BoxKind::Margin), 32);
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if floated measurement leaks the temporary float or misses shrink-to-fit.
    fn floated_measurement_restores_committed_float() -> Result<(), Box<dyn Error>> {
        let (mut host, node) = host_with_child(&[]);
        let mut element = Element::floated(&host, node)?;
        assert_eq!(element.size(&mut host, Dimension::Width, BoxKind::Margin), 30);
        assert_eq!(host.inline_style(node, "float"), None);

        element.set_float(&mut host, "left");
        assert_eq!(element.size(&mut host, Dimension::Width, BoxKind::Margin), 30);
        assert_eq!(host.inline_style(node, "float"), Some("left"));
        assert_eq!(element.committed_float(), "left");

        let block = Element::new(&host, node)?;
        host.set_style_property(node, "float", "");
        assert_eq!(block.size(&mut host, Dimension::Width, BoxKind::Margin), 400);
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if margins do not accumulate or reset does not clear every owned property.
    fn margins_accumulate_and_reset_clears() -> Result<(), Box<dyn Error>> {
        let (mut host, node) = host_with_child(&[("margin-left", "3px")]);
        let mut element = Element::floated(&host, node)?;
        element.add_margin(&mut host, Side::Left, 7);
        element.add_margin(&mut host, Side::Left, 5);
        assert_eq!(host.inline_style(node, "margin-left"), Some("15px"));
        element.set_clear(&mut host, "left");
        element.set_float(&mut host, "left");
        element.set_size(&mut host, 50, Dimension::Width, BoxKind::Margin);

        element.reset_style(&mut host);
        assert!(host.inline_styles(node).is_some_and(StyleMap::is_empty));
        assert_eq!(element.committed_float(), "");
        assert_eq!(element.size(&mut host, Dimension::Width, BoxKind::Margin), 33);

        let writes = host.write_count();
        element.reset_style(&mut host);
        assert_eq!(host.write_count() - writes, OWNED_PROPERTIES.len());
        assert!(host.inline_styles(node).is_some_and(StyleMap::is_empty));
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if a node unknown to the host is accepted.
    fn missing_nodes_are_rejected() {
        let (host, _) = host_with_child(&[]);
        assert_eq!(
            Element::new(&host, NodeRef(42)),
            Err(LayoutError::MissingNode(NodeRef(42)))
        );
    }
}
