//! Flex Items: identification, configuration and base sizes
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-items>

use crate::chapter5::{AlignItems, keyword};
use crate::chapter9::{FlexMember, Placement};
use crate::element::{Element, Measurable};
use crate::error::LayoutError;
use crate::host::{GeometryProvider, Host, NodeRef};
use css_box::{BoxKind, BoxSizes, Dimension, Side};
use css_values_units::{FontContext, parse_integer_str, resolve_length};
use log::trace;

/// Value of the `flex` shorthand when none is given, and what `none` expands to.
pub const DEFAULT_FLEX: &str = "0 1 auto";

/// Minimal style subset needed for flex item collection.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ItemStyle {
    /// `display: none`; the child generates no box and is skipped.
    pub is_none: bool,
    /// Absolutely positioned children do not participate in flex layout.
    pub out_of_flow: bool,
}

impl ItemStyle {
    pub fn read<H: GeometryProvider + ?Sized>(host: &H, node: NodeRef) -> Self {
        let display = host.style_property(node, "display").and_then(|raw| keyword(&raw));
        let position = host.style_property(node, "position").and_then(|raw| keyword(&raw));
        Self {
            is_none: display.as_deref() == Some("none"),
            out_of_flow: matches!(position.as_deref(), Some("absolute" | "fixed")),
        }
    }
}

/// Returns true when the child qualifies as an in-flow flex item.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-items>
#[inline]
pub const fn is_flex_item(style: ItemStyle) -> bool {
    !style.is_none && !style.out_of_flow
}

/// In-flow children of `container`, in document order.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-items>
pub fn collect_flex_items<H: GeometryProvider + ?Sized>(host: &H, container: NodeRef) -> Vec<NodeRef> {
    host.children(container)
        .into_iter()
        .filter(|child| is_flex_item(ItemStyle::read(host, *child)))
        .collect()
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-basis-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum FlexBasis {
    /// Use the item's current size.
    #[default]
    Auto,
    /// Content-box length in pixels. Zero is explicit.
    Length(i32),
}

impl FlexBasis {
    /// Anything that is not a resolvable length (`auto`, `content`, percentages) is `Auto`.
    pub fn parse(raw: &str, fonts: FontContext) -> Self {
        resolve_length(raw, fonts).map_or(Self::Auto, Self::Length)
    }
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#align-self-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum AlignSelf {
    /// Defer to the container's `align-items`.
    #[default]
    Auto,
    Stretch,
    FlexStart,
    FlexEnd,
    Center,
}

impl AlignSelf {
    pub fn from_keyword(raw: &str) -> Option<Self> {
        if keyword(raw).as_deref() == Some("auto") {
            return Some(Self::Auto);
        }
        Some(match AlignItems::from_keyword(raw)? {
            AlignItems::Stretch => Self::Stretch,
            AlignItems::FlexStart => Self::FlexStart,
            AlignItems::FlexEnd => Self::FlexEnd,
            AlignItems::Center => Self::Center,
        })
    }

    /// Effective alignment given the container's `align-items`.
    #[inline]
    pub const fn resolve(self, container: AlignItems) -> AlignItems {
        match self {
            Self::Auto => container,
            Self::Stretch => AlignItems::Stretch,
            Self::FlexStart => AlignItems::FlexStart,
            Self::FlexEnd => AlignItems::FlexEnd,
            Self::Center => AlignItems::Center,
        }
    }
}

/// The `[grow, shrink, basis]` parts of a `flex` shorthand, still unresolved.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FlexShorthand {
    pub grow: i32,
    pub shrink: i32,
    pub basis: String,
}

impl Default for FlexShorthand {
    fn default() -> Self {
        Self {
            grow: 0,
            shrink: 1,
            basis: "auto".to_owned(),
        }
    }
}

impl FlexShorthand {
    /// Split on whitespace into `[grow, shrink, basis]`; missing or unparseable parts
    /// keep their defaults and `none` is the default.
    pub fn parse(raw: &str) -> Self {
        let mut shorthand = Self::default();
        if keyword(raw).as_deref() == Some("none") {
            return shorthand;
        }
        let mut parts = raw.split_whitespace();
        if let Some(grow) = parts.next().and_then(|part| parse_integer_str(part).ok()) {
            shorthand.grow = grow.max(0);
        }
        if let Some(shrink) = parts.next().and_then(|part| parse_integer_str(part).ok()) {
            shorthand.shrink = shrink.max(0);
        }
        if let Some(basis) = parts.next() {
            basis.clone_into(&mut shorthand.basis);
        }
        shorthand
    }
}

/// Item configuration, read once when the item is constructed.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ItemConfig {
    /// Parsed but not used for placement; document order wins.
    pub order: i32,
    pub grow: i32,
    pub shrink: i32,
    pub basis: FlexBasis,
    pub align_self: AlignSelf,
    pub min_width: Option<i32>,
    pub max_width: Option<i32>,
    pub min_height: Option<i32>,
    pub max_height: Option<i32>,
}

impl ItemConfig {
    /// Read the `data-flex-*` attributes and min/max constraints of `element`.
    ///
    /// Discrete `grow`/`shrink`/`basis` attributes win over the `flex` shorthand.
    pub fn read<H: GeometryProvider + ?Sized>(host: &H, element: &Element) -> Self {
        let node = element.node();
        let attribute = |name: &str| host.attribute(node, name);
        let integer = |name: &str| attribute(name).and_then(|raw| parse_integer_str(&raw).ok());
        let shorthand = attribute("data-flex-flex")
            .map(|raw| FlexShorthand::parse(&raw))
            .unwrap_or_default();
        let basis_raw = attribute("data-flex-basis").unwrap_or(shorthand.basis);
        Self {
            order: integer("data-flex-order").unwrap_or(0),
            grow: integer("data-flex-grow").unwrap_or(shorthand.grow).max(0),
            shrink: integer("data-flex-shrink").unwrap_or(shorthand.shrink).max(0),
            basis: FlexBasis::parse(&basis_raw, element.fonts(host)),
            align_self: attribute("data-flex-align-self")
                .and_then(|raw| AlignSelf::from_keyword(&raw))
                .unwrap_or_default(),
            min_width: element.property_px(host, Dimension::Width.min_property()),
            max_width: element.property_px(host, Dimension::Width.max_property()),
            min_height: element.property_px(host, Dimension::Height.min_property()),
            max_height: element.property_px(host, Dimension::Height.max_property()),
        }
    }

    #[inline]
    pub const fn min(&self, dimension: Dimension) -> Option<i32> {
        match dimension {
            Dimension::Width => self.min_width,
            Dimension::Height => self.min_height,
        }
    }

    #[inline]
    pub const fn max(&self, dimension: Dimension) -> Option<i32> {
        match dimension {
            Dimension::Width => self.max_width,
            Dimension::Height => self.max_height,
        }
    }
}

/// A direct child of a flex container, measured shrink-to-fit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlexItem {
    element: Element,
    config: ItemConfig,
    /// Position among the container's items.
    index: usize,
    placement: Placement,
}

impl FlexItem {
    /// Wrap `node`, clear any previous layout output and read its configuration.
    ///
    /// # Errors
    /// Returns `LayoutError::MissingNode` when the host has no computed style for `node`.
    pub fn new<H: Host>(host: &mut H, node: NodeRef, index: usize) -> Result<Self, LayoutError> {
        let mut element = Element::floated(host, node)?;
        element.reset_style(host);
        let config = ItemConfig::read(host, &element);
        trace!(target: "css::flexbox::items", "{node} #{index}: {config:?}");
        Ok(Self {
            element,
            config,
            index,
            placement: Placement::default(),
        })
    }

    #[inline]
    pub const fn node(&self) -> NodeRef {
        self.element.node()
    }

    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub const fn config(&self) -> &ItemConfig {
        &self.config
    }

    #[inline]
    pub const fn element(&self) -> &Element {
        &self.element
    }

    #[inline]
    pub fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    /// Clear layout output on the host and forget the previous run's placement.
    pub fn reset_style<H: Host>(&mut self, host: &mut H) {
        self.element.reset_style(host);
        self.placement = Placement::default();
    }
}

impl Measurable for FlexItem {
    #[inline]
    fn measure<H: Host>(&self, host: &mut H, dimension: Dimension) -> BoxSizes {
        self.element.measure(host, dimension)
    }

    #[inline]
    fn set_size<H: Host>(
        &mut self,
        host: &mut H,
        size: i32,
        dimension: Dimension,
        target: BoxKind,
    ) -> i32 {
        self.element.set_size(host, size, dimension, target)
    }
}

impl FlexMember for FlexItem {
    /// Margin-box size before distribution.
    ///
    /// An explicit basis is a content size; `min-*` raises the result; without a
    /// basis the current measured size is the floor.
    fn base_size<H: Host>(&self, host: &mut H, dimension: Dimension) -> i32 {
        let sizes = self.element.measure(host, dimension);
        let mut base = 0;
        if let FlexBasis::Length(length) = self.config.basis {
            base = sizes.convert(length, BoxKind::Content, BoxKind::Margin);
        }
        if let Some(min) = self.config.min(dimension) {
            base = base.max(sizes.convert(min, sizes.sizing, BoxKind::Margin));
        }
        if self.config.basis == FlexBasis::Auto {
            base = base.max(sizes.margin_box);
        }
        trace!(target: "css::flexbox::items", "{} base {dimension}: {base}", self.node());
        base
    }

    #[inline]
    fn grow(&self) -> i32 {
        self.config.grow
    }

    #[inline]
    fn shrink(&self) -> i32 {
        self.config.shrink
    }

    #[inline]
    fn add_margin<H: Host>(&mut self, host: &mut H, side: Side, amount: i32) {
        self.element.add_margin(host, side, amount);
    }

    #[inline]
    fn alignment(&self, container: AlignItems) -> AlignItems {
        self.config.align_self.resolve(container)
    }

    #[inline]
    fn placement(&self) -> &Placement {
        &self.placement
    }

    #[inline]
    fn placement_mut(&mut self) -> &mut Placement {
        &mut self.placement
    }
}
