//! Flex Containers: container properties and enums
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-containers>
//!
//! Configuration arrives as `data-flex-*` attributes on the container node. Every
//! parser here is total: unknown keywords fall back to the property's initial value.

use crate::host::{GeometryProvider, NodeRef};
use css_box::Dimension;
use css_values_units::parse_ident_str;
use log::debug;

/// Canonical lowercase keyword, or `None` for anything that is not a single identifier.
pub fn keyword(raw: &str) -> Option<String> {
    parse_ident_str(raw).ok().map(|ident| ident.0)
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
///
/// The reverse keywords map onto their base axis; reversed placement is not modelled.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum FlexDirection {
    #[default]
    Row,
    Column,
}

impl FlexDirection {
    pub fn from_keyword(raw: &str) -> Option<Self> {
        match keyword(raw)?.as_str() {
            "row" | "row-reverse" => Some(Self::Row),
            "column" | "column-reverse" => Some(Self::Column),
            _ => None,
        }
    }

    /// Physical dimension the main axis runs along.
    #[inline]
    pub const fn main_dimension(self) -> Dimension {
        match self {
            Self::Row => Dimension::Width,
            Self::Column => Dimension::Height,
        }
    }

    #[inline]
    #[must_use]
    pub const fn orthogonal(self) -> Self {
        match self {
            Self::Row => Self::Column,
            Self::Column => Self::Row,
        }
    }
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-wrap-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum FlexWrap {
    #[default]
    Nowrap,
    Wrap,
}

impl FlexWrap {
    pub fn from_keyword(raw: &str) -> Option<Self> {
        match keyword(raw)?.as_str() {
            "nowrap" => Some(Self::Nowrap),
            "wrap" | "wrap-reverse" => Some(Self::Wrap),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_wrapping(self) -> bool {
        matches!(self, Self::Wrap)
    }
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#justify-content-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum JustifyContent {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
}

impl JustifyContent {
    pub fn from_keyword(raw: &str) -> Option<Self> {
        match keyword(raw)?.as_str() {
            "flex-start" | "start" | "left" | "normal" => Some(Self::FlexStart),
            "flex-end" | "end" | "right" => Some(Self::FlexEnd),
            "center" => Some(Self::Center),
            "space-between" => Some(Self::SpaceBetween),
            "space-around" => Some(Self::SpaceAround),
            _ => None,
        }
    }
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#align-items-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum AlignItems {
    #[default]
    Stretch,
    FlexStart,
    FlexEnd,
    Center,
}

impl AlignItems {
    /// `baseline` has no text metrics to align on and behaves as `flex-start`.
    pub fn from_keyword(raw: &str) -> Option<Self> {
        match keyword(raw)?.as_str() {
            "stretch" | "normal" => Some(Self::Stretch),
            "flex-start" | "start" | "self-start" | "baseline" => Some(Self::FlexStart),
            "flex-end" | "end" | "self-end" => Some(Self::FlexEnd),
            "center" => Some(Self::Center),
            _ => None,
        }
    }
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#align-content-property>
///
/// Parsed for completeness; line packing only implements `stretch`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum AlignContent {
    #[default]
    Stretch,
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
}

impl AlignContent {
    pub fn from_keyword(raw: &str) -> Option<Self> {
        match keyword(raw)?.as_str() {
            "stretch" | "normal" => Some(Self::Stretch),
            "flex-start" | "start" => Some(Self::FlexStart),
            "flex-end" | "end" => Some(Self::FlexEnd),
            "center" => Some(Self::Center),
            "space-between" => Some(Self::SpaceBetween),
            "space-around" => Some(Self::SpaceAround),
            _ => None,
        }
    }
}

/// Container configuration, read once when the container is constructed.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ContainerConfig {
    pub direction: FlexDirection,
    pub wrap: FlexWrap,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_content: AlignContent,
}

impl ContainerConfig {
    /// Read the `data-flex-*` attributes of `node`.
    pub fn read<H: GeometryProvider + ?Sized>(host: &H, node: NodeRef) -> Self {
        let config = Self::from_attributes(|name| host.attribute(node, name));
        debug!(target: "css::flexbox::config", "{node}: {config:?}");
        config
    }

    /// Build a config from an attribute lookup.
    ///
    /// Discrete `direction`/`wrap` attributes win; the `flow` shorthand fills
    /// whichever of the two is missing, defaulting to `row nowrap`.
    pub fn from_attributes<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let (flow_direction, flow_wrap) = lookup("data-flex-flow")
            .map(|flow| parse_flow(&flow))
            .unwrap_or_default();
        let direction = lookup("data-flex-direction")
            .and_then(|raw| FlexDirection::from_keyword(&raw))
            .or(flow_direction)
            .unwrap_or_default();
        let wrap = lookup("data-flex-wrap")
            .and_then(|raw| FlexWrap::from_keyword(&raw))
            .or(flow_wrap)
            .unwrap_or_default();
        Self {
            direction,
            wrap,
            justify_content: lookup("data-flex-justify")
                .and_then(|raw| JustifyContent::from_keyword(&raw))
                .unwrap_or_default(),
            align_items: lookup("data-flex-align-items")
                .and_then(|raw| AlignItems::from_keyword(&raw))
                .unwrap_or_default(),
            align_content: lookup("data-flex-align-content")
                .and_then(|raw| AlignContent::from_keyword(&raw))
                .unwrap_or_default(),
        }
    }
}

/// Split a `flex-flow` value into its direction and wrap parts, in any order.
pub fn parse_flow(raw: &str) -> (Option<FlexDirection>, Option<FlexWrap>) {
    let mut direction = None;
    let mut wrap = None;
    for token in raw.split_whitespace() {
        if let Some(parsed) = FlexDirection::from_keyword(token) {
            direction.get_or_insert(parsed);
        } else if let Some(parsed) = FlexWrap::from_keyword(token) {
            wrap.get_or_insert(parsed);
        }
    }
    (direction, wrap)
}
