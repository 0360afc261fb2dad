//! Flex Formatting Context (FFC)
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-containers>

use crate::chapter5::keyword;
use crate::host::{GeometryProvider, NodeRef};

/// Attributes whose presence marks a node as a flex container.
const CONTAINER_MARKERS: [&str; 3] = ["data-flex-container", "data-flex-direction", "data-flex-flow"];

/// Display keywords relevant to flex detection.
///
/// Spec: <https://www.w3.org/TR/css-display-3/#the-display-properties>
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DisplayKeyword {
    Inline,
    Block,
    None,
    Flex,
    InlineFlex,
}

impl DisplayKeyword {
    pub fn from_keyword(raw: &str) -> Option<Self> {
        match keyword(raw)?.as_str() {
            "inline" => Some(Self::Inline),
            "block" => Some(Self::Block),
            "none" => Some(Self::None),
            "flex" => Some(Self::Flex),
            "inline-flex" => Some(Self::InlineFlex),
            _ => None,
        }
    }
}

/// Returns true when the element establishes a Flex Formatting Context (FFC).
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-containers>
#[inline]
pub const fn establishes_flex_formatting_context(display: DisplayKeyword) -> bool {
    matches!(display, DisplayKeyword::Flex | DisplayKeyword::InlineFlex)
}

/// Whether `node` should be laid out as a flex container: it carries a container
/// marker attribute or its computed `display` is `flex`/`inline-flex`.
pub fn is_flex_container<H: GeometryProvider + ?Sized>(host: &H, node: NodeRef) -> bool {
    CONTAINER_MARKERS
        .iter()
        .any(|name| host.attribute(node, name).is_some())
        || host
            .style_property(node, "display")
            .and_then(|raw| DisplayKeyword::from_keyword(&raw))
            .is_some_and(establishes_flex_formatting_context)
}
