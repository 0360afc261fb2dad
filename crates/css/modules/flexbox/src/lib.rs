//! CSS Flexible Box Layout Module Level 1: flex layout over a host document.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/>
//!
//! The engine owns no geometry. It measures nodes through a
//! [`GeometryProvider`], writes sizes, margins, floats and clears through a
//! [`GeometryMutator`], and lets the host's own flow produce the final positions.

pub mod element;
pub mod error;
pub mod host;

// Chapter modules mapped to the Flexbox Level 1 table of contents.
// Spec: §4 Flex Formatting Context
#[path = "4_flex_formatting_context/mod.rs"]
mod chapter4;
// Spec: §5 Flex Containers
#[path = "5_flex_containers/mod.rs"]
mod chapter5;
// Spec: §6 Flex Items
#[path = "6_flex_items/mod.rs"]
mod chapter6;
// Spec: §7 Axis and Order
#[path = "7_axis_and_order/mod.rs"]
mod chapter7;
// Spec: §9 Flex Layout Algorithm
#[path = "9_flex_layout_algorithm/mod.rs"]
mod chapter9;

pub use chapter4::{DisplayKeyword, establishes_flex_formatting_context, is_flex_container};
pub use chapter5::{
    AlignContent, AlignItems, ContainerConfig, FlexDirection, FlexWrap, JustifyContent, parse_flow,
};
pub use chapter6::{
    AlignSelf, DEFAULT_FLEX, FlexBasis, FlexItem, FlexShorthand, ItemConfig, ItemStyle,
    collect_flex_items, is_flex_item,
};
pub use chapter7::{Axes, resolve_axes};
pub use chapter9::{
    FlexCollection, FlexContainer, FlexMember, GroupParams, ItemReport, LayoutReport, LineReport,
    Member, Placement, RowDistribution, RowOutcome, RowPlan, assign_rows, calculate_group,
    distribute_row, justify_row,
};
pub use element::{Element, Measurable};
pub use error::LayoutError;
pub use host::memory::MemoryHost;
pub use host::{GeometryMutator, GeometryProvider, Host, NodeRef, StyleMap};
