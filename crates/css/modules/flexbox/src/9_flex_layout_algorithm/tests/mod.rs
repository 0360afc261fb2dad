//! Tests for the flex layout algorithm, driven through the in-memory host.

use super::*;
use crate::host::GeometryProvider as _;
use crate::host::memory::MemoryHost;
use core::error::Error;

mod justify_tests;
mod row_tests;

pub type TestResult = Result<(), Box<dyn Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A container under a wide root, configured through `attributes`.
pub fn container(
    host: &mut MemoryHost,
    declarations: &[(&str, &str)],
    attributes: &[(&str, &str)],
) -> NodeRef {
    let root = host
        .root()
        .unwrap_or_else(|| host.create_node(&[("width", "1000px")]));
    let node = host.append_child(root, declarations);
    host.set_attribute(node, "data-flex-container", "");
    for (name, value) in attributes {
        host.set_attribute(node, name, value);
    }
    node
}

/// An item of the given intrinsic size.
pub fn child(
    host: &mut MemoryHost,
    parent: NodeRef,
    intrinsic: (i32, i32),
    declarations: &[(&str, &str)],
    attributes: &[(&str, &str)],
) -> NodeRef {
    let node = host.append_child(parent, declarations);
    host.set_intrinsic_size(node, intrinsic.0, intrinsic.1);
    for (name, value) in attributes {
        host.set_attribute(node, name, value);
    }
    node
}

/// Margin-box sizes of `nodes` along `dimension`.
pub fn sizes(host: &MemoryHost, nodes: &[NodeRef], dimension: Dimension) -> Vec<i32> {
    nodes
        .iter()
        .map(|node| host.margin_box(*node, dimension))
        .collect()
}

/// Row index of every item in `container`.
pub fn rows_of(container: &FlexContainer) -> Vec<usize> {
    container
        .items()
        .iter()
        .map(|item| item.placement().row)
        .collect()
}

/// Lay out a fresh container over `node`.
pub fn run(host: &mut MemoryHost, node: NodeRef) -> Result<(FlexContainer, LayoutReport), LayoutError> {
    init_logging();
    let mut flex = FlexContainer::new(host, node)?;
    let report = flex.layout(host);
    Ok((flex, report))
}
