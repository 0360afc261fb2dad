//! Document-level flex layout: find every flex container in a host tree and lay
//! them out in document order, outer containers before the ones nested in them.

pub mod scene;
pub mod snapshot;

use anyhow::{Context as _, Result};
use css_flexbox::{
    FlexContainer, GeometryProvider, Host, LayoutError, LayoutReport, NodeRef, is_flex_container,
};
use log::{debug, info};
use scene::Scene;
use snapshot::Snapshot;

/// Options for a document run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutOptions {
    /// Root font size declared when the document root has none.
    pub root_font_size_px: Option<f32>,
    /// Also lay out containers nested inside other containers.
    pub include_nested: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            root_font_size_px: None,
            include_nested: true,
        }
    }
}

/// Flex containers under the host's root, in document order.
pub fn find_containers<H: GeometryProvider + ?Sized>(host: &H, include_nested: bool) -> Vec<NodeRef> {
    let mut found = Vec::new();
    let mut stack: Vec<NodeRef> = host.root().into_iter().collect();
    while let Some(node) = stack.pop() {
        let container = is_flex_container(host, node);
        if container {
            found.push(node);
        }
        if container && !include_nested {
            continue;
        }
        stack.extend(host.children(node).into_iter().rev());
    }
    found
}

/// Lay out every container of the document.
///
/// # Errors
/// Returns `LayoutError::MissingNode` when a container or one of its children is
/// unknown to the host. Containers laid out before the failure keep their output.
pub fn layout_document<H: Host>(
    host: &mut H,
    options: &LayoutOptions,
) -> Result<Vec<LayoutReport>, LayoutError> {
    let containers = find_containers(host, options.include_nested);
    debug!(target: "flexipol", "{} containers", containers.len());
    containers
        .into_iter()
        .map(|node| {
            let mut container = FlexContainer::new(host, node)?;
            Ok(container.layout(host))
        })
        .collect()
}

/// Load a JSON scene, lay it out, and capture the result.
///
/// # Errors
/// Returns an error when the scene cannot be parsed or built, or when layout fails.
pub fn run_scene(raw: &str, options: &LayoutOptions) -> Result<Snapshot> {
    let scene = Scene::from_json(raw).context("failed to parse scene")?;
    let mut built = scene.build(options)?;
    let reports = layout_document(&mut built.host, options).context("layout failed")?;
    info!(target: "flexipol", "laid out {} containers", reports.len());
    Ok(Snapshot::capture(&built, &reports))
}
