//! Serializable results of a document run.

use crate::scene::SceneHost;
use css_box::Dimension;
use css_flexbox::{FlexDirection, GeometryProvider as _, LayoutReport, LineReport};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Final geometry of one node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeGeometry {
    pub id: String,
    /// Border-box width.
    pub width: i32,
    /// Border-box height.
    pub height: i32,
    pub margin_width: i32,
    pub margin_height: i32,
    /// Inline styles the layout left on the node.
    pub inline: BTreeMap<String, String>,
}

/// One line of a container.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSummary {
    pub items: Vec<String>,
    pub used: i32,
    pub space_left: i32,
    pub shrinking: bool,
    pub restarts: usize,
    pub cross_size: i32,
}

/// One laid-out container.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSummary {
    pub id: String,
    pub direction: String,
    pub available_main: i32,
    pub available_cross: i32,
    pub lines: Vec<LineSummary>,
}

/// Everything a run produced: containers in layout order, then every node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub containers: Vec<ContainerSummary>,
    pub nodes: Vec<NodeGeometry>,
}

impl Snapshot {
    /// Capture `scene` after `reports` were produced over it.
    pub fn capture(scene: &SceneHost, reports: &[LayoutReport]) -> Self {
        let containers = reports
            .iter()
            .map(|report| ContainerSummary {
                id: scene.name(report.container),
                direction: match report.direction {
                    FlexDirection::Row => "row",
                    FlexDirection::Column => "column",
                }
                .to_owned(),
                available_main: report.available_main,
                available_cross: report.available_cross,
                lines: report
                    .lines
                    .iter()
                    .map(|line| summarize_line(scene, line))
                    .collect(),
            })
            .collect();
        let host = &scene.host;
        let nodes = host
            .nodes()
            .map(|node| NodeGeometry {
                id: scene.name(node),
                width: host.offset_size(node, Dimension::Width),
                height: host.offset_size(node, Dimension::Height),
                margin_width: host.margin_box(node, Dimension::Width),
                margin_height: host.margin_box(node, Dimension::Height),
                inline: host
                    .inline_styles(node)
                    .map(|styles| {
                        styles
                            .iter()
                            .map(|(property, value)| (property.clone(), value.clone()))
                            .collect()
                    })
                    .unwrap_or_default(),
            })
            .collect();
        Self { containers, nodes }
    }

    /// Geometry of the node named `id`.
    pub fn node(&self, id: &str) -> Option<&NodeGeometry> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Summary of the container named `id`.
    pub fn container(&self, id: &str) -> Option<&ContainerSummary> {
        self.containers.iter().find(|container| container.id == id)
    }
}

fn summarize_line(scene: &SceneHost, line: &LineReport) -> LineSummary {
    LineSummary {
        items: line.items.iter().map(|item| scene.name(item.node)).collect(),
        used: line.used,
        space_left: line.space_left,
        shrinking: line.shrinking,
        restarts: line.restarts,
        cross_size: line.cross_size,
    }
}
