//! JSON scenes: a host document described as a tree of nodes.
//!
//! ```json
//! {
//!   "root": {
//!     "id": "page",
//!     "style": { "width": "800px" },
//!     "children": [
//!       {
//!         "id": "bar",
//!         "attributes": { "data-flex-container": "" },
//!         "children": [{ "id": "a", "intrinsic": { "width": 40, "height": 10 } }]
//!       }
//!     ]
//!   }
//! }
//! ```

use crate::LayoutOptions;
use anyhow::{Result, bail};
use css_flexbox::{MemoryHost, NodeRef};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::from_str;
use std::collections::{BTreeMap, HashMap};

/// Intrinsic content size of a node in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intrinsic {
    #[serde(default)]
    pub width: i32,
    #[serde(default)]
    pub height: i32,
}

/// One node of a scene.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneNode {
    /// Name used in the output. Unnamed nodes are reported by handle.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    /// Declared styles.
    #[serde(default)]
    pub style: BTreeMap<String, String>,
    #[serde(default)]
    pub intrinsic: Intrinsic,
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

/// A whole document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub root: SceneNode,
}

/// A scene loaded into an in-memory host, with its node names.
#[derive(Clone, Debug)]
pub struct SceneHost {
    pub host: MemoryHost,
    names: Vec<String>,
    by_name: HashMap<String, NodeRef>,
}

impl SceneHost {
    /// Node named `id`.
    pub fn node(&self, id: &str) -> Option<NodeRef> {
        self.by_name.get(id).copied()
    }

    /// Output name of `node`.
    pub fn name(&self, node: NodeRef) -> String {
        usize::try_from(node.0)
            .ok()
            .and_then(|index| self.names.get(index))
            .cloned()
            .unwrap_or_else(|| node.to_string())
    }
}

impl Scene {
    /// Parse a scene from JSON text.
    ///
    /// # Errors
    /// Returns an error when `raw` is not a valid scene.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(from_str(raw)?)
    }

    /// Build an in-memory host holding this scene.
    ///
    /// A root font size in `options` is declared on the root unless the root
    /// declares its own.
    ///
    /// # Errors
    /// Returns an error when two nodes share an id.
    pub fn build(&self, options: &LayoutOptions) -> Result<SceneHost> {
        let mut scene_host = SceneHost {
            host: MemoryHost::new(),
            names: Vec::new(),
            by_name: HashMap::new(),
        };
        let mut root = self.root.clone();
        if let Some(size) = options.root_font_size_px
            && !root.style.contains_key("font-size")
        {
            root.style.insert("font-size".to_owned(), format!("{size}px"));
        }
        add_node(&mut scene_host, None, &root)?;
        debug!(target: "flexipol::scene", "built {} nodes", scene_host.names.len());
        Ok(scene_host)
    }
}

/// Create `node` and its subtree under `parent`, in document order.
fn add_node(scene_host: &mut SceneHost, parent: Option<NodeRef>, node: &SceneNode) -> Result<()> {
    let declarations: Vec<(&str, &str)> = node
        .style
        .iter()
        .map(|(property, value)| (property.as_str(), value.as_str()))
        .collect();
    let handle = match parent {
        Some(parent_node) => scene_host.host.append_child(parent_node, &declarations),
        None => scene_host.host.create_node(&declarations),
    };
    for (name, value) in &node.attributes {
        scene_host.host.set_attribute(handle, name, value);
    }
    scene_host
        .host
        .set_intrinsic_size(handle, node.intrinsic.width, node.intrinsic.height);

    let name = node.id.clone().unwrap_or_else(|| handle.to_string());
    if scene_host.by_name.insert(name.clone(), handle).is_some() {
        bail!("duplicate node id '{name}'");
    }
    scene_host.names.push(name);

    for child in &node.children {
        add_node(scene_host, Some(handle), child)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::error::Error;
    use css_flexbox::GeometryProvider as _;

    #[test]
    /// # Panics
    /// Panics if the tree, attributes and names are not carried into the host.
    fn builds_host_in_document_order() -> Result<(), Box<dyn Error>> {
        let scene = Scene::from_json(
            r#"{"root": {"id": "page", "children": [
                {"id": "bar", "attributes": {"data-flex-container": ""},
                 "children": [{"id": "a", "intrinsic": {"width": 40, "height": 10}}, {}]}
            ]}}"#,
        )?;
        let built = scene.build(&LayoutOptions::default())?;
        let bar = built.node("bar").ok_or("missing bar")?;
        let children = built.host.children(bar);
        assert_eq!(children.len(), 2);
        assert_eq!(built.host.attribute(bar, "data-flex-container"), Some(String::new()));
        assert_eq!(children.first().map(|child| built.name(*child)), Some("a".to_owned()));
        assert_eq!(children.get(1).map(|child| built.name(*child)), Some("#3".to_owned()));
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if a root font size overrides the root's own declaration.
    fn root_font_size_only_fills_in() -> Result<(), Box<dyn Error>> {
        let options = LayoutOptions {
            root_font_size_px: Some(20.0),
            ..LayoutOptions::default()
        };
        let plain = Scene::from_json(r#"{"root": {}}"#)?.build(&options)?;
        let root = plain.host.root().ok_or("missing root")?;
        assert_eq!(plain.host.style_property(root, "font-size"), Some("20px".to_owned()));

        let declared =
            Scene::from_json(r#"{"root": {"style": {"font-size": "12px"}}}"#)?.build(&options)?;
        assert_eq!(declared.host.style_property(root, "font-size"), Some("12px".to_owned()));
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if duplicate ids are accepted.
    fn duplicate_ids_are_rejected() -> Result<(), Box<dyn Error>> {
        let scene = Scene::from_json(r#"{"root": {"id": "x", "children": [{"id": "x"}]}}"#)?;
        let result = scene.build(&LayoutOptions::default());
        assert_eq!(
            result.err().map(|err| err.to_string()),
            Some("duplicate node id 'x'".to_owned())
        );
        Ok(())
    }
}
