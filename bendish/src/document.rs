//! JSON layout documents.
//!
//! A document describes a layout tree declaratively so it can be stored,
//! diffed, and fed to the `bendish` binary:
//!
//! ```json
//! { "nodes": [
//!     { "kind": "row", "expand_h": true, "children": [
//!         { "kind": "row", "id": "icon", "natural": { "width": 24, "height": 24 } },
//!         { "kind": "row", "id": "label", "expand_h": true }
//!     ] }
//! ] }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::area::{Area, Container, LayoutHandle, validate_natural};
use crate::error::Result;
use crate::flags::LayoutFlags;
use crate::primitives::{Color, Size};

/// Flag fields spelled out for documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlagSpec {
    pub expand_h: bool,
    pub expand_v: bool,
    pub scroll_h: bool,
    pub scroll_v: bool,
    pub separator: bool,
    #[serde(rename = "box")]
    pub boxed: bool,
}

impl From<FlagSpec> for LayoutFlags {
    fn from(spec: FlagSpec) -> Self {
        let mut flags = LayoutFlags::EMPTY
            .set_expand(spec.expand_h, spec.expand_v)
            .set_scroll(spec.scroll_h, spec.scroll_v);
        if spec.separator {
            flags = flags.set_separator();
        }
        if spec.boxed {
            flags = flags.set_box();
        }
        flags
    }
}

/// One node of a document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    /// Label used when reporting results; defaults to the node's path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(flatten)]
    pub container: Container,

    #[serde(flatten)]
    pub flags: FlagSpec,

    #[serde(default)]
    pub natural: Size,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSpec>,
}

/// A whole tree: the top-level nodes of one area.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
}

impl LayoutDocument {
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Create every node of the document under `area.root()`.
    ///
    /// Returns each created handle with its label, in pre-order. Nodes without
    /// an `id` are labelled by their index path, e.g. `"0.2.1"`.
    pub fn build(&self, area: &mut Area) -> Result<IndexMap<LayoutHandle, String>> {
        let mut labels = IndexMap::new();
        let root = area.root();
        for (i, spec) in self.nodes.iter().enumerate() {
            build_node(area, root, spec, i.to_string(), &mut labels)?;
        }
        tracing::debug!(nodes = labels.len(), "layout document built");
        Ok(labels)
    }
}

fn build_node(
    area: &mut Area,
    parent: LayoutHandle,
    spec: &NodeSpec,
    path: String,
    labels: &mut IndexMap<LayoutHandle, String>,
) -> Result<()> {
    validate_natural(spec.natural)?;
    let handle = area.create_container(parent, spec.container, spec.flags.into())?;
    area.set_natural_size(handle, spec.natural)?;
    if let Some(color) = spec.background {
        area.set_background_color(handle, color)?;
    }
    labels.insert(handle, spec.id.clone().unwrap_or_else(|| path.clone()));

    for (i, child) in spec.children.iter().enumerate() {
        build_node(area, handle, child, format!("{path}.{i}"), labels)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::Axis;
    use crate::error::LayoutError;
    use crate::flags::ContainerKind;

    const PANEL: &str = r#"{
        "nodes": [
            { "kind": "split", "ratio": 0.3, "id": "panel", "children": [
                { "kind": "list", "row_height": 20, "scroll_v": true, "children": [
                    { "kind": "row" },
                    { "kind": "row", "separator": true }
                ] },
                { "kind": "grid", "box": true, "background": { "r": 0.1, "g": 0.1, "b": 0.1, "a": 1.0 } }
            ] }
        ]
    }"#;

    #[test]
    fn parses_flattened_kind_and_flags() {
        let doc = LayoutDocument::from_json_str(PANEL).unwrap();
        let panel = &doc.nodes[0];
        assert_eq!(
            panel.container,
            Container::Split { ratio: 0.3, axis: Axis::Horizontal }
        );
        let list = &panel.children[0];
        assert_eq!(list.container, Container::List { row_height: 20.0 });
        assert!(list.flags.scroll_v);
        assert!(list.children[1].flags.separator);
        assert!(panel.children[1].flags.boxed);
    }

    #[test]
    fn builds_area_with_labels() {
        let doc = LayoutDocument::from_json_str(PANEL).unwrap();
        let mut area = Area::new();
        let labels = doc.build(&mut area).unwrap();

        assert_eq!(area.len(), 5);
        let names: Vec<&str> = labels.values().map(String::as_str).collect();
        assert_eq!(names, vec!["panel", "0.0", "0.0.0", "0.0.1", "0.1"]);

        let (&grid, _) = labels.get_index(4).unwrap();
        let flags = area.flags(grid).unwrap();
        assert_eq!(flags.kind(), Some(ContainerKind::Grid));
        assert!(flags.is_box());
        assert!(area.background_color(grid).unwrap().is_some());
    }

    #[test]
    fn invalid_ratio_surfaces_as_layout_error() {
        let doc = LayoutDocument::from_json_str(
            r#"{ "nodes": [ { "kind": "split", "ratio": 2.0 } ] }"#,
        )
        .unwrap();
        let mut area = Area::new();
        assert_eq!(doc.build(&mut area), Err(LayoutError::InvalidRatio(2.0)));
    }

    #[test]
    fn negative_natural_size_is_rejected_before_the_node_exists() {
        let doc = LayoutDocument::from_json_str(
            r#"{ "nodes": [ { "kind": "row", "children": [
                { "kind": "row", "natural": { "width": 40, "height": 0 } },
                { "kind": "row", "natural": { "width": -80, "height": 0 } }
            ] } ] }"#,
        )
        .unwrap();
        let mut area = Area::new();
        assert_eq!(
            doc.build(&mut area),
            Err(LayoutError::InvalidSize { width: -80.0, height: 0.0 })
        );
        assert_eq!(area.len(), 2);
    }

    #[test]
    fn missing_kind_is_a_parse_error() {
        assert!(LayoutDocument::from_json_str(r#"{ "nodes": [ { "id": "x" } ] }"#).is_err());
    }
}
