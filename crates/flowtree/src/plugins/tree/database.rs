//! Tree database implementation
//!
//! Holds the included paths of one scan in sorted order. Nodes are keyed by
//! internal id (`n0`, `n1`, ...); a path index answers parent lookups.

use anyhow::{bail, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::trace;

use crate::core::{Database, Diagram, DiagramEdge, DiagramNode, NodeKind, NodeShape};

/// Prefix of internal identifiers in tree mode
pub const TREE_ID_PREFIX: &str = "n";

/// An included filesystem path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub path: PathBuf,
    pub is_dir: bool,
    pub internal_id: String,
    pub label: String,
}

impl TreeNode {
    pub fn kind(&self) -> NodeKind {
        if self.is_dir {
            NodeKind::Directory
        } else {
            NodeKind::File
        }
    }
}

/// Parent to child containment, by internal id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEdge {
    pub from: String,
    pub to: String,
}

/// Tree database
#[derive(Debug, Default)]
pub struct TreeDatabase {
    nodes: Vec<TreeNode>,
    by_id: HashMap<String, usize>,
    by_path: HashMap<PathBuf, usize>,
    edges: Vec<TreeEdge>,
}

impl TreeDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a path, numbering it after the ones already present.
    ///
    /// Returns the internal id; a path seen before keeps its original id.
    pub fn push_path(&mut self, path: &Path, is_dir: bool, label: impl Into<String>) -> String {
        if let Some(&index) = self.by_path.get(path) {
            return self.nodes[index].internal_id.clone();
        }

        let internal_id = format!("{}{}", TREE_ID_PREFIX, self.nodes.len());
        trace!(node_id = %internal_id, path = %path.display(), is_dir, "Adding path");
        self.insert(TreeNode {
            path: path.to_path_buf(),
            is_dir,
            internal_id: internal_id.clone(),
            label: label.into(),
        });
        internal_id
    }

    /// Internal id of an included path
    pub fn id_for_path(&self, path: &Path) -> Option<&str> {
        self.by_path
            .get(path)
            .map(|&index| self.nodes[index].internal_id.as_str())
    }

    pub fn node_for_path(&self, path: &Path) -> Option<&TreeNode> {
        self.by_path.get(path).map(|&index| &self.nodes[index])
    }

    /// Link a path to its immediate parent when that parent is included.
    ///
    /// Returns whether an edge was added; farther ancestors are never used.
    pub fn link_parent(&mut self, path: &Path) -> bool {
        let Some(child) = self.id_for_path(path).map(str::to_string) else {
            return false;
        };
        let Some(parent) = path
            .parent()
            .and_then(|parent| self.id_for_path(parent))
            .map(str::to_string)
        else {
            return false;
        };
        if parent == child {
            return false;
        }

        trace!(edge_from = %parent, edge_to = %child, "Adding containment edge");
        self.edges.push(TreeEdge {
            from: parent,
            to: child,
        });
        true
    }

    fn insert(&mut self, node: TreeNode) {
        let index = self.nodes.len();
        self.by_id.insert(node.internal_id.clone(), index);
        self.by_path.insert(node.path.clone(), index);
        self.nodes.push(node);
    }
}

impl Database for TreeDatabase {
    type Node = TreeNode;
    type Edge = TreeEdge;

    fn add_node(&mut self, node: TreeNode) -> Result<()> {
        if self.by_id.contains_key(&node.internal_id) {
            bail!("duplicate tree node id '{}'", node.internal_id);
        }
        if self.by_path.contains_key(&node.path) {
            bail!("path '{}' already in tree", node.path.display());
        }
        self.insert(node);
        Ok(())
    }

    fn add_edge(&mut self, edge: TreeEdge) -> Result<()> {
        for endpoint in [&edge.from, &edge.to] {
            if !self.by_id.contains_key(endpoint) {
                bail!("edge references unknown node '{}'", endpoint);
            }
        }
        self.edges.push(edge);
        Ok(())
    }

    fn get_node(&self, id: &str) -> Option<&TreeNode> {
        self.by_id.get(id).map(|&index| &self.nodes[index])
    }

    fn nodes(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes.iter()
    }

    fn edges(&self) -> impl Iterator<Item = &TreeEdge> {
        self.edges.iter()
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.by_id.clear();
        self.by_path.clear();
        self.edges.clear();
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn to_diagram(&self) -> Diagram {
        let nodes = self
            .nodes
            .iter()
            .map(|node| {
                DiagramNode::new(
                    node.internal_id.clone(),
                    node.label.clone(),
                    NodeShape::Box,
                    node.kind(),
                )
            })
            .collect();

        let edges = self
            .edges
            .iter()
            .map(|edge| DiagramEdge::new(edge.from.clone(), edge.to.clone(), None))
            .collect();

        Diagram { nodes, edges }
    }
}
