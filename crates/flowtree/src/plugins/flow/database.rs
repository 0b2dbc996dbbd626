//! Flow database implementation
//!
//! The node registry for one flow build: ids map to mutable node records, a
//! parallel list keeps first-seen order, and edges are kept in declaration
//! order without deduplication.

use anyhow::{bail, Result};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::{debug, trace};

use super::node_expr::is_valid_id;
use crate::core::{
    Database, Diagram, DiagramEdge, DiagramError, DiagramNode, DiagramResult, NodeKind, NodeShape,
};

/// Prefix of internal identifiers in flow mode
pub const FLOW_ID_PREFIX: &str = "f";

/// A registered flow node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowNode {
    /// User-facing id
    pub id: String,
    pub label: String,
    pub shape: NodeShape,
    /// Renderer-safe id, set by [`FlowDatabase::assign_internal_ids`]
    pub internal_id: Option<String>,
}

impl FlowNode {
    /// A box node labelled with its own id
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            shape: NodeShape::Box,
            internal_id: None,
        }
    }

    pub fn with_label(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::new(id)
        }
    }
}

/// A directed edge between two user-facing ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowEdge {
    pub from: String,
    pub to: String,
    pub label: Option<String>,
}

impl FlowEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: None,
        }
    }

    pub fn with_label(from: impl Into<String>, to: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::new(from, to)
        }
    }
}

/// Flow database
///
/// Constructed fresh for every build; nothing here is process-wide.
#[derive(Debug, Default)]
pub struct FlowDatabase {
    /// Nodes indexed by user-facing id
    nodes: HashMap<String, FlowNode>,
    /// Node ids in first-seen order
    node_order: Vec<String>,
    /// Edges in declaration order
    edges: Vec<FlowEdge>,
}

impl FlowDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node mention.
    ///
    /// Unknown ids are created as a box labelled with the id. A non-empty
    /// `label` and a set `shape` overwrite what is stored; blank values never
    /// erase an earlier, richer declaration.
    pub fn register(
        &mut self,
        id: &str,
        label: &str,
        shape: Option<NodeShape>,
    ) -> DiagramResult<&FlowNode> {
        if !is_valid_id(id) {
            return Err(DiagramError::invalid_node_id(id, 0));
        }

        let node = match self.nodes.entry(id.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                trace!(node_id = %id, "Registering new node");
                self.node_order.push(id.to_string());
                entry.insert(FlowNode::new(id))
            }
        };
        if !label.is_empty() {
            node.label = label.to_string();
        }
        if let Some(shape) = shape {
            node.shape = shape;
        }
        trace!(node_id = %node.id, node_label = %node.label, node_shape = %node.shape, "Node registered");

        Ok(node)
    }

    /// Insert or replace a node record as-is, without id validation.
    ///
    /// Entry chains use this since their ids are generated.
    pub fn insert_node(&mut self, node: FlowNode) {
        trace!(node_id = %node.id, node_label = %node.label, "Adding node to database");
        if !self.nodes.contains_key(&node.id) {
            self.node_order.push(node.id.clone());
        }
        self.nodes.insert(node.id.clone(), node);
    }

    /// Append an edge between two registered ids
    pub fn connect(&mut self, from: &str, to: &str, label: Option<&str>) {
        trace!(edge_from = %from, edge_to = %to, edge_label = ?label, "Adding edge");
        self.edges.push(FlowEdge {
            from: from.to_string(),
            to: to.to_string(),
            label: label.map(str::to_string),
        });
    }

    /// Assign `f0, f1, ...` in first-seen order
    pub fn assign_internal_ids(&mut self) {
        for (index, id) in self.node_order.iter().enumerate() {
            if let Some(node) = self.nodes.get_mut(id) {
                node.internal_id = Some(format!("{}{}", FLOW_ID_PREFIX, index));
            }
        }
        debug!(node_count = self.node_order.len(), "Internal ids assigned");
    }

    /// Internal id of a node, falling back to its position when ids have not
    /// been assigned yet
    pub fn internal_id(&self, id: &str) -> Option<String> {
        let node = self.nodes.get(id)?;
        node.internal_id.clone().or_else(|| {
            self.node_order
                .iter()
                .position(|known| known == id)
                .map(|index| format!("{}{}", FLOW_ID_PREFIX, index))
        })
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Node ids in first-seen order
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.node_order.iter().map(String::as_str)
    }
}

impl Database for FlowDatabase {
    type Node = FlowNode;
    type Edge = FlowEdge;

    fn add_node(&mut self, node: FlowNode) -> Result<()> {
        self.insert_node(node);
        Ok(())
    }

    fn add_edge(&mut self, edge: FlowEdge) -> Result<()> {
        for endpoint in [&edge.from, &edge.to] {
            if !self.nodes.contains_key(endpoint) {
                bail!("edge references unknown node '{}'", endpoint);
            }
        }
        self.connect(&edge.from, &edge.to, edge.label.as_deref());
        Ok(())
    }

    fn get_node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.get(id)
    }

    fn nodes(&self) -> impl Iterator<Item = &FlowNode> {
        self.node_order.iter().filter_map(|id| self.nodes.get(id))
    }

    fn edges(&self) -> impl Iterator<Item = &FlowEdge> {
        self.edges.iter()
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.node_order.clear();
        self.edges.clear();
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn to_diagram(&self) -> Diagram {
        let ids: HashMap<&str, String> = self
            .node_order
            .iter()
            .enumerate()
            .map(|(index, id)| {
                let internal = self
                    .nodes
                    .get(id)
                    .and_then(|node| node.internal_id.clone())
                    .unwrap_or_else(|| format!("{}{}", FLOW_ID_PREFIX, index));
                (id.as_str(), internal)
            })
            .collect();

        let nodes = self
            .nodes()
            .filter_map(|node| {
                let internal = ids.get(node.id.as_str())?;
                Some(DiagramNode::new(
                    internal.clone(),
                    node.label.clone(),
                    node.shape,
                    NodeKind::Step,
                ))
            })
            .collect();

        let edges = self
            .edges
            .iter()
            .filter_map(|edge| {
                let from = ids.get(edge.from.as_str())?;
                let to = ids.get(edge.to.as_str())?;
                Some(DiagramEdge::new(from.clone(), to.clone(), edge.label.clone()))
            })
            .collect();

        Diagram { nodes, edges }
    }
}
