//! Renderer-facing graph model
//!
//! Both the flow builder and the tree scanner lower their graphs into a
//! [`Diagram`]. Node ids here are always internal identifiers (`f0`, `n3`, ...),
//! never user-chosen ids or filesystem paths.

use super::types::{NodeKind, NodeShape};

/// A node ready for emission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramNode {
    /// Internal identifier
    pub id: String,
    /// Unescaped display label
    pub label: String,
    pub shape: NodeShape,
    pub kind: NodeKind,
}

impl DiagramNode {
    pub fn new(id: impl Into<String>, label: impl Into<String>, shape: NodeShape, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            shape,
            kind,
        }
    }
}

/// An edge between two internal identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramEdge {
    pub from: String,
    pub to: String,
    pub label: Option<String>,
}

impl DiagramEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, label: Option<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label,
        }
    }
}

/// Ordered nodes plus ordered edges
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagram {
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<DiagramEdge>,
}

impl Diagram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Node kinds in first-appearance order, without repeats
    pub fn kinds(&self) -> Vec<NodeKind> {
        let mut kinds = Vec::new();
        for node in &self.nodes {
            if !kinds.contains(&node.kind) {
                kinds.push(node.kind);
            }
        }
        kinds
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
