//! Core database trait for diagram graph storage
//!
//! Each input mode (flow spec, directory tree) keeps its own node and edge
//! records. The database converts them into the shared [`Diagram`] model the
//! renderers consume.

use anyhow::Result;

use super::diagram::Diagram;

/// Core trait for diagram databases
///
/// A database owns the nodes and edges of one graph build. Node iteration is
/// always in first-seen order and edge iteration in insertion order.
pub trait Database: Send + Sync {
    /// The node data type for this database
    type Node: Clone + Send + Sync;

    /// The edge data type for this database
    type Edge: Clone + Send + Sync;

    /// Add a node to the database
    fn add_node(&mut self, node: Self::Node) -> Result<()>;

    /// Add an edge to the database
    fn add_edge(&mut self, edge: Self::Edge) -> Result<()>;

    /// Get a node by its key
    fn get_node(&self, id: &str) -> Option<&Self::Node>;

    /// Iterate over all nodes
    fn nodes(&self) -> impl Iterator<Item = &Self::Node>;

    /// Iterate over all edges
    fn edges(&self) -> impl Iterator<Item = &Self::Edge>;

    /// Clear all data from the database
    fn clear(&mut self);

    /// Get the number of nodes
    fn node_count(&self) -> usize;

    /// Get the number of edges
    fn edge_count(&self) -> usize;

    /// Convert into the renderer-facing model keyed by internal ids
    fn to_diagram(&self) -> Diagram;
}
