//! Flowtree - Generate Mermaid and Graphviz diagrams from flows and directory trees
//!
//! A library for turning a flat list of steps, a small line-oriented flow
//! spec, or a directory tree into Mermaid flowchart or Graphviz DOT text.
//!
//! # Quick Start
//!
//! ```rust
//! use flowtree::{generate_flow, OutputFormat, RenderConfig};
//!
//! let lines = ["start -> check{Valid?}", "check -> done | yes"];
//! let text = generate_flow(&lines, OutputFormat::Mermaid, &RenderConfig::default()).unwrap();
//! assert!(text.starts_with("graph TD"));
//! assert!(text.contains("f0 --> f1"));
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the individual components:
//!
//! ```rust
//! use flowtree::prelude::*;
//!
//! // Parse into a database
//! let parser = FlowParser::new();
//! let mut database = FlowDatabase::new();
//! parser.parse_lines(&["Draft", "Review", "Publish"], &mut database).unwrap();
//!
//! // Access the parsed data
//! assert_eq!(database.node_count(), 3);
//! assert_eq!(database.edge_count(), 2);
//!
//! // Emit DOT
//! let renderer = DotRenderer::new();
//! let dot = renderer.render(&database.to_diagram()).unwrap();
//! assert!(dot.contains("f0 -> f1;"));
//! ```

pub mod core;
pub mod export;
pub mod plugins;
pub mod render;

pub use crate::core::*;
pub use export::ImageExporter;
pub use render::render_diagram;

use std::path::Path;

use tracing::{info, span, Level};

use crate::plugins::flow::build_flow;
use crate::plugins::tree::{scan_tree, ScanOptions};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        Database, Diagram, DiagramError, DiagramResult, Direction, LineSource, NodeKind,
        NodeShape, OutputFormat, Parser, RenderConfig, Renderer,
    };
    pub use crate::export::ImageExporter;
    pub use crate::plugins::flow::{FlowDatabase, FlowParser};
    pub use crate::plugins::tree::{ScanOptions, TreeDatabase, TreeScanner};
    pub use crate::render::{render_diagram, renderer_for, DotRenderer, MermaidRenderer};
}

/// Build a flow from raw lines and emit it
///
/// Lines containing `->` anywhere switch the whole input to the flow spec
/// language; otherwise each usable line is one step of a linear chain.
///
/// # Example
/// ```rust
/// use flowtree::{generate_flow, OutputFormat, RenderConfig};
///
/// let dot = generate_flow(&["a -> b"], OutputFormat::Dot, &RenderConfig::default()).unwrap();
/// assert!(dot.contains("f0 -> f1;"));
/// ```
pub fn generate_flow<S: AsRef<str>>(
    lines: &[S],
    format: OutputFormat,
    config: &RenderConfig,
) -> DiagramResult<String> {
    let generate_span = span!(Level::INFO, "generate_flow", format = %format);
    let _enter = generate_span.enter();

    let database = build_flow(lines)?;
    let text = render_diagram(&database.to_diagram(), format, config);
    info!(output_len = text.len(), "Flow diagram generated");
    Ok(text)
}

/// Scan a directory and emit it
pub fn generate_tree(
    root: &Path,
    options: ScanOptions,
    format: OutputFormat,
    config: &RenderConfig,
) -> DiagramResult<String> {
    let generate_span = span!(Level::INFO, "generate_tree", format = %format);
    let _enter = generate_span.enter();

    let database = scan_tree(root, options)?;
    let text = render_diagram(&database.to_diagram(), format, config);
    info!(output_len = text.len(), "Tree diagram generated");
    Ok(text)
}
