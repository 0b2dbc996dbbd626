//! Mermaid flowchart emitter

use anyhow::Result;
use tracing::{debug, span, Level};

use super::style::{fill_color, stroke_color};
use crate::core::{escape_label, Diagram, NodeKind, NodeShape, OutputFormat, RenderConfig, Renderer};

/// Emits `graph <DIR>` flowchart text
#[derive(Debug, Clone, Default)]
pub struct MermaidRenderer {
    config: RenderConfig,
}

impl MermaidRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render without going through the trait's `Result`
    pub fn render_text(&self, diagram: &Diagram) -> String {
        let render_span = span!(Level::INFO, "render_mermaid", node_count = diagram.nodes.len());
        let _enter = render_span.enter();

        let mut lines = vec![format!("graph {}", self.config.direction.mermaid())];
        if let Some(title) = self.config.effective_title() {
            lines.push(format!("%% {}", escape_label(title)));
        }

        for kind in class_kinds(diagram) {
            lines.push(format!(
                "classDef {} fill:{},stroke:{},stroke-width:1px;",
                kind.class_name(),
                fill_color(NodeShape::Box, kind),
                stroke_color(kind)
            ));
        }

        for node in &diagram.nodes {
            lines.push(format!(
                "{}{}:::{}",
                node.id,
                shape_text(node.shape, &escape_label(&node.label)),
                node.kind.class_name()
            ));
        }

        for edge in &diagram.edges {
            match edge.label.as_deref() {
                Some(label) => lines.push(format!(
                    "{} -->|{}| {}",
                    edge.from,
                    escape_label(label),
                    edge.to
                )),
                None => lines.push(format!("{} --> {}", edge.from, edge.to)),
            }
        }

        debug!(line_count = lines.len(), "Mermaid text emitted");
        lines.join("\n")
    }
}

impl Renderer for MermaidRenderer {
    fn render(&self, diagram: &Diagram) -> Result<String> {
        Ok(self.render_text(diagram))
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Mermaid
    }

    fn config(&self) -> &RenderConfig {
        &self.config
    }
}

/// Box labels are quoted; the other shapes use bare delimiters
fn shape_text(shape: NodeShape, label: &str) -> String {
    match shape {
        NodeShape::Box => format!("[\"{}\"]", label),
        NodeShape::Diamond => format!("{{{}}}", label),
        NodeShape::Circle => format!("(({}))", label),
        NodeShape::Stadium => format!("([{}])", label),
    }
}

/// Style classes to declare: `step` for flows, `dir` and `file` together for trees
fn class_kinds(diagram: &Diagram) -> Vec<NodeKind> {
    let mut kinds = Vec::new();
    for kind in diagram.kinds() {
        let group: &[NodeKind] = match kind {
            NodeKind::Step => &[NodeKind::Step],
            NodeKind::Directory | NodeKind::File => &[NodeKind::Directory, NodeKind::File],
        };
        for kind in group {
            if !kinds.contains(kind) {
                kinds.push(*kind);
            }
        }
    }
    kinds
}
