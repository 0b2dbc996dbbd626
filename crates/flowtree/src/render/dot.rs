//! Graphviz DOT emitter

use anyhow::Result;
use tracing::{debug, span, Level};

use super::style::{fill_color, FONT};
use crate::core::{escape_label, Diagram, NodeKind, NodeShape, OutputFormat, RenderConfig, Renderer};

const INDENT: &str = "  ";

/// Emits a `digraph G { ... }` document
#[derive(Debug, Clone, Default)]
pub struct DotRenderer {
    config: RenderConfig,
}

impl DotRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render without going through the trait's `Result`
    pub fn render_text(&self, diagram: &Diagram) -> String {
        let render_span = span!(Level::INFO, "render_dot", node_count = diagram.nodes.len());
        let _enter = render_span.enter();

        let rankdir = self.config.direction.rankdir();
        let mut lines = vec!["digraph G {".to_string()];
        match self.config.effective_title() {
            Some(title) => lines.push(format!(
                "{}graph [rankdir={}, label=\"{}\", labelloc=t, fontsize=16];",
                INDENT,
                rankdir,
                escape_label(title)
            )),
            None => lines.push(format!("{}graph [rankdir={}];", INDENT, rankdir)),
        }
        lines.push(format!(
            "{}node [fontname=\"{}\", style=\"rounded,filled\"];",
            INDENT, FONT
        ));
        lines.push(format!("{}edge [fontname=\"{}\"];", INDENT, FONT));

        for node in &diagram.nodes {
            lines.push(format!(
                "{}{} [label=\"{}\", shape={}, style=\"rounded,filled\", fillcolor=\"{}\"];",
                INDENT,
                node.id,
                escape_label(&node.label),
                dot_shape(node.shape, node.kind),
                fill_color(node.shape, node.kind)
            ));
        }

        for edge in &diagram.edges {
            match edge.label.as_deref() {
                Some(label) => lines.push(format!(
                    "{}{} -> {} [label=\"{}\"];",
                    INDENT,
                    edge.from,
                    edge.to,
                    escape_label(label)
                )),
                None => lines.push(format!("{}{} -> {};", INDENT, edge.from, edge.to)),
            }
        }

        lines.push("}".to_string());
        debug!(line_count = lines.len(), "DOT text emitted");
        lines.join("\n")
    }
}

impl Renderer for DotRenderer {
    fn render(&self, diagram: &Diagram) -> Result<String> {
        Ok(self.render_text(diagram))
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Dot
    }

    fn config(&self) -> &RenderConfig {
        &self.config
    }
}

/// Graphviz shape; stadiums are rounded boxes told apart by their fill
fn dot_shape(shape: NodeShape, kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Directory => "folder",
        NodeKind::File => "note",
        NodeKind::Step => match shape {
            NodeShape::Box | NodeShape::Stadium => "box",
            NodeShape::Diamond => "diamond",
            NodeShape::Circle => "circle",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DiagramEdge, DiagramNode, Direction};

    #[test]
    fn test_flow_output() {
        let diagram = Diagram {
            nodes: vec![
                DiagramNode::new("f0", "Start", NodeShape::Stadium, NodeKind::Step),
                DiagramNode::new("f1", "Ok?", NodeShape::Diamond, NodeKind::Step),
                DiagramNode::new("f2", "Done", NodeShape::Circle, NodeKind::Step),
            ],
            edges: vec![
                DiagramEdge::new("f0", "f1", None),
                DiagramEdge::new("f1", "f2", Some("yes".to_string())),
            ],
        };
        let text = DotRenderer::new().render_text(&diagram);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "digraph G {");
        assert_eq!(lines[1], "  graph [rankdir=TB];");
        assert_eq!(lines[2], "  node [fontname=\"Helvetica\", style=\"rounded,filled\"];");
        assert_eq!(lines[3], "  edge [fontname=\"Helvetica\"];");
        assert!(lines[4].starts_with("  f0 [label=\"Start\", shape=box, style=\"rounded,filled\""));
        assert!(lines[5].contains("shape=diamond"));
        assert!(lines[6].contains("shape=circle"));
        assert_eq!(lines[7], "  f0 -> f1;");
        assert_eq!(lines[8], "  f1 -> f2 [label=\"yes\"];");
        assert_eq!(lines[9], "}");
    }

    #[test]
    fn test_stadium_fill_differs_from_box() {
        assert_ne!(
            fill_color(NodeShape::Stadium, NodeKind::Step),
            fill_color(NodeShape::Box, NodeKind::Step)
        );
    }

    #[test]
    fn test_title_escaped() {
        let config = RenderConfig::new(Some("My \"Flow\"".to_string()), Direction::RightLeft);
        let text = DotRenderer::with_config(config).render_text(&Diagram::new());
        assert!(text.contains(r#"graph [rankdir=RL, label="My \"Flow\"", labelloc=t, fontsize=16];"#));
    }

    #[test]
    fn test_tree_shapes() {
        let diagram = Diagram {
            nodes: vec![
                DiagramNode::new("n0", "proj", NodeShape::Box, NodeKind::Directory),
                DiagramNode::new("n1", "a.txt", NodeShape::Box, NodeKind::File),
            ],
            edges: vec![DiagramEdge::new("n0", "n1", None)],
        };
        let text = DotRenderer::new().render_text(&diagram);
        assert!(text.contains("n0 [label=\"proj\", shape=folder"));
        assert!(text.contains("n1 [label=\"a.txt\", shape=note"));
        assert!(text.contains("n0 -> n1;"));
    }

    #[test]
    fn test_label_escaping() {
        let diagram = Diagram {
            nodes: vec![DiagramNode::new("f0", "a\\b\r\nc", NodeShape::Box, NodeKind::Step)],
            edges: Vec::new(),
        };
        let text = DotRenderer::new().render_text(&diagram);
        assert!(text.contains(r#"label="a\\b c""#));
    }
}
