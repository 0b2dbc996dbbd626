//! Diagram text emitters
//!
//! Mermaid and Graphviz DOT serializers over the shared [`Diagram`] model.

mod dot;
mod mermaid;
mod style;

pub use dot::*;
pub use mermaid::*;

use crate::core::{Diagram, OutputFormat, RenderConfig, Renderer};

/// Renderer for the given format
pub fn renderer_for(format: OutputFormat, config: RenderConfig) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Mermaid => Box::new(MermaidRenderer::with_config(config)),
        OutputFormat::Dot => Box::new(DotRenderer::with_config(config)),
    }
}

/// Serialize `diagram` in `format`
pub fn render_diagram(diagram: &Diagram, format: OutputFormat, config: &RenderConfig) -> String {
    match format {
        OutputFormat::Mermaid => MermaidRenderer::with_config(config.clone()).render_text(diagram),
        OutputFormat::Dot => DotRenderer::with_config(config.clone()).render_text(diagram),
    }
}
