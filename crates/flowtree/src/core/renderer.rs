//! Core renderer trait
//!
//! Renderers are pure: the same diagram and configuration always produce the
//! same text.

use anyhow::Result;

use super::diagram::Diagram;
use super::types::{OutputFormat, RenderConfig};

/// Core trait for diagram text emitters
pub trait Renderer: Send + Sync {
    /// Serialize the diagram into the target grammar
    fn render(&self, diagram: &Diagram) -> Result<String>;

    /// The format this renderer produces
    fn format(&self) -> OutputFormat;

    /// The configuration in effect
    fn config(&self) -> &RenderConfig;
}
