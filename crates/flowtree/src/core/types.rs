//! Core type definitions for diagram generation
//!
//! Node shapes, output formats, input modes, layout direction and the
//! render configuration shared by both emitters.

use std::fmt;
use std::str::FromStr;

use super::error::DiagramError;

/// Node shapes understood by the flow spec language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum NodeShape {
    /// Rectangle: `a[label]`
    #[default]
    Box,
    /// Decision: `a{label}`
    Diamond,
    /// Circle: `a((label))`
    Circle,
    /// Rounded pill: `a([label])`
    Stadium,
}

impl fmt::Display for NodeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeShape::Box => write!(f, "box"),
            NodeShape::Diamond => write!(f, "diamond"),
            NodeShape::Circle => write!(f, "circle"),
            NodeShape::Stadium => write!(f, "stadium"),
        }
    }
}

/// What a diagram node stands for; drives style classes and fill colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum NodeKind {
    /// A flow step
    #[default]
    Step,
    /// A directory in a scanned tree
    Directory,
    /// A file in a scanned tree
    File,
}

impl NodeKind {
    /// Mermaid style class applied to nodes of this kind
    pub fn class_name(&self) -> &'static str {
        match self {
            NodeKind::Step => "step",
            NodeKind::Directory => "dir",
            NodeKind::File => "file",
        }
    }
}

/// Target text format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum OutputFormat {
    /// Mermaid flowchart syntax
    #[default]
    Mermaid,
    /// Graphviz DOT
    Dot,
}

impl OutputFormat {
    /// Conventional file extension for a diagram spec in this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Mermaid => "mmd",
            OutputFormat::Dot => "dot",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mermaid" | "mmd" => Ok(OutputFormat::Mermaid),
            "dot" | "graphviz" => Ok(OutputFormat::Dot),
            _ => Err(DiagramError::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Mermaid => write!(f, "mermaid"),
            OutputFormat::Dot => write!(f, "dot"),
        }
    }
}

/// Where the diagram comes from
///
/// The CLI picks the mode through its subcommand and only logs it; the
/// [`FromStr`] impl is for library callers that take the mode as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramMode {
    /// Scanned directory tree
    Tree,
    /// Flow entries or flow spec lines
    Flow,
}

impl FromStr for DiagramMode {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tree" => Ok(DiagramMode::Tree),
            "flow" => Ok(DiagramMode::Flow),
            _ => Err(DiagramError::UnsupportedMode {
                mode: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for DiagramMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagramMode::Tree => write!(f, "tree"),
            DiagramMode::Flow => write!(f, "flow"),
        }
    }
}

/// Layout direction hint passed through to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Direction {
    /// Top to bottom (TD or TB)
    #[default]
    TopDown,
    /// Left to right (LR)
    LeftRight,
    /// Bottom to top (BT)
    BottomUp,
    /// Right to left (RL)
    RightLeft,
}

impl Direction {
    /// Mermaid header keyword (`TD`, `LR`, ...)
    pub fn mermaid(&self) -> &'static str {
        match self {
            Direction::TopDown => "TD",
            Direction::LeftRight => "LR",
            Direction::BottomUp => "BT",
            Direction::RightLeft => "RL",
        }
    }

    /// Graphviz `rankdir` value
    pub fn rankdir(&self) -> &'static str {
        match self {
            Direction::TopDown => "TB",
            Direction::LeftRight => "LR",
            Direction::BottomUp => "BT",
            Direction::RightLeft => "RL",
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TD" | "TB" => Ok(Direction::TopDown),
            "LR" => Ok(Direction::LeftRight),
            "BT" => Ok(Direction::BottomUp),
            "RL" => Ok(Direction::RightLeft),
            _ => Err(format!("Unknown direction: {}", s)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mermaid())
    }
}

/// Options shared by the Mermaid and DOT renderers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// Optional diagram title
    pub title: Option<String>,
    /// Layout direction
    pub direction: Direction,
}

impl RenderConfig {
    pub fn new(title: Option<String>, direction: Direction) -> Self {
        Self { title, direction }
    }

    /// Builder-style title setter
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Title with surrounding whitespace removed; blank titles count as unset
    pub fn effective_title(&self) -> Option<&str> {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_shape_default_and_display() {
        assert_eq!(NodeShape::default(), NodeShape::Box);
        assert_eq!(NodeShape::Box.to_string(), "box");
        assert_eq!(NodeShape::Diamond.to_string(), "diamond");
        assert_eq!(NodeShape::Circle.to_string(), "circle");
        assert_eq!(NodeShape::Stadium.to_string(), "stadium");
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("mermaid".parse::<OutputFormat>().unwrap(), OutputFormat::Mermaid);
        assert_eq!("MMD".parse::<OutputFormat>().unwrap(), OutputFormat::Mermaid);
        assert_eq!("dot".parse::<OutputFormat>().unwrap(), OutputFormat::Dot);
        assert_eq!("Graphviz".parse::<OutputFormat>().unwrap(), OutputFormat::Dot);

        let err = "svg".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, DiagramError::UnsupportedFormat { ref format } if format == "svg"));
    }

    #[test]
    fn test_diagram_mode_parsing() {
        assert_eq!("tree".parse::<DiagramMode>().unwrap(), DiagramMode::Tree);
        assert_eq!(" Flow ".parse::<DiagramMode>().unwrap(), DiagramMode::Flow);
        assert!(matches!(
            "graph".parse::<DiagramMode>(),
            Err(DiagramError::UnsupportedMode { .. })
        ));
    }

    #[test]
    fn test_direction_mappings() {
        assert_eq!(Direction::default(), Direction::TopDown);
        assert_eq!("tb".parse::<Direction>().unwrap(), Direction::TopDown);
        assert_eq!(Direction::TopDown.rankdir(), "TB");
        assert_eq!(Direction::LeftRight.mermaid(), "LR");
        assert_eq!(Direction::RightLeft.to_string(), "RL");
        assert!("up".parse::<Direction>().is_err());
    }

    #[test]
    fn test_effective_title() {
        assert_eq!(RenderConfig::default().effective_title(), None);
        assert_eq!(
            RenderConfig::default().with_title("   ").effective_title(),
            None
        );
        assert_eq!(
            RenderConfig::default()
                .with_title(" Release ")
                .effective_title(),
            Some("Release")
        );
    }

    #[test]
    fn test_node_kind_classes() {
        assert_eq!(NodeKind::Step.class_name(), "step");
        assert_eq!(NodeKind::Directory.class_name(), "dir");
        assert_eq!(NodeKind::File.class_name(), "file");
    }
}
