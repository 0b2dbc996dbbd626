//! Core error types for diagram generation
//!
//! Every failure in the pipeline is fatal: the first error aborts the run and
//! nothing is emitted.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias for results carrying a [`DiagramError`]
pub type DiagramResult<T> = std::result::Result<T, DiagramError>;

/// Error types for diagram generation
#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("Invalid node id in '{token}' at line {line} (ids must match [A-Za-z0-9_.-]+)")]
    InvalidNodeId { token: String, line: usize },

    #[error("Malformed edge line {line}: '{text}' (expected LEFT -> RIGHT)")]
    MalformedEdgeLine { text: String, line: usize },

    #[error("No input provided: no usable entries or flow lines")]
    NoInputProvided,

    #[error("Conflicting input sources: use either entries or a flow spec, not both")]
    ConflictingInputSources,

    #[error("Input file not found: {}", path.display())]
    MissingInputFile { path: PathBuf },

    #[error("Unsupported mode: {mode} (expected tree or flow)")]
    UnsupportedMode { mode: String },

    #[error("Unsupported format: {format} (expected mermaid or dot)")]
    UnsupportedFormat { format: String },

    #[error("Renderer '{program}' not found on PATH")]
    RendererUnavailable { program: String },

    #[error("Renderer '{program}' failed: {detail}")]
    RendererFailed { program: String, detail: String },

    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl DiagramError {
    /// Create an invalid node id error
    pub fn invalid_node_id(token: impl Into<String>, line: usize) -> Self {
        Self::InvalidNodeId {
            token: token.into(),
            line,
        }
    }

    /// Create a malformed edge line error
    pub fn malformed_edge(text: impl Into<String>, line: usize) -> Self {
        Self::MalformedEdgeLine {
            text: text.into(),
            line,
        }
    }

    /// Create a renderer failure error
    pub fn renderer_failed(program: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::RendererFailed {
            program: program.into(),
            detail: detail.into(),
        }
    }

    /// Attach a line number to errors raised before the line was known
    pub(crate) fn at_line(self, line: usize) -> Self {
        match self {
            Self::InvalidNodeId { token, .. } => Self::InvalidNodeId { token, line },
            Self::MalformedEdgeLine { text, .. } => Self::MalformedEdgeLine { text, line },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_node_id() {
        let error = DiagramError::invalid_node_id("a b[Label]", 3);
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Invalid node id"));
        assert!(error_msg.contains("a b[Label]"));
        assert!(error_msg.contains("line 3"));
    }

    #[test]
    fn test_malformed_edge() {
        let error = DiagramError::malformed_edge("a ->", 7);
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Malformed edge line 7"));
        assert!(error_msg.contains("a ->"));
    }

    #[test]
    fn test_at_line_rewrites_position() {
        let error = DiagramError::invalid_node_id("x y", 0).at_line(12);
        assert!(matches!(error, DiagramError::InvalidNodeId { line: 12, .. }));

        let untouched = DiagramError::NoInputProvided.at_line(4);
        assert!(matches!(untouched, DiagramError::NoInputProvided));
    }

    #[test]
    fn test_missing_input_file() {
        let error = DiagramError::MissingInputFile {
            path: PathBuf::from("/nope/steps.txt"),
        };
        assert!(error.to_string().contains("/nope/steps.txt"));
    }

    #[test]
    fn test_renderer_failed() {
        let error = DiagramError::renderer_failed("dot", "exit status 1");
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Renderer 'dot' failed"));
        assert!(error_msg.contains("exit status 1"));
    }

    #[test]
    fn test_io_error_conversion() {
        use std::io;
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let error: DiagramError = io_err.into();
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("IO error"));
        assert!(error_msg.contains("denied"));
    }
}
