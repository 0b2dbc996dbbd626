//! Image export through an external renderer
//!
//! Mermaid text goes to `mmdc`, DOT text to `dot`. The diagram text is handed
//! over as a file: the caller's spec path when given, otherwise a temporary
//! file that is removed when the export returns.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::Command;

use tempfile::Builder;
use tracing::{debug, info, span, Level};

use crate::core::{DiagramError, DiagramResult, OutputFormat};

/// Environment override for the Mermaid CLI program
pub const MMDC_ENV: &str = "FLOWTREE_MMDC";
/// Environment override for the Graphviz program
pub const DOT_ENV: &str = "FLOWTREE_DOT";

const DEFAULT_IMAGE_EXTENSION: &str = "png";

/// Runs an external renderer on diagram text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageExporter {
    format: OutputFormat,
    program: String,
}

impl ImageExporter {
    /// `mmdc` or `dot`, unless overridden through the environment
    pub fn for_format(format: OutputFormat) -> Self {
        let (var, default) = match format {
            OutputFormat::Mermaid => (MMDC_ENV, "mmdc"),
            OutputFormat::Dot => (DOT_ENV, "dot"),
        };
        let program = env::var(var)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| default.to_string());
        Self { format, program }
    }

    pub fn with_program(format: OutputFormat, program: impl Into<String>) -> Self {
        Self {
            format,
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// The invocation for a given spec file and image
    pub fn command(&self, spec: &Path, image: &Path) -> Command {
        let mut command = Command::new(&self.program);
        match self.format {
            OutputFormat::Mermaid => {
                command.arg("-i").arg(spec).arg("-o").arg(image);
            }
            OutputFormat::Dot => {
                let extension = image
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .unwrap_or(DEFAULT_IMAGE_EXTENSION);
                command
                    .arg(format!("-T{}", extension))
                    .arg(spec)
                    .arg("-o")
                    .arg(image);
            }
        }
        command
    }

    /// Write `text` to the diagram file and render it into `image`
    pub fn export(&self, text: &str, image: &Path, spec_path: Option<&Path>) -> DiagramResult<()> {
        let export_span = span!(Level::INFO, "export_image", program = %self.program, image = %image.display());
        let _enter = export_span.enter();

        match spec_path {
            Some(spec) => {
                fs::write(spec, text)?;
                self.run(spec, image)
            }
            None => {
                let mut spec = Builder::new()
                    .prefix("flowtree-")
                    .suffix(&format!(".{}", self.format.extension()))
                    .tempfile()?;
                spec.write_all(text.as_bytes())?;
                spec.flush()?;
                debug!(spec = %spec.path().display(), "Wrote temporary spec");
                self.run(spec.path(), image)
            }
        }
    }

    fn run(&self, spec: &Path, image: &Path) -> DiagramResult<()> {
        let output = self.command(spec, image).output().map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                DiagramError::RendererUnavailable {
                    program: self.program.clone(),
                }
            } else {
                DiagramError::from(err)
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = match stderr.trim() {
                "" => output.status.to_string(),
                message => message.to_string(),
            };
            return Err(DiagramError::renderer_failed(&self.program, detail));
        }

        if !image.exists() {
            return Err(DiagramError::renderer_failed(
                &self.program,
                format!("no image written to {}", image.display()),
            ));
        }

        info!(image = %image.display(), "Image rendered");
        Ok(())
    }
}
