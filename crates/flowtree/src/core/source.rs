//! Line sources
//!
//! The flow builder only ever sees an ordered list of raw lines. Where they
//! came from (command-line values, a file, an interactive prompt, a pipe) is
//! decided here.

use std::fs;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::error::{DiagramError, DiagramResult};

/// A producer of raw input lines
pub trait LineSource {
    /// Read every line this source has to offer
    fn read_lines(&mut self) -> DiagramResult<Vec<String>>;

    /// Short human-readable description for logs
    fn describe(&self) -> String;
}

/// Lines given directly, e.g. repeated command-line flags
#[derive(Debug, Clone, Default)]
pub struct ExplicitLines {
    lines: Vec<String>,
}

impl ExplicitLines {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

impl LineSource for ExplicitLines {
    fn read_lines(&mut self) -> DiagramResult<Vec<String>> {
        Ok(self.lines.clone())
    }

    fn describe(&self) -> String {
        format!("{} explicit line(s)", self.lines.len())
    }
}

/// Lines read from a text file
#[derive(Debug, Clone)]
pub struct FileLines {
    path: PathBuf,
}

impl FileLines {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSource for FileLines {
    fn read_lines(&mut self) -> DiagramResult<Vec<String>> {
        if !self.path.exists() {
            return Err(DiagramError::MissingInputFile {
                path: self.path.clone(),
            });
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(content.lines().map(str::to_string).collect())
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Prompted line-by-line input; an empty line or EOF ends the list
pub struct InteractiveLines<R, W> {
    reader: R,
    prompt: W,
}

impl<R: BufRead, W: Write> InteractiveLines<R, W> {
    pub fn new(reader: R, prompt: W) -> Self {
        Self { reader, prompt }
    }
}

impl InteractiveLines<BufReader<std::io::Stdin>, std::io::Stderr> {
    /// Prompt on stderr, read from stdin
    pub fn stdio() -> Self {
        Self::new(BufReader::new(std::io::stdin()), std::io::stderr())
    }
}

impl<R: BufRead, W: Write> LineSource for InteractiveLines<R, W> {
    fn read_lines(&mut self) -> DiagramResult<Vec<String>> {
        writeln!(
            self.prompt,
            "Enter one step per line (empty line to finish):"
        )?;

        let mut lines = Vec::new();
        loop {
            write!(self.prompt, "{}> ", lines.len() + 1)?;
            self.prompt.flush()?;

            let mut buf = String::new();
            if self.reader.read_line(&mut buf)? == 0 {
                break;
            }
            let line = buf.trim_end_matches(['\n', '\r']);
            if line.trim().is_empty() {
                break;
            }
            trace!(line = %line, "Read interactive line");
            lines.push(line.to_string());
        }

        debug!(line_count = lines.len(), "Interactive input finished");
        Ok(lines)
    }

    fn describe(&self) -> String {
        "interactive prompt".to_string()
    }
}

/// Every line of a non-interactive reader such as piped stdin
pub struct PipedLines<R> {
    reader: R,
}

impl<R: Read> PipedLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl PipedLines<std::io::Stdin> {
    pub fn stdin() -> Self {
        Self::new(std::io::stdin())
    }
}

impl<R: Read> LineSource for PipedLines<R> {
    fn read_lines(&mut self) -> DiagramResult<Vec<String>> {
        let mut content = String::new();
        self.reader.read_to_string(&mut content)?;
        Ok(content.lines().map(str::to_string).collect())
    }

    fn describe(&self) -> String {
        "piped input".to_string()
    }
}

/// Concatenate the lines of every source, in order
pub fn collect_lines(sources: &mut [Box<dyn LineSource + '_>]) -> DiagramResult<Vec<String>> {
    let mut lines = Vec::new();
    for source in sources.iter_mut() {
        let chunk = source.read_lines()?;
        debug!(source = %source.describe(), line_count = chunk.len(), "Collected lines");
        lines.extend(chunk);
    }
    Ok(lines)
}
