//! Command-line interface for the flowtree utility
//!
//! Provides a CLI to turn step lists, flow specs and directory trees into
//! Mermaid or Graphviz DOT diagrams.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use crossterm::tty::IsTty;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use flowtree::core::logging::init_logging;
use flowtree::plugins::tree::{ScanOptions, DEFAULT_MAX_DEPTH};
use flowtree::{
    collect_lines, generate_flow, generate_tree, DiagramError, DiagramMode, Direction,
    ExplicitLines,
    FileLines, ImageExporter, InteractiveLines, LineSource, OutputFormat, PipedLines,
    RenderConfig,
};

/// Flowtree - Generate Mermaid and Graphviz diagrams from flows and directory trees
#[derive(Parser)]
#[command(name = "flowtree")]
#[command(about = "Generate Mermaid or Graphviz diagrams from step lists, flow specs and directory trees")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error); defaults to FLOWTREE_LOG_LEVEL, RUST_LOG, then warn
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Set log format (compact|pretty|json); defaults to FLOWTREE_LOG_FORMAT, then compact
    #[arg(long, value_enum, global = true)]
    pub log_format: Option<LogFormat>,
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a diagram from step entries or a flow spec
    Flow(FlowArgs),

    /// Build a diagram of a directory tree
    Tree(TreeArgs),

    /// Show supported output formats
    Formats {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// Inputs for `flowtree flow`
#[derive(Args, Debug, Clone)]
pub struct FlowArgs {
    /// One step of a linear flow (repeatable)
    #[arg(long = "entry", value_name = "TEXT")]
    pub entries: Vec<String>,

    /// File with one step per line
    #[arg(long, value_name = "FILE")]
    pub entries_file: Option<PathBuf>,

    /// One flow spec line, e.g. "a -> b, c | label" (repeatable)
    #[arg(long = "step", value_name = "LINE")]
    pub steps: Vec<String>,

    /// File containing flow spec lines
    #[arg(long, value_name = "FILE")]
    pub spec_file: Option<PathBuf>,

    /// Prompt for steps on the terminal when no other input is given
    #[arg(short, long)]
    pub interactive: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl FlowArgs {
    fn has_entry_input(&self) -> bool {
        !self.entries.is_empty() || self.entries_file.is_some()
    }

    fn has_spec_input(&self) -> bool {
        !self.steps.is_empty() || self.spec_file.is_some()
    }
}

/// Inputs for `flowtree tree`
#[derive(Args, Debug, Clone)]
pub struct TreeArgs {
    /// Directory to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Deepest level to walk (the root is level 0)
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Keep only paths matching this regex
    #[arg(long, value_name = "REGEX")]
    pub include: Option<String>,

    /// Drop paths matching this regex
    #[arg(long, value_name = "REGEX")]
    pub exclude: Option<String>,

    /// Only show directories
    #[arg(long, conflicts_with = "files_only")]
    pub dirs_only: bool,

    /// Only show files
    #[arg(long)]
    pub files_only: bool,

    /// Keep .git, node_modules, dist, build, .next and .cache
    #[arg(long)]
    pub no_default_excludes: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl TreeArgs {
    fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            max_depth: self.max_depth,
            include: self.include.clone(),
            exclude: self.exclude.clone(),
            dirs_only: self.dirs_only,
            files_only: self.files_only,
            default_excludes: !self.no_default_excludes,
        }
    }
}

/// Output options shared by `flow` and `tree`
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format (mermaid|mmd|dot|graphviz)
    #[arg(short, long, default_value = "mermaid")]
    pub format: String,

    /// Diagram title
    #[arg(long)]
    pub title: Option<String>,

    /// Layout direction
    #[arg(long, value_enum, default_value_t = DirectionChoice::Td)]
    pub direction: DirectionChoice,

    /// Write the diagram text to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Render an image with mmdc or dot
    #[arg(long, value_name = "IMAGE")]
    pub render: Option<PathBuf>,
}

impl OutputArgs {
    fn format(&self) -> Result<OutputFormat> {
        Ok(self.format.parse::<OutputFormat>()?)
    }

    fn render_config(&self) -> RenderConfig {
        RenderConfig::new(self.title.clone(), self.direction.into())
    }
}

/// Layout direction choices
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum DirectionChoice {
    /// Top to bottom
    #[default]
    Td,
    /// Left to right
    Lr,
    /// Bottom to top
    Bt,
    /// Right to left
    Rl,
}

impl From<DirectionChoice> for Direction {
    fn from(value: DirectionChoice) -> Self {
        match value {
            DirectionChoice::Td => Direction::TopDown,
            DirectionChoice::Lr => Direction::LeftRight,
            DirectionChoice::Bt => Direction::BottomUp,
            DirectionChoice::Rl => Direction::RightLeft,
        }
    }
}

/// One row of `flowtree formats`
#[derive(Debug, Clone, Serialize)]
pub struct FormatInfo {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub extension: &'static str,
    pub renderer: &'static str,
    pub description: &'static str,
}

/// Supported output formats
pub fn supported_formats() -> Vec<FormatInfo> {
    vec![
        FormatInfo {
            name: "mermaid",
            aliases: &["mmd"],
            extension: OutputFormat::Mermaid.extension(),
            renderer: "mmdc",
            description: "Mermaid flowchart text",
        },
        FormatInfo {
            name: "dot",
            aliases: &["graphviz"],
            extension: OutputFormat::Dot.extension(),
            renderer: "dot",
            description: "Graphviz DOT digraph",
        },
    ]
}

/// Main CLI application
#[derive(Debug, Default)]
pub struct FlowtreeApp {
    verbose: bool,
}

impl FlowtreeApp {
    /// Create a new application instance with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        let log_level = cli.log_level.map(|level| level.as_str());
        let log_format = cli.log_format.map(|format| format.as_str());
        if let Err(e) = init_logging(log_level, log_format) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        self.verbose = cli.verbose;
        if self.verbose {
            eprintln!("flowtree v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Flow(args) => self.flow_command(&args),
            Commands::Tree(args) => self.tree_command(&args),
            Commands::Formats { json } => self.formats_command(json),
        }
    }

    /// Handle the flow command
    fn flow_command(&self, args: &FlowArgs) -> Result<()> {
        let format = args.output.format()?;
        info!(mode = %DiagramMode::Flow, format = %format, "Generating diagram");
        let lines = self.read_flow_lines(args)?;

        if self.verbose {
            eprintln!("Read {} input line(s)", lines.len());
        }

        let text = generate_flow(&lines, format, &args.output.render_config())?;
        self.deliver(&text, format, &args.output)
    }

    /// Handle the tree command
    fn tree_command(&self, args: &TreeArgs) -> Result<()> {
        let format = args.output.format()?;
        info!(mode = %DiagramMode::Tree, format = %format, "Generating diagram");

        if self.verbose {
            eprintln!("Scanning {} (max depth {})", args.root.display(), args.max_depth);
        }

        let text = generate_tree(
            &args.root,
            args.scan_options(),
            format,
            &args.output.render_config(),
        )?;
        self.deliver(&text, format, &args.output)
    }

    /// Handle the formats command
    fn formats_command(&self, json: bool) -> Result<()> {
        let formats = supported_formats();
        if json {
            let listing = serde_json::json!({
                "formats": formats,
                "total": formats.len(),
            });
            println!("{}", serde_json::to_string_pretty(&listing)?);
        } else {
            println!("Supported output formats:");
            for format in &formats {
                println!(
                    "  {:<8} - {} (.{}, rendered by {})",
                    format.name, format.description, format.extension, format.renderer
                );
            }
            println!();
            println!("Total: {} output formats supported", formats.len());
        }
        Ok(())
    }

    /// Collect flow input lines from exactly one family of sources
    pub fn read_flow_lines(&self, args: &FlowArgs) -> Result<Vec<String>> {
        if args.has_entry_input() && args.has_spec_input() {
            return Err(DiagramError::ConflictingInputSources.into());
        }

        let mut sources: Vec<Box<dyn LineSource>> = Vec::new();
        if args.has_entry_input() {
            sources.push(Box::new(ExplicitLines::new(args.entries.clone())));
            if let Some(path) = &args.entries_file {
                sources.push(Box::new(FileLines::new(path)));
            }
        } else if args.has_spec_input() {
            sources.push(Box::new(ExplicitLines::new(args.steps.clone())));
            if let Some(path) = &args.spec_file {
                sources.push(Box::new(FileLines::new(path)));
            }
        } else if args.interactive || io::stdin().is_tty() {
            sources.push(Box::new(InteractiveLines::stdio()));
        } else {
            sources.push(Box::new(PipedLines::stdin()));
        }

        for source in &sources {
            debug!(source = %source.describe(), "Reading flow input");
        }
        Ok(collect_lines(&mut sources)?)
    }

    /// Write the text to a file or stdout, then render an image if asked
    fn deliver(&self, text: &str, format: OutputFormat, output: &OutputArgs) -> Result<()> {
        let content = format!("{}\n", text);

        if let Some(image) = &output.render {
            let exporter = ImageExporter::for_format(format);
            info!(program = %exporter.program(), "Rendering image");
            exporter.export(&content, image, output.output.as_deref())?;
            if self.verbose {
                eprintln!("Rendered {}", image.display());
            }
            return Ok(());
        }

        self.write_output(output.output.as_deref(), &content)
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<&Path>, content: &str) -> Result<()> {
        match output {
            Some(path) => {
                fs::write(path, content)
                    .with_context(|| format!("Failed to write output file '{}'", path.display()))?;
                if self.verbose {
                    eprintln!("Wrote {}", path.display());
                }
            }
            None => {
                print!("{}", content);
                io::stdout().flush()?;
            }
        }
        Ok(())
    }
}
