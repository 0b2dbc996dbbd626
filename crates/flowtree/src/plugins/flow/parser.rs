//! Flow parser implementation
//!
//! Turns tokenized lines into a [`FlowDatabase`]. A collection containing any
//! `->` is parsed as a flow spec; otherwise the lines become a linear chain of
//! entries. The first malformed line aborts the whole build.

use anyhow::Result;
use tracing::{debug, info, span, trace, warn, Level};

use super::database::{FlowDatabase, FlowNode};
use super::node_expr::NodeExprParser;
use super::splitter::split_targets;
use super::tokenizer::{classify, tokenize, InputKind, SourceLine, EDGE_MARKER};
use crate::core::{Database, DiagramError, DiagramResult, Parser};

/// Separator between targets and the edge label
const LABEL_SEPARATOR: char = '|';

/// Flow parser implementation
pub struct FlowParser {
    nodes: NodeExprParser,
}

impl FlowParser {
    pub fn new() -> Self {
        Self {
            nodes: NodeExprParser::new(),
        }
    }

    /// Parse raw lines into `database` and assign internal ids.
    ///
    /// Fails with [`DiagramError::NoInputProvided`] when no usable line is left
    /// after dropping blanks and comments.
    pub fn parse_lines<S: AsRef<str>>(
        &self,
        lines: &[S],
        database: &mut FlowDatabase,
    ) -> DiagramResult<InputKind> {
        let parse_span = span!(Level::INFO, "parse_flow", raw_lines = lines.len());
        let _enter = parse_span.enter();

        let tokens = tokenize(lines);
        if tokens.is_empty() {
            return Err(DiagramError::NoInputProvided);
        }

        let kind = classify(&tokens);
        debug!(usable_lines = tokens.len(), kind = ?kind, "Classified input");

        match kind {
            InputKind::FlowSpec => {
                for line in &tokens {
                    self.parse_line(line, database)?;
                }
            }
            InputKind::Entries => build_entry_chain(&tokens, database),
        }

        database.assign_internal_ids();
        info!(
            node_count = database.node_count(),
            edge_count = database.edge_count(),
            "Flow parsed"
        );
        Ok(kind)
    }

    /// Parse one flow spec line, edge or node-only
    pub fn parse_line(&self, line: &SourceLine, database: &mut FlowDatabase) -> DiagramResult<()> {
        trace!(line = line.number, text = %line.text, "Parsing line");
        let result = if line.text.contains(EDGE_MARKER) {
            self.parse_edge_line(&line.text, database)
        } else {
            self.parse_node_line(&line.text, database)
        };
        result.map_err(|err| err.at_line(line.number))
    }

    /// `LEFT -> RIGHT[| LABEL]`; one edge per top-level target
    pub fn parse_edge_line(&self, text: &str, database: &mut FlowDatabase) -> DiagramResult<()> {
        let (left, right) = text
            .split_once(EDGE_MARKER)
            .ok_or_else(|| DiagramError::malformed_edge(text, 0))?;
        let left = left.trim();
        let right = right.trim();
        if left.is_empty() || right.is_empty() {
            return Err(DiagramError::malformed_edge(text, 0));
        }

        let (targets, label) = match right.split_once(LABEL_SEPARATOR) {
            Some((targets, label)) => {
                let label = label.trim();
                (targets.trim(), (!label.is_empty()).then_some(label))
            }
            None => (right, None),
        };

        let source = self.nodes.parse_expr(left)?;
        database.register(&source.id, &source.label, source.shape)?;

        let targets = split_targets(targets);
        if targets.is_empty() {
            warn!(text = %text, "Edge line has no targets");
        }

        for token in &targets {
            let target = self.nodes.parse_expr(token)?;
            database.register(&target.id, &target.label, target.shape)?;
            database.connect(&source.id, &target.id, label);
        }
        Ok(())
    }

    /// Node-only declaration: colon form or any node token
    pub fn parse_node_line(&self, text: &str, database: &mut FlowDatabase) -> DiagramResult<()> {
        let node = self.nodes.parse_decl(text)?;
        database.register(&node.id, &node.label, node.shape)?;
        Ok(())
    }
}

impl Default for FlowParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser<FlowDatabase> for FlowParser {
    fn parse(&self, input: &str, database: &mut FlowDatabase) -> Result<()> {
        let lines: Vec<&str> = input.lines().collect();
        self.parse_lines(&lines, database)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "flow"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn can_parse(&self, input: &str) -> bool {
        input.lines().any(|line| line.contains(EDGE_MARKER))
    }
}

/// One box node per entry, chained in order without edge labels.
///
/// Entry text is display text only; it is never validated as an id and
/// repeated entries stay separate nodes.
pub fn build_entry_chain(entries: &[SourceLine], database: &mut FlowDatabase) {
    let mut previous: Option<String> = None;
    for (index, entry) in entries.iter().enumerate() {
        let id = format!("entry{}", index);
        database.insert_node(FlowNode::with_label(&id, &entry.text));
        if let Some(prev) = previous.take() {
            database.connect(&prev, &id, None);
        }
        previous = Some(id);
    }
    debug!(entry_count = entries.len(), "Entry chain built");
}
