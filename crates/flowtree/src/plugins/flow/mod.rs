//! Flow plugin
//!
//! Parses entry lists and the line-oriented flow spec language into a
//! [`FlowDatabase`].

mod database;
mod node_expr;
mod parser;
mod splitter;
mod tokenizer;

pub use database::*;
pub use node_expr::*;
pub use parser::*;
pub use splitter::*;
pub use tokenizer::*;

use crate::core::DiagramResult;

/// Build a flow graph from raw lines in one call
pub fn build_flow<S: AsRef<str>>(lines: &[S]) -> DiagramResult<FlowDatabase> {
    let mut database = FlowDatabase::new();
    FlowParser::new().parse_lines(lines, &mut database)?;
    Ok(database)
}
