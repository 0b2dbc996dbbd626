//! Node expression parser using chumsky
//!
//! Parses a single node token such as `check{Valid?}` into its id, label and
//! shape. Shapes are tried from the most to the least specific delimiter:
//! `((..))`, `([..])`, `{..}`, `[..]`, then a bare id.

use chumsky::prelude::*;

use crate::core::{DiagramError, DiagramResult, NodeShape};

/// A parsed node token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeExpr {
    pub id: String,
    /// Trimmed label; empty when the token carried none
    pub label: String,
    /// `None` for a bare id
    pub shape: Option<NodeShape>,
}

impl NodeExpr {
    fn shaped(id: String, label: String, shape: NodeShape) -> Self {
        Self {
            id,
            label: label.trim().to_string(),
            shape: Some(shape),
        }
    }
}

/// Returns true if `id` matches `[A-Za-z0-9_.-]+`
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(is_id_char)
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}

/// Chumsky-based node expression parser
pub struct NodeExprParser;

impl NodeExprParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a node token appearing in an edge line
    pub fn parse_expr(&self, token: &str) -> DiagramResult<NodeExpr> {
        let token = token.trim();
        Self::expr_parser()
            .then_ignore(end())
            .parse(token)
            .into_result()
            .map_err(|_| DiagramError::invalid_node_id(token, 0))
    }

    /// Parse a node-only line: the colon form first, then any node token
    pub fn parse_decl(&self, line: &str) -> DiagramResult<NodeExpr> {
        let line = line.trim();
        Self::colon_parser()
            .or(Self::expr_parser())
            .then_ignore(end())
            .parse(line)
            .into_result()
            .map_err(|_| DiagramError::invalid_node_id(line, 0))
    }

    fn id_parser<'src>() -> impl Parser<'src, &'src str, String> + Clone {
        any()
            .filter(|c: &char| is_id_char(*c))
            .repeated()
            .at_least(1)
            .collect::<String>()
    }

    /// `ID` + `open` + label + `close`, where `close` must end the token
    fn wrapped_parser<'src>(
        open: &'static str,
        close: &'static str,
        shape: NodeShape,
    ) -> impl Parser<'src, &'src str, NodeExpr> + Clone {
        Self::id_parser()
            .then_ignore(just(open))
            .then(
                any()
                    .and_is(just(close).then(end()).not())
                    .repeated()
                    .collect::<String>(),
            )
            .then_ignore(just(close))
            .then_ignore(end())
            .map(move |(id, label)| NodeExpr::shaped(id, label, shape))
    }

    fn expr_parser<'src>() -> impl Parser<'src, &'src str, NodeExpr> + Clone {
        // a((label)) - Circle
        let circle = Self::wrapped_parser("((", "))", NodeShape::Circle);

        // a([label]) - Stadium
        let stadium = Self::wrapped_parser("([", "])", NodeShape::Stadium);

        // a{label} - Diamond
        let diamond = Self::wrapped_parser("{", "}", NodeShape::Diamond);

        // a[label] - Box
        let boxed = Self::wrapped_parser("[", "]", NodeShape::Box);

        let bare = Self::id_parser().then_ignore(end()).map(|id| NodeExpr {
            id,
            label: String::new(),
            shape: None,
        });

        circle.or(stadium).or(diamond).or(boxed).or(bare)
    }

    /// `ID : LABEL`
    fn colon_parser<'src>() -> impl Parser<'src, &'src str, NodeExpr> + Clone {
        Self::id_parser()
            .then_ignore(one_of(" \t").repeated())
            .then_ignore(just(':'))
            .then(any().repeated().collect::<String>())
            .then_ignore(end())
            .map(|(id, label)| NodeExpr::shaped(id, label, NodeShape::Box))
    }
}

impl Default for NodeExprParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a node token appearing in an edge line
pub fn parse_node_expr(token: &str) -> DiagramResult<NodeExpr> {
    NodeExprParser::new().parse_expr(token)
}

/// Parse a node-only declaration line
pub fn parse_node_decl(line: &str) -> DiagramResult<NodeExpr> {
    NodeExprParser::new().parse_decl(line)
}
