//! Core parser trait
//!
//! A parser consumes raw input text and fills a database. Parsers hold no
//! graph state of their own; a fresh database is used per build.

use anyhow::Result;

/// Core trait for diagram parsers
pub trait Parser<D>: Send + Sync {
    /// Parse `input` into `database`, aborting on the first error
    fn parse(&self, input: &str, database: &mut D) -> Result<()>;

    /// Get the name of this parser
    fn name(&self) -> &'static str;

    /// Get the version of this parser
    fn version(&self) -> &'static str;

    /// Check whether the input looks like something this parser handles
    fn can_parse(&self, input: &str) -> bool;
}
