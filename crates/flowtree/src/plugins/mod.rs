//! Input plugins
//!
//! Each plugin turns one kind of input into a database that lowers to the
//! shared diagram model: `flow` for entry lists and flow specs, `tree` for
//! directory scans.

pub mod flow;
pub mod tree;

pub use flow::*;
pub use tree::*;
