//! Core abstractions for diagram generation
//!
//! This module defines the shared model, the traits every input mode and
//! output format implements, and the ambient pieces (errors, logging, line
//! sources) used across the crate.

mod database;
mod diagram;
mod error;
pub mod logging;
mod parser;
mod renderer;
mod source;
mod text;
mod types;

pub use database::*;
pub use diagram::*;
pub use error::*;
pub use logging::*;
pub use parser::*;
pub use renderer::*;
pub use source::*;
pub use text::*;
pub use types::*;
