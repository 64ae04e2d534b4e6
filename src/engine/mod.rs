//! Execution engine.
//!
//! Runs tokens through the formatter and writes the output lines.

pub mod pipeline;

pub use pipeline::{format_line, run, RunSummary};
