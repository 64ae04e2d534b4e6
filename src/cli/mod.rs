//! CLI module for argument parsing and input selection.
//!
//! This module provides zero-dependency command line argument parsing
//! and the token sources the command line can select.

pub mod args;
pub mod input;
