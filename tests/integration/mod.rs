//! Integration tests for num.
//!
//! These tests drive the library API and the `num` binary end to end.

pub mod binary_tests;
pub mod cli_tests;
pub mod pipeline_tests;
