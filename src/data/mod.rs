//! Data module for num
//!
//! Contains the data storage unit table.

pub mod units;

pub use units::{resolve_unit, split_unit, Resolved, Unit};
