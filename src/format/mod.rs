//! Value formatting.
//!
//! Literal parsing, unit conversion, printf rendering and the token
//! formatter that ties them together.

pub mod convert;
pub mod literal;
pub mod printf;
pub mod template;
pub mod token;

pub use convert::Precision;
pub use printf::Value;
pub use template::{Selector, Template};
pub use token::{format_chars, format_token, FormatOptions};
