//! Error types for num.

use std::io;

use thiserror::Error;

/// Why an integer literal was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralError {
    Empty,
    InvalidDigit,
    MisplacedUnderscore,
    OutOfRange,
}

impl std::fmt::Display for LiteralError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LiteralError::Empty => write!(f, "empty literal"),
            LiteralError::InvalidDigit => write!(f, "invalid digit"),
            LiteralError::MisplacedUnderscore => write!(f, "misplaced underscore"),
            LiteralError::OutOfRange => write!(f, "value out of range"),
        }
    }
}

#[derive(Debug, Error)]
pub enum NumError {
    /// A token that is not a valid integer literal
    #[error("cannot parse {literal:?}: {reason}")]
    Parse { literal: String, reason: LiteralError },

    #[error("{0}")]
    InvalidArgument(String),

    #[error("cannot open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("error reading {context}: {source}")]
    Read {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Write(#[source] io::Error),
}

impl NumError {
    /// Per-token errors; the run continues with the next token.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, NumError::Parse { .. })
    }

    /// Errors caused by bad command-line usage rather than bad input.
    pub fn is_usage(&self) -> bool {
        matches!(self, NumError::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, NumError>;
