//! Error types for seed input and rule parsing.
//!
//! Simulation itself is total; only text crossing into the engine can fail.

use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SeedError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("X"),
            Axis::Y => f.write_str("Y"),
        }
    }
}

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Improperly formatted input '{line}'")]
    Malformed { line: String },

    #[error("Improperly formatted input '{token}'")]
    InvalidToken { token: String },

    #[error("{axis} value '{token}' is outside the range of acceptable values")]
    OutOfRange { axis: Axis, token: String },

    #[error("Expected '#Life 1.06' header, found '{found}'")]
    MissingHeader { found: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleParseError {
    #[error("Rule '{0}' is not in B<digits>/S<digits> form")]
    Syntax(String),

    #[error("Invalid neighbour count '{0}' in rule")]
    Count(char),
}
