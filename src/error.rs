//! Data-integrity errors raised while loading records and facilities

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DataError {
    #[error("unknown scope '{0}' (expected Scope 1, Scope 2 or Scope 3)")]
    UnknownScope(String),

    #[error("unknown GHG type '{0}' (expected CO₂, CH₄ or N₂O)")]
    UnknownGhgType(String),

    #[error("invalid emissions value '{0}' (must be a non-negative number)")]
    InvalidEmissions(String),

    #[error("invalid reporting period '{0}' (expected fixed-width 'YYYY Qn')")]
    InvalidPeriod(String),

    #[error("invalid {axis} coordinate '{value}'")]
    InvalidCoordinate { axis: &'static str, value: String },

    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("expected {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },
}
