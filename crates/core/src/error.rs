//! Structural error model.
//!
//! Invalid user input is never an error at this level: validation failures
//! are data. These errors cover **structural misuse** only — addressing a
//! field or repeatable-section index that does not exist, or a rule set
//! that fails to settle. They indicate a caller bug and fail loudly.

use thiserror::Error;

/// Result type for structural operations.
pub type StructureResult<T> = Result<T, StructureError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// A field name was not declared on the group.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// An index into a repeatable section was out of range.
    #[error("index {index} out of range (section has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A cascade of conditional rules did not reach a fixed point.
    #[error("conditional rules did not settle after {0} passes")]
    CascadeDidNotSettle(usize),
}
