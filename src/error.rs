use crate::expression::NodeKind;
use thiserror::Error;

/// Errors raised by the expression tree editor when a caller addresses the tree
/// inconsistently. These are contract violations, not user input problems.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("Index {index} is out of bounds for a condition list of length {len}")]
    InvalidIndex { index: usize, len: usize },

    #[error("Node at index {index} is a {found}, but the operation requires a {expected}")]
    TypeMismatch {
        index: usize,
        expected: NodeKind,
        found: NodeKind,
    },
}

/// Validation state of a color picker's outer input, rendered as inline error text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerError {
    #[error("The color entered is invalid")]
    InvalidColor,
}

/// Errors that can occur when converting a host-provided tree into an `ExpressionTree`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Failed to parse expression JSON: {0}")]
    JsonParseError(String),

    #[error("Group nested inside another group is not supported")]
    NestedGroup,

    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}

/// Errors that can occur while saving or loading a binary tree snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Serialization failed: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("Deserialization failed: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("Could not access snapshot file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
