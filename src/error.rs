//! Error types for typed byte-array operations.

/// Errors that can occur when validating values or accessing byte spans.
///
/// Every fallible operation in the crate surfaces one of these; nothing is
/// retried or recovered internally. A failure reported before any mutation
/// leaves the touched value unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BytrError {
    #[error("Offset is outside the bounds of the ByteArray")]
    OutOfBounds,

    #[error("Invalid value for {type_name} (got '{value}')")]
    InvalidValue { type_name: &'static str, value: i64 },

    #[error("Values can not be empty")]
    EmptyValues,
}
