//! Common error types used across the domain.
//!
//! One base enum with typed source errors and `#[from]` conversion
//! (no `String` variants). Each layer above defines its own typed
//! errors and converts via `#[from]`.

/// Base error for all domain operations.
#[derive(Debug, thiserror::Error)]
pub enum DomoliteError {
    /// A cursor was read outside an active traversal.
    #[error("cursor error")]
    Cursor(#[from] CursorError),

    /// An introspection request could not be resolved.
    #[error("describe error")]
    Describe(#[from] DescribeError),
}

/// Invalid-state reads on a registry cursor.
///
/// These are programmer-usage errors, not recoverable runtime conditions;
/// the `Iterator` impl on the cursor never produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CursorError {
    /// `current` was called before the first `advance`.
    #[error("cursor read before traversal started")]
    NotStarted,

    /// `current` was called after the traversal ran past the last device.
    #[error("cursor read after traversal was exhausted")]
    Exhausted,
}

/// Failures resolving an introspection request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescribeError {
    /// The requested kind name matches no known device variant.
    #[error("unknown device kind: {0}")]
    UnknownKind(String),
}
