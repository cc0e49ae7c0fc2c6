//! Error types for board domain validation and parsing.

use super::{ColumnId, TaskId};
use thiserror::Error;

/// Errors returned while constructing or mutating board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// An identifier was empty after trimming.
    #[error("identifier must not be empty")]
    EmptyId,

    /// A task title was empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task identifier is already present somewhere on the board.
    #[error("duplicate task identifier: {0}")]
    DuplicateTaskId(TaskId),

    /// The column identifier is already present on the board.
    #[error("duplicate column identifier: {0}")]
    DuplicateColumnId(ColumnId),

    /// The referenced column does not exist.
    #[error("unknown column: {0}")]
    UnknownColumn(ColumnId),

    /// A task drag was requested without naming the column it starts in.
    #[error("task drag for {0} has no source column")]
    MissingSourceColumn(String),
}

/// Error returned while parsing tag colours from external input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown tag colour: {0}")]
pub struct ParseTagColorError(pub String);

/// Errors returned by the drag session tracker.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// No drag session is active.
    #[error("no drag session is active")]
    NoActiveSession,

    /// The active session drags a column, which has no container.
    #[error("column drag {0} has no task container")]
    NotATaskDrag(ColumnId),
}
