//! Results of board mutations that may legitimately do nothing.

use super::{ColumnId, TaskId};
use std::fmt;

/// Reason a mutation or hover resolution left the board untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Noop {
    /// No drag session is published yet, or none is in progress.
    NoActiveDrag,
    /// The dragged task is hovering over itself.
    SelfHover,
    /// The hover carries no anchor and the task already lives in the column.
    AlreadyInColumn,
    /// A column is hovering over itself.
    SameColumn,
    /// A referenced column is not on the board.
    UnknownColumn(ColumnId),
    /// The task is not in the column it was expected in.
    UnknownTask(TaskId),
    /// The move would leave the task where it already is.
    SamePosition,
    /// The replacement value equals the current one.
    Identical,
}

impl Noop {
    /// Returns a stable label for structured logging.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoActiveDrag => "no_active_drag",
            Self::SelfHover => "self_hover",
            Self::AlreadyInColumn => "already_in_column",
            Self::SameColumn => "same_column",
            Self::UnknownColumn(_) => "unknown_column",
            Self::UnknownTask(_) => "unknown_task",
            Self::SamePosition => "same_position",
            Self::Identical => "identical",
        }
    }
}

impl fmt::Display for Noop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownColumn(id) => write!(f, "unknown column {id}"),
            Self::UnknownTask(id) => write!(f, "task {id} not found in expected column"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Outcome of a copy-producing board operation.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardChange<T> {
    /// A new value was produced.
    Changed(T),
    /// Nothing changed; the original value is still current.
    Unchanged(Noop),
}

impl<T> BoardChange<T> {
    /// Returns the produced value, discarding the no-op reason.
    pub fn changed(self) -> Option<T> {
        match self {
            Self::Changed(value) => Some(value),
            Self::Unchanged(_) => None,
        }
    }

    /// Returns `true` when a new value was produced.
    #[must_use]
    pub const fn is_changed(&self) -> bool {
        matches!(self, Self::Changed(_))
    }
}
