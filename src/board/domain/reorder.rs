//! Hover resolution: decides how a drag-over event reorders the board.
//!
//! Resolution is pure. It reads the active session and the current board and
//! returns the mutation to apply, or the reason no mutation should happen.
//! Each applied task move relocates the session's container, so callers must
//! feed the destination back into the tracker before resolving the next
//! hover.

use super::{Board, ColumnId, DragSession, InsertPosition, Noop, TaskId};

/// Drop target under the pointer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HoverTarget {
    /// Column whose container or card is hovered.
    pub column_id: ColumnId,
    /// Card under the pointer; `None` for the column background.
    pub task_id: Option<TaskId>,
}

impl HoverTarget {
    /// Hovering a column's empty area or header.
    #[must_use]
    pub const fn column(column_id: ColumnId) -> Self {
        Self {
            column_id,
            task_id: None,
        }
    }

    /// Hovering a specific card.
    #[must_use]
    pub const fn task(column_id: ColumnId, task_id: TaskId) -> Self {
        Self {
            column_id,
            task_id: Some(task_id),
        }
    }
}

/// Task relocation chosen by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskMove {
    /// Dragged task.
    pub task_id: TaskId,
    /// Column the session believes holds the task.
    pub from: ColumnId,
    /// Destination column.
    pub to: ColumnId,
    /// Placement within the destination.
    pub position: InsertPosition,
}

/// Column relocation chosen by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnMove {
    /// Dragged column.
    pub column_id: ColumnId,
    /// Column whose position the dragged column takes.
    pub target: ColumnId,
}

/// Decision for a single hover event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// Relocate the dragged task.
    MoveTask(TaskMove),
    /// Relocate the dragged column.
    MoveColumn(ColumnMove),
    /// Leave the board alone.
    Skip(Noop),
}

/// Resolves a hover event against the active session.
#[must_use]
pub fn resolve(session: Option<&DragSession>, board: &Board, target: &HoverTarget) -> Resolution {
    match session {
        None => Resolution::Skip(Noop::NoActiveDrag),
        Some(DragSession::Task { task_id, container }) => {
            resolve_task(task_id, container, board, target)
        }
        Some(DragSession::Column { column_id }) => resolve_column(column_id, board, target),
    }
}

fn resolve_task(
    task_id: &TaskId,
    container: &ColumnId,
    board: &Board,
    target: &HoverTarget,
) -> Resolution {
    if target.task_id.as_ref() == Some(task_id) {
        return Resolution::Skip(Noop::SelfHover);
    }
    let Some(column) = board.column(&target.column_id) else {
        return Resolution::Skip(Noop::UnknownColumn(target.column_id.clone()));
    };

    let position = match &target.task_id {
        None if column.is_empty() => InsertPosition::End,
        None if column.id() == container || column.contains(task_id) => {
            return Resolution::Skip(Noop::AlreadyInColumn);
        }
        None => InsertPosition::End,
        Some(anchor) => match column.position_of(anchor) {
            None => InsertPosition::End,
            Some(anchor_index) if column.id() == container => {
                // Dragging forward lands behind the anchor, backward in front.
                match column.position_of(task_id) {
                    Some(current) if current <= anchor_index => {
                        InsertPosition::After(anchor.clone())
                    }
                    _ => InsertPosition::Before(anchor.clone()),
                }
            }
            Some(_) => InsertPosition::Before(anchor.clone()),
        },
    };

    Resolution::MoveTask(TaskMove {
        task_id: task_id.clone(),
        from: container.clone(),
        to: target.column_id.clone(),
        position,
    })
}

fn resolve_column(column_id: &ColumnId, board: &Board, target: &HoverTarget) -> Resolution {
    if &target.column_id == column_id {
        return Resolution::Skip(Noop::SameColumn);
    }
    if board.column(&target.column_id).is_none() {
        return Resolution::Skip(Noop::UnknownColumn(target.column_id.clone()));
    }
    Resolution::MoveColumn(ColumnMove {
        column_id: column_id.clone(),
        target: target.column_id.clone(),
    })
}
