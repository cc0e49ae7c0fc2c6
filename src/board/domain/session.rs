//! Drag session values and the tracker holding the single active one.

use super::{BoardDomainError, ColumnId, SessionError, TaskId};
use serde::{Deserialize, Serialize};

/// Kind of item a gesture picked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragKind {
    /// A task card.
    Task,
    /// A whole column.
    Column,
}

/// The item being dragged during an active gesture.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DragSession {
    /// A task card travelling between or within columns.
    Task {
        /// Dragged task.
        task_id: TaskId,
        /// Column currently holding the task; follows the task across moves.
        container: ColumnId,
    },
    /// A column being reordered.
    Column {
        /// Dragged column.
        column_id: ColumnId,
    },
}

impl DragSession {
    /// Creates a task drag starting in `container`.
    #[must_use]
    pub const fn task(task_id: TaskId, container: ColumnId) -> Self {
        Self::Task { task_id, container }
    }

    /// Creates a column drag.
    #[must_use]
    pub const fn column(column_id: ColumnId) -> Self {
        Self::Column { column_id }
    }

    /// Builds a session from the raw values a view layer reports.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyId`] for blank identifiers and
    /// [`BoardDomainError::MissingSourceColumn`] for a task drag without a
    /// source column.
    pub fn from_parts(
        kind: DragKind,
        id: &str,
        source_column: Option<&str>,
    ) -> Result<Self, BoardDomainError> {
        match kind {
            DragKind::Task => {
                let task_id = TaskId::new(id)?;
                let source =
                    source_column.ok_or_else(|| BoardDomainError::MissingSourceColumn(id.to_owned()))?;
                Ok(Self::task(task_id, ColumnId::new(source)?))
            }
            DragKind::Column => Ok(Self::column(ColumnId::new(id)?)),
        }
    }

    /// Returns the kind of item being dragged.
    #[must_use]
    pub const fn kind(&self) -> DragKind {
        match self {
            Self::Task { .. } => DragKind::Task,
            Self::Column { .. } => DragKind::Column,
        }
    }

    /// Returns `true` when this session drags the given task.
    #[must_use]
    pub fn is_dragging_task(&self, id: &TaskId) -> bool {
        matches!(self, Self::Task { task_id, .. } if task_id == id)
    }

    /// Returns `true` when this session drags the given column.
    #[must_use]
    pub fn is_dragging_column(&self, id: &ColumnId) -> bool {
        matches!(self, Self::Column { column_id } if column_id == id)
    }
}

/// Holds zero or one drag session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionTracker {
    session: Option<DragSession>,
}

impl SessionTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self { session: None }
    }

    /// Installs a session, returning any session it displaced.
    ///
    /// The displaced session gets no cleanup of its own.
    pub const fn begin(&mut self, session: DragSession) -> Option<DragSession> {
        self.session.replace(session)
    }

    /// Returns the active session, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Returns the container of the task when that task is being dragged.
    #[must_use]
    pub fn current_container_for(&self, id: &TaskId) -> Option<&ColumnId> {
        match &self.session {
            Some(DragSession::Task { task_id, container }) if task_id == id => Some(container),
            _ => None,
        }
    }

    /// Records the column that now holds the dragged task.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoActiveSession`] with no session, and
    /// [`SessionError::NotATaskDrag`] while a column is being dragged.
    pub fn update_container(&mut self, column_id: ColumnId) -> Result<(), SessionError> {
        match &mut self.session {
            Some(DragSession::Task { container, .. }) => {
                *container = column_id;
                Ok(())
            }
            Some(DragSession::Column { column_id: dragged }) => {
                Err(SessionError::NotATaskDrag(dragged.clone()))
            }
            None => Err(SessionError::NoActiveSession),
        }
    }

    /// Clears the session. Calling it again is harmless.
    pub const fn end(&mut self) -> Option<DragSession> {
        self.session.take()
    }
}
