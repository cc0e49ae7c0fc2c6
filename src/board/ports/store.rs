//! Store port publishing the current board snapshot.

use crate::board::domain::{
    Board, BoardChange, BoardDomainError, Column, ColumnId, InsertPosition, Noop, RemovedTask,
    Task, TaskId,
};
use std::sync::Arc;

/// Result of a store operation that may do nothing.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOutcome {
    /// A new snapshot was published.
    Applied,
    /// The published snapshot is unchanged.
    Unchanged(Noop),
}

impl StoreOutcome {
    /// Returns `true` when a new snapshot was published.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Ordered collection store contract.
///
/// Implementors only hold and publish snapshots. Every mutation is computed
/// on a private copy by the provided methods and published in one step, so a
/// reader holding a snapshot never observes a half-applied move.
pub trait BoardStore {
    /// Returns the currently published board.
    fn snapshot(&self) -> Arc<Board>;

    /// Replaces the published board.
    fn publish(&mut self, board: Board);

    /// Publishes a produced board, or reports why nothing changed.
    fn publish_change(&mut self, change: BoardChange<Board>) -> StoreOutcome {
        match change {
            BoardChange::Changed(board) => {
                self.publish(board);
                StoreOutcome::Applied
            }
            BoardChange::Unchanged(reason) => StoreOutcome::Unchanged(reason),
        }
    }

    /// Moves a task between or within columns.
    fn move_task(
        &mut self,
        task_id: &TaskId,
        source: &ColumnId,
        target: &ColumnId,
        position: &InsertPosition,
    ) -> StoreOutcome {
        let change = self.snapshot().move_task(task_id, source, target, position);
        self.publish_change(change)
    }

    /// Moves a column to the position of `target`.
    fn move_column(&mut self, column_id: &ColumnId, target: &ColumnId) -> StoreOutcome {
        let change = self.snapshot().move_column(column_id, target);
        self.publish_change(change)
    }

    /// Removes a task, returning it with its former location.
    ///
    /// Returns `None` when the task is not on the board.
    fn remove_task(&mut self, task_id: &TaskId) -> Option<RemovedTask> {
        let (board, removed) = self.snapshot().remove_task(task_id).changed()?;
        self.publish(board);
        Some(removed)
    }

    /// Inserts a task into a column at `at_index`, clamped to the column length.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError`] when the column is unknown or the task id
    /// is already on the board.
    fn insert_task(
        &mut self,
        column_id: &ColumnId,
        task: Task,
        at_index: usize,
    ) -> Result<(), BoardDomainError> {
        let board = self.snapshot().insert_task(column_id, task, at_index)?;
        self.publish(board);
        Ok(())
    }

    /// Replaces a task in place.
    fn replace_task(&mut self, task: Task) -> StoreOutcome {
        let change = self.snapshot().replace_task(task);
        self.publish_change(change)
    }

    /// Removes a column with its tasks.
    ///
    /// Returns `None` when the column is not on the board.
    fn remove_column(&mut self, column_id: &ColumnId) -> Option<Column> {
        let (board, column) = self.snapshot().remove_column(column_id).changed()?;
        self.publish(board);
        Some(column)
    }
}
