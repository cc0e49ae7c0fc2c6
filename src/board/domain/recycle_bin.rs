//! Deleted tasks awaiting restore or permanent removal.

use super::{ColumnId, RemovedTask, Task, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task that was deleted from the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedTask {
    /// The deleted task.
    pub task: Task,
    /// Column the task was deleted from.
    pub original_column: ColumnId,
    /// Index the task occupied in that column.
    pub original_index: usize,
    /// Deletion timestamp.
    pub deleted_at: DateTime<Utc>,
}

impl DeletedTask {
    /// Records a removed task.
    #[must_use]
    pub fn from_removed(removed: RemovedTask, deleted_at: DateTime<Utc>) -> Self {
        Self {
            task: removed.task,
            original_column: removed.column_id,
            original_index: removed.index,
            deleted_at,
        }
    }
}

/// Most-recent-first list of deleted tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecycleBin {
    entries: Vec<DeletedTask>,
}

impl RecycleBin {
    /// Creates an empty bin.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a deleted task on top of the bin.
    pub fn push(&mut self, entry: DeletedTask) {
        self.entries.insert(0, entry);
    }

    /// Returns the deleted tasks, most recent first.
    #[must_use]
    pub fn entries(&self) -> &[DeletedTask] {
        &self.entries
    }

    /// Returns the number of deleted tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the bin is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a deleted task.
    #[must_use]
    pub fn get(&self, task_id: &TaskId) -> Option<&DeletedTask> {
        self.entries.iter().find(|entry| entry.task.id() == task_id)
    }

    /// Takes a deleted task out of the bin.
    pub fn take(&mut self, task_id: &TaskId) -> Option<DeletedTask> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.task.id() == task_id)?;
        Some(self.entries.remove(index))
    }

    /// Returns `true` when the bin holds the given task.
    #[must_use]
    pub fn contains(&self, task_id: &TaskId) -> bool {
        self.get(task_id).is_some()
    }

    /// Iterates over the deleted tasks themselves.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> + '_ {
        self.entries.iter().map(|entry| &entry.task)
    }
}
