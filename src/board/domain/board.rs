//! Board aggregate and its copy-producing ordering operations.
//!
//! Every operation reads `self` and returns a new [`Board`]. Columns that an
//! operation does not touch are shared with the original through [`Arc`], so
//! a published board is never modified after the fact and no reader can see
//! a task that is absent from every column.

use super::{BoardChange, BoardDomainError, Column, ColumnIcon, ColumnId, Noop, Task, TaskId};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;
use std::sync::Arc;

/// Where a moved task lands in its destination column.
///
/// Anchors are resolved after the moving task has been taken out of its
/// source column. `Before(anchor)` is the slot the anchor occupies and
/// `After(anchor)` is the slot directly behind it. A missing anchor falls
/// back to the end of the column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InsertPosition {
    /// Append to the end of the column.
    End,
    /// Take the position of the anchor task, pushing it back.
    Before(TaskId),
    /// Land directly behind the anchor task.
    After(TaskId),
}

impl InsertPosition {
    /// Returns the insertion index within `tasks`.
    #[must_use]
    pub fn resolve(&self, tasks: &[Task]) -> usize {
        let anchor_index = |anchor: &TaskId| tasks.iter().position(|task| task.id() == anchor);
        match self {
            Self::End => tasks.len(),
            Self::Before(anchor) => anchor_index(anchor).unwrap_or(tasks.len()),
            Self::After(anchor) => anchor_index(anchor).map_or(tasks.len(), |index| index + 1),
        }
    }
}

/// Column and index currently holding a task.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskLocation {
    /// Owning column.
    pub column_id: ColumnId,
    /// Index within the column.
    pub index: usize,
}

/// Task taken off the board together with where it used to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedTask {
    /// The removed task.
    pub task: Task,
    /// Column that held the task.
    pub column_id: ColumnId,
    /// Index the task occupied.
    pub index: usize,
}

/// Ordered sequence of columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Column>")]
pub struct Board {
    columns: Vec<Arc<Column>>,
}

impl Board {
    /// Creates a board from columns.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateColumnId`] or
    /// [`BoardDomainError::DuplicateTaskId`] when an identifier repeats.
    pub fn new(columns: impl IntoIterator<Item = Column>) -> Result<Self, BoardDomainError> {
        let mut column_ids = HashSet::new();
        let mut task_ids = HashSet::new();
        let mut collected = Vec::new();

        for column in columns {
            if !column_ids.insert(column.id().clone()) {
                return Err(BoardDomainError::DuplicateColumnId(column.id().clone()));
            }
            for task in column.tasks() {
                if !task_ids.insert(task.id().clone()) {
                    return Err(BoardDomainError::DuplicateTaskId(task.id().clone()));
                }
            }
            collected.push(Arc::new(column));
        }

        Ok(Self { columns: collected })
    }

    /// Creates the standard four-column layout with no tasks.
    #[must_use]
    pub fn with_default_columns() -> Self {
        let layout = [
            ("col-1", "To do", "bg-gray-700", ColumnIcon::Todo),
            ("col-2", "In progress", "bg-orange-500", ColumnIcon::Progress),
            ("col-3", "Done", "bg-green-500", ColumnIcon::Done),
            ("col-4", "Routine", "bg-gray-500", ColumnIcon::Manage),
        ];
        let columns = layout
            .into_iter()
            .map(|(id, title, accent, icon)| {
                Arc::new(Column::new(ColumnId::trusted(id), title, accent, icon))
            })
            .collect();
        Self { columns }
    }

    /// Returns the columns in display order.
    pub fn columns(&self) -> impl ExactSizeIterator<Item = &Column> + '_ {
        self.columns.iter().map(AsRef::as_ref)
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` when the board has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Finds a column by identifier.
    #[must_use]
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns().find(|column| column.id() == id)
    }

    /// Returns the display index of a column.
    #[must_use]
    pub fn column_index(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|column| column.id() == id)
    }

    /// Returns the left-most column.
    #[must_use]
    pub fn first_column(&self) -> Option<&Column> {
        self.columns.first().map(AsRef::as_ref)
    }

    /// Finds the column and index holding a task.
    #[must_use]
    pub fn locate_task(&self, task_id: &TaskId) -> Option<TaskLocation> {
        self.columns().find_map(|column| {
            column.position_of(task_id).map(|index| TaskLocation {
                column_id: column.id().clone(),
                index,
            })
        })
    }

    /// Finds a task anywhere on the board.
    #[must_use]
    pub fn find_task(&self, task_id: &TaskId) -> Option<&Task> {
        self.columns()
            .flat_map(Column::tasks)
            .find(|task| task.id() == task_id)
    }

    /// Returns the total number of tasks across all columns.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.columns().map(Column::len).sum()
    }

    /// Returns `true` when both boards hold the very same allocation for a
    /// column.
    #[must_use]
    pub fn shares_column(&self, other: &Self, id: &ColumnId) -> bool {
        match (self.column_arc(id), other.column_arc(id)) {
            (Some(mine), Some(theirs)) => Arc::ptr_eq(mine, theirs),
            _ => false,
        }
    }

    /// Moves a task from `source` into `target` at `position`.
    pub fn move_task(
        &self,
        task_id: &TaskId,
        source: &ColumnId,
        target: &ColumnId,
        position: &InsertPosition,
    ) -> BoardChange<Self> {
        let Some((source_index, source_column)) = self.locate_column(source) else {
            return BoardChange::Unchanged(Noop::UnknownColumn(source.clone()));
        };
        let Some((target_index, target_column)) = self.locate_column(target) else {
            return BoardChange::Unchanged(Noop::UnknownColumn(target.clone()));
        };
        let Some(task_index) = source_column.position_of(task_id) else {
            return BoardChange::Unchanged(Noop::UnknownTask(task_id.clone()));
        };

        let mut source_tasks = source_column.tasks().to_vec();
        let task = source_tasks.remove(task_index);
        let mut columns = self.columns.clone();

        if source_index == target_index {
            let insert_at = position.resolve(&source_tasks);
            if insert_at == task_index {
                return BoardChange::Unchanged(Noop::SamePosition);
            }
            source_tasks.insert(insert_at, task);
            set_column(&mut columns, source_index, source_column.with_task_list(source_tasks));
        } else {
            let mut target_tasks = target_column.tasks().to_vec();
            let insert_at = position.resolve(&target_tasks);
            target_tasks.insert(insert_at, task);
            set_column(&mut columns, source_index, source_column.with_task_list(source_tasks));
            set_column(&mut columns, target_index, target_column.with_task_list(target_tasks));
        }

        BoardChange::Changed(Self { columns })
    }

    /// Moves a column to the position currently held by `target`.
    pub fn move_column(&self, column_id: &ColumnId, target: &ColumnId) -> BoardChange<Self> {
        if column_id == target {
            return BoardChange::Unchanged(Noop::SameColumn);
        }
        let Some(source_index) = self.column_index(column_id) else {
            return BoardChange::Unchanged(Noop::UnknownColumn(column_id.clone()));
        };
        let Some(target_index) = self.column_index(target) else {
            return BoardChange::Unchanged(Noop::UnknownColumn(target.clone()));
        };

        let mut columns = self.columns.clone();
        let moved = columns.remove(source_index);
        columns.insert(target_index, moved);
        BoardChange::Changed(Self { columns })
    }

    /// Takes a task off the board.
    pub fn remove_task(&self, task_id: &TaskId) -> BoardChange<(Self, RemovedTask)> {
        let Some(location) = self.locate_task(task_id) else {
            return BoardChange::Unchanged(Noop::UnknownTask(task_id.clone()));
        };
        let Some((column_index, column)) = self.locate_column(&location.column_id) else {
            return BoardChange::Unchanged(Noop::UnknownColumn(location.column_id));
        };

        let mut tasks = column.tasks().to_vec();
        let task = tasks.remove(location.index);
        let mut columns = self.columns.clone();
        set_column(&mut columns, column_index, column.with_task_list(tasks));

        BoardChange::Changed((
            Self { columns },
            RemovedTask {
                task,
                column_id: location.column_id,
                index: location.index,
            },
        ))
    }

    /// Inserts a task into a column, clamping `at_index` to the column length.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateTaskId`] when the task is already
    /// on the board, or [`BoardDomainError::UnknownColumn`] when the column
    /// does not exist.
    pub fn insert_task(
        &self,
        column_id: &ColumnId,
        task: Task,
        at_index: usize,
    ) -> Result<Self, BoardDomainError> {
        if self.find_task(task.id()).is_some() {
            return Err(BoardDomainError::DuplicateTaskId(task.id().clone()));
        }
        let (column_index, column) = self
            .locate_column(column_id)
            .ok_or_else(|| BoardDomainError::UnknownColumn(column_id.clone()))?;

        let mut tasks = column.tasks().to_vec();
        tasks.insert(at_index.min(tasks.len()), task);
        let mut columns = self.columns.clone();
        set_column(&mut columns, column_index, column.with_task_list(tasks));
        Ok(Self { columns })
    }

    /// Swaps in a new version of an existing task, keeping its position.
    pub fn replace_task(&self, task: Task) -> BoardChange<Self> {
        let Some(location) = self.locate_task(task.id()) else {
            return BoardChange::Unchanged(Noop::UnknownTask(task.id().clone()));
        };
        let Some((column_index, column)) = self.locate_column(&location.column_id) else {
            return BoardChange::Unchanged(Noop::UnknownColumn(location.column_id));
        };
        if column.tasks().get(location.index) == Some(&task) {
            return BoardChange::Unchanged(Noop::Identical);
        }

        let tasks = column
            .tasks()
            .iter()
            .map(|existing| {
                if existing.id() == task.id() {
                    task.clone()
                } else {
                    existing.clone()
                }
            })
            .collect();
        let mut columns = self.columns.clone();
        set_column(&mut columns, column_index, column.with_task_list(tasks));
        BoardChange::Changed(Self { columns })
    }

    /// Takes a column, with all its tasks, off the board.
    pub fn remove_column(&self, column_id: &ColumnId) -> BoardChange<(Self, Column)> {
        let Some(index) = self.column_index(column_id) else {
            return BoardChange::Unchanged(Noop::UnknownColumn(column_id.clone()));
        };
        let mut columns = self.columns.clone();
        let removed = columns.remove(index);
        BoardChange::Changed((Self { columns }, Arc::unwrap_or_clone(removed)))
    }

    fn locate_column(&self, id: &ColumnId) -> Option<(usize, &Column)> {
        self.columns
            .iter()
            .enumerate()
            .find(|(_, column)| column.id() == id)
            .map(|(index, column)| (index, column.as_ref()))
    }

    fn column_arc(&self, id: &ColumnId) -> Option<&Arc<Column>> {
        self.columns.iter().find(|column| column.id() == id)
    }
}

fn set_column(columns: &mut [Arc<Column>], index: usize, column: Column) {
    if let Some(slot) = columns.get_mut(index) {
        *slot = Arc::new(column);
    }
}

impl TryFrom<Vec<Column>> for Board {
    type Error = BoardDomainError;

    fn try_from(value: Vec<Column>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.columns())
    }
}
