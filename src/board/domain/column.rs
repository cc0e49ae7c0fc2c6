//! Board column holding an ordered task sequence.

use super::{ColumnId, Task, TaskId};
use serde::{Deserialize, Serialize};

/// Header icon shown next to a column title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnIcon {
    /// Clipboard icon for backlog columns.
    #[default]
    Todo,
    /// Layout icon for work in progress.
    Progress,
    /// Check icon for finished work.
    Done,
    /// Briefcase icon for routine management.
    Manage,
}

/// Ordered list of tasks shown as one board column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    id: ColumnId,
    title: String,
    accent_color: String,
    #[serde(default)]
    icon_type: ColumnIcon,
    #[serde(default)]
    tasks: Vec<Task>,
}

impl Column {
    /// Creates an empty column.
    #[must_use]
    pub fn new(
        id: ColumnId,
        title: impl Into<String>,
        accent_color: impl Into<String>,
        icon: ColumnIcon,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            accent_color: accent_color.into(),
            icon_type: icon,
            tasks: Vec::new(),
        }
    }

    /// Replaces the task sequence.
    ///
    /// Uniqueness is checked when the column joins a board.
    #[must_use]
    pub fn with_tasks(mut self, tasks: impl IntoIterator<Item = Task>) -> Self {
        self.tasks = tasks.into_iter().collect();
        self
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> &ColumnId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the accent colour class.
    #[must_use]
    pub fn accent_color(&self) -> &str {
        &self.accent_color
    }

    /// Returns the header icon.
    #[must_use]
    pub const fn icon(&self) -> ColumnIcon {
        self.icon_type
    }

    /// Returns the tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the column has no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the index of a task within this column.
    #[must_use]
    pub fn position_of(&self, task_id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == task_id)
    }

    /// Returns `true` when the task belongs to this column.
    #[must_use]
    pub fn contains(&self, task_id: &TaskId) -> bool {
        self.position_of(task_id).is_some()
    }

    /// Returns a copy of this column carrying a different task sequence.
    pub(super) fn with_task_list(&self, tasks: Vec<Task>) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            accent_color: self.accent_color.clone(),
            icon_type: self.icon_type,
            tasks,
        }
    }
}
