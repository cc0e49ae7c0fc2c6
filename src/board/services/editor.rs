//! Editing commands: create, edit, delete, restore and purge tasks.

use std::fmt::Write as _;
use std::sync::Arc;

use crate::board::{
    domain::{
        BadgeKind, BoardDomainError, ColumnId, DeletedTask, RecycleBin, StatusBadge, Tag, Task,
        TaskId,
    },
    ports::BoardStore,
    services::config::{DEFAULT_DATE_FORMAT, EditorConfig},
};
use mockable::Clock;
use thiserror::Error;
use tracing::{debug, warn};

/// Form values submitted when creating or editing a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    content: Option<String>,
    image_url: Option<String>,
    tags: Vec<Tag>,
}

impl TaskDraft {
    /// Creates a draft with only a title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: None,
            image_url: None,
            tags: Vec::new(),
        }
    }

    /// Sets the markdown body.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Sets the cover image URL. An empty URL clears the image.
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }
}

/// Errors returned by editing commands.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskEditError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),

    /// The task is not on the board.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The column is not on the board.
    #[error("column not found: {0}")]
    ColumnNotFound(ColumnId),

    /// The task is not in the recycle bin.
    #[error("task not in recycle bin: {0}")]
    NotInRecycleBin(TaskId),

    /// The board has no column to restore into.
    #[error("no column available to restore task {0}")]
    NoColumnAvailable(TaskId),
}

/// Result type for editing commands.
pub type TaskEditResult<T> = Result<T, TaskEditError>;

/// Editing commands invoked by the task form, context menu and recycle bin.
#[derive(Debug, Clone)]
pub struct TaskEditor<C>
where
    C: Clock + Send + Sync,
{
    clock: Arc<C>,
    config: EditorConfig,
}

impl<C> TaskEditor<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an editor with default configuration.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self::with_config(clock, EditorConfig::default())
    }

    /// Creates an editor with custom configuration.
    #[must_use]
    pub const fn with_config(clock: Arc<C>, config: EditorConfig) -> Self {
        Self { clock, config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Creates a task at the top of `column_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskEditError::Domain`] for an empty title and
    /// [`TaskEditError::ColumnNotFound`] for an unknown column.
    pub fn create_task<S: BoardStore>(
        &self,
        store: &mut S,
        column_id: &ColumnId,
        draft: TaskDraft,
    ) -> TaskEditResult<Task> {
        let title = validated_title(&draft.title)?;
        if store.snapshot().column(column_id).is_none() {
            return Err(TaskEditError::ColumnNotFound(column_id.clone()));
        }

        let task = Task::new(TaskId::generate(), title, self.stamp())
            .with_description(self.summarize(draft.content.as_deref()))
            .with_content(non_empty(draft.content))
            .with_image_url(non_empty(draft.image_url))
            .with_tags(draft.tags)
            .with_status_badge(Some(StatusBadge::new(
                self.config.default_badge_text.clone(),
                BadgeKind::Todo,
            )))
            .with_red_dot(self.config.mark_new_tasks_unread);

        store.insert_task(column_id, task.clone(), 0)?;
        debug!(task = %task.id(), column = %column_id, "task created");
        Ok(task)
    }

    /// Applies form values to an existing task, keeping its id, date, badge
    /// and position.
    ///
    /// # Errors
    ///
    /// Returns [`TaskEditError::Domain`] for an empty title and
    /// [`TaskEditError::TaskNotFound`] for an unknown task.
    pub fn update_task<S: BoardStore>(
        &self,
        store: &mut S,
        task_id: &TaskId,
        draft: TaskDraft,
    ) -> TaskEditResult<Task> {
        let title = validated_title(&draft.title)?;
        let board = store.snapshot();
        let existing = board
            .find_task(task_id)
            .ok_or_else(|| TaskEditError::TaskNotFound(task_id.clone()))?;

        let updated = Task::new(existing.id().clone(), title, existing.date())
            .with_description(self.summarize(draft.content.as_deref()))
            .with_content(non_empty(draft.content))
            .with_image_url(non_empty(draft.image_url))
            .with_tags(draft.tags)
            .with_status_badge(existing.status_badge().cloned())
            .with_red_dot(existing.has_red_dot());

        let outcome = store.replace_task(updated.clone());
        debug!(task = %task_id, changed = outcome.is_applied(), "task updated");
        Ok(updated)
    }

    /// Moves a task from the board into the recycle bin.
    ///
    /// # Errors
    ///
    /// Returns [`TaskEditError::TaskNotFound`] when the task is not on the
    /// board.
    pub fn delete_task<S: BoardStore>(
        &self,
        store: &mut S,
        bin: &mut RecycleBin,
        task_id: &TaskId,
    ) -> TaskEditResult<()> {
        let removed = store
            .remove_task(task_id)
            .ok_or_else(|| TaskEditError::TaskNotFound(task_id.clone()))?;
        debug!(task = %task_id, column = %removed.column_id, "task moved to recycle bin");
        bin.push(DeletedTask::from_removed(removed, self.clock.utc()));
        Ok(())
    }

    /// Removes a column; its tasks go to the recycle bin.
    ///
    /// Returns the number of tasks binned.
    ///
    /// # Errors
    ///
    /// Returns [`TaskEditError::ColumnNotFound`] for an unknown column.
    pub fn delete_column<S: BoardStore>(
        &self,
        store: &mut S,
        bin: &mut RecycleBin,
        column_id: &ColumnId,
    ) -> TaskEditResult<usize> {
        let column = store
            .remove_column(column_id)
            .ok_or_else(|| TaskEditError::ColumnNotFound(column_id.clone()))?;
        let deleted_at = self.clock.utc();
        for (index, task) in column.tasks().iter().enumerate().rev() {
            bin.push(DeletedTask {
                task: task.clone(),
                original_column: column_id.clone(),
                original_index: index,
                deleted_at,
            });
        }
        debug!(column = %column_id, tasks = column.len(), "column deleted");
        Ok(column.len())
    }

    /// Puts a deleted task back on the board.
    ///
    /// The task returns to its original column and index when that column
    /// still exists, otherwise to the end of the first column. Returns the
    /// column that received the task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskEditError::NotInRecycleBin`] for unknown tasks and
    /// [`TaskEditError::NoColumnAvailable`] when the board has no columns;
    /// the task then stays in the bin.
    pub fn restore_task<S: BoardStore>(
        &self,
        store: &mut S,
        bin: &mut RecycleBin,
        task_id: &TaskId,
    ) -> TaskEditResult<ColumnId> {
        let entry = bin
            .get(task_id)
            .ok_or_else(|| TaskEditError::NotInRecycleBin(task_id.clone()))?;
        let board = store.snapshot();

        let (column_id, index) = if board.column(&entry.original_column).is_some() {
            (entry.original_column.clone(), entry.original_index)
        } else if let Some(first) = board.first_column() {
            (first.id().clone(), usize::MAX)
        } else {
            warn!(task = %task_id, "restore failed: board has no columns");
            return Err(TaskEditError::NoColumnAvailable(task_id.clone()));
        };

        store.insert_task(&column_id, entry.task.clone(), index)?;
        let _restored = bin.take(task_id);
        debug!(task = %task_id, column = %column_id, "task restored");
        Ok(column_id)
    }

    /// Deletes a task from the recycle bin for good.
    ///
    /// # Errors
    ///
    /// Returns [`TaskEditError::NotInRecycleBin`] for unknown tasks.
    pub fn purge_task(&self, bin: &mut RecycleBin, task_id: &TaskId) -> TaskEditResult<DeletedTask> {
        let entry = bin
            .take(task_id)
            .ok_or_else(|| TaskEditError::NotInRecycleBin(task_id.clone()))?;
        debug!(task = %task_id, "task purged");
        Ok(entry)
    }

    fn stamp(&self) -> String {
        let now = self.clock.local();
        let mut date = String::new();
        if write!(date, "{}", now.format(&self.config.date_format)).is_err() {
            warn!(format = %self.config.date_format, "invalid date format, using default");
            date = now.format(DEFAULT_DATE_FORMAT).to_string();
        }
        date
    }

    fn summarize(&self, content: Option<&str>) -> Option<String> {
        let body = content.filter(|text| !text.trim().is_empty())?;
        let mut chars = body.chars();
        let preview: String = chars
            .by_ref()
            .take(self.config.description_preview_chars)
            .collect();
        if chars.next().is_some() {
            Some(format!("{preview}..."))
        } else {
            Some(preview)
        }
    }
}

fn validated_title(raw: &str) -> Result<String, BoardDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(BoardDomainError::EmptyTitle);
    }
    Ok(trimmed.to_owned())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
