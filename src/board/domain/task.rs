//! Task card value and its status badge.

use super::{Tag, TaskId};
use serde::{Deserialize, Serialize};

/// Visual category of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeKind {
    /// Outstanding work.
    Todo,
    /// Finished work.
    Done,
}

/// Short status label rendered in a card footer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusBadge {
    /// Badge text.
    pub text: String,
    /// Badge category.
    #[serde(rename = "type")]
    pub kind: BadgeKind,
}

impl StatusBadge {
    /// Creates a badge.
    #[must_use]
    pub fn new(text: impl Into<String>, kind: BadgeKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// A task card owned by exactly one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(default)]
    tags: Vec<Tag>,
    date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status_badge: Option<StatusBadge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    #[serde(default)]
    has_red_dot: bool,
}

impl Task {
    /// Creates a bare task with no tags, badge, or attachments.
    #[must_use]
    pub fn new(id: TaskId, title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            content: None,
            tags: Vec::new(),
            date: date.into(),
            status_badge: None,
            image_url: None,
            has_red_dot: false,
        }
    }

    /// Sets the short summary.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the markdown body.
    #[must_use]
    pub fn with_content(mut self, content: Option<String>) -> Self {
        self.content = content;
        self
    }

    /// Replaces the tags.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Sets the status badge.
    #[must_use]
    pub fn with_status_badge(mut self, badge: Option<StatusBadge>) -> Self {
        self.status_badge = badge;
        self
    }

    /// Sets the cover image URL.
    #[must_use]
    pub fn with_image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }

    /// Sets the unread marker.
    #[must_use]
    pub const fn with_red_dot(mut self, has_red_dot: bool) -> Self {
        self.has_red_dot = has_red_dot;
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the short summary, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the markdown body, if any.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Returns the tags in display order.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Returns the display date.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns the status badge, if any.
    #[must_use]
    pub const fn status_badge(&self) -> Option<&StatusBadge> {
        self.status_badge.as_ref()
    }

    /// Returns the cover image URL, if any.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Returns whether the unread marker is shown.
    #[must_use]
    pub const fn has_red_dot(&self) -> bool {
        self.has_red_dot
    }
}
