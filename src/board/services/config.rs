//! Configuration for task editing commands.

use serde::{Deserialize, Serialize};

/// Default `strftime` pattern for task dates, e.g. `11-27 09:55`.
pub const DEFAULT_DATE_FORMAT: &str = "%m-%d %H:%M";

/// Settings applied when tasks are created or edited.
///
/// # Examples
///
/// ```
/// use taskboard::board::services::EditorConfig;
///
/// let config = EditorConfig::default();
/// assert_eq!(config.description_preview_chars, 100);
///
/// let custom = EditorConfig::from_json_str(r#"{ "default_badge_text": "Open" }"#)
///     .expect("valid config");
/// assert_eq!(custom.default_badge_text, "Open");
/// assert!(custom.mark_new_tasks_unread);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Badge text given to new tasks.
    pub default_badge_text: String,
    /// Number of content characters copied into the card summary.
    pub description_preview_chars: usize,
    /// `strftime` pattern for the creation date shown on cards.
    pub date_format: String,
    /// Whether new tasks carry the unread red dot.
    pub mark_new_tasks_unread: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_badge_text: "To do".to_owned(),
            description_preview_chars: 100,
            date_format: DEFAULT_DATE_FORMAT.to_owned(),
            mark_new_tasks_unread: true,
        }
    }
}

impl EditorConfig {
    /// Parses a configuration from JSON, filling absent fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] when the input is not a valid
    /// configuration object.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
