//! Coloured labels attached to task cards.

use super::ParseTagColorError;
use serde::{Deserialize, Serialize};

/// Palette available for tag pills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagColor {
    /// Purple pill.
    Purple,
    /// Pink pill.
    Pink,
    /// Cyan pill.
    Cyan,
    /// Orange pill.
    Orange,
    /// Green pill.
    Green,
    /// Blue pill.
    Blue,
}

impl TagColor {
    /// Every colour in picker order.
    pub const ALL: [Self; 6] = [
        Self::Purple,
        Self::Pink,
        Self::Cyan,
        Self::Orange,
        Self::Green,
        Self::Blue,
    ];

    /// Returns the canonical serialised name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Cyan => "cyan",
            Self::Orange => "orange",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }

    /// Returns the hex swatch used for compact colour dots.
    #[must_use]
    pub const fn swatch(self) -> &'static str {
        match self {
            Self::Purple => "#a855f7",
            Self::Pink => "#ec4899",
            Self::Cyan => "#06b6d4",
            Self::Orange => "#f97316",
            Self::Green => "#22c55e",
            Self::Blue => "#3b82f6",
        }
    }
}

impl TryFrom<&str> for TagColor {
    type Error = ParseTagColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|color| color.as_str() == normalized)
            .ok_or_else(|| ParseTagColorError(value.to_owned()))
    }
}

/// Label shown on a task card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    /// Display text.
    pub label: String,
    /// Pill colour.
    pub color: TagColor,
}

impl Tag {
    /// Creates a tag.
    #[must_use]
    pub fn new(label: impl Into<String>, color: TagColor) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }
}
