//! Application services for drag reordering and task editing.

mod config;
mod editor;
mod engine;
mod gesture;

pub use config::{DEFAULT_DATE_FORMAT, EditorConfig};
pub use editor::{TaskDraft, TaskEditError, TaskEditResult, TaskEditor};
pub use engine::{DragEngine, HoverOutcome};
pub use gesture::{GestureController, GesturePhase};
