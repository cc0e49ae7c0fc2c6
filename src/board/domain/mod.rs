//! Domain model for the task board.
//!
//! Boards, columns and tasks are plain values. Ordering operations are
//! copy-producing, drag sessions are a sum type, and hover resolution is a
//! pure function of the session and the board.

mod board;
mod column;
mod error;
mod ids;
mod outcome;
mod recycle_bin;
pub mod reorder;
mod session;
mod tag;
mod task;

pub use board::{Board, InsertPosition, RemovedTask, TaskLocation};
pub use column::{Column, ColumnIcon};
pub use error::{BoardDomainError, ParseTagColorError, SessionError};
pub use ids::{ColumnId, TaskId};
pub use outcome::{BoardChange, Noop};
pub use recycle_bin::{DeletedTask, RecycleBin};
pub use reorder::{ColumnMove, HoverTarget, Resolution, TaskMove};
pub use session::{DragKind, DragSession, SessionTracker};
pub use tag::{Tag, TagColor};
pub use task::{BadgeKind, StatusBadge, Task};
