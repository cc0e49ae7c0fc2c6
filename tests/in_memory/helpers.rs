//! Shared test helpers for in-memory board integration tests.

use eyre::WrapErr;
use taskboard::board::{
    adapters::memory::{InMemoryBoardStore, QueuedTickScheduler},
    domain::{Board, ColumnId, DragSession, TaskId},
    services::DragEngine,
};

/// Engine type used across the integration tests.
pub type TestEngine = DragEngine<InMemoryBoardStore, QueuedTickScheduler>;

/// Board in the shape the view layer persists.
pub const SEED_BOARD_JSON: &str = r#"[
    {
        "id": "col-1",
        "title": "To do",
        "accentColor": "bg-gray-700",
        "iconType": "todo",
        "tasks": [
            {
                "id": "t-1",
                "title": "Learn fifty new words",
                "description": "Vocabulary drill",
                "hasRedDot": true,
                "tags": [{ "label": "vocab", "color": "purple" }],
                "date": "11-27 09:55",
                "statusBadge": { "text": "To do", "type": "todo" }
            },
            { "id": "t-2", "title": "Read a chapter", "date": "11-27 10:05" },
            { "id": "t-3", "title": "Write a summary", "date": "11-27 10:15" }
        ]
    },
    {
        "id": "col-2",
        "title": "In progress",
        "accentColor": "bg-orange-500",
        "iconType": "progress",
        "tasks": [{ "id": "t-4", "title": "Practice listening", "date": "11-26 18:00" }]
    },
    { "id": "col-3", "title": "Done", "accentColor": "bg-green-500", "iconType": "done", "tasks": [] },
    {
        "id": "col-4",
        "title": "Routine",
        "accentColor": "bg-gray-500",
        "iconType": "manage",
        "tasks": [{ "id": "t-5", "title": "Morning review", "date": "11-20 07:30" }]
    }
]"#;

/// Parses the seed board.
///
/// # Errors
///
/// Returns an error if the seed JSON is not a valid board.
pub fn seed_board() -> Result<Board, eyre::Report> {
    serde_json::from_str(SEED_BOARD_JSON).wrap_err("parse seed board")
}

/// Builds a fresh engine over the seed board.
///
/// # Errors
///
/// Returns an error if the seed board cannot be parsed.
pub fn seeded_engine() -> Result<TestEngine, eyre::Report> {
    Ok(DragEngine::new(
        InMemoryBoardStore::new(seed_board()?),
        QueuedTickScheduler::new(),
    ))
}

/// Parses a task identifier.
///
/// # Errors
///
/// Returns an error for blank identifiers.
pub fn task_id(value: &str) -> Result<TaskId, eyre::Report> {
    TaskId::new(value).wrap_err("parse task id")
}

/// Parses a column identifier.
///
/// # Errors
///
/// Returns an error for blank identifiers.
pub fn column_id(value: &str) -> Result<ColumnId, eyre::Report> {
    ColumnId::new(value).wrap_err("parse column id")
}

/// Starts a drag and delivers its start tick.
pub fn start_drag(engine: &mut TestEngine, session: DragSession) {
    engine.on_drag_start(session);
    for token in engine.scheduler_mut().take_due() {
        engine.on_tick(token);
    }
}

/// Lists the task identifiers of a column in display order.
///
/// # Errors
///
/// Returns an error if the column is missing.
pub fn ids_in(board: &Board, column: &str) -> Result<Vec<String>, eyre::Report> {
    let found = board
        .column(&column_id(column)?)
        .ok_or_else(|| eyre::eyre!("column {column} missing"))?;
    Ok(found
        .tasks()
        .iter()
        .map(|task| task.id().to_string())
        .collect())
}
