//! Whole drag gestures replayed against the seed board.

use super::helpers::{column_id, ids_in, seeded_engine, start_drag, task_id};
use rstest::rstest;
use taskboard::board::{
    domain::{Board, DragSession, HoverTarget},
    services::GesturePhase,
};

#[rstest]
fn task_travels_through_columns_before_drop() -> Result<(), eyre::Report> {
    let mut engine = seeded_engine()?;
    start_drag(
        &mut engine,
        DragSession::task(task_id("t-1")?, column_id("col-1")?),
    );

    let hovers = [
        HoverTarget::task(column_id("col-1")?, task_id("t-3")?),
        HoverTarget::task(column_id("col-2")?, task_id("t-4")?),
        HoverTarget::column(column_id("col-3")?),
    ];
    for hover in &hovers {
        eyre::ensure!(
            engine.on_hover_target(hover).is_moved(),
            "hover {hover:?} did not move the task"
        );
    }
    eyre::ensure!(engine.on_drop(), "drop should clean up the gesture");

    let board = engine.board();
    eyre::ensure!(ids_in(&board, "col-1")? == ["t-2", "t-3"], "col-1 order");
    eyre::ensure!(ids_in(&board, "col-2")? == ["t-4"], "col-2 order");
    eyre::ensure!(ids_in(&board, "col-3")? == ["t-1"], "col-3 order");
    eyre::ensure!(board.task_count() == 5, "task count changed");
    eyre::ensure!(engine.phase() == GesturePhase::Idle, "gesture not idle");
    Ok(())
}

#[rstest]
fn column_drag_reorders_board() -> Result<(), eyre::Report> {
    let mut engine = seeded_engine()?;
    start_drag(&mut engine, DragSession::column(column_id("col-1")?));

    let outcome = engine.on_hover_target(&HoverTarget::task(column_id("col-1")?, task_id("t-2")?));
    eyre::ensure!(!outcome.is_moved(), "hovering its own cards must not move the column");

    let outcome = engine.on_hover_target(&HoverTarget::column(column_id("col-3")?));
    eyre::ensure!(outcome.is_moved(), "column move expected, got {outcome:?}");
    engine.on_drag_end();

    let order: Vec<_> = engine
        .board()
        .columns()
        .map(|column| column.id().to_string())
        .collect();
    eyre::ensure!(
        order == ["col-2", "col-3", "col-1", "col-4"],
        "unexpected column order {order:?}"
    );
    Ok(())
}

#[rstest]
fn reordered_board_round_trips_through_json() -> Result<(), eyre::Report> {
    let mut engine = seeded_engine()?;
    start_drag(
        &mut engine,
        DragSession::task(task_id("t-5")?, column_id("col-4")?),
    );
    engine.on_hover_target(&HoverTarget::task(column_id("col-1")?, task_id("t-2")?));
    engine.on_drop();

    let json = serde_json::to_string(engine.board().as_ref())?;
    let reparsed: Board = serde_json::from_str(&json)?;

    eyre::ensure!(&reparsed == engine.board().as_ref(), "board changed in transit");
    eyre::ensure!(
        ids_in(&reparsed, "col-1")? == ["t-1", "t-5", "t-2", "t-3"],
        "moved task not persisted in place"
    );
    Ok(())
}
