//! Then steps for drag reordering BDD scenarios.

use super::world::{DragReorderWorld, list_items};
use eyre::{WrapErr, eyre};
use rstest_bdd_macros::then;
use taskboard::board::{
    domain::{ColumnId, DragSession},
    services::HoverOutcome,
};

#[then(r#"column "{column}" lists "{tasks}""#)]
fn column_lists(
    world: &DragReorderWorld,
    column: String,
    tasks: String,
) -> Result<(), eyre::Report> {
    let column_id = ColumnId::new(column.as_str()).wrap_err("parse column id")?;
    let board = world.engine()?.board();
    let found = board
        .column(&column_id)
        .ok_or_else(|| eyre!("column {column} missing from board"))?;
    let actual: Vec<&str> = found.tasks().iter().map(|task| task.id().as_str()).collect();
    let expected: Vec<&str> = list_items(&tasks).collect();

    eyre::ensure!(
        actual == expected,
        "column {column}: expected {expected:?}, found {actual:?}"
    );
    Ok(())
}

#[then(r#"the column order is "{columns}""#)]
fn column_order_is(world: &DragReorderWorld, columns: String) -> Result<(), eyre::Report> {
    let board = world.engine()?.board();
    let actual: Vec<&str> = board.columns().map(|column| column.id().as_str()).collect();
    let expected: Vec<&str> = list_items(&columns).collect();

    eyre::ensure!(
        actual == expected,
        "expected column order {expected:?}, found {actual:?}"
    );
    Ok(())
}

#[then(r#"the drag session container is "{column}""#)]
fn session_container_is(world: &DragReorderWorld, column: String) -> Result<(), eyre::Report> {
    let expected = ColumnId::new(column).wrap_err("parse column id")?;
    match world.engine()?.current_drag_session() {
        Some(DragSession::Task { container, .. }) if *container == expected => Ok(()),
        other => Err(eyre!("expected a task drag in {expected}, found {other:?}")),
    }
}

#[then("the last hover was skipped")]
fn last_hover_skipped(world: &DragReorderWorld) -> Result<(), eyre::Report> {
    match &world.last_hover {
        Some(HoverOutcome::Skipped(_)) => Ok(()),
        other => Err(eyre!("expected a skipped hover, got {other:?}")),
    }
}

#[then("no drag session is active")]
fn no_drag_session(world: &DragReorderWorld) -> Result<(), eyre::Report> {
    let session = world.engine()?.current_drag_session();
    eyre::ensure!(session.is_none(), "unexpected drag session {session:?}");
    Ok(())
}

#[then("a further drag end reports nothing to clean up")]
fn further_drag_end_is_noop(world: &mut DragReorderWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.last_cleanup == Some(true),
        "drop did not report a cleanup"
    );
    let cleaned = world.engine_mut()?.on_drag_end();
    eyre::ensure!(!cleaned, "second cleanup reported work");
    Ok(())
}
