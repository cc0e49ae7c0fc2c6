//! Recycle bin flows driven through the editor and a live engine.

use std::sync::Arc;

use super::helpers::{column_id, ids_in, seeded_engine, start_drag, task_id};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use taskboard::board::{
    domain::{DragSession, HoverTarget, RecycleBin},
    services::{TaskDraft, TaskEditError, TaskEditor},
};

#[fixture]
fn editor() -> TaskEditor<DefaultClock> {
    TaskEditor::new(Arc::new(DefaultClock))
}

#[rstest]
fn task_deleted_after_a_drag_restores_where_it_was(
    editor: TaskEditor<DefaultClock>,
) -> Result<(), eyre::Report> {
    let mut engine = seeded_engine()?;
    let mut bin = RecycleBin::new();
    start_drag(
        &mut engine,
        DragSession::task(task_id("t-4")?, column_id("col-2")?),
    );
    engine.on_hover_target(&HoverTarget::task(column_id("col-1")?, task_id("t-2")?));
    engine.on_drop();

    editor.delete_task(engine.store_mut(), &mut bin, &task_id("t-4")?)?;
    eyre::ensure!(ids_in(&engine.board(), "col-1")? == ["t-1", "t-2", "t-3"], "task left on board");

    let restored_to = editor.restore_task(engine.store_mut(), &mut bin, &task_id("t-4")?)?;

    eyre::ensure!(restored_to == column_id("col-1")?, "restored into {restored_to}");
    eyre::ensure!(
        ids_in(&engine.board(), "col-1")? == ["t-1", "t-4", "t-2", "t-3"],
        "task not restored to its slot"
    );
    eyre::ensure!(bin.is_empty(), "bin should be empty after restore");
    Ok(())
}

#[rstest]
fn deleting_a_column_sends_tasks_to_bin_and_restore_falls_back(
    editor: TaskEditor<DefaultClock>,
) -> Result<(), eyre::Report> {
    let mut engine = seeded_engine()?;
    let mut bin = RecycleBin::new();

    let binned = editor.delete_column(engine.store_mut(), &mut bin, &column_id("col-1")?)?;
    eyre::ensure!(binned == 3, "expected three binned tasks, got {binned}");

    for id in ["t-1", "t-2", "t-3"] {
        let restored_to = editor.restore_task(engine.store_mut(), &mut bin, &task_id(id)?)?;
        eyre::ensure!(restored_to == column_id("col-2")?, "{id} restored into {restored_to}");
    }

    eyre::ensure!(
        ids_in(&engine.board(), "col-2")? == ["t-4", "t-1", "t-2", "t-3"],
        "fallback restores should append in order"
    );
    Ok(())
}

#[rstest]
fn purged_task_cannot_be_restored(editor: TaskEditor<DefaultClock>) -> Result<(), eyre::Report> {
    let mut engine = seeded_engine()?;
    let mut bin = RecycleBin::new();

    editor.delete_task(engine.store_mut(), &mut bin, &task_id("t-5")?)?;
    let purged = editor.purge_task(&mut bin, &task_id("t-5")?)?;
    eyre::ensure!(purged.original_column == column_id("col-4")?, "wrong origin recorded");

    let restore = editor.restore_task(engine.store_mut(), &mut bin, &task_id("t-5")?);
    eyre::ensure!(
        restore == Err(TaskEditError::NotInRecycleBin(task_id("t-5")?)),
        "unexpected restore result {restore:?}"
    );
    eyre::ensure!(engine.board().task_count() == 4, "purged task reappeared");
    Ok(())
}

#[rstest]
fn created_task_can_be_dragged_immediately(
    editor: TaskEditor<DefaultClock>,
) -> Result<(), eyre::Report> {
    let mut engine = seeded_engine()?;
    let created = editor.create_task(
        engine.store_mut(),
        &column_id("col-3")?,
        TaskDraft::new("Fresh task").with_content("Markdown **body**"),
    )?;

    start_drag(
        &mut engine,
        DragSession::task(created.id().clone(), column_id("col-3")?),
    );
    let outcome = engine.on_hover_target(&HoverTarget::column(column_id("col-2")?));
    engine.on_drag_end();

    eyre::ensure!(outcome.is_moved(), "new task did not move: {outcome:?}");
    eyre::ensure!(
        ids_in(&engine.board(), "col-2")? == ["t-4".to_owned(), created.id().to_string()],
        "new task not appended to col-2"
    );
    Ok(())
}
