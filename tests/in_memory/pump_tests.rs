//! Event pump tests running on the tokio runtime.

use super::helpers::{column_id, ids_in, seeded_engine, task_id};
use rstest::rstest;
use taskboard::board::{
    adapters::pump::{GestureEvent, GesturePump},
    domain::{DragSession, HoverTarget},
    services::GesturePhase,
};
use tokio::sync::mpsc;

#[rstest]
#[tokio::test]
async fn pump_publishes_drag_before_first_hover() -> Result<(), eyre::Report> {
    let pump = GesturePump::new(seeded_engine()?);
    let (view, observer) = pump.view_channel();
    let (events, receiver) = mpsc::unbounded_channel();

    events.send(GestureEvent::DragStart(DragSession::task(
        task_id("t-2")?,
        column_id("col-1")?,
    )))?;
    events.send(GestureEvent::Hover(HoverTarget::column(column_id("col-3")?)))?;
    events.send(GestureEvent::Drop)?;
    events.send(GestureEvent::DragEnd)?;
    drop(events);

    let engine = pump.run(receiver, view).await;

    eyre::ensure!(ids_in(&engine.board(), "col-3")? == ["t-2"], "task not moved to col-3");
    eyre::ensure!(engine.phase() == GesturePhase::Idle, "gesture still running");
    let state = observer.borrow();
    eyre::ensure!(state.session.is_none(), "view still shows a drag session");
    eyre::ensure!(ids_in(&state.board, "col-1")? == ["t-1", "t-3"], "view board is stale");
    Ok(())
}

#[rstest]
#[tokio::test]
async fn observers_see_session_appear_and_clear() -> Result<(), eyre::Report> {
    let pump = GesturePump::new(seeded_engine()?);
    let (view, mut observer) = pump.view_channel();
    let (events, receiver) = mpsc::unbounded_channel();
    let running = tokio::spawn(pump.run(receiver, view));

    let session = DragSession::column(column_id("col-4")?);
    events.send(GestureEvent::DragStart(session.clone()))?;
    observer.changed().await?;
    eyre::ensure!(
        observer.borrow_and_update().session.as_ref() == Some(&session),
        "drag session not broadcast"
    );

    events.send(GestureEvent::Hover(HoverTarget::column(column_id("col-1")?)))?;
    observer.changed().await?;
    let order: Vec<_> = observer
        .borrow_and_update()
        .board
        .columns()
        .map(|column| column.id().to_string())
        .collect();
    eyre::ensure!(
        order == ["col-4", "col-1", "col-2", "col-3"],
        "unexpected column order {order:?}"
    );

    events.send(GestureEvent::DragEnd)?;
    observer.changed().await?;
    eyre::ensure!(
        observer.borrow_and_update().session.is_none(),
        "session not cleared on drag end"
    );

    drop(events);
    let engine = running.await?;
    eyre::ensure!(engine.current_drag_session().is_none(), "engine kept a session");
    Ok(())
}
