//! Drag engine: the entry points the view layer calls during a gesture.

use std::sync::Arc;

use crate::board::{
    domain::{
        Board, ColumnMove, DragSession, HoverTarget, Noop, Resolution, TaskMove, reorder,
    },
    ports::{BoardStore, StoreOutcome, TickScheduler, TickToken},
    services::gesture::{GestureController, GesturePhase},
};
use tracing::{debug, trace, warn};

/// Result of one hover event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverOutcome {
    /// The board was reordered as described.
    Moved(Resolution),
    /// Nothing changed.
    Skipped(Noop),
}

impl HoverOutcome {
    /// Returns `true` when the board was reordered.
    #[must_use]
    pub const fn is_moved(&self) -> bool {
        matches!(self, Self::Moved(_))
    }
}

/// Live reordering engine.
///
/// Combines the gesture controller, the hover resolver and the board store.
/// Hover events must be delivered in arrival order: each applied move changes
/// the board and the session that the next hover is resolved against.
#[derive(Debug)]
pub struct DragEngine<S, K>
where
    S: BoardStore,
    K: TickScheduler,
{
    store: S,
    gesture: GestureController<K>,
}

impl<S, K> DragEngine<S, K>
where
    S: BoardStore,
    K: TickScheduler,
{
    /// Creates an idle engine over `store`.
    #[must_use]
    pub const fn new(store: S, scheduler: K) -> Self {
        Self {
            store,
            gesture: GestureController::new(scheduler),
        }
    }

    /// Handles the native drag-start signal.
    ///
    /// The session is not visible to hovers until the returned tick is
    /// delivered through [`DragEngine::on_tick`].
    pub fn on_drag_start(&mut self, session: DragSession) -> TickToken {
        self.gesture.request_start(session)
    }

    /// Delivers a scheduled tick. Returns `true` when it published a session.
    pub fn on_tick(&mut self, token: TickToken) -> bool {
        self.gesture.on_tick(token)
    }

    /// Resolves and applies a drag-over event.
    pub fn on_hover_target(&mut self, target: &HoverTarget) -> HoverOutcome {
        let board = self.store.snapshot();
        match reorder::resolve(self.gesture.session(), &board, target) {
            Resolution::Skip(reason) => {
                trace!(column = %target.column_id, task = ?target.task_id, %reason, "hover skipped");
                HoverOutcome::Skipped(reason)
            }
            Resolution::MoveTask(task_move) => self.apply_task_move(task_move),
            Resolution::MoveColumn(column_move) => self.apply_column_move(column_move),
        }
    }

    /// Handles the native drag-end signal.
    pub fn on_drag_end(&mut self) -> bool {
        self.finish_gesture()
    }

    /// Handles the native drop signal. Moves were already applied live.
    pub fn on_drop(&mut self) -> bool {
        self.finish_gesture()
    }

    /// Returns the published drag session for presentational use.
    #[must_use]
    pub const fn current_drag_session(&self) -> Option<&DragSession> {
        self.gesture.session()
    }

    /// Returns the gesture phase.
    #[must_use]
    pub const fn phase(&self) -> GesturePhase {
        self.gesture.phase()
    }

    /// Returns the current board snapshot.
    #[must_use]
    pub fn board(&self) -> Arc<Board> {
        self.store.snapshot()
    }

    /// Returns the store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns the store mutably, for editing commands.
    pub const fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Returns the scheduler mutably, for hosts that drive ticks.
    pub const fn scheduler_mut(&mut self) -> &mut K {
        self.gesture.scheduler_mut()
    }

    /// Returns the gesture controller.
    #[must_use]
    pub const fn gesture(&self) -> &GestureController<K> {
        &self.gesture
    }

    fn finish_gesture(&mut self) -> bool {
        self.gesture.finish()
    }

    fn apply_task_move(&mut self, task_move: TaskMove) -> HoverOutcome {
        let outcome = self.store.move_task(
            &task_move.task_id,
            &task_move.from,
            &task_move.to,
            &task_move.position,
        );
        match outcome {
            StoreOutcome::Applied => {
                debug!(
                    task = %task_move.task_id,
                    from = %task_move.from,
                    to = %task_move.to,
                    position = ?task_move.position,
                    "task moved"
                );
                if let Err(err) = self.gesture.update_container(task_move.to.clone()) {
                    warn!(%err, "moved task without a task session");
                }
                HoverOutcome::Moved(Resolution::MoveTask(task_move))
            }
            StoreOutcome::Unchanged(reason) => {
                trace!(task = %task_move.task_id, %reason, "task move was a no-op");
                HoverOutcome::Skipped(reason)
            }
        }
    }

    fn apply_column_move(&mut self, column_move: ColumnMove) -> HoverOutcome {
        match self
            .store
            .move_column(&column_move.column_id, &column_move.target)
        {
            StoreOutcome::Applied => {
                debug!(
                    column = %column_move.column_id,
                    target = %column_move.target,
                    "column moved"
                );
                HoverOutcome::Moved(Resolution::MoveColumn(column_move))
            }
            StoreOutcome::Unchanged(reason) => {
                trace!(column = %column_move.column_id, %reason, "column move was a no-op");
                HoverOutcome::Skipped(reason)
            }
        }
    }
}
