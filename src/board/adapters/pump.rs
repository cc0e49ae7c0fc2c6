//! Tokio event pump feeding gesture events to the drag engine.
//!
//! Events are processed strictly in arrival order. After each event the
//! pump yields once to the runtime, so other tasks (a renderer capturing the
//! drag image, say) run before a freshly started drag is published, and then
//! delivers every due start tick.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::debug;

use crate::board::{
    adapters::memory::QueuedTickScheduler,
    domain::{Board, DragSession, HoverTarget},
    ports::BoardStore,
    services::DragEngine,
};

/// Native drag signal forwarded by the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureEvent {
    /// A drag was initiated on a task or column.
    DragStart(DragSession),
    /// The pointer entered a drop target.
    Hover(HoverTarget),
    /// The gesture was released.
    DragEnd,
    /// The item was dropped on a target.
    Drop,
}

/// State broadcast to observers after each processed event.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Current board.
    pub board: Arc<Board>,
    /// Published drag session.
    pub session: Option<DragSession>,
}

impl ViewState {
    fn differs_from(&self, board: &Arc<Board>, session: Option<&DragSession>) -> bool {
        !Arc::ptr_eq(&self.board, board) || self.session.as_ref() != session
    }
}

/// Serial event loop around a [`DragEngine`].
#[derive(Debug)]
pub struct GesturePump<S: BoardStore> {
    engine: DragEngine<S, QueuedTickScheduler>,
}

impl<S: BoardStore> GesturePump<S> {
    /// Wraps an engine.
    #[must_use]
    pub const fn new(engine: DragEngine<S, QueuedTickScheduler>) -> Self {
        Self { engine }
    }

    /// Creates the view state channel seeded with the engine's current state.
    #[must_use]
    pub fn view_channel(&self) -> (watch::Sender<ViewState>, watch::Receiver<ViewState>) {
        watch::channel(ViewState {
            board: self.engine.board(),
            session: self.engine.current_drag_session().cloned(),
        })
    }

    /// Processes events until every sender is dropped, then returns the
    /// engine.
    pub async fn run(
        mut self,
        mut events: mpsc::UnboundedReceiver<GestureEvent>,
        view: watch::Sender<ViewState>,
    ) -> DragEngine<S, QueuedTickScheduler> {
        while let Some(event) = events.recv().await {
            self.dispatch(event);
            tokio::task::yield_now().await;
            for token in self.engine.scheduler_mut().take_due() {
                self.engine.on_tick(token);
            }
            self.broadcast(&view);
        }
        debug!("gesture event stream closed");
        self.engine
    }

    fn dispatch(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::DragStart(session) => {
                self.engine.on_drag_start(session);
            }
            GestureEvent::Hover(target) => {
                self.engine.on_hover_target(&target);
            }
            GestureEvent::DragEnd => {
                self.engine.on_drag_end();
            }
            GestureEvent::Drop => {
                self.engine.on_drop();
            }
        }
    }

    fn broadcast(&self, view: &watch::Sender<ViewState>) {
        let board = self.engine.board();
        let session = self.engine.current_drag_session().cloned();
        view.send_if_modified(|state| {
            if state.differs_from(&board, session.as_ref()) {
                state.board = board;
                state.session = session;
                true
            } else {
                false
            }
        });
    }
}
