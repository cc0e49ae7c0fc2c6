//! Gesture lifecycle controller: `Idle -> Starting -> Active -> Idle`.

use crate::board::{
    domain::{ColumnId, DragSession, SessionError, SessionTracker},
    ports::{TickScheduler, TickToken},
};
use tracing::{debug, warn};

/// Observable lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// No gesture in progress.
    Idle,
    /// A drag started; its session publishes on the pending tick.
    Starting,
    /// The drag session is published and hovers are resolved.
    Active,
}

#[derive(Debug, Default)]
enum Phase {
    #[default]
    Idle,
    Starting {
        token: TickToken,
        pending: DragSession,
    },
    Active,
}

/// Owns the drag session tracker and the deferred start tick.
///
/// The session is published no earlier than one scheduling tick after the
/// start request. At most one tick is pending at a time; a new start request
/// or a cleanup withdraws it.
#[derive(Debug)]
pub struct GestureController<K: TickScheduler> {
    scheduler: K,
    phase: Phase,
    tracker: SessionTracker,
}

impl<K: TickScheduler> GestureController<K> {
    /// Creates an idle controller.
    #[must_use]
    pub const fn new(scheduler: K) -> Self {
        Self {
            scheduler,
            phase: Phase::Idle,
            tracker: SessionTracker::new(),
        }
    }

    /// Moves to `Starting`, superseding any pending start and abandoning any
    /// published session.
    pub fn request_start(&mut self, session: DragSession) -> TickToken {
        if let Phase::Starting { token, pending } = &self.phase {
            debug!(%token, superseded = ?pending, "superseding pending drag start");
            self.scheduler.cancel(*token);
        }
        if let Some(abandoned) = self.tracker.end() {
            warn!(?abandoned, "drag start abandoned an active session");
        }

        let token = self.scheduler.schedule();
        debug!(%token, ?session, "drag start deferred");
        self.phase = Phase::Starting {
            token,
            pending: session,
        };
        token
    }

    /// Publishes the pending session when `token` is the pending tick.
    ///
    /// Returns `false` for stale or unknown tokens.
    pub fn on_tick(&mut self, token: TickToken) -> bool {
        match std::mem::take(&mut self.phase) {
            Phase::Starting {
                token: pending_token,
                pending,
            } if pending_token == token => {
                debug!(%token, session = ?pending, "drag session published");
                self.tracker.begin(pending);
                self.phase = Phase::Active;
                true
            }
            other => {
                self.phase = other;
                false
            }
        }
    }

    /// Ends the gesture: withdraws the pending tick and clears the session.
    ///
    /// Returns `true` when there was anything to clean up; a repeated call
    /// returns `false` and changes nothing.
    pub fn finish(&mut self) -> bool {
        let was_idle = matches!(self.phase, Phase::Idle);
        if let Phase::Starting { token, .. } = &self.phase {
            self.scheduler.cancel(*token);
        }
        let cleared = self.tracker.end();
        self.phase = Phase::Idle;
        if !was_idle {
            debug!(session = ?cleared, "drag gesture finished");
        }
        !was_idle || cleared.is_some()
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> GesturePhase {
        match self.phase {
            Phase::Idle => GesturePhase::Idle,
            Phase::Starting { .. } => GesturePhase::Starting,
            Phase::Active => GesturePhase::Active,
        }
    }

    /// Returns the token of the pending start tick, if any.
    #[must_use]
    pub const fn pending_tick(&self) -> Option<TickToken> {
        match self.phase {
            Phase::Starting { token, .. } => Some(token),
            Phase::Idle | Phase::Active => None,
        }
    }

    /// Returns the published session.
    #[must_use]
    pub const fn session(&self) -> Option<&DragSession> {
        self.tracker.current()
    }

    /// Records the column that now holds the dragged task.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when no task drag is published.
    pub fn update_container(&mut self, column_id: ColumnId) -> Result<(), SessionError> {
        self.tracker.update_container(column_id)
    }

    /// Returns the scheduler.
    #[must_use]
    pub const fn scheduler(&self) -> &K {
        &self.scheduler
    }

    /// Returns the scheduler mutably, for hosts that drive ticks.
    pub const fn scheduler_mut(&mut self) -> &mut K {
        &mut self.scheduler
    }
}
