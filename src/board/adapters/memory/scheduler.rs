//! Queue-backed tick scheduler driven by the host loop.

use std::collections::VecDeque;

use crate::board::ports::{TickScheduler, TickToken};

/// Tick scheduler whose ticks fire when the host drains them.
///
/// The host calls [`QueuedTickScheduler::take_due`] once per scheduling turn
/// and hands every returned token to the engine.
#[derive(Debug, Clone, Default)]
pub struct QueuedTickScheduler {
    next: u64,
    due: VecDeque<TickToken>,
}

impl QueuedTickScheduler {
    /// Creates a scheduler with nothing queued.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: 0,
            due: VecDeque::new(),
        }
    }

    /// Drains every queued token in scheduling order.
    pub fn take_due(&mut self) -> Vec<TickToken> {
        self.due.drain(..).collect()
    }

    /// Returns the number of queued ticks.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.due.len()
    }
}

impl TickScheduler for QueuedTickScheduler {
    fn schedule(&mut self) -> TickToken {
        self.next = self.next.wrapping_add(1);
        let token = TickToken::new(self.next);
        self.due.push_back(token);
        token
    }

    fn cancel(&mut self, token: TickToken) {
        self.due.retain(|queued| *queued != token);
    }
}
