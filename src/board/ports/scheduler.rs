//! Port for the deferred drag-start tick.

use std::fmt;

/// Handle for one scheduled tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickToken(u64);

impl TickToken {
    /// Wraps a raw token value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for TickToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tick#{}", self.0)
    }
}

/// Schedules single callbacks for the next host scheduling turn.
///
/// The host delivers a due token back to the engine, which publishes the
/// pending drag session only if the token is still the pending one.
#[cfg_attr(test, mockall::automock)]
pub trait TickScheduler {
    /// Requests a tick and returns its token.
    fn schedule(&mut self) -> TickToken;

    /// Withdraws a previously scheduled tick. Unknown tokens are ignored.
    fn cancel(&mut self, token: TickToken);
}
