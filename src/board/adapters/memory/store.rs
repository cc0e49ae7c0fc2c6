//! In-memory board store.

use std::sync::Arc;

use crate::board::{domain::Board, ports::BoardStore};

/// Process-local store holding the published board.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardStore {
    current: Arc<Board>,
    revision: u64,
}

impl InMemoryBoardStore {
    /// Creates a store publishing `board` as revision zero.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            current: Arc::new(board),
            revision: 0,
        }
    }

    /// Returns the number of snapshots published since creation.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }
}

impl BoardStore for InMemoryBoardStore {
    fn snapshot(&self) -> Arc<Board> {
        Arc::clone(&self.current)
    }

    fn publish(&mut self, board: Board) {
        self.current = Arc::new(board);
        self.revision = self.revision.wrapping_add(1);
    }
}
