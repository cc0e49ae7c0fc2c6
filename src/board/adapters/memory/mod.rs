//! In-memory adapters for the board ports.

mod scheduler;
mod store;

pub use scheduler::QueuedTickScheduler;
pub use store::InMemoryBoardStore;
