//! Port contracts for the task board.
//!
//! Ports define host-agnostic interfaces used by the board services.

pub mod scheduler;
pub mod store;

pub use scheduler::{TickScheduler, TickToken};
pub use store::{BoardStore, StoreOutcome};
