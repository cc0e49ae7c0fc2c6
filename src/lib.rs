//! Taskboard: column-based task board with live drag-and-drop reordering.
//!
//! The crate provides the reordering engine behind a Kanban-style board.
//! During a drag gesture it keeps recomputing where the dragged task or
//! column belongs and commits each move at once. Task editing and a recycle
//! bin sit alongside it as collaborators.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Boards, sessions and the hover resolver, free of host
//!   concerns
//! - **Ports**: Store and tick-scheduler traits the host plugs into
//! - **Adapters**: In-memory implementations and a tokio event pump
//!
//! # Modules
//!
//! - [`board`]: Board model, drag engine and editing commands

pub mod board;
