//! Task board with live drag-and-drop reordering.
//!
//! A board is an ordered list of columns, each an ordered list of tasks.
//! While a drag gesture is in progress every hover event is resolved into a
//! move that is committed immediately, so the view shows the new order before
//! the item is released. The module follows hexagonal architecture:
//!
//! - Domain types and the hover resolver in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Gesture lifecycle, drag engine and editing commands in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
