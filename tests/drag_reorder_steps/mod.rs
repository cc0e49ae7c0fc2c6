//! Step definitions for drag reordering scenarios.

mod given;
mod then;
