//! Input adapters translating external event sources into domain events.

#[cfg(feature = "gui")]
pub mod gui;
