//! Terminal UI for the wasmdist binary
//!
//! Everything the user sees in text mode is rendered here; JSON mode goes
//! through `wasmdist::infrastructure::JsonEventSink` instead.

pub mod blocks;
pub mod console;
pub mod context;
pub mod error;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
