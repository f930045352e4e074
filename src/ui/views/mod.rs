//! Per-command renderers. Each returns a `String`; callers decide where it goes.

pub mod build;
pub mod clean;
pub mod config;
