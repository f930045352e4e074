//! Command handlers for the wasmdist binary

pub mod build;
pub mod clean;
pub mod project_root;
