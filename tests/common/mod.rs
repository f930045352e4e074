//! Common test utilities for wasmdist integration tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project directory plus helpers to run the binary
//! - Fixtures: stand-in compiler scripts and static asset content
//! - Assertions: file-tree helpers with descriptive failure messages

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
