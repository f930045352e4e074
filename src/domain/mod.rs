//! Domain Layer
//!
//! Pure types and ports for the build pipeline. Nothing in here spawns a
//! process or touches the disk directly.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (BuildMode, DeployLayout, AssetList, ...)
//! - `ports/` - Interface definitions for infrastructure

pub mod ports;
pub mod value_objects;
