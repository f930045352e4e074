//! Domain Value Objects
//!
//! Immutable value types that describe one build invocation.

mod asset_list;
mod build_mode;
mod external_command;
mod layout;
mod stage_paths;

pub use asset_list::AssetList;
pub use build_mode::BuildMode;
pub use external_command::ExternalCommand;
pub use layout::DeployLayout;
pub use stage_paths::StagePaths;
