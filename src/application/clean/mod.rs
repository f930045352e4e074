//! Clean Use Case
//!
//! Removes staged output: the deploy directory and, on request, the
//! compiler output directory.

mod options;
mod result;
mod use_case;

pub use options::CleanOptions;
pub use result::CleanResult;
pub use use_case::CleanUseCase;
