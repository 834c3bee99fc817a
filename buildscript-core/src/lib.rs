//! Core utilities and types for the build script generator.
//!
//! This crate provides the fundamental types shared by the code generation
//! crates, the manifest parser and the CLI.

mod dsl;
mod file;
mod insecure_protocol;
mod utils;

// Target dialects
pub use dsl::Dsl;
// File operations
pub use file::write_file;
// Repository policy
pub use insecure_protocol::InsecureProtocol;
// String utilities
pub use utils::{capitalize, is_lower_alpha, split_comment};
