// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! The `script.toml` manifest: a declarative description of one build script.

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::*;
