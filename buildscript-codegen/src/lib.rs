//! Dialect-neutral model and builder for generated Gradle build scripts.
//!
//! This crate holds everything shared by the dialect backends
//! (e.g., `buildscript-codegen-kotlin`).
//!
//! # Module Organization
//!
//! - [`model`] - Expressions, statements and configuration selectors
//! - [`builder`] - The append-only [`BuildScriptBuilder`] and its nested blocks
//! - [`printer`] - The pretty printer shared by all dialects
//! - [`repository`] - Repository URLs and the insecure-protocol policy
//! - [`operation`] - Deferred emission to disk
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
mod error;
pub mod model;
pub mod operation;
pub mod printer;
pub mod repository;
mod syntax;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builder::{BuildScriptBuilder, ScriptBlock};
pub use error::{Error, Result};
pub use model::{Expr, MethodCall, Statement};
pub use operation::{CompositeOperation, ScriptOperation, TemplateOperation};
pub use syntax::Syntax;
