//! Kotlin DSL backend for the build script generator.

mod naming;
mod syntax;

pub use naming::{boolean_property_name, plugin_accessor};
pub use syntax::KotlinSyntax;
