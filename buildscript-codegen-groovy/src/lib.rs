//! Groovy DSL backend for the build script generator.
//!
//! ```ignore
//! use buildscript_codegen::BuildScriptBuilder;
//! use buildscript_codegen_groovy::GroovySyntax;
//!
//! let mut builder = BuildScriptBuilder::new(Box::new(GroovySyntax), "build", Default::default());
//! builder.plugin(None, "java");
//! assert!(builder.render()?.contains("id 'java'"));
//! ```

mod syntax;

pub use syntax::GroovySyntax;
