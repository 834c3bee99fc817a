//! Unified dialect dispatch.
//!
//! Centralizes backend selection so no other code matches on [`Dsl`].

use buildscript_codegen::{BuildScriptBuilder, Syntax};
use buildscript_codegen_groovy::GroovySyntax;
use buildscript_codegen_kotlin::KotlinSyntax;
use buildscript_core::{Dsl, InsecureProtocol};

/// Backend rendering `dsl`.
pub fn syntax_for(dsl: Dsl) -> Box<dyn Syntax> {
    match dsl {
        Dsl::Groovy => Box::new(GroovySyntax),
        Dsl::Kotlin => Box::new(KotlinSyntax),
    }
}

/// A builder for `<file_name>` in `dsl`.
pub fn builder_for(
    dsl: Dsl,
    file_name: &str,
    insecure_protocol: InsecureProtocol,
) -> BuildScriptBuilder {
    BuildScriptBuilder::new(syntax_for(dsl), file_name, insecure_protocol)
}

/// Human readable dialect name, as used in generated comments.
pub fn display_name(dsl: Dsl) -> &'static str {
    match dsl {
        Dsl::Groovy => "Groovy",
        Dsl::Kotlin => "Kotlin",
    }
}
