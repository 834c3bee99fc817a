//! Lowering of a manifest into builder calls.

use buildscript_codegen::{BuildScriptBuilder, Expr, Result, ScriptBlock};
use buildscript_core::{Dsl, InsecureProtocol};
use buildscript_manifest::{
    DependencyEntry, DependencyKind, Manifest, PropertyEntry, RepositoryKind, SuiteFramework,
};

use crate::dialect;

/// Settings that may be overridden from the command line.
#[derive(Debug, Clone, Copy)]
pub struct LowerOptions {
    pub dsl: Dsl,
    pub insecure_protocol: InsecureProtocol,
    pub external_comments: bool,
}

impl LowerOptions {
    /// Resolve options, preferring command line values over the manifest.
    pub fn resolve(
        manifest: &Manifest,
        dsl: Option<Dsl>,
        insecure_protocol: Option<InsecureProtocol>,
        external_comments: bool,
    ) -> Self {
        Self {
            dsl: manifest.script.dsl_or(dsl),
            insecure_protocol: manifest.script.insecure_protocol_or(insecure_protocol),
            external_comments,
        }
    }
}

/// A property with its value converted.
struct LoweredProperty<'a> {
    comment: Option<&'a str>,
    name: &'a str,
    value: Expr,
}

fn lower_properties(properties: &[PropertyEntry]) -> Result<Vec<LoweredProperty<'_>>> {
    let mut lowered = Vec::with_capacity(properties.len());
    for property in properties {
        lowered.push(LoweredProperty {
            comment: property.comment.as_deref(),
            name: &property.name,
            value: Expr::try_from(&property.value)?,
        });
    }
    Ok(lowered)
}

/// Build the script described by `manifest`.
///
/// Construction errors (a malformed repository url, a dependency for an
/// undeclared suite, an unsupported value) are returned as they occur.
pub fn lower(manifest: &Manifest, opts: &LowerOptions) -> Result<BuildScriptBuilder> {
    let script = &manifest.script;
    tracing::debug!(
        dsl = %opts.dsl,
        insecure_protocol = %opts.insecure_protocol,
        script = %script.name,
        "lowering manifest"
    );
    let mut builder = dialect::builder_for(opts.dsl, &script.name, opts.insecure_protocol);
    if script.incubating {
        builder = builder.with_incubating_apis();
    }
    if opts.external_comments {
        builder = builder.with_external_comments();
    }

    for line in &script.header {
        builder.file_comment(line);
    }

    if script.convention_plugin {
        let comment = format!(
            "Support convention plugins written in {}.",
            dialect::display_name(opts.dsl)
        );
        builder.convention_plugin_support(Some(&comment));
    }

    for plugin in &manifest.plugins {
        let comment = plugin.comment.as_deref();
        match &plugin.version {
            Some(version) => builder.plugin_with_version(comment, &plugin.id, version),
            None => builder.plugin(comment, &plugin.id),
        };
    }

    for repository in &manifest.repositories {
        let comment = repository.comment.as_deref();
        let repositories = builder.repositories();
        match repository.kind {
            RepositoryKind::MavenCentral => {
                repositories.maven_central(comment);
            }
            RepositoryKind::MavenLocal => {
                repositories.maven_local(comment);
            }
            RepositoryKind::GradlePluginPortal => {
                repositories.gradle_plugin_portal(comment);
            }
            RepositoryKind::Maven => {
                repositories.maven(comment, repository.url.as_deref().unwrap_or_default())?;
            }
        }
    }

    // Suites first, so suite dependencies below can find them.
    for suite in &manifest.suites {
        match suite.framework {
            SuiteFramework::Junit => builder.testing().junit_suite(&suite.name),
            SuiteFramework::JunitPlatform => builder.testing().junit_platform_suite(&suite.name),
        };
    }

    for dependency in &manifest.dependencies {
        lower_dependency(&mut builder, dependency)?;
    }

    for property in lower_properties(&manifest.properties)? {
        builder.property_assignment(property.comment, property.name, property.value);
    }

    for convention in &manifest.conventions {
        for property in lower_properties(&convention.properties)? {
            builder.convention_property_assignment(
                property.comment,
                &convention.name,
                property.name,
                property.value,
            );
        }
    }

    for task in &manifest.tasks {
        let properties = lower_properties(&task.properties)?;
        if task.register {
            builder.task_registration(
                task.comment.as_deref(),
                &task.name,
                &task.task_type,
                |body: &mut ScriptBlock| {
                    for property in properties {
                        body.property_assignment(property.comment, property.name, property.value);
                    }
                },
            );
            continue;
        }
        // A configured task has no statement of its own; its comment goes on
        // the first property.
        for (i, property) in properties.into_iter().enumerate() {
            let comment = if i == 0 {
                task.comment.as_deref().or(property.comment)
            } else {
                property.comment
            };
            builder.task_property_assignment(
                comment,
                &task.name,
                &task.task_type,
                property.name,
                property.value,
            );
        }
    }

    for task_type in &manifest.task_types {
        for property in lower_properties(&task_type.properties)? {
            builder.task_type_property_assignment(
                property.comment,
                &task_type.task_type,
                property.name,
                property.value,
            );
        }
    }

    Ok(builder)
}

fn lower_dependency(builder: &mut BuildScriptBuilder, dependency: &DependencyEntry) -> Result<()> {
    let configuration = dependency.configuration.as_str();
    let comment = dependency.comment.as_deref();
    let notations = dependency.notations.iter().map(String::as_str);

    if let Some(suite) = &dependency.suite {
        builder.dependency_for_suite(suite, configuration, comment, notations)?;
        return Ok(());
    }

    match dependency.kind {
        DependencyKind::External => {
            builder.dependency(configuration, comment, notations);
        }
        DependencyKind::Constraint => {
            builder
                .dependencies()
                .dependency_constraint(configuration, comment, notations);
        }
        DependencyKind::Platform => {
            for (i, notation) in notations.enumerate() {
                let comment = if i == 0 { comment } else { None };
                builder
                    .dependencies()
                    .platform_dependency(configuration, comment, notation);
            }
        }
        DependencyKind::Project => {
            for (i, path) in notations.enumerate() {
                let comment = if i == 0 { comment } else { None };
                builder
                    .dependencies()
                    .project_dependency(configuration, comment, path);
            }
        }
        DependencyKind::SelfProject => {
            builder.dependencies().self_dependency(configuration, comment);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use buildscript_codegen::Error;

    use super::*;

    fn options(dsl: Dsl) -> LowerOptions {
        LowerOptions {
            dsl,
            insecure_protocol: InsecureProtocol::Warn,
            external_comments: false,
        }
    }

    fn render(src: &str, dsl: Dsl) -> String {
        let manifest = Manifest::from_str(src).unwrap();
        lower(&manifest, &options(dsl)).unwrap().render().unwrap()
    }

    #[test]
    fn test_resolve_prefers_command_line() {
        let manifest =
            Manifest::from_str("[script]\ndsl = \"groovy\"\ninsecure-protocol = \"fail\"\n").unwrap();
        let opts = LowerOptions::resolve(&manifest, None, None, false);
        assert_eq!(opts.dsl, Dsl::Groovy);
        assert_eq!(opts.insecure_protocol, InsecureProtocol::Fail);

        let opts = LowerOptions::resolve(
            &manifest,
            Some(Dsl::Kotlin),
            Some(InsecureProtocol::Upgrade),
            true,
        );
        assert_eq!(opts.dsl, Dsl::Kotlin);
        assert_eq!(opts.insecure_protocol, InsecureProtocol::Upgrade);
        assert!(opts.external_comments);
    }

    #[test]
    fn test_dependency_kinds() {
        let out = render(
            r#"
[[dependencies]]
configuration = "implementation"
kind = "platform"
notations = ["org:bom:1", "org:other-bom:2"]
comment = "Align versions"

[[dependencies]]
configuration = "implementation"
kind = "project"
notations = [":lib"]

[[dependencies]]
configuration = "testImplementation"
kind = "self"

[[dependencies]]
configuration = "implementation"
kind = "constraint"
notations = ["org.apache.commons:commons-text:1.9"]
"#,
            Dsl::Kotlin,
        );
        assert!(out.contains("    constraints {\n        implementation(\"org.apache.commons:commons-text:1.9\")\n    }\n"));
        assert!(out.contains("    // Align versions\n    implementation(platform(\"org:bom:1\"))\n    implementation(platform(\"org:other-bom:2\"))\n"));
        assert!(out.contains("implementation(project(\":lib\"))"));
        assert!(out.contains("testImplementation(project)"));
        assert!(out.find("constraints {").unwrap() < out.find("platform(").unwrap());
    }

    #[test]
    fn test_configured_task_comment_goes_on_first_property() {
        let out = render(
            r#"
[[tasks]]
name = "test"
type = "Test"
comment = "Run tests in parallel"
properties = [
    { name = "maxParallelForks", value = 4 },
    { name = "failFast", value = true },
]
"#,
            Dsl::Groovy,
        );
        assert!(out.contains(
            "tasks.named('test') {\n    // Run tests in parallel\n    maxParallelForks = 4\n    failFast = true\n}\n"
        ));
    }

    #[test]
    fn test_registered_task() {
        let out = render(
            r#"
[[tasks]]
name = "docs"
type = "Javadoc"
register = true
comment = "Aggregate the docs"
properties = [{ name = "failOnError", value = false }]
"#,
            Dsl::Kotlin,
        );
        assert!(out.contains(
            "// Aggregate the docs\nval docs by tasks.registering(Javadoc::class) {\n    isFailOnError = false\n}\n"
        ));
    }

    #[test]
    fn test_convention_plugin() {
        let out = render("[script]\nconvention-plugin = true\n", Dsl::Groovy);
        assert!(out.contains("    // Support convention plugins written in Groovy.\n    id 'groovy-gradle-plugin'\n"));
        assert!(out.contains("gradlePluginPortal()"));
    }

    #[test]
    fn test_table_values_become_maps() {
        let out = render(
            r#"
[[properties]]
name = "ext"
value = { retries = 3, group = "org.example" }
"#,
            Dsl::Kotlin,
        );
        assert!(out.contains("ext = mapOf(\"retries\" to 3, \"group\" to \"org.example\")"));
    }

    #[test]
    fn test_suite_dependency_requires_declared_suite() {
        let manifest = Manifest::from_str(
            r#"
[script]
incubating = true

[[dependencies]]
configuration = "implementation"
notations = ["org.assertj:assertj-core:3.24.2"]
suite = "integrationTest"
"#,
        )
        .unwrap();
        let err = lower(&manifest, &options(Dsl::Kotlin)).err().unwrap();
        assert!(matches!(err, Error::UnknownSuite { ref name } if name == "integrationTest"));
    }

    #[test]
    fn test_malformed_repository_url() {
        let manifest =
            Manifest::from_str("[[repositories]]\nkind = \"maven\"\nurl = \"not a url\"\n").unwrap();
        let err = lower(&manifest, &options(Dsl::Groovy)).err().unwrap();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }
}
