//! Validation of a parsed manifest against its source.

use miette::SourceSpan;

use super::{DependencyKind, Manifest, PropertyEntry, RepositoryKind};
use crate::{Result, SourceContext};

/// Parsing and validation context that carries source information.
///
/// Wraps the source with the path of the section being validated, so nested
/// errors can say where they come from.
///
/// # Example
///
/// ```ignore
/// let source = SourceContext::new(src, "script.toml");
/// let ctx = ParseContext::new(&source);
/// ctx.validate_name("integrationTest", "suite")?;
///
/// let task = ctx.push("tasks").push("docs");
/// task.validate_name("enabled", "property")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    source: &'a SourceContext,
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(source: &'a SourceContext) -> Self {
        Self {
            source,
            path: Vec::new(),
        }
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: self.source,
            path,
        }
    }

    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Describe `kind` for error messages, e.g. "property in 'tasks.docs'".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Span of the `n`th quoted occurrence of `value` in the source.
    pub fn find_span(&self, value: &str, n: usize) -> Option<SourceSpan> {
        find_value_spans(self.source.src(), value).into_iter().nth(n)
    }

    pub fn source(&self) -> &'a SourceContext {
        self.source
    }

    /// Names are emitted verbatim and must be non-empty words.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if let Some(reason) = validate_name(name) {
            return Err(self.source.invalid_name_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name, 0),
            ));
        }
        Ok(())
    }

    /// Check a property entry: its name and every (nested) value kind.
    pub fn validate_property(&self, property: &PropertyEntry) -> Result<()> {
        self.validate_name(&property.name, "property")?;
        if let Some(kind) = unsupported_value_kind(&property.value) {
            return Err(self.source.unsupported_value_error(
                &property.name,
                kind,
                self.find_span(&property.name, 0),
            ));
        }
        Ok(())
    }
}

/// Validate the manifest after parsing.
pub(crate) fn validate_manifest(manifest: &Manifest, source: &SourceContext) -> Result<()> {
    let ctx = ParseContext::new(source);

    ctx.validate_name(&manifest.script.name, "script")?;

    for plugin in &manifest.plugins {
        ctx.validate_name(&plugin.id, "plugin")?;
    }

    let mut maven_index = 0;
    for repository in &manifest.repositories {
        match (repository.kind, &repository.url) {
            (RepositoryKind::Maven, None) => {
                return Err(source.missing_url_error(ctx.find_span("maven", maven_index)));
            }
            (RepositoryKind::Maven, Some(_)) => {}
            (kind, Some(url)) => {
                return Err(source.validation_error_at(
                    format!("{} repositories take no url", kind),
                    ctx.find_span(url, 0),
                ));
            }
            (_, None) => {}
        }
        if repository.kind == RepositoryKind::Maven {
            maven_index += 1;
        }
    }

    for dependency in &manifest.dependencies {
        ctx.validate_name(&dependency.configuration, "configuration")?;
        match dependency.kind {
            DependencyKind::SelfProject if !dependency.notations.is_empty() => {
                return Err(source.validation_error_at(
                    "self dependencies take no notations",
                    ctx.find_span(&dependency.notations[0], 0),
                ));
            }
            DependencyKind::SelfProject => {}
            kind if dependency.notations.is_empty() => {
                return Err(source.validation_error_at(
                    format!("{} dependency without notations", kind),
                    ctx.find_span(&dependency.configuration, 0),
                ));
            }
            _ => {}
        }
        if let Some(suite) = &dependency.suite {
            if dependency.kind != DependencyKind::External {
                return Err(source.validation_error_at(
                    format!(
                        "only external dependencies can be added to suite '{}', found {}",
                        suite, dependency.kind
                    ),
                    ctx.find_span(suite, 0),
                ));
            }
        }
    }

    for (i, suite) in manifest.suites.iter().enumerate() {
        ctx.validate_name(&suite.name, "suite")?;
        if manifest.suites[..i].iter().any(|s| s.name == suite.name) {
            return Err(source.duplicate_suite_error(
                &suite.name,
                ctx.find_span(&suite.name, 0),
                ctx.find_span(&suite.name, 1),
            ));
        }
    }

    for property in &manifest.properties {
        ctx.validate_property(property)?;
    }

    for convention in &manifest.conventions {
        ctx.validate_name(&convention.name, "convention")?;
        let convention_ctx = ctx.push("conventions").push(&convention.name);
        for property in &convention.properties {
            convention_ctx.validate_property(property)?;
        }
    }

    for task in &manifest.tasks {
        ctx.validate_name(&task.name, "task")?;
        ctx.validate_name(&task.task_type, "task type")?;
        let task_ctx = ctx.push("tasks").push(&task.name);
        for property in &task.properties {
            task_ctx.validate_property(property)?;
        }
    }

    for task_type in &manifest.task_types {
        ctx.validate_name(&task_type.task_type, "task type")?;
        let type_ctx = ctx.push("task-types").push(&task_type.task_type);
        for property in &task_type.properties {
            type_ctx.validate_property(property)?;
        }
    }

    Ok(())
}

/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_name(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }
    if name.chars().any(char::is_whitespace) {
        return Some("name cannot contain whitespace");
    }
    None
}

/// Kind of the first value the generator cannot express, if any.
pub(crate) fn unsupported_value_kind(value: &toml::Value) -> Option<&'static str> {
    match value {
        toml::Value::Array(_) | toml::Value::Datetime(_) => Some(value.type_str()),
        toml::Value::Table(table) => table.values().find_map(unsupported_value_kind),
        toml::Value::Float(f) if !f.is_finite() => Some("non-finite float"),
        toml::Value::String(_)
        | toml::Value::Integer(_)
        | toml::Value::Float(_)
        | toml::Value::Boolean(_) => None,
    }
}

/// Spans of every `"value"` in the source, covering the text between the quotes.
pub(crate) fn find_value_spans(src: &str, value: &str) -> Vec<SourceSpan> {
    let quoted = format!("\"{}\"", value);
    src.match_indices(&quoted)
        .map(|(pos, _)| SourceSpan::from((pos + 1, value.len())))
        .collect()
}
