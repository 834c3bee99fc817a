//! Test utilities for dialect backends.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{fs, path::PathBuf};

use buildscript_core::Dsl;
use indexmap::IndexMap;
use tempfile::TempDir;

use crate::{
    BuildScriptBuilder, Expr, Syntax, TemplateOperation,
    model::{BlockStatement, ContainerElement, PropertyAssignment, Statement},
};

/// Assert generated content matches expected content exactly.
///
/// Shows a line-numbered diff of the first mismatching lines on failure.
pub fn assert_content_eq(actual: &str, expected: &str) {
    if actual == expected {
        return;
    }
    let actual_lines: Vec<&str> = actual.lines().collect();
    let expected_lines: Vec<&str> = expected.lines().collect();
    for (i, (a, e)) in actual_lines.iter().zip(expected_lines.iter()).enumerate() {
        if a != e {
            panic!(
                "content differs at line {}:\n  expected: {:?}\n    actual: {:?}\n\nfull output:\n{}",
                i + 1,
                e,
                a,
                actual
            );
        }
    }
    panic!(
        "content differs in length: expected {} lines, got {}\n\nfull output:\n{}",
        expected_lines.len(),
        actual_lines.len(),
        actual
    );
}

/// Run the builder's emission into a fresh temporary directory.
///
/// Returns the directory (keep it alive while inspecting) and the path of the
/// written script.
pub fn generate_to_temp(builder: BuildScriptBuilder) -> crate::Result<(TempDir, PathBuf)> {
    let temp = TempDir::new().map_err(|source| crate::Error::Write {
        path: std::env::temp_dir(),
        source,
    })?;
    let path = temp.path().join(builder.file_name());
    Box::new(builder.create(temp.path())).generate()?;
    Ok((temp, path))
}

/// Read a generated script back from disk.
pub fn read_generated(path: &std::path::Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
}

/// Check the blank-line layout rules of a rendered script.
///
/// - no blank line directly after a line opening a block
/// - never two blank lines in a row
/// - a top-level block is followed by a blank line unless it ends the file
/// - a comment is preceded by a blank line unless it opens its block
pub fn assert_layout(content: &str) {
    let is_comment = |line: &str| line.trim_start().starts_with("//");
    let lines: Vec<&str> = content.lines().collect();
    for pair in lines.windows(2) {
        let (prev, line) = (pair[0], pair[1]);
        if prev.ends_with('{') {
            assert!(
                !line.is_empty(),
                "blank line after block opening {:?}\n\n{}",
                prev,
                content
            );
        }
        assert!(
            !(prev.is_empty() && line.is_empty()),
            "two consecutive blank lines\n\n{}",
            content
        );
        if prev == "}" {
            assert!(
                line.is_empty(),
                "no blank line after top-level block, before {:?}\n\n{}",
                line,
                content
            );
        }
        if is_comment(line) {
            assert!(
                prev.is_empty() || prev.ends_with('{') || is_comment(prev),
                "no blank line before comment {:?}\n\n{}",
                line,
                content
            );
        }
    }
}

/// A neutral dialect with distinctive spellings, for unit tests of the model.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainSyntax;

impl Syntax for PlainSyntax {
    fn dsl(&self) -> Dsl {
        Dsl::Groovy
    }

    fn string(&self, value: &str) -> String {
        format!("<{}>", value)
    }

    fn map_literal(&self, entries: &IndexMap<String, Expr>) -> String {
        let body = entries
            .iter()
            .map(|(k, v)| format!("{}={}", k, v.render(self)))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{{{}}}", body)
    }

    fn first_arg(&self, arg: &Expr) -> String {
        format!("first:{}", arg.render(self))
    }

    fn plugin_dependency_spec(&self, plugin_id: &str, version: Option<&str>) -> String {
        match version {
            Some(version) => format!("plugin {}@{}", plugin_id, version),
            None => format!("plugin {}", plugin_id),
        }
    }

    fn dependency_spec(&self, configuration: &str, notation: &str) -> String {
        format!("{} {}", configuration, notation)
    }

    fn property_assignment(&self, assignment: &PropertyAssignment) -> String {
        if assignment.legacy {
            format!("{} = {}", assignment.name, assignment.value.render(self))
        } else {
            format!("{}.set({})", assignment.name, assignment.value.render(self))
        }
    }

    fn convention_selector(&self, _convention: &str) -> Option<String> {
        None
    }

    fn task_selector(&self, task_name: &str, task_type: &str) -> Option<String> {
        Some(format!("named({}: {})", task_name, task_type))
    }

    fn task_by_type_selector(&self, task_type: &str) -> Option<String> {
        Some(format!("withType({})", task_type))
    }

    fn task_registration(&self, task_name: &str, task_type: &str) -> String {
        format!("register({}: {})", task_name, task_type)
    }

    fn task_configuration(&self, task_name: &str, _task_type: &str) -> String {
        task_name.to_string()
    }

    fn suite_registration(&self, suite_name: &str, suite_type: &str) -> String {
        format!("registerSuite({}: {})", suite_name, suite_type)
    }

    fn suite_configuration(&self, suite_name: &str, _suite_type: &str) -> String {
        suite_name.to_string()
    }

    fn reference_task(&self, task_name: &str) -> String {
        format!("task:{}", task_name)
    }

    fn reference_suite(&self, suite_name: &str) -> String {
        format!("suite:{}", suite_name)
    }

    fn create_container_element(&self, element: &ContainerElement) -> Statement {
        BlockStatement::declaration(
            element.comment.as_deref(),
            format!("{}/{}", element.container, element.element_name),
            element.body.clone(),
        )
        .into()
    }

    fn reference_created_container_element(
        &self,
        container: &str,
        element: &str,
        _var_name: Option<&str>,
    ) -> String {
        format!("{}/{}", container, element)
    }

    fn container_element(&self, container: &str, element: &str) -> String {
        format!("{}/{}", container, element)
    }

    fn convention_plugin_id(&self) -> &'static str {
        "plain-plugin"
    }

    fn suite_dependency(&self, suite_name: &str) -> Expr {
        Expr::property(Expr::ident("suites"), suite_name)
    }
}
