//! The per-dialect rendering contract.

use buildscript_core::Dsl;
use indexmap::IndexMap;

use crate::model::{ContainerElement, Expr, PropertyAssignment, Statement};

/// Every syntactic decision a dialect makes.
///
/// Implementations are stateless. The printer and the expression model consult
/// the active implementation whenever text depends on the dialect.
pub trait Syntax {
    /// The dialect this syntax renders.
    fn dsl(&self) -> Dsl;

    /// Quote a string literal.
    fn string(&self, value: &str) -> String;

    fn map_literal(&self, entries: &IndexMap<String, Expr>) -> String;

    /// Render the first positional argument of a method call.
    fn first_arg(&self, arg: &Expr) -> String;

    /// A line of the `plugins { }` block.
    fn plugin_dependency_spec(&self, plugin_id: &str, version: Option<&str>) -> String;

    /// A line of a `dependencies { }` block; `notation` is already rendered.
    fn dependency_spec(&self, configuration: &str, notation: &str) -> String;

    fn platform_notation(&self, coordinates: &str) -> String {
        format!("platform({})", self.string(coordinates))
    }

    fn project_notation(&self, path: &str) -> String {
        format!("project({})", self.string(path))
    }

    fn self_notation(&self) -> String {
        "project".to_string()
    }

    fn property_assignment(&self, assignment: &PropertyAssignment) -> String;

    fn convention_selector(&self, convention: &str) -> Option<String>;

    fn task_selector(&self, task_name: &str, task_type: &str) -> Option<String>;

    fn task_by_type_selector(&self, task_type: &str) -> Option<String>;

    fn task_registration(&self, task_name: &str, task_type: &str) -> String;

    fn task_configuration(&self, task_name: &str, task_type: &str) -> String;

    fn suite_registration(&self, suite_name: &str, suite_type: &str) -> String;

    fn suite_configuration(&self, suite_name: &str, suite_type: &str) -> String;

    fn reference_task(&self, task_name: &str) -> String;

    fn reference_suite(&self, suite_name: &str) -> String;

    /// Build the declaration statement that creates a container element.
    fn create_container_element(&self, element: &ContainerElement) -> Statement;

    fn reference_created_container_element(
        &self,
        container: &str,
        element: &str,
        var_name: Option<&str>,
    ) -> String;

    /// Reference to an existing element of a container.
    fn container_element(&self, container: &str, element: &str) -> String;

    /// Plugin applied by convention-plugin builds.
    fn convention_plugin_id(&self) -> &'static str;

    /// Expression the `check` task depends on to run a non-default test suite.
    fn suite_dependency(&self, suite_name: &str) -> Expr;
}
