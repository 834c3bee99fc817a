use buildscript_codegen::{
    Expr, Statement, Syntax,
    model::{BlockStatement, ContainerElement, PropertyAssignment},
};
use buildscript_core::Dsl;
use indexmap::IndexMap;

/// Groovy DSL (`build.gradle`).
#[derive(Debug, Clone, Copy, Default)]
pub struct GroovySyntax;

impl GroovySyntax {
    /// `k: v, k2: v2`
    fn map_entries(&self, entries: &IndexMap<String, Expr>) -> String {
        entries
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value.render(self)))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Syntax for GroovySyntax {
    fn dsl(&self) -> Dsl {
        Dsl::Groovy
    }

    fn string(&self, value: &str) -> String {
        format!("'{}'", value)
    }

    fn map_literal(&self, entries: &IndexMap<String, Expr>) -> String {
        format!("[{}]", self.map_entries(entries))
    }

    /// A leading map argument becomes named arguments.
    fn first_arg(&self, arg: &Expr) -> String {
        match arg {
            Expr::Map(entries) => self.map_entries(entries),
            other => other.render(self),
        }
    }

    fn plugin_dependency_spec(&self, plugin_id: &str, version: Option<&str>) -> String {
        match version {
            Some(version) => format!("id '{}' version '{}'", plugin_id, version),
            None => format!("id '{}'", plugin_id),
        }
    }

    fn dependency_spec(&self, configuration: &str, notation: &str) -> String {
        format!("{} {}", configuration, notation)
    }

    fn property_assignment(&self, assignment: &PropertyAssignment) -> String {
        format!("{} = {}", assignment.name, assignment.value.render(self))
    }

    fn convention_selector(&self, _convention: &str) -> Option<String> {
        None
    }

    fn task_selector(&self, task_name: &str, _task_type: &str) -> Option<String> {
        Some(format!("tasks.named('{}')", task_name))
    }

    fn task_by_type_selector(&self, task_type: &str) -> Option<String> {
        Some(format!("tasks.withType({})", task_type))
    }

    fn task_registration(&self, task_name: &str, task_type: &str) -> String {
        format!("tasks.register('{}', {})", task_name, task_type)
    }

    fn task_configuration(&self, task_name: &str, _task_type: &str) -> String {
        task_name.to_string()
    }

    fn suite_registration(&self, suite_name: &str, _suite_type: &str) -> String {
        suite_name.to_string()
    }

    fn suite_configuration(&self, suite_name: &str, _suite_type: &str) -> String {
        suite_name.to_string()
    }

    fn reference_task(&self, task_name: &str) -> String {
        format!("tasks.{}", task_name)
    }

    fn reference_suite(&self, suite_name: &str) -> String {
        suite_name.to_string()
    }

    /// `container { element(Type) { ... } }`
    fn create_container_element(&self, element: &ContainerElement) -> Statement {
        let selector = match &element.element_type {
            Some(element_type) => format!("{}({})", element.element_name, element_type),
            None => element.element_name.clone(),
        };
        let inner = BlockStatement::declaration(None, selector, element.body.clone());
        BlockStatement::declaration(
            element.comment.as_deref(),
            element.container.clone(),
            vec![inner.into()],
        )
        .into()
    }

    fn reference_created_container_element(
        &self,
        container: &str,
        element: &str,
        _var_name: Option<&str>,
    ) -> String {
        format!("{}.{}", container, element)
    }

    fn container_element(&self, container: &str, element: &str) -> String {
        format!("{}.{}", container, element)
    }

    fn convention_plugin_id(&self) -> &'static str {
        "groovy-gradle-plugin"
    }

    /// `testing.suites.<name>`
    fn suite_dependency(&self, suite_name: &str) -> Expr {
        Expr::property(
            Expr::property(Expr::ident("testing"), "suites"),
            suite_name,
        )
    }
}
