use buildscript_codegen::{
    Expr, Statement, Syntax,
    model::{BlockStatement, ContainerElement, PropertyAssignment},
};
use buildscript_core::Dsl;
use indexmap::IndexMap;

use crate::naming::{boolean_property_name, plugin_accessor};

/// Kotlin DSL (`build.gradle.kts`).
#[derive(Debug, Clone, Copy, Default)]
pub struct KotlinSyntax;

impl Syntax for KotlinSyntax {
    fn dsl(&self) -> Dsl {
        Dsl::Kotlin
    }

    fn string(&self, value: &str) -> String {
        format!("\"{}\"", value)
    }

    /// `mapOf("k" to v)`
    fn map_literal(&self, entries: &IndexMap<String, Expr>) -> String {
        let entries = entries
            .iter()
            .map(|(key, value)| format!("{} to {}", self.string(key), value.render(self)))
            .collect::<Vec<_>>()
            .join(", ");
        format!("mapOf({})", entries)
    }

    fn first_arg(&self, arg: &Expr) -> String {
        arg.render(self)
    }

    fn plugin_dependency_spec(&self, plugin_id: &str, version: Option<&str>) -> String {
        match version {
            Some(version) => format!("id(\"{}\") version \"{}\"", plugin_id, version),
            None if plugin_id.contains('.') => format!("id(\"{}\")", plugin_id),
            None => plugin_accessor(plugin_id),
        }
    }

    fn dependency_spec(&self, configuration: &str, notation: &str) -> String {
        format!("{}({})", configuration, notation)
    }

    fn property_assignment(&self, assignment: &PropertyAssignment) -> String {
        let value = assignment.value.render(self);
        if !assignment.legacy {
            return format!("{}.set({})", assignment.name, value);
        }
        if assignment.value.is_boolean() {
            format!("{} = {}", boolean_property_name(&assignment.name), value)
        } else {
            format!("{} = {}", assignment.name, value)
        }
    }

    fn convention_selector(&self, convention: &str) -> Option<String> {
        Some(convention.to_string())
    }

    fn task_selector(&self, task_name: &str, task_type: &str) -> Option<String> {
        Some(format!("tasks.named<{}>(\"{}\")", task_type, task_name))
    }

    fn task_by_type_selector(&self, task_type: &str) -> Option<String> {
        Some(format!("tasks.withType<{}>()", task_type))
    }

    fn task_registration(&self, task_name: &str, task_type: &str) -> String {
        format!("val {} by tasks.registering({}::class)", task_name, task_type)
    }

    fn task_configuration(&self, task_name: &str, task_type: &str) -> String {
        format!("val {} by tasks.getting({}::class)", task_name, task_type)
    }

    fn suite_registration(&self, suite_name: &str, suite_type: &str) -> String {
        format!("val {} by registering({}::class)", suite_name, suite_type)
    }

    fn suite_configuration(&self, suite_name: &str, suite_type: &str) -> String {
        format!("val {} by getting({}::class)", suite_name, suite_type)
    }

    fn reference_task(&self, task_name: &str) -> String {
        task_name.to_string()
    }

    fn reference_suite(&self, suite_name: &str) -> String {
        suite_name.to_string()
    }

    fn create_container_element(&self, element: &ContainerElement) -> Statement {
        let container = &element.container;
        let name = self.string(&element.element_name);
        let selector = match (&element.var_name, &element.element_type) {
            (None, None) => format!("val {} by {}.creating", element.element_name, container),
            (None, Some(element_type)) => {
                format!("{}.create<{}>({})", container, element_type, name)
            }
            (Some(var_name), None) => format!("val {} = {}.create({})", var_name, container, name),
            (Some(var_name), Some(element_type)) => format!(
                "val {} = {}.create<{}>({})",
                var_name, container, element_type, name
            ),
        };
        BlockStatement::declaration(element.comment.as_deref(), selector, element.body.clone())
            .into()
    }

    fn reference_created_container_element(
        &self,
        _container: &str,
        element: &str,
        var_name: Option<&str>,
    ) -> String {
        var_name.unwrap_or(element).to_string()
    }

    fn container_element(&self, container: &str, element: &str) -> String {
        format!("{}[{}]", container, self.string(element))
    }

    fn convention_plugin_id(&self) -> &'static str {
        "kotlin-dsl"
    }

    /// `testing.suites.named("<name>")`
    fn suite_dependency(&self, suite_name: &str) -> Expr {
        Expr::call_on(
            Expr::property(Expr::ident("testing"), "suites"),
            "named",
            [Expr::string(suite_name)],
        )
    }
}
