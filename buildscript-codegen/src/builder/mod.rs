//! The append-only builder assembling a script.
//!
//! ```ignore
//! let mut builder = BuildScriptBuilder::new(Box::new(KotlinSyntax), "build", InsecureProtocol::Warn);
//! builder
//!     .plugin(Some("Apply the application plugin"), "application")
//!     .implementation_dependency(None, ["com.google.guava:guava:31.1-jre"]);
//! builder.repositories().maven_central(Some("Use Maven Central"));
//!
//! let content = builder.render()?;
//! ```

mod block;
mod dependencies;
mod repositories;
mod suites;

pub use block::ScriptBlock;
pub use dependencies::DependenciesBlock;
pub use repositories::RepositoriesBlock;
pub use suites::{DEFAULT_TEST_SUITE_NAME, SuiteSpec, TestFramework, TestingBlock};

use std::path::Path;

use buildscript_core::{Dsl, InsecureProtocol, split_comment};

use crate::{
    Error, Result, ScriptOperation, Syntax,
    model::{
        BlockStatement, ConfigurationStatements, ContainerElement, ConventionSelector, Expr,
        Invocation, MethodCall, PluginSpec, PropertyAssignment, Statement, StatementType,
        TaskSelector, TaskTypeSelector,
    },
    printer::PrettyPrinter,
    repository,
};

/// Header line added when the script relies on incubating APIs.
pub const INCUBATING_APIS_WARNING: &str =
    "This project uses @Incubating APIs which are subject to change.";

const CONVENTION_PLUGIN_PORTAL_COMMENT: &str =
    "Use the plugin portal to apply community plugins in convention plugins.";

/// Builds one script file.
///
/// Everything is append-only: each call adds statements, nothing is ever
/// replaced. Calls that create a task, suite or container element return an
/// [`Expr`] referencing it.
pub struct BuildScriptBuilder {
    syntax: Box<dyn Syntax>,
    file_name: String,
    insecure_protocol: InsecureProtocol,
    use_incubating_apis: bool,
    external_comments: bool,
    header_lines: Vec<String>,
    plugins: Vec<Statement>,
    repositories: RepositoriesBlock,
    dependencies: DependenciesBlock,
    testing: TestingBlock,
    block: ScriptBlock,
    conventions: ConfigurationStatements<ConventionSelector>,
    task_types: ConfigurationStatements<TaskTypeSelector>,
    tasks: ConfigurationStatements<TaskSelector>,
}

impl BuildScriptBuilder {
    /// Create a builder for `<file_name>.gradle` or `<file_name>.gradle.kts`,
    /// depending on the dialect of `syntax`.
    pub fn new(
        syntax: Box<dyn Syntax>,
        file_name: impl Into<String>,
        insecure_protocol: InsecureProtocol,
    ) -> Self {
        Self {
            syntax,
            file_name: file_name.into(),
            insecure_protocol,
            use_incubating_apis: false,
            external_comments: false,
            header_lines: Vec::new(),
            plugins: Vec::new(),
            repositories: RepositoriesBlock::default(),
            dependencies: DependenciesBlock::default(),
            testing: TestingBlock::default(),
            block: ScriptBlock::new(),
            conventions: ConfigurationStatements::default(),
            task_types: ConfigurationStatements::default(),
            tasks: ConfigurationStatements::default(),
        }
    }

    /// Allow incubating APIs, which enables test suites.
    pub fn with_incubating_apis(mut self) -> Self {
        self.use_incubating_apis = true;
        self
    }

    /// Replace comments by numbered markers; see [`extract_comments`](Self::extract_comments).
    pub fn with_external_comments(mut self) -> Self {
        self.external_comments = true;
        self
    }

    pub fn dsl(&self) -> Dsl {
        self.syntax.dsl()
    }

    pub fn syntax(&self) -> &dyn Syntax {
        self.syntax.as_ref()
    }

    pub fn file_name_without_extension(&self) -> &str {
        &self.file_name
    }

    /// File name including the dialect's extension.
    pub fn file_name(&self) -> String {
        self.dsl().file_name_for(&self.file_name)
    }

    pub fn is_using_incubating_apis(&self) -> bool {
        self.use_incubating_apis
    }

    pub fn is_using_test_suites(&self) -> bool {
        self.use_incubating_apis
    }

    /// Add lines to the file header.
    pub fn file_comment(&mut self, comment: &str) -> &mut Self {
        self.header_lines
            .extend(split_comment(comment).map(str::to_string));
        self
    }

    pub fn plugin(&mut self, comment: Option<&str>, plugin_id: &str) -> &mut Self {
        self.push_plugin(comment, plugin_id, None)
    }

    pub fn plugin_with_version(
        &mut self,
        comment: Option<&str>,
        plugin_id: &str,
        version: &str,
    ) -> &mut Self {
        self.push_plugin(comment, plugin_id, Some(version))
    }

    /// Set the script up as a convention plugin build.
    pub fn convention_plugin_support(&mut self, comment: Option<&str>) -> &mut Self {
        self.repositories
            .gradle_plugin_portal(Some(CONVENTION_PLUGIN_PORTAL_COMMENT));
        let plugin_id = self.syntax.convention_plugin_id();
        self.push_plugin(comment, plugin_id, None)
    }

    pub fn dependency<S: Into<String>>(
        &mut self,
        configuration: &str,
        comment: Option<&str>,
        notations: impl IntoIterator<Item = S>,
    ) -> &mut Self {
        self.dependencies.dependency(configuration, comment, notations);
        self
    }

    pub fn implementation_dependency<S: Into<String>>(
        &mut self,
        comment: Option<&str>,
        notations: impl IntoIterator<Item = S>,
    ) -> &mut Self {
        self.dependency("implementation", comment, notations)
    }

    pub fn implementation_dependency_constraint<S: Into<String>>(
        &mut self,
        comment: Option<&str>,
        notations: impl IntoIterator<Item = S>,
    ) -> &mut Self {
        self.dependencies
            .dependency_constraint("implementation", comment, notations);
        self
    }

    pub fn test_implementation_dependency<S: Into<String>>(
        &mut self,
        comment: Option<&str>,
        notations: impl IntoIterator<Item = S>,
    ) -> &mut Self {
        self.dependency("testImplementation", comment, notations)
    }

    pub fn test_runtime_only_dependency<S: Into<String>>(
        &mut self,
        comment: Option<&str>,
        notations: impl IntoIterator<Item = S>,
    ) -> &mut Self {
        self.dependency("testRuntimeOnly", comment, notations)
    }

    /// Add dependencies to a test suite declared earlier.
    pub fn dependency_for_suite<S: Into<String>>(
        &mut self,
        suite: &str,
        configuration: &str,
        comment: Option<&str>,
        notations: impl IntoIterator<Item = S>,
    ) -> Result<&mut Self> {
        let target = self
            .testing
            .suite_mut(suite)
            .ok_or_else(|| Error::UnknownSuite {
                name: suite.to_string(),
            })?;
        target
            .dependencies
            .dependency(configuration, comment, notations);
        Ok(self)
    }

    pub fn repositories(&mut self) -> &mut RepositoriesBlock {
        &mut self.repositories
    }

    pub fn dependencies(&mut self) -> &mut DependenciesBlock {
        &mut self.dependencies
    }

    pub fn testing(&mut self) -> &mut TestingBlock {
        &mut self.testing
    }

    /// Test suites declared so far.
    pub fn suites(&self) -> &[SuiteSpec] {
        self.testing.suites()
    }

    pub fn method_invocation(
        &mut self,
        comment: Option<&str>,
        name: &str,
        args: impl IntoIterator<Item = Expr>,
    ) -> &mut Self {
        self.block.method_invocation(comment, name, args);
        self
    }

    pub fn method_invocation_on(
        &mut self,
        comment: Option<&str>,
        target: impl Into<Expr>,
        name: &str,
        args: impl IntoIterator<Item = Expr>,
    ) -> &mut Self {
        self.block.method_invocation_on(comment, target, name, args);
        self
    }

    /// Assign a top-level property with plain `name = value` semantics.
    pub fn property_assignment(
        &mut self,
        comment: Option<&str>,
        name: &str,
        value: impl Into<Expr>,
    ) -> &mut Self {
        self.block.property_assignment(comment, name, value);
        self
    }

    pub fn block(
        &mut self,
        comment: Option<&str>,
        selector: &str,
        f: impl FnOnce(&mut ScriptBlock),
    ) -> &mut Self {
        self.block.block(comment, selector, f);
        self
    }

    /// Call a method on a task, inside that task's configuration block.
    pub fn task_method_invocation(
        &mut self,
        comment: Option<&str>,
        task_name: &str,
        task_type: &str,
        method: &str,
        args: impl IntoIterator<Item = Expr>,
    ) -> &mut Self {
        self.tasks.add(
            TaskSelector::new(task_name, task_type),
            Statement::Invocation(Invocation {
                comment: comment.map(str::to_string),
                call: MethodCall::new(method, args),
            }),
        );
        self
    }

    pub fn task_property_assignment(
        &mut self,
        comment: Option<&str>,
        task_name: &str,
        task_type: &str,
        name: &str,
        value: impl Into<Expr>,
    ) -> &mut Self {
        self.tasks.add(
            TaskSelector::new(task_name, task_type),
            Statement::Property(PropertyAssignment::new(comment, name, value, true)),
        );
        self
    }

    /// Set a property on every task of a type.
    pub fn task_type_property_assignment(
        &mut self,
        comment: Option<&str>,
        task_type: &str,
        name: &str,
        value: impl Into<Expr>,
    ) -> &mut Self {
        self.task_types.add(
            TaskTypeSelector::new(task_type),
            Statement::Property(PropertyAssignment::new(comment, name, value, true)),
        );
        self
    }

    /// Set a lazy property of a project extension such as `application`.
    pub fn convention_property_assignment(
        &mut self,
        comment: Option<&str>,
        convention: &str,
        name: &str,
        value: impl Into<Expr>,
    ) -> &mut Self {
        self.conventions.add(
            ConventionSelector::new(convention),
            Statement::Property(PropertyAssignment::new(comment, name, value, false)),
        );
        self
    }

    pub fn task_registration(
        &mut self,
        comment: Option<&str>,
        name: &str,
        task_type: &str,
        f: impl FnOnce(&mut ScriptBlock),
    ) -> Expr {
        self.block.task_registration(comment, name, task_type, f)
    }

    pub fn task_configuration(
        &mut self,
        comment: Option<&str>,
        name: &str,
        task_type: &str,
        f: impl FnOnce(&mut ScriptBlock),
    ) -> Expr {
        self.block.task_configuration(comment, name, task_type, f)
    }

    /// Create an element in `container`, optionally bound to a variable.
    pub fn create_container_element(
        &mut self,
        comment: Option<&str>,
        container: &str,
        element: &str,
        var_name: Option<&str>,
    ) -> Expr {
        self.block.push_container_element(ContainerElement {
            comment: comment.map(str::to_string),
            container: container.to_string(),
            element_name: element.to_string(),
            element_type: None,
            var_name: var_name.map(str::to_string),
            body: Vec::new(),
        })
    }

    /// Whether the `testing { }` block is emitted.
    fn emits_test_suites(&self) -> bool {
        self.use_incubating_apis && !self.testing.suites().is_empty()
    }

    /// The complete statement tree, in document order.
    ///
    /// Suite blocks and `check` wiring are computed into this fresh tree; the
    /// builder itself is left untouched.
    pub fn to_statements(&self) -> Vec<Statement> {
        let syntax = self.syntax.as_ref();
        let mut statements = vec![
            Statement::from(BlockStatement::scoped(None, "plugins", self.plugins.clone())),
            self.repositories.to_statement(),
            self.dependencies.to_statement(),
        ];
        if self.emits_test_suites() {
            statements.push(self.testing.to_statement());
        }
        statements.extend(self.block.statements().iter().cloned());
        statements.extend(self.conventions.lower(syntax));
        statements.extend(self.task_types.lower(syntax));

        let mut tasks = self.tasks.clone();
        if self.emits_test_suites() {
            for suite in self.testing.suites().iter().filter(|s| !s.is_default_suite()) {
                tasks.add(
                    TaskSelector::new("check", "Task"),
                    Statement::Invocation(Invocation {
                        comment: None,
                        call: MethodCall::new(
                            "dependsOn",
                            [syntax.suite_dependency(suite.name())],
                        ),
                    }),
                );
            }
        }
        statements.extend(tasks.lower(syntax));
        statements
    }

    /// Header lines as printed, including the incubating warning.
    pub fn header_lines(&self) -> Vec<String> {
        let mut lines = self.header_lines.clone();
        if self.use_incubating_apis {
            lines.push(INCUBATING_APIS_WARNING.to_string());
        }
        lines
    }

    /// Render the whole script to a string.
    pub fn render(&self) -> Result<String> {
        let mut printer = PrettyPrinter::new(
            self.syntax.as_ref(),
            self.insecure_protocol,
            self.external_comments,
        );
        printer.print_file_header(&self.header_lines());
        printer.print_statements(&self.to_statements())?;
        Ok(printer.finish())
    }

    /// Every comment of the script, in the order they appear in the output.
    ///
    /// With external comments enabled, entry `n - 1` is the text of marker `<n>`.
    pub fn extract_comments(&self) -> Vec<String> {
        let mut comments = Vec::new();
        collect_comments(
            &self.to_statements(),
            self.syntax.as_ref(),
            self.insecure_protocol,
            &mut comments,
        );
        comments
    }

    /// Prepare writing the script into `target_dir`.
    pub fn create(self, target_dir: impl AsRef<Path>) -> ScriptOperation {
        let target = target_dir.as_ref().join(self.file_name());
        ScriptOperation::new(self, target)
    }

    fn push_plugin(&mut self, comment: Option<&str>, id: &str, version: Option<&str>) -> &mut Self {
        self.plugins.push(Statement::Plugin(PluginSpec {
            comment: comment.map(str::to_string),
            id: id.to_string(),
            version: version.map(str::to_string),
        }));
        self
    }
}

fn collect_comments(
    statements: &[Statement],
    syntax: &dyn Syntax,
    insecure_protocol: InsecureProtocol,
    out: &mut Vec<String>,
) {
    for statement in statements {
        if statement.statement_type() == StatementType::Empty {
            continue;
        }
        if let Some(comment) = statement.comment() {
            out.push(comment.to_string());
        }
        match statement {
            Statement::Block(block) => collect_comments(&block.body, syntax, insecure_protocol, out),
            Statement::Unit(unit) => collect_comments(&unit.body, syntax, insecure_protocol, out),
            Statement::ContainerElement(element) => collect_comments(
                &[syntax.create_container_element(element)],
                syntax,
                insecure_protocol,
                out,
            ),
            Statement::MavenRepository(maven) => {
                if let Ok(body) =
                    repository::repository_statements(&maven.url, syntax, insecure_protocol)
                {
                    collect_comments(&body, syntax, insecure_protocol, out);
                }
            }
            Statement::Plugin(_)
            | Statement::Dependency(_)
            | Statement::Property(_)
            | Statement::Invocation(_)
            | Statement::Comment(_) => {}
        }
    }
}
