//! Statements making up a script body.

use crate::{
    Expr, Result,
    model::expr::MethodCall,
    printer::PrettyPrinter,
    repository::{self, RepositoryUrl},
};

/// Layout classification of a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementType {
    /// Nothing to print, the statement is skipped entirely.
    Empty,
    /// A single logical line.
    Single,
    /// A group of statements, always surrounded by blank lines.
    Group,
}

/// A single entry of a script body.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Plugin(PluginSpec),
    Dependency(DependencySpec),
    Property(PropertyAssignment),
    Invocation(Invocation),
    /// A comment with no code attached.
    Comment(String),
    Block(BlockStatement),
    Unit(UnitDeclaration),
    ContainerElement(ContainerElement),
    MavenRepository(MavenRepository),
}

impl Statement {
    /// Comment printed before this statement, if any.
    pub fn comment(&self) -> Option<&str> {
        match self {
            Self::Plugin(s) => s.comment.as_deref(),
            Self::Dependency(s) => s.comment.as_deref(),
            Self::Property(s) => s.comment.as_deref(),
            Self::Invocation(s) => s.comment.as_deref(),
            Self::Comment(text) => Some(text),
            Self::Block(s) => s.comment.as_deref(),
            Self::Unit(s) => s.comment.as_deref(),
            // forwarded to the dialect's declaration
            Self::ContainerElement(_) => None,
            Self::MavenRepository(s) => s.comment.as_deref(),
        }
    }

    pub fn statement_type(&self) -> StatementType {
        match self {
            Self::Block(block) => block.statement_type(),
            Self::Unit(_) => StatementType::Group,
            Self::Plugin(_)
            | Self::Dependency(_)
            | Self::Property(_)
            | Self::Invocation(_)
            | Self::Comment(_)
            | Self::ContainerElement(_)
            | Self::MavenRepository(_) => StatementType::Single,
        }
    }

    /// Print the code of this statement, without its comment.
    pub fn write_code_to(&self, printer: &mut PrettyPrinter<'_>) -> Result<()> {
        let syntax = printer.syntax();
        match self {
            Self::Plugin(plugin) => {
                printer.println(&syntax.plugin_dependency_spec(&plugin.id, plugin.version.as_deref()));
            }
            Self::Dependency(dependency) => {
                for notation in dependency.notation.render(syntax) {
                    printer.println(&syntax.dependency_spec(&dependency.configuration, &notation));
                }
            }
            Self::Property(assignment) => {
                printer.println(&syntax.property_assignment(assignment));
            }
            Self::Invocation(invocation) => {
                printer.println(&invocation.call.render(syntax));
            }
            Self::Comment(_) => {}
            Self::Block(block) => {
                printer.print_block(&block.selector, &block.body)?;
            }
            Self::Unit(unit) => {
                printer.print_block(&unit.selector(syntax), &unit.body)?;
            }
            Self::ContainerElement(element) => {
                printer.print_statement(&syntax.create_container_element(element))?;
            }
            Self::MavenRepository(repository) => {
                let body = repository::maven_repository_body(
                    &repository.url,
                    syntax,
                    printer.insecure_protocol(),
                )?;
                printer.print_block("maven", &body)?;
            }
        }
        Ok(())
    }
}

/// A plugin applied in the `plugins { }` block.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginSpec {
    pub comment: Option<String>,
    pub id: String,
    pub version: Option<String>,
}

/// How a dependency is written down.
#[derive(Debug, Clone, PartialEq)]
pub enum Notation {
    /// External module coordinates, one line per entry.
    External(Vec<String>),
    /// A platform (BOM) import.
    Platform(String),
    /// Another project in the build, by path.
    Project(String),
    /// The project the script belongs to.
    SelfProject,
}

impl Notation {
    fn render(&self, syntax: &dyn crate::Syntax) -> Vec<String> {
        match self {
            Self::External(coordinates) => coordinates.iter().map(|c| syntax.string(c)).collect(),
            Self::Platform(coordinates) => vec![syntax.platform_notation(coordinates)],
            Self::Project(path) => vec![syntax.project_notation(path)],
            Self::SelfProject => vec![syntax.self_notation()],
        }
    }
}

/// A dependency declared against a configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DependencySpec {
    pub comment: Option<String>,
    pub configuration: String,
    pub notation: Notation,
}

/// `name = value`, or a lazy property setter when not legacy.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyAssignment {
    pub comment: Option<String>,
    pub name: String,
    pub value: Expr,
    /// Plain Java bean property rather than a lazy `Property<T>`.
    pub legacy: bool,
}

impl PropertyAssignment {
    pub fn new(
        comment: Option<&str>,
        name: impl Into<String>,
        value: impl Into<Expr>,
        legacy: bool,
    ) -> Self {
        Self {
            comment: comment.map(str::to_string),
            name: name.into(),
            value: value.into(),
            legacy,
        }
    }
}

/// A method invocation standing on its own line.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub comment: Option<String>,
    pub call: MethodCall,
}

/// Whether a block's classification follows its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Configures something; empty when every child is empty.
    Scoped,
    /// Declares something; always printed, even with an empty body.
    Declaration,
}

/// `selector { body }`
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub comment: Option<String>,
    pub selector: String,
    pub body: Vec<Statement>,
    pub kind: BlockKind,
}

impl BlockStatement {
    pub fn scoped(comment: Option<&str>, selector: impl Into<String>, body: Vec<Statement>) -> Self {
        Self {
            comment: comment.map(str::to_string),
            selector: selector.into(),
            body,
            kind: BlockKind::Scoped,
        }
    }

    pub fn declaration(
        comment: Option<&str>,
        selector: impl Into<String>,
        body: Vec<Statement>,
    ) -> Self {
        Self {
            comment: comment.map(str::to_string),
            selector: selector.into(),
            body,
            kind: BlockKind::Declaration,
        }
    }

    pub fn statement_type(&self) -> StatementType {
        match self.kind {
            BlockKind::Declaration => StatementType::Group,
            BlockKind::Scoped => {
                if self
                    .body
                    .iter()
                    .any(|s| s.statement_type() != StatementType::Empty)
                {
                    StatementType::Group
                } else {
                    StatementType::Empty
                }
            }
        }
    }
}

impl From<BlockStatement> for Statement {
    fn from(value: BlockStatement) -> Self {
        Self::Block(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    TaskRegistration,
    TaskConfiguration,
    SuiteRegistration,
    SuiteConfiguration,
}

/// Registration or configuration of a named task or test suite.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitDeclaration {
    pub comment: Option<String>,
    pub kind: UnitKind,
    pub name: String,
    pub unit_type: String,
    pub body: Vec<Statement>,
}

impl UnitDeclaration {
    /// Block selector the dialect uses for this declaration.
    pub fn selector(&self, syntax: &dyn crate::Syntax) -> String {
        match self.kind {
            UnitKind::TaskRegistration => syntax.task_registration(&self.name, &self.unit_type),
            UnitKind::TaskConfiguration => syntax.task_configuration(&self.name, &self.unit_type),
            UnitKind::SuiteRegistration => syntax.suite_registration(&self.name, &self.unit_type),
            UnitKind::SuiteConfiguration => {
                syntax.suite_configuration(&self.name, &self.unit_type)
            }
        }
    }

    /// Back-reference to the declared task or suite.
    pub fn reference(&self) -> Expr {
        match self.kind {
            UnitKind::TaskRegistration | UnitKind::TaskConfiguration => {
                Expr::Task(self.name.clone())
            }
            UnitKind::SuiteRegistration | UnitKind::SuiteConfiguration => {
                Expr::Suite(self.name.clone())
            }
        }
    }
}

/// Creation of a new element in a named container.
///
/// The dialect turns this into a declaration statement; the comment travels
/// with it.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerElement {
    pub comment: Option<String>,
    pub container: String,
    pub element_name: String,
    pub element_type: Option<String>,
    pub var_name: Option<String>,
    pub body: Vec<Statement>,
}

impl ContainerElement {
    pub fn reference(&self) -> Expr {
        Expr::CreatedElement {
            container: self.container.clone(),
            element: self.element_name.clone(),
            var_name: self.var_name.clone(),
        }
    }
}

/// A `maven { }` repository entry.
#[derive(Debug, Clone, PartialEq)]
pub struct MavenRepository {
    pub comment: Option<String>,
    pub url: RepositoryUrl,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invocation(name: &str) -> Statement {
        Statement::Invocation(Invocation {
            comment: None,
            call: MethodCall::new(name, []),
        })
    }

    fn empty_block(selector: &str) -> Statement {
        BlockStatement::scoped(None, selector, vec![]).into()
    }

    #[test]
    fn test_scoped_block_classification() {
        assert_eq!(empty_block("a").statement_type(), StatementType::Empty);

        let nested_empty = BlockStatement::scoped(None, "outer", vec![empty_block("inner")]);
        assert_eq!(nested_empty.statement_type(), StatementType::Empty);

        let filled = BlockStatement::scoped(None, "outer", vec![invocation("mavenCentral")]);
        assert_eq!(filled.statement_type(), StatementType::Group);
    }

    #[test]
    fn test_declaration_block_is_always_group() {
        let block = BlockStatement::declaration(None, "val x by configurations.creating", vec![]);
        assert_eq!(block.statement_type(), StatementType::Group);
    }

    #[test]
    fn test_unit_is_always_group() {
        let unit = Statement::Unit(UnitDeclaration {
            comment: None,
            kind: UnitKind::TaskRegistration,
            name: "docs".into(),
            unit_type: "Javadoc".into(),
            body: vec![],
        });
        assert_eq!(unit.statement_type(), StatementType::Group);
    }

    #[test]
    fn test_container_element_forwards_comment() {
        let element = Statement::ContainerElement(ContainerElement {
            comment: Some("Create it".into()),
            container: "configurations".into(),
            element_name: "custom".into(),
            element_type: None,
            var_name: None,
            body: vec![],
        });
        assert_eq!(element.comment(), None);
        assert_eq!(element.statement_type(), StatementType::Single);
    }

    #[test]
    fn test_comment_statement_reports_its_text() {
        assert_eq!(Statement::Comment("note".into()).comment(), Some("note"));
    }

    #[test]
    fn test_unit_reference() {
        let unit = UnitDeclaration {
            comment: None,
            kind: UnitKind::SuiteRegistration,
            name: "integrationTest".into(),
            unit_type: "JvmTestSuite".into(),
            body: vec![],
        };
        assert_eq!(unit.reference(), Expr::Suite("integrationTest".into()));
    }
}
