//! The script model: expressions, statements and configuration selectors.

mod expr;
mod selector;
mod statement;

pub use expr::{Expr, MethodCall};
pub use selector::{
    ConfigSelector, ConfigurationStatements, ConventionSelector, TaskSelector, TaskTypeSelector,
};
pub use statement::{
    BlockKind, BlockStatement, ContainerElement, DependencySpec, Invocation, MavenRepository,
    Notation, PluginSpec, PropertyAssignment, Statement, StatementType, UnitDeclaration, UnitKind,
};
