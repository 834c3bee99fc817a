use indexmap::IndexMap;

use crate::model::{BlockStatement, DependencySpec, Notation, Statement};

/// Dependencies and dependency constraints, grouped by configuration.
///
/// Configurations print in the order they were first used; entries keep their
/// insertion order within a configuration.
#[derive(Debug, Clone, Default)]
pub struct DependenciesBlock {
    dependencies: IndexMap<String, Vec<Statement>>,
    constraints: IndexMap<String, Vec<Statement>>,
}

impl DependenciesBlock {
    /// Add external module dependencies, one line each.
    pub fn dependency<S: Into<String>>(
        &mut self,
        configuration: &str,
        comment: Option<&str>,
        notations: impl IntoIterator<Item = S>,
    ) -> &mut Self {
        let notation = Notation::External(notations.into_iter().map(Into::into).collect());
        self.push_dependency(configuration, comment, notation)
    }

    pub fn dependency_constraint<S: Into<String>>(
        &mut self,
        configuration: &str,
        comment: Option<&str>,
        notations: impl IntoIterator<Item = S>,
    ) -> &mut Self {
        let spec = spec(
            configuration,
            comment,
            Notation::External(notations.into_iter().map(Into::into).collect()),
        );
        self.constraints
            .entry(configuration.to_string())
            .or_default()
            .push(spec);
        self
    }

    pub fn platform_dependency(
        &mut self,
        configuration: &str,
        comment: Option<&str>,
        notation: &str,
    ) -> &mut Self {
        self.push_dependency(configuration, comment, Notation::Platform(notation.to_string()))
    }

    pub fn project_dependency(
        &mut self,
        configuration: &str,
        comment: Option<&str>,
        path: &str,
    ) -> &mut Self {
        self.push_dependency(configuration, comment, Notation::Project(path.to_string()))
    }

    /// Depend on the project the script belongs to.
    pub fn self_dependency(&mut self, configuration: &str, comment: Option<&str>) -> &mut Self {
        self.push_dependency(configuration, comment, Notation::SelfProject)
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty() && self.constraints.is_empty()
    }

    /// Statements inside `dependencies { }`: constraints block first, then dependencies.
    pub fn body(&self) -> Vec<Statement> {
        let mut body = Vec::new();
        if !self.constraints.is_empty() {
            let constraints = self.constraints.values().flatten().cloned().collect();
            body.push(BlockStatement::scoped(None, "constraints", constraints).into());
        }
        body.extend(self.dependencies.values().flatten().cloned());
        body
    }

    /// The whole `dependencies { }` block.
    pub fn to_statement(&self) -> Statement {
        BlockStatement::scoped(None, "dependencies", self.body()).into()
    }

    fn push_dependency(
        &mut self,
        configuration: &str,
        comment: Option<&str>,
        notation: Notation,
    ) -> &mut Self {
        self.dependencies
            .entry(configuration.to_string())
            .or_default()
            .push(spec(configuration, comment, notation));
        self
    }
}

fn spec(configuration: &str, comment: Option<&str>, notation: Notation) -> Statement {
    Statement::Dependency(DependencySpec {
        comment: comment.map(str::to_string),
        configuration: configuration.to_string(),
        notation,
    })
}
