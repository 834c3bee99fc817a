use crate::{
    Result,
    model::{BlockStatement, Invocation, MavenRepository, MethodCall, Statement},
    repository::RepositoryUrl,
};

/// Entries of the `repositories { }` block.
#[derive(Debug, Clone, Default)]
pub struct RepositoriesBlock {
    statements: Vec<Statement>,
}

impl RepositoriesBlock {
    pub fn maven_local(&mut self, comment: Option<&str>) -> &mut Self {
        self.shorthand(comment, "mavenLocal")
    }

    pub fn maven_central(&mut self, comment: Option<&str>) -> &mut Self {
        self.shorthand(comment, "mavenCentral")
    }

    pub fn gradle_plugin_portal(&mut self, comment: Option<&str>) -> &mut Self {
        self.shorthand(comment, "gradlePluginPortal")
    }

    /// Add a `maven { url = ... }` repository.
    ///
    /// Fails when `url` is not an absolute URL. Insecure URLs are accepted here
    /// and handled by the insecure-protocol policy when the script is emitted.
    pub fn maven(&mut self, comment: Option<&str>, url: &str) -> Result<&mut Self> {
        let url = RepositoryUrl::parse(url)?;
        self.statements.push(Statement::MavenRepository(MavenRepository {
            comment: comment.map(str::to_string),
            url,
        }));
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn to_statement(&self) -> Statement {
        BlockStatement::scoped(None, "repositories", self.statements.clone()).into()
    }

    fn shorthand(&mut self, comment: Option<&str>, name: &str) -> &mut Self {
        self.statements.push(Statement::Invocation(Invocation {
            comment: comment.map(str::to_string),
            call: MethodCall::new(name, []),
        }));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_maven_rejects_malformed_url() {
        let mut repositories = RepositoriesBlock::default();
        let err = repositories.maven(None, "not a url").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
        assert!(repositories.is_empty());
    }

    #[test]
    fn test_maven_accepts_insecure_url() {
        let mut repositories = RepositoriesBlock::default();
        repositories.maven(None, "http://example.org/repo").unwrap();
        assert!(!repositories.is_empty());
    }
}
