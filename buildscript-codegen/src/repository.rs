//! Maven repository URLs and the insecure-protocol policy.

use std::fmt;

use buildscript_core::InsecureProtocol;

use crate::{
    Error, Expr, Result, Syntax,
    model::{PropertyAssignment, Statement},
};

const LOOPBACK_HOST: &str = "127.0.0.1";

/// An absolute repository URL, validated when the repository is declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryUrl {
    scheme: String,
    /// Everything after `scheme:`
    rest: String,
}

impl RepositoryUrl {
    pub fn parse(url: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        };

        if url.trim().is_empty() {
            return Err(invalid("url is empty"));
        }
        if url.chars().any(char::is_whitespace) {
            return Err(invalid("url contains whitespace"));
        }
        let Some((scheme, rest)) = url.split_once(':') else {
            return Err(invalid("url has no scheme"));
        };
        if !is_valid_scheme(scheme) {
            return Err(invalid("url scheme is malformed"));
        }
        if rest.is_empty() {
            return Err(invalid("url has nothing after its scheme"));
        }

        Ok(Self {
            scheme: scheme.to_string(),
            rest: rest.to_string(),
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Host of a hierarchical URL (`scheme://host...`), without user info or port.
    pub fn host(&self) -> Option<&str> {
        let authority = self.rest.strip_prefix("//")?;
        let authority = authority
            .split(['/', '?', '#'])
            .next()
            .unwrap_or_default();
        let host_port = authority
            .rsplit_once('@')
            .map_or(authority, |(_, host)| host);
        let host = if host_port.starts_with('[') {
            host_port
                .find(']')
                .map_or(host_port, |end| &host_port[..=end])
        } else {
            host_port
                .split_once(':')
                .map_or(host_port, |(host, _)| host)
        };
        (!host.is_empty()).then_some(host)
    }

    /// Plain `http` is insecure, except towards the loopback address.
    pub fn is_secure(&self) -> bool {
        self.host() == Some(LOOPBACK_HOST) || !self.scheme.eq_ignore_ascii_case("http")
    }

    /// The same URL with its scheme replaced by `https`.
    pub fn to_secure(&self) -> Self {
        Self {
            scheme: "https".to_string(),
            rest: self.rest.clone(),
        }
    }
}

impl fmt::Display for RepositoryUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.scheme, self.rest)
    }
}

fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// `url = uri("...")`
fn url_assignment(url: &RepositoryUrl) -> Statement {
    Statement::Property(PropertyAssignment::new(
        None,
        "url",
        Expr::call("uri", [Expr::string(url.to_string())]),
        true,
    ))
}

fn allow_insecure_protocol() -> PropertyAssignment {
    PropertyAssignment::new(None, "allowInsecureProtocol", true, true)
}

/// Body of the `maven { }` block for `url` under the given policy.
///
/// Pure: logging happens in [`maven_repository_body`].
pub fn repository_statements(
    url: &RepositoryUrl,
    syntax: &dyn Syntax,
    policy: InsecureProtocol,
) -> Result<Vec<Statement>> {
    if url.is_secure() {
        return Ok(vec![url_assignment(url)]);
    }
    match policy {
        InsecureProtocol::Fail => Err(Error::InsecureRepository {
            url: url.to_string(),
        }),
        InsecureProtocol::Warn => Ok(vec![
            url_assignment(url),
            // left commented out for the user to opt in
            Statement::Comment(syntax.property_assignment(&allow_insecure_protocol())),
        ]),
        InsecureProtocol::Allow => Ok(vec![
            url_assignment(url),
            Statement::Property(allow_insecure_protocol()),
        ]),
        InsecureProtocol::Upgrade => Ok(vec![url_assignment(&url.to_secure())]),
    }
}

/// Same as [`repository_statements`], reporting insecure URLs through `tracing`.
pub fn maven_repository_body(
    url: &RepositoryUrl,
    syntax: &dyn Syntax,
    policy: InsecureProtocol,
) -> Result<Vec<Statement>> {
    if !url.is_secure() {
        match policy {
            InsecureProtocol::Fail => tracing::error!(
                %url,
                "insecure protocol found in a repository definition, the current strategy for insecure URLs is to fail"
            ),
            InsecureProtocol::Warn => tracing::warn!(
                %url,
                "insecure protocol found in a repository definition, opt into insecure protocols in the generated build file to use it"
            ),
            InsecureProtocol::Allow | InsecureProtocol::Upgrade => {
                tracing::debug!(%url, policy = %policy, "handling insecure repository url")
            }
        }
    }
    repository_statements(url, syntax, policy)
}
