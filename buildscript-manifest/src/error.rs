use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the manifest content and filename so the error factories below
/// only need the parts that differ.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "script.toml");
/// ctx.validation_error("missing required field");
/// ctx.missing_url_error(span);
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    pub fn invalid_name_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidName {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    pub fn missing_url_error(&self, span: Option<SourceSpan>) -> Box<Error> {
        Box::new(Error::MissingUrl {
            src: self.named_source(),
            span,
        })
    }

    pub fn duplicate_suite_error(
        &self,
        name: impl Into<String>,
        first_span: Option<SourceSpan>,
        second_span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateSuite {
            src: self.named_source(),
            first_span,
            second_span,
            name: name.into(),
        })
    }

    pub fn unsupported_value_error(
        &self,
        name: impl Into<String>,
        kind: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnsupportedValue {
            src: self.named_source(),
            span,
            name: name.into(),
            kind: kind.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the manifest location with '--config <path>'"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse script manifest")]
    #[diagnostic(code(buildscript::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("maven repository without a url")]
    #[diagnostic(
        code(buildscript::missing_url),
        help("add a url to the repository, e.g. url = \"https://repo.example.org/maven2\"")
    )]
    MissingUrl {
        #[source_code]
        src: NamedSource<String>,
        #[label("this repository needs a url")]
        span: Option<SourceSpan>,
    },

    #[error("duplicate test suite '{name}'")]
    #[diagnostic(
        code(buildscript::duplicate_suite),
        help("each [[suites]] entry needs a unique name")
    )]
    DuplicateSuite {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: Option<SourceSpan>,
        #[label("declared again here")]
        second_span: Option<SourceSpan>,
        name: String,
    },

    #[error("unsupported {kind} value for '{name}'")]
    #[diagnostic(
        code(buildscript::unsupported_value),
        help("values must be strings, integers, floats, booleans or tables of those")
    )]
    UnsupportedValue {
        #[source_code]
        src: NamedSource<String>,
        #[label("unsupported value")]
        span: Option<SourceSpan>,
        name: String,
        kind: String,
    },

    #[error("{message}")]
    #[diagnostic(code(buildscript::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(code(buildscript::invalid_name), help("{reason}"))]
    InvalidName {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid name")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_keeps_span() {
        let ctx = SourceContext::new("[script\n", "script.toml");
        let source = toml::from_str::<toml::Table>(ctx.src()).unwrap_err();
        match *ctx.parse_error(source) {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_messages() {
        let ctx = SourceContext::new("", "script.toml");
        assert_eq!(
            ctx.duplicate_suite_error("integrationTest", None, None).to_string(),
            "duplicate test suite 'integrationTest'"
        );
        assert_eq!(
            ctx.unsupported_value_error("tags", "array", None).to_string(),
            "unsupported array value for 'tags'"
        );
        assert_eq!(
            ctx.invalid_name_error("", "suite", "name cannot be empty", None)
                .to_string(),
            "invalid suite name ''"
        );
        assert_eq!(ctx.filename(), "script.toml");
    }
}
