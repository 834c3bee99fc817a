//! Deferred emission of generated scripts.

use std::path::{Path, PathBuf};

use buildscript_core::write_file;

use crate::{BuildScriptBuilder, Error, Result};

/// A unit of generation work, run once.
pub trait TemplateOperation {
    fn generate(self: Box<Self>) -> Result<()>;
}

/// Writes one builder's script to its destination.
///
/// The script is rendered fully in memory first, so a failing render leaves no
/// file behind.
pub struct ScriptOperation {
    builder: BuildScriptBuilder,
    target: PathBuf,
}

impl ScriptOperation {
    pub(crate) fn new(builder: BuildScriptBuilder, target: PathBuf) -> Self {
        Self { builder, target }
    }

    /// Destination file.
    pub fn target(&self) -> &Path {
        &self.target
    }
}

impl TemplateOperation for ScriptOperation {
    fn generate(self: Box<Self>) -> Result<()> {
        let content = self.builder.render()?;
        write_file(&self.target, &content).map_err(|source| Error::Write {
            path: self.target.clone(),
            source,
        })?;
        tracing::debug!(
            path = %self.target.display(),
            bytes = content.len(),
            "generated build script"
        );
        Ok(())
    }
}

/// Several operations triggered as one, in insertion order.
///
/// Stops at the first failure.
#[derive(Default)]
pub struct CompositeOperation {
    operations: Vec<Box<dyn TemplateOperation>>,
}

impl CompositeOperation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, operation: impl TemplateOperation + 'static) -> &mut Self {
        self.operations.push(Box::new(operation));
        self
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl TemplateOperation for CompositeOperation {
    fn generate(self: Box<Self>) -> Result<()> {
        for operation in self.operations {
            operation.generate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use buildscript_core::InsecureProtocol;
    use tempfile::TempDir;

    use super::*;
    use crate::testing::PlainSyntax;

    fn builder(name: &str, policy: InsecureProtocol) -> BuildScriptBuilder {
        BuildScriptBuilder::new(Box::new(PlainSyntax), name, policy)
    }

    #[test]
    fn test_generate_writes_file() {
        let temp = TempDir::new().unwrap();
        let mut b = builder("build", InsecureProtocol::Warn);
        b.plugin(None, "java");

        let operation = b.create(temp.path().join("app"));
        assert_eq!(operation.target(), temp.path().join("app").join("build.gradle"));
        Box::new(operation).generate().unwrap();

        let content = fs::read_to_string(temp.path().join("app/build.gradle")).unwrap();
        assert!(content.starts_with("/*\n"));
        assert!(content.contains("plugin java"));
    }

    #[test]
    fn test_failed_render_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let mut b = builder("build", InsecureProtocol::Fail);
        b.repositories().maven(None, "http://example.org/repo").unwrap();

        let err = Box::new(b.create(temp.path())).generate().unwrap_err();
        assert!(matches!(err, Error::InsecureRepository { .. }));
        assert!(!temp.path().join("build.gradle").exists());
    }

    #[test]
    fn test_write_failure_names_path() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "file in the way").unwrap();

        let err = Box::new(builder("build", InsecureProtocol::Warn).create(&blocker))
            .generate()
            .unwrap_err();
        match err {
            Error::Write { path, .. } => assert_eq!(path, blocker.join("build.gradle")),
            other => panic!("expected write error, got {:?}", other),
        }
    }

    #[test]
    fn test_composite_runs_all() {
        let temp = TempDir::new().unwrap();
        let mut composite = CompositeOperation::new();
        composite
            .push(builder("settings", InsecureProtocol::Warn).create(temp.path()))
            .push(builder("build", InsecureProtocol::Warn).create(temp.path().join("app")));
        assert_eq!(composite.len(), 2);

        Box::new(composite).generate().unwrap();
        assert!(temp.path().join("settings.gradle").exists());
        assert!(temp.path().join("app/build.gradle").exists());
    }
}
