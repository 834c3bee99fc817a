//! Generate operation - script emission from a manifest.

use std::path::Path;

use buildscript_codegen::TemplateOperation;
use buildscript_manifest::Manifest;
use eyre::{Context, Result};

use super::{LowerOptions, lower};
use crate::reports::{GenerateReport, GenerationResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory receiving the script.
    pub output_dir: &'a Path,
    /// Render without writing anything.
    pub dry_run: bool,
    pub lower: LowerOptions,
}

/// Execute the generate operation.
///
/// The script is rendered completely before anything is written, so a
/// failure leaves the output directory untouched.
pub fn generate(manifest: &Manifest, opts: GenerateOptions) -> Result<GenerateReport> {
    let builder = lower(manifest, &opts.lower).wrap_err("Failed to build the script")?;
    let file_name = builder.file_name();
    let comments = if opts.lower.external_comments {
        builder.extract_comments()
    } else {
        Vec::new()
    };

    tracing::debug!(file = %file_name, dry_run = opts.dry_run, "generating");
    let result = if opts.dry_run {
        let content = builder.render().wrap_err("Failed to render the script")?;
        GenerationResult::Preview { content }
    } else {
        let operation = builder.create(opts.output_dir);
        let path = operation.target().to_path_buf();
        Box::new(operation)
            .generate()
            .wrap_err("Failed to generate the script")?;
        tracing::info!(path = %path.display(), "script written");
        GenerationResult::Written { path }
    };

    Ok(GenerateReport {
        file_name,
        dsl: opts.lower.dsl,
        insecure_protocol: opts.lower.insecure_protocol,
        comments,
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use buildscript_core::{Dsl, InsecureProtocol};
    use tempfile::TempDir;

    use super::*;

    const MANIFEST: &str = r#"
[[plugins]]
id = "java"
comment = "Apply the java plugin."

[[repositories]]
kind = "maven"
url = "http://repo.example.org/maven2"
"#;

    fn options(output_dir: &Path, dry_run: bool, policy: InsecureProtocol) -> GenerateOptions<'_> {
        GenerateOptions {
            output_dir,
            dry_run,
            lower: LowerOptions {
                dsl: Dsl::Groovy,
                insecure_protocol: policy,
                external_comments: false,
            },
        }
    }

    #[test]
    fn test_generate_writes_script() {
        let temp = TempDir::new().unwrap();
        let manifest = Manifest::from_str(MANIFEST).unwrap();
        let report = generate(&manifest, options(temp.path(), false, InsecureProtocol::Upgrade))
            .unwrap();

        let path = temp.path().join("build.gradle");
        assert!(matches!(report.result, GenerationResult::Written { path: ref p } if *p == path));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("url = uri('https://repo.example.org/maven2')"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let manifest = Manifest::from_str(MANIFEST).unwrap();
        let report =
            generate(&manifest, options(temp.path(), true, InsecureProtocol::Warn)).unwrap();

        match report.result {
            GenerationResult::Preview { ref content } => {
                assert!(content.contains("// allowInsecureProtocol = true"))
            }
            ref other => panic!("expected preview, got {:?}", other),
        }
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_fail_policy_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let manifest = Manifest::from_str(MANIFEST).unwrap();
        let err = generate(&manifest, options(temp.path(), false, InsecureProtocol::Fail))
            .unwrap_err();

        assert!(format!("{:?}", err).contains("http://repo.example.org/maven2"));
        assert!(!temp.path().join("build.gradle").exists());
    }

    #[test]
    fn test_external_comments_are_reported() {
        let temp = TempDir::new().unwrap();
        let manifest = Manifest::from_str(MANIFEST).unwrap();
        let mut opts = options(temp.path(), true, InsecureProtocol::Allow);
        opts.lower.external_comments = true;

        let report = generate(&manifest, opts).unwrap();
        assert_eq!(report.comments, vec!["Apply the java plugin."]);
        match report.result {
            GenerationResult::Preview { ref content } => {
                assert!(content.contains("id 'java' // <1>"))
            }
            ref other => panic!("expected preview, got {:?}", other),
        }
    }
}
