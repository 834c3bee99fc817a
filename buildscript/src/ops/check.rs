//! Check operation - manifest validation.

use std::path::Path;

use buildscript_manifest::Manifest;
use eyre::{Context, Result};

use super::{LowerOptions, lower};
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Parsing already validated the manifest itself; this also runs the
/// construction so invalid urls and unknown suites are caught, and renders
/// the script so the insecure protocol policy is applied.
pub fn check(manifest: &Manifest, config_path: &Path, opts: &LowerOptions) -> Result<CheckReport> {
    let builder = lower(manifest, opts).wrap_err("Validation failed")?;
    builder.render().wrap_err("Validation failed")?;

    let mut warnings = Vec::new();
    if !manifest.suites.is_empty() && !manifest.script.incubating {
        tracing::debug!(suites = manifest.suites.len(), "test suites skipped");
        warnings.push(
            "test suites are only generated with `incubating = true` in [script]".to_string(),
        );
    }

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        file_name: builder.file_name(),
        plugins: manifest.plugins.len(),
        repositories: manifest.repositories.len(),
        dependencies: manifest.dependencies.len(),
        suites: if builder.is_using_test_suites() {
            manifest.suites.len()
        } else {
            0
        },
        tasks: manifest.tasks.len(),
        registered_tasks: manifest.registered_task_count(),
        warnings,
    })
}
