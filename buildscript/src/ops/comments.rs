//! Comments operation - comment extraction.

use buildscript_manifest::Manifest;
use eyre::{Context, Result};

use super::{LowerOptions, lower};
use crate::reports::CommentsReport;

/// Collect the comments of the script in document order.
///
/// Entry `n - 1` is the text behind marker `<n>` when the script is
/// generated with external comments.
pub fn comments(manifest: &Manifest, opts: &LowerOptions) -> Result<CommentsReport> {
    let builder = lower(manifest, opts).wrap_err("Failed to build the script")?;
    Ok(CommentsReport {
        file_name: builder.file_name(),
        comments: builder.extract_comments(),
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use buildscript_core::{Dsl, InsecureProtocol};

    use super::*;

    #[test]
    fn test_comments_in_document_order() {
        let manifest = Manifest::from_str(
            r#"
[[tasks]]
name = "test"
type = "Test"
properties = [{ name = "maxParallelForks", value = 2, comment = "task" }]

[[dependencies]]
configuration = "implementation"
notations = ["com.google.guava:guava:31.1-jre"]
comment = "dependency"

[[plugins]]
id = "java"
comment = "plugin"
"#,
        )
        .unwrap();
        let opts = LowerOptions {
            dsl: Dsl::Groovy,
            insecure_protocol: InsecureProtocol::Warn,
            external_comments: true,
        };
        let report = comments(&manifest, &opts).unwrap();
        assert_eq!(report.file_name, "build.gradle");
        assert_eq!(report.comments, vec!["plugin", "dependency", "task"]);
    }
}
