//! Generate command report data structures.

use std::path::PathBuf;

use buildscript_core::{Dsl, InsecureProtocol};

use super::output::{Output, Report};

/// Report data from script generation.
#[derive(Debug)]
pub struct GenerateReport {
    pub file_name: String,
    pub dsl: Dsl,
    pub insecure_protocol: InsecureProtocol,
    /// Extracted comments, when generating with external comments.
    pub comments: Vec<String>,
    pub result: GenerationResult,
}

#[derive(Debug)]
pub enum GenerationResult {
    /// Dry run: the script as it would be written.
    Preview { content: String },
    Written { path: PathBuf },
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Preview { content } => {
                out.divider(&self.file_name);
                out.preformatted(content.trim_end());
                out.divider("Summary");
                out.preformatted(&format!("{} would be generated", self.file_name));
            }
            GenerationResult::Written { path } => {
                out.key_value("Generated", &path.display().to_string());
            }
        }
        out.key_value("DSL", self.dsl.as_str());
        out.key_value("Insecure protocol", self.insecure_protocol.as_str());

        if !self.comments.is_empty() {
            out.newline();
            out.preformatted("Comments:");
            for (i, comment) in self.comments.iter().enumerate() {
                out.numbered_item(i + 1, comment);
            }
        }
    }
}
