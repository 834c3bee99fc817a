//! Comments command report data structures.

use serde::Serialize;

use super::output::{Output, Report};

/// Comments of a script, numbered like external comment markers.
#[derive(Debug, Serialize)]
pub struct CommentsReport {
    pub file_name: String,
    pub comments: Vec<String>,
}

impl CommentsReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Report for CommentsReport {
    fn render(&self, out: &mut dyn Output) {
        if self.comments.is_empty() {
            out.preformatted(&format!("{} has no comments", self.file_name));
            return;
        }
        out.preformatted(&format!("{}:", self.file_name));
        for (i, comment) in self.comments.iter().enumerate() {
            out.numbered_item(i + 1, comment);
        }
    }
}
