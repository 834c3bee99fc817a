//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Name of the script that would be generated.
    pub file_name: String,
    pub plugins: usize,
    pub repositories: usize,
    pub dependencies: usize,
    /// Suites that end up in the script.
    pub suites: usize,
    pub tasks: usize,
    pub registered_tasks: usize,
    pub warnings: Vec<String>,
}

fn count(n: usize, one: &str, many: &str) -> String {
    format!("{} {}", n, if n == 1 { one } else { many })
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.key_value("Script", &self.file_name);
        out.list_item(&count(self.plugins, "plugin", "plugins"));
        out.list_item(&count(self.repositories, "repository", "repositories"));
        out.list_item(&count(self.dependencies, "dependency", "dependencies"));
        out.list_item(&count(self.suites, "test suite", "test suites"));
        out.list_item(&format!(
            "{} ({} registered)",
            count(self.tasks, "task", "tasks"),
            self.registered_tasks
        ));
    }
}
