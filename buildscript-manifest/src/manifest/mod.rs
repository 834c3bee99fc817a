//! Manifest types and parsing for script.toml files.

mod entries;
mod file;
mod parse;
mod script;
mod validate;

pub use entries::{
    ConventionEntry, DependencyEntry, DependencyKind, PluginEntry, PropertyEntry, RepositoryEntry,
    RepositoryKind, SuiteEntry, SuiteFramework, TaskEntry, TaskTypeEntry,
};
pub use file::ScriptToml;
pub use parse::parse_manifest;
pub use script::ScriptConfig;
use serde::Deserialize;
pub use validate::ParseContext;

/// Default manifest file name.
pub const MANIFEST_FILE_NAME: &str = "script.toml";

/// Root manifest for script.toml
///
/// Sections map one to one onto the sections of the generated script and are
/// emitted in the order they are listed here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub script: ScriptConfig,

    #[serde(default)]
    pub plugins: Vec<PluginEntry>,

    #[serde(default)]
    pub repositories: Vec<RepositoryEntry>,

    #[serde(default)]
    pub dependencies: Vec<DependencyEntry>,

    /// Test suites, only emitted when `script.incubating` is set
    #[serde(default)]
    pub suites: Vec<SuiteEntry>,

    /// Top-level property assignments
    #[serde(default)]
    pub properties: Vec<PropertyEntry>,

    #[serde(default)]
    pub conventions: Vec<ConventionEntry>,

    #[serde(default)]
    pub tasks: Vec<TaskEntry>,

    #[serde(default)]
    pub task_types: Vec<TaskTypeEntry>,
}

impl Manifest {
    pub fn has_suite(&self, name: &str) -> bool {
        self.suites.iter().any(|s| s.name == name)
    }

    /// Number of tasks registered (rather than configured) by the script.
    pub fn registered_task_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.register).count()
    }

    /// Dependencies added to test suites rather than the project.
    pub fn suite_dependencies(&self) -> impl Iterator<Item = &DependencyEntry> {
        self.dependencies.iter().filter(|d| d.suite.is_some())
    }
}
