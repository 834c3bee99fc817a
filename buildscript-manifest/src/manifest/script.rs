use buildscript_core::{Dsl, InsecureProtocol};
use serde::Deserialize;

fn default_name() -> String {
    "build".to_string()
}

/// The `[script]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ScriptConfig {
    /// File name without extension
    #[serde(default = "default_name")]
    pub name: String,

    /// Target dialect; a command line flag takes precedence
    #[serde(default)]
    pub dsl: Option<Dsl>,

    #[serde(default)]
    pub insecure_protocol: InsecureProtocol,

    /// Allow incubating APIs, which enables test suites
    #[serde(default)]
    pub incubating: bool,

    /// Set the script up as a convention plugin build
    #[serde(default)]
    pub convention_plugin: bool,

    /// Extra lines for the file header
    #[serde(default)]
    pub header: Vec<String>,
}

impl ScriptConfig {
    /// The dialect to generate, preferring `overridden` when given.
    pub fn dsl_or(&self, overridden: Option<Dsl>) -> Dsl {
        overridden.or(self.dsl).unwrap_or_default()
    }

    /// The insecure protocol policy, preferring `overridden` when given.
    pub fn insecure_protocol_or(&self, overridden: Option<InsecureProtocol>) -> InsecureProtocol {
        overridden.unwrap_or(self.insecure_protocol)
    }
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            dsl: None,
            insecure_protocol: InsecureProtocol::default(),
            incubating: false,
            convention_plugin: false,
            header: Vec::new(),
        }
    }
}
