//! Entry types for the array-of-tables sections of script.toml.

use std::fmt;

use serde::Deserialize;

/// `[[plugins]]`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PluginEntry {
    pub id: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Kind of a `[[repositories]]` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepositoryKind {
    MavenCentral,
    MavenLocal,
    GradlePluginPortal,
    /// A maven repository at an explicit url
    Maven,
}

impl RepositoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MavenCentral => "maven-central",
            Self::MavenLocal => "maven-local",
            Self::GradlePluginPortal => "gradle-plugin-portal",
            Self::Maven => "maven",
        }
    }
}

impl fmt::Display for RepositoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// `[[repositories]]`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepositoryEntry {
    pub kind: RepositoryKind,
    /// Required for `maven`, rejected otherwise
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// How the notations of a `[[dependencies]]` entry are declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DependencyKind {
    /// `group:name:version` coordinates
    #[default]
    External,
    /// Version constraint inside `constraints { }`
    Constraint,
    /// `platform(...)`
    Platform,
    /// `project(...)`
    Project,
    /// The project itself, takes no notations
    #[serde(rename = "self")]
    SelfProject,
}

impl DependencyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::External => "external",
            Self::Constraint => "constraint",
            Self::Platform => "platform",
            Self::Project => "project",
            Self::SelfProject => "self",
        }
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// `[[dependencies]]`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DependencyEntry {
    pub configuration: String,
    #[serde(default)]
    pub kind: DependencyKind,
    #[serde(default)]
    pub notations: Vec<String>,
    /// Test suite receiving the dependency instead of the project
    #[serde(default)]
    pub suite: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Test framework of a `[[suites]]` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuiteFramework {
    Junit,
    #[default]
    JunitPlatform,
}

/// `[[suites]]`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteEntry {
    pub name: String,
    #[serde(default)]
    pub framework: SuiteFramework,
}

/// A property assignment, used at top level and inside conventions and tasks.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyEntry {
    pub name: String,
    pub value: toml::Value,
    #[serde(default)]
    pub comment: Option<String>,
}

/// `[[conventions]]`: properties of a project extension such as `application`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConventionEntry {
    pub name: String,
    #[serde(default)]
    pub properties: Vec<PropertyEntry>,
}

/// `[[tasks]]`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub task_type: String,
    /// Register a new task instead of configuring an existing one
    #[serde(default)]
    pub register: bool,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub properties: Vec<PropertyEntry>,
}

/// `[[task-types]]`: configuration applied to every task of a type.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskTypeEntry {
    #[serde(rename = "type")]
    pub task_type: String,
    #[serde(default)]
    pub properties: Vec<PropertyEntry>,
}
