//! Script dialects supported by the generator.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported build script dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dsl {
    /// Groovy DSL (`build.gradle`)
    Groovy,
    /// Kotlin DSL (`build.gradle.kts`)
    #[default]
    Kotlin,
}

impl Dsl {
    /// Returns the dialect identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dsl::Groovy => "groovy",
            Dsl::Kotlin => "kotlin",
        }
    }

    /// File extension of scripts written in this dialect, without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Dsl::Groovy => "gradle",
            Dsl::Kotlin => "gradle.kts",
        }
    }

    /// Resolve the script file name for a name without extension.
    ///
    /// `build` becomes `build.gradle` for Groovy and `build.gradle.kts` for Kotlin.
    pub fn file_name_for(&self, name: &str) -> String {
        format!("{}.{}", name, self.extension())
    }
}

impl fmt::Display for Dsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Dsl {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "groovy" => Ok(Dsl::Groovy),
            "kotlin" | "kts" => Ok(Dsl::Kotlin),
            _ => Err(format!(
                "unknown dsl '{}', expected 'groovy' or 'kotlin'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Dsl::from_str("groovy").unwrap(), Dsl::Groovy);
        assert_eq!(Dsl::from_str("Groovy").unwrap(), Dsl::Groovy);
        assert_eq!(Dsl::from_str("kotlin").unwrap(), Dsl::Kotlin);
        assert_eq!(Dsl::from_str("kts").unwrap(), Dsl::Kotlin);
        assert!(Dsl::from_str("maven").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Dsl::Groovy.to_string(), "groovy");
        assert_eq!(Dsl::Kotlin.to_string(), "kotlin");
    }

    #[test]
    fn test_file_name_for() {
        assert_eq!(Dsl::Groovy.file_name_for("build"), "build.gradle");
        assert_eq!(Dsl::Kotlin.file_name_for("build"), "build.gradle.kts");
        assert_eq!(
            Dsl::Kotlin.file_name_for("settings"),
            "settings.gradle.kts"
        );
    }

    #[test]
    fn test_deserialize() {
        let groovy: Dsl = serde_json::from_str(r#""groovy""#).unwrap();
        assert_eq!(groovy, Dsl::Groovy);

        let kotlin: Dsl = serde_json::from_str(r#""kotlin""#).unwrap();
        assert_eq!(kotlin, Dsl::Kotlin);
    }
}
