//! How generated scripts treat repositories reached over an insecure protocol.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Handling of repository URLs that use an insecure transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsecureProtocol {
    /// Abort generation.
    Fail,
    /// Keep the URL and leave a commented-out opt-in for the user.
    #[default]
    Warn,
    /// Keep the URL and opt into the insecure protocol.
    Allow,
    /// Rewrite the URL to use `https`.
    Upgrade,
}

impl InsecureProtocol {
    /// Returns the option identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            InsecureProtocol::Fail => "fail",
            InsecureProtocol::Warn => "warn",
            InsecureProtocol::Allow => "allow",
            InsecureProtocol::Upgrade => "upgrade",
        }
    }
}

impl fmt::Display for InsecureProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsecureProtocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fail" => Ok(InsecureProtocol::Fail),
            "warn" => Ok(InsecureProtocol::Warn),
            "allow" => Ok(InsecureProtocol::Allow),
            "upgrade" => Ok(InsecureProtocol::Upgrade),
            _ => Err(format!(
                "unknown insecure protocol option '{}', expected one of: fail, warn, allow, upgrade",
                s
            )),
        }
    }
}
