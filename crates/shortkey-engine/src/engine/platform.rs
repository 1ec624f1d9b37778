use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use super::Modifiers;

/// Operating system class, as far as shortcut matching cares.
///
/// Only macOS is special: its primary shortcut modifier is Meta (Command)
/// where every other platform uses Ctrl.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[serde(alias = "mac")]
    MacOs,
    Other,
}

impl Platform {
    /// Platform of the running binary.
    pub fn current() -> Self {
        if cfg!(any(target_os = "macos", target_os = "ios")) {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }

    /// Classify a browser user-agent string.
    pub fn from_user_agent(user_agent: &str) -> Self {
        if user_agent.contains("Mac") {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }

    /// The modifier that Ctrl and Meta are both canonicalized to.
    pub fn primary_modifier(self) -> Modifiers {
        match self {
            Platform::MacOs => Modifiers::META,
            Platform::Other => Modifiers::CTRL,
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Platform::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::MacOs => f.write_str("macos"),
            Platform::Other => f.write_str("other"),
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mac" | "macos" | "darwin" => Ok(Platform::MacOs),
            "other" | "linux" | "windows" => Ok(Platform::Other),
            _ => Err(format!("unknown platform '{}'", s)),
        }
    }
}
