use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The error categories the assistant knows how to explain.
///
/// `Unknown` is the fallback for anything the pattern tables don't recognize
/// and always has a knowledge entry of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    AptRepository,
    PermissionDenied,
    CommandNotFound,
    FileNotFound,
    SyntaxError,
    DependencyError,
    NetworkError,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Unknown,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::AptRepository,
        Category::PermissionDenied,
        Category::CommandNotFound,
        Category::FileNotFound,
        Category::SyntaxError,
        Category::DependencyError,
        Category::NetworkError,
        Category::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::AptRepository => "apt_repository",
            Category::PermissionDenied => "permission_denied",
            Category::CommandNotFound => "command_not_found",
            Category::FileNotFound => "file_not_found",
            Category::SyntaxError => "syntax_error",
            Category::DependencyError => "dependency_error",
            Category::NetworkError => "network_error",
            Category::Unknown => "unknown",
        }
    }

    /// Lenient lookup by tag. Anything unrecognized is `Unknown`.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or(Category::Unknown)
    }

    /// Human-facing name, e.g. `apt_repository` becomes "Apt Repository".
    pub fn display_name(&self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn severity(&self) -> Severity {
        match self {
            Category::AptRepository => Severity::Medium,
            Category::PermissionDenied => Severity::Low,
            Category::CommandNotFound => Severity::Low,
            Category::FileNotFound => Severity::Low,
            Category::SyntaxError => Severity::Low,
            Category::DependencyError => Severity::High,
            Category::NetworkError => Severity::Medium,
            Category::Unknown => Severity::Unknown,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| anyhow!("Unrecognized error category: {}", s))
    }
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
