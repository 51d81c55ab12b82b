use chrono::{DateTime, Local};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::debug;

use crate::category::Category;

mod patterns;

pub use patterns::{PatternTable, NATURAL_PATTERNS, TECHNICAL_PATTERNS};

const UNKNOWN_CONFIDENCE: f64 = 0.3;

static QUOTED_NONEMPTY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'([^']+)'").expect("Invalid quoted regex"));

static QUOTED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'(.*?)'").expect("Invalid quoted regex"));

/// The word in front of "Release", e.g. "jammy Release".
static DISTRIBUTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\s+Release").expect("Invalid distribution regex"));

static COMMAND_QUOTED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Command '([^']+)'").expect("Invalid command regex"));

static SHELL_COMMAND_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:bash|zsh): ([^:]+): command not found").expect("Invalid shell command regex")
});

static LOOSE_COMMAND_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:can'?t find|command not found).*?([a-zA-Z0-9_-]+)")
        .expect("Invalid command regex")
});

static CANNOT_ACCESS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"cannot access (.+?):").expect("Invalid cannot access regex"));

static LOOSE_FILE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:file|open).*?([a-zA-Z0-9_./-]+)").expect("Invalid file regex")
});

static LOOSE_RESOURCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:access|open|execute).*?([a-zA-Z0-9_./-]+)").expect("Invalid resource regex")
});

/// Named fragments pulled out of an error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Repository,
    Distribution,
    Command,
    Filename,
    Resource,
}

pub type Components = BTreeMap<Component, String>;

#[derive(Debug, Clone, Serialize)]
pub struct ParsedError {
    pub original_message: String,
    pub category: Category,
    pub components: Components,
    pub confidence: f64,
    pub timestamp: DateTime<Local>,
}

/// Classifies error messages and extracts the interesting bits from them.
///
/// Holds only references to the process-wide pattern tables, so it is cheap
/// to create and safe to share.
#[derive(Debug, Clone, Copy)]
pub struct ErrorParser {
    natural: &'static PatternTable,
    technical: &'static PatternTable,
}

impl Default for ErrorParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorParser {
    pub fn new() -> Self {
        Self {
            natural: &NATURAL_PATTERNS,
            technical: &TECHNICAL_PATTERNS,
        }
    }

    pub fn parse_error(&self, message: &str) -> ParsedError {
        let category = self.classify(message);

        ParsedError {
            original_message: message.to_string(),
            category,
            components: self.extract_components(message, category),
            confidence: self.calculate_confidence(message, category),
            timestamp: Local::now(),
        }
    }

    /// Natural-language phrasings win over raw tool output. Within a table
    /// the first declared category with a matching pattern wins.
    pub fn classify(&self, message: &str) -> Category {
        let lowered = message.to_lowercase();

        if let Some(category) = self.natural.first_match(&lowered) {
            debug!(%category, "Matched natural-language pattern");
            return category;
        }

        if let Some(category) = self.technical.first_match(message) {
            debug!(%category, "Matched technical pattern");
            return category;
        }

        debug!("No pattern matched, falling back to unknown");
        Category::Unknown
    }

    pub fn extract_components(&self, message: &str, category: Category) -> Components {
        let mut components = Components::new();
        let lowered = message.to_lowercase();

        match category {
            Category::AptRepository => {
                if let Some(repository) = capture(&QUOTED_NONEMPTY_REGEX, message) {
                    components.insert(Component::Repository, repository);
                }
                if let Some(distribution) = capture(&DISTRIBUTION_REGEX, message) {
                    components.insert(Component::Distribution, distribution);
                }
            }
            Category::CommandNotFound => {
                let command = capture(&COMMAND_QUOTED_REGEX, message)
                    .or_else(|| capture(&SHELL_COMMAND_REGEX, message))
                    .or_else(|| capture(&LOOSE_COMMAND_REGEX, &lowered));
                if let Some(command) = command {
                    components.insert(Component::Command, command);
                }
            }
            Category::FileNotFound => {
                let filename = capture(&QUOTED_REGEX, message)
                    .or_else(|| capture(&CANNOT_ACCESS_REGEX, message))
                    .or_else(|| capture(&LOOSE_FILE_REGEX, &lowered));
                if let Some(filename) = filename {
                    components.insert(Component::Filename, filename);
                }
            }
            Category::PermissionDenied => {
                if let Some(resource) = capture(&LOOSE_RESOURCE_REGEX, &lowered) {
                    components.insert(Component::Resource, resource);
                }
            }
            _ => {}
        }

        components
    }

    /// Heuristic score derived from how many of the category's patterns match.
    pub fn calculate_confidence(&self, message: &str, category: Category) -> f64 {
        if category == Category::Unknown {
            return UNKNOWN_CONFIDENCE;
        }

        let technical_matches = self.technical.count_matches(category, message) as f64;
        let natural_matches = self
            .natural
            .count_matches(category, &message.to_lowercase()) as f64;

        debug!(
            %category,
            technical_matches, natural_matches, "Computed pattern match counts"
        );

        if technical_matches > 0.0 {
            (0.3 + technical_matches * 0.2 + natural_matches * 0.1).min(0.95)
        } else if natural_matches > 0.0 {
            (0.5 + natural_matches * 0.15).min(0.9)
        } else {
            0.7
        }
    }
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> ErrorParser {
        ErrorParser::new()
    }

    #[test]
    fn test_classify_sample_messages() {
        let samples = [
            (
                "E: The repository 'http://example/repo' does not have a Release file",
                Category::AptRepository,
            ),
            ("bash: ./deploy.sh: Permission denied", Category::PermissionDenied),
            ("bash: foobar: command not found", Category::CommandNotFound),
            (
                "cat: notes.txt: No such file or directory",
                Category::FileNotFound,
            ),
            (
                "bash: syntax error near unexpected token `)'",
                Category::SyntaxError,
            ),
            (
                "The following packages have unmet dependencies:",
                Category::DependencyError,
            ),
            (
                "Temporary failure resolving 'archive.ubuntu.com'",
                Category::NetworkError,
            ),
            ("xyzzy plugh", Category::Unknown),
        ];

        let parser = parser();
        for (message, expected) in samples {
            assert_eq!(parser.classify(message), expected, "message: {}", message);
        }
    }

    #[test]
    fn test_natural_phrasing_checked_before_technical() {
        // "cannot access" is a natural permission phrase; the technical
        // table alone would call this a network error.
        let message = "cannot access mirror: Connection timed out";
        assert_eq!(
            TECHNICAL_PATTERNS.first_match(message),
            Some(Category::NetworkError)
        );
        assert_eq!(parser().classify(message), Category::PermissionDenied);
    }

    #[test]
    fn test_extract_shell_command() {
        let parser = parser();
        let message = "bash: foobar: command not found";
        let components = parser.extract_components(message, Category::CommandNotFound);
        assert_eq!(components.len(), 1);
        assert_eq!(components[&Component::Command], "foobar");
    }

    #[test]
    fn test_extract_quoted_command_preferred() {
        let message = "Command 'htop' not found, but can be installed with: sudo apt install htop";
        let components = parser().extract_components(message, Category::CommandNotFound);
        assert_eq!(components[&Component::Command], "htop");
    }

    #[test]
    fn test_extract_zsh_command_via_loose_pattern() {
        let message = "zsh: command not found: kubectl";
        let components = parser().extract_components(message, Category::CommandNotFound);
        assert_eq!(components[&Component::Command], "kubectl");
    }

    #[test]
    fn test_extract_apt_repository_and_distribution() {
        let message = "E: The repository 'http://ppa.launchpad.net/foo/ubuntu jammy Release' does not have a Release file.";
        let components = parser().extract_components(message, Category::AptRepository);
        assert_eq!(
            components[&Component::Repository],
            "http://ppa.launchpad.net/foo/ubuntu jammy Release"
        );
        assert_eq!(components[&Component::Distribution], "jammy");
    }

    #[test]
    fn test_extract_filename_fallbacks() {
        let parser = parser();

        let quoted = parser.extract_components(
            "cannot access '/tmp/x.txt': No such file or directory",
            Category::FileNotFound,
        );
        assert_eq!(quoted[&Component::Filename], "/tmp/x.txt");

        let unquoted = parser.extract_components(
            "ls: cannot access /var/log/app.log: No such file or directory",
            Category::FileNotFound,
        );
        assert_eq!(unquoted[&Component::Filename], "/var/log/app.log");
    }

    #[test]
    fn test_extract_permission_resource() {
        let components = parser().extract_components(
            "Permission denied: cannot open /etc/shadow",
            Category::PermissionDenied,
        );
        assert_eq!(components[&Component::Resource], "/etc/shadow");
    }

    #[test]
    fn test_no_components_for_other_categories() {
        let parser = parser();
        assert!(parser
            .extract_components("unmet dependencies 'libfoo'", Category::DependencyError)
            .is_empty());
        assert!(parser
            .extract_components("Permission denied", Category::PermissionDenied)
            .is_empty());
    }

    #[test]
    fn test_confidence_for_unknown_is_fixed() {
        let parser = parser();
        assert_eq!(parser.calculate_confidence("xyzzy plugh", Category::Unknown), 0.3);
        assert_eq!(parser.parse_error("xyzzy plugh").confidence, 0.3);
    }

    #[test]
    fn test_confidence_is_clamped() {
        // Three technical and one natural match would be 1.0 unclamped.
        let message = "cannot access '/tmp/x.txt': No such file or directory";
        let confidence = parser().calculate_confidence(message, Category::FileNotFound);
        assert_eq!(confidence, 0.95);
    }

    #[test]
    fn test_confidence_natural_only() {
        // No technical permission pattern matches "don't have permission".
        let message = "I don't have permission";
        let confidence = parser().calculate_confidence(message, Category::PermissionDenied);
        assert_eq!(confidence, 0.5 + 0.15);
    }

    #[test]
    fn test_confidence_without_any_match() {
        let confidence = parser().calculate_confidence("all good", Category::SyntaxError);
        assert_eq!(confidence, 0.7);
    }

    #[test]
    fn test_parse_error_populates_fields() {
        let parsed = parser().parse_error("bash: foobar: command not found");
        assert_eq!(parsed.original_message, "bash: foobar: command not found");
        assert_eq!(parsed.category, Category::CommandNotFound);
        assert_eq!(parsed.components[&Component::Command], "foobar");
        assert!(parsed.confidence > 0.3 && parsed.confidence <= 0.95);
    }
}
