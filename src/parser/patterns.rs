//! Pattern tables used to classify error messages.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

use crate::category::Category;

/// Casual phrasings a person might type when describing an error.
/// Checked first, against the lower-cased message.
pub static NATURAL_PATTERNS: LazyLock<PatternTable> =
    LazyLock::new(|| PatternTable::build(NATURAL_TABLE));

/// Raw tool output: apt, dpkg, bash/zsh, coreutils and friends.
/// Checked second, against the message as given.
pub static TECHNICAL_PATTERNS: LazyLock<PatternTable> =
    LazyLock::new(|| PatternTable::build(TECHNICAL_TABLE));

type RawTable = &'static [(Category, &'static [&'static str])];

const NATURAL_TABLE: RawTable = &[
    (
        Category::FileNotFound,
        &[
            r"can'?t open file",
            r"cannot open file",
            r"file (is )?missing",
            r"missing file",
            r"file not found",
            r"no such file",
            r"couldn'?t find file",
            r"unable to open file",
        ],
    ),
    (
        Category::PermissionDenied,
        &[
            r"permission denied",
            r"not allowed",
            r"access denied",
            r"don'?t have permission",
            r"cannot access",
        ],
    ),
    (
        Category::CommandNotFound,
        &[
            r"command not found",
            r"can'?t find command",
            r"no such command",
            r"command.*missing",
        ],
    ),
];

const TECHNICAL_TABLE: RawTable = &[
    (
        Category::AptRepository,
        &[
            r"E: The repository '.+' does not have a Release file",
            r"E: .*repository.*not found",
            r"E: .*failed to fetch",
            r"W: Failed to fetch .* 404 Not Found",
            r"E: .*release file",
            r"repository.*not available",
            r"failed to fetch.*repository",
        ],
    ),
    (
        Category::PermissionDenied,
        &[
            r"Permission denied",
            r"E: Could not open lock file",
            r"Operation not permitted",
            r"Access denied",
            r"Unable to acquire the dpkg frontend lock",
            r"permission.*denied",
            r"not allowed",
            r"access.*denied",
            r"cannot open.*permission",
        ],
    ),
    (
        Category::CommandNotFound,
        &[
            r"command not found",
            r"Command '.+' not found",
            r"bash: .*: command not found",
            r"zsh: command not found:",
            r"command.*not found",
            r"not found.*command",
            r"no such.*command",
        ],
    ),
    (
        Category::FileNotFound,
        &[
            r"No such file or directory",
            r"File not found",
            r"cannot access .*: No such file or directory",
            r"ls: cannot access .*: No such file or directory",
            r"file.*not found",
            r"no such file",
            r"cannot find.*file",
            r"missing.*file",
            r"file.*missing",
            r"cannot open.*file",
            r"open.*file.*failed",
        ],
    ),
    (
        Category::SyntaxError,
        &[
            r"SyntaxError:",
            r"E: Invalid operation",
            r"Invalid command",
            r"bash: syntax error",
            r"unexpected token",
            r"syntax error",
            r"invalid syntax",
        ],
    ),
    (
        Category::DependencyError,
        &[
            r"dependency problems",
            r"unmet dependencies",
            r"broken packages",
            r"you have held broken packages",
            r"depends on .* but it is not going to be installed",
            r"dependency.*error",
            r"broken.*dependency",
        ],
    ),
    (
        Category::NetworkError,
        &[
            r"Temporary failure resolving",
            r"Failed to connect to",
            r"Connection timed out",
            r"Network is unreachable",
            r"connection.*failed",
            r"network.*error",
            r"cannot connect",
            r"timeout",
        ],
    ),
];

/// An ordered list of categories, each with an ordered list of
/// case-insensitive patterns.
#[derive(Debug)]
pub struct PatternTable {
    rows: Vec<(Category, Vec<Regex>)>,
}

impl PatternTable {
    fn build(rows: RawTable) -> Self {
        let rows = rows
            .iter()
            .map(|(category, patterns)| {
                let compiled = patterns
                    .iter()
                    .map(|pattern| {
                        RegexBuilder::new(pattern)
                            .case_insensitive(true)
                            .build()
                            .expect("Invalid error pattern")
                    })
                    .collect();
                (*category, compiled)
            })
            .collect();

        Self { rows }
    }

    /// First category, in declaration order, with any pattern matching `text`.
    pub fn first_match(&self, text: &str) -> Option<Category> {
        self.rows
            .iter()
            .find(|(_, patterns)| patterns.iter().any(|re| re.is_match(text)))
            .map(|(category, _)| *category)
    }

    /// Number of `category`'s patterns that match `text`.
    pub fn count_matches(&self, category: Category, text: &str) -> usize {
        self.patterns_for(category)
            .iter()
            .filter(|re| re.is_match(text))
            .count()
    }

    pub fn patterns_for(&self, category: Category) -> &[Regex] {
        self.rows
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, patterns)| patterns.as_slice())
            .unwrap_or(&[])
    }
}
