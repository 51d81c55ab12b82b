use crate::display::Renderer;
use crate::Assistant;
use std::io::Cursor;

mod pipeline;

// Test utilities and helpers
pub(crate) struct TestUtils;

impl TestUtils {
    /// One representative message per recognized category.
    pub const SAMPLE_MESSAGES: [(&'static str, crate::Category); 7] = [
        (
            "E: The repository 'http://example/repo' does not have a Release file",
            crate::Category::AptRepository,
        ),
        ("bash: ./deploy.sh: Permission denied", crate::Category::PermissionDenied),
        ("bash: foobar: command not found", crate::Category::CommandNotFound),
        (
            "cannot access '/tmp/x.txt': No such file or directory",
            crate::Category::FileNotFound,
        ),
        ("SyntaxError: invalid syntax", crate::Category::SyntaxError),
        (
            "You have held broken packages.",
            crate::Category::DependencyError,
        ),
        (
            "curl: (7) Failed to connect to example.com port 443",
            crate::Category::NetworkError,
        ),
    ];

    pub fn assistant() -> Assistant {
        Assistant::new(Renderer::plain())
    }

    /// Runs a full interactive session over `input` and returns what it printed.
    pub fn run_session(assistant: &mut Assistant, input: &str) -> String {
        let mut out = Vec::new();
        assistant
            .run_session(Cursor::new(input.as_bytes()), &mut out)
            .expect("session should not fail");
        String::from_utf8(out).expect("output should be utf-8")
    }
}
