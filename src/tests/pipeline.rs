use super::TestUtils;
use crate::explain::ExplanationGenerator;
use crate::knowledge::KnowledgeBase;
use crate::parser::{Component, ErrorParser};
use crate::Category;
use pretty_assertions::assert_eq;

#[test]
fn test_sample_messages_classify() {
    let parser = ErrorParser::new();
    for (message, expected) in TestUtils::SAMPLE_MESSAGES {
        let parsed = parser.parse_error(message);
        assert_eq!(parsed.category, expected, "message: {}", message);
        assert!(
            parsed.confidence >= 0.3 && parsed.confidence <= 0.95,
            "confidence {} out of range for {}",
            parsed.confidence,
            message
        );
    }
}

#[test]
fn test_file_not_found_pipeline() {
    let parser = ErrorParser::new();
    let generator = ExplanationGenerator::new();

    let parsed = parser.parse_error("cannot access '/tmp/x.txt': No such file or directory");
    assert_eq!(parsed.category, Category::FileNotFound);
    assert!(parsed.confidence > 0.3);
    assert_eq!(parsed.components[&Component::Filename], "/tmp/x.txt");

    let explanation = generator.generate_explanation(&parsed);
    assert_eq!(
        explanation.likely_cause,
        "File or directory '/tmp/x.txt' does not exist or cannot be accessed"
    );
    assert_eq!(
        &explanation.solutions[..2],
        &[
            "Check if file exists: ls -la '/tmp/x.txt'".to_string(),
            "Create the file if it should exist: touch '/tmp/x.txt'".to_string(),
        ]
    );
}

#[test]
fn test_unrecognized_message_pipeline() {
    let parser = ErrorParser::new();
    let parsed = parser.parse_error("xyzzy plugh");
    assert_eq!(parsed.category, Category::Unknown);
    assert!(parsed.components.is_empty());
    assert_eq!(parsed.confidence, 0.3);

    let explanation = ExplanationGenerator::new().generate_explanation(&parsed);
    let unknown = KnowledgeBase::new();
    assert_eq!(explanation.solutions, unknown.get_knowledge(Category::Unknown).solutions);
}

#[test]
fn test_explanations_are_repeatable() {
    let parser = ErrorParser::new();
    let generator = ExplanationGenerator::new();

    for message in [
        "E: The repository 'http://example/repo' does not have a Release file",
        "bash: foobar: command not found",
        "I can't open file report.pdf",
        "xyzzy plugh",
    ] {
        let first = generator.generate_explanation(&parser.parse_error(message));
        let second = generator.generate_explanation(&parser.parse_error(message));
        assert_eq!(first, second);
    }
}

#[test]
fn test_apt_repository_pipeline() {
    let parser = ErrorParser::new();
    let generator = ExplanationGenerator::new();

    let parsed = parser.parse_error(
        "E: The repository 'http://ppa.launchpad.net/foo/ubuntu noble Release' does not have a Release file.",
    );
    assert_eq!(parsed.category, Category::AptRepository);
    assert_eq!(parsed.components[&Component::Distribution], "noble");

    let explanation = generator.generate_explanation(&parsed);
    assert_eq!(
        explanation.solutions[1],
        "Remove this specific repository: sudo add-apt-repository --remove 'http://ppa.launchpad.net/foo/ubuntu noble Release'"
    );
    assert_eq!(explanation.solutions.len(), 7);
}

#[test]
fn test_knowledge_is_total() {
    let kb = KnowledgeBase::new();
    for category in Category::ALL {
        assert!(!kb.get_knowledge(category).summary.is_empty());
    }
    assert!(!kb.get_knowledge_by_name("segfault").summary.is_empty());
}
