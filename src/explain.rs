use serde::Serialize;
use tracing::debug;

use crate::category::{Category, Severity};
use crate::knowledge::KnowledgeBase;
use crate::parser::{Component, Components, ParsedError};

const UNKNOWN_CAUSE: &str = "Unknown cause - requires further investigation";

/// A user-ready explanation of one error message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    pub category: Category,
    pub severity: Severity,
    pub summary: String,
    pub likely_cause: String,
    pub solutions: Vec<String>,
    pub prevention_tips: Vec<String>,
    pub learn_more: Option<String>,
    pub documentation: Vec<String>,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default)]
pub struct ExplanationGenerator {
    knowledge_base: KnowledgeBase,
}

impl ExplanationGenerator {
    pub fn new() -> Self {
        Self {
            knowledge_base: KnowledgeBase::new(),
        }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    pub fn generate_explanation(&self, parsed: &ParsedError) -> Explanation {
        let knowledge = self.knowledge_base.get_knowledge(parsed.category);
        debug!(category = %parsed.category, components = parsed.components.len(), "Generating explanation");

        Explanation {
            category: parsed.category,
            severity: self.assess_severity(parsed.category),
            summary: knowledge.summary.to_string(),
            likely_cause: customize_cause(knowledge.common_causes, &parsed.components),
            solutions: customize_solutions(knowledge.solutions, &parsed.components),
            prevention_tips: knowledge
                .prevention_tips
                .iter()
                .map(|tip| tip.to_string())
                .collect(),
            learn_more: knowledge.learn_more.map(String::from),
            documentation: self
                .knowledge_base
                .search_documentation(parsed.category)
                .into_iter()
                .map(String::from)
                .collect(),
            confidence: parsed.confidence,
        }
    }

    pub fn assess_severity(&self, category: Category) -> Severity {
        category.severity()
    }
}

/// Picks the most likely cause, preferring a sentence built from the first
/// extracted component in repository, command, filename, resource order.
pub fn customize_cause(common_causes: &[&str], components: &Components) -> String {
    let Some(default_cause) = common_causes.first() else {
        return UNKNOWN_CAUSE.to_string();
    };

    if let Some(repository) = components.get(&Component::Repository) {
        format!("Repository '{}' is not available for your system version", repository)
    } else if let Some(command) = components.get(&Component::Command) {
        format!("Command '{}' is not installed or not in PATH", command)
    } else if let Some(filename) = components.get(&Component::Filename) {
        format!("File or directory '{}' does not exist or cannot be accessed", filename)
    } else if let Some(resource) = components.get(&Component::Resource) {
        format!("You don't have permission to access '{}'", resource)
    } else {
        default_cause.to_string()
    }
}

/// Splices component-specific steps into the generic solutions. Only the
/// first matching component (same order as `customize_cause`) is used.
pub fn customize_solutions(base_solutions: &[&str], components: &Components) -> Vec<String> {
    let mut solutions: Vec<String> = base_solutions.iter().map(|s| s.to_string()).collect();

    if let Some(repository) = components.get(&Component::Repository) {
        let repo_solution = format!(
            "Remove this specific repository: sudo add-apt-repository --remove '{}'",
            repository
        );
        if !solutions.contains(&repo_solution) {
            solutions.insert(1.min(solutions.len()), repo_solution);
        }
    } else if let Some(command) = components.get(&Component::Command) {
        solutions.insert(
            0,
            format!(
                "Install package containing '{}': sudo apt install {}",
                command, command
            ),
        );
    } else if let Some(filename) = components.get(&Component::Filename) {
        solutions.insert(0, format!("Check if file exists: ls -la '{}'", filename));

        let create_solution = format!("Create the file if it should exist: touch '{}'", filename);
        if !solutions.contains(&create_solution) {
            solutions.insert(1, create_solution);
        }
    } else if let Some(resource) = components.get(&Component::Resource) {
        solutions.insert(
            0,
            format!("Check permissions on '{}': ls -la '{}'", resource, resource),
        );
    }

    solutions
}
