pub mod assistant;
pub mod category;
pub mod config;
pub mod display;
pub mod explain;
pub mod knowledge;
pub mod parser;
pub mod theme;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use assistant::{Assistant, OutputFormat};
pub use category::{Category, Severity};
pub use config::Config;
pub use explain::{Explanation, ExplanationGenerator};
pub use knowledge::{KnowledgeBase, KnowledgeEntry};
pub use parser::{Component, Components, ErrorParser, ParsedError};
