use anyhow::Result;
use std::io::Write;

use crate::config::Config;
use crate::explain::Explanation;
use crate::theme::{ColorScheme, Theme};

const RULE_WIDTH: usize = 50;

/// Writes explanations for a person at a terminal, or as JSON.
#[derive(Debug, Clone)]
pub struct Renderer {
    theme: Theme,
    styled: bool,
    show_prevention_tips: bool,
    show_learn_more: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Renderer {
    pub fn new(config: &Config) -> Self {
        Self {
            theme: config.effective_theme(),
            styled: true,
            show_prevention_tips: config.display.show_prevention_tips,
            show_learn_more: config.display.show_learn_more,
        }
    }

    /// Unstyled output with every section enabled.
    pub fn plain() -> Self {
        Self::default().with_color(false)
    }

    pub fn with_color(mut self, enabled: bool) -> Self {
        self.styled = enabled;
        self
    }

    fn paint(&self, scheme: &ColorScheme, text: &str) -> String {
        if self.styled {
            scheme.apply(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn label(&self, text: &str) -> String {
        self.paint(&self.theme.label, text)
    }

    pub fn render_banner<W: Write>(&self, title: &str, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.paint(&self.theme.header, title))?;
        writeln!(out, "Paste an error message to get an explanation. Type 'help' for usage.")?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        Ok(())
    }

    pub fn render<W: Write>(&self, explanation: &Explanation, out: &mut W) -> Result<()> {
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(out)?;
        writeln!(out, "{}", rule)?;
        writeln!(out, "{}", self.paint(&self.theme.header, "COGNITO ANALYSIS"))?;
        writeln!(out, "{}", rule)?;
        writeln!(
            out,
            "{} {}",
            self.label("Type:"),
            explanation.category.display_name()
        )?;
        writeln!(
            out,
            "{} {}",
            self.label("Severity:"),
            self.paint(
                self.theme.severity(explanation.severity),
                &explanation.severity.as_str().to_uppercase()
            )
        )?;
        writeln!(out, "{} {}", self.label("Summary:"), explanation.summary)?;
        writeln!(
            out,
            "{} {}",
            self.label("Cause:"),
            self.paint(&self.theme.cause, &explanation.likely_cause)
        )?;

        writeln!(out)?;
        writeln!(out, "{}", self.label("Solutions:"))?;
        for (i, solution) in explanation.solutions.iter().enumerate() {
            writeln!(
                out,
                "   {}. {}",
                i + 1,
                self.paint(&self.theme.solution, solution)
            )?;
        }

        if self.show_prevention_tips && !explanation.prevention_tips.is_empty() {
            writeln!(out)?;
            writeln!(out, "{}", self.label("Prevention:"))?;
            for tip in &explanation.prevention_tips {
                writeln!(out, "   - {}", self.paint(&self.theme.tip, tip))?;
            }
        }

        if self.show_learn_more {
            if let Some(url) = &explanation.learn_more {
                writeln!(out)?;
                writeln!(
                    out,
                    "{} {}",
                    self.label("Learn more:"),
                    self.paint(&self.theme.link, url)
                )?;
            }
        }

        writeln!(out)?;
        writeln!(
            out,
            "{} {}",
            self.label("Confidence:"),
            format_confidence(explanation.confidence)
        )?;
        writeln!(out, "{}", rule)?;

        Ok(())
    }

    pub fn render_json<W: Write>(&self, explanation: &Explanation, out: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, explanation)?;
        writeln!(out)?;
        Ok(())
    }
}

/// Confidence as a whole percentage, e.g. `0.95` is "95%".
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.0}%", confidence * 100.0)
}
