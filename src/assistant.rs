use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{error, info};

use crate::display::Renderer;
use crate::explain::{Explanation, ExplanationGenerator};
use crate::parser::ErrorParser;

pub const VERSION: &str = "2.0";

const PROMPT: &str = "Cognito > ";

const HELP_TEXT: &str = r#"
Cognito Help:
  <error>   - Analyze error message
  help, ?   - Show this help
  exit      - Quit

Examples:
  "E: The repository ... does not have a Release file"
  "bash: npm: command not found"
  "Permission denied"
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Ties the parser, explanation generator and renderer together for one
/// terminal session.
#[derive(Debug)]
pub struct Assistant {
    parser: ErrorParser,
    generator: ExplanationGenerator,
    renderer: Renderer,
    format: OutputFormat,
    interaction_count: usize,
}

impl Assistant {
    pub fn new(renderer: Renderer) -> Self {
        Self {
            parser: ErrorParser::new(),
            generator: ExplanationGenerator::new(),
            renderer,
            format: OutputFormat::Text,
            interaction_count: 0,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Lines handed to the pipeline this session, including ones whose
    /// output failed.
    pub fn interaction_count(&self) -> usize {
        self.interaction_count
    }

    pub fn analyze(&self, message: &str) -> Explanation {
        let parsed = self.parser.parse_error(message);
        info!(
            category = %parsed.category,
            confidence = parsed.confidence,
            "Classified error message"
        );
        self.generator.generate_explanation(&parsed)
    }

    pub fn process_error<W: Write>(&self, message: &str, out: &mut W) -> Result<()> {
        if self.format == OutputFormat::Text {
            writeln!(out, "Analyzing error...")?;
        }

        let explanation = self.analyze(message);

        match self.format {
            OutputFormat::Text => self.renderer.render(&explanation, out),
            OutputFormat::Json => self.renderer.render_json(&explanation, out),
        }
    }

    pub fn display_banner<W: Write>(&self, out: &mut W) -> Result<()> {
        self.renderer
            .render_banner(&format!("Cognito v{} - CLI Error Assistant", VERSION), out)
    }

    pub fn show_help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", HELP_TEXT)?;
        Ok(())
    }

    /// Reads error messages line by line until `exit`, `quit` or end of
    /// input. A failure on one line is reported and the session continues.
    pub fn run_session<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<()> {
        self.display_banner(out)?;

        loop {
            write!(out, "\n{}", PROMPT)?;
            out.flush()?;

            let mut buf = Vec::new();
            let read = input
                .read_until(b'\n', &mut buf)
                .context("Failed to read from input")?;
            if read == 0 {
                writeln!(out, "\nSee you next time!")?;
                break;
            }

            // Undecodable bytes become U+FFFD rather than ending the session.
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim();
            match line.to_lowercase().as_str() {
                "exit" | "quit" => {
                    writeln!(out, "\nGoodbye!")?;
                    break;
                }
                "help" | "?" => {
                    self.show_help(out)?;
                    continue;
                }
                "" => continue,
                _ => {}
            }

            if let Err(e) = self.process_error(line, out) {
                error!(error = %e, "Failed to process error message");
                writeln!(out, "Error: {}", e)?;
            }
            self.interaction_count += 1;
        }

        info!(interactions = self.interaction_count, "Session finished");
        Ok(())
    }
}
