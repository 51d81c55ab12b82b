pub use colored::{Color, Colorize};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::category::Severity;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub foreground: Option<ColorWrapper>,
    pub background: Option<ColorWrapper>,
    pub bold: bool,
    pub underline: bool,
}

// Wrapper type for Color that implements Serialize/Deserialize
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct ColorWrapper(Color);

impl From<ColorWrapper> for String {
    fn from(wrapper: ColorWrapper) -> Self {
        color_name(wrapper.0).to_string()
    }
}

impl From<String> for ColorWrapper {
    fn from(s: String) -> Self {
        ColorWrapper(Color::from_str(&s).unwrap_or(Color::White))
    }
}

impl From<Color> for ColorWrapper {
    fn from(color: Color) -> Self {
        ColorWrapper(color)
    }
}

/// Names `Color::from_str` understands, so a saved theme loads back.
fn color_name(color: Color) -> &'static str {
    match color {
        Color::Black => "black",
        Color::Red => "red",
        Color::Green => "green",
        Color::Yellow => "yellow",
        Color::Blue => "blue",
        Color::Magenta => "magenta",
        Color::Cyan => "cyan",
        Color::White => "white",
        Color::BrightBlack => "bright black",
        Color::BrightRed => "bright red",
        Color::BrightGreen => "bright green",
        Color::BrightYellow => "bright yellow",
        Color::BrightBlue => "bright blue",
        Color::BrightMagenta => "bright magenta",
        Color::BrightCyan => "bright cyan",
        Color::BrightWhite => "bright white",
        _ => "white",
    }
}

/// Colors used when rendering an analysis in the terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub header: ColorScheme,
    pub label: ColorScheme,
    pub cause: ColorScheme,
    pub solution: ColorScheme,
    pub tip: ColorScheme,
    pub link: ColorScheme,
    pub severity_high: ColorScheme,
    pub severity_medium: ColorScheme,
    pub severity_low: ColorScheme,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            header: ColorScheme {
                foreground: Some(ColorWrapper(Color::Blue)),
                background: None,
                bold: true,
                underline: false,
            },
            label: ColorScheme {
                foreground: None,
                background: None,
                bold: true,
                underline: false,
            },
            cause: ColorScheme {
                foreground: Some(ColorWrapper(Color::Yellow)),
                ..Default::default()
            },
            solution: ColorScheme {
                foreground: Some(ColorWrapper(Color::Green)),
                ..Default::default()
            },
            tip: ColorScheme {
                foreground: Some(ColorWrapper(Color::Cyan)),
                ..Default::default()
            },
            link: ColorScheme {
                foreground: Some(ColorWrapper(Color::Blue)),
                underline: true,
                ..Default::default()
            },
            severity_high: ColorScheme {
                foreground: Some(ColorWrapper(Color::Red)),
                bold: true,
                ..Default::default()
            },
            severity_medium: ColorScheme {
                foreground: Some(ColorWrapper(Color::Yellow)),
                bold: true,
                ..Default::default()
            },
            severity_low: ColorScheme {
                foreground: Some(ColorWrapper(Color::Green)),
                bold: true,
                ..Default::default()
            },
        }
    }
}

impl Theme {
    /// No colors at all, only bold for headings.
    pub fn monochrome() -> Self {
        let plain = ColorScheme::default();
        let strong = ColorScheme {
            bold: true,
            ..Default::default()
        };

        Self {
            header: strong.clone(),
            label: strong.clone(),
            cause: plain.clone(),
            solution: plain.clone(),
            tip: plain.clone(),
            link: plain.clone(),
            severity_high: strong.clone(),
            severity_medium: strong,
            severity_low: plain,
        }
    }

    pub fn severity(&self, severity: Severity) -> &ColorScheme {
        match severity {
            Severity::High => &self.severity_high,
            Severity::Medium => &self.severity_medium,
            Severity::Low | Severity::Unknown => &self.severity_low,
        }
    }
}

impl ColorScheme {
    pub fn apply(&self, text: &str) -> colored::ColoredString {
        let mut colored_text: colored::ColoredString = text.into();

        if let Some(fg) = &self.foreground {
            colored_text = colored_text.color(fg.0);
        }
        if let Some(bg) = &self.background {
            colored_text = colored_text.on_color(bg.0);
        }
        if self.bold {
            colored_text = colored_text.bold();
        }
        if self.underline {
            colored_text = colored_text.underline();
        }

        colored_text
    }
}
