//! Indentation and line-ending settings handed to the engine

use serde::{Deserialize, Serialize};

/// Indentation style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndentStyle {
    Spaces(usize),
    Tabs,
}

impl Default for IndentStyle {
    fn default() -> Self {
        IndentStyle::Spaces(4)
    }
}

impl IndentStyle {
    /// The literal string for one indentation level
    pub fn as_string(&self) -> String {
        match self {
            IndentStyle::Spaces(width) => " ".repeat(*width),
            IndentStyle::Tabs => "\t".to_string(),
        }
    }

    /// Parse an indent string as the engine's config files carry it
    pub fn from_config_str(value: &str) -> Self {
        if value == "\t" {
            IndentStyle::Tabs
        } else {
            let width = value.chars().filter(|c| *c == ' ').count();
            IndentStyle::Spaces(if width > 0 { width } else { 4 })
        }
    }
}

/// Line-ending style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    pub fn from_config_str(value: &str) -> Self {
        if value.contains("\r\n") {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }
}
