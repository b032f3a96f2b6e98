//! Plain-text output. JSON output serializes the runtime reports directly.

pub mod check;
pub mod columns;
pub mod generate;
pub mod init;

use owo_colors::{OwoColorize, Style};
use pcfgen_runtime::SourceConfig;
use std::fmt;

/// Terminal styling, disabled when stdout is not a terminal.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    color: bool,
}

impl Palette {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: impl fmt::Display, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn ok(&self, text: impl fmt::Display) -> String {
        self.paint(text, Style::new().green().bold())
    }

    pub fn warn(&self, text: impl fmt::Display) -> String {
        self.paint(text, Style::new().yellow().bold())
    }

    pub fn error(&self, text: impl fmt::Display) -> String {
        self.paint(text, Style::new().red().bold())
    }

    pub fn dim(&self, text: impl fmt::Display) -> String {
        self.paint(text, Style::new().dimmed())
    }
}

pub fn describe_source(source: &SourceConfig) -> String {
    match source {
        SourceConfig::Csv { path } | SourceConfig::SheetJson { path } => {
            format!("{} ({})", path.display(), source.kind())
        }
        SourceConfig::Smartsheet { sheet_id, .. } => format!("smartsheet sheet {}", sheet_id),
    }
}

pub fn token(name: &str) -> String {
    pcfgen_engine::placeholder_token(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_palette_without_color_is_plain() {
        let palette = Palette::new(false);
        assert_eq!(palette.ok("done"), "done");
        assert_eq!(palette.error("x"), "x");
    }

    #[test]
    fn test_palette_with_color_adds_escapes() {
        assert!(Palette::new(true).ok("done").contains("\u{1b}["));
    }

    #[test]
    fn test_describe_source() {
        let source = SourceConfig::Csv {
            path: PathBuf::from("data/rows.csv"),
        };
        assert_eq!(describe_source(&source), "data/rows.csv (csv)");
    }
}
