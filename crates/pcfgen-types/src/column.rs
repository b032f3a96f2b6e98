use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identity columns used for file names when none are configured.
pub const DEFAULT_FILENAME_COLUMNS: [&str; 2] = ["First Name", "Last Name"];

/// Formatting policy of a column.
///
/// Kinds are assigned by configuration, never inferred from cell contents.
/// Columns that are not configured are [`ColumnKind::Plain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnKind {
    /// Ampersand-escaped text, sanitized only when it contains markup
    #[default]
    #[serde(alias = "plain-text")]
    Plain,

    /// Always passed through the HTML sanitizer
    RichText,

    /// Integer-like identifiers (zip codes, mail codes) that may arrive as floats
    #[serde(alias = "numeric-identifier")]
    Numeric,

    /// Numeric identifier rendered as `DDD-DDD-DDDD` when it has ten digits
    #[serde(alias = "phone-number")]
    Phone,

    /// Newline-separated entries rendered as an unordered list
    List,

    /// Newline-separated entries escaped per line and joined with `<br/>`
    LineList,

    /// List-shaped column of which only the first entry is kept
    Email,

    /// Identity column feeding the output file name; formats like plain text
    FilenameSource,
}

impl ColumnKind {
    /// Numeric normalization applies (integer truncation).
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnKind::Numeric | ColumnKind::Phone)
    }

    /// Value is split into lines before rendering.
    pub fn is_list(self) -> bool {
        matches!(
            self,
            ColumnKind::List | ColumnKind::LineList | ColumnKind::Email
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColumnKind::Plain => "plain",
            ColumnKind::RichText => "rich-text",
            ColumnKind::Numeric => "numeric",
            ColumnKind::Phone => "phone",
            ColumnKind::List => "list",
            ColumnKind::LineList => "line-list",
            ColumnKind::Email => "email",
            ColumnKind::FilenameSource => "filename-source",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One configured column: `{ name = "...", kind = "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    #[serde(default)]
    pub kind: ColumnKind,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Column name → kind lookup built from the configured specs.
///
/// Keeps configuration order so that identity columns resolve predictably.
#[derive(Debug, Clone, Default)]
pub struct ColumnKinds {
    specs: Vec<ColumnSpec>,
    index: HashMap<String, usize>,
}

impl ColumnKinds {
    pub fn new(specs: Vec<ColumnSpec>) -> Result<Self> {
        let mut index = HashMap::with_capacity(specs.len());

        for (i, spec) in specs.iter().enumerate() {
            if spec.name.trim().is_empty() {
                return Err(Error::InvalidColumn(format!(
                    "column #{} has a blank name",
                    i + 1
                )));
            }
            if index.insert(spec.name.clone(), i).is_some() {
                return Err(Error::DuplicateColumn(spec.name.clone()));
            }
        }

        Ok(Self { specs, index })
    }

    pub fn kind_of(&self, column: &str) -> ColumnKind {
        self.index
            .get(column)
            .map(|&i| self.specs[i].kind)
            .unwrap_or_default()
    }

    pub fn specs(&self) -> &[ColumnSpec] {
        &self.specs
    }

    pub fn is_configured(&self, column: &str) -> bool {
        self.index.contains_key(column)
    }

    /// Identity columns in configuration order, falling back to
    /// [`DEFAULT_FILENAME_COLUMNS`] when no column is a filename source.
    pub fn filename_sources(&self) -> Vec<&str> {
        let sources: Vec<&str> = self
            .specs
            .iter()
            .filter(|spec| spec.kind == ColumnKind::FilenameSource)
            .map(|spec| spec.name.as_str())
            .collect();

        if sources.is_empty() {
            DEFAULT_FILENAME_COLUMNS.to_vec()
        } else {
            sources
        }
    }
}
