use crate::{Error, Result};
use pcfgen_engine::{FieldFormatter, ListMarkup, SanitizePolicy};
use pcfgen_providers::smartsheet::DEFAULT_TOKEN_ENV;
use pcfgen_types::{ColumnKind, ColumnKinds, ColumnSpec};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "pcfgen.toml";

pub const DEFAULT_EXTENSION: &str = "pcf";

pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(stripped) = path.to_str().and_then(|p| p.strip_prefix("~/"))
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    path.to_path_buf()
}

/// Tilde-expand `path`, then anchor it at `base` unless it is absolute.
pub fn resolve_path(path: &Path, base: &Path) -> PathBuf {
    let expanded = expand_tilde(path);
    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}

fn default_token_env() -> String {
    DEFAULT_TOKEN_ENV.to_string()
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

/// Where rows come from: `[source]` with a `kind` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SourceConfig {
    Csv {
        path: PathBuf,
    },
    SheetJson {
        path: PathBuf,
    },
    Smartsheet {
        sheet_id: String,
        /// Name of the environment variable holding the access token
        #[serde(default = "default_token_env")]
        token_env: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        api_base: Option<String>,
    },
}

impl SourceConfig {
    /// Pick a file source from the extension (`.csv`, `.json`).
    pub fn for_input(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        match pcfgen_providers::source_kind_for_path(&path) {
            Some("csv") => Ok(SourceConfig::Csv { path }),
            Some("sheet-json") => Ok(SourceConfig::SheetJson { path }),
            _ => Err(Error::Config(format!(
                "Cannot tell the source kind of {} (expected .csv or .json)",
                path.display()
            ))),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SourceConfig::Csv { .. } => "csv",
            SourceConfig::SheetJson { .. } => "sheet-json",
            SourceConfig::Smartsheet { .. } => "smartsheet",
        }
    }

    fn resolve_paths(&mut self, base: &Path) {
        match self {
            SourceConfig::Csv { path } | SourceConfig::SheetJson { path } => {
                *path = resolve_path(path, base);
            }
            SourceConfig::Smartsheet { .. } => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Output file extension, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Placeholder names left in the output verbatim when no column fills them
    #[serde(default)]
    pub keep_placeholders: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceConfig>,

    #[serde(default)]
    pub sanitize: SanitizePolicy,

    #[serde(default)]
    pub list: ListMarkup,

    #[serde(default)]
    pub columns: Vec<ColumnSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template: None,
            output_dir: default_output_dir(),
            extension: default_extension(),
            keep_placeholders: Vec::new(),
            source: None,
            sanitize: SanitizePolicy::default(),
            list: ListMarkup::default(),
            columns: Vec::new(),
        }
    }
}

impl Config {
    /// Load `path`; a missing file yields the defaults.
    ///
    /// Relative paths in the file are resolved against the file's directory.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        let base = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        config.resolve_paths(&base);

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Config written by `pcfgen init`: the profile page layout with its
    /// usual column kinds.
    pub fn starter() -> Self {
        let columns = [
            ("First Name", ColumnKind::FilenameSource),
            ("Last Name", ColumnKind::FilenameSource),
            ("Biography", ColumnKind::RichText),
            ("Research Interests", ColumnKind::RichText),
            ("Education", ColumnKind::List),
            ("Committee Members", ColumnKind::LineList),
            ("Email", ColumnKind::Email),
            ("Phone", ColumnKind::Phone),
            ("Zip Code", ColumnKind::Numeric),
        ]
        .into_iter()
        .map(|(name, kind)| ColumnSpec::new(name, kind))
        .collect();

        Self {
            template: Some(PathBuf::from("templates/profile.txt")),
            output_dir: default_output_dir(),
            source: Some(SourceConfig::Csv {
                path: PathBuf::from("data/profiles.csv"),
            }),
            columns,
            ..Self::default()
        }
    }

    fn resolve_paths(&mut self, base: &Path) {
        if let Some(template) = &mut self.template {
            *template = resolve_path(template, base);
        }
        self.output_dir = resolve_path(&self.output_dir, base);
        if let Some(source) = &mut self.source {
            source.resolve_paths(base);
        }
    }

    pub fn template_path(&self) -> Result<&Path> {
        self.template.as_deref().ok_or_else(|| {
            Error::Config("No template configured (set `template` or pass --template)".to_string())
        })
    }

    pub fn source(&self) -> Result<&SourceConfig> {
        self.source.as_ref().ok_or_else(|| {
            Error::Config("No row source configured (add [source] or pass --input)".to_string())
        })
    }

    pub fn column_kinds(&self) -> Result<ColumnKinds> {
        Ok(ColumnKinds::new(self.columns.clone())?)
    }

    pub fn formatter(&self) -> FieldFormatter {
        FieldFormatter::new(self.sanitize, self.list.clone())
    }
}
