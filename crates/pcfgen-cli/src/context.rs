use crate::types::OutputFormat;
use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use pcfgen_runtime::{Config, SourceConfig};
use std::path::{Path, PathBuf};

/// Loaded configuration plus output settings shared by every command.
pub struct ExecutionContext {
    config_path: PathBuf,
    config: Config,
    pub format: OutputFormat,
    /// Colored plain output (stdout is a terminal)
    pub color: bool,
}

impl ExecutionContext {
    pub fn new(config_path: &Path, format: OutputFormat) -> Result<Self> {
        let config = Config::load_from(config_path)
            .with_context(|| format!("Failed to load {}", config_path.display()))?;

        Ok(Self {
            config_path: config_path.to_path_buf(),
            config,
            format,
            color: std::io::stdout().is_terminal(),
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Config with command-line overrides applied. Override paths are taken
    /// relative to the working directory, not the config file.
    pub fn config_with(
        &self,
        input: Option<PathBuf>,
        template: Option<PathBuf>,
        output_dir: Option<PathBuf>,
    ) -> Result<Config> {
        let mut config = self.config.clone();

        if let Some(input) = input {
            config.source = Some(SourceConfig::for_input(input)?);
        }
        if let Some(template) = template {
            config.template = Some(template);
        }
        if let Some(output_dir) = output_dir {
            config.output_dir = output_dir;
        }

        Ok(config)
    }
}
