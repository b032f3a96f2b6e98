use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pcfgen")]
#[command(about = "Generate .pcf pages from spreadsheet rows and a template", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "pcfgen.toml", global = true)]
    pub config: PathBuf,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render one file per row
    Generate {
        #[arg(long, help = "Row file (.csv or Smartsheet .json); replaces [source]")]
        input: Option<PathBuf>,

        #[arg(long)]
        template: Option<PathBuf>,

        #[arg(long)]
        output_dir: Option<PathBuf>,

        #[arg(
            long = "keep",
            value_name = "NAME",
            help = "Leave |||NAME||| in the output when no column fills it (repeatable)"
        )]
        keep: Vec<String>,

        #[arg(long, help = "Render without writing files")]
        dry_run: bool,
    },

    /// Report placeholders no column fills
    Check {
        #[arg(long)]
        input: Option<PathBuf>,

        #[arg(long)]
        template: Option<PathBuf>,
    },

    /// List the sheet's columns and their formatting kinds
    Columns {
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Write a starter config file
    Init {
        #[arg(long, help = "Overwrite an existing config")]
        force: bool,
    },
}
