use crate::types::OutputFormat;
use crate::views::{self, Palette};
use anyhow::Result;
use is_terminal::IsTerminal;
use pcfgen_runtime::Config;
use std::path::Path;

pub fn handle(config_path: &Path, force: bool, format: OutputFormat) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    Config::starter().save_to(config_path)?;
    log::info!("Wrote starter config to {}", config_path.display());

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "config_path": config_path, "created": true });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => views::init::print_created(
            config_path,
            pcfgen_runtime::get_all_sources(),
            Palette::new(std::io::stdout().is_terminal()),
        ),
    }

    Ok(())
}
