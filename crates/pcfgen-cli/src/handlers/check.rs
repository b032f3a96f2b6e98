use crate::context::ExecutionContext;
use crate::types::OutputFormat;
use crate::views::{self, Palette};
use anyhow::Result;
use pcfgen_runtime::{Generator, load_sheet, read_template};
use std::path::PathBuf;

pub fn handle(
    ctx: &ExecutionContext,
    input: Option<PathBuf>,
    template: Option<PathBuf>,
) -> Result<()> {
    let config = ctx.config_with(input, template, None)?;
    let template = read_template(config.template_path()?)?;
    let source = config.source()?;
    let sheet = load_sheet(source)?;

    let report = Generator::from_config(&config)?.check(&template, &sheet);

    match ctx.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Plain => views::check::print_report(
            &report,
            &views::describe_source(source),
            Palette::new(ctx.color),
        ),
    }

    if !report.is_clean() {
        anyhow::bail!(
            "{} placeholder(s) would be removed from the output",
            report.unresolved.len()
        );
    }
    Ok(())
}
