use crate::context::ExecutionContext;
use crate::types::OutputFormat;
use crate::views::{self, Palette};
use anyhow::Result;
use pcfgen_runtime::{
    BatchReport, DirectorySink, Generator, MemorySink, load_sheet, read_template,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

pub struct GenerateArgs {
    pub input: Option<PathBuf>,
    pub template: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub keep: Vec<String>,
    pub dry_run: bool,
}

#[derive(Serialize)]
struct GenerateOutput<'a> {
    source: String,
    template: &'a Path,
    #[serde(flatten)]
    report: &'a BatchReport,
}

pub fn handle(ctx: &ExecutionContext, args: GenerateArgs) -> Result<()> {
    let config = ctx.config_with(args.input, args.template, args.output_dir)?;

    // Template, rows and column config are all loaded before the first row
    let template_path = config.template_path()?;
    let template = read_template(template_path)?;
    let source = config.source()?;
    let sheet = load_sheet(source)?;
    let generator = Generator::from_config(&config)?.keep(args.keep);

    let report = if args.dry_run {
        generator.run(&template, &sheet, &mut MemorySink::new())?
    } else {
        generator.run(&template, &sheet, &mut DirectorySink::new(&config.output_dir))?
    };

    let source = views::describe_source(source);
    match ctx.format {
        OutputFormat::Json => {
            let output = GenerateOutput {
                source,
                template: template_path,
                report: &report,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            views::generate::print_report(&report, &source, Palette::new(ctx.color));
        }
    }

    Ok(())
}
