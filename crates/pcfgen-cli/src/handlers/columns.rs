use crate::context::ExecutionContext;
use crate::types::OutputFormat;
use crate::views::{self, Palette, columns::ColumnRow};
use anyhow::Result;
use pcfgen_runtime::load_sheet;
use std::path::PathBuf;

pub fn handle(ctx: &ExecutionContext, input: Option<PathBuf>) -> Result<()> {
    let config = ctx.config_with(input, None, None)?;
    let kinds = config.column_kinds()?;
    let sheet = load_sheet(config.source()?)?;

    let columns: Vec<ColumnRow> = sheet
        .columns
        .iter()
        .map(|name| ColumnRow {
            name: name.clone(),
            kind: kinds.kind_of(name).to_string(),
            configured: kinds.is_configured(name),
        })
        .collect();
    let missing: Vec<String> = kinds
        .specs()
        .iter()
        .filter(|spec| !sheet.has_column(&spec.name))
        .map(|spec| spec.name.clone())
        .collect();

    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "columns": columns,
                "missing": missing,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            views::columns::print_columns(&columns, &missing, Palette::new(ctx.color))
        }
    }

    Ok(())
}
