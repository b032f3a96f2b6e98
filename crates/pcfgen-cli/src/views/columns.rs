use super::Palette;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ColumnRow {
    pub name: String,
    pub kind: String,
    pub configured: bool,
}

pub fn print_columns(columns: &[ColumnRow], missing: &[String], palette: Palette) {
    let width = columns.iter().map(|c| c.name.chars().count()).max().unwrap_or(0);

    for column in columns {
        let kind = if column.configured {
            column.kind.clone()
        } else {
            palette.dim(&column.kind)
        };
        println!("{:<width$}  {}", column.name, kind, width = width);
    }

    if !missing.is_empty() {
        println!();
        println!("{} configured but not in the sheet:", palette.warn("Warning:"));
        for name in missing {
            println!("  {}", name);
        }
    }
}
