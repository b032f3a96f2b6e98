use super::{Palette, token};
use pcfgen_runtime::CheckReport;

pub fn print_report(report: &CheckReport, source: &str, palette: Palette) {
    println!("Rows: {} ({})", report.rows, source);
    println!("Placeholders: {}", report.placeholders.len());

    if !report.kept.is_empty() {
        println!();
        println!("Kept verbatim:");
        for name in &report.kept {
            println!("  {}", token(name));
        }
    }

    if !report.missing_columns.is_empty() {
        println!();
        println!("{} configured columns not in the sheet:", palette.warn("Warning:"));
        for name in &report.missing_columns {
            println!("  {}", name);
        }
    }

    println!();
    if report.is_clean() {
        println!("Status: {}", palette.ok("✓ Every placeholder is filled"));
    } else {
        println!("Status: {}", palette.error("✗ Unfilled placeholders"));
        for name in &report.unresolved {
            println!("  {}", token(name));
        }
    }
}
