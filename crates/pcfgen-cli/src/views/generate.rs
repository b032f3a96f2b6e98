use super::{Palette, token};
use pcfgen_runtime::BatchReport;

pub fn print_report(report: &BatchReport, source: &str, palette: Palette) {
    let count = report.files.len();
    let noun = if count == 1 { "file" } else { "files" };

    if report.written {
        println!(
            "{} {} {} in {}",
            palette.ok("Generated"),
            count,
            noun,
            report.output_dir.display()
        );
    } else {
        println!(
            "{} {} {} would be written to {}",
            palette.warn("Dry run:"),
            count,
            noun,
            report.output_dir.display()
        );
    }
    println!("{}", palette.dim(format!("Rows from {}", source)));

    for file in &report.files {
        println!("  {}", file.path.display());
    }

    if !report.unresolved.is_empty() {
        println!();
        println!(
            "{} placeholders with no matching column were removed:",
            palette.warn("Warning:")
        );
        for name in &report.unresolved {
            println!("  {}", token(name));
        }
    }
}
