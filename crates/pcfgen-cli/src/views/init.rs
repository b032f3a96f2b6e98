use super::Palette;
use pcfgen_runtime::SourceMetadata;
use std::path::Path;

pub fn print_created(config_path: &Path, sources: &[SourceMetadata], palette: Palette) {
    println!("{} {}", palette.ok("Created"), config_path.display());
    println!();
    println!("Next steps:");
    println!("  1. Point `template` and [source] at your template and sheet export");
    println!("  2. Declare column kinds under [[columns]]");
    println!("  3. Run `pcfgen check`, then `pcfgen generate`");
    println!();
    println!("Source kinds:");
    let width = sources.iter().map(|s| s.name.len()).max().unwrap_or(0);
    for source in sources {
        println!(
            "  {:<width$}  {}",
            source.name,
            palette.dim(source.description),
            width = width
        );
    }
}
