//! Fixtures for sample data generation and placement.
//!
//! Inline fixtures cover the common profile layout; `SampleFiles` gives
//! access to the sample sheets shipped with the runtime crate's tests.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Profile template using most column kinds plus one unknown placeholder.
pub const PROFILE_TEMPLATE: &str = "\
<title>|||First Name||| |||Last Name|||</title>
<h1>|||First Name||| |||Last Name|||</h1>
<div class=\"bio\">|||Biography|||</div>
|||Education|||
<p>|||Phone|||</p>
<!-- |||Department||| -->
";

/// Three rows for the same person, so names need de-duplication.
pub const DUPLICATE_NAMES_CSV: &str = "\
First Name,Last Name,Biography,Education,Phone
Jane,Doe,<p>First & only</p><!-- note -->,\"PhD\nMS\",3125551234
Jane,Doe,,,
Jane,Doe,,,12345
";

pub const PROFILE_CONFIG: &str = r#"
template = "template.txt"
output_dir = "out"

[source]
kind = "csv"
path = "rows.csv"

[[columns]]
name = "Biography"
kind = "rich-text"

[[columns]]
name = "Education"
kind = "list"

[[columns]]
name = "Phone"
kind = "phone"
"#;

/// Sample file manager for test data.
pub struct SampleFiles {
    samples_dir: PathBuf,
}

impl Default for SampleFiles {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleFiles {
    /// Create a new sample file manager.
    ///
    /// Assumes samples are in `crates/pcfgen-runtime/tests/samples/`.
    pub fn new() -> Self {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let samples_dir = manifest_dir
            .parent()
            .map(|crates| crates.join("pcfgen-runtime/tests/samples"))
            .unwrap_or_else(|| manifest_dir.join("samples"));

        Self { samples_dir }
    }

    pub fn path(&self, sample_name: &str) -> PathBuf {
        self.samples_dir.join(sample_name)
    }

    /// Copy a sample file to a destination.
    pub fn copy_to(&self, sample_name: &str, dest: &Path) -> Result<()> {
        let source = self.path(sample_name);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&source, dest)
            .with_context(|| format!("Failed to copy sample {}", source.display()))?;
        Ok(())
    }
}
