use serde::Serialize;
use std::path::PathBuf;

/// One rendered output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    /// Zero-based position of the source row
    pub row_index: usize,
    /// De-duplicated file stem (no extension)
    pub file_name: String,
    pub path: PathBuf,
    #[serde(skip)]
    pub content: String,
}
