use crate::schema::SheetPayload;
use crate::{Result, RowSource};
use pcfgen_types::Sheet;
use std::path::{Path, PathBuf};

/// Smartsheet sheet payload saved to disk.
#[derive(Debug, Clone)]
pub struct SheetJsonSource {
    path: PathBuf,
}

impl SheetJsonSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RowSource for SheetJsonSource {
    fn id(&self) -> &'static str {
        "sheet-json"
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Sheet> {
        let content = std::fs::read_to_string(&self.path)?;
        let payload: SheetPayload = serde_json::from_str(&content)?;
        Ok(payload.into_sheet())
    }
}
