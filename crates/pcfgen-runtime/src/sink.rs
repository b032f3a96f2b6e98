use crate::{Error, Result};
use pcfgen_types::OutputRecord;
use std::path::{Path, PathBuf};

/// Output directory plus extension: `{dir}/{name}.{extension}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub dir: PathBuf,
    pub extension: String,
}

impl OutputLayout {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    pub fn path_for(&self, file_name: &str) -> PathBuf {
        let extension = self.extension.trim_start_matches('.');
        if extension.is_empty() {
            self.dir.join(file_name)
        } else {
            self.dir.join(format!("{}.{}", file_name, extension))
        }
    }
}

/// Destination for rendered records.
pub trait OutputSink {
    /// Called once before the first record.
    fn prepare(&mut self) -> Result<()> {
        Ok(())
    }

    fn write(&mut self, record: &OutputRecord) -> Result<()>;

    /// Whether records actually reach disk.
    fn persists(&self) -> bool {
        true
    }
}

/// Writes each record to its path, creating the output directory first.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl OutputSink for DirectorySink {
    fn prepare(&mut self) -> Result<()> {
        std::fs::create_dir_all(&self.dir).map_err(|source| Error::Output {
            path: self.dir.clone(),
            source,
        })
    }

    fn write(&mut self, record: &OutputRecord) -> Result<()> {
        std::fs::write(&record.path, &record.content).map_err(|source| Error::Output {
            path: record.path.clone(),
            source,
        })?;
        log::info!("Created {}", record.path.display());
        Ok(())
    }
}

/// Keeps records in memory (dry runs, tests).
#[derive(Debug, Default)]
pub struct MemorySink {
    pub records: Vec<OutputRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputSink for MemorySink {
    fn write(&mut self, record: &OutputRecord) -> Result<()> {
        log::debug!("Rendered {} (not written)", record.path.display());
        self.records.push(record.clone());
        Ok(())
    }

    fn persists(&self) -> bool {
        false
    }
}
