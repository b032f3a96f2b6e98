use crate::{Result, RowSource};
use pcfgen_types::{RawValue, Sheet};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Spreadsheet exported as CSV.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RowSource for CsvSource {
    fn id(&self) -> &'static str {
        "csv"
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Sheet> {
        let file = std::fs::File::open(&self.path)?;
        read_csv(file)
    }
}

/// Parse CSV text: the first record is the header, empty cells are missing
/// values, short records are padded.
pub fn read_csv<R: Read>(reader: R) -> Result<Sheet> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, title)| {
            if i == 0 {
                title.trim_start_matches('\u{feff}').to_string()
            } else {
                title.to_string()
            }
        })
        .collect();

    let mut sheet = Sheet::new(columns);
    for record in reader.records() {
        let record = record?;
        let values = record
            .iter()
            .map(|cell| {
                if cell.is_empty() {
                    RawValue::Empty
                } else {
                    RawValue::text(cell)
                }
            })
            .collect();
        sheet.push_values(values);
    }

    Ok(sheet)
}
