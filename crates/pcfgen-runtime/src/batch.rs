//! Batch driver: one template, one sheet, one file per row.
//!
//! File names for the whole sheet are assigned up front, in row order, so a
//! row's ` (n)` suffix depends only on the rows before it. Rows are then
//! formatted, rendered and handed to the sink one at a time.

use crate::config::Config;
use crate::sink::{OutputLayout, OutputSink};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use pcfgen_engine::{FieldFormatter, FileNamer, TemplateRenderer, placeholders};
use pcfgen_types::{ColumnKinds, OutputRecord, Sheet};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Read the template; a missing template aborts the batch.
pub fn read_template(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::Template {
        path: path.to_path_buf(),
        source,
    })
}

/// Outcome of [`Generator::run`].
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub generated_at: DateTime<Utc>,
    pub output_dir: PathBuf,
    /// False for dry runs
    pub written: bool,
    pub files: Vec<OutputRecord>,
    /// Placeholders stripped from every file because no column fills them
    pub unresolved: Vec<String>,
}

/// Outcome of [`Generator::check`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub rows: usize,
    /// Distinct placeholders in the template, in order
    pub placeholders: Vec<String>,
    /// Placeholders no column fills and the keep list does not protect
    pub unresolved: Vec<String>,
    /// Placeholders no column fills that survive through the keep list
    pub kept: Vec<String>,
    /// Configured columns the sheet does not have
    pub missing_columns: Vec<String>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.unresolved.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Generator {
    kinds: ColumnKinds,
    formatter: FieldFormatter,
    layout: OutputLayout,
    keep: Vec<String>,
}

impl Generator {
    pub fn new(kinds: ColumnKinds, formatter: FieldFormatter, layout: OutputLayout) -> Self {
        Self {
            kinds,
            formatter,
            layout,
            keep: Vec::new(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let layout = OutputLayout::new(&config.output_dir, &config.extension);
        Ok(Self::new(config.column_kinds()?, config.formatter(), layout)
            .keep(config.keep_placeholders.iter().cloned()))
    }

    /// Placeholder names to preserve verbatim when no column fills them.
    pub fn keep<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if !self.keep.contains(&name) {
                self.keep.push(name);
            }
        }
        self
    }

    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    fn renderer(&self, sheet: &Sheet) -> TemplateRenderer {
        TemplateRenderer::new(sheet.columns.iter().cloned()).keep(self.keep.iter().cloned())
    }

    /// De-duplicated file stems for every row, in row order.
    pub fn file_names(&self, sheet: &Sheet) -> Vec<String> {
        let sources = self.kinds.filename_sources();
        let first_column = sources.first().copied().unwrap_or_default();
        let last_column = sources.get(1).copied().unwrap_or_default();

        let mut namer = FileNamer::new();
        sheet
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                namer.build(&row.text_of(first_column), &row.text_of(last_column), index)
            })
            .collect()
    }

    /// Render every row and pass it to `sink`.
    ///
    /// Fails only when the sink fails; formatting problems degrade per value.
    pub fn run(
        &self,
        template: &str,
        sheet: &Sheet,
        sink: &mut dyn OutputSink,
    ) -> Result<BatchReport> {
        let renderer = self.renderer(sheet);
        let unresolved = renderer.unresolved(template);
        for name in &unresolved {
            log::warn!("Placeholder |||{}||| matches no column and will be removed", name);
        }

        let names = self.file_names(sheet);
        sink.prepare()?;

        let mut files = Vec::with_capacity(sheet.len());
        for ((row_index, row), file_name) in sheet.rows.iter().enumerate().zip(names) {
            let values = self.formatter.format_row(row, &self.kinds);
            let mut record = OutputRecord {
                row_index,
                path: self.layout.path_for(&file_name),
                file_name,
                content: renderer.render(template, &values),
            };
            sink.write(&record)?;

            record.content = String::new();
            files.push(record);
        }

        Ok(BatchReport {
            generated_at: Utc::now(),
            output_dir: self.layout.dir.clone(),
            written: sink.persists(),
            files,
            unresolved,
        })
    }

    /// Compare the template's placeholders with the sheet's columns.
    pub fn check(&self, template: &str, sheet: &Sheet) -> CheckReport {
        let renderer = self.renderer(sheet);
        let placeholders = placeholders(template);
        let unresolved = renderer.unresolved(template);
        let kept = placeholders
            .iter()
            .filter(|name| !sheet.has_column(name) && !unresolved.contains(name))
            .cloned()
            .collect();
        let missing_columns = self
            .kinds
            .specs()
            .iter()
            .filter(|spec| !sheet.has_column(&spec.name))
            .map(|spec| spec.name.clone())
            .collect();

        CheckReport {
            rows: sheet.len(),
            placeholders,
            unresolved,
            kept,
            missing_columns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{DirectorySink, MemorySink};
    use pcfgen_engine::{ListMarkup, SanitizePolicy};
    use pcfgen_types::{ColumnKind, ColumnSpec, RawValue};
    use tempfile::TempDir;

    fn sheet(columns: &[&str], rows: &[&[&str]]) -> Sheet {
        let mut sheet = Sheet::new(columns.iter().map(|c| c.to_string()).collect());
        for row in rows {
            sheet.push_values(row.iter().map(|v| RawValue::from(*v)).collect());
        }
        sheet
    }

    fn generator(specs: Vec<ColumnSpec>) -> Generator {
        Generator::new(
            ColumnKinds::new(specs).unwrap(),
            FieldFormatter::new(SanitizePolicy::default(), ListMarkup::bare()),
            OutputLayout::new("out", "pcf"),
        )
    }

    #[test]
    fn test_duplicate_names_numbered_in_row_order() {
        let rows = sheet(
            &["First Name", "Last Name"],
            &[&["Jane", "Doe"], &["Jane", "Doe"], &["", ""], &["Jane", "Doe"]],
        );
        let names = generator(Vec::new()).file_names(&rows);
        assert_eq!(names, vec!["jane-doe", "jane-doe (1)", "row-3", "jane-doe (2)"]);
    }

    #[test]
    fn test_configured_filename_sources() {
        let rows = sheet(&["Given", "Family", "First Name"], &[&["Ada", "Lovelace", "X"]]);
        let names = generator(vec![
            ColumnSpec::new("Given", ColumnKind::FilenameSource),
            ColumnSpec::new("Family", ColumnKind::FilenameSource),
        ])
        .file_names(&rows);
        assert_eq!(names, vec!["ada-lovelace"]);
    }

    #[test]
    fn test_run_formats_and_renders_each_row() -> Result<()> {
        let rows = sheet(
            &["First Name", "Last Name", "Phone", "Education", "Email"],
            &[
                &["Jane", "Doe", "3125551234", "PhD\nMS", "jane@x.edu\nold@x.edu"],
                &["R&D", "Lab", "", "", ""],
            ],
        );
        let generator = generator(vec![
            ColumnSpec::new("Phone", ColumnKind::Phone),
            ColumnSpec::new("Education", ColumnKind::List),
            ColumnSpec::new("Email", ColumnKind::Email),
        ]);
        let template = "|||First Name||| |||Last Name|||;|||Phone|||;|||Education|||;|||Email|||;|||Notes|||";

        let mut sink = MemorySink::new();
        let report = generator.run(template, &rows, &mut sink)?;

        assert_eq!(
            sink.records[0].content,
            "Jane Doe;312-555-1234;<ul><li>PhD</li><li>MS</li></ul>;jane@x.edu;"
        );
        assert_eq!(sink.records[1].content, "R&amp;D Lab;;;;");
        assert_eq!(sink.records[1].path, PathBuf::from("out/r&d-lab.pcf"));

        assert_eq!(report.unresolved, vec!["Notes"]);
        assert_eq!(report.files.len(), 2);
        assert!(report.files.iter().all(|f| f.content.is_empty()));
        assert!(!report.written);
        Ok(())
    }

    #[test]
    fn test_run_writes_files() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let out = temp_dir.path().join("projects/sesh");
        let generator = Generator::new(
            ColumnKinds::default(),
            FieldFormatter::default(),
            OutputLayout::new(&out, "pcf"),
        );
        let rows = sheet(
            &["First Name", "Last Name"],
            &[&["Jane", "Doe"], &["Jane", "Doe"], &["Jane", "Doe"]],
        );

        let report = generator.run("<h1>|||First Name|||</h1>", &rows, &mut DirectorySink::new(&out))?;

        assert!(report.written);
        for name in ["jane-doe", "jane-doe (1)", "jane-doe (2)"] {
            let content = std::fs::read_to_string(out.join(format!("{}.pcf", name)))?;
            assert_eq!(content, "<h1>Jane</h1>");
        }
        Ok(())
    }

    #[test]
    fn test_keep_list_preserves_tokens() -> Result<()> {
        let rows = sheet(&["Name"], &[&["Jane"]]);
        let generator = generator(Vec::new()).keep(["Year"]);

        let mut sink = MemorySink::new();
        let report = generator.run("|||Name||| |||Year|||", &rows, &mut sink)?;

        assert_eq!(sink.records[0].content, "Jane |||Year|||");
        assert!(report.unresolved.is_empty());
        Ok(())
    }

    #[test]
    fn test_check_report() {
        let rows = sheet(&["First Name", "Bio"], &[&["Jane", ""]]);
        let generator = generator(vec![
            ColumnSpec::new("Bio", ColumnKind::RichText),
            ColumnSpec::new("Zip Code", ColumnKind::Numeric),
        ])
        .keep(["Year"]);

        let report = generator.check("|||First Name||| |||Year||| |||Nmae||| |||Bio|||", &rows);

        assert_eq!(report.rows, 1);
        assert_eq!(report.placeholders, vec!["First Name", "Year", "Nmae", "Bio"]);
        assert_eq!(report.unresolved, vec!["Nmae"]);
        assert_eq!(report.kept, vec!["Year"]);
        assert_eq!(report.missing_columns, vec!["Zip Code"]);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_missing_template_is_fatal() {
        let result = read_template(Path::new("/definitely/not/a/template.txt"));
        assert!(matches!(result, Err(Error::Template { .. })));
    }
}
