use crate::Result;
use crate::config::SourceConfig;
use pcfgen_providers::{CsvSource, RowSource, SheetJsonSource, SmartsheetSource};
use pcfgen_types::Sheet;

/// Build the row source described by `config`.
///
/// For Smartsheet the token is read from the environment here, so a missing
/// token fails before anything is fetched.
pub fn open_source(config: &SourceConfig) -> Result<Box<dyn RowSource>> {
    let source: Box<dyn RowSource> = match config {
        SourceConfig::Csv { path } => Box::new(CsvSource::new(path)),
        SourceConfig::SheetJson { path } => Box::new(SheetJsonSource::new(path)),
        SourceConfig::Smartsheet {
            sheet_id,
            token_env,
            api_base,
        } => {
            let mut source = SmartsheetSource::from_env(sheet_id.as_str(), token_env)?;
            if let Some(api_base) = api_base {
                source = source.with_api_base(api_base.as_str());
            }
            Box::new(source)
        }
    };
    Ok(source)
}

/// Open and load in one step.
pub fn load_sheet(config: &SourceConfig) -> Result<Sheet> {
    let source = open_source(config)?;
    log::info!("Loading rows from {} ({})", source.describe(), source.id());
    let sheet = source.load()?;
    log::info!("Loaded {} rows, {} columns", sheet.len(), sheet.columns.len());
    Ok(sheet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use tempfile::TempDir;

    #[test]
    fn test_csv_source_loaded() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("rows.csv");
        std::fs::write(&path, "First Name,Last Name\nJane,Doe\n")?;

        let sheet = load_sheet(&SourceConfig::Csv { path })?;
        assert_eq!(sheet.len(), 1);
        Ok(())
    }

    #[test]
    fn test_missing_token_fails_before_fetch() {
        let config = SourceConfig::Smartsheet {
            sheet_id: "1".to_string(),
            token_env: "PCFGEN_RUNTIME_TEST_UNSET_TOKEN".to_string(),
            api_base: Some("http://127.0.0.1:9".to_string()),
        };
        assert!(matches!(open_source(&config), Err(Error::Provider(_))));
    }
}
