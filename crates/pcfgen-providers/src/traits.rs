use crate::Result;
use pcfgen_types::Sheet;

/// Tabular input for one batch.
///
/// Responsibilities:
/// - Report column titles in sheet order
/// - Deliver every row as column name → raw value
///
/// Loading failures are fatal for the batch; nothing is rendered from a
/// partially loaded source.
pub trait RowSource {
    /// Source kind (e.g., "csv", "sheet-json", "smartsheet")
    fn id(&self) -> &'static str;

    /// Human-readable location for logs (path, sheet id)
    fn describe(&self) -> String;

    /// Load the whole sheet
    fn load(&self) -> Result<Sheet>;
}
