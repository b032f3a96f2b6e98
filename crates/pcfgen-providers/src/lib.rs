// Error types
pub mod error;

// Trait-based architecture (public API)
pub mod traits;

// Source implementations
pub mod csv_file;
pub mod sheet_json;
pub mod smartsheet;

// Smartsheet payload schema (shared by snapshot and API sources)
pub mod schema;

// Source registry
pub mod registry;

pub use csv_file::{CsvSource, read_csv};
pub use error::{Error, Result};
pub use registry::{SourceMetadata, get_all_sources, source_kind_for_path};
pub use sheet_json::SheetJsonSource;
pub use smartsheet::SmartsheetSource;
pub use traits::RowSource;
