pub mod batch;
pub mod config;
pub mod error;
pub mod sink;
pub mod source;

pub use batch::{BatchReport, CheckReport, Generator, read_template};
pub use config::{Config, DEFAULT_CONFIG_FILE, SourceConfig};
pub use error::{Error, Result};
pub use pcfgen_providers::{SourceMetadata, get_all_sources};
pub use sink::{DirectorySink, MemorySink, OutputLayout, OutputSink};
pub use source::{load_sheet, open_source};
