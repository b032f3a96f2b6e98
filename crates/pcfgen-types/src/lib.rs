pub mod column;
pub mod error;
pub mod record;
pub mod sheet;

pub use column::*;
pub use error::{Error, Result};
pub use record::*;
pub use sheet::*;
