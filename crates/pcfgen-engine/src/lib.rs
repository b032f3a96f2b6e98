// Engine module - pure text transforms (formatting, sanitizing, naming, rendering)
// This layer sits between raw rows (types) and the batch driver (runtime); it does no I/O.

pub mod escape;
pub mod filename;
pub mod format;
pub mod list;
pub mod numeric;
pub mod sanitize;
pub mod template;

pub use filename::{FileNamer, candidate_name};
pub use format::FieldFormatter;
pub use list::ListMarkup;
pub use sanitize::{SanitizeError, SanitizePolicy, sanitize};
pub use template::{TemplateRenderer, placeholder_token, placeholders, strip_placeholders};

use pcfgen_types::{ColumnKind, RawValue};

// Façade API - stable entry points for the runtime layer

/// Format one raw cell with the default sanitizer policy and list markup.
pub fn format(value: &RawValue, kind: ColumnKind) -> String {
    FieldFormatter::default().format(value, kind)
}
