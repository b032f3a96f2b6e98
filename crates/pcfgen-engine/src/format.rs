use crate::escape::escape_ampersands;
use crate::list::{ListMarkup, render_list};
use crate::numeric::{format_phone, normalize_numeric};
use crate::sanitize::{SanitizePolicy, sanitize};
use pcfgen_types::{ColumnKind, ColumnKinds, RawValue, Row};
use std::collections::HashMap;

/// Turns raw cells into text that can be spliced into a template.
///
/// Pipeline, in order: ampersand escaping, numeric normalization (numeric and
/// phone kinds), HTML sanitizing (rich text, or any value containing `<`/`>`),
/// list rendering (list, line-list and email kinds). Never fails: a value the
/// sanitizer cannot parse is kept in its ampersand-escaped form.
#[derive(Debug, Clone, Default)]
pub struct FieldFormatter {
    policy: SanitizePolicy,
    markup: ListMarkup,
}

impl FieldFormatter {
    pub fn new(policy: SanitizePolicy, markup: ListMarkup) -> Self {
        Self { policy, markup }
    }

    pub fn policy(&self) -> SanitizePolicy {
        self.policy
    }

    pub fn format(&self, value: &RawValue, kind: ColumnKind) -> String {
        match value.as_text() {
            Some(text) => self.format_text(&text, kind),
            None => String::new(),
        }
    }

    fn format_text(&self, raw: &str, kind: ColumnKind) -> String {
        let mut text = escape_ampersands(raw).into_owned();

        if kind.is_numeric() {
            text = normalize_numeric(&text);
            if kind == ColumnKind::Phone {
                text = format_phone(&text);
            }
        }

        if kind == ColumnKind::RichText || text.contains(['<', '>']) {
            text = self.sanitize_or_keep(text);
        }

        if kind.is_list() {
            text = render_list(&text, kind, &self.markup);
        }

        text
    }

    fn sanitize_or_keep(&self, text: String) -> String {
        match sanitize(&text, self.policy) {
            Ok(clean) => {
                log::debug!("Cleaned html content: {}", clean);
                clean
            }
            Err(err) => {
                log::warn!("Keeping unsanitized text: {}", err);
                text
            }
        }
    }

    /// Format every cell of `row`, keyed by column name.
    pub fn format_row(&self, row: &Row, kinds: &ColumnKinds) -> HashMap<String, String> {
        row.iter()
            .map(|(column, value)| {
                (
                    column.to_string(),
                    self.format(value, kinds.kind_of(column)),
                )
            })
            .collect()
    }
}
