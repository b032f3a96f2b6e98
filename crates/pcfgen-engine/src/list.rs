use crate::escape::escape_markup;
use pcfgen_types::ColumnKind;
use serde::{Deserialize, Serialize};

const LINE_BREAK: &str = "<br/>";

/// Attributes of the `<ul>`/`<li>` wrapper used for multi-entry list cells.
///
/// Defaults match the profile stylesheet of the existing site, including its
/// `dm-profile-acitivity` item class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListMarkup {
    pub class: String,
    pub style: String,
    pub item_class: String,
}

impl Default for ListMarkup {
    fn default() -> Self {
        Self {
            class: "dm-profile-activities".to_string(),
            style: "font-family:proxima-nova, Helvetica, Arial, sans-serif;\
                    text-align:left;text-indent:-0.5in;list-style-type:none;\
                    margin-left:0in;padding-left:0.5in"
                .to_string(),
            item_class: "dm-profile-acitivity".to_string(),
        }
    }
}

impl ListMarkup {
    /// Bare `<ul><li>` without attributes.
    pub fn bare() -> Self {
        Self {
            class: String::new(),
            style: String::new(),
            item_class: String::new(),
        }
    }

    pub fn unordered_list(&self, items: &[String]) -> String {
        let mut html = String::from("<ul");
        push_attribute(&mut html, "class", &self.class);
        push_attribute(&mut html, "style", &self.style);
        html.push('>');

        for item in items {
            html.push_str("<li");
            push_attribute(&mut html, "class", &self.item_class);
            html.push('>');
            html.push_str(item);
            html.push_str("</li>");
        }

        html.push_str("</ul>");
        html
    }
}

fn push_attribute(html: &mut String, name: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    html.push(' ');
    html.push_str(name);
    html.push_str("='");
    html.push_str(&value.replace('\'', "&apos;"));
    html.push('\'');
}

/// Split a cell into trimmed, non-empty lines.
///
/// Literal `\n`/`\r` escape sequences (cells stored as `Alice\nBob`), CRLF and
/// lone CR all count as line breaks.
pub fn split_lines(text: &str) -> Vec<String> {
    let normalized = text
        .replace("\\r\\n", "\n")
        .replace("\\n", "\n")
        .replace("\\r", "\n")
        .replace("\r\n", "\n")
        .replace('\r', "\n");

    normalized
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Escape each line for markup and join with `<br/>`.
pub fn line_break_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| escape_markup(item).into_owned())
        .collect::<Vec<_>>()
        .join(LINE_BREAK)
}

/// Render a list-shaped cell for `kind` (list, line-list or email).
pub fn render_list(text: &str, kind: ColumnKind, markup: &ListMarkup) -> String {
    let lines = split_lines(text);

    match lines.as_slice() {
        [] => String::new(),
        // Only the first address is used; the rest are dropped
        [first, ..] if kind == ColumnKind::Email => first.clone(),
        [only] => only.clone(),
        _ if kind == ColumnKind::LineList => line_break_list(&lines),
        _ => markup.unordered_list(&lines),
    }
}
