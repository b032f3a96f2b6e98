//! Entity-aware escaping for text embedded in markup.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Named (`&amp;`, `&frac12;`) or numeric (`&#38;`, `&#x26;`) character reference
static ENTITY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^&(?:[A-Za-z][A-Za-z0-9]*|#[0-9]+|#[xX][0-9A-Fa-f]+);").unwrap()
});

fn starts_entity(text: &str) -> bool {
    ENTITY_REGEX.is_match(text)
}

/// Escape every `&` that does not already start a character reference.
pub fn escape_ampersands(text: &str) -> Cow<'_, str> {
    escape_with(text, |_| None)
}

/// Escape markup special characters (`& < > " '`), leaving existing
/// character references intact.
pub fn escape_markup(text: &str) -> Cow<'_, str> {
    escape_with(text, |ch| match ch {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&apos;"),
        _ => None,
    })
}

fn escape_with(text: &str, replace: impl Fn(char) -> Option<&'static str>) -> Cow<'_, str> {
    let needs_escape = text
        .char_indices()
        .any(|(i, ch)| (ch == '&' && !starts_entity(&text[i..])) || replace(ch).is_some());
    if !needs_escape {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for (i, ch) in text.char_indices() {
        if ch == '&' {
            if starts_entity(&text[i..]) {
                out.push('&');
            } else {
                out.push_str("&amp;");
            }
        } else if let Some(entity) = replace(ch) {
            out.push_str(entity);
        } else {
            out.push(ch);
        }
    }
    Cow::Owned(out)
}
