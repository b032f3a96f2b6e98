use regex::Regex;
use std::sync::LazyLock;

static NUMERIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]+)?$").unwrap());

/// Drop the fractional part of integer-like identifiers that were read as
/// floats upstream (`60601.0` → `60601`). Anything else is returned trimmed
/// and otherwise untouched. Leading zeros are kept (`02134.0` → `02134`),
/// unlike an integer round-trip through a float, so zip codes survive.
pub fn normalize_numeric(text: &str) -> String {
    let trimmed = text.trim();
    if !NUMERIC_REGEX.is_match(trimmed) {
        return trimmed.to_string();
    }
    match trimmed.split_once('.') {
        Some((integer, _)) => integer.to_string(),
        None => trimmed.to_string(),
    }
}

/// Keep digits only; ten digits become `DDD-DDD-DDDD`.
pub fn format_phone(text: &str) -> String {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 10 {
        format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        digits
    }
}
