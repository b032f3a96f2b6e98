use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static ILLEGAL_CHARS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[<>:"/\\|?*]"#).unwrap());
static REPEATED_HYPHENS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").unwrap());

/// Filesystem-safe file stem for a row, before de-duplication.
///
/// `"Jane ", "Van Doe"` → `jane-van-doe`. Rows without a usable name get
/// `row-{n}` with a 1-based `n`.
pub fn candidate_name(first: &str, last: &str, row_index: usize) -> String {
    let joined = format!(
        "{}-{}",
        first.trim().to_lowercase(),
        last.trim().to_lowercase()
    );
    let joined = joined.trim_matches('-');
    if joined.is_empty() {
        return row_fallback(row_index);
    }

    let name = WHITESPACE_REGEX.replace_all(joined, "-");
    let name = ILLEGAL_CHARS_REGEX.replace_all(&name, "");
    let name = REPEATED_HYPHENS_REGEX.replace_all(&name, "-");

    if name.trim_matches('-').is_empty() {
        return row_fallback(row_index);
    }
    name.into_owned()
}

fn row_fallback(row_index: usize) -> String {
    format!("row-{}", row_index + 1)
}

/// Batch-scoped file namer.
///
/// The first occurrence of a name is returned as is; later collisions get
/// ` (1)`, ` (2)`, ... in call order. Create one per batch.
#[derive(Debug, Default)]
pub struct FileNamer {
    seen: HashMap<String, usize>,
}

impl FileNamer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dedup(&mut self, name: &str) -> String {
        match self.seen.get_mut(name) {
            Some(collisions) => {
                *collisions += 1;
                format!("{} ({})", name, collisions)
            }
            None => {
                self.seen.insert(name.to_string(), 0);
                name.to_string()
            }
        }
    }

    pub fn build(&mut self, first: &str, last: &str, row_index: usize) -> String {
        let candidate = candidate_name(first, last, row_index);
        self.dedup(&candidate)
    }
}
