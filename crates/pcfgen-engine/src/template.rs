//! `|||Column Name|||` placeholder substitution.

use regex::{Captures, Regex};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

const DELIMITER: &str = "|||";

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|\|\|([^|]+)\|\|\|").unwrap());

static LEADING_PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|\|\|([^|]+)\|\|\|").unwrap());

pub fn placeholder_token(column: &str) -> String {
    format!("{DELIMITER}{column}{DELIMITER}")
}

/// Distinct placeholder names in `text`, in order of first appearance.
pub fn placeholders(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    PLACEHOLDER_REGEX
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

/// Remove every `|||...|||` token whose trimmed name is not in `keep`.
pub fn strip_placeholders(text: &str, keep: &HashSet<String>) -> String {
    PLACEHOLDER_REGEX
        .replace_all(text, |caps: &Captures| {
            if keep.contains(caps[1].trim()) {
                caps[0].to_string()
            } else {
                String::new()
            }
        })
        .into_owned()
}

/// Renders a template for one batch's column set.
///
/// Substitution is a single left-to-right pass over the template: at every
/// `|||` the longest column token starting there wins, and any other
/// `|||name|||` token is stripped unless its name is in the keep list.
/// Inserted values are never scanned for columns; stray tokens inside a
/// value are stripped within that value alone.
#[derive(Debug, Clone, Default)]
pub struct TemplateRenderer {
    /// (token, column), longest token first
    tokens: Vec<(String, String)>,
    keep: HashSet<String>,
}

impl TemplateRenderer {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut tokens: Vec<(String, String)> = columns
            .into_iter()
            .map(Into::into)
            .filter(|column: &String| seen.insert(column.clone()))
            .map(|column| (placeholder_token(&column), column))
            .collect();
        tokens.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        Self {
            tokens,
            keep: HashSet::new(),
        }
    }

    /// Preserve leftover tokens with these names verbatim.
    pub fn keep<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keep
            .extend(names.into_iter().map(|name| name.into().trim().to_string()));
        self
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.tokens.iter().any(|(_, c)| c == column)
    }

    /// Placeholders in `template` that this renderer would strip.
    pub fn unresolved(&self, template: &str) -> Vec<String> {
        placeholders(template)
            .into_iter()
            .filter(|name| !self.has_column(name) && !self.keep.contains(name.trim()))
            .collect()
    }

    /// Render `template`; columns without an entry in `values` become empty.
    pub fn render(&self, template: &str, values: &HashMap<String, String>) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(pos) = rest.find(DELIMITER) {
            out.push_str(&rest[..pos]);
            let candidate = &rest[pos..];

            match self
                .tokens
                .iter()
                .find(|(token, _)| candidate.starts_with(token.as_str()))
            {
                Some((token, column)) => {
                    if let Some(value) = values.get(column) {
                        out.push_str(&strip_placeholders(value, &self.keep));
                    }
                    rest = &candidate[token.len()..];
                }
                None => match LEADING_PLACEHOLDER_REGEX.captures(candidate) {
                    Some(caps) => {
                        if self.keep.contains(caps[1].trim()) {
                            out.push_str(&caps[0]);
                        }
                        rest = &candidate[caps[0].len()..];
                    }
                    None => {
                        // A token may still start inside this run of pipes
                        out.push('|');
                        rest = &candidate[1..];
                    }
                },
            }
        }

        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_every_occurrence_replaced() {
        let renderer = TemplateRenderer::new(["First Name", "Last Name"]);
        let out = renderer.render(
            "<title>|||First Name||| |||Last Name|||</title><h1>|||First Name|||</h1>",
            &values(&[("First Name", "Jane"), ("Last Name", "Doe")]),
        );
        insta::assert_snapshot!(out, @"<title>Jane Doe</title><h1>Jane</h1>");
    }

    #[test]
    fn test_missing_value_renders_empty() {
        let renderer = TemplateRenderer::new(["Bio"]);
        assert_eq!(renderer.render("[|||Bio|||]", &HashMap::new()), "[]");
    }

    #[test]
    fn test_unknown_placeholders_stripped() {
        let renderer = TemplateRenderer::new(["Name"]);
        let out = renderer.render(
            "|||Name||| |||Nmae||| |||Fun Facts|||",
            &values(&[("Name", "Jane")]),
        );
        assert_eq!(out, "Jane  ");
    }

    #[test]
    fn test_keep_list_preserves_tokens() {
        let renderer = TemplateRenderer::new(["Name"]).keep(["Year"]);
        let out = renderer.render("|||Name||| |||Year||| |||Other|||", &values(&[("Name", "J")]));
        assert_eq!(out, "J |||Year||| ");
        assert_eq!(renderer.unresolved("|||Name||| |||Year||| |||Other|||"), vec!["Other"]);
    }

    #[test]
    fn test_regex_metacharacters_in_column_names() {
        let renderer = TemplateRenderer::new(["Cost ($)", "Phone (Office)", "a.b*"]);
        let out = renderer.render(
            "|||Cost ($)||| / |||Phone (Office)||| / |||a.b*|||",
            &values(&[("Cost ($)", "5"), ("Phone (Office)", "555"), ("a.b*", "x")]),
        );
        assert_eq!(out, "5 / 555 / x");
    }

    #[test]
    fn test_column_names_containing_pipes() {
        let renderer = TemplateRenderer::new(["A|B"]);
        assert_eq!(renderer.render("<|||A|B|||>", &values(&[("A|B", "ok")])), "<ok>");
    }

    #[test]
    fn test_overlapping_names_independent_of_order() {
        // "|||A|||" is a prefix of the "A|||B" column's token
        let template = "|||A|||B||| / |||A|||";
        let vals = values(&[("A", "short"), ("A|||B", "long")]);

        let forward = TemplateRenderer::new(["A", "A|||B"]).render(template, &vals);
        let backward = TemplateRenderer::new(["A|||B", "A"]).render(template, &vals);

        assert_eq!(forward, "long / short");
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_values_are_not_resubstituted() {
        let renderer = TemplateRenderer::new(["A", "B"]);
        let out = renderer.render("|||A|||", &values(&[("A", "see |||B|||"), ("B", "boom")]));
        // The inserted token is not expanded; as a leftover token it is stripped
        assert_eq!(out, "see ");
    }

    #[test]
    fn test_pipes_in_values_never_pair_up() {
        let renderer = TemplateRenderer::new(["A", "B"]);
        let out = renderer.render(
            "|||A||| and |||B|||",
            &values(&[("A", "x|||y"), ("B", "z|||w")]),
        );
        assert_eq!(out, "x|||y and z|||w");
    }

    #[test]
    fn test_value_tail_and_template_do_not_form_token() {
        let renderer = TemplateRenderer::new(["A"]);
        let out = renderer.render("|||A|||Note|||", &values(&[("A", "a|||")]));
        assert_eq!(out, "a|||Note|||");
    }

    #[test]
    fn test_token_inside_pipe_run() {
        let renderer = TemplateRenderer::new(["X"]);
        assert_eq!(renderer.render("||||X|||", &values(&[("X", "1")])), "|1");
    }

    #[test]
    fn test_no_tokens_remain_after_render() {
        let columns = ["First Name", "Last Name", "Bio"];
        let renderer = TemplateRenderer::new(columns);
        let out = renderer.render(
            "|||First Name|||\n|||Last Name|||\n|||Bio|||\n|||Bio|||",
            &values(&[("First Name", "A"), ("Last Name", "B")]),
        );
        assert!(placeholders(&out).is_empty());
    }

    #[test]
    fn test_placeholders_listed_once_in_order() {
        assert_eq!(
            placeholders("|||B||| |||A||| |||B|||"),
            vec!["B".to_string(), "A".to_string()]
        );
    }
}
