//! HTML sanitizer for rich-text cells
//!
//! Parses a cell as an HTML5 body fragment and re-serializes it as
//! XML-compatible markup, dropping comments, `script`/`style` elements and
//! event-handler attributes. Wrapper unwrapping and presentation-attribute
//! stripping are policy toggles.

use html5ever::tendril::TendrilSink;
use html5ever::{LocalName, Namespace, ParseOpts, QualName, parse_fragment};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Elements removed together with their content. Apart from `script` and
/// `style` these are the elements whose content the parser keeps as raw,
/// undecoded text.
const DROPPED_ELEMENTS: &[&str] = &[
    "script", "style", "noscript", "xmp", "iframe", "noembed", "noframes", "plaintext",
];

/// Structural-only elements replaced by their children when unwrapping
const WRAPPER_ELEMENTS: &[&str] = &["div"];

const PRESENTATION_ATTRIBUTES: &[&str] = &["class", "style"];

static XML_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_:][A-Za-z0-9_.:-]*$").unwrap());

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// What the sanitizer removes beyond comments, scripts and styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizePolicy {
    /// Replace `div` elements with their children
    pub unwrap_wrappers: bool,
    /// Drop `class` and `style` attributes
    pub strip_presentation_attrs: bool,
}

impl SanitizePolicy {
    /// Unwrap wrappers and strip presentation attributes.
    pub fn aggressive() -> Self {
        Self {
            unwrap_wrappers: true,
            strip_presentation_attrs: true,
        }
    }
}

#[derive(Debug)]
pub enum SanitizeError {
    /// The HTML parser could not consume the input
    Parse(std::io::Error),
}

impl fmt::Display for SanitizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SanitizeError::Parse(err) => write!(f, "HTML parse error: {}", err),
        }
    }
}

impl std::error::Error for SanitizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SanitizeError::Parse(err) => Some(err),
        }
    }
}

/// Sanitize an HTML fragment according to `policy`.
///
/// Text is re-escaped (`&`, `<`, `>`), attribute values are double-quoted and
/// void elements self-close, so the result can be embedded in an XML
/// document. Sanitizing the output again yields the same text.
pub fn sanitize(html: &str, policy: SanitizePolicy) -> Result<String, SanitizeError> {
    let context = QualName::new(None, Namespace::from(HTML_NAMESPACE), LocalName::from("body"));
    let dom = parse_fragment(RcDom::default(), ParseOpts::default(), context, Vec::new())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .map_err(SanitizeError::Parse)?;

    let mut writer = FragmentWriter::new(policy, html.len());
    for child in dom.document.children.borrow().iter() {
        // Fragment parsing hangs the parsed nodes under a synthetic <html> root
        if let NodeData::Element { name, .. } = &child.data
            && name.local.as_ref() == "html"
        {
            writer.walk_children(child);
        } else {
            writer.walk(child);
        }
    }

    Ok(writer.finish())
}

struct FragmentWriter {
    policy: SanitizePolicy,
    out: String,
}

impl FragmentWriter {
    fn new(policy: SanitizePolicy, capacity: usize) -> Self {
        Self {
            policy,
            out: String::with_capacity(capacity),
        }
    }

    fn finish(self) -> String {
        self.out
    }

    fn walk_children(&mut self, handle: &Handle) {
        for child in handle.children.borrow().iter() {
            self.walk(child);
        }
    }

    fn walk(&mut self, handle: &Handle) {
        match &handle.data {
            NodeData::Document => self.walk_children(handle),
            NodeData::Text { contents } => push_escaped(&mut self.out, &contents.borrow(), false),
            NodeData::Element { name, attrs, .. } => {
                let tag = name.local.as_ref();

                if DROPPED_ELEMENTS.contains(&tag) {
                    return;
                }
                if self.policy.unwrap_wrappers && WRAPPER_ELEMENTS.contains(&tag) {
                    self.walk_children(handle);
                    return;
                }
                // `Jane <jane@x.com>` parses as an element; keep it as text
                if !XML_NAME_REGEX.is_match(tag) {
                    self.out.push_str("&lt;");
                    push_escaped(&mut self.out, tag, false);
                    self.out.push_str("&gt;");
                    self.walk_children(handle);
                    return;
                }

                self.out.push('<');
                self.out.push_str(tag);
                for attr in attrs.borrow().iter() {
                    let attr_name = attr.name.local.as_ref();
                    if !self.keeps_attribute(attr_name) {
                        continue;
                    }
                    self.out.push(' ');
                    self.out.push_str(attr_name);
                    self.out.push_str("=\"");
                    push_escaped(&mut self.out, &attr.value, true);
                    self.out.push('"');
                }

                if VOID_ELEMENTS.contains(&tag) {
                    self.out.push_str("/>");
                    return;
                }

                self.out.push('>');
                self.walk_children(handle);
                self.out.push_str("</");
                self.out.push_str(tag);
                self.out.push('>');
            }
            NodeData::Comment { .. }
            | NodeData::Doctype { .. }
            | NodeData::ProcessingInstruction { .. } => {}
        }
    }

    fn keeps_attribute(&self, name: &str) -> bool {
        if !XML_NAME_REGEX.is_match(name) {
            return false;
        }
        let is_event_handler = name.len() > 2
            && name
                .get(..2)
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case("on"));
        if is_event_handler {
            return false;
        }
        !(self.policy.strip_presentation_attrs && PRESENTATION_ATTRIBUTES.contains(&name))
    }
}

fn push_escaped(out: &mut String, text: &str, in_attribute: bool) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attribute => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
