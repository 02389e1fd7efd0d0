//! Just enough HTML tag reading for the card patterns.
//!
//! Nothing here builds a DOM: tags are read as flat text and attribute values
//! are looked up by name.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static OPEN_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^<[A-Za-z][^>]*>").unwrap());

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+))"#)
        .unwrap()
});

/// Opening tag at the start of an element's markup
#[must_use]
pub fn open_tag(element: &str) -> Option<&str> {
    OPEN_TAG.find(element).map(|m| m.as_str())
}

/// Raw value of the attribute `name` in a single tag (case-insensitive name)
#[must_use]
pub fn attribute<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    // Skip the tag name so `<source src=...>` is not read as an attribute
    let body = tag.find(char::is_whitespace).map_or("", |at| &tag[at..]);
    ATTRIBUTE.captures_iter(body).find_map(|caps| {
        if !caps[1].eq_ignore_ascii_case(name) {
            return None;
        }
        caps.get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map(|m| m.as_str())
    })
}

/// Decoded, non-empty attribute value
#[must_use]
pub fn attribute_value(tag: &str, name: &str) -> Option<String> {
    attribute(tag, name)
        .filter(|value| !value.trim().is_empty())
        .map(|value| unescape(value).into_owned())
}

/// Whether the tag's `class` attribute lists `class_name`
#[must_use]
pub fn has_class(tag: &str, class_name: &str) -> bool {
    attribute(tag, "class").is_some_and(|classes| classes.split_whitespace().any(|c| c == class_name))
}

/// Escape text for use inside a double-quoted attribute
#[must_use]
pub fn escape(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '"', '<', '>', '\'']) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Reverse of [`escape`]; other entities are left alone
#[must_use]
pub fn unescape(value: &str) -> Cow<'_, str> {
    if !value.contains('&') {
        return Cow::Borrowed(value);
    }
    Cow::Owned(
        value
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&"),
    )
}
