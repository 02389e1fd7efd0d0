//! Placeholder token grammar: `{{kind:id}}`

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::models::CardKind;

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{(youtube|gallery|audio|video|html):([^}]+)\}\}").unwrap()
});

/// A placeholder found in editable text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    pub kind: CardKind,
    pub id: &'a str,
}

#[must_use]
pub fn format_token(kind: CardKind, id: &str) -> String {
    format!("{{{{{}:{id}}}}}", kind.token_name())
}

/// Token padded with blank lines so it stands as its own block
#[must_use]
pub fn format_block_token(kind: CardKind, id: &str) -> String {
    format!("\n\n{}\n\n", format_token(kind, id))
}

/// All placeholders in `text`, left to right
pub fn placeholders(text: &str) -> impl Iterator<Item = Placeholder<'_>> {
    TOKEN.captures_iter(text).filter_map(|caps| placeholder(&caps))
}

/// Replace every placeholder in a single pass.
///
/// `resolve` returns the replacement, or `None` to keep the token text as is.
/// Replacements are never rescanned.
pub fn replace_placeholders<'t, F>(text: &'t str, mut resolve: F) -> Cow<'t, str>
where
    F: FnMut(Placeholder<'_>) -> Option<String>,
{
    TOKEN.replace_all(text, |caps: &Captures<'_>| {
        placeholder(caps)
            .and_then(&mut resolve)
            .unwrap_or_else(|| caps[0].to_string())
    })
}

fn placeholder<'a>(caps: &Captures<'a>) -> Option<Placeholder<'a>> {
    let kind = CardKind::from_token_name(caps.get(1)?.as_str())?;
    let id = caps.get(2)?.as_str();
    Some(Placeholder { kind, id })
}
