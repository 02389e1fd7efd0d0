//! Legacy Mobiledoc post bodies.
//!
//! Markdown cards become one editable text. `html` and `gallery` cards are
//! carried through untouched and appended after the edited Markdown when the
//! document is rebuilt.

use serde_json::{Value, json};
use tracing::debug;

use crate::error::{MobiledocError, MobiledocResult};
use crate::models::{Card, CardKind, CardPayload};

pub const MOBILEDOC_VERSION: &str = "0.3.1";

const CARD_SECTION: u64 = 10;
const MARKUP_SECTION: u64 = 1;

/// A Mobiledoc document split for editing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MobiledocSplit {
    pub markdown: String,
    /// `html` and `gallery` cards, kept verbatim as `[type, payload]`
    pub retained: Vec<Value>,
}

/// Split a Mobiledoc JSON document into editable Markdown and retained cards
///
/// # Errors
///
/// Returns an error if the input is not JSON or `cards` is not an array
pub fn split(source: &str) -> MobiledocResult<MobiledocSplit> {
    let doc: Value =
        serde_json::from_str(source).map_err(|e| MobiledocError::invalid_json(e.to_string()))?;

    let cards = match doc.get("cards") {
        None | Some(Value::Null) => return Ok(MobiledocSplit::default()),
        Some(Value::Array(cards)) => cards,
        Some(_) => return Err(MobiledocError::malformed("`cards` is not an array")),
    };

    let mut markdown = String::new();
    let mut retained = Vec::new();

    for card in cards {
        let Some(card_type) = card.get(0).and_then(Value::as_str) else {
            continue;
        };
        match card_type {
            "markdown" => {
                if let Some(text) = card
                    .get(1)
                    .and_then(|payload| payload.get("markdown"))
                    .and_then(Value::as_str)
                {
                    markdown.push_str(text);
                    markdown.push_str("\n\n");
                }
            }
            "html" | "gallery" => retained.push(card.clone()),
            other => debug!(card_type = other, "dropping mobiledoc card"),
        }
    }

    Ok(MobiledocSplit {
        markdown: markdown.trim().to_string(),
        retained,
    })
}

/// Rebuild a Mobiledoc document: edited Markdown first, then the retained cards
///
/// # Errors
///
/// Returns an error if the document cannot be encoded
pub fn rebuild(markdown: &str, retained: &[Value]) -> MobiledocResult<String> {
    let cards: Vec<Value> = std::iter::once(json!(["markdown", { "markdown": markdown.trim() }]))
        .chain(retained.iter().cloned())
        .collect();

    let mut sections: Vec<Value> = (0..cards.len())
        .map(|index| json!([CARD_SECTION, index]))
        .collect();
    sections.push(json!([MARKUP_SECTION, "p", []]));

    let doc = json!({
        "version": MOBILEDOC_VERSION,
        "atoms": [],
        "cards": cards,
        "markups": [],
        "sections": sections,
    });

    serde_json::to_string(&doc).map_err(|e| MobiledocError::malformed(e.to_string()))
}

/// Retained `html` cards as raw-HTML cards, numbered `html-0`, `html-1`, …
#[must_use]
pub fn raw_html_cards(retained: &[Value]) -> Vec<Card> {
    retained
        .iter()
        .filter(|card| card.get(0).and_then(Value::as_str) == Some("html"))
        .filter_map(|card| card.get(1)?.get("html")?.as_str())
        .enumerate()
        .map(|(index, html)| {
            Card::new(
                CardKind::RawHtml.card_id(index),
                CardPayload::RawHtml,
                html.to_string(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r##"{
        "version": "0.3.1",
        "atoms": [],
        "cards": [
            ["markdown", {"markdown": "# Title\n\nFirst part"}],
            ["html", {"html": "<iframe src=\"https://www.youtube.com/embed/abc\"></iframe>"}],
            ["markdown", {"markdown": "Second part\n"}],
            ["gallery", {"images": [{"src": "/a.jpg"}]}],
            ["image", {"src": "/dropped.jpg"}]
        ],
        "markups": [],
        "sections": [[10, 0], [10, 1], [10, 2], [10, 3], [10, 4]]
    }"##;

    #[test]
    fn test_split_joins_markdown_and_keeps_rich_cards() {
        let split = split(DOC).unwrap();
        assert_eq!(split.markdown, "# Title\n\nFirst part\n\nSecond part");
        assert_eq!(split.retained.len(), 2);
        assert_eq!(split.retained[0][0], "html");
        assert_eq!(split.retained[1][0], "gallery");
    }

    #[test]
    fn test_split_errors() {
        assert!(matches!(split("not json"), Err(MobiledocError::InvalidJson(_))));
        assert!(matches!(
            split(r#"{"cards": {}}"#),
            Err(MobiledocError::Malformed(_))
        ));
        assert_eq!(split("{}").unwrap(), MobiledocSplit::default());
    }

    #[test]
    fn test_rebuild_layout() {
        let split = split(DOC).unwrap();
        let rebuilt = rebuild("  edited body \n", &split.retained).unwrap();
        let doc: Value = serde_json::from_str(&rebuilt).unwrap();

        assert_eq!(doc["version"], MOBILEDOC_VERSION);
        assert_eq!(doc["cards"][0], json!(["markdown", {"markdown": "edited body"}]));
        assert_eq!(doc["cards"][1][0], "html");
        assert_eq!(doc["cards"][2][0], "gallery");
        assert_eq!(
            doc["sections"],
            json!([[10, 0], [10, 1], [10, 2], [1, "p", []]])
        );
    }

    #[test]
    fn test_rebuild_then_split() {
        let first = split(DOC).unwrap();
        let rebuilt = rebuild(&first.markdown, &first.retained).unwrap();
        assert_eq!(split(&rebuilt).unwrap(), first);
    }

    #[test]
    fn test_raw_html_cards() {
        let split = split(DOC).unwrap();
        let cards = raw_html_cards(&split.retained);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, "html-0");
        assert!(cards[0].is_raw_html());
        assert!(cards[0].original_markup.starts_with("<iframe"));
    }
}
