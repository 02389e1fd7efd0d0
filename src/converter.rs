//! HTML ⇄ shortcode conversion
//!
//! Extraction swaps recognized rich-media elements for `{{kind:id}}` tokens
//! so a plain-text editor cannot damage them. Reinsertion swaps the tokens
//! back for the exact markup they replaced.
//!
//! Properties relied on by the editor:
//! - Markup outside the recognized patterns passes through untouched
//! - Tokens without a matching card are left as literal text
//! - Card ids count per kind, within a single extraction call

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Match, Regex};
use tracing::{debug, trace};

use crate::config::ConverterConfig;
use crate::error::{ConfigResult, InsertError, InsertResult};
use crate::html;
use crate::media;
use crate::models::{
    Card, CardKind, CardPayload, Cards, Extraction, GalleryImage, InsertedCard, MediaRequest,
};
use crate::token::{self, Placeholder};

static MEDIA_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(iframe|audio|video|figure)\b[^>]*>").unwrap());
static IFRAME_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</iframe\s*>").unwrap());
static AUDIO_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</audio\s*>").unwrap());
static VIDEO_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</video\s*>").unwrap());
static FIGURE_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</figure\s*>").unwrap());
static SOURCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<source\b[^>]*>").unwrap());
static IMG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<img\b[^>]*>").unwrap());

static DEFAULT_CONVERTER: LazyLock<Converter> = LazyLock::new(Converter::new);

const IFRAME_ALLOW: &str = "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

const MISSING_STYLE: &str = "padding: 1rem; background: #f3f4f6; border: 2px dashed #cbd5e1; border-radius: 0.5rem; text-align: center; color: #64748b;";

/// Element patterns; cards are listed in this order, then by position
#[derive(Debug, Clone, Copy)]
enum Pattern {
    VideoEmbed,
    Audio,
    Video,
    Gallery,
}

impl Pattern {
    const ORDER: [Self; 4] = [Self::VideoEmbed, Self::Audio, Self::Video, Self::Gallery];

    fn from_tag(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "iframe" => Some(Self::VideoEmbed),
            "audio" => Some(Self::Audio),
            "video" => Some(Self::Video),
            "figure" => Some(Self::Gallery),
            _ => None,
        }
    }

    const fn kind(self) -> CardKind {
        match self {
            Self::VideoEmbed => CardKind::VideoEmbed,
            Self::Audio => CardKind::Audio,
            Self::Video => CardKind::Video,
            Self::Gallery => CardKind::Gallery,
        }
    }

    fn rank(kind: CardKind) -> usize {
        Self::ORDER
            .iter()
            .position(|pattern| pattern.kind() == kind)
            .unwrap_or(Self::ORDER.len())
    }

    fn close_tag(self) -> &'static Regex {
        match self {
            Self::VideoEmbed => &*IFRAME_CLOSE,
            Self::Audio => &*AUDIO_CLOSE,
            Self::Video => &*VIDEO_CLOSE,
            Self::Gallery => &*FIGURE_CLOSE,
        }
    }
}

/// Per-call accumulator: cards found so far and the next index for each kind
#[derive(Debug, Default)]
struct ExtractionPass {
    cards: Cards,
    next_index: HashMap<CardKind, usize>,
}

impl ExtractionPass {
    fn push(&mut self, payload: CardPayload, markup: &str) -> String {
        let kind = payload.kind();
        let index = self.next_index.entry(kind).or_insert(0);
        let id = kind.card_id(*index);
        *index += 1;

        let replacement = token::format_block_token(kind, &id);
        self.cards.push(Card::new(id, payload, markup.to_string()));
        replacement
    }
}

/// Converter between stored HTML and editable text with placeholder tokens
#[derive(Debug, Clone)]
pub struct Converter {
    config: ConverterConfig,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    /// Create a converter with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ConverterConfig::default(),
        }
    }

    /// Create a converter with a custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn with_config(config: ConverterConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub const fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Replace recognized media elements with placeholder tokens.
    ///
    /// One left-to-right scan over the input: an element is taken whole from
    /// its opening tag to the first matching close tag, so media nested in a
    /// gallery stays inside the gallery's markup. A candidate that does not
    /// qualify only skips its own opening tag.
    #[must_use]
    pub fn extract(&self, html: &str) -> Extraction {
        let mut pass = ExtractionPass::default();
        let mut text = String::with_capacity(html.len());
        let mut copied = 0;
        let mut search = 0;

        while let Some(caps) = MEDIA_OPEN.captures_at(html, search) {
            let open = caps.get_match();
            search = open.end();

            let Some(pattern) = caps.get(1).and_then(|name| Pattern::from_tag(name.as_str()))
            else {
                continue;
            };
            let Some((end, payload)) = self.element_at(pattern, html, open) else {
                continue;
            };

            text.push_str(&html[copied..open.start()]);
            text.push_str(&pass.push(payload, &html[open.start()..end]));
            copied = end;
            search = end;
        }
        text.push_str(&html[copied..]);

        let mut cards = pass.cards;
        cards.sort_by_key(|card| Pattern::rank(card.kind()));
        debug!(cards = cards.len(), "extracted shortcode cards");

        Extraction {
            text: text.trim().to_string(),
            cards,
        }
    }

    /// The element opened by `open`: its end offset and payload
    fn element_at(
        &self,
        pattern: Pattern,
        html: &str,
        open: Match<'_>,
    ) -> Option<(usize, CardPayload)> {
        let qualifies = match pattern {
            Pattern::VideoEmbed => self.video_embed(open.as_str()).is_some(),
            Pattern::Gallery => html::has_class(open.as_str(), &self.config.gallery_class),
            Pattern::Audio | Pattern::Video => true,
        };
        if !qualifies {
            trace!(?pattern, at = open.start(), "opening tag does not qualify");
            return None;
        }

        let Some(close) = pattern.close_tag().find_at(html, open.end()) else {
            debug!(?pattern, at = open.start(), "element is never closed");
            return None;
        };

        let payload = self.recognize(pattern, &html[open.start()..close.end()])?;
        Some((close.end(), payload))
    }

    fn recognize(&self, pattern: Pattern, markup: &str) -> Option<CardPayload> {
        let payload = match pattern {
            Pattern::VideoEmbed => self.video_embed(markup),
            Pattern::Audio => player_source(markup).map(|src| CardPayload::Audio { src }),
            Pattern::Video => player_source(markup).map(|src| CardPayload::Video { src }),
            Pattern::Gallery => self.gallery(markup),
        };

        if payload.is_none() {
            debug!(?pattern, markup_len = markup.len(), "element left as literal markup");
        }
        payload
    }

    fn video_embed(&self, markup: &str) -> Option<CardPayload> {
        let src = html::attribute_value(html::open_tag(markup)?, "src")?;
        let video_id = media::video_id_from_src(&self.config, &src)?;
        Some(CardPayload::VideoEmbed { video_id })
    }

    fn gallery(&self, markup: &str) -> Option<CardPayload> {
        let figure = html::open_tag(markup)?;
        if !html::has_class(figure, &self.config.gallery_class) {
            return None;
        }

        let images: Vec<GalleryImage> = IMG
            .find_iter(markup)
            .filter_map(|img| {
                let tag = img.as_str();
                Some(GalleryImage {
                    src: html::attribute_value(tag, "src")?,
                    width: html::attribute_value(tag, "width"),
                    height: html::attribute_value(tag, "height"),
                })
            })
            .collect();

        if images.is_empty() {
            return None;
        }

        Some(CardPayload::Gallery {
            images,
            width_wide: html::has_class(figure, &self.config.wide_class),
        })
    }

    /// Build a card for media inserted from the editor toolbar.
    ///
    /// The markup is the canonical shape extraction recognizes, so the card
    /// survives later extract/reinsert cycles unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the video id or source is empty
    pub fn insert_card(
        &self,
        request: &MediaRequest,
        next_index: usize,
    ) -> InsertResult<InsertedCard> {
        let kind = request.kind();
        let (payload, markup) = match request {
            MediaRequest::VideoEmbed { video_id } => {
                let video_id = required(kind, video_id)?;
                let markup = format!(
                    r#"<iframe width="{width}" height="{height}" src="{base}{id}" title="YouTube video player" frameborder="0" allow="{IFRAME_ALLOW}" referrerpolicy="strict-origin-when-cross-origin" allowfullscreen></iframe>"#,
                    width = html::escape(&self.config.embed_width),
                    height = html::escape(&self.config.embed_height),
                    base = html::escape(&self.config.embed_base_url),
                    id = html::escape(&video_id),
                );
                (CardPayload::VideoEmbed { video_id }, markup)
            }
            MediaRequest::Audio { src } => {
                let src = required(kind, src)?;
                let markup = player_markup("audio", &src, &self.config.audio_mime);
                (CardPayload::Audio { src }, markup)
            }
            MediaRequest::Video { src } => {
                let src = required(kind, src)?;
                let markup = player_markup("video", &src, &self.config.video_mime);
                (CardPayload::Video { src }, markup)
            }
        };

        let card = Card::new(kind.card_id(next_index), payload, markup);
        Ok(InsertedCard {
            token: card.token(),
            card,
        })
    }

    /// Turn a toolbar kind plus user input into an insert request.
    ///
    /// Video input may be a watch URL, a short link or a bare id.
    ///
    /// # Errors
    ///
    /// Returns an error for kinds that are only ever extracted, and for
    /// video input that does not resolve to an id
    pub fn media_request(&self, kind: CardKind, input: &str) -> InsertResult<MediaRequest> {
        let src = input.trim().to_string();
        match kind {
            CardKind::VideoEmbed => media::parse_video_reference(&self.config, input)
                .map(|video_id| MediaRequest::VideoEmbed { video_id })
                .ok_or_else(|| InsertError::unrecognized_video(input)),
            CardKind::Audio => Ok(MediaRequest::Audio { src }),
            CardKind::Video => Ok(MediaRequest::Video { src }),
            CardKind::Gallery | CardKind::RawHtml => {
                Err(InsertError::unsupported_kind(kind.token_name()))
            }
        }
    }
}

fn required(kind: CardKind, value: &str) -> InsertResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(InsertError::empty_payload(kind.token_name()));
    }
    Ok(value.to_string())
}

fn player_markup(element: &str, src: &str, mime: &str) -> String {
    format!(
        "<{element} controls style=\"width: 100%\">\n  <source src=\"{src}\" type=\"{mime}\">\n  Your browser does not support the {element} element.\n</{element}>",
        src = html::escape(src),
        mime = html::escape(mime),
    )
}

/// Source of an audio/video element: the first nested `<source>`, then the
/// element's own `src`
fn player_source(markup: &str) -> Option<String> {
    SOURCE
        .find_iter(markup)
        .find_map(|source| html::attribute_value(source.as_str(), "src"))
        .or_else(|| html::attribute_value(html::open_tag(markup)?, "src"))
}

fn card_index(cards: &[Card]) -> HashMap<&str, &Card> {
    let mut index = HashMap::with_capacity(cards.len());
    for card in cards {
        index.entry(card.id.as_str()).or_insert(card);
    }
    index
}

fn resolve<'c>(index: &HashMap<&str, &'c Card>, placeholder: Placeholder<'_>) -> Option<&'c Card> {
    let card = index.get(placeholder.id).copied()?;
    if card.kind() == placeholder.kind {
        Some(card)
    } else {
        trace!(
            id = placeholder.id,
            token_kind = %placeholder.kind,
            card_kind = %card.kind(),
            "placeholder kind does not match card"
        );
        None
    }
}

/// Extract with the default configuration
#[must_use]
pub fn extract(html: &str) -> Extraction {
    DEFAULT_CONVERTER.extract(html)
}

/// Swap placeholder tokens back for their cards' original markup.
///
/// Unresolved tokens stay as literal text.
#[must_use]
pub fn reinsert(text: &str, cards: &[Card]) -> String {
    let index = card_index(cards);
    token::replace_placeholders(text, |placeholder| {
        let card = resolve(&index, placeholder);
        if card.is_none() {
            trace!(id = placeholder.id, kind = %placeholder.kind, "unresolved placeholder kept");
        }
        card.map(|card| card.original_markup.clone())
    })
    .into_owned()
}

/// Like [`reinsert`], but unresolved tokens render as a visible notice
#[must_use]
pub fn preview(text: &str, cards: &[Card]) -> String {
    let index = card_index(cards);
    token::replace_placeholders(text, |placeholder| {
        Some(resolve(&index, placeholder).map_or_else(
            || missing_notice(placeholder),
            |card| card.original_markup.clone(),
        ))
    })
    .into_owned()
}

fn missing_notice(placeholder: Placeholder<'_>) -> String {
    let id = html::escape(placeholder.id);
    format!(
        r#"<div class="shortcode-missing" data-kind="{kind}" data-id="{id}" style="{MISSING_STYLE}">Missing {kind}: {id}</div>"#,
        kind = placeholder.kind,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const IFRAME_HTML: &str = r#"<iframe width="560" height="315" src="https://www.youtube.com/embed/abc123" frameborder="0" allowfullscreen></iframe>"#;
    const AUDIO_HTML: &str = "<audio controls>\n  <source src=\"/media/talk.mp3\" type=\"audio/mpeg\">\n</audio>";
    const GALLERY_HTML: &str = r#"<figure class="kg-card kg-gallery-card kg-width-wide"><div class="kg-gallery-container"><div class="kg-gallery-row"><div class="kg-gallery-image"><img src="/img/a.jpg" width="600" height="400" loading="lazy" alt=""></div><div class="kg-gallery-image"><img src="/img/b.jpg" width="800" height="600" loading="lazy" alt=""></div><div class="kg-gallery-image"><img src="/img/c.jpg" loading="lazy" alt=""></div></div></div></figure>"#;

    #[test]
    fn test_iframe_scenario() {
        let html = format!("{IFRAME_HTML}\n<p>hello</p>");
        let extraction = extract(&html);

        assert_eq!(extraction.text, "{{youtube:youtube-0}}\n\n\n<p>hello</p>");
        assert_eq!(extraction.cards.len(), 1);

        let card = &extraction.cards[0];
        assert_eq!(card.id, "youtube-0");
        assert_eq!(card.kind(), CardKind::VideoEmbed);
        assert_eq!(
            card.payload,
            CardPayload::VideoEmbed {
                video_id: "abc123".to_string()
            }
        );
        assert_eq!(card.original_markup, IFRAME_HTML);

        let html_out = reinsert(&extraction.text, &extraction.cards);
        assert!(html_out.starts_with(IFRAME_HTML));
        assert!(html_out.ends_with("<p>hello</p>"));
    }

    #[test]
    fn test_single_element_round_trip_is_exact() {
        for html in [IFRAME_HTML, AUDIO_HTML, GALLERY_HTML] {
            let extraction = extract(html);
            assert_eq!(extraction.cards.len(), 1, "no card for {html}");
            assert_eq!(reinsert(&extraction.text, &extraction.cards), html);
        }
    }

    #[test]
    fn test_multi_element_round_trip_modulo_whitespace() {
        let html = format!("  {IFRAME_HTML}\n{AUDIO_HTML}\n{GALLERY_HTML}\n");
        let extraction = extract(&html);
        assert_eq!(extraction.cards.len(), 3);

        let out = reinsert(&extraction.text, &extraction.cards);
        let squash = |s: &str| s.split_whitespace().collect::<Vec<_>>().join(" ");
        assert_eq!(squash(&out), squash(&html));
        for card in &extraction.cards {
            assert!(out.contains(&card.original_markup));
        }
    }

    #[test]
    fn test_unknown_content_passthrough() {
        let extraction = extract("<div>plain</div>");
        assert_eq!(extraction.text, "<div>plain</div>");
        assert!(extraction.cards.is_empty());
    }

    #[test]
    fn test_missing_card_fail_open() {
        assert_eq!(reinsert("{{audio:audio-0}}", &[]), "{{audio:audio-0}}");
    }

    #[test]
    fn test_reinsert_is_idempotent() {
        let html = format!("<p>a</p>{AUDIO_HTML}<p>b</p>");
        let extraction = extract(&html);
        let once = reinsert(&extraction.text, &extraction.cards);
        let twice = reinsert(&extraction.text, &extraction.cards);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_duplicated_token_resolves_each_time() {
        let extraction = extract(AUDIO_HTML);
        let text = format!("{0}\n\n{0}", extraction.text);
        let out = reinsert(&text, &extraction.cards);
        assert_eq!(out, format!("{AUDIO_HTML}\n\n{AUDIO_HTML}"));
    }

    #[test]
    fn test_kind_mismatch_is_left_literal() {
        let extraction = extract(AUDIO_HTML);
        assert_eq!(
            reinsert("{{video:audio-0}}", &extraction.cards),
            "{{video:audio-0}}"
        );
    }

    #[test]
    fn test_gallery_order_and_dimensions() {
        let extraction = extract(GALLERY_HTML);
        let card = &extraction.cards[0];
        assert_eq!(card.id, "gallery-0");

        match &card.payload {
            CardPayload::Gallery { images, width_wide } => {
                let srcs: Vec<&str> = images.iter().map(|i| i.src.as_str()).collect();
                assert_eq!(srcs, vec!["/img/a.jpg", "/img/b.jpg", "/img/c.jpg"]);
                assert_eq!(images[0], GalleryImage::new("/img/a.jpg").with_size("600", "400"));
                assert_eq!(images[2].width, None);
                assert!(*width_wide);
            }
            _ => panic!("Expected gallery payload"),
        }
        assert_eq!(card.original_markup, GALLERY_HTML);
    }

    #[test]
    fn test_ids_count_per_kind() {
        let html = format!("{IFRAME_HTML}{AUDIO_HTML}{AUDIO_HTML}{IFRAME_HTML}");
        let extraction = extract(&html);
        let ids: Vec<&str> = extraction.cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["youtube-0", "youtube-1", "audio-0", "audio-1"]);
        assert_eq!(
            extraction.text,
            "{{youtube:youtube-0}}\n\n\n\n{{audio:audio-0}}\n\n\n\n{{audio:audio-1}}\n\n\n\n{{youtube:youtube-1}}"
        );
    }

    #[test]
    fn test_separate_calls_do_not_share_counters() {
        let first = extract(AUDIO_HTML);
        let second = extract(AUDIO_HTML);
        assert_eq!(first.cards[0].id, "audio-0");
        assert_eq!(second.cards[0].id, "audio-0");
    }

    #[test]
    fn test_unconvertible_elements_stay_literal() {
        let inputs = [
            r#"<iframe src="https://player.vimeo.com/video/1"></iframe>"#,
            r#"<iframe src="https://www.youtube.com/watch"></iframe>"#,
            "<audio controls></audio>",
            r#"<figure class="kg-gallery-card"><img alt="no source"></figure>"#,
            r#"<figure class="kg-image-card"><img src="/img/a.jpg"></figure>"#,
        ];
        for html in inputs {
            let extraction = extract(html);
            assert!(extraction.cards.is_empty(), "unexpected card for {html}");
            assert_eq!(extraction.text, html);
        }
    }

    #[test]
    fn test_video_with_own_src() {
        let html = r#"<video src="/media/clip.mp4" controls></video>"#;
        let extraction = extract(html);
        assert_eq!(
            extraction.cards[0].payload,
            CardPayload::Video {
                src: "/media/clip.mp4".to_string()
            }
        );
    }

    #[test]
    fn test_preview_marks_missing_cards() {
        let extraction = extract(AUDIO_HTML);
        let text = format!("{}\n\n{{{{video:video-<7>}}}}", extraction.text);
        let out = preview(&text, &extraction.cards);

        assert!(out.starts_with(AUDIO_HTML));
        assert!(out.contains(r#"class="shortcode-missing""#));
        assert!(out.contains("Missing video: video-&lt;7&gt;"));
        assert!(!out.contains("{{video:"));
    }

    #[test]
    fn test_inserted_cards_round_trip() {
        let converter = Converter::new();
        let requests = [
            MediaRequest::VideoEmbed {
                video_id: "dQw4w9WgXcQ".into(),
            },
            MediaRequest::Audio {
                src: "/media/a.mp3?x=1&y=2".into(),
            },
            MediaRequest::Video {
                src: "/media/v.mp4".into(),
            },
        ];

        for request in requests {
            let inserted = converter.insert_card(&request, 4).unwrap();
            assert_eq!(inserted.card.id, request.kind().card_id(4));
            assert_eq!(inserted.token, inserted.card.token());

            let extraction = converter.extract(&inserted.card.original_markup);
            assert_eq!(extraction.cards.len(), 1);
            assert_eq!(extraction.cards[0].payload, inserted.card.payload);
            assert_eq!(
                extraction.cards[0].original_markup,
                inserted.card.original_markup
            );
        }
    }

    #[test]
    fn test_insert_rejects_empty_payload() {
        let converter = Converter::new();
        let err = converter
            .insert_card(&MediaRequest::Audio { src: "  ".into() }, 0)
            .unwrap_err();
        assert!(matches!(err, InsertError::EmptyPayload(_)));
    }

    #[test]
    fn test_media_request_kinds() {
        let converter = Converter::new();
        assert_eq!(
            converter
                .media_request(CardKind::VideoEmbed, "https://youtu.be/abc")
                .unwrap(),
            MediaRequest::VideoEmbed {
                video_id: "abc".into()
            }
        );
        assert!(matches!(
            converter.media_request(CardKind::Gallery, "x"),
            Err(InsertError::UnsupportedKind(_))
        ));
        assert!(matches!(
            converter.media_request(CardKind::VideoEmbed, "https://example.com/x"),
            Err(InsertError::UnrecognizedVideo(_))
        ));
    }

    #[test]
    fn test_gallery_keeps_nested_media() {
        let html = r#"<figure class="kg-gallery-card"><img src="/a.jpg"><iframe src="https://www.youtube.com/embed/abc"></iframe><audio controls><source src="/a.mp3"></audio></figure>"#;
        let extraction = extract(html);

        assert_eq!(extraction.text, "{{gallery:gallery-0}}");
        assert_eq!(extraction.cards.len(), 1);
        assert!(extraction.cards[0].is_gallery());
        assert_eq!(extraction.cards[0].original_markup, html);
        assert_eq!(reinsert(&extraction.text, &extraction.cards), html);
    }

    #[test]
    fn test_media_inside_plain_figure_is_extracted() {
        let html = format!(r#"<figure class="kg-embed-card">{IFRAME_HTML}</figure>"#);
        let extraction = extract(&html);

        assert_eq!(extraction.cards.len(), 1);
        assert!(extraction.cards[0].is_video_embed());
        assert_eq!(
            extraction.text,
            "<figure class=\"kg-embed-card\">\n\n{{youtube:youtube-0}}\n\n</figure>"
        );
    }

    #[test]
    fn test_unqualified_open_tag_skips_only_itself() {
        let embed = r#"<iframe src="https://www.youtube.com/embed/abc"></iframe>"#;
        let html = format!(r#"<iframe src="https://player.vimeo.com/video/1"><p>x</p>{embed}"#);
        let extraction = extract(&html);

        assert_eq!(extraction.cards.len(), 1);
        assert_eq!(
            extraction.cards[0].payload,
            CardPayload::VideoEmbed {
                video_id: "abc".to_string()
            }
        );
        assert_eq!(extraction.cards[0].original_markup, embed);
        assert_eq!(
            extraction.text,
            r#"<iframe src="https://player.vimeo.com/video/1"><p>x</p>

{{youtube:youtube-0}}"#
        );
    }

    #[test]
    fn test_unclosed_element_stays_literal() {
        let html = r#"<p>a</p><audio controls><source src="/a.mp3">"#;
        let extraction = extract(html);
        assert!(extraction.cards.is_empty());
        assert_eq!(extraction.text, html);
    }

    #[test]
    fn test_custom_gallery_class() {
        let config = ConverterConfig {
            gallery_class: "photo-grid".to_string(),
            ..ConverterConfig::default()
        };
        let converter = Converter::with_config(config).unwrap();
        let html = r#"<figure class="photo-grid"><img src="/a.jpg"></figure>"#;
        assert_eq!(converter.extract(html).cards.len(), 1);
        assert!(converter.extract(GALLERY_HTML).cards.is_empty());
    }
}
