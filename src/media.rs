//! Video id lookup for embed sources and pasted links
//!
//! Three URL shapes are understood: a `v` query parameter, an `/embed/<id>`
//! path, and `<short-link-host>/<id>`. Anything else on a video host yields
//! no id.

use url::Url;

use crate::config::ConverterConfig;

/// Video id carried by an iframe `src` attribute
#[must_use]
pub fn video_id_from_src(config: &ConverterConfig, src: &str) -> Option<String> {
    let url = parse_lenient(src)?;
    video_id_from_url(config, &url)
}

/// Video id for something a user pasted into the insert dialog.
///
/// Accepts a full URL, a scheme-less URL, or a bare id.
#[must_use]
pub fn parse_video_reference(config: &ConverterConfig, input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Some(url) = parse_lenient(input) {
        return video_id_from_url(config, &url);
    }

    let bare = !input.contains(|c: char| c.is_whitespace() || matches!(c, '/' | '.' | '?' | '&'));
    bare.then(|| input.to_string())
}

fn video_id_from_url(config: &ConverterConfig, url: &Url) -> Option<String> {
    let host = url.host_str()?;
    if !config.is_video_host(host) {
        return None;
    }

    if let Some((_, id)) = url.query_pairs().find(|(key, _)| key == "v") {
        return non_empty(&id);
    }

    let segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        [id, ..] if config.is_short_link_host(host) => non_empty(id),
        ["embed", .., id] => non_empty(id),
        _ => None,
    }
}

fn parse_lenient(input: &str) -> Option<Url> {
    if let Some(rest) = input.strip_prefix("//") {
        return Url::parse(&format!("https://{rest}")).ok();
    }
    match Url::parse(input) {
        Ok(url) if url.has_host() => Some(url),
        Ok(_) => None,
        Err(url::ParseError::RelativeUrlWithoutBase) if input.contains('/') => {
            Url::parse(&format!("https://{input}")).ok()
        }
        Err(_) => None,
    }
}

fn non_empty(id: &str) -> Option<String> {
    let id = id.trim();
    (!id.is_empty()).then(|| id.to_string())
}
