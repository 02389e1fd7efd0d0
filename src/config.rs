//! Converter configuration

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ConfigError, ConfigResult};

/// Settings for recognizing media markup and for writing new cards
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, uniffi::Record)]
#[serde(default)]
pub struct ConverterConfig {
    /// Hosts whose iframes are converted to video embed cards (subdomains included)
    pub video_hosts: Vec<String>,
    /// Hosts whose first path segment is the video id
    pub short_link_hosts: Vec<String>,
    /// Class marking a figure as an image gallery
    pub gallery_class: String,
    /// Class marking a gallery as wide
    pub wide_class: String,
    /// Prefix for the src of newly inserted video embeds
    pub embed_base_url: String,
    pub embed_width: String,
    pub embed_height: String,
    pub audio_mime: String,
    pub video_mime: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            video_hosts: vec![
                "youtube.com".to_string(),
                "youtube-nocookie.com".to_string(),
                "youtu.be".to_string(),
            ],
            short_link_hosts: vec!["youtu.be".to_string()],
            gallery_class: "kg-gallery-card".to_string(),
            wide_class: "kg-width-wide".to_string(),
            embed_base_url: "https://www.youtube.com/embed/".to_string(),
            embed_width: "100%".to_string(),
            embed_height: "400px".to_string(),
            audio_mime: "audio/mpeg".to_string(),
            video_mime: "video/mp4".to_string(),
        }
    }
}

impl ConverterConfig {
    /// Parse a JSON object; absent fields keep their defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or fails validation
    pub fn from_json(source: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(source)
            .map_err(|e| ConfigError::invalid_source(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values the converter relies on
    ///
    /// # Errors
    ///
    /// Returns the first field that cannot be used
    pub fn validate(&self) -> ConfigResult<()> {
        let result = if self.video_hosts.iter().all(|h| h.trim().is_empty()) {
            Err(ConfigError::invalid_field(
                "video_hosts",
                "at least one host is required",
            ))
        } else if self.gallery_class.trim().is_empty() {
            Err(ConfigError::invalid_field("gallery_class", "must not be empty"))
        } else if self.gallery_class.contains(char::is_whitespace) {
            Err(ConfigError::invalid_field(
                "gallery_class",
                "must be a single class name",
            ))
        } else if self.embed_base_url.trim().is_empty() {
            Err(ConfigError::invalid_field("embed_base_url", "must not be empty"))
        } else {
            Ok(())
        };

        if let Err(err) = &result {
            warn!(error = %err, "rejected converter configuration");
        }
        result
    }

    /// Whether `host` is one of the video hosts or a subdomain of one
    #[must_use]
    pub fn is_video_host(&self, host: &str) -> bool {
        host_matches(&self.video_hosts, host)
    }

    #[must_use]
    pub fn is_short_link_host(&self, host: &str) -> bool {
        host_matches(&self.short_link_hosts, host)
    }
}

fn host_matches(hosts: &[String], host: &str) -> bool {
    let host = host.trim_end_matches('.').to_ascii_lowercase();
    hosts.iter().any(|known| {
        let known = known.trim().to_ascii_lowercase();
        !known.is_empty()
            && (host == known
                || host
                    .strip_suffix(known.as_str())
                    .is_some_and(|prefix| prefix.ends_with('.')))
    })
}
