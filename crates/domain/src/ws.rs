//! WebSocket body-mode vocabulary

use serde::{Deserialize, Serialize};

/// Body-mode tag carried by WEBSOCKET collection items.
///
/// Restricted to the WebSocket vocabulary of the source schema; unknown
/// tags fall back to [`WsBodyMode::None`] since the tag is advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WsBodyMode {
    /// No initial message body
    #[default]
    None,
    /// Plain text message
    Text,
    /// JSON message
    Json,
    /// XML message
    Xml,
    /// HTML message
    Html,
}

impl WsBodyMode {
    /// Maps a source body-mode tag to the WebSocket vocabulary.
    ///
    /// Matching is case-insensitive; anything outside the vocabulary
    /// (or an absent tag) maps to `None`.
    #[must_use]
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag.map(str::to_ascii_lowercase).as_deref() {
            Some("text") => Self::Text,
            Some("json") => Self::Json,
            Some("xml") => Self::Xml,
            Some("html") => Self::Html,
            _ => Self::None,
        }
    }

    /// Returns the tag as a static lowercase string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Text => "text",
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Html => "html",
        }
    }
}
