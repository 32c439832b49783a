//! Source collection export schema (subset)
//!
//! Serde model of the externally authored collection document the importer
//! consumes. The schema is loosely typed; `#[serde(default)]` is used
//! throughout so format variations deserialize instead of failing.

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};

/// Root of a source collection document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceCollection {
    pub info: SourceInfo,
    #[serde(default)]
    pub item: Vec<SourceItem>,
}

/// Collection metadata block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceInfo {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub schema: Option<String>,
}

/// A tree node: a folder when it carries a non-empty child list, a leaf
/// request otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub item: Option<Vec<Self>>,
    #[serde(default)]
    pub request: Option<SourceRequest>,
}

impl SourceItem {
    /// A node is a folder solely when its child-item list is present and
    /// non-empty; anything else is a leaf regardless of declared shape.
    #[must_use]
    pub fn is_folder(&self) -> bool {
        self.item.as_ref().is_some_and(|children| !children.is_empty())
    }
}

/// Request descriptor on a leaf node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceRequest {
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub url: SourceUrl,
    #[serde(default)]
    pub header: Vec<SourceHeader>,
    #[serde(default)]
    pub body: Option<SourceBody>,
    #[serde(default)]
    pub description: Option<String>,
}

/// URL, either a bare string or a structured object with parsed query
/// entries.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum SourceUrl {
    #[default]
    Empty,
    Simple(String),
    Structured(SourceUrlStructured),
}

impl SourceUrl {
    /// The raw URL string, copied verbatim on conversion.
    #[must_use]
    pub fn raw(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Simple(s) => s.clone(),
            Self::Structured(s) => s.raw.clone().unwrap_or_default(),
        }
    }

    /// Parsed query entries, in source order.
    #[must_use]
    pub fn query(&self) -> &[SourceQueryParam] {
        match self {
            Self::Structured(s) => &s.query,
            _ => &[],
        }
    }
}

/// Structured URL object.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SourceUrlStructured {
    #[serde(default)]
    pub raw: Option<String>,
    #[serde(default)]
    pub host: Vec<String>,
    #[serde(default)]
    pub path: Vec<String>,
    #[serde(default)]
    pub query: Vec<SourceQueryParam>,
}

/// Query-string entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceQueryParam {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}

/// Header entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceHeader {
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}

/// Request body; shape varies with `mode` (`raw`, `formdata`, `urlencoded`,
/// or the WebSocket-specific shape carrying an initial `message`).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SourceBody {
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub raw: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub urlencoded: Vec<SourceFormParam>,
    #[serde(default)]
    pub formdata: Vec<SourceFormParam>,
}

/// Form entry, used by both `urlencoded` and `formdata` modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFormParam {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}
