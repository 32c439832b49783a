//! Canonical collection model
//!
//! These are the target-schema types the importer produces and the rest of
//! the platform consumes. Wire names are camelCase and item variants are
//! tagged with `type`, matching the schema persisted by the document store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::method::HttpMethod;
use crate::ws::WsBodyMode;

/// Author sentinel recorded on every imported item.
pub const SYSTEM_AUTHOR: &str = "system";

/// A collection of imported API operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    /// Collection display name
    pub name: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Number of items; recomputed at assembly, never trusted from input
    pub total_requests: usize,
    /// Items in import order
    pub items: Vec<CollectionItem>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp
    pub updated_at: DateTime<Utc>,
}

/// An item in a collection, either an HTTP request or a WebSocket endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CollectionItem {
    /// An HTTP request
    #[serde(rename = "REQUEST")]
    Request(RequestItem),
    /// A WebSocket endpoint
    #[serde(rename = "WEBSOCKET")]
    WebSocket(WebSocketItem),
}

impl CollectionItem {
    /// Returns the persistent identity, if one has been assigned.
    #[must_use]
    pub const fn id(&self) -> Option<Uuid> {
        match self {
            Self::Request(r) => r.id,
            Self::WebSocket(w) => w.id,
        }
    }

    /// Returns the (flattened) display name of this item.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Request(r) => &r.name,
            Self::WebSocket(w) => &w.name,
        }
    }
}

/// An imported HTTP request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestItem {
    /// Persistent identity; always `None` on importer output, the
    /// persistence layer assigns it on store
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Flattened display name (ancestor folders slash-joined with the leaf)
    pub name: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// HTTP method
    pub method: HttpMethod,
    /// Original leaf name, without the folder prefix
    pub operation_id: String,
    /// Target URL, copied verbatim from the source
    pub url: String,
    /// Request body; at most one element, empty when the source had none
    pub body: Vec<RequestBody>,
    /// Query parameters in source order
    pub query_params: Vec<QueryParam>,
    /// Header parameters in source order
    pub headers: Vec<HeaderParam>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp
    pub updated_at: DateTime<Utc>,
    /// Creating author (fixed sentinel for imports)
    pub created_by: String,
    /// Updating author (fixed sentinel for imports)
    pub updated_by: String,
}

/// An imported WebSocket endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSocketItem {
    /// Persistent identity; always `None` on importer output
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Flattened display name
    pub name: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Target URL, copied verbatim from the source
    pub url: String,
    /// Optional initial message
    #[serde(default)]
    pub message: Option<String>,
    /// Body-mode tag, restricted to the WebSocket vocabulary
    #[serde(default)]
    pub body_mode: WsBodyMode,
    /// Query parameters in source order
    pub query_params: Vec<QueryParam>,
    /// Header parameters in source order
    pub headers: Vec<HeaderParam>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp
    pub updated_at: DateTime<Utc>,
    /// Creating author (fixed sentinel for imports)
    pub created_by: String,
    /// Updating author (fixed sentinel for imports)
    pub updated_by: String,
}

/// Request body as stored on a REQUEST item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    /// Source body-mode tag, copied verbatim (`raw`, `formdata`, ...)
    #[serde(rename = "type")]
    pub body_type: String,
    /// Parsed JSON payload for `raw` bodies; `None` otherwise
    #[serde(default)]
    pub schema: Option<serde_json::Value>,
}

/// A query parameter key-value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParam {
    /// The parameter key
    pub key: String,
    /// The parameter value
    pub value: String,
}

impl QueryParam {
    /// Creates a query parameter.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A header parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderParam {
    /// Header name
    pub name: String,
    /// Description; empty string when the source carries none
    #[serde(default)]
    pub description: String,
    /// Whether the header is active (`true` unless disabled at the source)
    pub required: bool,
    /// Always an empty object; headers carry no schema on import
    #[serde(default = "empty_schema")]
    pub schema: serde_json::Value,
}

fn empty_schema() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl HeaderParam {
    /// Creates a header parameter with an empty schema object.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            schema: empty_schema(),
        }
    }
}
