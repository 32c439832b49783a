//! Leaf classification
//!
//! Inspects each flattened leaf's method token and builds the matching
//! target variant: whitelisted HTTP methods become REQUEST items, the
//! WebSocket marker becomes a WEBSOCKET item, and anything else is skipped
//! with an informational warning. Only missing required substructure is an
//! error.

use chrono::{DateTime, Utc};
use tern_domain::{
    CollectionItem, HttpMethod, RequestItem, SYSTEM_AUTHOR, WEBSOCKET_METHOD, WebSocketItem,
    WsBodyMode,
};

use crate::error::ImportError;
use crate::flatten::FlatLeaf;
use crate::normalize::{convert_body, convert_headers, convert_query};
use crate::warning::ImportWarning;

/// Classifies one leaf, returning `None` for leaves the target schema
/// cannot represent.
pub(crate) fn classify_leaf(
    leaf: &FlatLeaf<'_>,
    now: DateTime<Utc>,
    warnings: &mut Vec<ImportWarning>,
) -> Result<Option<CollectionItem>, ImportError> {
    let name = leaf.flattened_name();

    let request = leaf
        .item
        .request
        .as_ref()
        .ok_or_else(|| ImportError::StructuralValidation {
            path: name.clone(),
            reason: "leaf item has no request object".to_string(),
        })?;

    let method = request
        .method
        .as_deref()
        .map(str::to_uppercase)
        .unwrap_or_default();

    if let Ok(http_method) = method.parse::<HttpMethod>() {
        let body = convert_body(request.body.as_ref(), &name)?;
        let item = RequestItem {
            id: None,
            name,
            description: request.description.clone(),
            method: http_method,
            operation_id: leaf.item.name.clone(),
            url: request.url.raw(),
            body,
            query_params: convert_query(&request.url),
            headers: convert_headers(&request.header),
            created_at: now,
            updated_at: now,
            created_by: SYSTEM_AUTHOR.to_string(),
            updated_by: SYSTEM_AUTHOR.to_string(),
        };
        return Ok(Some(CollectionItem::Request(item)));
    }

    if method == WEBSOCKET_METHOD {
        let body = request.body.as_ref();
        let item = WebSocketItem {
            id: None,
            name,
            description: request.description.clone(),
            url: request.url.raw(),
            message: body.and_then(|b| b.message.clone()),
            body_mode: WsBodyMode::from_tag(body.map(|b| b.mode.as_str())),
            query_params: convert_query(&request.url),
            headers: convert_headers(&request.header),
            created_at: now,
            updated_at: now,
            created_by: SYSTEM_AUTHOR.to_string(),
            updated_by: SYSTEM_AUTHOR.to_string(),
        };
        return Ok(Some(CollectionItem::WebSocket(item)));
    }

    // Intentional filtering, not an error: the leaf has no representation
    // in the target schema.
    tracing::debug!(item = %name, method = %method, "skipping unsupported method");
    warnings.push(ImportWarning::info(
        name,
        format!("unsupported method `{method}`, item skipped"),
    ));
    Ok(None)
}
