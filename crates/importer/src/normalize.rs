//! Body, query, and header normalization

use tern_domain::{HeaderParam, QueryParam, RequestBody};

use crate::error::ImportError;
use crate::source::{SourceBody, SourceHeader, SourceUrl};

/// Body-mode tag whose payload is JSON text.
pub(crate) const RAW_MODE: &str = "raw";

/// Converts the source body into the target's 0-or-1-element sequence.
///
/// The sequence is empty only when the source carries no body at all. The
/// target `type` is the source mode verbatim; `schema` is the parsed JSON
/// payload for `raw` bodies with a payload present, `None` otherwise. A
/// `raw` payload that is not valid JSON fails the whole import.
pub(crate) fn convert_body(
    body: Option<&SourceBody>,
    path: &str,
) -> Result<Vec<RequestBody>, ImportError> {
    let Some(body) = body else {
        return Ok(Vec::new());
    };

    let schema = if body.mode == RAW_MODE {
        match body.raw.as_deref() {
            Some(raw) => Some(serde_json::from_str(raw).map_err(|e| {
                ImportError::MalformedBody {
                    path: path.to_string(),
                    reason: e.to_string(),
                }
            })?),
            None => None,
        }
    } else {
        None
    };

    Ok(vec![RequestBody {
        body_type: body.mode.clone(),
        schema,
    }])
}

/// Maps query entries 1:1, preserving order.
///
/// The source `disabled` flag is deliberately not consulted here, matching
/// upstream behavior (headers do consult it, queries do not).
pub(crate) fn convert_query(url: &SourceUrl) -> Vec<QueryParam> {
    url.query()
        .iter()
        .map(|q| QueryParam::new(q.key.clone(), q.value.clone().unwrap_or_default()))
        .collect()
}

/// Maps header entries 1:1, preserving order.
///
/// `required` is the negation of the source `disabled` flag; the schema is
/// always an empty object since headers carry none on import.
pub(crate) fn convert_headers(headers: &[SourceHeader]) -> Vec<HeaderParam> {
    headers
        .iter()
        .map(|h| {
            HeaderParam::new(
                h.key.clone(),
                h.description.clone().unwrap_or_default(),
                !h.disabled,
            )
        })
        .collect()
}
