//! Decoding HTTP requests into [`QueryRequest`]s.
//!
//! GET carries `query`, `variables` (JSON text) and `operationName` in the
//! query string. POST carries either a JSON body with the same keys or, with
//! `application/graphql`, the raw document.

use folio_query::QueryRequest;
use serde_json::{Map, Value};

use crate::error::RequestError;

/// Split a request URL into its path and raw query string.
#[must_use]
pub fn split_url(url: &str) -> (&str, &str) {
    url.split_once('?').unwrap_or((url, ""))
}

/// Decode the query string of a GET request.
///
/// # Errors
///
/// Returns `RequestError::BadRequest` if a parameter is not valid
/// percent-encoding, `variables` is not a JSON object, or `query` is missing.
pub fn decode_get(query_string: &str) -> Result<QueryRequest, RequestError> {
    let mut query = None;
    let mut variables = None;
    let mut operation_name = None;

    for pair in query_string.split('&').filter(|p| !p.is_empty()) {
        let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
        let value = decode_component(raw)?;
        match key {
            "query" => query = Some(value),
            "variables" => variables = parse_variables(&value)?,
            "operationName" => operation_name = Some(value).filter(|v| !v.is_empty()),
            _ => {}
        }
    }

    Ok(QueryRequest {
        query: query
            .filter(|q| !q.trim().is_empty())
            .ok_or_else(missing_query)?,
        variables,
        operation_name,
    })
}

/// Decode a POST body according to its `Content-Type`.
///
/// # Errors
///
/// Returns `RequestError::BadRequest` for an unsupported content type, a body
/// that is not a valid request object, or an empty document.
pub fn decode_post(content_type: Option<&str>, body: &str) -> Result<QueryRequest, RequestError> {
    let media_type = content_type
        .and_then(|ct| ct.split(';').next())
        .map(|ct| ct.trim().to_ascii_lowercase());

    let request = match media_type.as_deref() {
        None | Some("application/json") => serde_json::from_str::<QueryRequest>(body)
            .map_err(|e| RequestError::BadRequest(format!("Invalid JSON body: {e}")))?,
        Some("application/graphql") => QueryRequest::new(body),
        Some(other) => {
            return Err(RequestError::BadRequest(format!(
                "Unsupported content type \"{other}\"; use application/json or application/graphql"
            )));
        }
    };

    if request.query.trim().is_empty() {
        return Err(missing_query());
    }
    Ok(request)
}

fn decode_component(raw: &str) -> Result<String, RequestError> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| RequestError::BadRequest(format!("Invalid URL encoding: {e}")))
}

fn parse_variables(text: &str) -> Result<Option<Map<String, Value>>, RequestError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(Some(map)),
        Ok(Value::Null) => Ok(None),
        Ok(_) => Err(RequestError::BadRequest(
            "Variables must be a JSON object".into(),
        )),
        Err(e) => Err(RequestError::BadRequest(format!(
            "Variables are invalid JSON: {e}"
        ))),
    }
}

fn missing_query() -> RequestError {
    RequestError::BadRequest("Must provide query string.".into())
}
