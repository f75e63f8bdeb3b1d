use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use crate::state::AppState;

/// Static query page for manual testing from a browser.
const QUERY_PAGE: &str = include_str!("../../../static/rag_query.html");

pub async fn index() -> impl IntoResponse {
    Html(QUERY_PAGE)
}

/// `POST /rag_query`
///
/// Accepts the question as a urlencoded form field `query` or a JSON body
/// `{"query": "<text>"}`. Terminal states: 200 with the answer, 400 when the
/// question is empty, 500 on an external-service failure.
pub async fn rag_query(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let raw = extract_query(&headers, &body);

    match state.engine.answer(&raw).await {
        Ok(answer) => Json(json!({ "answer": answer.text })).into_response(),
        Err(err) => {
            tracing::error!("answer pipeline failed: {}", err);
            err.into_answer_response(state.config.verbose_errors)
        }
    }
}

/// Pulls the question out of the request body.
///
/// Form field takes precedence; a JSON body is tried when no form value is
/// present. A malformed JSON body is treated as "no value": logged, never
/// surfaced to the caller.
fn extract_query(headers: &HeaderMap, body: &str) -> String {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if content_type.starts_with("application/json") {
        return json_query(body);
    }

    if let Some(value) = form_value(body, "query") {
        if !value.trim().is_empty() {
            return value;
        }
    }

    json_query(body)
}

fn json_query(body: &str) -> String {
    if body.trim().is_empty() {
        return String::new();
    }
    match serde_json::from_str::<Value>(body) {
        Ok(value) => value
            .get("query")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        Err(err) => {
            tracing::debug!("ignoring malformed JSON body: {}", err);
            String::new()
        }
    }
}

fn form_value(body: &str, key: &str) -> Option<String> {
    for pair in body.split('&') {
        let Some((k, v)) = pair.split_once('=') else {
            continue;
        };
        let k = k.replace('+', " ");
        let Ok(k) = urlencoding::decode(&k) else {
            continue;
        };
        if k == key {
            return urlencoding::decode(&v.replace('+', " "))
                .ok()
                .map(|v| v.into_owned());
        }
    }
    None
}
