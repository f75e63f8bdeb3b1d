use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// 400 body text when the question is missing.
pub const EMPTY_QUERY_MESSAGE: &str = "กรุณาใส่คำถาม";

/// Prefix for the 500 answer body.
pub const ERROR_PREFIX: &str = "เกิดข้อผิดพลาด: ";

/// Detail shown on 500 when verbose errors are disabled.
pub const GENERIC_ERROR_DETAIL: &str = "internal error";

/// Request-level errors of the answer pipeline.
///
/// Only `EmptyQuery` is distinguished for the caller (400); every
/// external-service failure collapses into a single 500 response.
/// Response-shape problems are never errors; the response normalizer
/// recovers them to empty text.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("question required")]
    EmptyQuery,
    #[error("embedding failed: {0}")]
    Embedding(String),
    #[error("retrieval failed: {0}")]
    Retrieval(String),
    #[error("generation failed: {0}")]
    Generation(String),
}

impl ApiError {
    pub fn embedding<E: std::fmt::Display>(err: E) -> Self {
        ApiError::Embedding(err.to_string())
    }

    pub fn retrieval<E: std::fmt::Display>(err: E) -> Self {
        ApiError::Retrieval(err.to_string())
    }

    pub fn generation<E: std::fmt::Display>(err: E) -> Self {
        ApiError::Generation(err.to_string())
    }

    /// Builds the JSON answer body for this error.
    ///
    /// `verbose` controls whether the raw failure detail is surfaced to the
    /// caller; when disabled the 500 body carries a generic detail instead.
    pub fn into_answer_response(self, verbose: bool) -> axum::response::Response {
        match self {
            ApiError::EmptyQuery => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "answer": EMPTY_QUERY_MESSAGE })),
            )
                .into_response(),
            other => {
                let detail = if verbose {
                    other.to_string()
                } else {
                    GENERIC_ERROR_DETAIL.to_string()
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "answer": format!("{ERROR_PREFIX}{detail}") })),
                )
                    .into_response()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        self.into_answer_response(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn empty_query_maps_to_bad_request() {
        let response = ApiError::EmptyQuery.into_answer_response(false);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_text(response).await;
        assert!(body.contains(EMPTY_QUERY_MESSAGE));
    }

    #[test]
    fn service_failures_map_to_internal_error() {
        for err in [
            ApiError::Embedding("down".into()),
            ApiError::Retrieval("down".into()),
            ApiError::Generation("down".into()),
        ] {
            let response = err.into_answer_response(false);
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[tokio::test]
    async fn non_verbose_500_hides_the_failure_detail() {
        let response =
            ApiError::Generation("upstream exploded".into()).into_answer_response(false);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_text(response).await;
        assert!(body.contains(&format!("{ERROR_PREFIX}{GENERIC_ERROR_DETAIL}")));
        assert!(!body.contains("upstream exploded"));
    }

    #[tokio::test]
    async fn verbose_500_carries_the_raw_detail() {
        let response =
            ApiError::Generation("upstream exploded".into()).into_answer_response(true);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_text(response).await;
        assert!(body.contains(ERROR_PREFIX));
        assert!(body.contains("generation failed: upstream exploded"));
    }
}
