pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/strategies", get(handlers::handle_list_strategies))
        .route("/api/v1/compare", post(handlers::handle_compare))
        .route(
            "/api/v1/compare/upload",
            post(handlers::handle_compare_upload),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::extraction::pdf::{tests::minimal_pdf, PdfExtractor};
    use crate::similarity::strategy::StrategyRegistry;

    const BOUNDARY: &str = "atsmatch-test-boundary";

    fn test_router() -> Router {
        router_with_env(&[])
    }

    fn router_with_env(vars: &[(&str, &str)]) -> Router {
        let config = Config::from_lookup(|key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        })
        .unwrap();
        let strategies = StrategyRegistry::new(config.strategy).unwrap();
        build_router(AppState {
            config,
            strategies,
            extractor: Arc::new(PdfExtractor),
        })
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn post_json(uri: &str, payload: Value) -> Response {
        test_router()
            .oneshot(
                Request::post(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Multipart body with an optional PDF `resume` part and text parts.
    fn multipart_body(resume: Option<&[u8]>, texts: &[(&str, &str)]) -> Vec<u8> {
        let mut body = Vec::new();
        if let Some(bytes) = resume {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"resume\"; \
                     filename=\"resume.pdf\"\r\nContent-Type: application/pdf\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(bytes);
            body.extend_from_slice(b"\r\n");
        }
        for (name, value) in texts {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    async fn post_multipart(body: Vec<u8>) -> Response {
        post_multipart_to(test_router(), body).await
    }

    async fn post_multipart_to(router: Router, body: Vec<u8>) -> Response {
        router
            .oneshot(
                Request::post("/api/v1/compare/upload")
                    .header(
                        header::CONTENT_TYPE,
                        format!("multipart/form-data; boundary={BOUNDARY}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_compare_scores_text() {
        let response = post_json(
            "/api/v1/compare",
            json!({
                "resume_text": "Experienced Python developer with machine learning skills",
                "jd_text": "Looking for a Python developer skilled in machine learning"
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["score_percent"], 57.14);
        assert_eq!(body["tier"], "moderate");
        assert_eq!(body["strategy"], "term_frequency");
        assert_eq!(body["resume_tokens"], 7);
        assert!(body["comparison_id"].is_string());
        assert!(body["message"].as_str().unwrap().starts_with("Good match"));
    }

    #[tokio::test]
    async fn test_compare_empty_text_is_zero_not_error() {
        let response = post_json(
            "/api/v1/compare",
            json!({ "resume_text": "", "jd_text": "Rust engineer" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["score_percent"], 0.0);
        assert_eq!(body["tier"], "low");
    }

    #[tokio::test]
    async fn test_compare_with_named_strategy() {
        let response = post_json(
            "/api/v1/compare",
            json!({
                "resume_text": "Rust engineer",
                "jd_text": "Rust engineer",
                "strategy": "tfidf_ngram"
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["strategy"], "tfidf_ngram");
        assert_eq!(body["score_percent"], 100.0);
    }

    #[tokio::test]
    async fn test_compare_unavailable_strategy_is_rejected() {
        let response = post_json(
            "/api/v1/compare",
            json!({
                "resume_text": "Rust engineer",
                "jd_text": "Rust engineer",
                "strategy": "sentence_embedding"
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"]["code"],
            "STRATEGY_UNAVAILABLE"
        );
    }

    #[tokio::test]
    async fn test_compare_unknown_strategy_is_rejected() {
        let response = post_json(
            "/api/v1/compare",
            json!({ "resume_text": "a", "jd_text": "b", "strategy": "bm25" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "UNKNOWN_STRATEGY");
    }

    #[tokio::test]
    async fn test_list_strategies() {
        let response = test_router()
            .oneshot(
                Request::get("/api/v1/strategies")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["default"], "term_frequency");
        assert_eq!(body["strategies"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_upload_non_pdf_fails_extraction() {
        let body = multipart_body(
            Some(b"plain text, not a pdf"),
            &[("jd_text", "Python developer")],
        );
        let response = post_multipart(body).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await["error"]["code"],
            "EXTRACTION_FAILED"
        );
    }

    #[tokio::test]
    async fn test_upload_missing_jd_is_validation_error() {
        let pdf = minimal_pdf("Python developer");
        let response = post_multipart(multipart_body(Some(&pdf), &[])).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_upload_missing_resume_is_validation_error() {
        let response = post_multipart(multipart_body(None, &[("jd_text", "Rust")])).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upload_pdf_is_scored() {
        let pdf = minimal_pdf("Python developer");
        let body = multipart_body(
            Some(&pdf),
            &[("jd_text", "Python developer"), ("strategy", "term_frequency")],
        );
        let response = post_multipart(body).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["score_percent"].as_f64().unwrap() > 0.0);
        assert!(body["keywords"]["matched"]
            .as_array()
            .unwrap()
            .contains(&json!("python")));
    }

    #[tokio::test]
    async fn test_upload_over_size_cap_is_payload_too_large() {
        let router = router_with_env(&[("MAX_UPLOAD_BYTES", "200")]);
        let oversized = vec![b'x'; 5 * 1024];
        let body = multipart_body(Some(&oversized), &[("jd_text", "Python developer")]);

        let response = post_multipart_to(router, body).await;
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            body_json(response).await["error"]["code"],
            "PAYLOAD_TOO_LARGE"
        );
    }

    #[tokio::test]
    async fn test_upload_under_size_cap_reaches_extraction() {
        let router = router_with_env(&[("MAX_UPLOAD_BYTES", "100000")]);
        let body = multipart_body(Some(b"not a pdf"), &[("jd_text", "Python developer")]);

        let response = post_multipart_to(router, body).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
