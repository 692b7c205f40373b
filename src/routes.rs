use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::error::ApiError;
use crate::state::AppState;
use crate::translate::{TranslationRequest, TranslationResponse};

pub const SERVICE_TITLE: &str = "Langchain Groq Translation API";
pub const SERVICE_DESCRIPTION: &str =
    "A simple API server using Langchain Runnable Interface to translate texts into desired language.";
pub const SERVICE_VERSION: &str = "1.0";

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/translate", post(translate))
        // Health check
        .route("/api/health", get(health_check))
}

/// Full application with middleware, ready to serve.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "title": SERVICE_TITLE,
        "description": SERVICE_DESCRIPTION,
        "version": SERVICE_VERSION,
        "model": state.translator.model_name(),
    }))
}

async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslationRequest>, JsonRejection>,
) -> Result<Json<TranslationResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected translation request: {}", rejection.body_text());
        ApiError::from(rejection)
    })?;

    request
        .validate(state.config.llm_config.max_text_chars)
        .map_err(|reason| {
            warn!("Rejected translation request: {}", reason);
            ApiError::InvalidInput(reason)
        })?;

    info!(
        "Translating {} chars into {}",
        request.text.chars().count(),
        request.language
    );

    let translation = state
        .translator
        .translate(&request.language, &request.text)
        .await
        .map_err(|e| {
            error!("Translation failed: {:#}", e);
            ApiError::from(e)
        })?;

    Ok(Json(TranslationResponse { translation }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::agent::stateless_llm::mock_llm::MockLLM;
    use crate::config_manager::Config;

    fn router_with(llm: Arc<MockLLM>, config: Config) -> Router {
        app(AppState::with_llm(config, llm).unwrap())
    }

    fn post_translate(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/translate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_translate_returns_model_text() {
        let llm = Arc::new(MockLLM::replying("Bonjour"));
        let router = router_with(llm.clone(), Config::default());

        let (status, body) = send(
            router,
            post_translate(r#"{"language": "French", "text": "Hello"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"translation": "Bonjour"}));
        assert_eq!(llm.calls().len(), 1);
        assert_eq!(llm.calls()[0][0].content, "Translate the following into French:");
        assert_eq!(llm.calls()[0][1].content, "Hello");
    }

    #[tokio::test]
    async fn test_empty_completion_is_still_a_translation() {
        let llm = Arc::new(MockLLM::replying(""));
        let router = router_with(llm, Config::default());

        let (status, body) = send(
            router,
            post_translate(r#"{"language": "French", "text": "Hello"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"translation": ""}));
    }

    #[tokio::test]
    async fn test_upstream_failure_maps_to_500_with_detail() {
        let llm = Arc::new(MockLLM::failing("connection timeout"));
        let router = router_with(llm.clone(), Config::default());

        let (status, body) = send(
            router,
            post_translate(r#"{"language": "French", "text": "Hello"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"detail": "connection timeout"}));
        assert_eq!(llm.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_field_rejected_before_model_call() {
        let llm = Arc::new(MockLLM::replying("unused"));
        let router = router_with(llm.clone(), Config::default());

        let (status, body) = send(router, post_translate(r#"{"language": "French"}"#)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().unwrap().contains("text"));
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_non_string_field_rejected_before_model_call() {
        let llm = Arc::new(MockLLM::replying("unused"));
        let router = router_with(llm.clone(), Config::default());

        let (status, _) = send(
            router,
            post_translate(r#"{"language": 42, "text": "Hello"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_json_is_bad_request() {
        let llm = Arc::new(MockLLM::replying("unused"));
        let router = router_with(llm.clone(), Config::default());

        let (status, body) = send(router, post_translate("{not json")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].is_string());
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_content_type_rejected() {
        let llm = Arc::new(MockLLM::replying("unused"));
        let router = router_with(llm.clone(), Config::default());

        let request = Request::builder()
            .method("POST")
            .uri("/translate")
            .body(Body::from(r#"{"language": "French", "text": "Hello"}"#))
            .unwrap();
        let (status, _) = send(router, request).await;

        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_blank_language_rejected() {
        let llm = Arc::new(MockLLM::replying("unused"));
        let router = router_with(llm.clone(), Config::default());

        let (status, body) = send(
            router,
            post_translate(r#"{"language": " ", "text": "Hello"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body, json!({"detail": "language must not be empty"}));
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_text_over_limit_rejected() {
        let llm = Arc::new(MockLLM::replying("unused"));
        let mut config = Config::default();
        config.llm_config.max_text_chars = Some(3);
        let router = router_with(llm.clone(), config);

        let (status, body) = send(
            router,
            post_translate(r#"{"language": "French", "text": "Hello"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            json!({"detail": "text is 5 characters long, the limit is 3"})
        );
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_health_check_reports_model() {
        let router = router_with(Arc::new(MockLLM::replying("unused")), Config::default());

        let request = Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(router, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["model"], "mock-model");
        assert_eq!(body["title"], "Langchain Groq Translation API");
        assert_eq!(body["version"], "1.0");
    }
}
