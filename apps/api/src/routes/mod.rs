pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::applications::handlers as applications;
use crate::catalog::handlers as catalog;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/jobs", get(catalog::handle_list_jobs))
        .route("/api/jobs/facets", get(catalog::handle_facets))
        .route(
            "/api/applications",
            post(applications::handle_submit_application),
        )
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::Config;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(AppState::new(Catalog::seeded(), Config::default()))
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "jobboard-api");
        assert_eq!(body["jobs"], 6);
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let response = app()
            .oneshot(Request::builder().uri("/api/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Not found");
    }

    #[tokio::test]
    async fn test_wrong_method_is_rejected() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/jobs")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
