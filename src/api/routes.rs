//! Router configuration for the API.

use std::time::Duration;

use axum::{Router, http::StatusCode, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{global_error_handler, logging_middleware, request_id_middleware};
use crate::state::AppState;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

/// Build the application router with all routes, docs and middleware.
///
/// # Routes
/// - `/api/pagination/{range,bar,simple}`
/// - `/health`, `/health/live`
/// - `/api-docs/openapi.json`, `/swagger-ui`
pub fn create_router(state: AppState) -> Router {
    let request_timeout = Duration::from_secs(state.server().request_timeout);

    let (router, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api/pagination", handlers::pagination::pagination_routes())
        .merge(handlers::health::health_routes())
        .split_for_parts();

    let router = router.merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, openapi));

    with_middleware(router, request_timeout).with_state(state)
}

/// Wrap a router in the API middleware stack.
///
/// # Middleware Order
/// Layers run last-added first:
/// 1. CORS and compression
/// 2. Request ID - generates or propagates `x-request-id`
/// 3. Logging - logs inside a span carrying the request id
/// 4. Error handler - turns bare error responses into `ErrorResponse` JSON
/// 5. Request timeout - answers 408, which the error handler then reshapes
fn with_middleware<S>(router: Router<S>, request_timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(middleware::from_fn(global_error_handler))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::middleware::REQUEST_ID_HEADER;
    use axum::{body::Body, http::Request, routing::get};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_timed_out_request_gets_error_body() {
        let slow = Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                "late"
            }),
        );
        let app = with_middleware(slow, Duration::from_millis(20));

        let request = Request::builder()
            .uri("/slow")
            .header(REQUEST_ID_HEADER, "req-slow")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["code"], "REQUEST_TIMEOUT");
        assert_eq!(json["request_id"], "req-slow");
    }
}
