//! Conversion of errors into HTTP responses.
//!
//! `AppError` maps onto a status code and an [`ErrorResponse`] body.
//! [`global_error_handler`] catches error responses produced outside the
//! handlers (unknown routes, wrong methods) and gives them the same shape.

use axum::{
    Json,
    extract::Request,
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use super::RequestId;
use crate::api::dto::ErrorResponse;
use crate::error::AppError;

/// Status code for an `AppError` variant.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::Validation { .. }
        | AppError::ValidationErrors { .. }
        | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::Configuration { .. } | AppError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Error code string for an `AppError` variant.
pub fn error_to_code(error: &AppError) -> &'static str {
    match error {
        AppError::Validation { .. } | AppError::ValidationErrors { .. } => "VALIDATION_ERROR",
        AppError::BadRequest { .. } => "BAD_REQUEST",
        AppError::Configuration { .. } => "CONFIGURATION_ERROR",
        AppError::Internal { .. } => "INTERNAL_ERROR",
    }
}

fn error_body(error: &AppError) -> ErrorResponse {
    let code = error_to_code(error);
    match error {
        AppError::Validation { field, .. } => {
            ErrorResponse::new(code, &error.to_string()).with_details(json!({ "field": field }))
        }
        AppError::ValidationErrors { errors } => {
            ErrorResponse::new(code, "Request validation failed")
                .with_details(json!({ "errors": errors }))
        }
        AppError::BadRequest { message } => ErrorResponse::new(code, message),
        AppError::Configuration { key, .. } => {
            ErrorResponse::new(code, &format!("Configuration error: {}", key))
                .with_details(json!({ "key": key }))
        }
        // Source chains stay in the logs.
        AppError::Internal { .. } => ErrorResponse::new(code, "An internal error occurred"),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);
        if status.is_server_error() {
            error!(error = ?self, "Request failed");
        }

        (status, Json(error_body(&self))).into_response()
    }
}

fn default_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::NOT_FOUND => "The requested resource was not found",
        StatusCode::METHOD_NOT_ALLOWED => "HTTP method not allowed for this endpoint",
        StatusCode::BAD_REQUEST => "Bad request - invalid or malformed request",
        _ => status.canonical_reason().unwrap_or("An unknown error occurred"),
    }
}

fn status_code_name(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(|reason| reason.to_uppercase().replace([' ', '-'], "_"))
        .unwrap_or_else(|| "UNKNOWN_ERROR".to_string())
}

/// Rewrite non-JSON error responses into an [`ErrorResponse`] body.
///
/// Responses that are already JSON (including every `AppError`) pass
/// through untouched.
pub async fn global_error_handler(request: Request, next: Next) -> Response {
    let request_id = request.extensions().get::<RequestId>().cloned();
    let response = next.run(request).await;
    let status = response.status();

    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"));
    if is_json {
        return response;
    }

    let (_parts, body) = response.into_parts();
    let original = axum::body::to_bytes(body, 64 * 1024)
        .await
        .map(|bytes| String::from_utf8_lossy(&bytes).trim().to_string())
        .unwrap_or_default();

    let message = if original.is_empty() {
        default_message(status).to_string()
    } else {
        original
    };

    let mut error_response = ErrorResponse::new(&status_code_name(status), &message);
    if let Some(RequestId(id)) = request_id {
        error_response = error_response.with_request_id(&id);
    }

    (status, Json(error_response)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationFieldError;
    use axum::{Router, body::Body, middleware, routing::get};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_codes() {
        let validation = AppError::Validation {
            field: "page_size".to_string(),
            reason: "too big".to_string(),
        };
        assert_eq!(error_to_status_code(&validation), StatusCode::BAD_REQUEST);
        assert_eq!(error_to_code(&validation), "VALIDATION_ERROR");

        let bad_request = AppError::BadRequest {
            message: "missing total_count".to_string(),
        };
        assert_eq!(error_to_status_code(&bad_request), StatusCode::BAD_REQUEST);
        assert_eq!(error_to_code(&bad_request), "BAD_REQUEST");

        let internal = AppError::Internal {
            source: anyhow::anyhow!("boom"),
        };
        assert_eq!(
            error_to_status_code(&internal),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(error_to_code(&internal), "INTERNAL_ERROR");

        let configuration = AppError::Configuration {
            key: "pagination".to_string(),
            source: anyhow::anyhow!("bad"),
        };
        assert_eq!(error_to_code(&configuration), "CONFIGURATION_ERROR");
    }

    #[tokio::test]
    async fn test_validation_errors_body_lists_fields() {
        let error = AppError::ValidationErrors {
            errors: vec![ValidationFieldError {
                field: "page_size".to_string(),
                message: "page_size must be at least 1".to_string(),
            }],
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["details"]["errors"][0]["field"], "page_size");
    }

    #[tokio::test]
    async fn test_internal_error_hides_source() {
        let response = AppError::Internal {
            source: anyhow::anyhow!("secret detail"),
        }
        .into_response();

        let json = body_json(response).await;
        assert_eq!(json["message"], "An internal error occurred");
        assert!(!json.to_string().contains("secret detail"));
    }

    #[tokio::test]
    async fn test_global_handler_wraps_plain_404() {
        let app = Router::new()
            .route("/exists", get(|| async { "ok" }))
            .layer(middleware::from_fn(global_error_handler));

        let request = Request::builder()
            .uri("/missing")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "The requested resource was not found");
    }

    #[test]
    fn test_status_code_name() {
        assert_eq!(status_code_name(StatusCode::METHOD_NOT_ALLOWED), "METHOD_NOT_ALLOWED");
        assert_eq!(status_code_name(StatusCode::NOT_FOUND), "NOT_FOUND");
    }
}
