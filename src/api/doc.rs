use utoipa::OpenApi;

pub const PAGINATION_TAG: &str = "Pagination";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pager",
        description = "Pagination range calculator API",
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
            crate::error::ValidationFieldError,
            crate::pagination::BarControl,
        )
    ),
    tags(
        (name = PAGINATION_TAG, description = "Page range, bar and simple pager endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
