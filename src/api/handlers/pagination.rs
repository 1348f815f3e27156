//! Pagination request handlers.

use axum::{Json, extract::State};
use tracing::debug;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::PAGINATION_TAG;
use crate::api::dto::{ErrorResponse, RangeQuery, SimplePagerResponse, SimpleQuery};
use crate::error::AppResult;
use crate::pagination::{PageRange, PaginationBar, SimplePager};
use crate::state::AppState;
use crate::utils::validate::ValidatedQuery;

/// Pagination routes, nested under `/api/pagination`.
pub fn pagination_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(page_range))
        .routes(routes!(pagination_bar))
        .routes(routes!(simple_pager))
}

/// GET /api/pagination/range - Compact page range with ellipsis markers
#[utoipa::path(
    get,
    path = "/range",
    tag = PAGINATION_TAG,
    params(RangeQuery),
    responses(
        (status = 200, description = "Computed page range", body = PageRange),
        (status = 400, description = "Invalid query", body = ErrorResponse)
    )
)]
async fn page_range(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<RangeQuery>,
) -> AppResult<Json<PageRange>> {
    let request = query.resolve(state.pagination())?;
    let range = request.compute()?;
    debug!(
        total_count = request.total_count,
        page_size = request.page_size,
        current_page = request.current_page,
        total_pages = range.total_pages,
        items = range.items.len(),
        "Computed page range"
    );
    Ok(Json(range))
}

/// GET /api/pagination/bar - Full bar controls (previous, pages, next)
#[utoipa::path(
    get,
    path = "/bar",
    tag = PAGINATION_TAG,
    params(RangeQuery),
    responses(
        (status = 200, description = "Pagination bar controls", body = PaginationBar),
        (status = 400, description = "Invalid query", body = ErrorResponse)
    )
)]
async fn pagination_bar(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<RangeQuery>,
) -> AppResult<Json<PaginationBar>> {
    let range = query.resolve(state.pagination())?.compute()?;
    Ok(Json(PaginationBar::new(range)))
}

/// GET /api/pagination/simple - "previous / current of total / next" pager
#[utoipa::path(
    get,
    path = "/simple",
    tag = PAGINATION_TAG,
    params(SimpleQuery),
    responses(
        (status = 200, description = "Simple pager state", body = SimplePagerResponse),
        (status = 400, description = "Invalid query", body = ErrorResponse)
    )
)]
async fn simple_pager(
    ValidatedQuery(query): ValidatedQuery<SimpleQuery>,
) -> AppResult<Json<SimplePagerResponse>> {
    let pager = SimplePager::new(query.current_page, query.total_pages);
    Ok(Json(pager.into()))
}
