//! Breadcrumb trail lookup.

use axum::{extract::Query, Json};
use serde::Deserialize;

use crate::breadcrumb;
use crate::routes;
use crate::web::dto::BreadcrumbsResponse;
use crate::web::error::{ApiError, ErrorResponse};

#[derive(Debug, Deserialize)]
pub struct BreadcrumbsQuery {
    pub path: Option<String>,
}

/// Get the breadcrumb trail for a page
#[utoipa::path(
    get,
    path = "/api/v1/breadcrumbs",
    tag = "Wizard",
    params(
        ("path" = String, Query, description = "Page path, e.g. /summary")
    ),
    responses(
        (status = 200, description = "Breadcrumb trail", body = BreadcrumbsResponse),
        (status = 400, description = "Missing path parameter", body = ErrorResponse),
        (status = 404, description = "Unknown page", body = ErrorResponse)
    )
)]
pub async fn get_trail(
    Query(query): Query<BreadcrumbsQuery>,
) -> Result<Json<BreadcrumbsResponse>, ApiError> {
    let path = query
        .path
        .ok_or_else(|| ApiError::BadRequest("Query parameter 'path' is required".to_string()))?;
    let entry = routes::lookup(&path)?;
    let items = entry.breadcrumbs();

    Ok(Json(BreadcrumbsResponse {
        path: entry.path.to_string(),
        text: breadcrumb::render_text(&items),
        items,
    }))
}
