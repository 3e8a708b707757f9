//! Proposal section endpoints.
//!
//! Each mutating endpoint applies one accordion transition and returns the
//! updated section.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::web::dto::{DraftRequest, SectionResponse};
use crate::web::error::{ApiError, ErrorResponse};
use crate::web::state::AppState;

/// List all proposal sections
#[utoipa::path(
    get,
    path = "/api/v1/sections",
    tag = "Sections",
    responses(
        (status = 200, description = "Proposal sections in display order", body = Vec<SectionResponse>)
    )
)]
pub async fn list(State(state): State<AppState>) -> Json<Vec<SectionResponse>> {
    let accordion = state.accordion.read().await;
    Json(
        accordion
            .sections()
            .iter()
            .map(SectionResponse::from)
            .collect(),
    )
}

/// Get a single section
#[utoipa::path(
    get,
    path = "/api/v1/sections/{id}",
    tag = "Sections",
    params(
        ("id" = String, Path, description = "Section id")
    ),
    responses(
        (status = 200, description = "Section details", body = SectionResponse),
        (status = 404, description = "Section not found", body = ErrorResponse)
    )
)]
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SectionResponse>, ApiError> {
    let accordion = state.accordion.read().await;
    let section = accordion
        .get(&id)
        .ok_or_else(|| ApiError::section_not_found(&id))?;
    Ok(Json(SectionResponse::from(section)))
}

/// Expand a collapsed section or collapse an expanded one
#[utoipa::path(
    post,
    path = "/api/v1/sections/{id}/toggle-expand",
    tag = "Sections",
    params(
        ("id" = String, Path, description = "Section id")
    ),
    responses(
        (status = 200, description = "Updated section", body = SectionResponse),
        (status = 404, description = "Section not found", body = ErrorResponse)
    )
)]
pub async fn toggle_expand(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SectionResponse>, ApiError> {
    let mut accordion = state.accordion.write().await;
    let section = accordion
        .toggle_expand(&id)
        .ok_or_else(|| ApiError::section_not_found(&id))?;
    Ok(Json(SectionResponse::from(section)))
}

/// Start editing a section, or cancel an edit in progress
#[utoipa::path(
    post,
    path = "/api/v1/sections/{id}/toggle-edit",
    tag = "Sections",
    params(
        ("id" = String, Path, description = "Section id")
    ),
    responses(
        (status = 200, description = "Updated section", body = SectionResponse),
        (status = 404, description = "Section not found", body = ErrorResponse)
    )
)]
pub async fn toggle_edit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SectionResponse>, ApiError> {
    let mut accordion = state.accordion.write().await;
    let section = accordion
        .toggle_edit(&id)
        .ok_or_else(|| ApiError::section_not_found(&id))?;
    Ok(Json(SectionResponse::from(section)))
}

/// Record the latest editor value for a section being edited
#[utoipa::path(
    put,
    path = "/api/v1/sections/{id}/draft",
    tag = "Sections",
    params(
        ("id" = String, Path, description = "Section id")
    ),
    request_body = DraftRequest,
    responses(
        (status = 200, description = "Updated section", body = SectionResponse),
        (status = 404, description = "Section not found", body = ErrorResponse)
    )
)]
pub async fn update_draft(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<DraftRequest>,
) -> Result<Json<SectionResponse>, ApiError> {
    let mut accordion = state.accordion.write().await;
    let section = accordion
        .edit_content(&id, request.content)
        .ok_or_else(|| ApiError::section_not_found(&id))?;
    Ok(Json(SectionResponse::from(section)))
}

/// Commit the draft as the section content
#[utoipa::path(
    post,
    path = "/api/v1/sections/{id}/save",
    tag = "Sections",
    params(
        ("id" = String, Path, description = "Section id")
    ),
    responses(
        (status = 200, description = "Updated section", body = SectionResponse),
        (status = 404, description = "Section not found", body = ErrorResponse)
    )
)]
pub async fn save(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SectionResponse>, ApiError> {
    let mut accordion = state.accordion.write().await;
    let section = accordion
        .save_content(&id)
        .ok_or_else(|| ApiError::section_not_found(&id))?;
    Ok(Json(SectionResponse::from(section)))
}
