//! HTML pages and the form actions of the Summary page.

use axum::{
    extract::{Path, State},
    http::{Method, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use crate::routes;
use crate::web::error::ApiError;
use crate::web::state::AppState;
use crate::wizard::WizardStep;

/// Render the page registered for the request path
pub async fn page(State(state): State<AppState>, uri: Uri) -> Result<Html<String>, ApiError> {
    let entry = routes::lookup(uri.path())?;
    let accordion = state.accordion.read().await;
    let html = state.pages.render_route(entry, &accordion)?;
    Ok(Html(html))
}

/// Fallback for paths outside the route table.
///
/// A GET whose path only differs from a page by a trailing slash still
/// renders that page.
pub async fn not_found(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method == Method::GET {
        if let Ok(entry) = routes::lookup(uri.path()) {
            let accordion = state.accordion.read().await;
            return match state.pages.render_route(entry, &accordion) {
                Ok(html) => Html(html).into_response(),
                Err(e) => ApiError::from(e).into_response(),
            };
        }
    }

    match state.pages.render_not_found(uri.path()) {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

#[derive(Debug, Deserialize)]
pub struct SaveForm {
    #[serde(default)]
    pub content: String,
}

fn back_to_summary() -> Redirect {
    Redirect::to(WizardStep::Summary.route())
}

pub async fn expand_section(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, ApiError> {
    state
        .accordion
        .write()
        .await
        .toggle_expand(&id)
        .ok_or_else(|| ApiError::section_not_found(&id))?;
    Ok(back_to_summary())
}

pub async fn edit_section(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, ApiError> {
    state
        .accordion
        .write()
        .await
        .toggle_edit(&id)
        .ok_or_else(|| ApiError::section_not_found(&id))?;
    Ok(back_to_summary())
}

/// The form carries the final editor value, which is committed directly
pub async fn save_section(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<SaveForm>,
) -> Result<Redirect, ApiError> {
    let mut accordion = state.accordion.write().await;
    accordion
        .edit_content(&id, form.content)
        .ok_or_else(|| ApiError::section_not_found(&id))?;
    accordion.save_content(&id);
    Ok(back_to_summary())
}
