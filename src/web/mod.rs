//! Web server: HTML pages for every route plus a JSON API over the same
//! wizard, breadcrumb and proposal section state.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post, put},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::routes::ROUTES;

pub mod dto;
pub mod error;
pub mod openapi;
pub mod pages;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use state::AppState;

/// Build the router with all pages and API routes
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/api/v1/health", get(routes::health::health))
        .route("/api/v1/steps", get(routes::steps::list))
        .route("/api/v1/breadcrumbs", get(routes::breadcrumbs::get_trail))
        .route("/api/v1/sections", get(routes::sections::list))
        .route("/api/v1/sections/:id", get(routes::sections::get_one))
        .route(
            "/api/v1/sections/:id/toggle-expand",
            post(routes::sections::toggle_expand),
        )
        .route(
            "/api/v1/sections/:id/toggle-edit",
            post(routes::sections::toggle_edit),
        )
        .route(
            "/api/v1/sections/:id/draft",
            put(routes::sections::update_draft),
        )
        .route("/api/v1/sections/:id/save", post(routes::sections::save))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .layer(cors);

    let mut site = Router::new()
        .route(
            "/summary/sections/:id/expand",
            post(routes::site::expand_section),
        )
        .route(
            "/summary/sections/:id/edit",
            post(routes::site::edit_section),
        )
        .route(
            "/summary/sections/:id/save",
            post(routes::site::save_section),
        );
    for entry in ROUTES {
        site = site.route(entry.path, get(routes::site::page));
    }

    api.merge(site)
        .fallback(routes::site::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the web server and run until Ctrl-C
pub async fn serve(state: AppState, host: &str, port: u16) -> Result<()> {
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("Invalid listen address {host}:{port}"))?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Modeller listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down web server");
        })
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> (AppState, Router) {
        let state = AppState::new(Config::default()).unwrap();
        (state.clone(), build_router(state))
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_every_route_renders() {
        let (_, router) = app();
        for entry in ROUTES {
            let response = router
                .clone()
                .oneshot(Request::get(entry.path).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{}", entry.path);
            let html = body_string(response).await;
            assert!(html.contains(r#"aria-current="page""#), "{}", entry.path);
        }
    }

    #[tokio::test]
    async fn test_unknown_page_is_404_html() {
        let (_, router) = app();
        let response = router
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_string(response).await.contains("Page not found"));
    }

    #[tokio::test]
    async fn test_summary_form_save_redirects_and_commits() {
        let (state, router) = app();

        let response = router
            .clone()
            .oneshot(
                Request::post("/summary/sections/next-steps/edit")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/summary");

        let response = router
            .oneshot(
                Request::post("/summary/sections/next-steps/save")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("content=Kickoff+next+week"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let accordion = state.accordion.read().await;
        let section = accordion.get("next-steps").unwrap();
        assert_eq!(section.content, "Kickoff next week");
        assert!(!section.is_editing());
    }

    #[tokio::test]
    async fn test_api_toggle_expand_unknown_section_is_404() {
        let (_, router) = app();
        let response = router
            .oneshot(
                Request::post("/api/v1/sections/missing/toggle-expand")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_api_breadcrumbs_query() {
        let (_, router) = app();
        let response = router
            .oneshot(
                Request::get("/api/v1/breadcrumbs?path=/calculate-roi")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["items"].as_array().unwrap().len(), 7);
        assert_eq!(json["items"][6]["active"], true);
    }

    #[tokio::test]
    async fn test_openapi_document_served() {
        let (_, router) = app();
        let response = router
            .oneshot(
                Request::get("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
