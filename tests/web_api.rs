//! Integration tests for the web server router.
//!
//! Requests go through `build_router` in-process with `tower::ServiceExt`, so
//! no port is bound.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use compute_modeller::accordion::SectionSpec;
use compute_modeller::config::Config;
use compute_modeller::web::dto::{BreadcrumbsResponse, SectionResponse, StepResponse};
use compute_modeller::web::error::ErrorResponse;
use compute_modeller::web::{build_router, AppState};

// ─── Test Context ─────────────────────────────────────────────────────────────

fn router() -> Router {
    let mut config = Config::default();
    config.proposal.sections = vec![
        SectionSpec {
            id: "overview".to_string(),
            title: "Overview".to_string(),
            content: "Initial overview".to_string(),
        },
        SectionSpec {
            id: "costs".to_string(),
            title: "Costs".to_string(),
            content: "Initial costs".to_string(),
        },
    ];
    build_router(AppState::new(config).expect("Failed to build app state"))
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, String) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn parse<T: DeserializeOwned>(body: &str) -> T {
    serde_json::from_str(body).unwrap_or_else(|e| panic!("Bad JSON ({e}): {body}"))
}

// ─── Wizard and breadcrumbs ───────────────────────────────────────────────────

#[tokio::test]
async fn test_steps_in_order() {
    let router = router();
    let (status, body) = send(&router, Method::GET, "/api/v1/steps", None).await;
    assert_eq!(status, StatusCode::OK);

    let steps: Vec<StepResponse> = parse(&body);
    let routes: Vec<&str> = steps.iter().map(|s| s.route.as_str()).collect();
    assert_eq!(
        routes,
        vec![
            "/",
            "/build-pipeline",
            "/simulate",
            "/sku-recommendations",
            "/cost-questions",
            "/summary",
            "/calculate-roi",
        ]
    );
}

#[tokio::test]
async fn test_breadcrumbs_for_admin_page() {
    let router = router();
    let (status, body) = send(
        &router,
        Method::GET,
        "/api/v1/breadcrumbs?path=/admin/skus",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let trail: BreadcrumbsResponse = parse(&body);
    assert_eq!(trail.text, "Home / Admin / [SKU Catalog]");
    assert_eq!(trail.items.iter().filter(|i| i.active).count(), 1);
}

#[tokio::test]
async fn test_breadcrumbs_for_unknown_route() {
    let router = router();
    let (status, body) = send(
        &router,
        Method::GET,
        "/api/v1/breadcrumbs?path=/nowhere",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: ErrorResponse = parse(&body);
    assert_eq!(error.error, "not_found");
}

#[tokio::test]
async fn test_breadcrumbs_without_path_is_json_bad_request() {
    let router = router();
    let (status, body) = send(&router, Method::GET, "/api/v1/breadcrumbs", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = parse(&body);
    assert_eq!(error.error, "bad_request");
    assert!(error.message.contains("path"));
}

// ─── Proposal sections ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_edit_and_save_section_over_api() {
    let router = router();

    let (status, body) = send(
        &router,
        Method::POST,
        "/api/v1/sections/costs/toggle-edit",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let section: SectionResponse = parse(&body);
    assert_eq!(section.state, "collapsed_editing");
    assert_eq!(section.draft.as_deref(), Some("Initial costs"));

    let (status, _) = send(
        &router,
        Method::PUT,
        "/api/v1/sections/costs/draft",
        Some(r#"{"content":"Revised costs"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&router, Method::POST, "/api/v1/sections/costs/save", None).await;
    assert_eq!(status, StatusCode::OK);
    let section: SectionResponse = parse(&body);
    assert_eq!(section.state, "collapsed");
    assert_eq!(section.content, "Revised costs");
    assert!(section.draft.is_none());

    // Other sections untouched
    let (_, body) = send(&router, Method::GET, "/api/v1/sections/overview", None).await;
    let overview: SectionResponse = parse(&body);
    assert_eq!(overview.state, "expanded");
    assert_eq!(overview.content, "Initial overview");
}

#[tokio::test]
async fn test_toggle_expand_twice_restores_state() {
    let router = router();
    let uri = "/api/v1/sections/overview/toggle-expand";

    let (_, body) = send(&router, Method::POST, uri, None).await;
    assert!(!parse::<SectionResponse>(&body).expanded);
    let (_, body) = send(&router, Method::POST, uri, None).await;
    assert!(parse::<SectionResponse>(&body).expanded);
}

#[tokio::test]
async fn test_unknown_section_returns_404() {
    let router = router();
    let (status, body) = send(
        &router,
        Method::POST,
        "/api/v1/sections/missing/toggle-expand",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: ErrorResponse = parse(&body);
    assert!(error.message.contains("missing"));
}

// ─── HTML pages ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_summary_form_flow() {
    let router = router();

    let request = Request::post("/summary/sections/costs/expand")
        .body(Body::empty())
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/summary");

    let (status, html) = send(&router, Method::GET, "/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Initial costs"));
    assert!(html.contains(r#"<span aria-current="page">Summary</span>"#));
}

#[tokio::test]
async fn test_trailing_slash_renders_the_page() {
    let router = router();
    let (status, html) = send(&router, Method::GET, "/summary/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"<span aria-current="page">Summary</span>"#));
    assert!(html.contains("Step 6 of 7"));

    let (status, html) = send(&router, Method::GET, "/admin/users/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"<span aria-current="page">Users</span>"#));
}

#[tokio::test]
async fn test_post_to_page_path_with_slash_is_not_rendered() {
    let router = router();
    let (status, _) = send(&router, Method::POST, "/summary/", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_page_renders_404_html() {
    let router = router();
    let (status, html) = send(&router, Method::GET, "/does-not-exist", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Page not found"));
}

#[tokio::test]
async fn test_openapi_document_lists_section_paths() {
    let router = router();
    let (status, body) = send(&router, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);

    let doc: serde_json::Value = parse(&body);
    assert!(doc["paths"]["/api/v1/sections/{id}/save"].is_object());
}
