use axum::http::{StatusCode, header};
use dssgroup::AppState;
use dssgroup_contact::ContactRules;
use dssgroup_notification::Dispatcher;
use serde_json::json;

mod helpers;

use helpers::{body_json, body_string, get, send};

#[tokio::test]
async fn test_root_serves_index() {
    let app = helpers::app_without_notifications();

    let response = send(app, get("/")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/html; charset=utf-8"
    );
    assert!(body_string(response).await.contains("DSS Group"));
}

#[tokio::test]
async fn test_unknown_route_falls_back_to_index() {
    let app = helpers::app_without_notifications();

    let response = send(app, get("/services/security")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("id=\"contact-form\""));
}

#[tokio::test]
async fn test_static_asset_served_by_exact_path() {
    let app = helpers::app_without_notifications();

    let response = send(app, get("/css/site.css")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "public, max-age=31536000, immutable"
    );
}

#[tokio::test]
async fn test_missing_asset_is_not_cached_as_asset() {
    let app = helpers::app_without_notifications();

    let response = send(app, get("/img/missing.png")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "no-store, no-cache, must-revalidate, proxy-revalidate"
    );
}

#[tokio::test]
async fn test_health_reports_service() {
    let app = helpers::app_without_notifications();

    let response = send(app, get("/health")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"status": "healthy", "service": "DSS Group Website"})
    );
}

#[tokio::test]
async fn test_services_lists_configured_choices() {
    let rules = ContactRules::with_services(["Security Personnel Services", "Audit"]);
    let app = dssgroup::router(AppState::new(rules, Dispatcher::disabled()));

    let response = send(app, get("/api/services")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"services": [
            {"id": "security-personnel-services", "name": "Security Personnel Services"},
            {"id": "audit", "name": "Audit"}
        ]})
    );
}

#[tokio::test]
async fn test_head_on_page_is_allowed() {
    let app = helpers::app_without_notifications();
    let request = axum::http::Request::builder()
        .method("HEAD")
        .uri("/about")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/html; charset=utf-8"
    );
}
