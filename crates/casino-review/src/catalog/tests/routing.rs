use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::catalog::{CatalogService, CatalogServiceConfig};

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn send_json(method: &str, uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&payload).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn listing_route_applies_query_parameters() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(get("/api/v1/casinos?search=aurora&sort=name&direction=asc"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["totalCount"], json!(1));
    assert_eq!(payload["pageSize"], json!(20));
    assert_eq!(payload["items"][0]["casino"]["id"], json!("aurora"));
    assert_eq!(payload["items"][0]["rating"]["displaySafetyIndex"], json!("8.5"));
}

#[tokio::test]
async fn listing_route_rejects_malformed_numbers() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(get("/api/v1/casinos?minSafetyIndex=high"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload["error"].as_str().unwrap().contains("minSafetyIndex"));
}

#[tokio::test]
async fn casino_handler_returns_not_found_for_unknown_id() {
    let (service, _) = build_service();

    let response = crate::catalog::router::casino_handler::<crate::catalog::InMemoryCatalog>(
        State(service),
        Path("ghost".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], json!("casino 'ghost' not found"));
}

#[tokio::test]
async fn detail_route_reports_pros_and_cons() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(get("/api/v1/casinos/aurora"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["rating"]["safetyIndex"], json!(8.5));
    assert_eq!(payload["prosAndCons"]["cons"], json!(["Outdated website design"]));
    assert_eq!(payload["bonuses"][0]["bonusTypeLabel"], json!("Welcome Bonus"));
}

#[tokio::test]
async fn game_route_returns_detail() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(get("/api/v1/games/starburst"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["game"]["name"], json!("Starburst"));
    assert_eq!(payload["rating"]["source"], json!("fallback"));
}

#[tokio::test]
async fn review_submission_is_accepted_unpublished() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(send_json(
            "POST",
            "/api/v1/reviews",
            json!({
                "target": { "type": "casino", "id": "borealis" },
                "content": "Support answered in minutes",
                "overallRating": 8,
                "categories": { "customerSupport": 9 }
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let payload = read_json_body(response).await;
    assert_eq!(payload["isPublished"], json!(false));
    assert_eq!(payload["helpfulVotes"], json!(0));
}

#[tokio::test]
async fn invalid_review_returns_field_errors() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(send_json(
            "POST",
            "/api/v1/reviews",
            json!({
                "target": { "type": "game", "id": "starburst" },
                "content": "",
                "overallRating": 0
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    let fields: Vec<_> = payload["fields"]
        .as_array()
        .expect("field list")
        .iter()
        .map(|entry| entry["field"].as_str().unwrap().to_string())
        .collect();
    assert!(fields.contains(&"overallRating".to_string()));
    assert!(fields.contains(&"content".to_string()));
}

#[tokio::test]
async fn helpful_route_counts_votes() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(send_json("POST", "/api/v1/reviews/rev-b/helpful", json!({})))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["helpfulVotes"], json!(1));
}

#[tokio::test]
async fn admin_routes_create_and_conflict() {
    let (service, _) = build_service();
    let form = json!({
        "name": "Aurora",
        "websiteUrl": "https://aurora.example",
        "safetyIndex": "7.5"
    });

    let response = router_with_service(service.clone())
        .oneshot(send_json("POST", "/api/v1/admin/casinos", form))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = router_with_service(service)
        .oneshot(send_json(
            "POST",
            "/api/v1/admin/casinos",
            json!({
                "name": "Nova Spins",
                "websiteUrl": "https://nova.example",
                "safetyIndex": "7.5",
                "establishedYear": "2021"
            }),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload["id"], json!("nova-spins"));
}

#[tokio::test]
async fn expert_review_route_validates_categories() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(send_json(
            "PUT",
            "/api/v1/admin/casinos/aurora/expert-review",
            json!({
                "categories": { "bonuses": { "rating": "12" } },
                "summary": "Partial"
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn publish_route_returns_not_found_for_unknown_review() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(send_json(
            "POST",
            "/api/v1/admin/reviews/rev-missing/publish",
            json!({}),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn listing_returns_internal_error_when_store_is_down() {
    let service = Arc::new(
        CatalogService::new(
            Arc::new(UnavailableRepository),
            CatalogServiceConfig::default(),
        )
        .expect("config is valid"),
    );

    let response = crate::catalog::catalog_router(service)
        .oneshot(get("/api/v1/casinos"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
