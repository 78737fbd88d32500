use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use casino_review::catalog::{catalog_router, CatalogRepository, CatalogService};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_catalog_routes<R>(service: Arc<CatalogService<R>>) -> axum::Router
where
    R: CatalogRepository + 'static,
{
    catalog_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::catalog_service;
    use axum::body::Body;
    use axum::http::Request;
    use casino_review::config::CatalogConfig;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tower::ServiceExt;

    fn app(ready: bool) -> axum::Router {
        let service =
            catalog_service(&CatalogConfig::default(), None).expect("demo catalog loads");
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        with_catalog_routes(service).layer(Extension(state))
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
            .await
            .expect("body reads");
        serde_json::from_slice(&body).expect("body is JSON")
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn readiness_follows_flag() {
        let response = app(false)
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let flag = Arc::new(AtomicBool::new(false));
        flag.store(true, Ordering::Release);
        let state = AppState {
            readiness: flag,
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        let response = readiness_endpoint(Extension(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn metrics_render_as_plain_text() {
        let response = app(true)
            .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; version=0.0.4"
        );
    }

    #[tokio::test]
    async fn catalog_routes_serve_demo_data() {
        let response = app(true)
            .oneshot(Request::get("/api/v1/casinos").body(Body::empty()).unwrap())
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = json_body(response).await;
        assert_eq!(payload["totalCount"], json!(3));
        assert_eq!(payload["items"][0]["casino"]["id"], json!("northern-lights"));
    }

    #[tokio::test]
    async fn casino_csv_is_merged_into_the_demo_catalog() {
        let path = std::env::temp_dir().join(format!(
            "casino-review-import-{}.csv",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "id,name,slug,description,website_url,logo_url,safety_index,license,established_year,payment_methods,supported_currencies,game_providers,features,restricted_countries,is_active,is_featured\n\
             crimson-crown,Crimson Crown,,,https://crimson.example,,9.6,,,Bitcoin,,,,,yes,no\n",
        )
        .expect("csv fixture written");
        let config = CatalogConfig {
            casinos_csv: Some(path.clone()),
            ..CatalogConfig::default()
        };
        let service = catalog_service(&config, None).expect("catalog loads with csv");
        std::fs::remove_file(&path).ok();
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };

        let response = with_catalog_routes(service)
            .layer(Extension(state))
            .oneshot(Request::get("/api/v1/casinos").body(Body::empty()).unwrap())
            .await
            .expect("route executes");

        let payload = json_body(response).await;
        assert_eq!(payload["totalCount"], json!(4));
        assert_eq!(payload["items"][0]["casino"]["id"], json!("crimson-crown"));
    }

    #[tokio::test]
    async fn unknown_game_is_not_found() {
        let response = app(true)
            .oneshot(
                Request::get("/api/v1/games/mega-moolah")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
