use crate::cli::ServeArgs;
use crate::infra::{catalog_service, AppState};
use crate::routes::with_catalog_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use casino_review::config::AppConfig;
use casino_review::error::AppError;
use casino_review::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(catalog) = args.catalog.take() {
        config.catalog.snapshot_path = Some(catalog);
    }
    if let Some(csv) = args.casinos_csv.take() {
        config.catalog.casinos_csv = Some(csv);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let service = catalog_service(&config.catalog, None)?;
    info!(
        page_size = config.catalog.page_size,
        averaging = ?config.catalog.category_averaging,
        rank_by_aggregated = config.catalog.rank_by_aggregated,
        "catalog service configured"
    );

    let app = with_catalog_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "casino review api ready");

    axum::serve(listener, app).await?;
    Ok(())
}
