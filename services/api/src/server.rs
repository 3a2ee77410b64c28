use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryCatalog};
use crate::routes::with_matching_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use policy_match::config::AppConfig;
use policy_match::error::AppError;
use policy_match::matching::MatchingService;
use policy_match::telemetry;
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

    telemetry::init(&config.telemetry, config.environment)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = InMemoryCatalog::load(args.catalog.as_deref())?;
    info!(
        programs = catalog.len(),
        source = args
            .catalog
            .as_deref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "built-in sample".to_string()),
        "program catalog loaded"
    );

    let matching_service = Arc::new(MatchingService::new(
        Arc::new(catalog),
        config.matching.clone(),
    ));

    let app = with_matching_routes(matching_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "policy matching service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
