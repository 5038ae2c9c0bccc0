use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_operational_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use foreclosure_leads::config::AppConfig;
use foreclosure_leads::error::AppError;
use foreclosure_leads::telemetry;
use foreclosure_leads::workflows::leads::LeadScoringService;
use std::sync::atomic::{AtomicBool, Ordering};
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

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let min_days_old = config.pipeline.min_days_old;
    let max_days_old = config.pipeline.max_days_old;
    let scoring_service = Arc::new(LeadScoringService::new(config.pipeline.clone()));

    let app = with_operational_routes(scoring_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        min_days_old,
        max_days_old,
        "foreclosure lead service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
