use crate::cli::ServeArgs;
use crate::infra::{build_service, AppState};
use crate::routes::with_valuation_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use intake_ai::config::AppConfig;
use intake_ai::error::AppError;
use intake_ai::telemetry;
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

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let valuation_service = Arc::new(build_service(&config.valuation)?);
    let domain_count = valuation_service.registry().len();

    let app = with_valuation_routes(valuation_service.clone())
        .layer(Extension(app_state))
        .layer(Extension(valuation_service))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, domain_count, "case intake valuation service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
