use chrono::NaiveDate;
use intake_ai::config::ValuationConfig;
use intake_ai::error::AppError;
use intake_ai::workflows::valuation::{DomainRegistry, ValuationService};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Assembles the served catalog. Slugs in `INTAKE_DOMAINS` that match no
/// authored domain are dropped silently.
pub(crate) fn build_service(config: &ValuationConfig) -> Result<ValuationService, AppError> {
    let registry = DomainRegistry::standard()?;
    let registry = if config.enabled_domains.is_some() {
        let enabled = registry
            .domains()
            .filter(|domain| config.is_enabled(domain.slug))
            .cloned()
            .collect();
        DomainRegistry::from_domains(enabled)?
    } else {
        registry
    };

    Ok(ValuationService::new(registry))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
