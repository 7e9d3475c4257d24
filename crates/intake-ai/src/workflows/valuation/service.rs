use chrono::Local;

use super::domains::{CaseDomain, DomainRegistry};
use super::intake::CaseSubmission;
use super::views::{DomainSummaryView, EstimateView};

/// Service resolving case domains and turning submissions into estimates.
///
/// Holds only the immutable registry, so one instance serves concurrent
/// requests without synchronization.
pub struct ValuationService {
    registry: DomainRegistry,
}

impl ValuationService {
    pub fn new(registry: DomainRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &DomainRegistry {
        &self.registry
    }

    /// Catalog summaries in slug order.
    pub fn domains(&self) -> Vec<DomainSummaryView> {
        self.registry
            .domains()
            .map(DomainSummaryView::from_domain)
            .collect()
    }

    pub fn domain(&self, slug: &str) -> Result<&CaseDomain, ValuationServiceError> {
        self.registry
            .get(slug)
            .ok_or_else(|| ValuationServiceError::UnknownDomain(slug.to_string()))
    }

    /// Run one submission through a domain's engine. The estimate is stamped
    /// with the submission date when provided, today otherwise.
    pub fn estimate(
        &self,
        slug: &str,
        submission: CaseSubmission,
    ) -> Result<EstimateView, ValuationServiceError> {
        let domain = self.domain(slug)?;
        let estimated_on = submission
            .submitted_on
            .unwrap_or_else(|| Local::now().date_naive());

        let profile = submission.into_profile();
        let result = domain.engine.estimate(&profile);

        Ok(EstimateView::from_result(domain, result, estimated_on))
    }
}

/// Error raised by the valuation service.
#[derive(Debug, thiserror::Error)]
pub enum ValuationServiceError {
    #[error("unknown case domain '{0}'")]
    UnknownDomain(String),
}
