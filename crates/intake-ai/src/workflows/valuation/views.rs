use chrono::NaiveDate;
use serde::Serialize;

use super::domains::CaseDomain;
use super::engine::{EstimationResult, Factor};
use super::policy::Confidence;

/// Presentation-ready estimate. Bounds stay raw numbers; currency formatting
/// and call-to-action rendering belong to the consumer.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateView {
    pub domain: &'static str,
    pub label: &'static str,
    pub low: f64,
    pub high: f64,
    pub factors: Vec<Factor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_label: Option<&'static str>,
    pub disclaimer: &'static str,
    pub estimated_on: NaiveDate,
}

impl EstimateView {
    pub fn from_result(
        domain: &CaseDomain,
        result: EstimationResult,
        estimated_on: NaiveDate,
    ) -> Self {
        Self {
            domain: domain.slug,
            label: domain.label,
            low: result.low,
            high: result.high,
            factors: result.factors,
            confidence: result.confidence,
            confidence_label: result.confidence.map(Confidence::label),
            disclaimer: domain.disclaimer,
            estimated_on,
        }
    }
}

/// Catalog entry describing one available domain.
#[derive(Debug, Clone, Serialize)]
pub struct DomainSummaryView {
    pub slug: &'static str,
    pub label: &'static str,
    pub steps: usize,
    pub fields: usize,
}

impl DomainSummaryView {
    pub fn from_domain(domain: &CaseDomain) -> Self {
        Self {
            slug: domain.slug,
            label: domain.label,
            steps: domain.intake.step_count(),
            fields: domain.engine.table().field_count(),
        }
    }
}
