//! Authored case domains: each module turns one practice area's settlement
//! heuristics into a rule table, policy, and intake form.

use std::collections::BTreeMap;

use super::engine::EstimationEngine;
use super::intake::IntakeForm;
use super::policy::PolicyError;
use super::rules::TableError;

mod asbestos;
mod clergy_abuse;
mod medical_malpractice;
mod rideshare;
mod talc;

/// Everything needed to run one case domain.
#[derive(Debug, Clone)]
pub struct CaseDomain {
    pub slug: &'static str,
    pub label: &'static str,
    pub disclaimer: &'static str,
    pub intake: IntakeForm,
    pub engine: EstimationEngine,
}

/// Raised when an authored domain fails validation at startup.
#[derive(Debug, thiserror::Error)]
pub enum DomainConfigError {
    #[error("domain '{domain}' rule table is invalid: {source}")]
    Table {
        domain: &'static str,
        #[source]
        source: TableError,
    },
    #[error("domain '{domain}' policy is invalid: {source}")]
    Policy {
        domain: &'static str,
        #[source]
        source: PolicyError,
    },
    #[error("domain slug '{slug}' is registered twice")]
    DuplicateSlug { slug: &'static str },
}

/// Immutable catalog of case domains, shared read-only across requests.
#[derive(Debug, Clone)]
pub struct DomainRegistry {
    domains: BTreeMap<&'static str, CaseDomain>,
}

impl DomainRegistry {
    /// The full authored catalog. Fails fast if any domain's table or policy
    /// is malformed, so a bad edit never reaches an estimate.
    pub fn standard() -> Result<Self, DomainConfigError> {
        Self::from_domains(vec![
            talc::definition()?,
            asbestos::definition()?,
            rideshare::definition()?,
            medical_malpractice::definition()?,
            clergy_abuse::definition()?,
        ])
    }

    pub fn from_domains(domains: Vec<CaseDomain>) -> Result<Self, DomainConfigError> {
        let mut catalog = BTreeMap::new();
        for domain in domains {
            let slug = domain.slug;
            if catalog.insert(slug, domain).is_some() {
                return Err(DomainConfigError::DuplicateSlug { slug });
            }
        }

        Ok(Self { domains: catalog })
    }

    pub fn get(&self, slug: &str) -> Option<&CaseDomain> {
        self.domains.get(slug)
    }

    /// Domains in slug order.
    pub fn domains(&self) -> impl Iterator<Item = &CaseDomain> {
        self.domains.values()
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}
