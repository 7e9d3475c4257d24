//! Rule-based monetary estimation for case intake.
//!
//! A [`CaseDomain`] couples a declarative [`RuleTable`] with a [`Policy`] and an
//! [`IntakeForm`]; the [`EstimationEngine`] turns a [`CaseProfile`] of answers into a
//! low/high estimate together with the factors that shaped it. Domain tables live in
//! [`domains`] and are served over HTTP by [`valuation_router`].

pub mod domains;
pub mod engine;
pub mod intake;
pub mod policy;
pub mod profile;
pub mod router;
pub mod rules;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use domains::{CaseDomain, DomainConfigError, DomainRegistry};
pub use engine::{EstimationEngine, EstimationResult, Factor};
pub use intake::{CaseSubmission, IntakeError, IntakeForm, IntakeStep, IntakeWizard};
pub use policy::{
    BasePair, CapRule, Confidence, ConfidencePolicy, FloorRule, Policy, PolicyError,
    RangeStrategy, Rounding,
};
pub use profile::{CaseProfile, FieldValue};
pub use router::valuation_router;
pub use rules::{
    BaseRule, BaseSelector, Component, CostField, Effect, FieldGroup, RuleTable, ScoringRule,
    TableError, ValueMatch,
};
pub use service::{ValuationService, ValuationServiceError};
pub use views::{DomainSummaryView, EstimateView};
