//! Institutional clergy abuse claims.
//!
//! This domain tracks one conceptual running total and derives its range
//! from spread factors at the end, reflecting how widely these settlements
//! vary around the weighted midpoint.

use super::super::engine::EstimationEngine;
use super::super::intake::{IntakeForm, IntakeStep};
use super::super::policy::{
    BasePair, ConfidencePolicy, FloorRule, Policy, PolicyError, RangeStrategy, Rounding,
};
use super::super::rules::{
    BaseRule, BaseSelector, CostField, Effect, FieldGroup, RuleTable, ScoringRule, TableError,
    ValueMatch,
};
use super::{CaseDomain, DomainConfigError};

const SLUG: &str = "clergy-abuse";

pub(super) fn definition() -> Result<CaseDomain, DomainConfigError> {
    let table = rule_table().map_err(|source| DomainConfigError::Table {
        domain: SLUG,
        source,
    })?;
    let policy = policy().map_err(|source| DomainConfigError::Policy {
        domain: SLUG,
        source,
    })?;

    Ok(CaseDomain {
        slug: SLUG,
        label: "Clergy Abuse Compensation",
        disclaimer: "Estimates draw on reported institutional abuse settlements and revival \
                     statute outcomes. They are informational only and not legal advice; \
                     survivor recoveries vary widely with institutional records and venue.",
        intake: intake_form(),
        engine: EstimationEngine::new(table, policy),
    })
}

fn rule_table() -> Result<RuleTable, TableError> {
    RuleTable::new(
        BaseSelector {
            field: "abuse_period",
            rules: vec![
                BaseRule::single(
                    "childhood",
                    75_000.0,
                    "Abuse suffered as a minor draws higher compensation",
                ),
                BaseRule::single("adult", 50_000.0, "Abuse suffered as an adult"),
            ],
        },
        vec![
            FieldGroup {
                field: "duration_years",
                rules: vec![
                    ScoringRule {
                        value: ValueMatch::Band {
                            min: 0.0,
                            max: Some(3.0),
                        },
                        effect: Effect::NEUTRAL,
                        note: "Abuse over a short period",
                    },
                    ScoringRule {
                        value: ValueMatch::Band {
                            min: 3.0,
                            max: Some(6.0),
                        },
                        effect: Effect::multiplier(1.2),
                        note: "Abuse sustained over several years",
                    },
                    ScoringRule {
                        value: ValueMatch::Band {
                            min: 6.0,
                            max: None,
                        },
                        effect: Effect::multiplier(1.3),
                        note: "Abuse sustained over many years",
                    },
                ],
            },
            FieldGroup {
                field: "institution",
                rules: vec![
                    ScoringRule {
                        value: ValueMatch::Choice("catholic-diocese"),
                        effect: Effect::multiplier(1.4),
                        note: "Catholic diocese defendants have settled at higher levels",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("large-protestant"),
                        effect: Effect::multiplier(1.3),
                        note: "Large protestant organization defendant",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("other-institution"),
                        effect: Effect::NEUTRAL,
                        note: "Other religious institution",
                    },
                ],
            },
            FieldGroup {
                field: "cover_up_evidence",
                rules: vec![
                    ScoringRule {
                        value: ValueMatch::Choice("yes"),
                        effect: Effect::multiplier(1.8),
                        note: "Evidence of institutional cover-up supports enhanced damages",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("no"),
                        effect: Effect::NEUTRAL,
                        note: "No cover-up evidence identified yet",
                    },
                ],
            },
            FieldGroup {
                field: "evidence_strength",
                rules: vec![
                    ScoringRule {
                        value: ValueMatch::Choice("strong-corroboration"),
                        effect: Effect::multiplier(1.5),
                        note: "Strong corroborating evidence",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("witness-testimony"),
                        effect: Effect::multiplier(1.3),
                        note: "Supporting witness testimony",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("victim-testimony-only"),
                        effect: Effect::NEUTRAL,
                        note: "Survivor testimony stands alone",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("weak"),
                        effect: Effect::multiplier(0.7),
                        note: "Evidence still being developed",
                    },
                ],
            },
        ],
        vec![
            CostField {
                field: "therapy_costs",
                low_weight: 1.0,
                high_weight: 1.0,
                note: "Documented therapy and counseling costs",
            },
            CostField {
                field: "medical_costs",
                low_weight: 1.0,
                high_weight: 1.0,
                note: "Documented medical costs",
            },
            CostField {
                field: "lost_wages",
                low_weight: 1.0,
                high_weight: 1.0,
                note: "Documented lost wages",
            },
        ],
    )
}

fn policy() -> Result<Policy, PolicyError> {
    Policy::new(
        BasePair::single(50_000.0),
        RangeStrategy::SpreadFactor {
            low: 0.8,
            high: 3.0,
        },
        Vec::new(),
        FloorRule::new(50_000.0, 150_000.0),
        Rounding::WHOLE,
        Some(ConfidencePolicy {
            fields: vec!["evidence_strength", "cover_up_evidence"],
            medium_at: 1.3,
            high_at: 2.3,
        }),
    )
}

fn intake_form() -> IntakeForm {
    IntakeForm::new(vec![
        IntakeStep {
            title: "Abuse History",
            fields: vec!["abuse_period", "duration_years", "institution"],
        },
        IntakeStep {
            title: "Evidence",
            fields: vec!["cover_up_evidence", "evidence_strength"],
        },
        IntakeStep {
            title: "Financial Impact",
            fields: vec!["therapy_costs", "medical_costs", "lost_wages"],
        },
    ])
}
