use std::collections::BTreeMap;
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::valuation::domains::DomainRegistry;
use crate::workflows::valuation::engine::EstimationEngine;
use crate::workflows::valuation::intake::{IntakeForm, IntakeStep};
use crate::workflows::valuation::policy::{
    BasePair, CapRule, ConfidencePolicy, FloorRule, Policy, RangeStrategy, Rounding,
};
use crate::workflows::valuation::profile::{CaseProfile, FieldValue};
use crate::workflows::valuation::rules::{
    BaseRule, BaseSelector, Component, CostField, Effect, FieldGroup, RuleTable, ScoringRule,
    ValueMatch,
};
use crate::workflows::valuation::service::ValuationService;

pub(super) fn scoring_table() -> RuleTable {
    RuleTable::new(
        BaseSelector {
            field: "injury_grade",
            rules: vec![
                BaseRule {
                    value: "moderate",
                    low: 100_000.0,
                    high: 500_000.0,
                    note: "Moderate injuries documented",
                },
                BaseRule {
                    value: "severe",
                    low: 300_000.0,
                    high: 900_000.0,
                    note: "Severe injuries with hospitalization",
                },
            ],
        },
        vec![
            FieldGroup {
                field: "hardship_grant",
                rules: vec![
                    ScoringRule {
                        value: ValueMatch::Choice("none"),
                        effect: Effect::NEUTRAL,
                        note: "No hardship grant",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("approved"),
                        effect: Effect::flat(25_000.0),
                        note: "Hardship grant approved",
                    },
                ],
            },
            FieldGroup {
                field: "negligence",
                rules: vec![
                    ScoringRule {
                        value: ValueMatch::Choice("disputed"),
                        effect: Effect::NEUTRAL,
                        note: "Liability disputed",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("documented"),
                        effect: Effect::multiplier(2.0),
                        note: "Negligence documented in the record",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("claimant-at-fault"),
                        effect: Effect::multiplier(0.0),
                        note: "Claimant found at fault",
                    },
                ],
            },
        ],
        vec![CostField {
            field: "medical_costs",
            low_weight: 0.5,
            high_weight: 2.0,
            note: "Documented medical expenses",
        }],
    )
    .expect("valid table")
}

pub(super) fn plain_policy() -> Policy {
    Policy::new(
        BasePair::new(50_000.0, 250_000.0),
        RangeStrategy::IndependentBounds,
        Vec::new(),
        FloorRule::NONE,
        Rounding::WHOLE,
        None,
    )
    .expect("valid policy")
}

pub(super) fn capped_policy() -> Policy {
    Policy::new(
        BasePair::new(50_000.0, 250_000.0),
        RangeStrategy::IndependentBounds,
        vec![
            CapRule {
                component: Component::NonEconomic,
                amount: 430_000.0,
            },
            CapRule {
                component: Component::Economic,
                amount: 600_000.0,
            },
        ],
        FloorRule::NONE,
        Rounding::WHOLE,
        None,
    )
    .expect("valid policy")
}

pub(super) fn scoring_engine() -> EstimationEngine {
    EstimationEngine::new(scoring_table(), plain_policy())
}

pub(super) fn spread_table() -> RuleTable {
    RuleTable::new(
        BaseSelector {
            field: "abuse_period",
            rules: vec![BaseRule::single(
                "childhood",
                50_000.0,
                "Abuse during childhood",
            )],
        },
        vec![FieldGroup {
            field: "corroboration",
            rules: vec![
                ScoringRule {
                    value: ValueMatch::Choice("none"),
                    effect: Effect::NEUTRAL,
                    note: "No corroborating evidence",
                },
                ScoringRule {
                    value: ValueMatch::Choice("strong"),
                    effect: Effect::multiplier(1.5),
                    note: "Strong corroboration on file",
                },
            ],
        }],
        vec![CostField {
            field: "therapy_costs",
            low_weight: 1.0,
            high_weight: 1.0,
            note: "Ongoing therapy costs",
        }],
    )
    .expect("valid table")
}

pub(super) fn spread_policy() -> Policy {
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
            fields: vec!["corroboration"],
            medium_at: 1.3,
            high_at: 2.3,
        }),
    )
    .expect("valid policy")
}

pub(super) fn spread_engine() -> EstimationEngine {
    EstimationEngine::new(spread_table(), spread_policy())
}

pub(super) fn intake_form() -> IntakeForm {
    IntakeForm::new(vec![
        IntakeStep {
            title: "Incident",
            fields: vec!["injury_grade", "negligence"],
        },
        IntakeStep {
            title: "Damages",
            fields: vec!["hardship_grant", "medical_costs"],
        },
    ])
}

pub(super) fn answers(entries: &[(&str, FieldValue)]) -> BTreeMap<String, FieldValue> {
    entries
        .iter()
        .map(|(field, value)| (field.to_string(), value.clone()))
        .collect()
}

pub(super) fn profile(entries: &[(&str, FieldValue)]) -> CaseProfile {
    CaseProfile::from_answers(answers(entries))
}

pub(super) fn standard_service() -> Arc<ValuationService> {
    let registry = DomainRegistry::standard().expect("valid catalog");
    Arc::new(ValuationService::new(registry))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
