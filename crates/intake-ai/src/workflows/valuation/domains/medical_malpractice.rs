//! Medical malpractice claims, including the statutory non-economic cap.

use super::super::engine::EstimationEngine;
use super::super::intake::{IntakeForm, IntakeStep};
use super::super::policy::{
    BasePair, CapRule, FloorRule, Policy, PolicyError, RangeStrategy, Rounding,
};
use super::super::rules::{
    BaseRule, BaseSelector, Component, CostField, Effect, FieldGroup, RuleTable, ScoringRule,
    TableError, ValueMatch,
};
use super::{CaseDomain, DomainConfigError};

const SLUG: &str = "medical-malpractice";

/// Statutory cap on non-economic damages under the current schedule.
/// Economic damages are uncapped.
const NON_ECONOMIC_CAP: f64 = 430_000.0;

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
        label: "Medical Malpractice Compensation",
        disclaimer: "Estimates apply the statutory cap on non-economic damages and reported \
                     settlement multiples. They are informational only, not legal advice, and \
                     assume provable deviation from the standard of care.",
        intake: intake_form(),
        engine: EstimationEngine::new(table, policy),
    })
}

fn rule_table() -> Result<RuleTable, TableError> {
    RuleTable::new(
        BaseSelector {
            field: "error_type",
            rules: vec![
                BaseRule {
                    value: "misdiagnosis",
                    low: 200_000.0,
                    high: 1_000_000.0,
                    note: "Misdiagnosis of a treatable condition",
                },
                BaseRule {
                    value: "surgical-error",
                    low: 350_000.0,
                    high: 1_750_000.0,
                    note: "Surgical error",
                },
                BaseRule {
                    value: "medication-error",
                    low: 180_000.0,
                    high: 900_000.0,
                    note: "Medication or dosage error",
                },
                BaseRule {
                    value: "birth-injury",
                    low: 450_000.0,
                    high: 2_250_000.0,
                    note: "Birth injury cases draw the highest awards",
                },
                BaseRule {
                    value: "anesthesia-error",
                    low: 320_000.0,
                    high: 1_600_000.0,
                    note: "Anesthesia error",
                },
                BaseRule {
                    value: "failure-diagnose",
                    low: 250_000.0,
                    high: 1_250_000.0,
                    note: "Failure to diagnose a serious condition",
                },
            ],
        },
        vec![
            FieldGroup {
                field: "injury_severity",
                rules: vec![
                    ScoringRule {
                        value: ValueMatch::Choice("minor"),
                        effect: Effect::NEUTRAL,
                        note: "Minor resulting injury",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("moderate"),
                        effect: Effect::multiplier(2.0),
                        note: "Moderate resulting injury",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("severe"),
                        effect: Effect::multiplier(3.5),
                        note: "Severe resulting injury",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("catastrophic"),
                        effect: Effect::multiplier(5.0),
                        note: "Catastrophic resulting injury",
                    },
                ],
            },
            FieldGroup {
                field: "permanent_impact",
                rules: vec![
                    ScoringRule {
                        value: ValueMatch::Choice("none"),
                        effect: Effect::NEUTRAL,
                        note: "No permanent impact",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("minor"),
                        effect: Effect::multiplier(1.3),
                        note: "Minor permanent impairment",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("significant"),
                        effect: Effect::multiplier(2.0),
                        note: "Significant permanent impairment",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("total-disability"),
                        effect: Effect::multiplier(3.0),
                        note: "Total permanent disability",
                    },
                ],
            },
            FieldGroup {
                field: "age",
                rules: vec![
                    ScoringRule {
                        value: ValueMatch::Choice("under-40"),
                        effect: Effect::multiplier(1.4),
                        note: "Younger patients carry larger future losses",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("40-60"),
                        effect: Effect::multiplier(1.2),
                        note: "Patient aged forty to sixty",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("over-60"),
                        effect: Effect::multiplier(0.9),
                        note: "Patient over sixty",
                    },
                ],
            },
            FieldGroup {
                field: "life_expectancy",
                rules: vec![
                    ScoringRule {
                        value: ValueMatch::Choice("normal"),
                        effect: Effect::NEUTRAL,
                        note: "Life expectancy unaffected",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("reduced-5-10"),
                        effect: Effect::multiplier(1.2),
                        note: "Life expectancy reduced five to ten years",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("reduced-10-20"),
                        effect: Effect::multiplier(1.4),
                        note: "Life expectancy reduced ten to twenty years",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("severely-reduced"),
                        effect: Effect::multiplier(1.6),
                        note: "Life expectancy severely reduced",
                    },
                ],
            },
        ],
        vec![
            CostField {
                field: "medical_costs",
                low_weight: 1.5,
                high_weight: 3.0,
                note: "Documented corrective treatment costs",
            },
            CostField {
                field: "future_medical",
                low_weight: 1.5,
                high_weight: 3.0,
                note: "Projected future medical costs",
            },
            CostField {
                field: "lost_wages",
                low_weight: 1.5,
                high_weight: 3.0,
                note: "Documented lost wages",
            },
        ],
    )
}

fn policy() -> Result<Policy, PolicyError> {
    Policy::new(
        BasePair::new(100_000.0, 500_000.0),
        RangeStrategy::IndependentBounds,
        vec![CapRule {
            component: Component::NonEconomic,
            amount: NON_ECONOMIC_CAP,
        }],
        FloorRule::NONE,
        Rounding::WHOLE,
        None,
    )
}

fn intake_form() -> IntakeForm {
    IntakeForm::new(vec![
        IntakeStep {
            title: "What Happened",
            fields: vec!["error_type", "injury_severity"],
        },
        IntakeStep {
            title: "Lasting Impact",
            fields: vec!["permanent_impact", "age", "life_expectancy"],
        },
        IntakeStep {
            title: "Economic Damages",
            fields: vec!["medical_costs", "future_medical", "lost_wages"],
        },
    ])
}
