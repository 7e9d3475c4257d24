//! Mesothelioma and asbestos exposure claims.

use super::super::engine::EstimationEngine;
use super::super::intake::{IntakeForm, IntakeStep};
use super::super::policy::{BasePair, FloorRule, Policy, PolicyError, RangeStrategy, Rounding};
use super::super::rules::{
    BaseRule, BaseSelector, CostField, Effect, FieldGroup, RuleTable, ScoringRule, TableError,
    ValueMatch,
};
use super::{CaseDomain, DomainConfigError};

const SLUG: &str = "asbestos";

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
        label: "Mesothelioma and Asbestos Compensation",
        disclaimer: "Estimates reflect reported mesothelioma verdicts, settlements, and trust \
                     claims. They are informational only and not legal advice; individual \
                     outcomes vary with exposure proof and defendant solvency.",
        intake: intake_form(),
        engine: EstimationEngine::new(table, policy),
    })
}

fn rule_table() -> Result<RuleTable, TableError> {
    RuleTable::new(
        BaseSelector {
            field: "diagnosis_type",
            rules: vec![
                BaseRule {
                    value: "pleural",
                    low: 800_000.0,
                    high: 2_000_000.0,
                    note: "Pleural mesothelioma, the most common asbestos cancer",
                },
                BaseRule {
                    value: "peritoneal",
                    low: 1_040_000.0,
                    high: 2_600_000.0,
                    note: "Peritoneal mesothelioma settlements run higher due to rarity",
                },
                BaseRule {
                    value: "pericardial",
                    low: 1_120_000.0,
                    high: 2_800_000.0,
                    note: "Pericardial mesothelioma is very rare and aggressive",
                },
                BaseRule {
                    value: "testicular",
                    low: 960_000.0,
                    high: 2_400_000.0,
                    note: "Testicular mesothelioma",
                },
            ],
        },
        vec![
            FieldGroup {
                field: "cancer_stage",
                rules: vec![
                    ScoringRule {
                        value: ValueMatch::Choice("stage-1"),
                        effect: Effect::multiplier(1.2),
                        note: "Stage I prognosis supports a longer damages horizon",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("stage-2"),
                        effect: Effect::multiplier(1.1),
                        note: "Stage II diagnosis",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("stage-3"),
                        effect: Effect::NEUTRAL,
                        note: "Stage III diagnosis",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("stage-4"),
                        effect: Effect::multiplier(0.9),
                        note: "Stage IV diagnosis shortens the damages horizon",
                    },
                ],
            },
            FieldGroup {
                field: "exposure_type",
                rules: vec![
                    ScoringRule {
                        value: ValueMatch::Choice("occupational"),
                        effect: Effect::multiplier(1.2),
                        note: "Occupational exposure with a clear liability path",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("military"),
                        effect: Effect::multiplier(1.3),
                        note: "Military service exposure adds VA and civil avenues",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("secondary"),
                        effect: Effect::multiplier(1.1),
                        note: "Secondary take-home exposure",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("environmental"),
                        effect: Effect::NEUTRAL,
                        note: "Environmental exposure",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("multiple"),
                        effect: Effect::multiplier(1.4),
                        note: "Multiple exposure sources mean more viable defendants",
                    },
                ],
            },
            FieldGroup {
                field: "exposure_years",
                rules: vec![
                    ScoringRule {
                        value: ValueMatch::Band {
                            min: 0.0,
                            max: Some(6.0),
                        },
                        effect: Effect::NEUTRAL,
                        note: "Up to five years of exposure",
                    },
                    ScoringRule {
                        value: ValueMatch::Band {
                            min: 6.0,
                            max: Some(11.0),
                        },
                        effect: Effect::multiplier(1.1),
                        note: "Six to ten years of exposure",
                    },
                    ScoringRule {
                        value: ValueMatch::Band {
                            min: 11.0,
                            max: Some(21.0),
                        },
                        effect: Effect::multiplier(1.2),
                        note: "Eleven to twenty years of exposure",
                    },
                    ScoringRule {
                        value: ValueMatch::Band {
                            min: 21.0,
                            max: None,
                        },
                        effect: Effect::multiplier(1.3),
                        note: "More than twenty years of exposure",
                    },
                ],
            },
            FieldGroup {
                field: "age",
                rules: vec![
                    ScoringRule {
                        value: ValueMatch::Band {
                            min: 0.0,
                            max: Some(50.0),
                        },
                        effect: Effect::multiplier(1.3),
                        note: "Diagnosis before fifty raises lost earnings and life impact",
                    },
                    ScoringRule {
                        value: ValueMatch::Band {
                            min: 50.0,
                            max: Some(60.0),
                        },
                        effect: Effect::multiplier(1.2),
                        note: "Diagnosis in the fifties",
                    },
                    ScoringRule {
                        value: ValueMatch::Band {
                            min: 60.0,
                            max: Some(70.0),
                        },
                        effect: Effect::multiplier(1.1),
                        note: "Diagnosis in the sixties",
                    },
                    ScoringRule {
                        value: ValueMatch::Band {
                            min: 70.0,
                            max: None,
                        },
                        effect: Effect::NEUTRAL,
                        note: "Diagnosis at seventy or later",
                    },
                ],
            },
            FieldGroup {
                field: "employment_status",
                rules: vec![
                    ScoringRule {
                        value: ValueMatch::Choice("employed"),
                        effect: Effect::NEUTRAL,
                        note: "Currently employed; lost wages claimed separately",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("retired"),
                        effect: Effect::flat(100_000.0),
                        note: "Retirement income and pension impact",
                    },
                ],
            },
        ],
        vec![
            CostField {
                field: "medical_costs",
                low_weight: 1.0,
                high_weight: 2.0,
                note: "Documented treatment costs",
            },
            CostField {
                field: "lost_wages",
                low_weight: 0.7,
                high_weight: 1.2,
                note: "Documented lost earnings",
            },
        ],
    )
}

fn policy() -> Result<Policy, PolicyError> {
    Policy::new(
        BasePair::new(800_000.0, 2_000_000.0),
        RangeStrategy::IndependentBounds,
        Vec::new(),
        FloorRule::NONE,
        Rounding::WHOLE,
        None,
    )
}

fn intake_form() -> IntakeForm {
    IntakeForm::new(vec![
        IntakeStep {
            title: "Diagnosis",
            fields: vec!["diagnosis_type", "cancer_stage"],
        },
        IntakeStep {
            title: "Exposure History",
            fields: vec!["exposure_type", "exposure_years"],
        },
        IntakeStep {
            title: "Financial Impact",
            fields: vec!["age", "employment_status", "medical_costs", "lost_wages"],
        },
    ])
}
