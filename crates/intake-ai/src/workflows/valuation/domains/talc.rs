//! Talcum powder cancer claims.

use super::super::engine::EstimationEngine;
use super::super::intake::{IntakeForm, IntakeStep};
use super::super::policy::{BasePair, FloorRule, Policy, PolicyError, RangeStrategy, Rounding};
use super::super::rules::{
    BaseRule, BaseSelector, CostField, Effect, FieldGroup, RuleTable, ScoringRule, TableError,
    ValueMatch,
};
use super::{CaseDomain, DomainConfigError};

const SLUG: &str = "talc";

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
        label: "Talc Cancer Compensation",
        disclaimer: "Estimates reflect publicly reported talc settlement patterns and are not \
                     a prediction or legal advice. Actual recovery depends on the specific \
                     evidence, venue, and defendants in your case.",
        intake: intake_form(),
        engine: EstimationEngine::new(table, policy),
    })
}

fn rule_table() -> Result<RuleTable, TableError> {
    RuleTable::new(
        BaseSelector {
            field: "cancer_type",
            rules: vec![
                BaseRule {
                    value: "ovarian-cancer",
                    low: 375_000.0,
                    high: 750_000.0,
                    note: "Ovarian cancer carries the strongest documented link to talc use",
                },
                BaseRule {
                    value: "mesothelioma",
                    low: 450_000.0,
                    high: 900_000.0,
                    note: "Mesothelioma tied to asbestos-contaminated talc draws the highest awards",
                },
                BaseRule {
                    value: "lung-cancer",
                    low: 330_000.0,
                    high: 660_000.0,
                    note: "Lung cancer from inhaled talc particles",
                },
                BaseRule {
                    value: "endometrial-cancer",
                    low: 300_000.0,
                    high: 600_000.0,
                    note: "Endometrial cancer linked to perineal talc application",
                },
                BaseRule {
                    value: "other-cancer",
                    low: 225_000.0,
                    high: 450_000.0,
                    note: "Other cancer with a documented talc exposure history",
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
                        note: "Stage I diagnosis",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("stage-2"),
                        effect: Effect::multiplier(1.5),
                        note: "Stage II diagnosis",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("stage-3"),
                        effect: Effect::multiplier(2.0),
                        note: "Stage III diagnosis increases damages substantially",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("stage-4"),
                        effect: Effect::multiplier(2.5),
                        note: "Stage IV diagnosis increases damages substantially",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("terminal"),
                        effect: Effect::multiplier(3.0),
                        note: "Terminal prognosis supports maximum non-economic damages",
                    },
                ],
            },
            FieldGroup {
                field: "exposure_duration",
                rules: vec![
                    ScoringRule {
                        value: ValueMatch::Choice("1-5-years"),
                        effect: Effect::NEUTRAL,
                        note: "Exposure period of one to five years",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("6-10-years"),
                        effect: Effect::multiplier(1.3),
                        note: "Six to ten years of regular exposure",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("11-20-years"),
                        effect: Effect::multiplier(1.7),
                        note: "Eleven to twenty years of regular exposure",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("21-30-years"),
                        effect: Effect::multiplier(2.0),
                        note: "Twenty-one to thirty years of regular exposure",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("30-plus-years"),
                        effect: Effect::multiplier(2.5),
                        note: "More than thirty years of regular exposure",
                    },
                ],
            },
            FieldGroup {
                field: "usage_frequency",
                rules: vec![
                    ScoringRule {
                        value: ValueMatch::Choice("occasional"),
                        effect: Effect::NEUTRAL,
                        note: "Occasional product use",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("weekly"),
                        effect: Effect::multiplier(1.3),
                        note: "Weekly product use",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("daily"),
                        effect: Effect::multiplier(1.8),
                        note: "Daily product use strengthens the dose-response showing",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("multiple-daily"),
                        effect: Effect::multiplier(2.2),
                        note: "Multiple daily applications strengthen the dose-response showing",
                    },
                ],
            },
            FieldGroup {
                field: "product_type",
                rules: vec![
                    ScoringRule {
                        value: ValueMatch::Choice("baby-powder"),
                        effect: Effect::multiplier(2.0),
                        note: "Baby powder is the most heavily litigated talc product",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("shower-to-shower"),
                        effect: Effect::multiplier(1.8),
                        note: "Shower to Shower body powder",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("body-powder"),
                        effect: Effect::multiplier(1.5),
                        note: "Generic talc body powder",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("multiple-products"),
                        effect: Effect::multiplier(2.2),
                        note: "Multiple talc products over the exposure period",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("other"),
                        effect: Effect::multiplier(1.3),
                        note: "Other talc-containing product",
                    },
                ],
            },
            FieldGroup {
                field: "age",
                rules: vec![
                    ScoringRule {
                        value: ValueMatch::Choice("under-40"),
                        effect: Effect::multiplier(1.5),
                        note: "Diagnosis before forty increases future damages",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("40-50"),
                        effect: Effect::multiplier(1.3),
                        note: "Diagnosis in the forties",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("51-60"),
                        effect: Effect::multiplier(1.1),
                        note: "Diagnosis in the fifties",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("61-70"),
                        effect: Effect::NEUTRAL,
                        note: "Diagnosis in the sixties",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("over-70"),
                        effect: Effect::multiplier(0.9),
                        note: "Diagnosis after seventy",
                    },
                ],
            },
            FieldGroup {
                field: "pathology_evidence",
                rules: vec![
                    ScoringRule {
                        value: ValueMatch::Choice("yes"),
                        effect: Effect::multiplier(1.8),
                        note: "Pathology found talc particles in tissue samples",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("no"),
                        effect: Effect::NEUTRAL,
                        note: "No tissue pathology evidence",
                    },
                ],
            },
        ],
        vec![
            CostField {
                field: "medical_costs",
                low_weight: 1.0,
                high_weight: 1.5,
                note: "Documented medical expenses",
            },
            CostField {
                field: "future_care_costs",
                low_weight: 1.0,
                high_weight: 1.5,
                note: "Projected future care costs",
            },
            CostField {
                field: "lost_wages",
                low_weight: 1.0,
                high_weight: 1.5,
                note: "Documented lost wages",
            },
        ],
    )
}

fn policy() -> Result<Policy, PolicyError> {
    Policy::new(
        BasePair::new(150_000.0, 300_000.0),
        RangeStrategy::IndependentBounds,
        Vec::new(),
        FloorRule::new(100_000.0, 250_000.0),
        Rounding::nearest(1000.0),
        None,
    )
}

fn intake_form() -> IntakeForm {
    IntakeForm::new(vec![
        IntakeStep {
            title: "Cancer Information",
            fields: vec!["cancer_type", "cancer_stage", "exposure_duration"],
        },
        IntakeStep {
            title: "Exposure and Damages",
            fields: vec![
                "usage_frequency",
                "product_type",
                "age",
                "pathology_evidence",
                "medical_costs",
                "future_care_costs",
                "lost_wages",
            ],
        },
    ])
}
