//! Rideshare accident claims.

use super::super::engine::EstimationEngine;
use super::super::intake::{IntakeForm, IntakeStep};
use super::super::policy::{BasePair, FloorRule, Policy, PolicyError, RangeStrategy, Rounding};
use super::super::rules::{
    BaseRule, BaseSelector, CostField, Effect, FieldGroup, RuleTable, ScoringRule, TableError,
    ValueMatch,
};
use super::{CaseDomain, DomainConfigError};

const SLUG: &str = "rideshare";

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
        label: "Rideshare Accident Compensation",
        disclaimer: "Estimates are based on typical rideshare insurance tiers and settlement \
                     ranges. They are not legal advice; recoverable amounts depend on the \
                     coverage period, fault allocation, and injury documentation.",
        intake: intake_form(),
        engine: EstimationEngine::new(table, policy),
    })
}

fn rule_table() -> Result<RuleTable, TableError> {
    RuleTable::new(
        BaseSelector {
            field: "injury_severity",
            rules: vec![
                BaseRule {
                    value: "minor",
                    low: 50_000.0,
                    high: 150_000.0,
                    note: "Minor injuries with full expected recovery",
                },
                BaseRule {
                    value: "moderate",
                    low: 75_000.0,
                    high: 225_000.0,
                    note: "Moderate injuries requiring ongoing treatment",
                },
                BaseRule {
                    value: "serious",
                    low: 125_000.0,
                    high: 375_000.0,
                    note: "Serious injuries with extended recovery",
                },
                BaseRule {
                    value: "severe",
                    low: 200_000.0,
                    high: 600_000.0,
                    note: "Severe injuries with lasting limitations",
                },
                BaseRule {
                    value: "catastrophic",
                    low: 300_000.0,
                    high: 900_000.0,
                    note: "Catastrophic, life-altering injuries",
                },
            ],
        },
        vec![
            FieldGroup {
                field: "ride_service",
                rules: vec![
                    ScoringRule {
                        value: ValueMatch::Choice("uber"),
                        effect: Effect::NEUTRAL,
                        note: "Uber trip",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("lyft"),
                        effect: Effect::NEUTRAL,
                        note: "Lyft trip",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("other-rideshare"),
                        effect: Effect::multiplier(0.9),
                        note: "Smaller rideshare operators carry thinner coverage",
                    },
                ],
            },
            FieldGroup {
                field: "driver_status",
                rules: vec![
                    ScoringRule {
                        value: ValueMatch::Choice("app-off"),
                        effect: Effect::multiplier(0.8),
                        note: "App off; only the driver's personal policy applies",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("app-on-available"),
                        effect: Effect::NEUTRAL,
                        note: "App on and awaiting a match; contingent coverage applies",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("en-route-pickup"),
                        effect: Effect::multiplier(1.3),
                        note: "En route to pickup; the $1M commercial policy applies",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("passenger-onboard"),
                        effect: Effect::multiplier(1.5),
                        note: "Passenger on board; the $1M commercial policy applies",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("commercial-use"),
                        effect: Effect::multiplier(1.2),
                        note: "Commercial delivery use",
                    },
                ],
            },
            FieldGroup {
                field: "victim_role",
                rules: vec![
                    ScoringRule {
                        value: ValueMatch::Choice("passenger-rideshare"),
                        effect: Effect::multiplier(1.5),
                        note: "Rideshare passengers rarely share fault",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("other-vehicle-driver"),
                        effect: Effect::multiplier(1.2),
                        note: "Driver of the other vehicle",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("other-vehicle-passenger"),
                        effect: Effect::multiplier(1.3),
                        note: "Passenger in the other vehicle",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("pedestrian"),
                        effect: Effect::multiplier(1.4),
                        note: "Pedestrian struck by a rideshare vehicle",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("cyclist"),
                        effect: Effect::multiplier(1.4),
                        note: "Cyclist struck by a rideshare vehicle",
                    },
                ],
            },
            FieldGroup {
                field: "accident_type",
                rules: vec![
                    ScoringRule {
                        value: ValueMatch::Choice("rear-end"),
                        effect: Effect::multiplier(1.1),
                        note: "Rear-end collision",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("side-impact"),
                        effect: Effect::multiplier(1.3),
                        note: "Side-impact collision",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("head-on"),
                        effect: Effect::multiplier(1.8),
                        note: "Head-on collision",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("rollover"),
                        effect: Effect::multiplier(1.7),
                        note: "Rollover accident",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("hit-pedestrian"),
                        effect: Effect::multiplier(1.6),
                        note: "Vehicle-pedestrian impact",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("multi-vehicle"),
                        effect: Effect::multiplier(1.4),
                        note: "Multi-vehicle collision",
                    },
                ],
            },
            FieldGroup {
                field: "injury_type",
                rules: vec![
                    ScoringRule {
                        value: ValueMatch::Choice("soft-tissue"),
                        effect: Effect::NEUTRAL,
                        note: "Soft tissue injuries",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("fractures"),
                        effect: Effect::multiplier(1.4),
                        note: "Bone fractures",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("head-brain"),
                        effect: Effect::multiplier(2.0),
                        note: "Head or traumatic brain injury",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("spinal-cord"),
                        effect: Effect::multiplier(2.5),
                        note: "Spinal cord injury",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("internal-injuries"),
                        effect: Effect::multiplier(1.8),
                        note: "Internal organ injuries",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("multiple-injuries"),
                        effect: Effect::multiplier(1.6),
                        note: "Multiple distinct injuries",
                    },
                ],
            },
            FieldGroup {
                field: "driver_background",
                rules: vec![
                    ScoringRule {
                        value: ValueMatch::Choice("passed"),
                        effect: Effect::NEUTRAL,
                        note: "Driver passed the background check",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("issues-found"),
                        effect: Effect::multiplier(1.4),
                        note: "Background check surfaced issues, supporting negligent hiring",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("not-conducted"),
                        effect: Effect::multiplier(1.5),
                        note: "No background check was conducted",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("unknown"),
                        effect: Effect::NEUTRAL,
                        note: "Background check status unknown",
                    },
                ],
            },
            FieldGroup {
                field: "permanent_disability",
                rules: vec![
                    ScoringRule {
                        value: ValueMatch::Choice("none"),
                        effect: Effect::NEUTRAL,
                        note: "No lasting disability",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("partial-temporary"),
                        effect: Effect::multiplier(1.3),
                        note: "Temporary partial disability",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("partial-permanent"),
                        effect: Effect::multiplier(1.8),
                        note: "Permanent partial disability",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("total-permanent"),
                        effect: Effect::multiplier(3.0),
                        note: "Permanent total disability",
                    },
                ],
            },
            FieldGroup {
                field: "comparative_fault",
                rules: vec![
                    ScoringRule {
                        value: ValueMatch::Choice("0"),
                        effect: Effect::NEUTRAL,
                        note: "No comparative fault",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("1-10"),
                        effect: Effect::multiplier(0.95),
                        note: "Minimal shared fault",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("11-25"),
                        effect: Effect::multiplier(0.85),
                        note: "Moderate shared fault reduces recovery",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("26-49"),
                        effect: Effect::multiplier(0.70),
                        note: "Substantial shared fault reduces recovery",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("50-plus"),
                        effect: Effect::multiplier(0.0),
                        note: "Majority fault bars recovery of general damages",
                    },
                ],
            },
            FieldGroup {
                field: "age",
                rules: vec![
                    ScoringRule {
                        value: ValueMatch::Choice("under-18"),
                        effect: Effect::multiplier(1.3),
                        note: "Minor victim",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("18-40"),
                        effect: Effect::multiplier(1.2),
                        note: "Young adult with long earning horizon",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("41-65"),
                        effect: Effect::NEUTRAL,
                        note: "Working-age adult",
                    },
                    ScoringRule {
                        value: ValueMatch::Choice("over-65"),
                        effect: Effect::multiplier(0.9),
                        note: "Retired-age victim",
                    },
                ],
            },
        ],
        vec![CostField {
            field: "medical_costs",
            low_weight: 1.0,
            high_weight: 2.0,
            note: "Documented medical expenses",
        }],
    )
}

fn policy() -> Result<Policy, PolicyError> {
    Policy::new(
        BasePair::new(50_000.0, 150_000.0),
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
            title: "Accident Details",
            fields: vec![
                "ride_service",
                "driver_status",
                "victim_role",
                "accident_type",
            ],
        },
        IntakeStep {
            title: "Injuries and Liability",
            fields: vec![
                "injury_severity",
                "injury_type",
                "medical_costs",
                "driver_background",
                "permanent_disability",
                "comparative_fault",
                "age",
            ],
        },
    ])
}
