use super::common::*;

use crate::workflows::valuation::engine::EstimationEngine;
use crate::workflows::valuation::policy::{
    BasePair, Confidence, FloorRule, Policy, RangeStrategy, Rounding,
};
use crate::workflows::valuation::profile::{CaseProfile, FieldValue};

#[test]
fn neutral_answers_reproduce_the_base_range() {
    let engine = scoring_engine();
    let case = profile(&[
        ("injury_grade", FieldValue::choice("moderate")),
        ("hardship_grant", FieldValue::choice("none")),
        ("negligence", FieldValue::choice("disputed")),
    ]);

    let result = engine.estimate(&case);

    assert_eq!(result.low, 100_000.0);
    assert_eq!(result.high, 500_000.0);
    assert_eq!(result.factors.len(), 1);
    assert_eq!(result.factors[0].field, "injury_grade");
}

#[test]
fn unmatched_base_falls_back_to_the_policy_default() {
    let engine = scoring_engine();
    let case = profile(&[("injury_grade", FieldValue::choice("unlisted"))]);

    let result = engine.estimate(&case);

    assert_eq!(result.low, 50_000.0);
    assert_eq!(result.high, 250_000.0);
    assert!(result.factors.is_empty());
}

#[test]
fn empty_profiles_estimate_the_default_range() {
    let result = scoring_engine().estimate(&CaseProfile::empty());

    assert_eq!(result.low, 50_000.0);
    assert_eq!(result.high, 250_000.0);
    assert!(result.factors.is_empty());
    assert!(result.confidence.is_none());
}

#[test]
fn weights_scale_both_bounds() {
    let engine = scoring_engine();
    let case = profile(&[
        ("injury_grade", FieldValue::choice("moderate")),
        ("negligence", FieldValue::choice("documented")),
    ]);

    let result = engine.estimate(&case);

    assert_eq!(result.low, 200_000.0);
    assert_eq!(result.high, 1_000_000.0);
}

#[test]
fn additive_amounts_are_never_scaled_by_weights() {
    let engine = scoring_engine();
    let case = profile(&[
        ("injury_grade", FieldValue::choice("moderate")),
        ("hardship_grant", FieldValue::choice("approved")),
        ("negligence", FieldValue::choice("documented")),
    ]);

    let result = engine.estimate(&case);

    // The 25k grant joins after the 2.0 weight: 100k * 2 + 25k, not (100k + 25k) * 2.
    assert_eq!(result.low, 225_000.0);
    assert_eq!(result.high, 1_025_000.0);
    assert_eq!(result.factors.len(), 3);
}

#[test]
fn cost_fields_scale_documented_amounts_per_bound() {
    let engine = scoring_engine();
    let case = profile(&[
        ("injury_grade", FieldValue::choice("moderate")),
        ("medical_costs", FieldValue::amount(20_000.0)),
    ]);

    let result = engine.estimate(&case);

    assert_eq!(result.low, 110_000.0);
    assert_eq!(result.high, 540_000.0);
    let cost_factor = result.factors.last().expect("cost factor logged");
    assert_eq!(cost_factor.field, "medical_costs");
    assert!(cost_factor.note.contains("$20000"));
}

#[test]
fn caps_clamp_each_component_before_summing() {
    let engine = EstimationEngine::new(scoring_table(), capped_policy());
    let case = profile(&[
        ("injury_grade", FieldValue::choice("severe")),
        ("medical_costs", FieldValue::amount(400_000.0)),
    ]);

    let result = engine.estimate(&case);

    // High bound: 900k general damages clamp to 430k, 800k costs clamp to 600k.
    assert_eq!(result.low, 500_000.0);
    assert_eq!(result.high, 1_030_000.0);
}

#[test]
fn spread_factors_widen_the_total_and_floors_bind_after() {
    let spread = spread_engine();

    let unmatched = spread.estimate(&profile(&[(
        "abuse_period",
        FieldValue::choice("adulthood"),
    )]));
    // Default 50k spreads to 40k..150k; the 50k low floor binds afterwards.
    assert_eq!(unmatched.low, 50_000.0);
    assert_eq!(unmatched.high, 150_000.0);

    let corroborated = spread.estimate(&profile(&[
        ("abuse_period", FieldValue::choice("childhood")),
        ("corroboration", FieldValue::choice("strong")),
    ]));
    assert_eq!(corroborated.low, 60_000.0);
    assert_eq!(corroborated.high, 225_000.0);
}

#[test]
fn rounding_snaps_bounds_half_up_at_the_granularity() {
    let policy = Policy::new(
        BasePair::new(50_000.0, 250_000.0),
        RangeStrategy::IndependentBounds,
        Vec::new(),
        FloorRule::NONE,
        Rounding::nearest(1_000.0),
        None,
    )
    .expect("valid policy");
    let engine = EstimationEngine::new(scoring_table(), policy);
    let case = profile(&[
        ("injury_grade", FieldValue::choice("moderate")),
        ("medical_costs", FieldValue::amount(1_000.0)),
    ]);

    let result = engine.estimate(&case);

    // 100,500 sits exactly on the half and rounds up.
    assert_eq!(result.low, 101_000.0);
    assert_eq!(result.high, 502_000.0);
}

#[test]
fn factor_log_follows_table_declaration_order() {
    let engine = scoring_engine();
    let case = profile(&[
        ("medical_costs", FieldValue::amount(20_000.0)),
        ("negligence", FieldValue::choice("documented")),
        ("hardship_grant", FieldValue::choice("approved")),
        ("injury_grade", FieldValue::choice("moderate")),
    ]);

    let result = engine.estimate(&case);

    let fields: Vec<&str> = result.factors.iter().map(|factor| factor.field).collect();
    assert_eq!(
        fields,
        vec!["injury_grade", "hardship_grant", "negligence", "medical_costs"]
    );
}

#[test]
fn identical_profiles_produce_identical_results() {
    let engine = scoring_engine();
    let case = profile(&[
        ("injury_grade", FieldValue::choice("severe")),
        ("negligence", FieldValue::choice("documented")),
        ("medical_costs", FieldValue::amount(12_345.0)),
    ]);

    let first = engine.estimate(&case);
    let second = engine.estimate(&case);

    assert_eq!(first, second);
}

#[test]
fn non_positive_amounts_contribute_nothing() {
    let engine = scoring_engine();
    let case = profile(&[
        ("injury_grade", FieldValue::choice("moderate")),
        ("medical_costs", FieldValue::Amount(-500.0)),
    ]);

    let result = engine.estimate(&case);

    assert_eq!(result.low, 100_000.0);
    assert_eq!(result.high, 500_000.0);
    assert_eq!(result.factors.len(), 1);
}

#[test]
fn zero_weights_zero_general_damages_but_not_costs() {
    let engine = scoring_engine();
    let case = profile(&[
        ("injury_grade", FieldValue::choice("moderate")),
        ("negligence", FieldValue::choice("claimant-at-fault")),
        ("medical_costs", FieldValue::amount(20_000.0)),
    ]);

    let result = engine.estimate(&case);

    assert_eq!(result.low, 10_000.0);
    assert_eq!(result.high, 40_000.0);
}

#[test]
fn confidence_buckets_combine_designated_field_weights() {
    let spread = spread_engine();

    let unanswered = spread.estimate(&profile(&[(
        "abuse_period",
        FieldValue::choice("childhood"),
    )]));
    assert_eq!(unanswered.confidence, Some(Confidence::Low));

    let corroborated = spread.estimate(&profile(&[
        ("abuse_period", FieldValue::choice("childhood")),
        ("corroboration", FieldValue::choice("strong")),
    ]));
    assert_eq!(corroborated.confidence, Some(Confidence::Medium));

    let unconfigured = scoring_engine().estimate(&CaseProfile::empty());
    assert!(unconfigured.confidence.is_none());
}
