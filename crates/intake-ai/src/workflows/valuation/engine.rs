use serde::Serialize;

use super::policy::{Confidence, Policy, RangeStrategy};
use super::profile::CaseProfile;
use super::rules::{Component, RuleTable};

/// One factor-log entry: the field that fired and its justification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Factor {
    pub field: &'static str,
    pub note: String,
}

/// Output of one estimation pass: the rounded range, the ordered factor log,
/// and the confidence bucket when the policy derives one. Created fresh per
/// call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimationResult {
    pub low: f64,
    pub high: f64,
    pub factors: Vec<Factor>,
    pub confidence: Option<Confidence>,
}

/// Stateless evaluator applying one domain's rule table and policy.
///
/// `estimate` is a pure function of its inputs: no I/O, no logging, no shared
/// mutable state. Identical inputs produce bit-identical bounds and the same
/// factor order, and concurrent calls need no synchronization because each
/// works entirely on its own running totals.
#[derive(Debug, Clone)]
pub struct EstimationEngine {
    table: RuleTable,
    policy: Policy,
}

impl EstimationEngine {
    /// Table and policy are already validated by their constructors.
    pub fn new(table: RuleTable, policy: Policy) -> Self {
        Self { table, policy }
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn estimate(&self, profile: &CaseProfile) -> EstimationResult {
        let mut factors = Vec::new();

        let base = self.table.base();
        let (mut low, mut high) = match base.matched(profile) {
            Some(rule) => {
                factors.push(Factor {
                    field: base.field,
                    note: rule.note.to_string(),
                });
                (rule.low, rule.high)
            }
            None => {
                let fallback = self.policy.default_base();
                (fallback.low, fallback.high)
            }
        };

        // Multiplier pass, in table-declaration order. Matched additive
        // amounts are stashed so no later weight can scale them.
        let mut pending_additive = 0.0;
        for group in self.table.groups() {
            let matched = profile.value(group.field).and_then(|value| group.matched(value));
            let Some(rule) = matched else {
                continue;
            };
            if rule.effect.is_neutral() {
                continue;
            }

            low *= rule.effect.weight;
            high *= rule.effect.weight;
            pending_additive += rule.effect.additive;
            factors.push(Factor {
                field: group.field,
                note: rule.note.to_string(),
            });
        }
        low += pending_additive;
        high += pending_additive;

        // Cost fields feed the economic component, tracked apart from the
        // running bounds so a cap can bind one component and not the other.
        let mut economic_low = 0.0;
        let mut economic_high = 0.0;
        for cost in self.table.cost_fields() {
            let amount = profile.amount(cost.field).unwrap_or(0.0);
            let amount = if amount.is_finite() && amount > 0.0 {
                amount
            } else {
                0.0
            };
            if amount == 0.0 {
                continue;
            }

            economic_low += amount * cost.low_weight;
            economic_high += amount * cost.high_weight;
            factors.push(Factor {
                field: cost.field,
                note: format!("{} of ${:.0}", cost.note, amount),
            });
        }

        // Caps clamp their component before the components are summed.
        if let Some(cap) = self.policy.cap_for(Component::NonEconomic) {
            low = low.min(cap);
            high = high.min(cap);
        }
        if let Some(cap) = self.policy.cap_for(Component::Economic) {
            economic_low = economic_low.min(cap);
            economic_high = economic_high.min(cap);
        }

        let mut low = low + economic_low;
        let mut high = high + economic_high;

        if let RangeStrategy::SpreadFactor {
            low: spread_low,
            high: spread_high,
        } = self.policy.strategy()
        {
            low *= spread_low;
            high *= spread_high;
        }

        // Floors bind the result bounds, so they apply after the spread.
        let floors = self.policy.floors();
        low = low.max(floors.low);
        high = high.max(floors.high).max(low);

        let granularity = self.policy.rounding().granularity;
        let low = round_half_up(low, granularity);
        let high = round_half_up(high, granularity);

        let confidence = self
            .policy
            .confidence()
            .map(|rule| rule.bucket(confidence_score(&self.table, profile, &rule.fields)));

        EstimationResult {
            low,
            high,
            factors,
            confidence,
        }
    }
}

/// Product of the matched weights of the designated fields; unanswered or
/// unmatched fields contribute the neutral 1.0.
fn confidence_score(table: &RuleTable, profile: &CaseProfile, fields: &[&'static str]) -> f64 {
    let mut score = 1.0;
    for field in fields {
        let matched = profile.value(field).and_then(|value| {
            table
                .groups()
                .iter()
                .filter(|group| group.field == *field)
                .find_map(|group| group.matched(value))
        });
        if let Some(rule) = matched {
            score *= rule.effect.weight;
        }
    }
    score
}

// `f64::round` rounds half away from zero; bounds are never negative here,
// so this is round-half-up at the policy granularity.
fn round_half_up(value: f64, granularity: f64) -> f64 {
    (value / granularity).round() * granularity
}
