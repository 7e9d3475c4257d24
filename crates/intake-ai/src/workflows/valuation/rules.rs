use serde::Serialize;

use super::profile::{CaseProfile, FieldValue};

/// Adjustment carried by a matched scoring rule.
///
/// The multiplicative weight scales the running bounds; the additive amount
/// is collected during the multiplier pass and folded in afterwards so later
/// weights never scale it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Effect {
    pub weight: f64,
    pub additive: f64,
}

impl Effect {
    pub const NEUTRAL: Effect = Effect {
        weight: 1.0,
        additive: 0.0,
    };

    pub const fn multiplier(weight: f64) -> Self {
        Effect {
            weight,
            additive: 0.0,
        }
    }

    pub const fn flat(additive: f64) -> Self {
        Effect {
            weight: 1.0,
            additive,
        }
    }

    pub fn is_neutral(self) -> bool {
        self == Effect::NEUTRAL
    }
}

/// What a scoring rule matches against: an option identifier for categorical
/// answers, or a half-open numeric band `[min, max)` for numeric answers.
/// A band without `max` is open-ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ValueMatch {
    Choice(&'static str),
    Band { min: f64, max: Option<f64> },
}

impl ValueMatch {
    pub fn matches(&self, value: &FieldValue) -> bool {
        match (self, value) {
            (ValueMatch::Choice(expected), FieldValue::Choice(found)) => *expected == found,
            (ValueMatch::Band { min, max }, FieldValue::Amount(amount)) => {
                *amount >= *min && max.map_or(true, |upper| *amount < upper)
            }
            _ => false,
        }
    }
}

/// One (matched value) -> effect binding plus its justification note.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringRule {
    pub value: ValueMatch,
    pub effect: Effect,
    pub note: &'static str,
}

/// A field identifier and the scoring rules for its possible values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldGroup {
    pub field: &'static str,
    pub rules: Vec<ScoringRule>,
}

impl FieldGroup {
    /// At most one rule can match a given value; construction enforces it.
    pub fn matched(&self, value: &FieldValue) -> Option<&ScoringRule> {
        self.rules.iter().find(|rule| rule.value.matches(value))
    }
}

/// Starting range for one matched category value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseRule {
    pub value: &'static str,
    pub low: f64,
    pub high: f64,
    pub note: &'static str,
}

impl BaseRule {
    /// Degenerate pair for domains that track one running total and derive
    /// the range from spread factors at the end.
    pub const fn single(value: &'static str, amount: f64, note: &'static str) -> Self {
        BaseRule {
            value,
            low: amount,
            high: amount,
            note,
        }
    }
}

/// The one rule group whose match seeds the starting base pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseSelector {
    pub field: &'static str,
    pub rules: Vec<BaseRule>,
}

impl BaseSelector {
    pub fn matched(&self, profile: &CaseProfile) -> Option<&BaseRule> {
        let selected = profile.choice(self.field)?;
        self.rules.iter().find(|rule| rule.value == selected)
    }
}

/// Sub-components of an estimate that policies can cap independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    NonEconomic,
    Economic,
}

impl Component {
    pub const fn label(self) -> &'static str {
        match self {
            Component::NonEconomic => "non_economic",
            Component::Economic => "economic",
        }
    }
}

/// A field carrying already-realized dollar costs (documented medical bills,
/// lost wages). Cost amounts join the economic component after the multiplier
/// pass, scaled by the per-bound weights, and are never multiplied themselves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostField {
    pub field: &'static str,
    pub low_weight: f64,
    pub high_weight: f64,
    pub note: &'static str,
}

/// Declarative scoring table for one case domain: exactly one base selector,
/// the ordered modifier field groups, and the cost fields.
///
/// Tables are validated once at construction and never change afterwards, so
/// they are safe to share across concurrent estimates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleTable {
    base: BaseSelector,
    groups: Vec<FieldGroup>,
    costs: Vec<CostField>,
}

/// Authoring mistakes surfaced when a rule table is constructed.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("base selector for field '{field}' defines no rules")]
    EmptyBaseSelector { field: &'static str },
    #[error("base rule '{value}' has an invalid range (require 0 <= low <= high, finite)")]
    InvalidBaseRange { value: &'static str },
    #[error("base selector defines '{value}' more than once")]
    DuplicateBaseValue { value: &'static str },
    #[error("field group '{field}' defines no rules")]
    EmptyFieldGroup { field: &'static str },
    #[error("field '{field}' appears in more than one table position")]
    DuplicateField { field: &'static str },
    #[error("rule for '{value}' on field '{field}' is defined more than once")]
    DuplicateRuleValue {
        field: &'static str,
        value: &'static str,
    },
    #[error("field '{field}' carries a malformed numeric band")]
    InvalidBand { field: &'static str },
    #[error("numeric bands on field '{field}' overlap")]
    OverlappingBands { field: &'static str },
    #[error("a rule on field '{field}' has a non-finite or negative weight")]
    InvalidWeight { field: &'static str },
    #[error("a rule on field '{field}' has a non-finite or negative additive amount")]
    InvalidAdditive { field: &'static str },
    #[error("cost field '{field}' has invalid weights (require 0 <= low <= high, finite)")]
    InvalidCostWeights { field: &'static str },
}

impl RuleTable {
    pub fn new(
        base: BaseSelector,
        groups: Vec<FieldGroup>,
        costs: Vec<CostField>,
    ) -> Result<Self, TableError> {
        if base.rules.is_empty() {
            return Err(TableError::EmptyBaseSelector { field: base.field });
        }

        let mut base_values: Vec<&'static str> = Vec::with_capacity(base.rules.len());
        for rule in &base.rules {
            let well_formed = rule.low.is_finite()
                && rule.high.is_finite()
                && rule.low >= 0.0
                && rule.low <= rule.high;
            if !well_formed {
                return Err(TableError::InvalidBaseRange { value: rule.value });
            }
            if base_values.contains(&rule.value) {
                return Err(TableError::DuplicateBaseValue { value: rule.value });
            }
            base_values.push(rule.value);
        }

        let mut seen_fields: Vec<&'static str> = vec![base.field];
        for group in &groups {
            if seen_fields.contains(&group.field) {
                return Err(TableError::DuplicateField { field: group.field });
            }
            seen_fields.push(group.field);
            validate_group(group)?;
        }

        for cost in &costs {
            if seen_fields.contains(&cost.field) {
                return Err(TableError::DuplicateField { field: cost.field });
            }
            seen_fields.push(cost.field);

            let well_formed = cost.low_weight.is_finite()
                && cost.high_weight.is_finite()
                && cost.low_weight >= 0.0
                && cost.low_weight <= cost.high_weight;
            if !well_formed {
                return Err(TableError::InvalidCostWeights { field: cost.field });
            }
        }

        Ok(Self {
            base,
            groups,
            costs,
        })
    }

    pub fn base(&self) -> &BaseSelector {
        &self.base
    }

    pub fn groups(&self) -> &[FieldGroup] {
        &self.groups
    }

    pub fn cost_fields(&self) -> &[CostField] {
        &self.costs
    }

    pub fn field_count(&self) -> usize {
        1 + self.groups.len() + self.costs.len()
    }

    pub fn knows_field(&self, field: &str) -> bool {
        self.base.field == field
            || self.groups.iter().any(|group| group.field == field)
            || self.costs.iter().any(|cost| cost.field == field)
    }

    /// Whether a field's answers should be read as numbers rather than
    /// option identifiers. Cost fields always are; modifier fields are when
    /// they match on numeric bands.
    pub fn expects_amount(&self, field: &str) -> bool {
        if self.costs.iter().any(|cost| cost.field == field) {
            return true;
        }

        self.groups
            .iter()
            .filter(|group| group.field == field)
            .any(|group| {
                group
                    .rules
                    .iter()
                    .any(|rule| matches!(rule.value, ValueMatch::Band { .. }))
            })
    }
}

fn validate_group(group: &FieldGroup) -> Result<(), TableError> {
    if group.rules.is_empty() {
        return Err(TableError::EmptyFieldGroup { field: group.field });
    }

    let mut choices: Vec<&'static str> = Vec::new();
    let mut bands: Vec<(f64, Option<f64>)> = Vec::new();

    for rule in &group.rules {
        if !rule.effect.weight.is_finite() || rule.effect.weight < 0.0 {
            return Err(TableError::InvalidWeight { field: group.field });
        }
        if !rule.effect.additive.is_finite() || rule.effect.additive < 0.0 {
            return Err(TableError::InvalidAdditive { field: group.field });
        }

        match rule.value {
            ValueMatch::Choice(value) => {
                if choices.contains(&value) {
                    return Err(TableError::DuplicateRuleValue {
                        field: group.field,
                        value,
                    });
                }
                choices.push(value);
            }
            ValueMatch::Band { min, max } => {
                let well_formed = min.is_finite()
                    && min >= 0.0
                    && max.map_or(true, |upper| upper.is_finite() && upper > min);
                if !well_formed {
                    return Err(TableError::InvalidBand { field: group.field });
                }
                if bands
                    .iter()
                    .any(|&existing| bands_overlap(existing, (min, max)))
                {
                    return Err(TableError::OverlappingBands { field: group.field });
                }
                bands.push((min, max));
            }
        }
    }

    Ok(())
}

fn bands_overlap(a: (f64, Option<f64>), b: (f64, Option<f64>)) -> bool {
    let a_below_b = match a.1 {
        Some(upper) => upper <= b.0,
        None => false,
    };
    let b_below_a = match b.1 {
        Some(upper) => upper <= a.0,
        None => false,
    };

    !(a_below_b || b_below_a)
}
