use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Answer supplied for one intake field: a selected option identifier or a
/// non-negative number such as a dollar amount, age, or duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Amount(f64),
    Choice(String),
}

impl FieldValue {
    pub fn choice(value: impl Into<String>) -> Self {
        FieldValue::Choice(value.into())
    }

    /// Numeric answers are clamped to a finite, non-negative amount.
    pub fn amount(value: f64) -> Self {
        FieldValue::Amount(sanitize_amount(value))
    }

    pub fn as_choice(&self) -> Option<&str> {
        match self {
            FieldValue::Choice(value) => Some(value.as_str()),
            FieldValue::Amount(_) => None,
        }
    }

    pub fn as_amount(&self) -> Option<f64> {
        match self {
            FieldValue::Amount(value) => Some(*value),
            FieldValue::Choice(_) => None,
        }
    }
}

pub(crate) fn sanitize_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Immutable snapshot of a completed intake, keyed by field identifier.
///
/// Unanswered fields are simply absent; identifiers the rule table does not
/// know are carried but ignored during estimation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CaseProfile {
    answers: BTreeMap<String, FieldValue>,
}

impl CaseProfile {
    /// Freeze an answer map into a profile, sanitizing numeric values.
    pub fn from_answers(answers: BTreeMap<String, FieldValue>) -> Self {
        let answers = answers
            .into_iter()
            .map(|(field, value)| match value {
                FieldValue::Amount(amount) => (field, FieldValue::Amount(sanitize_amount(amount))),
                choice => (field, choice),
            })
            .collect();

        Self { answers }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn value(&self, field: &str) -> Option<&FieldValue> {
        self.answers.get(field)
    }

    pub fn choice(&self, field: &str) -> Option<&str> {
        self.answers.get(field).and_then(FieldValue::as_choice)
    }

    pub fn amount(&self, field: &str) -> Option<f64> {
        self.answers.get(field).and_then(FieldValue::as_amount)
    }

    pub fn answers(&self) -> &BTreeMap<String, FieldValue> {
        &self.answers
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}
