use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::profile::{CaseProfile, FieldValue};

/// One wizard step and the fields it requires before advancing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntakeStep {
    pub title: &'static str,
    pub fields: Vec<&'static str>,
}

/// Ordered intake steps for one domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntakeForm {
    steps: Vec<IntakeStep>,
}

impl IntakeForm {
    pub fn new(steps: Vec<IntakeStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[IntakeStep] {
        &self.steps
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn required_fields(&self) -> Vec<&'static str> {
        self.steps
            .iter()
            .flat_map(|step| step.fields.iter().copied())
            .collect()
    }
}

/// Raised when a wizard step is left incomplete.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("step '{step}' is missing answers for {missing:?}")]
    MissingAnswers {
        step: &'static str,
        missing: Vec<&'static str>,
    },
}

/// Stateful builder walking an intake form step by step.
///
/// Answers accumulate privately; estimation only ever sees the immutable
/// snapshot `finalize` produces, never intermediate wizard state.
#[derive(Debug, Clone)]
pub struct IntakeWizard<'a> {
    form: &'a IntakeForm,
    answers: BTreeMap<String, FieldValue>,
    step: usize,
}

impl<'a> IntakeWizard<'a> {
    pub fn new(form: &'a IntakeForm) -> Self {
        Self {
            form,
            answers: BTreeMap::new(),
            step: 0,
        }
    }

    /// The step currently being answered, or `None` once every step is done.
    pub fn current_step(&self) -> Option<&'a IntakeStep> {
        self.form.steps().get(self.step)
    }

    pub fn is_complete(&self) -> bool {
        self.step >= self.form.step_count()
    }

    /// Record an answer. Numeric answers are sanitized on the way in; fields
    /// no step asks for are kept and simply ignored downstream.
    pub fn record(&mut self, field: impl Into<String>, value: FieldValue) {
        let value = match value {
            FieldValue::Amount(amount) => FieldValue::amount(amount),
            choice => choice,
        };
        self.answers.insert(field.into(), value);
    }

    /// Move to the next step once the current one is fully answered.
    pub fn advance(&mut self) -> Result<(), IntakeError> {
        if let Some(step) = self.current_step() {
            let missing = self.missing_for(step);
            if !missing.is_empty() {
                return Err(IntakeError::MissingAnswers {
                    step: step.title,
                    missing,
                });
            }
            self.step += 1;
        }
        Ok(())
    }

    pub fn back(&mut self) {
        self.step = self.step.saturating_sub(1);
    }

    /// Validate every step and freeze the answers into a profile.
    pub fn finalize(self) -> Result<CaseProfile, IntakeError> {
        for step in self.form.steps() {
            let missing = self.missing_for(step);
            if !missing.is_empty() {
                return Err(IntakeError::MissingAnswers {
                    step: step.title,
                    missing,
                });
            }
        }

        Ok(CaseProfile::from_answers(self.answers))
    }

    fn missing_for(&self, step: &IntakeStep) -> Vec<&'static str> {
        step.fields
            .iter()
            .copied()
            .filter(|field| !self.answers.contains_key(*field))
            .collect()
    }
}

/// Wire-side answer map for clients that run their own intake flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseSubmission {
    pub answers: BTreeMap<String, FieldValue>,
    #[serde(default)]
    pub submitted_on: Option<NaiveDate>,
}

impl CaseSubmission {
    pub fn into_profile(self) -> CaseProfile {
        CaseProfile::from_answers(self.answers)
    }
}
