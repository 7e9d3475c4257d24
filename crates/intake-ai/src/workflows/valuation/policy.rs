use serde::{Deserialize, Serialize};

use super::rules::Component;

/// Starting range used whenever the base selector does not match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BasePair {
    pub low: f64,
    pub high: f64,
}

impl BasePair {
    pub const fn new(low: f64, high: f64) -> Self {
        BasePair { low, high }
    }

    pub const fn single(amount: f64) -> Self {
        BasePair {
            low: amount,
            high: amount,
        }
    }
}

/// How the final range is produced.
///
/// `IndependentBounds` domains author real (low, high) base pairs and let the
/// two bounds accumulate separately. `SpreadFactor` domains conceptually track
/// one running total and widen it into a range at the end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeStrategy {
    IndependentBounds,
    SpreadFactor { low: f64, high: f64 },
}

/// Regulatory cap on one named sub-component, applied before the components
/// are summed into the final bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CapRule {
    pub component: Component,
    pub amount: f64,
}

/// Minimum final low and high values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FloorRule {
    pub low: f64,
    pub high: f64,
}

impl FloorRule {
    pub const NONE: FloorRule = FloorRule {
        low: 0.0,
        high: 0.0,
    };

    pub const fn new(low: f64, high: f64) -> Self {
        FloorRule { low, high }
    }
}

/// Round-half-up granularity for the final bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rounding {
    pub granularity: f64,
}

impl Rounding {
    pub const WHOLE: Rounding = Rounding { granularity: 1.0 };

    pub const fn nearest(granularity: f64) -> Self {
        Rounding { granularity }
    }
}

/// Confidence bucket attached to an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub const fn label(self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

/// Designates the fields whose combined matched weight is bucketed into a
/// confidence label. The combined score is the product of the designated
/// fields' matched weights, so thresholds read on the same scale the rule
/// tables author.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfidencePolicy {
    pub fields: Vec<&'static str>,
    pub medium_at: f64,
    pub high_at: f64,
}

impl ConfidencePolicy {
    pub fn bucket(&self, score: f64) -> Confidence {
        if score >= self.high_at {
            Confidence::High
        } else if score >= self.medium_at {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

/// Authoring mistakes surfaced when a policy is constructed.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("default base is invalid (require 0 <= low <= high, finite)")]
    InvalidDefaultBase,
    #[error("spread factors {low}/{high} are invalid (require 0 < low <= high, finite)")]
    InvalidSpread { low: f64, high: f64 },
    #[error("rounding granularity {granularity} is invalid (require > 0, finite)")]
    InvalidGranularity { granularity: f64 },
    #[error("floors are invalid (require 0 <= low <= high, finite)")]
    InvalidFloors,
    #[error("floor {floor} is not a multiple of the rounding granularity {granularity}")]
    MisalignedFloor { floor: f64, granularity: f64 },
    #[error("cap on {component:?} has an invalid amount {amount}")]
    InvalidCap { component: Component, amount: f64 },
    #[error("cap {cap} on {component:?} is below the low floor {floor}")]
    CapBelowFloor {
        component: Component,
        cap: f64,
        floor: f64,
    },
    #[error("more than one cap targets {component:?}")]
    DuplicateCap { component: Component },
    #[error("confidence policy designates no fields")]
    EmptyConfidenceFields,
    #[error("confidence thresholds {medium_at}/{high_at} are invalid (require 0 < medium <= high, finite)")]
    InvalidConfidenceThresholds { medium_at: f64, high_at: f64 },
}

/// Per-domain numeric configuration: default base, range strategy, caps,
/// floors, rounding, and the optional confidence derivation.
///
/// All validation happens here, once, so estimation itself never has to fail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Policy {
    default_base: BasePair,
    strategy: RangeStrategy,
    caps: Vec<CapRule>,
    floors: FloorRule,
    rounding: Rounding,
    confidence: Option<ConfidencePolicy>,
}

impl Policy {
    pub fn new(
        default_base: BasePair,
        strategy: RangeStrategy,
        caps: Vec<CapRule>,
        floors: FloorRule,
        rounding: Rounding,
        confidence: Option<ConfidencePolicy>,
    ) -> Result<Self, PolicyError> {
        let base_ok = default_base.low.is_finite()
            && default_base.high.is_finite()
            && default_base.low >= 0.0
            && default_base.low <= default_base.high;
        if !base_ok {
            return Err(PolicyError::InvalidDefaultBase);
        }

        if let RangeStrategy::SpreadFactor { low, high } = strategy {
            let spread_ok = low.is_finite() && high.is_finite() && low > 0.0 && low <= high;
            if !spread_ok {
                return Err(PolicyError::InvalidSpread { low, high });
            }
        }

        let granularity = rounding.granularity;
        if !granularity.is_finite() || granularity <= 0.0 {
            return Err(PolicyError::InvalidGranularity { granularity });
        }

        let floors_ok = floors.low.is_finite()
            && floors.high.is_finite()
            && floors.low >= 0.0
            && floors.low <= floors.high;
        if !floors_ok {
            return Err(PolicyError::InvalidFloors);
        }
        for floor in [floors.low, floors.high] {
            if !aligned(floor, granularity) {
                return Err(PolicyError::MisalignedFloor { floor, granularity });
            }
        }

        let mut capped: Vec<Component> = Vec::with_capacity(caps.len());
        for cap in &caps {
            if !cap.amount.is_finite() || cap.amount < 0.0 {
                return Err(PolicyError::InvalidCap {
                    component: cap.component,
                    amount: cap.amount,
                });
            }
            if cap.amount < floors.low {
                return Err(PolicyError::CapBelowFloor {
                    component: cap.component,
                    cap: cap.amount,
                    floor: floors.low,
                });
            }
            if capped.contains(&cap.component) {
                return Err(PolicyError::DuplicateCap {
                    component: cap.component,
                });
            }
            capped.push(cap.component);
        }

        if let Some(confidence) = &confidence {
            if confidence.fields.is_empty() {
                return Err(PolicyError::EmptyConfidenceFields);
            }
            let thresholds_ok = confidence.medium_at.is_finite()
                && confidence.high_at.is_finite()
                && confidence.medium_at > 0.0
                && confidence.medium_at <= confidence.high_at;
            if !thresholds_ok {
                return Err(PolicyError::InvalidConfidenceThresholds {
                    medium_at: confidence.medium_at,
                    high_at: confidence.high_at,
                });
            }
        }

        Ok(Self {
            default_base,
            strategy,
            caps,
            floors,
            rounding,
            confidence,
        })
    }

    pub fn default_base(&self) -> BasePair {
        self.default_base
    }

    pub fn strategy(&self) -> RangeStrategy {
        self.strategy
    }

    pub fn caps(&self) -> &[CapRule] {
        &self.caps
    }

    pub fn cap_for(&self, component: Component) -> Option<f64> {
        self.caps
            .iter()
            .find(|cap| cap.component == component)
            .map(|cap| cap.amount)
    }

    pub fn floors(&self) -> FloorRule {
        self.floors
    }

    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    pub fn confidence(&self) -> Option<&ConfidencePolicy> {
        self.confidence.as_ref()
    }
}

fn aligned(value: f64, granularity: f64) -> bool {
    let units = value / granularity;
    (units - units.round()).abs() < 1e-9
}
