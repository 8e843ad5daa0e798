//! Pairing safety rule.
//!
//! Two athletes may wrestle when their effective weights differ by less
//! than a fixed fraction of the lighter athlete's weight.

use crate::Athlete;
use serde::{Deserialize, Serialize};

/// How the rule decides that two athletes are the same person
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum IdentityMode {
    /// Same printed entry (name, weight, school, skill). Identical roster
    /// twins can never be paired with each other.
    #[default]
    Value,
    /// Same roster record
    Id,
}

/// Decides whether two athletes may be paired
#[derive(Clone, Copy, Debug)]
pub struct SafetyRule {
    max_ratio: f64,
    identity: IdentityMode,
}

impl Default for SafetyRule {
    fn default() -> Self {
        Self::new(0.05, IdentityMode::Value)
    }
}

impl SafetyRule {
    pub fn new(max_ratio: f64, identity: IdentityMode) -> Self {
        Self {
            max_ratio,
            identity,
        }
    }

    pub fn max_ratio(&self) -> f64 {
        self.max_ratio
    }

    pub fn identity(&self) -> IdentityMode {
        self.identity
    }

    pub fn is_same_athlete(&self, a: &Athlete, b: &Athlete) -> bool {
        match self.identity {
            IdentityMode::Value => a.same_entry(b),
            IdentityMode::Id => a.id() == b.id(),
        }
    }

    /// Weight gap relative to the lighter of the two
    pub fn weight_ratio(a: &Athlete, b: &Athlete) -> f64 {
        let (wa, wb) = (a.effective_weight(), b.effective_weight());
        (wa - wb).abs() / wa.min(wb)
    }

    /// Safe when distinct and strictly under the ratio. Symmetric.
    pub fn is_safe_match(&self, a: &Athlete, b: &Athlete) -> bool {
        if self.is_same_athlete(a, b) {
            return false;
        }
        Self::weight_ratio(a, b) < self.max_ratio
    }
}
