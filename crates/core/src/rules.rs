use serde::{Deserialize, Serialize};

/// The two score accumulators.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Score {
    pub chips: i64,
    pub mult: i64,
}

impl Score {
    pub fn new(chips: i64, mult: i64) -> Self {
        Self { chips, mult }
    }

    pub fn total(&self) -> i64 {
        self.chips.saturating_mul(self.mult)
    }

    pub fn apply(&mut self, effect: &RuleEffect) {
        match effect {
            RuleEffect::AddChips(value) => self.chips = self.chips.saturating_add(*value),
            RuleEffect::AddMult(value) => self.mult = self.mult.saturating_add(*value),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RuleEffect {
    AddChips(i64),
    AddMult(i64),
}

/// One modifier application, recorded for presentation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreTraceStep {
    pub source: String,
    pub effect: RuleEffect,
    pub before: Score,
    pub after: Score,
}
