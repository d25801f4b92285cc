use crate::{find_flush, find_straight, n_of_a_kind, Card, RuleEffect};
use serde::{Deserialize, Serialize};

/// When a joker is consulted. Only [`ActivationType::Independent`] (after all
/// played cards have scored) has a trigger point in the scoring pass; the
/// others are carried on definitions but never fire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivationType {
    Independent,
    OnPlayed,
    OnScored,
    OnHeld,
    OnDiscard,
    Passive,
}

/// Predicate over the scoring cards of a play.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Always,
    /// Some rank occurs exactly this many times.
    HasKind(usize),
    HasStraight,
    HasFlush,
    CardCount(usize),
    All(Vec<Condition>),
    Any(Vec<Condition>),
    Not(Box<Condition>),
}

impl Condition {
    pub fn matches(&self, scoring: &[Card]) -> bool {
        match self {
            Condition::Always => true,
            Condition::HasKind(n) => !n_of_a_kind(scoring, *n).is_empty(),
            Condition::HasStraight => !find_straight(scoring).is_empty(),
            Condition::HasFlush => !find_flush(scoring).is_empty(),
            Condition::CardCount(n) => scoring.len() == *n,
            Condition::All(conditions) => conditions.iter().all(|c| c.matches(scoring)),
            Condition::Any(conditions) => conditions.iter().any(|c| c.matches(scoring)),
            Condition::Not(inner) => !inner.matches(scoring),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JokerDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub cost: i64,
    pub trigger: ActivationType,
    pub effect: RuleEffect,
    #[serde(default = "always")]
    pub when: Condition,
}

fn always() -> Condition {
    Condition::Always
}

impl JokerDef {
    /// Whether this joker applies its effect during the scoring pass.
    pub fn fires(&self, scoring: &[Card]) -> bool {
        self.trigger == ActivationType::Independent && self.when.matches(scoring)
    }
}

/// A joker held by a profile or a round. `scored` is presentation state: set
/// when the joker fired on the most recent play.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JokerInstance {
    pub def: JokerDef,
    #[serde(default)]
    pub scored: bool,
}

impl JokerInstance {
    pub fn new(def: JokerDef) -> Self {
        Self { def, scored: false }
    }
}
