use serde::{Deserialize, Serialize};

pub use pokerblind_core::{
    ActivationType, Condition, Content, GameConfig, HandRule, JokerDef, RoundRules, RuleEffect,
};

/// Shape of `rules.json`: per-round budgets plus the joker slot count.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RulesFile {
    #[serde(default)]
    pub round: RoundRules,
    #[serde(default = "default_joker_slots")]
    pub joker_slots: usize,
}

fn default_joker_slots() -> usize {
    GameConfig::default().joker_slots
}

impl Default for RulesFile {
    fn default() -> Self {
        Self {
            round: RoundRules::default(),
            joker_slots: default_joker_slots(),
        }
    }
}
