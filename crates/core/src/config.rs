use crate::HandKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandRule {
    pub kind: HandKind,
    pub chips: i64,
    pub mult: i64,
}

/// Per-round budgets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundRules {
    pub hand_size: usize,
    pub hands: u32,
    pub discards: u32,
    #[serde(default = "default_max_selected")]
    pub max_selected: usize,
}

fn default_max_selected() -> usize {
    5
}

impl Default for RoundRules {
    fn default() -> Self {
        Self {
            hand_size: 8,
            hands: 4,
            discards: 30,
            max_selected: default_max_selected(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    #[serde(default)]
    pub round: RoundRules,
    /// Overrides for the built-in hand table; hand types not listed keep
    /// their defaults.
    #[serde(default)]
    pub hands: Vec<HandRule>,
    /// Blind thresholds in the order they are faced.
    #[serde(default = "default_blinds")]
    pub blinds: Vec<i64>,
    #[serde(default = "default_joker_slots")]
    pub joker_slots: usize,
}

fn default_blinds() -> Vec<i64> {
    vec![300, 450, 600]
}

fn default_joker_slots() -> usize {
    5
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round: RoundRules::default(),
            hands: Vec::new(),
            blinds: default_blinds(),
            joker_slots: default_joker_slots(),
        }
    }
}
