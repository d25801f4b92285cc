use crate::{Card, HandKind, HandRule, JokerInstance, Score, ScoreTraceStep};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Base chips and mult for one hand type. `level` is tracked for display and
/// bumped by upgrades; scoring reads `chips` and `mult` directly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandLevel {
    pub chips: i64,
    pub mult: i64,
    pub level: u32,
}

/// Per-hand-type base values, owned by the profile and read by rounds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandLevels {
    levels: HashMap<HandKind, HandLevel>,
}

impl Default for HandLevels {
    fn default() -> Self {
        Self::from_rules(&[])
    }
}

impl HandLevels {
    /// Starts from the built-in table and overrides it with `rules`.
    pub fn from_rules(rules: &[HandRule]) -> Self {
        let mut levels: HashMap<HandKind, HandLevel> = HandKind::ALL
            .iter()
            .chain(std::iter::once(&HandKind::Empty))
            .map(|&kind| (kind, default_hand_level(kind)))
            .collect();
        for rule in rules {
            levels.insert(
                rule.kind,
                HandLevel {
                    chips: rule.chips,
                    mult: rule.mult,
                    level: if rule.kind == HandKind::Empty { 0 } else { 1 },
                },
            );
        }
        Self { levels }
    }

    pub fn get(&self, kind: HandKind) -> HandLevel {
        self.levels
            .get(&kind)
            .copied()
            .unwrap_or_else(|| default_hand_level(kind))
    }

    pub fn upgrade(&mut self, kind: HandKind, chips: i64, mult: i64) -> HandLevel {
        let entry = self
            .levels
            .entry(kind)
            .or_insert_with(|| default_hand_level(kind));
        entry.chips = entry.chips.saturating_add(chips);
        entry.mult = entry.mult.saturating_add(mult);
        entry.level = entry.level.saturating_add(1);
        *entry
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub hand: HandKind,
    /// Hand-type base values before any card or joker contribution.
    pub base: Score,
    pub card_chips: i64,
    pub total: Score,
    /// Positions (in the joker list) of the jokers that fired.
    pub fired: Vec<usize>,
    pub trace: Vec<ScoreTraceStep>,
}

impl ScoreBreakdown {
    pub fn total_score(&self) -> i64 {
        self.total.total()
    }
}

/// Scores a classified play: hand base values, plus the chips of every
/// scoring card, plus each firing joker in the order held. Pure: neither
/// cards nor jokers are touched.
pub fn score_hand(
    hand: HandKind,
    scoring: &[Card],
    jokers: &[JokerInstance],
    levels: &HandLevels,
) -> ScoreBreakdown {
    let level = levels.get(hand);
    let base = Score::new(level.chips, level.mult);
    let card_chips: i64 = scoring.iter().map(Card::chips).sum();

    let mut total = Score::new(base.chips + card_chips, base.mult);
    let mut fired = Vec::new();
    let mut trace = Vec::new();
    for (idx, joker) in jokers.iter().enumerate() {
        if !joker.def.fires(scoring) {
            continue;
        }
        let before = total;
        total.apply(&joker.def.effect);
        trace.push(ScoreTraceStep {
            source: joker.def.name.clone(),
            effect: joker.def.effect,
            before,
            after: total,
        });
        fired.push(idx);
    }

    ScoreBreakdown {
        hand,
        base,
        card_chips,
        total,
        fired,
        trace,
    }
}

pub fn default_hand_level(kind: HandKind) -> HandLevel {
    let (chips, mult) = match kind {
        HandKind::Empty => {
            return HandLevel {
                chips: 0,
                mult: 0,
                level: 0,
            }
        }
        HandKind::HighCard => (5, 1),
        HandKind::Pair => (10, 2),
        HandKind::TwoPair => (20, 2),
        HandKind::Trips => (30, 3),
        HandKind::Straight => (30, 4),
        HandKind::Flush => (35, 4),
        HandKind::FullHouse => (40, 4),
        HandKind::Quads => (60, 7),
        HandKind::StraightFlush | HandKind::RoyalFlush => (100, 8),
        HandKind::FiveOfAKind => (120, 12),
        HandKind::FlushHouse => (140, 14),
        HandKind::FlushFive => (160, 16),
    };
    HandLevel {
        chips,
        mult,
        level: 1,
    }
}
