use crate::{
    standard_deck, Card, Event, EventBus, GameConfig, HandKind, HandLevel, HandLevels,
    InvalidOperation, Inventory, JokerDef, RoundRules,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BlindKind {
    Small,
    Big,
    Boss,
}

impl BlindKind {
    /// Blinds cycle Small, Big, Boss; rounds count from 1.
    pub fn for_round(round: u32) -> Self {
        match round % 3 {
            1 => BlindKind::Small,
            2 => BlindKind::Big,
            _ => BlindKind::Boss,
        }
    }
}

/// A blind the profile has committed to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Blind {
    pub ante: u32,
    pub round: u32,
    pub kind: BlindKind,
    pub target: i64,
}

/// Progression that outlives a single round. A [`crate::Round`] borrows the
/// profile immutably, so hand levels can only change between rounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Master deck in canonical order; each round shuffles its own copy.
    pub deck: Vec<Card>,
    pub levels: HandLevels,
    pub rules: RoundRules,
    pub inventory: Inventory,
    pub round: u32,
    pub ante: u32,
    pub money: i64,
    /// Stack of thresholds: the next blind is the last element.
    blinds: Vec<i64>,
}

impl Profile {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            deck: standard_deck(),
            levels: HandLevels::from_rules(&config.hands),
            rules: config.round,
            inventory: Inventory::with_slots(config.joker_slots),
            round: 0,
            ante: 0,
            money: 0,
            blinds: config.blinds.iter().rev().copied().collect(),
        }
    }

    pub fn blinds_remaining(&self) -> usize {
        self.blinds.len()
    }

    /// The next `count` thresholds, soonest first.
    pub fn upcoming_blinds(&self, count: usize) -> Vec<i64> {
        self.blinds.iter().rev().take(count).copied().collect()
    }

    pub fn next_blind_kind(&self) -> BlindKind {
        BlindKind::for_round(self.round + 1)
    }

    /// Commits to the next blind and returns it; the caller starts a round
    /// against it.
    pub fn next_blind(&mut self) -> Result<Blind, InvalidOperation> {
        let target = self.blinds.pop().ok_or(InvalidOperation::NoBlindsLeft)?;
        self.advance_round();
        log::debug!("entering round {} (ante {}), target {}", self.round, self.ante, target);
        Ok(Blind {
            ante: self.ante,
            round: self.round,
            kind: BlindKind::for_round(self.round),
            target,
        })
    }

    /// Passes on the next blind. Boss blinds cannot be skipped.
    pub fn skip_blind(&mut self, events: &mut EventBus) -> Result<Blind, InvalidOperation> {
        if self.next_blind_kind() == BlindKind::Boss {
            return Err(InvalidOperation::CannotSkipBoss);
        }
        let blind = self.next_blind()?;
        events.push(Event::BlindSkipped {
            ante: blind.ante,
            blind: blind.kind,
        });
        Ok(blind)
    }

    pub fn upgrade_hand(
        &mut self,
        hand: HandKind,
        chips: i64,
        mult: i64,
        events: &mut EventBus,
    ) -> HandLevel {
        let level = self.levels.upgrade(hand, chips, mult);
        events.push(Event::HandUpgraded {
            hand,
            level: level.level,
        });
        level
    }

    pub fn add_joker(&mut self, def: JokerDef) -> Result<(), InvalidOperation> {
        self.inventory.add_joker(def)
    }

    fn advance_round(&mut self) {
        self.round += 1;
        if self.round % 3 == 1 {
            self.ante += 1;
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
