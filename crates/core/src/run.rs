use crate::{
    Blind, Card, Deck, Event, EventBus, HandKind, HandLevels, JokerInstance, Profile, RngState,
    ScoreBreakdown,
};
use serde::{Deserialize, Serialize};

mod blind;
mod hand;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundStatus {
    Active,
    Won,
    Lost,
}

/// What a play produced, for presentation.
#[derive(Debug, Clone)]
pub struct PlayOutcome {
    pub hand: HandKind,
    /// Scoring cards in the order they were played.
    pub scoring: Vec<Card>,
    /// Cumulative round score after this play.
    pub score: i64,
    pub base_chips: i64,
    pub base_mult: i64,
    pub breakdown: ScoreBreakdown,
    pub status: RoundStatus,
}

/// One blind from start to win or loss.
///
/// The round owns a shuffled copy of the profile's deck and reads the
/// profile's hand levels through a shared borrow; nothing here writes back
/// to the profile.
#[derive(Debug)]
pub struct Round<'p> {
    levels: &'p HandLevels,
    blind: Blind,
    deck: Deck,
    hand: Vec<Card>,
    played: Vec<Card>,
    jokers: Vec<JokerInstance>,
    joker_slots: usize,
    hand_size: usize,
    max_selected: usize,
    hands_left: u32,
    discards_left: u32,
    score: i64,
    status: RoundStatus,
}

impl<'p> Round<'p> {
    /// Starts a round against `blind`. The deck copy is shuffled here and
    /// only here.
    pub fn start(
        profile: &'p Profile,
        blind: Blind,
        rng: &mut RngState,
        events: &mut EventBus,
    ) -> Self {
        let mut deck = Deck::from_cards(profile.deck.clone());
        deck.shuffle(rng);
        let jokers = profile
            .inventory
            .jokers
            .iter()
            .cloned()
            .map(|mut joker| {
                joker.scored = false;
                joker
            })
            .collect();
        let rules = profile.rules;

        log::info!(
            "blind started: ante {} {:?}, target {}, {} hands, {} discards",
            blind.ante,
            blind.kind,
            blind.target,
            rules.hands,
            rules.discards
        );
        events.push(Event::BlindStarted {
            ante: blind.ante,
            blind: blind.kind,
            target: blind.target,
            hands: rules.hands,
            discards: rules.discards,
        });

        Self {
            levels: &profile.levels,
            blind,
            deck,
            hand: Vec::with_capacity(rules.hand_size),
            played: Vec::new(),
            jokers,
            joker_slots: profile.inventory.joker_slots,
            hand_size: rules.hand_size,
            max_selected: rules.max_selected,
            hands_left: rules.hands,
            discards_left: rules.discards,
            score: 0,
            status: RoundStatus::Active,
        }
    }
}
