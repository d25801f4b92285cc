use super::*;
use crate::{InvalidOperation, JokerDef};

impl<'p> Round<'p> {
    pub fn blind(&self) -> Blind {
        self.blind
    }

    pub fn target(&self) -> i64 {
        self.blind.target
    }

    pub fn current_score(&self) -> i64 {
        self.score
    }

    pub fn num_hands_remaining(&self) -> u32 {
        self.hands_left
    }

    pub fn num_discards_remaining(&self) -> u32 {
        self.discards_left
    }

    pub fn deck_remaining_count(&self) -> usize {
        self.deck.remaining()
    }

    pub fn is_deck_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// The next card a deal would take.
    pub fn deck_top(&self) -> Option<&Card> {
        self.deck.top()
    }

    pub fn discard_pile(&self) -> &[Card] {
        &self.deck.discard
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn hand_size(&self) -> usize {
        self.hand_size
    }

    pub fn played(&self) -> &[Card] {
        &self.played
    }

    pub fn jokers(&self) -> &[JokerInstance] {
        &self.jokers
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn is_done(&self) -> bool {
        self.status != RoundStatus::Active
    }

    pub fn did_win(&self) -> bool {
        self.status == RoundStatus::Won
    }

    /// Adds a joker for the rest of this round only.
    pub fn add_joker(&mut self, def: JokerDef) -> Result<(), InvalidOperation> {
        self.ensure_active()?;
        if self.jokers.len() >= self.joker_slots {
            return Err(InvalidOperation::NoJokerSlots);
        }
        self.jokers.push(JokerInstance::new(def));
        Ok(())
    }

    pub(super) fn ensure_active(&self) -> Result<(), InvalidOperation> {
        if self.is_done() {
            return Err(InvalidOperation::RoundOver);
        }
        Ok(())
    }

    /// Settles the round after a play. Reaching the target wins even when
    /// the same play used the last hand.
    pub(super) fn resolve_outcome(&mut self, events: &mut EventBus) {
        if self.score >= self.blind.target {
            self.status = RoundStatus::Won;
            log::info!("blind cleared: {} / {}", self.score, self.blind.target);
            events.push(Event::BlindCleared {
                score: self.score,
                target: self.blind.target,
            });
        } else if self.hands_left == 0 {
            self.status = RoundStatus::Lost;
            log::info!("blind failed: {} / {}", self.score, self.blind.target);
            events.push(Event::BlindFailed {
                score: self.score,
                target: self.blind.target,
            });
        }
    }
}
