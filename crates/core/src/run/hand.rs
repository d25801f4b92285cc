use super::*;
use crate::{classify, score_hand, InvalidOperation};

impl<'p> Round<'p> {
    /// Fills the hand up to the hand size from the top of the deck and
    /// returns how many cards were dealt; an empty deck deals fewer.
    pub fn deal_to_hand(&mut self, events: &mut EventBus) -> Result<usize, InvalidOperation> {
        self.ensure_active()?;
        let needed = self.hand_size.saturating_sub(self.hand.len());
        if needed == 0 {
            return Err(InvalidOperation::HandFull);
        }
        let mut drawn = self.deck.draw_cards(needed);
        let count = drawn.len();
        self.hand.append(&mut drawn);
        if count > 0 {
            log::debug!("dealt {count} cards, {} left in deck", self.deck.remaining());
            events.push(Event::HandDealt { count });
        }
        Ok(count)
    }

    /// Toggles selection of the card at `index` and returns whether it is now
    /// selected. Selecting past the limit is ignored rather than refused.
    pub fn select(&mut self, index: usize) -> Result<bool, InvalidOperation> {
        let selected_count = self.num_selected();
        let max_selected = self.max_selected;
        let card = self
            .hand
            .get_mut(index)
            .ok_or(InvalidOperation::CardIndex(index))?;
        if card.selected {
            card.selected = false;
        } else if selected_count < max_selected {
            card.selected = true;
        }
        log::debug!("card {index} selected: {}", card.selected);
        Ok(card.selected)
    }

    pub fn num_selected(&self) -> usize {
        self.hand.iter().filter(|card| card.selected).count()
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        self.hand
            .iter()
            .enumerate()
            .filter(|(_, card)| card.selected)
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn selected_cards(&self) -> Vec<Card> {
        self.hand.iter().filter(|card| card.selected).copied().collect()
    }

    /// Classification of the current selection without playing it.
    pub fn current_hand_type_of_selection(&self) -> HandKind {
        classify(&self.selected_cards()).kind
    }

    /// Scores the selected cards. They stay in the hand, still selected,
    /// until the caller clears them with `discard(true)`.
    pub fn play_hand(&mut self, events: &mut EventBus) -> Result<PlayOutcome, InvalidOperation> {
        self.ensure_active()?;
        if self.num_selected() == 0 {
            return Err(InvalidOperation::NoSelection);
        }
        if self.hands_left == 0 {
            return Err(InvalidOperation::NoHandsLeft);
        }

        self.played = self.selected_cards();
        let eval = classify(&self.played);
        let mut positions = eval.scoring.clone();
        positions.sort_unstable();
        let scoring: Vec<Card> = positions.iter().map(|&idx| self.played[idx]).collect();

        let breakdown = score_hand(eval.kind, &scoring, &self.jokers, self.levels);
        for (idx, joker) in self.jokers.iter_mut().enumerate() {
            joker.scored = breakdown.fired.contains(&idx);
            if joker.scored {
                events.push(Event::JokerScored {
                    name: joker.def.name.clone(),
                });
            }
        }

        let total = breakdown.total_score();
        self.score = self.score.saturating_add(total);
        self.hands_left -= 1;
        self.played.clear();

        log::info!(
            "{} scored {} ({} x {}), round score {}",
            eval.kind,
            total,
            breakdown.total.chips,
            breakdown.total.mult,
            self.score
        );
        events.push(Event::HandScored {
            hand: eval.kind,
            chips: breakdown.total.chips,
            mult: breakdown.total.mult,
            total,
            score: self.score,
        });
        self.resolve_outcome(events);

        Ok(PlayOutcome {
            hand: eval.kind,
            scoring,
            score: self.score,
            base_chips: breakdown.base.chips,
            base_mult: breakdown.base.mult,
            breakdown,
            status: self.status,
        })
    }

    /// Removes the selected cards from the hand onto the discard pile.
    /// `just_played` clears cards that were just scored and does not spend
    /// a discard.
    pub fn discard(
        &mut self,
        just_played: bool,
        events: &mut EventBus,
    ) -> Result<usize, InvalidOperation> {
        self.ensure_active()?;
        if self.num_selected() == 0 {
            return Err(InvalidOperation::NoSelection);
        }
        if !just_played && self.discards_left == 0 {
            return Err(InvalidOperation::NoDiscardsLeft);
        }

        let (removed, kept): (Vec<Card>, Vec<Card>) =
            self.hand.drain(..).partition(|card| card.selected);
        self.hand = kept;
        let count = removed.len();
        self.deck.discard(removed);
        if !just_played {
            self.discards_left -= 1;
        }

        log::debug!(
            "discarded {count} cards (just_played: {just_played}), {} discards left",
            self.discards_left
        );
        events.push(Event::CardsDiscarded { count, just_played });
        Ok(count)
    }

    /// Reorders the hand: by rank (high first, then suit) or by suit (then
    /// rank high first).
    pub fn sort(&mut self, by_rank: bool) {
        if by_rank {
            self.hand
                .sort_by(|a, b| b.rank.cmp(&a.rank).then(a.suit.cmp(&b.suit)));
        } else {
            self.hand
                .sort_by(|a, b| a.suit.cmp(&b.suit).then(b.rank.cmp(&a.rank)));
        }
    }
}
