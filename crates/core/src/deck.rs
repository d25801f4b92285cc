use crate::{Card, Rank, RngState, Suit};

/// Builds the canonical 52 cards: suits in [`Suit::ALL`] order, ranks Two
/// through Ace within each suit. With `shuffle` the result is permuted.
pub fn build_deck(shuffle: bool, rng: &mut RngState) -> Vec<Card> {
    let mut cards = standard_deck();
    if shuffle {
        rng.shuffle(&mut cards);
    }
    cards
}

pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::standard(suit, rank));
        }
    }
    cards
}

/// Draw pile plus discard pile. The draw pile is a stack: the last element
/// is the top card.
#[derive(Debug, Default, Clone)]
pub struct Deck {
    pub draw: Vec<Card>,
    pub discard: Vec<Card>,
}

impl Deck {
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            draw: cards,
            discard: Vec::new(),
        }
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.draw);
    }

    pub fn remaining(&self) -> usize {
        self.draw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draw.is_empty()
    }

    pub fn top(&self) -> Option<&Card> {
        self.draw.last()
    }

    /// Pops up to `count` cards from the top; fewer when the pile runs out.
    pub fn draw_cards(&mut self, count: usize) -> Vec<Card> {
        let mut cards = Vec::with_capacity(count.min(self.draw.len()));
        for _ in 0..count {
            if let Some(card) = self.draw.pop() {
                cards.push(card);
            } else {
                break;
            }
        }
        cards
    }

    pub fn discard(&mut self, mut cards: Vec<Card>) {
        for card in &mut cards {
            card.selected = false;
        }
        self.discard.append(&mut cards);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unshuffled_order_is_canonical() {
        let mut rng = RngState::from_seed(1);
        let cards = build_deck(false, &mut rng);
        assert_eq!(cards.len(), 52);
        assert_eq!(cards[0], Card::standard(Suit::Hearts, Rank::Two));
        assert_eq!(cards[12], Card::standard(Suit::Hearts, Rank::Ace));
        assert_eq!(cards[13], Card::standard(Suit::Clubs, Rank::Two));
        assert_eq!(cards[51], Card::standard(Suit::Spades, Rank::Ace));
    }

    #[test]
    fn draw_pops_from_top_and_stops_when_empty() {
        let mut deck = Deck::from_cards(vec![
            Card::standard(Suit::Hearts, Rank::Two),
            Card::standard(Suit::Hearts, Rank::Three),
        ]);
        let drawn = deck.draw_cards(5);
        assert_eq!(drawn.len(), 2);
        assert_eq!(drawn[0].rank, Rank::Three);
        assert!(deck.is_empty());
        assert!(deck.draw_cards(1).is_empty());
    }
}
