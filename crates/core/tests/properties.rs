//! Property tests for deck construction, classification and scoring.
use pokerblind_core::{
    build_deck, builtin_content, classify, score_hand, Card, Deck, HandKind, HandLevels,
    JokerInstance, Rank, RngState, Suit,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn card_strategy() -> impl Strategy<Value = Card> {
    (0usize..4, 0usize..13).prop_map(|(suit, rank)| Card::standard(Suit::ALL[suit], Rank::ALL[rank]))
}

// Duplicates allowed: a customised deck may hold repeated cards.
fn selection_strategy() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(card_strategy(), 1..=5)
}

fn all_jokers() -> Vec<JokerInstance> {
    builtin_content()
        .jokers
        .into_iter()
        .map(JokerInstance::new)
        .collect()
}

proptest! {
    #[test]
    fn shuffled_deck_draws_every_card_once(seed in any::<u64>()) {
        let mut rng = RngState::from_seed(seed);
        let mut deck = Deck::from_cards(build_deck(true, &mut rng));
        let mut drawn = Vec::new();
        while let Some(card) = deck.draw_cards(1).pop() {
            drawn.push(card);
        }
        prop_assert_eq!(drawn.len(), 52);
        prop_assert!(deck.is_empty());

        let unique: HashSet<(Suit, Rank)> = drawn.iter().map(|card| (card.suit, card.rank)).collect();
        prop_assert_eq!(unique.len(), 52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                prop_assert!(unique.contains(&(suit, rank)));
            }
        }
    }

    #[test]
    fn two_pair_is_never_returned(cards in selection_strategy()) {
        prop_assert_ne!(classify(&cards).kind, HandKind::TwoPair);
    }

    #[test]
    fn classification_is_deterministic(cards in selection_strategy()) {
        let first = classify(&cards);
        let second = classify(&cards);
        prop_assert_eq!(&first, &second);
        prop_assert!(!first.scoring.is_empty());
        prop_assert!(first.scoring.iter().all(|&idx| idx < cards.len()));
    }

    #[test]
    fn scoring_is_deterministic(cards in selection_strategy()) {
        let eval = classify(&cards);
        let scoring = eval.scoring_cards(&cards);
        let jokers = all_jokers();
        let levels = HandLevels::default();
        let first = score_hand(eval.kind, &scoring, &jokers, &levels);
        let second = score_hand(eval.kind, &scoring, &jokers, &levels);
        prop_assert_eq!(first.total_score(), second.total_score());
        prop_assert!(first.total_score() > 0);
    }

    #[test]
    fn five_of_one_rank_is_five_kind_or_flush_five(
        rank in 0usize..13,
        suits in prop::collection::vec(0usize..4, 5),
    ) {
        let cards: Vec<Card> = suits
            .iter()
            .map(|&suit| Card::standard(Suit::ALL[suit], Rank::ALL[rank]))
            .collect();
        let expected = if suits.iter().all(|&suit| suit == suits[0]) {
            HandKind::FlushFive
        } else {
            HandKind::FiveOfAKind
        };
        prop_assert_eq!(classify(&cards).kind, expected);
    }

    #[test]
    fn suited_runs_are_straight_or_royal_flushes(low in 0usize..9, suit in 0usize..4) {
        let cards: Vec<Card> = (low..low + 5)
            .map(|rank| Card::standard(Suit::ALL[suit], Rank::ALL[rank]))
            .collect();
        let expected = if Rank::ALL[low] >= Rank::Ten {
            HandKind::RoyalFlush
        } else {
            HandKind::StraightFlush
        };
        prop_assert_eq!(classify(&cards).kind, expected);
    }
}
