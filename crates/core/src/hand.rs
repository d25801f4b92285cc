use crate::{Card, Rank, Suit};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Poker hand classifications, lowest to highest. `Empty` sits below
/// everything and only describes a selection with no cards in it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HandKind {
    Empty,
    HighCard,
    Pair,
    TwoPair,
    Trips,
    Straight,
    Flush,
    FullHouse,
    Quads,
    StraightFlush,
    RoyalFlush,
    FiveOfAKind,
    FlushHouse,
    FlushFive,
}

impl HandKind {
    /// Every playable hand type; excludes [`HandKind::Empty`].
    pub const ALL: [HandKind; 13] = [
        HandKind::HighCard,
        HandKind::Pair,
        HandKind::TwoPair,
        HandKind::Trips,
        HandKind::Straight,
        HandKind::Flush,
        HandKind::FullHouse,
        HandKind::Quads,
        HandKind::StraightFlush,
        HandKind::RoyalFlush,
        HandKind::FiveOfAKind,
        HandKind::FlushHouse,
        HandKind::FlushFive,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            HandKind::Empty => "",
            HandKind::HighCard => "High Card",
            HandKind::Pair => "Pair",
            HandKind::TwoPair => "Two Pair",
            HandKind::Trips => "Three of a Kind",
            HandKind::Straight => "Straight",
            HandKind::Flush => "Flush",
            HandKind::FullHouse => "Full House",
            HandKind::Quads => "Four of a Kind",
            HandKind::StraightFlush => "Straight Flush",
            HandKind::RoyalFlush => "Royal Flush",
            HandKind::FiveOfAKind => "Five of a Kind",
            HandKind::FlushHouse => "Flush House",
            HandKind::FlushFive => "Flush Five",
        }
    }
}

impl fmt::Display for HandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

const FLUSH_SIZE: usize = 5;
const STRAIGHT_SIZE: usize = 5;

/// Result of classifying a set of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandEval {
    pub kind: HandKind,
    /// Indices into the classified slice, highest rank first. Indices rather
    /// than cards so duplicate `(suit, rank)` cards stay distinguishable.
    pub scoring: Vec<usize>,
}

impl HandEval {
    fn new(kind: HandKind, scoring: Vec<usize>) -> Self {
        Self { kind, scoring }
    }

    pub fn scoring_cards(&self, cards: &[Card]) -> Vec<Card> {
        self.scoring.iter().map(|&idx| cards[idx]).collect()
    }
}

/// Classifies a selection of one to five cards. Checks run from the highest
/// priority hand down and the first match wins. Two Pair is never produced:
/// a hand holding two pairs reports [`HandKind::Pair`] with all four paired
/// cards scoring.
pub fn classify(cards: &[Card]) -> HandEval {
    if cards.is_empty() {
        return HandEval::new(HandKind::Empty, Vec::new());
    }

    let len = cards.len();
    let flush = find_flush(cards);
    let straight = find_straight(cards);
    let full_house = find_full_house(cards);
    let five = n_of_a_kind(cards, 5);

    if len == 5 {
        if !five.is_empty() && !flush.is_empty() {
            return HandEval::new(HandKind::FlushFive, five);
        }
        if !full_house.is_empty() && !flush.is_empty() {
            return HandEval::new(HandKind::FlushHouse, full_house);
        }
        if !five.is_empty() {
            return HandEval::new(HandKind::FiveOfAKind, five);
        }
        if !flush.is_empty() && !straight.is_empty() {
            let kind = if is_royal(cards, &straight) {
                HandKind::RoyalFlush
            } else {
                HandKind::StraightFlush
            };
            return HandEval::new(kind, flush);
        }
    }

    if len >= 4 {
        let quads = n_of_a_kind(cards, 4);
        if !quads.is_empty() {
            return HandEval::new(HandKind::Quads, quads);
        }
    }

    if len == 5 {
        if !full_house.is_empty() {
            return HandEval::new(HandKind::FullHouse, full_house);
        }
        if !flush.is_empty() {
            return HandEval::new(HandKind::Flush, flush);
        }
        if !straight.is_empty() {
            return HandEval::new(HandKind::Straight, straight);
        }
    }

    if len >= 3 {
        let trips = n_of_a_kind(cards, 3);
        if !trips.is_empty() {
            return HandEval::new(HandKind::Trips, trips);
        }
    }

    if len >= 2 {
        let pairs = n_of_a_kind(cards, 2);
        if !pairs.is_empty() {
            return HandEval::new(HandKind::Pair, pairs);
        }
    }

    let high = rank_order(cards)[0];
    HandEval::new(HandKind::HighCard, vec![high])
}

/// Indices of `cards` sorted by rank, highest first. Equal ranks keep their
/// input order.
pub fn rank_order(cards: &[Card]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..cards.len()).collect();
    order.sort_by(|&a, &b| cards[b].rank.cmp(&cards[a].rank));
    order
}

/// Every card of the majority suit when that suit has at least five cards.
pub fn find_flush(cards: &[Card]) -> Vec<usize> {
    if cards.len() < FLUSH_SIZE {
        return Vec::new();
    }
    let mut suit_counts: HashMap<Suit, usize> = HashMap::new();
    for card in cards {
        *suit_counts.entry(card.suit).or_insert(0) += 1;
    }
    let best = suit_counts
        .into_iter()
        .max_by(|(suit_a, count_a), (suit_b, count_b)| {
            count_a.cmp(count_b).then(suit_b.cmp(suit_a))
        });
    match best {
        Some((suit, count)) if count >= FLUSH_SIZE => rank_order(cards)
            .into_iter()
            .filter(|&idx| cards[idx].suit == suit)
            .collect(),
        _ => Vec::new(),
    }
}

/// Three cards of the most common rank (count at least three) followed by
/// two cards of the next most common other rank (count at least two).
pub fn find_full_house(cards: &[Card]) -> Vec<usize> {
    if cards.len() < 5 {
        return Vec::new();
    }
    let counts = rank_counts(cards);
    let Some(triple) = most_common_rank(&counts, 3, None) else {
        return Vec::new();
    };
    let Some(pair) = most_common_rank(&counts, 2, Some(triple)) else {
        return Vec::new();
    };

    let order = rank_order(cards);
    let mut picked: Vec<usize> = order
        .iter()
        .copied()
        .filter(|&idx| cards[idx].rank == triple)
        .take(3)
        .collect();
    picked.extend(
        order
            .iter()
            .copied()
            .filter(|&idx| cards[idx].rank == pair)
            .take(2),
    );
    picked
}

/// The five highest cards when each is exactly one rank above the next.
/// Only that single window is examined and an Ace never plays low.
pub fn find_straight(cards: &[Card]) -> Vec<usize> {
    if cards.len() < STRAIGHT_SIZE {
        return Vec::new();
    }
    let window: Vec<usize> = rank_order(cards).into_iter().take(STRAIGHT_SIZE).collect();
    let contiguous = window
        .windows(2)
        .all(|pair| cards[pair[0]].rank.ordinal() == cards[pair[1]].rank.ordinal() + 1);
    if contiguous {
        window
    } else {
        Vec::new()
    }
}

/// True when the lowest card of a straight flush is a Ten or better.
pub fn is_royal(cards: &[Card], straight_flush: &[usize]) -> bool {
    straight_flush
        .iter()
        .map(|&idx| cards[idx].rank)
        .min()
        .map(|lowest| lowest >= Rank::Ten)
        .unwrap_or(false)
}

/// Every card whose rank occurs exactly `n` times. When several ranks share
/// that count (two pairs, say) all of their cards are returned together.
pub fn n_of_a_kind(cards: &[Card], n: usize) -> Vec<usize> {
    let counts = rank_counts(cards);
    rank_order(cards)
        .into_iter()
        .filter(|&idx| counts.get(&cards[idx].rank).copied() == Some(n))
        .collect()
}

fn rank_counts(cards: &[Card]) -> HashMap<Rank, usize> {
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry(card.rank).or_insert(0) += 1;
    }
    counts
}

fn most_common_rank(
    counts: &HashMap<Rank, usize>,
    at_least: usize,
    exclude: Option<Rank>,
) -> Option<Rank> {
    counts
        .iter()
        .filter(|(rank, &count)| count >= at_least && Some(**rank) != exclude)
        .max_by(|(rank_a, count_a), (rank_b, count_b)| {
            count_a.cmp(count_b).then(rank_a.cmp(rank_b))
        })
        .map(|(rank, _)| *rank)
}
