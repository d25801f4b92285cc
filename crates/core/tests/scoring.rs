use pokerblind_core::{
    builtin_content, classify, score_hand, ActivationType, Card, Condition, HandKind, HandLevels,
    HandRule, JokerDef, JokerInstance, Rank, RuleEffect, Score, Suit,
};

fn held(ids: &[&str]) -> Vec<JokerInstance> {
    let content = builtin_content();
    ids.iter()
        .map(|id| JokerInstance::new(content.joker_by_id(id).expect("builtin joker").clone()))
        .collect()
}

fn twos() -> Vec<Card> {
    vec![
        Card::standard(Suit::Hearts, Rank::Two),
        Card::standard(Suit::Spades, Rank::Two),
    ]
}

#[test]
fn pair_of_twos_scores_twenty_eight() {
    let levels = HandLevels::default();
    let breakdown = score_hand(HandKind::Pair, &twos(), &[], &levels);
    assert_eq!(breakdown.base, Score::new(10, 2));
    assert_eq!(breakdown.card_chips, 4);
    assert_eq!(breakdown.total, Score::new(14, 2));
    assert_eq!(breakdown.total_score(), 28);
    assert!(breakdown.fired.is_empty());
}

#[test]
fn ace_contributes_eleven_chips() {
    let levels = HandLevels::default();
    let scoring = [Card::standard(Suit::Clubs, Rank::Ace)];
    let breakdown = score_hand(HandKind::HighCard, &scoring, &[], &levels);
    assert_eq!(breakdown.total, Score::new(16, 1));
}

#[test]
fn empty_hand_scores_nothing() {
    let levels = HandLevels::default();
    let breakdown = score_hand(HandKind::Empty, &[], &[], &levels);
    assert_eq!(breakdown.total_score(), 0);
}

#[test]
fn matching_jokers_apply_in_held_order() {
    let levels = HandLevels::default();
    let jokers = held(&["jolly", "sly", "droll"]);
    let breakdown = score_hand(HandKind::Pair, &twos(), &jokers, &levels);

    assert_eq!(breakdown.fired, vec![0, 1]);
    assert_eq!(breakdown.total, Score::new(64, 10));
    assert_eq!(breakdown.total_score(), 640);
    assert_eq!(breakdown.trace.len(), 2);
    assert_eq!(breakdown.trace[0].source, "Jolly Joker");
    assert_eq!(breakdown.trace[0].before, Score::new(14, 2));
    assert_eq!(breakdown.trace[0].after, Score::new(14, 10));
    assert_eq!(breakdown.trace[1].effect, RuleEffect::AddChips(50));
    assert_eq!(breakdown.trace[1].after, Score::new(64, 10));
}

#[test]
fn clever_and_mad_fire_on_two_pairs() {
    let played = vec![
        Card::standard(Suit::Hearts, Rank::Four),
        Card::standard(Suit::Clubs, Rank::Queen),
        Card::standard(Suit::Spades, Rank::Four),
        Card::standard(Suit::Diamonds, Rank::Queen),
        Card::standard(Suit::Hearts, Rank::Eight),
    ];
    let eval = classify(&played);
    let scoring = eval.scoring_cards(&played);
    let jokers = held(&["clever", "mad", "zany"]);
    let breakdown = score_hand(eval.kind, &scoring, &jokers, &HandLevels::default());
    assert_eq!(breakdown.fired, vec![0, 1]);
    // 10 base + 4 + 4 + 10 + 10 card chips + 80; 2 + 10 mult
    assert_eq!(breakdown.total, Score::new(118, 12));
}

#[test]
fn straight_and_flush_jokers() {
    let played: Vec<Card> = [Rank::Five, Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine]
        .into_iter()
        .map(|rank| Card::standard(Suit::Hearts, rank))
        .collect();
    let eval = classify(&played);
    assert_eq!(eval.kind, HandKind::StraightFlush);
    let scoring = eval.scoring_cards(&played);
    let jokers = held(&["devious", "crafty", "crazy", "droll", "sly"]);
    let breakdown = score_hand(eval.kind, &scoring, &jokers, &HandLevels::default());
    assert_eq!(breakdown.fired, vec![0, 1, 2, 3]);
    // 100 + (5+6+7+8+9) + 100 + 80 chips; 8 + 12 + 10 mult
    assert_eq!(breakdown.total, Score::new(315, 30));
}

#[test]
fn only_independent_jokers_fire() {
    let passive = JokerDef {
        id: "held_bonus".to_string(),
        name: "Held Bonus".to_string(),
        cost: 1,
        trigger: ActivationType::OnHeld,
        effect: RuleEffect::AddMult(100),
        when: Condition::Always,
    };
    let always = JokerDef {
        trigger: ActivationType::Independent,
        effect: RuleEffect::AddChips(1),
        ..passive.clone()
    };
    let jokers = vec![JokerInstance::new(passive), JokerInstance::new(always)];
    let breakdown = score_hand(HandKind::Pair, &twos(), &jokers, &HandLevels::default());
    assert_eq!(breakdown.fired, vec![1]);
    assert_eq!(breakdown.total, Score::new(15, 2));
}

#[test]
fn scoring_is_deterministic_and_pure() {
    let levels = HandLevels::default();
    let jokers = held(&["jolly", "sly"]);
    let cards = twos();
    let first = score_hand(HandKind::Pair, &cards, &jokers, &levels);
    let second = score_hand(HandKind::Pair, &cards, &jokers, &levels);
    assert_eq!(first, second);
    assert!(jokers.iter().all(|joker| !joker.scored));
}

#[test]
fn configured_and_upgraded_levels_change_base() {
    let mut levels = HandLevels::from_rules(&[HandRule {
        kind: HandKind::Pair,
        chips: 12,
        mult: 3,
    }]);
    assert_eq!(levels.get(HandKind::Pair).level, 1);
    assert_eq!(levels.get(HandKind::Flush).chips, 35);

    let upgraded = levels.upgrade(HandKind::Pair, 15, 1);
    assert_eq!(upgraded.level, 2);
    let breakdown = score_hand(HandKind::Pair, &twos(), &[], &levels);
    assert_eq!(breakdown.base, Score::new(27, 4));
    assert_eq!(breakdown.total_score(), 31 * 4);
}

#[test]
fn empty_level_is_zeroed() {
    let levels = HandLevels::default();
    let empty = levels.get(HandKind::Empty);
    assert_eq!((empty.chips, empty.mult, empty.level), (0, 0, 0));
}
