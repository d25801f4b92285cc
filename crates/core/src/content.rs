use crate::{ActivationType, Condition, JokerDef, RngState, RuleEffect};
use serde::{Deserialize, Serialize};

/// Catalog of joker definitions available to a profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    pub jokers: Vec<JokerDef>,
}

impl Content {
    pub fn joker_by_id(&self, id: &str) -> Option<&JokerDef> {
        self.jokers.iter().find(|joker| joker.id == id)
    }

    pub fn pick_joker<'a>(&'a self, rng: &mut RngState) -> Option<&'a JokerDef> {
        rng.pick_index(self.jokers.len())
            .and_then(|idx| self.jokers.get(idx))
    }
}

/// The built-in jokers, usable without loading any assets.
pub fn builtin_content() -> Content {
    let pair = || Condition::HasKind(2);
    let trips = || Condition::HasKind(3);
    let four_card_pair = || Condition::All(vec![Condition::HasKind(2), Condition::CardCount(4)]);

    let jokers = vec![
        joker("sly", "Sly Joker", 3, RuleEffect::AddChips(50), pair()),
        joker("wily", "Wily Joker", 3, RuleEffect::AddChips(100), trips()),
        joker("clever", "Clever Joker", 4, RuleEffect::AddChips(80), four_card_pair()),
        joker("devious", "Devious Joker", 4, RuleEffect::AddChips(100), Condition::HasStraight),
        joker("crafty", "Crafty Joker", 4, RuleEffect::AddChips(80), Condition::HasFlush),
        joker("jolly", "Jolly Joker", 3, RuleEffect::AddMult(8), pair()),
        joker("zany", "Zany Joker", 4, RuleEffect::AddMult(12), trips()),
        joker("mad", "Mad Joker", 4, RuleEffect::AddMult(10), four_card_pair()),
        joker("crazy", "Crazy Joker", 4, RuleEffect::AddMult(12), Condition::HasStraight),
        joker("droll", "Droll Joker", 4, RuleEffect::AddMult(10), Condition::HasFlush),
    ];
    Content { jokers }
}

fn joker(id: &str, name: &str, cost: i64, effect: RuleEffect, when: Condition) -> JokerDef {
    JokerDef {
        id: id.to_string(),
        name: name.to_string(),
        cost,
        trigger: ActivationType::Independent,
        effect,
        when,
    }
}
