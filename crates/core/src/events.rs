use crate::{BlindKind, HandKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Event {
    BlindStarted {
        ante: u32,
        blind: BlindKind,
        target: i64,
        hands: u32,
        discards: u32,
    },
    BlindSkipped {
        ante: u32,
        blind: BlindKind,
    },
    HandDealt {
        count: usize,
    },
    HandScored {
        hand: HandKind,
        chips: i64,
        mult: i64,
        total: i64,
        score: i64,
    },
    JokerScored {
        name: String,
    },
    CardsDiscarded {
        count: usize,
        just_played: bool,
    },
    BlindCleared {
        score: i64,
        target: i64,
    },
    BlindFailed {
        score: i64,
        target: i64,
    },
    HandUpgraded {
        hand: HandKind,
        level: u32,
    },
}

/// Ordered log of what happened, for a presentation layer to replay.
#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn events(&self) -> &[Event] {
        &self.queue
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
