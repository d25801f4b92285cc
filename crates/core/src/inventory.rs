use crate::{InvalidOperation, JokerDef, JokerInstance};
use serde::{Deserialize, Serialize};

/// Jokers owned across rounds, in held order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    pub joker_slots: usize,
    pub jokers: Vec<JokerInstance>,
}

impl Inventory {
    pub fn with_slots(joker_slots: usize) -> Self {
        Self {
            joker_slots,
            jokers: Vec::new(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.jokers.len() >= self.joker_slots
    }

    pub fn add_joker(&mut self, def: JokerDef) -> Result<(), InvalidOperation> {
        if self.is_full() {
            return Err(InvalidOperation::NoJokerSlots);
        }
        self.jokers.push(JokerInstance::new(def));
        Ok(())
    }

    pub fn remove_joker(&mut self, index: usize) -> Option<JokerInstance> {
        (index < self.jokers.len()).then(|| self.jokers.remove(index))
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::with_slots(5)
    }
}
