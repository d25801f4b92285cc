use thiserror::Error;

/// A rejected operation. Every variant is a precondition that did not hold;
/// the rejected call leaves all state untouched.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InvalidOperation {
    #[error("must have at least one card selected")]
    NoSelection,
    #[error("no hands left")]
    NoHandsLeft,
    #[error("no discards left")]
    NoDiscardsLeft,
    #[error("cannot deal to a full hand")]
    HandFull,
    #[error("round is already over")]
    RoundOver,
    #[error("no card at index {0}")]
    CardIndex(usize),
    #[error("no joker slots")]
    NoJokerSlots,
    #[error("cannot skip the boss blind")]
    CannotSkipBoss,
    #[error("no blinds left")]
    NoBlindsLeft,
}
