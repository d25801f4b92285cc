//! Rules engine for a poker-scoring blind challenge. Keep this crate free of
//! IO and presentation concerns.

pub mod cards;
pub mod config;
pub mod content;
pub mod deck;
pub mod error;
pub mod events;
pub mod hand;
pub mod inventory;
pub mod joker;
pub mod rng;
pub mod rules;
pub mod run;
pub mod scoring;
pub mod state;

pub use cards::*;
pub use config::*;
pub use content::*;
pub use deck::*;
pub use error::*;
pub use events::*;
pub use hand::*;
pub use inventory::*;
pub use joker::*;
pub use rng::*;
pub use rules::*;
pub use run::*;
pub use scoring::*;
pub use state::*;
