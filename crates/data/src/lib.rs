//! Loading and validation of game rules and joker content from JSON assets.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;
