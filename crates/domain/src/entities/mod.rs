//! Domain entities

mod fight;
mod fighter;
mod location;

pub use fight::{FightId, FightOutcome, Team};
pub use fighter::{Fighter, FighterPair};
pub use location::Location;
