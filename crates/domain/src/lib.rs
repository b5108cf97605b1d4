//! Domain types shared by the fight UI.
//!
//! These mirror the JSON documents served by the fights back-end, so every
//! type round-trips through serde with camelCase field names.

pub mod entities;

pub use entities::{FightId, FightOutcome, Fighter, FighterPair, Location, Team};
