//! Reusable presentational components

mod fighter_card;
mod location_card;

pub use fighter_card::FighterCard;
pub use location_card::LocationCard;
