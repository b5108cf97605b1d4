//! Effect handlers bridging UI state and the back-end ports

mod fight_effects;

pub use fight_effects::{run_effect, FightEffect};
