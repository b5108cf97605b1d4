//! Presentation state

mod fight_state;

pub use fight_state::{
    FightEvent, FightIntent, FightPhase, FightSlot, FightState, InFlight, StateChange,
};
