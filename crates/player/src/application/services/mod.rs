//! Application services

mod fight_service;

pub use fight_service::{
    FightService, FIGHTS_PATH, NARRATE_PATH, RANDOM_FIGHTERS_PATH, RANDOM_LOCATION_PATH,
};
