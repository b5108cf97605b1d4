//! Service providers for the presentation layer
//!
//! The composition root installs a [`Services`] bundle as Dioxus context.
//! Components reach the back-end through the port traits it holds and never
//! see adapter types.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::ports::outbound::FightSourcePort;

#[derive(Clone)]
pub struct Services {
    pub fight: Arc<dyn FightSourcePort>,
}

impl Services {
    pub fn new(fight: Arc<dyn FightSourcePort>) -> Self {
        Self { fight }
    }
}

/// Hook to access the fight back-end from Dioxus context
pub fn use_fight_source() -> Arc<dyn FightSourcePort> {
    use_context::<Services>().fight
}
